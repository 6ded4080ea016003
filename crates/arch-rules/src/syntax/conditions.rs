//! Condition factories of the `should()` stages.

use arch_rules_core::definitions::{conditions, type_conditions};
use arch_rules_core::{
    AnalyzedObject, ArchitectureCondition, NamePattern, ObjectProvider, Type, Visibility,
};
use std::sync::Arc;

/// Per-object conditions available for every kind of object.
pub trait ObjectsShould: Sized {
    /// The object the conditions are checked on.
    type Object: AnalyzedObject + PartialEq + Clone;

    /// The stage reached after one condition.
    type Next;

    /// Attaches `condition` to the rule.
    fn with_condition(self, condition: ArchitectureCondition<Self::Object>) -> Self::Next;

    /// Each object must equal one of `objects`.
    fn be(self, objects: impl IntoIterator<Item = Self::Object>) -> Self::Next {
        self.with_condition(conditions::be(objects).into())
    }

    /// No object may equal one of `objects`.
    fn not_be(self, objects: impl IntoIterator<Item = Self::Object>) -> Self::Next {
        self.with_condition(conditions::not_be(objects).into())
    }

    /// Some dependency target must match `pattern`.
    fn depend_on(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(conditions::depend_on::<Self::Object>(pattern).into())
    }

    /// No dependency target may match `pattern`.
    fn not_depend_on(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(conditions::not_depend_on::<Self::Object>(pattern).into())
    }

    /// Some dependency must target one of the named types.
    fn depend_on_any(self, types: impl IntoIterator<Item = impl Into<String>>) -> Self::Next {
        self.with_condition(conditions::depend_on_any::<Self::Object>(types).into())
    }

    /// No dependency may target one of the named types.
    fn not_depend_on_any(self, types: impl IntoIterator<Item = impl Into<String>>) -> Self::Next {
        self.with_condition(conditions::not_depend_on_any::<Self::Object>(types).into())
    }

    /// Some dependency must target a type yielded by `provider`.
    fn depend_on_any_in(self, provider: impl ObjectProvider<Type> + 'static) -> Self::Next {
        self.with_condition(conditions::depend_on_any_in(Arc::new(provider)))
    }

    /// No dependency may target a type yielded by `provider`.
    fn not_depend_on_any_in(self, provider: impl ObjectProvider<Type> + 'static) -> Self::Next {
        self.with_condition(conditions::not_depend_on_any_in(Arc::new(provider)))
    }

    /// Every dependency must target one of the named types. An empty list
    /// means the object must have no dependencies.
    fn only_depend_on(self, types: impl IntoIterator<Item = impl Into<String>>) -> Self::Next {
        self.with_condition(conditions::only_depend_on::<Self::Object>(types).into())
    }

    /// Some dependency must target a type outside of the named types.
    fn not_only_depend_on(
        self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self::Next {
        self.with_condition(conditions::not_only_depend_on::<Self::Object>(types).into())
    }

    /// Every dependency must target a type yielded by `provider`.
    fn only_depend_on_types_in(
        self,
        provider: impl ObjectProvider<Type> + 'static,
    ) -> Self::Next {
        self.with_condition(conditions::only_depend_on_types_in(Arc::new(provider)))
    }

    /// Some dependency must target a type not yielded by `provider`.
    fn not_only_depend_on_types_in(
        self,
        provider: impl ObjectProvider<Type> + 'static,
    ) -> Self::Next {
        self.with_condition(conditions::not_only_depend_on_types_in(Arc::new(provider)))
    }

    /// The name must be exactly `name`.
    fn have_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_name::<Self::Object>(name).into())
    }

    /// The name must not be `name`.
    fn not_have_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::not_have_name::<Self::Object>(name).into())
    }

    /// The name must start with `prefix`.
    fn have_name_starting_with(self, prefix: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_name_starting_with::<Self::Object>(prefix).into())
    }

    /// The name must not start with `prefix`.
    fn not_have_name_starting_with(self, prefix: impl Into<String>) -> Self::Next {
        self.with_condition(
            conditions::not_have_name_starting_with::<Self::Object>(prefix).into(),
        )
    }

    /// The name must end with `suffix`.
    fn have_name_ending_with(self, suffix: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_name_ending_with::<Self::Object>(suffix).into())
    }

    /// The name must not end with `suffix`.
    fn not_have_name_ending_with(self, suffix: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::not_have_name_ending_with::<Self::Object>(suffix).into())
    }

    /// The name must contain `text`.
    fn have_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_name_containing::<Self::Object>(text).into())
    }

    /// The name must not contain `text`.
    fn not_have_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::not_have_name_containing::<Self::Object>(text).into())
    }

    /// The full name must be exactly `full_name`.
    fn have_full_name(self, full_name: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_full_name::<Self::Object>(full_name).into())
    }

    /// The full name must not be `full_name`.
    fn not_have_full_name(self, full_name: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::not_have_full_name::<Self::Object>(full_name).into())
    }

    /// The full name must contain `text`.
    fn have_full_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(conditions::have_full_name_containing::<Self::Object>(text).into())
    }

    /// The full name must not contain `text`.
    fn not_have_full_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(
            conditions::not_have_full_name_containing::<Self::Object>(text).into(),
        )
    }

    /// The full name must match `pattern`.
    fn have_full_name_matching(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(conditions::have_full_name_matching::<Self::Object>(pattern).into())
    }

    /// The full name must not match `pattern`.
    fn not_have_full_name_matching(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(
            conditions::not_have_full_name_matching::<Self::Object>(pattern).into(),
        )
    }

    /// Each object must be public.
    fn be_public(self) -> Self::Next {
        self.with_condition(conditions::visibility_is::<Self::Object>(Visibility::Public).into())
    }

    /// No object may be public.
    fn not_be_public(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::Public).into(),
        )
    }

    /// Each object must be private.
    fn be_private(self) -> Self::Next {
        self.with_condition(conditions::visibility_is::<Self::Object>(Visibility::Private).into())
    }

    /// No object may be private.
    fn not_be_private(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::Private).into(),
        )
    }

    /// Each object must be protected.
    fn be_protected(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is::<Self::Object>(Visibility::Protected).into(),
        )
    }

    /// No object may be protected.
    fn not_be_protected(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::Protected).into(),
        )
    }

    /// Each object must be internal.
    fn be_internal(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is::<Self::Object>(Visibility::Internal).into(),
        )
    }

    /// No object may be internal.
    fn not_be_internal(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::Internal).into(),
        )
    }

    /// Each object must be protected internal.
    fn be_protected_internal(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is::<Self::Object>(Visibility::ProtectedInternal).into(),
        )
    }

    /// No object may be protected internal.
    fn not_be_protected_internal(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::ProtectedInternal).into(),
        )
    }

    /// Each object must be private protected.
    fn be_private_protected(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is::<Self::Object>(Visibility::PrivateProtected).into(),
        )
    }

    /// No object may be private protected.
    fn not_be_private_protected(self) -> Self::Next {
        self.with_condition(
            conditions::visibility_is_not::<Self::Object>(Visibility::PrivateProtected).into(),
        )
    }
}

/// Conditions that only make sense for types.
pub trait TypesShould: ObjectsShould<Object = Type> {
    /// The namespace must match `pattern`.
    fn reside_in_namespace(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::reside_in_namespace(pattern).into())
    }

    /// The namespace must not match `pattern`.
    fn not_reside_in_namespace(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::not_reside_in_namespace(pattern).into())
    }

    /// The namespace must contain `text`.
    fn reside_in_namespace_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::reside_in_namespace_containing(text).into())
    }

    /// The namespace must not contain `text`.
    fn not_reside_in_namespace_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_reside_in_namespace_containing(text).into())
    }

    /// The assembly must match `pattern`.
    fn reside_in_assembly(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::reside_in_assembly(pattern).into())
    }

    /// The assembly must not match `pattern`.
    fn not_reside_in_assembly(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::not_reside_in_assembly(pattern).into())
    }

    /// The assembly must contain `text`.
    fn reside_in_assembly_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::reside_in_assembly_containing(text).into())
    }

    /// The assembly must not contain `text`.
    fn not_reside_in_assembly_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_reside_in_assembly_containing(text).into())
    }

    /// Some directly implemented interface must match `pattern`.
    fn implement_interface(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::implement_interface(pattern).into())
    }

    /// No directly implemented interface may match `pattern`.
    fn not_implement_interface(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::not_implement_interface(pattern).into())
    }

    /// Some directly implemented interface must contain `text`.
    fn implement_interface_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::implement_interface_containing(text).into())
    }

    /// No directly implemented interface may contain `text`.
    fn not_implement_interface_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_implement_interface_containing(text).into())
    }

    /// The type must be assignable to a type matching `pattern`.
    fn be_assignable_to(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::be_assignable_to(pattern))
    }

    /// The type must not be assignable to any type matching `pattern`.
    fn not_be_assignable_to(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_condition(type_conditions::not_be_assignable_to(pattern))
    }

    /// A member named `name` must be declared.
    fn have_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::have_member_with_name(name).into())
    }

    /// No member named `name` may be declared.
    fn not_have_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_have_member_with_name(name).into())
    }

    /// The full name of the type or a supertype must contain `text`.
    fn be_assignable_to_types_with_full_name_containing(
        self,
        text: impl Into<String>,
    ) -> Self::Next {
        self.with_condition(
            type_conditions::be_assignable_to_types_with_full_name_containing(text),
        )
    }

    /// Neither the type nor a supertype may have a full name containing
    /// `text`.
    fn not_be_assignable_to_types_with_full_name_containing(
        self,
        text: impl Into<String>,
    ) -> Self::Next {
        self.with_condition(
            type_conditions::not_be_assignable_to_types_with_full_name_containing(text),
        )
    }

    /// A method named `name` must be declared.
    fn have_method_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::have_method_member_with_name(name).into())
    }

    /// No method named `name` may be declared.
    fn not_have_method_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_have_method_member_with_name(name).into())
    }

    /// A field named `name` must be declared.
    fn have_field_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::have_field_member_with_name(name).into())
    }

    /// No field named `name` may be declared.
    fn not_have_field_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_have_field_member_with_name(name).into())
    }

    /// A property named `name` must be declared.
    fn have_property_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::have_property_member_with_name(name).into())
    }

    /// No property named `name` may be declared.
    fn not_have_property_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_condition(type_conditions::not_have_property_member_with_name(name).into())
    }

    /// The type must be nested.
    fn be_nested(self) -> Self::Next {
        self.with_condition(type_conditions::be_nested().into())
    }

    /// The type must be top-level.
    fn not_be_nested(self) -> Self::Next {
        self.with_condition(type_conditions::not_be_nested().into())
    }
}

impl<S: ObjectsShould<Object = Type>> TypesShould for S {}
