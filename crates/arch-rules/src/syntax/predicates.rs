//! Predicate factories of the `that()` stages.

use arch_rules_core::definitions::{predicates, type_predicates};
use arch_rules_core::{AnalyzedObject, NamePattern, ObjectProvider, Predicate, Type, Visibility};
use std::sync::Arc;

/// Predicates available for every kind of object.
///
/// Each call narrows the objects the rule is about and moves on to
/// [`ObjectsThat::Next`].
pub trait ObjectsThat: Sized {
    /// The object the predicates look at.
    type Object: AnalyzedObject + PartialEq + Clone;

    /// The stage reached after one predicate.
    type Next;

    /// Adds `predicate` to the filter.
    fn with_predicate(self, predicate: Predicate<Self::Object>) -> Self::Next;

    /// Objects equal to one of `objects`.
    fn are(self, objects: impl IntoIterator<Item = Self::Object>) -> Self::Next {
        self.with_predicate(predicates::are(objects))
    }

    /// Objects equal to none of `objects`.
    fn are_not(self, objects: impl IntoIterator<Item = Self::Object>) -> Self::Next {
        self.with_predicate(predicates::are_not(objects))
    }

    /// Objects with a dependency whose target matches `pattern`.
    fn depend_on(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(predicates::depend_on(pattern))
    }

    /// Objects without a dependency whose target matches `pattern`.
    fn do_not_depend_on(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(predicates::do_not_depend_on(pattern))
    }

    /// Objects depending on one of the named types.
    fn depend_on_any(self, types: impl IntoIterator<Item = impl Into<String>>) -> Self::Next {
        self.with_predicate(predicates::depend_on_any(types))
    }

    /// Objects depending on none of the named types.
    fn do_not_depend_on_any(
        self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self::Next {
        self.with_predicate(predicates::do_not_depend_on_any(types))
    }

    /// Objects depending on a type yielded by `provider`.
    fn depend_on_any_in(self, provider: impl ObjectProvider<Type> + 'static) -> Self::Next {
        self.with_predicate(predicates::depend_on_any_in(Arc::new(provider)))
    }

    /// Objects depending on no type yielded by `provider`.
    fn do_not_depend_on_any_in(
        self,
        provider: impl ObjectProvider<Type> + 'static,
    ) -> Self::Next {
        self.with_predicate(predicates::do_not_depend_on_any_in(Arc::new(provider)))
    }

    /// Objects whose every dependency targets one of the named types.
    fn only_depend_on(self, types: impl IntoIterator<Item = impl Into<String>>) -> Self::Next {
        self.with_predicate(predicates::only_depend_on(types))
    }

    /// Objects with a dependency outside of the named types.
    fn do_not_only_depend_on(
        self,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self::Next {
        self.with_predicate(predicates::do_not_only_depend_on(types))
    }

    /// Objects whose every dependency targets a type yielded by `provider`.
    fn only_depend_on_types_in(
        self,
        provider: impl ObjectProvider<Type> + 'static,
    ) -> Self::Next {
        self.with_predicate(predicates::only_depend_on_types_in(Arc::new(provider)))
    }

    /// Objects with a dependency on a type not yielded by `provider`.
    fn do_not_only_depend_on_types_in(
        self,
        provider: impl ObjectProvider<Type> + 'static,
    ) -> Self::Next {
        self.with_predicate(predicates::do_not_only_depend_on_types_in(Arc::new(provider)))
    }

    /// Objects named exactly `name`.
    fn have_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_name(name))
    }

    /// Objects not named `name`.
    fn do_not_have_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_name(name))
    }

    /// Objects whose name starts with `prefix`.
    fn have_name_starting_with(self, prefix: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_name_starting_with(prefix))
    }

    /// Objects whose name does not start with `prefix`.
    fn do_not_have_name_starting_with(self, prefix: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_name_starting_with(prefix))
    }

    /// Objects whose name ends with `suffix`.
    fn have_name_ending_with(self, suffix: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_name_ending_with(suffix))
    }

    /// Objects whose name does not end with `suffix`.
    fn do_not_have_name_ending_with(self, suffix: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_name_ending_with(suffix))
    }

    /// Objects whose name contains `text`.
    fn have_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_name_containing(text))
    }

    /// Objects whose name does not contain `text`.
    fn do_not_have_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_name_containing(text))
    }

    /// Objects whose full name is exactly `full_name`.
    fn have_full_name(self, full_name: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_full_name(full_name))
    }

    /// Objects whose full name is not `full_name`.
    fn do_not_have_full_name(self, full_name: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_full_name(full_name))
    }

    /// Objects whose full name contains `text`.
    fn have_full_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::have_full_name_containing(text))
    }

    /// Objects whose full name does not contain `text`.
    fn do_not_have_full_name_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_full_name_containing(text))
    }

    /// Objects whose full name matches `pattern`.
    fn have_full_name_matching(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(predicates::have_full_name_matching(pattern))
    }

    /// Objects whose full name does not match `pattern`.
    fn do_not_have_full_name_matching(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(predicates::do_not_have_full_name_matching(pattern))
    }

    /// Public objects.
    fn are_public(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::Public))
    }

    /// Objects that are not public.
    fn are_not_public(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(Visibility::Public))
    }

    /// Private objects.
    fn are_private(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::Private))
    }

    /// Objects that are not private.
    fn are_not_private(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(Visibility::Private))
    }

    /// Protected objects.
    fn are_protected(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::Protected))
    }

    /// Objects that are not protected.
    fn are_not_protected(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(Visibility::Protected))
    }

    /// Internal objects.
    fn are_internal(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::Internal))
    }

    /// Objects that are not internal.
    fn are_not_internal(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(Visibility::Internal))
    }

    /// Protected internal objects.
    fn are_protected_internal(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::ProtectedInternal))
    }

    /// Objects that are not protected internal.
    fn are_not_protected_internal(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(
            Visibility::ProtectedInternal,
        ))
    }

    /// Private protected objects.
    fn are_private_protected(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is(Visibility::PrivateProtected))
    }

    /// Objects that are not private protected.
    fn are_not_private_protected(self) -> Self::Next {
        self.with_predicate(predicates::visibility_is_not(
            Visibility::PrivateProtected,
        ))
    }
}

/// Predicates that only make sense for types.
pub trait TypesThat: ObjectsThat<Object = Type> {
    /// Types whose namespace matches `pattern`.
    fn reside_in_namespace(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::reside_in_namespace(pattern))
    }

    /// Types whose namespace does not match `pattern`.
    fn do_not_reside_in_namespace(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_reside_in_namespace(pattern))
    }

    /// Types whose namespace contains `text`.
    fn reside_in_namespace_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::reside_in_namespace_containing(text))
    }

    /// Types whose namespace does not contain `text`.
    fn do_not_reside_in_namespace_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_reside_in_namespace_containing(text))
    }

    /// Types whose assembly matches `pattern`.
    fn reside_in_assembly(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::reside_in_assembly(pattern))
    }

    /// Types whose assembly does not match `pattern`.
    fn do_not_reside_in_assembly(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_reside_in_assembly(pattern))
    }

    /// Types whose assembly contains `text`.
    fn reside_in_assembly_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::reside_in_assembly_containing(text))
    }

    /// Types whose assembly does not contain `text`.
    fn do_not_reside_in_assembly_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_reside_in_assembly_containing(text))
    }

    /// Types directly implementing an interface matching `pattern`.
    fn implement_interface(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::implement_interface(pattern))
    }

    /// Types directly implementing no interface matching `pattern`.
    fn do_not_implement_interface(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_implement_interface(pattern))
    }

    /// Types directly implementing an interface whose name contains `text`.
    fn implement_interface_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::implement_interface_containing(text))
    }

    /// Types directly implementing no interface whose name contains `text`.
    fn do_not_implement_interface_containing(self, text: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_implement_interface_containing(text))
    }

    /// Types that are, extend or implement a type matching `pattern`.
    fn are_assignable_to(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::are_assignable_to(pattern))
    }

    /// Types not assignable to any type matching `pattern`.
    fn are_not_assignable_to(self, pattern: impl Into<NamePattern>) -> Self::Next {
        self.with_predicate(type_predicates::are_not_assignable_to(pattern))
    }

    /// Types declaring a member named `name`.
    fn have_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::have_member_with_name(name))
    }

    /// Types declaring no member named `name`.
    fn do_not_have_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_have_member_with_name(name))
    }

    /// Types whose full name, or that of a supertype, contains `text`.
    fn are_assignable_to_types_with_full_name_containing(
        self,
        text: impl Into<String>,
    ) -> Self::Next {
        self.with_predicate(
            type_predicates::are_assignable_to_types_with_full_name_containing(text),
        )
    }

    /// Types neither named nor derived from a type whose full name
    /// contains `text`.
    fn are_not_assignable_to_types_with_full_name_containing(
        self,
        text: impl Into<String>,
    ) -> Self::Next {
        self.with_predicate(
            type_predicates::are_not_assignable_to_types_with_full_name_containing(text),
        )
    }

    /// Types declaring a method named `name`.
    fn have_method_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::have_method_member_with_name(name))
    }

    /// Types declaring no method named `name`.
    fn do_not_have_method_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_have_method_member_with_name(name))
    }

    /// Types declaring a field named `name`.
    fn have_field_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::have_field_member_with_name(name))
    }

    /// Types declaring no field named `name`.
    fn do_not_have_field_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_have_field_member_with_name(name))
    }

    /// Types declaring a property named `name`.
    fn have_property_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::have_property_member_with_name(name))
    }

    /// Types declaring no property named `name`.
    fn do_not_have_property_member_with_name(self, name: impl Into<String>) -> Self::Next {
        self.with_predicate(type_predicates::do_not_have_property_member_with_name(name))
    }

    /// Nested types.
    fn are_nested(self) -> Self::Next {
        self.with_predicate(type_predicates::are_nested())
    }

    /// Top-level types.
    fn are_not_nested(self) -> Self::Next {
        self.with_predicate(type_predicates::are_not_nested())
    }
}

impl<S: ObjectsThat<Object = Type>> TypesThat for S {}
