//! Conditions that only apply to types.

use super::type_predicates::{
    assembly_containing_phrase, assembly_phrase, assignable_containing_phrase, assignable_phrase,
    has_member, interface_containing_phrase, interface_phrase, is_assignable_to,
    is_assignable_to_containing, kind_member_phrase, member_phrase, namespace_containing_phrase,
    namespace_phrase, nested_phrase,
};
use super::{architecture_condition, condition};
use crate::condition::{ArchitectureCondition, SimpleCondition};
use crate::model::{AnalyzedObject, MemberKind, Type};
use crate::pattern::NamePattern;

/// The namespace must match `pattern`.
pub fn reside_in_namespace(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&namespace_phrase(&pattern), false, move |t: &Type| {
        pattern.matches(t.namespace())
    })
}

/// The namespace must not match `pattern`.
pub fn not_reside_in_namespace(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&namespace_phrase(&pattern), true, move |t: &Type| {
        pattern.matches(t.namespace())
    })
}

/// The namespace must contain `text`.
pub fn reside_in_namespace_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&namespace_containing_phrase(&text), false, move |t: &Type| {
        t.namespace().contains(&text)
    })
}

/// The namespace must not contain `text`.
pub fn not_reside_in_namespace_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&namespace_containing_phrase(&text), true, move |t: &Type| {
        t.namespace().contains(&text)
    })
}

/// The assembly must match `pattern`.
pub fn reside_in_assembly(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&assembly_phrase(&pattern), false, move |t: &Type| {
        pattern.matches(t.assembly())
    })
}

/// The assembly must not match `pattern`.
pub fn not_reside_in_assembly(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&assembly_phrase(&pattern), true, move |t: &Type| {
        pattern.matches(t.assembly())
    })
}

/// The assembly must contain `text`.
pub fn reside_in_assembly_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&assembly_containing_phrase(&text), false, move |t: &Type| {
        t.assembly().contains(&text)
    })
}

/// The assembly must not contain `text`.
pub fn not_reside_in_assembly_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&assembly_containing_phrase(&text), true, move |t: &Type| {
        t.assembly().contains(&text)
    })
}

/// Some directly implemented interface must match `pattern`.
pub fn implement_interface(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&interface_phrase(&pattern), false, move |t: &Type| {
        t.interfaces().iter().any(|i| pattern.matches(i))
    })
}

/// No directly implemented interface may match `pattern`.
pub fn not_implement_interface(pattern: impl Into<NamePattern>) -> SimpleCondition<Type> {
    let pattern = pattern.into();
    condition(&interface_phrase(&pattern), true, move |t: &Type| {
        t.interfaces().iter().any(|i| pattern.matches(i))
    })
}

/// Some directly implemented interface must contain `text`.
pub fn implement_interface_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&interface_containing_phrase(&text), false, move |t: &Type| {
        t.interfaces().iter().any(|i| i.contains(&text))
    })
}

/// No directly implemented interface may contain `text`.
pub fn not_implement_interface_containing(text: impl Into<String>) -> SimpleCondition<Type> {
    let text = text.into();
    condition(&interface_containing_phrase(&text), true, move |t: &Type| {
        t.interfaces().iter().any(|i| i.contains(&text))
    })
}

/// The type itself or one of its transitive supertypes must match
/// `pattern`. Supertypes are resolved through the architecture under
/// check.
pub fn be_assignable_to(pattern: impl Into<NamePattern>) -> ArchitectureCondition<Type> {
    let pattern = pattern.into();
    architecture_condition(&assignable_phrase(&pattern), false, move |t: &Type, a| {
        Ok(is_assignable_to(t, &pattern, a))
    })
}

/// Negation of [`be_assignable_to`].
pub fn not_be_assignable_to(pattern: impl Into<NamePattern>) -> ArchitectureCondition<Type> {
    let pattern = pattern.into();
    architecture_condition(&assignable_phrase(&pattern), true, move |t: &Type, a| {
        Ok(is_assignable_to(t, &pattern, a))
    })
}

/// A member named `name` must be declared.
pub fn have_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    let name = name.into();
    condition(&member_phrase(&name), false, move |t: &Type| {
        t.members().iter().any(|m| m.name() == name)
    })
}

/// No member named `name` may be declared.
pub fn not_have_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    let name = name.into();
    condition(&member_phrase(&name), true, move |t: &Type| {
        t.members().iter().any(|m| m.name() == name)
    })
}

/// The full name of the type or of a transitive supertype must contain
/// `text`.
pub fn be_assignable_to_types_with_full_name_containing(
    text: impl Into<String>,
) -> ArchitectureCondition<Type> {
    let text = text.into();
    let phrase = assignable_containing_phrase(&text);
    architecture_condition(&phrase, false, move |t: &Type, a| {
        Ok(is_assignable_to_containing(t, &text, a))
    })
}

/// Negation of [`be_assignable_to_types_with_full_name_containing`].
pub fn not_be_assignable_to_types_with_full_name_containing(
    text: impl Into<String>,
) -> ArchitectureCondition<Type> {
    let text = text.into();
    let phrase = assignable_containing_phrase(&text);
    architecture_condition(&phrase, true, move |t: &Type, a| {
        Ok(is_assignable_to_containing(t, &text, a))
    })
}

fn kind_member_condition(kind: MemberKind, name: String, negated: bool) -> SimpleCondition<Type> {
    condition(&kind_member_phrase(kind, &name), negated, move |t: &Type| {
        has_member(t, kind, &name)
    })
}

/// A method named `name` must be declared.
pub fn have_method_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Method, name.into(), false)
}

/// No method named `name` may be declared.
pub fn not_have_method_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Method, name.into(), true)
}

/// A field named `name` must be declared.
pub fn have_field_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Field, name.into(), false)
}

/// No field named `name` may be declared.
pub fn not_have_field_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Field, name.into(), true)
}

/// A property named `name` must be declared.
pub fn have_property_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Property, name.into(), false)
}

/// No property named `name` may be declared.
pub fn not_have_property_member_with_name(name: impl Into<String>) -> SimpleCondition<Type> {
    kind_member_condition(MemberKind::Property, name.into(), true)
}

/// The type must be declared inside another type.
#[must_use]
pub fn be_nested() -> SimpleCondition<Type> {
    condition(&nested_phrase(), false, Type::is_nested)
}

/// The type must be top-level.
#[must_use]
pub fn not_be_nested() -> SimpleCondition<Type> {
    condition(&nested_phrase(), true, Type::is_nested)
}
