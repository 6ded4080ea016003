//! Predicates that only apply to types.

use super::{architecture_predicate, predicate, quoted, Phrase};
use crate::model::{AnalyzedObject, Architecture, MemberKind, Type};
use crate::pattern::NamePattern;
use crate::predicate::Predicate;

pub(super) fn namespace_phrase(pattern: &NamePattern) -> Phrase {
    Phrase::regular("reside in namespace", quoted(pattern.as_str()))
}

pub(super) fn namespace_containing_phrase(text: &str) -> Phrase {
    Phrase::regular("reside in namespace", format!("containing {}", quoted(text)))
}

pub(super) fn assembly_phrase(pattern: &NamePattern) -> Phrase {
    Phrase::regular("reside in assembly", quoted(pattern.as_str()))
}

pub(super) fn assembly_containing_phrase(text: &str) -> Phrase {
    Phrase::regular("reside in assembly", format!("containing {}", quoted(text)))
}

pub(super) fn interface_phrase(pattern: &NamePattern) -> Phrase {
    Phrase::regular("implement interface", quoted(pattern.as_str()))
}

pub(super) fn interface_containing_phrase(text: &str) -> Phrase {
    Phrase::regular("implement interface", format!("containing {}", quoted(text)))
}

pub(super) fn assignable_phrase(pattern: &NamePattern) -> Phrase {
    Phrase::be(format!("assignable to {}", quoted(pattern.as_str())))
}

pub(super) fn member_phrase(name: &str) -> Phrase {
    Phrase::regular("have member with name", quoted(name))
}

pub(super) fn kind_member_phrase(kind: MemberKind, name: &str) -> Phrase {
    Phrase::regular(
        "have",
        format!("{} member with name {}", kind.as_str(), quoted(name)),
    )
}

pub(super) fn assignable_containing_phrase(text: &str) -> Phrase {
    Phrase::be(format!(
        "assignable to types with full name containing {}",
        quoted(text)
    ))
}

pub(super) fn nested_phrase() -> Phrase {
    Phrase::be("nested")
}

/// True if `ty` or any of its supertypes matches `pattern`.
pub(super) fn is_assignable_to(
    ty: &Type,
    pattern: &NamePattern,
    architecture: &Architecture,
) -> bool {
    is_assignable_where(ty, architecture, |name| pattern.matches(name))
}

/// True if the full name of `ty` or of any of its supertypes contains
/// `text`.
pub(super) fn is_assignable_to_containing(
    ty: &Type,
    text: &str,
    architecture: &Architecture,
) -> bool {
    is_assignable_where(ty, architecture, |name| name.contains(text))
}

fn is_assignable_where(
    ty: &Type,
    architecture: &Architecture,
    pick: impl Fn(&str) -> bool,
) -> bool {
    pick(ty.full_name()) || architecture.supertypes_of(ty).iter().any(|&s| pick(s))
}

/// True if `ty` declares a member of `kind` named `name`.
pub(super) fn has_member(ty: &Type, kind: MemberKind, name: &str) -> bool {
    ty.members()
        .iter()
        .any(|m| m.kind() == kind && m.name() == name)
}

/// Types whose namespace matches `pattern`.
pub fn reside_in_namespace(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&namespace_phrase(&pattern), false, move |t: &Type| {
        pattern.matches(t.namespace())
    })
}

/// Types whose namespace does not match `pattern`.
pub fn do_not_reside_in_namespace(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&namespace_phrase(&pattern), true, move |t: &Type| {
        pattern.matches(t.namespace())
    })
}

/// Types whose namespace contains `text`.
pub fn reside_in_namespace_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&namespace_containing_phrase(&text), false, move |t: &Type| {
        t.namespace().contains(&text)
    })
}

/// Types whose namespace does not contain `text`.
pub fn do_not_reside_in_namespace_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&namespace_containing_phrase(&text), true, move |t: &Type| {
        t.namespace().contains(&text)
    })
}

/// Types whose assembly matches `pattern`.
pub fn reside_in_assembly(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&assembly_phrase(&pattern), false, move |t: &Type| {
        pattern.matches(t.assembly())
    })
}

/// Types whose assembly does not match `pattern`.
pub fn do_not_reside_in_assembly(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&assembly_phrase(&pattern), true, move |t: &Type| {
        pattern.matches(t.assembly())
    })
}

/// Types whose assembly contains `text`.
pub fn reside_in_assembly_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&assembly_containing_phrase(&text), false, move |t: &Type| {
        t.assembly().contains(&text)
    })
}

/// Types whose assembly does not contain `text`.
pub fn do_not_reside_in_assembly_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&assembly_containing_phrase(&text), true, move |t: &Type| {
        t.assembly().contains(&text)
    })
}

/// Types directly implementing an interface matching `pattern`.
pub fn implement_interface(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&interface_phrase(&pattern), false, move |t: &Type| {
        t.interfaces().iter().any(|i| pattern.matches(i))
    })
}

/// Types directly implementing no interface matching `pattern`.
pub fn do_not_implement_interface(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    predicate(&interface_phrase(&pattern), true, move |t: &Type| {
        t.interfaces().iter().any(|i| pattern.matches(i))
    })
}

/// Types directly implementing an interface whose full name contains
/// `text`.
pub fn implement_interface_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&interface_containing_phrase(&text), false, move |t: &Type| {
        t.interfaces().iter().any(|i| i.contains(&text))
    })
}

/// Negation of [`implement_interface_containing`].
pub fn do_not_implement_interface_containing(text: impl Into<String>) -> Predicate<Type> {
    let text = text.into();
    predicate(&interface_containing_phrase(&text), true, move |t: &Type| {
        t.interfaces().iter().any(|i| i.contains(&text))
    })
}

/// Types that are, extend or implement (transitively) a type matching
/// `pattern`.
pub fn are_assignable_to(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    architecture_predicate(&assignable_phrase(&pattern), false, move |t: &Type, a| {
        Ok(is_assignable_to(t, &pattern, a))
    })
}

/// Negation of [`are_assignable_to`].
pub fn are_not_assignable_to(pattern: impl Into<NamePattern>) -> Predicate<Type> {
    let pattern = pattern.into();
    architecture_predicate(&assignable_phrase(&pattern), true, move |t: &Type, a| {
        Ok(is_assignable_to(t, &pattern, a))
    })
}

/// Types declaring a member named `name`.
pub fn have_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    let name = name.into();
    predicate(&member_phrase(&name), false, move |t: &Type| {
        t.members().iter().any(|m| m.name() == name)
    })
}

/// Types declaring no member named `name`.
pub fn do_not_have_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    let name = name.into();
    predicate(&member_phrase(&name), true, move |t: &Type| {
        t.members().iter().any(|m| m.name() == name)
    })
}

/// Types whose full name, or that of a transitive supertype, contains
/// `text`.
pub fn are_assignable_to_types_with_full_name_containing(
    text: impl Into<String>,
) -> Predicate<Type> {
    let text = text.into();
    let phrase = assignable_containing_phrase(&text);
    architecture_predicate(&phrase, false, move |t: &Type, a| {
        Ok(is_assignable_to_containing(t, &text, a))
    })
}

/// Negation of [`are_assignable_to_types_with_full_name_containing`].
pub fn are_not_assignable_to_types_with_full_name_containing(
    text: impl Into<String>,
) -> Predicate<Type> {
    let text = text.into();
    let phrase = assignable_containing_phrase(&text);
    architecture_predicate(&phrase, true, move |t: &Type, a| {
        Ok(is_assignable_to_containing(t, &text, a))
    })
}

fn kind_member_predicate(kind: MemberKind, name: String, negated: bool) -> Predicate<Type> {
    predicate(&kind_member_phrase(kind, &name), negated, move |t: &Type| {
        has_member(t, kind, &name)
    })
}

/// Types declaring a method named `name`.
pub fn have_method_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Method, name.into(), false)
}

/// Types declaring no method named `name`.
pub fn do_not_have_method_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Method, name.into(), true)
}

/// Types declaring a field named `name`.
pub fn have_field_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Field, name.into(), false)
}

/// Types declaring no field named `name`.
pub fn do_not_have_field_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Field, name.into(), true)
}

/// Types declaring a property named `name`.
pub fn have_property_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Property, name.into(), false)
}

/// Types declaring no property named `name`.
pub fn do_not_have_property_member_with_name(name: impl Into<String>) -> Predicate<Type> {
    kind_member_predicate(MemberKind::Property, name.into(), true)
}

/// Types declared inside another type.
#[must_use]
pub fn are_nested() -> Predicate<Type> {
    predicate(&nested_phrase(), false, Type::is_nested)
}

/// Top-level types.
#[must_use]
pub fn are_not_nested() -> Predicate<Type> {
    predicate(&nested_phrase(), true, Type::is_nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Architecture, Member};

    fn architecture() -> Architecture {
        Architecture::new([
            Type::interface("App.Data.IRepository"),
            Type::class("App.Data.RepositoryBase").implementing("App.Data.IRepository"),
            Type::class("App.Data.UserRepository")
                .extending("App.Data.RepositoryBase")
                .in_assembly("App.Data")
                .with_member(Member::method("Save"))
                .with_member(Member::field("connection"))
                .with_member(Member::property("Name")),
            Type::class("App.Web.Controller")
                .in_assembly("App.Web")
                .implementing("App.Web.IController"),
            Type::class("App.Web.Controller+Options").nested(),
        ])
    }

    #[test]
    fn every_negation_is_the_complement() {
        let architecture = architecture();
        let pairs = vec![
            (reside_in_namespace("App.*"), do_not_reside_in_namespace("App.*")),
            (
                reside_in_namespace_containing("Web"),
                do_not_reside_in_namespace_containing("Web"),
            ),
            (reside_in_assembly("App.Data"), do_not_reside_in_assembly("App.Data")),
            (
                reside_in_assembly_containing("Web"),
                do_not_reside_in_assembly_containing("Web"),
            ),
            (
                implement_interface("**.IRepository"),
                do_not_implement_interface("**.IRepository"),
            ),
            (
                implement_interface_containing("Controller"),
                do_not_implement_interface_containing("Controller"),
            ),
            (
                are_assignable_to("**.IRepository"),
                are_not_assignable_to("**.IRepository"),
            ),
            (have_member_with_name("Save"), do_not_have_member_with_name("Save")),
            (
                have_method_member_with_name("Save"),
                do_not_have_method_member_with_name("Save"),
            ),
            (
                have_field_member_with_name("connection"),
                do_not_have_field_member_with_name("connection"),
            ),
            (
                have_property_member_with_name("Name"),
                do_not_have_property_member_with_name("Name"),
            ),
            (
                are_assignable_to_types_with_full_name_containing("IRepo"),
                are_not_assignable_to_types_with_full_name_containing("IRepo"),
            ),
            (are_nested(), are_not_nested()),
        ];
        for (positive, negative) in &pairs {
            for ty in architecture.types() {
                assert_eq!(
                    positive.test(ty, &architecture),
                    negative.test(ty, &architecture).map(|held| !held),
                    "{} on {}",
                    positive.description(),
                    ty.full_name()
                );
            }
        }
    }

    #[test]
    fn assignability_is_transitive() {
        let architecture = architecture();
        let assignable = are_assignable_to("App.Data.IRepository");
        let user_repo = architecture.type_of("App.Data.UserRepository").unwrap();
        let controller = architecture.type_of("App.Web.Controller").unwrap();

        assert_eq!(assignable.test(user_repo, &architecture), Ok(true));
        assert_eq!(assignable.test(controller, &architecture), Ok(false));
        assert_eq!(
            assignable.description(),
            "are assignable to \"App.Data.IRepository\""
        );
    }

    #[test]
    fn member_predicates_respect_member_kind() {
        let architecture = architecture();
        let user_repo = architecture.type_of("App.Data.UserRepository").unwrap();

        let field = have_field_member_with_name("connection");
        let method = have_method_member_with_name("connection");
        let property = have_property_member_with_name("Name");
        assert_eq!(field.test(user_repo, &architecture), Ok(true));
        assert_eq!(method.test(user_repo, &architecture), Ok(false));
        assert_eq!(property.test(user_repo, &architecture), Ok(true));
        assert_eq!(
            property.description(),
            "have property member with name \"Name\""
        );
        assert_eq!(
            do_not_have_field_member_with_name("connection").fail_description(),
            "does have field member with name \"connection\""
        );
    }

    #[test]
    fn assignable_by_substring_walks_supertypes() {
        let architecture = architecture();
        let repository = are_assignable_to_types_with_full_name_containing("IRepo");
        let user_repo = architecture.type_of("App.Data.UserRepository").unwrap();
        let controller = architecture.type_of("App.Web.Controller").unwrap();

        assert_eq!(repository.test(user_repo, &architecture), Ok(true));
        assert_eq!(repository.test(controller, &architecture), Ok(false));
        assert_eq!(
            repository.description(),
            "are assignable to types with full name containing \"IRepo\""
        );
    }

    #[test]
    fn namespace_texts() {
        assert_eq!(
            reside_in_namespace("App.Data").description(),
            "reside in namespace \"App.Data\""
        );
        assert_eq!(
            do_not_reside_in_namespace_containing("Web").description(),
            "do not reside in namespace containing \"Web\""
        );
        assert_eq!(are_not_nested().fail_description(), "is nested");
    }
}
