//! Compile-time selectors for the object families rules range over.

use crate::model::{AnalyzedObject, Architecture, Member, MemberKind, Type, TypeKind};

/// A family of analyzed objects a rule can be written about.
///
/// Kinds are zero-sized markers; each one names the object type it yields
/// and how to enumerate those objects from an [`Architecture`].
pub trait ObjectKind: Send + Sync + 'static {
    /// The object type this kind selects.
    type Object: AnalyzedObject + PartialEq + Clone;

    /// Capitalized plural used to start rule descriptions, e.g. `Classes`.
    const LABEL: &'static str;

    /// Enumerates the objects of this kind in model order.
    fn select(architecture: &Architecture) -> Vec<&Self::Object>;
}

/// Every type.
#[derive(Debug, Clone, Copy, Default)]
pub struct Types;

/// Types of kind [`TypeKind::Class`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Classes;

/// Types of kind [`TypeKind::Interface`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Interfaces;

/// Types of kind [`TypeKind::Attribute`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Attributes;

/// Members of kind [`MemberKind::Method`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodMembers;

fn types_of_kind(architecture: &Architecture, kind: TypeKind) -> Vec<&Type> {
    architecture
        .types()
        .iter()
        .filter(|t| t.kind() == kind)
        .collect()
}

impl ObjectKind for Types {
    type Object = Type;
    const LABEL: &'static str = "Types";

    fn select(architecture: &Architecture) -> Vec<&Type> {
        architecture.types().iter().collect()
    }
}

impl ObjectKind for Classes {
    type Object = Type;
    const LABEL: &'static str = "Classes";

    fn select(architecture: &Architecture) -> Vec<&Type> {
        types_of_kind(architecture, TypeKind::Class)
    }
}

impl ObjectKind for Interfaces {
    type Object = Type;
    const LABEL: &'static str = "Interfaces";

    fn select(architecture: &Architecture) -> Vec<&Type> {
        types_of_kind(architecture, TypeKind::Interface)
    }
}

impl ObjectKind for Attributes {
    type Object = Type;
    const LABEL: &'static str = "Attributes";

    fn select(architecture: &Architecture) -> Vec<&Type> {
        types_of_kind(architecture, TypeKind::Attribute)
    }
}

impl ObjectKind for MethodMembers {
    type Object = Member;
    const LABEL: &'static str = "Method members";

    fn select(architecture: &Architecture) -> Vec<&Member> {
        architecture
            .members()
            .filter(|m| m.kind() == MemberKind::Method)
            .collect()
    }
}
