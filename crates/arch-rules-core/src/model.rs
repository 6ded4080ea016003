//! Read-only codebase model that rules are evaluated against.
//!
//! The model is produced by an external loader. Nothing in this crate
//! mutates an [`Architecture`] once it has been built, so a single
//! snapshot can be shared between threads evaluating independent rules.

use crate::pattern::NamePattern;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::warn;

// ────────────────────────────────────────────
// Classifications
// ────────────────────────────────────────────

/// Declared accessibility of a type or member.
///
/// The six values are pairwise exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    /// Visible only inside the declaring type.
    Private,
    /// Visible everywhere.
    Public,
    /// Visible to the declaring type and its subtypes.
    Protected,
    /// Visible inside the declaring assembly.
    Internal,
    /// Visible inside the declaring assembly or to subtypes.
    ProtectedInternal,
    /// Visible to subtypes inside the declaring assembly.
    PrivateProtected,
}

impl Visibility {
    /// All visibility values, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Private,
        Self::Public,
        Self::Protected,
        Self::Internal,
        Self::ProtectedInternal,
        Self::PrivateProtected,
    ];

    /// Returns the human-readable keyword(s) for this visibility.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Internal => "internal",
            Self::ProtectedInternal => "protected internal",
            Self::PrivateProtected => "private protected",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The flavour of a [`Type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A reference type with implementation.
    Class,
    /// A contract without implementation.
    Interface,
    /// A value type.
    Struct,
    /// An enumeration.
    Enum,
    /// A class used as metadata on other objects.
    Attribute,
}

/// How a dependency edge came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    /// A call into a member of the target.
    MethodCall,
    /// The origin extends the target.
    Inheritance,
    /// The origin implements the target interface.
    InterfaceImplementation,
    /// A field or property of the target's type.
    FieldType,
    /// The target is used as an attribute.
    AttributeUsage,
    /// Any other reference.
    Other,
}

/// A dependency edge pointing at a type by its full name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dependency {
    kind: DependencyKind,
    target: String,
}

impl Dependency {
    /// Creates a new dependency on `target`.
    #[must_use]
    pub fn new(kind: DependencyKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    /// Returns the kind of this dependency.
    #[must_use]
    pub fn kind(&self) -> DependencyKind {
        self.kind
    }

    /// Returns the full name of the target type.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

// ────────────────────────────────────────────
// Analyzed objects
// ────────────────────────────────────────────

/// Capabilities shared by every entity a rule can be written about.
pub trait AnalyzedObject: fmt::Debug + Send + Sync + 'static {
    /// Short name, e.g. `Service`.
    fn name(&self) -> &str;

    /// Fully-qualified name, e.g. `App.Service`. Unique within an
    /// [`Architecture`].
    fn full_name(&self) -> &str;

    /// Declared accessibility.
    fn visibility(&self) -> Visibility;

    /// Outgoing dependencies in discovery order.
    fn dependencies(&self) -> &[Dependency];

    /// Full names of the attribute types applied to this object.
    fn attributes(&self) -> &[String];

    /// Returns true if any dependency target matches `pattern`.
    fn depends_on(&self, pattern: &NamePattern) -> bool {
        self.dependencies()
            .iter()
            .any(|d| pattern.matches(d.target()))
    }

    /// Returns true if any dependency targets exactly `full_name`.
    fn depends_on_type(&self, full_name: &str) -> bool {
        self.dependencies().iter().any(|d| d.target() == full_name)
    }

    /// Returns true if the attribute `full_name` is applied to this object.
    fn has_attribute(&self, full_name: &str) -> bool {
        self.attributes().iter().any(|a| a == full_name)
    }
}

/// The kind of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    /// A method or constructor.
    Method,
    /// A field.
    Field,
    /// A property.
    Property,
}

impl MemberKind {
    /// Returns the lowercase name used in rule texts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Method => "method",
            Self::Field => "field",
            Self::Property => "property",
        }
    }
}

/// A member declared by a [`Type`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    name: String,
    full_name: String,
    kind: MemberKind,
    visibility: Visibility,
    declaring_type: String,
    dependencies: Vec<Dependency>,
    attributes: Vec<String>,
}

impl Member {
    /// Creates a public member. The full name is fixed once the member is
    /// attached with [`Type::with_member`].
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MemberKind) -> Self {
        let name = name.into();
        Self {
            full_name: name.clone(),
            name,
            kind,
            visibility: Visibility::Public,
            declaring_type: String::new(),
            dependencies: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Shorthand for a method member.
    #[must_use]
    pub fn method(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Method)
    }

    /// Shorthand for a field member.
    #[must_use]
    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Field)
    }

    /// Shorthand for a property member.
    #[must_use]
    pub fn property(name: impl Into<String>) -> Self {
        Self::new(name, MemberKind::Property)
    }

    /// Sets the declared visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Adds a dependency edge.
    #[must_use]
    pub fn depending_on(mut self, kind: DependencyKind, target: impl Into<String>) -> Self {
        self.dependencies.push(Dependency::new(kind, target));
        self
    }

    /// Applies an attribute, recording the matching dependency.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        self.dependencies
            .push(Dependency::new(DependencyKind::AttributeUsage, attribute.clone()));
        self.attributes.push(attribute);
        self
    }

    /// Returns the member kind.
    #[must_use]
    pub fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Returns the full name of the declaring type.
    #[must_use]
    pub fn declaring_type(&self) -> &str {
        &self.declaring_type
    }
}

impl AnalyzedObject for Member {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl PartialEq for Member {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Member {}

/// A type of the analyzed codebase.
///
/// Equality is identity: two values are equal iff they have the same full
/// name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type {
    name: String,
    full_name: String,
    namespace: String,
    assembly: String,
    kind: TypeKind,
    visibility: Visibility,
    base_type: Option<String>,
    interfaces: Vec<String>,
    nested: bool,
    attributes: Vec<String>,
    dependencies: Vec<Dependency>,
    members: Vec<Member>,
}

impl Type {
    /// Creates a public, top-level type. The namespace is everything before
    /// the last `.` of `full_name`.
    #[must_use]
    pub fn new(full_name: impl Into<String>, kind: TypeKind) -> Self {
        let full_name = full_name.into();
        let (namespace, name) = match full_name.rsplit_once('.') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), full_name.clone()),
        };
        Self {
            name,
            full_name,
            namespace,
            assembly: String::new(),
            kind,
            visibility: Visibility::Public,
            base_type: None,
            interfaces: Vec::new(),
            nested: false,
            attributes: Vec::new(),
            dependencies: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Shorthand for a class.
    #[must_use]
    pub fn class(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Class)
    }

    /// Shorthand for an interface.
    #[must_use]
    pub fn interface(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Interface)
    }

    /// Shorthand for an attribute class.
    #[must_use]
    pub fn attribute(full_name: impl Into<String>) -> Self {
        Self::new(full_name, TypeKind::Attribute)
    }

    /// Sets the declared visibility.
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Sets the containing assembly.
    #[must_use]
    pub fn in_assembly(mut self, assembly: impl Into<String>) -> Self {
        self.assembly = assembly.into();
        self
    }

    /// Marks the type as nested inside another type.
    #[must_use]
    pub fn nested(mut self) -> Self {
        self.nested = true;
        self
    }

    /// Sets the base type, recording an inheritance dependency.
    #[must_use]
    pub fn extending(mut self, base: impl Into<String>) -> Self {
        let base = base.into();
        self.dependencies
            .push(Dependency::new(DependencyKind::Inheritance, base.clone()));
        self.base_type = Some(base);
        self
    }

    /// Adds an implemented interface, recording the matching dependency.
    #[must_use]
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        let interface = interface.into();
        self.dependencies.push(Dependency::new(
            DependencyKind::InterfaceImplementation,
            interface.clone(),
        ));
        self.interfaces.push(interface);
        self
    }

    /// Applies an attribute, recording the matching dependency.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        self.dependencies
            .push(Dependency::new(DependencyKind::AttributeUsage, attribute.clone()));
        self.attributes.push(attribute);
        self
    }

    /// Adds a dependency edge.
    #[must_use]
    pub fn depending_on(mut self, kind: DependencyKind, target: impl Into<String>) -> Self {
        self.dependencies.push(Dependency::new(kind, target));
        self
    }

    /// Adds a member declared by this type.
    #[must_use]
    pub fn with_member(mut self, mut member: Member) -> Self {
        member.full_name = format!("{}.{}", self.full_name, member.name);
        member.declaring_type.clone_from(&self.full_name);
        self.members.push(member);
        self
    }

    /// Returns the namespace, empty for the global namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the containing assembly, empty when unknown.
    #[must_use]
    pub fn assembly(&self) -> &str {
        &self.assembly
    }

    /// Returns the type kind.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the direct base type, if any.
    #[must_use]
    pub fn base_type(&self) -> Option<&str> {
        self.base_type.as_deref()
    }

    /// Returns the directly implemented interfaces.
    #[must_use]
    pub fn interfaces(&self) -> &[String] {
        &self.interfaces
    }

    /// Returns true if the type is declared inside another type.
    #[must_use]
    pub fn is_nested(&self) -> bool {
        self.nested
    }

    /// Returns the declared members.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }
}

impl AnalyzedObject for Type {
    fn name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> &str {
        &self.full_name
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl PartialEq for Type {
    fn eq(&self, other: &Self) -> bool {
        self.full_name == other.full_name
    }
}

impl Eq for Type {}

impl std::hash::Hash for Type {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.full_name.hash(state);
    }
}

// ────────────────────────────────────────────
// Architecture
// ────────────────────────────────────────────

/// Immutable snapshot of every analyzed type of one analysis run.
///
/// Types keep the order in which the loader discovered them; every
/// query preserves that order.
#[derive(Debug, Clone, Default)]
pub struct Architecture {
    types: Vec<Type>,
    index: HashMap<String, usize>,
}

impl Architecture {
    /// Builds an architecture from types in discovery order.
    ///
    /// Full names must be unique; a repeated full name is dropped with a
    /// warning and the first occurrence wins.
    #[must_use]
    pub fn new(types: impl IntoIterator<Item = Type>) -> Self {
        let mut architecture = Self::default();
        for ty in types {
            if architecture.index.contains_key(&ty.full_name) {
                warn!("Dropping duplicate type {}", ty.full_name);
                continue;
            }
            architecture
                .index
                .insert(ty.full_name.clone(), architecture.types.len());
            architecture.types.push(ty);
        }
        architecture
    }

    /// Returns all types in discovery order.
    #[must_use]
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    /// Looks up the domain type for an external type handle (its full name).
    #[must_use]
    pub fn type_of(&self, full_name: &str) -> Option<&Type> {
        self.index.get(full_name).map(|&i| &self.types[i])
    }

    /// Returns all members of all types in discovery order.
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.types.iter().flat_map(|t| t.members.iter())
    }

    /// Returns the number of types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the architecture contains no types.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Returns the full names of every base type and interface `ty` can be
    /// assigned to, transitively.
    ///
    /// Supertypes missing from the architecture are reported but not
    /// expanded further.
    #[must_use]
    pub fn supertypes_of<'a>(&'a self, ty: &'a Type) -> Vec<&'a str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut result = Vec::new();
        let mut pending: Vec<&Type> = vec![ty];

        while let Some(current) = pending.pop() {
            let parents = current
                .base_type
                .iter()
                .chain(current.interfaces.iter())
                .map(String::as_str);
            for parent in parents {
                if parent == ty.full_name || !seen.insert(parent) {
                    continue;
                }
                result.push(parent);
                if let Some(resolved) = self.type_of(parent) {
                    pending.push(resolved);
                }
            }
        }

        result
    }
}

impl FromIterator<Type> for Architecture {
    fn from_iter<I: IntoIterator<Item = Type>>(iter: I) -> Self {
        Self::new(iter)
    }
}
