//! The opening stages: the objects a rule is about.

use super::predicates::ObjectsThat;
use super::should::{Fresh, Should};
use super::{create, SyntaxElement};
use arch_rules_core::{Architecture, ObjectKind, ObjectProvider, Predicate, RuleBuilder, RuleError};

/// All objects of kind `K`, before any predicate.
#[derive(Debug)]
pub struct GivenObjects<K: ObjectKind> {
    builder: RuleBuilder<K>,
}

impl<K: ObjectKind> GivenObjects<K> {
    /// Starts narrowing the objects with predicates.
    #[must_use]
    pub fn that(self) -> GivenObjectsThat<K> {
        create(self.builder)
    }

    /// Starts the assertion about every object of kind `K`.
    #[must_use]
    pub fn should(self) -> Should<K, Fresh> {
        create(self.builder)
    }
}

impl<K: ObjectKind> SyntaxElement<K> for GivenObjects<K> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self { builder }
    }
}

impl<K: ObjectKind> ObjectProvider<K::Object> for GivenObjects<K> {
    fn description(&self) -> String {
        self.builder.description()
    }

    fn objects<'a>(&self, architecture: &'a Architecture) -> Result<Vec<&'a K::Object>, RuleError> {
        self.builder.filtered_objects(architecture)
    }
}

/// Expects the next predicate.
#[derive(Debug)]
pub struct GivenObjectsThat<K: ObjectKind> {
    builder: RuleBuilder<K>,
}

impl<K: ObjectKind> SyntaxElement<K> for GivenObjectsThat<K> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self { builder }
    }
}

impl<K: ObjectKind> ObjectsThat for GivenObjectsThat<K> {
    type Object = K::Object;
    type Next = GivenObjectsConjunction<K>;

    fn with_predicate(mut self, predicate: Predicate<K::Object>) -> Self::Next {
        self.builder.add_predicate(predicate);
        create(self.builder)
    }
}

/// Objects narrowed by at least one predicate.
///
/// This stage is also an [`ObjectProvider`], so a filtered set can be
/// handed to another rule, e.g. to `only_depend_on_types_in`.
#[derive(Debug)]
pub struct GivenObjectsConjunction<K: ObjectKind> {
    builder: RuleBuilder<K>,
}

impl<K: ObjectKind> GivenObjectsConjunction<K> {
    /// Adds another predicate; objects must satisfy all of them.
    #[must_use]
    pub fn and(self) -> GivenObjectsThat<K> {
        create(self.builder)
    }

    /// Starts the assertion about the narrowed objects.
    #[must_use]
    pub fn should(self) -> Should<K, Fresh> {
        create(self.builder)
    }
}

impl<K: ObjectKind> SyntaxElement<K> for GivenObjectsConjunction<K> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self { builder }
    }
}

impl<K: ObjectKind> ObjectProvider<K::Object> for GivenObjectsConjunction<K> {
    fn description(&self) -> String {
        self.builder.description()
    }

    fn objects<'a>(&self, architecture: &'a Architecture) -> Result<Vec<&'a K::Object>, RuleError> {
        self.builder.filtered_objects(architecture)
    }
}
