//! Stages of relational conditions: the predicates after
//! `depend_on_classes_that()` select the related objects, not the
//! objects the rule is about.

use super::combined::CombinedRuleDefinition;
use super::predicates::ObjectsThat;
use super::should::{Chained, ShouldConjunction};
use super::{create, Should};
use arch_rules_core::{
    ArchRule, Architecture, ArchitectureCondition, Connector, ObjectKind, Predicate,
    RelatedObjects, RelationCondition, RuleBuilder, RuleError, RuleReport,
};
use std::sync::Arc;

/// Expects a predicate on the related objects of kind `R`.
#[derive(Debug)]
pub struct RelatedThat<K: ObjectKind, R: ObjectKind> {
    builder: RuleBuilder<K>,
    relation: RelationCondition<K::Object, R::Object>,
    related: RelatedObjects<R>,
}

impl<K: ObjectKind, R: ObjectKind> RelatedThat<K, R> {
    pub(crate) fn new(
        builder: RuleBuilder<K>,
        relation: RelationCondition<K::Object, R::Object>,
    ) -> Self {
        Self {
            builder,
            relation,
            related: RelatedObjects::new(),
        }
    }
}

impl<K: ObjectKind, R: ObjectKind> ObjectsThat for RelatedThat<K, R> {
    type Object = R::Object;
    type Next = RelatedConjunction<K, R>;

    fn with_predicate(mut self, predicate: Predicate<R::Object>) -> Self::Next {
        self.related.add_predicate(predicate);
        RelatedConjunction {
            builder: self.builder,
            relation: self.relation,
            related: self.related,
        }
    }
}

/// A relational condition whose related objects are narrowed by at least
/// one predicate.
///
/// The stage is already a finished rule; it can also go on with more
/// related predicates or more conditions.
#[derive(Debug)]
pub struct RelatedConjunction<K: ObjectKind, R: ObjectKind> {
    builder: RuleBuilder<K>,
    relation: RelationCondition<K::Object, R::Object>,
    related: RelatedObjects<R>,
}

impl<K: ObjectKind, R: ObjectKind> RelatedConjunction<K, R> {
    /// Narrows the related objects further.
    #[must_use]
    pub fn and(self) -> RelatedThat<K, R> {
        RelatedThat {
            builder: self.builder,
            relation: self.relation,
            related: self.related,
        }
    }

    /// Both this and the next condition must hold.
    #[must_use]
    pub fn and_should(self) -> Should<K, Chained> {
        let mut builder = self.attach();
        builder.set_connector(Connector::And);
        create(builder)
    }

    /// This or the next condition must hold.
    #[must_use]
    pub fn or_should(self) -> Should<K, Chained> {
        let mut builder = self.attach();
        builder.set_connector(Connector::Or);
        create(builder)
    }

    /// Appends `because <reason>` to the description.
    #[must_use]
    pub fn because(self, reason: impl Into<String>) -> ShouldConjunction<K> {
        create::<ShouldConjunction<K>, K>(self.attach()).because(reason)
    }

    /// Starts a second rule that must hold as well.
    #[must_use]
    pub fn and_also(self) -> CombinedRuleDefinition {
        create::<ShouldConjunction<K>, K>(self.attach()).and_also()
    }

    /// Starts a second rule; the combination holds if either rule holds.
    #[must_use]
    pub fn or_also(self) -> CombinedRuleDefinition {
        create::<ShouldConjunction<K>, K>(self.attach()).or_also()
    }

    fn condition(&self) -> ArchitectureCondition<K::Object> {
        self.relation
            .clone()
            .with_related(Arc::new(self.related.clone()))
    }

    fn attach(self) -> RuleBuilder<K> {
        let condition = self.condition();
        let mut builder = self.builder;
        builder.add_condition(condition);
        builder
    }
}

impl<K: ObjectKind, R: ObjectKind> ArchRule for RelatedConjunction<K, R> {
    fn description(&self) -> String {
        let condition = self.builder.preview_condition(self.condition());
        self.builder.describe(Some(&condition))
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        let condition = self.builder.preview_condition(self.condition());
        self.builder.evaluate_with(&condition, architecture)
    }
}
