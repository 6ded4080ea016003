//! The assertion stages.

use super::combined::CombinedRuleDefinition;
use super::conditions::ObjectsShould;
use super::related::RelatedThat;
use super::{create, SyntaxElement};
use arch_rules_core::definitions::conditions;
use arch_rules_core::{
    ArchRule, Architecture, ArchitectureCondition, Attributes, Classes, Connector, ObjectKind,
    RuleBuilder, RuleError, RuleReport,
};
use std::marker::PhantomData;
use std::sync::Arc;

/// Marks a [`Should`] stage that opens the assertion.
#[derive(Debug, Clone, Copy)]
pub struct Fresh;

/// Marks a [`Should`] stage that continues an assertion after `and()` or
/// `or()`. Existence checks cannot be joined to per-object conditions, so
/// they are only offered on [`Fresh`] stages.
#[derive(Debug, Clone, Copy)]
pub struct Chained;

/// Expects a condition.
#[derive(Debug)]
pub struct Should<K: ObjectKind, S> {
    builder: RuleBuilder<K>,
    state: PhantomData<S>,
}

impl<K: ObjectKind> Should<K, Fresh> {
    /// At least one object must remain after the predicates.
    #[must_use]
    pub fn exist(mut self) -> ExistenceRule<K> {
        self.builder.set_existence(conditions::exist());
        create(self.builder)
    }

    /// No object may remain after the predicates.
    #[must_use]
    pub fn not_exist(mut self) -> ExistenceRule<K> {
        self.builder.set_existence(conditions::not_exist());
        create(self.builder)
    }
}

impl<K: ObjectKind, S> Should<K, S> {
    /// Each object must depend on a class selected by the following
    /// predicates.
    #[must_use]
    pub fn depend_on_classes_that(self) -> RelatedThat<K, Classes> {
        RelatedThat::new(self.builder, conditions::depend_on_classes_that())
    }

    /// No object may depend on a class selected by the following
    /// predicates.
    #[must_use]
    pub fn not_depend_on_classes_that(self) -> RelatedThat<K, Classes> {
        RelatedThat::new(self.builder, conditions::not_depend_on_classes_that())
    }

    /// Each object must carry an attribute selected by the following
    /// predicates.
    #[must_use]
    pub fn have_attributes_that(self) -> RelatedThat<K, Attributes> {
        RelatedThat::new(self.builder, conditions::have_attributes_that())
    }

    /// No object may carry an attribute selected by the following
    /// predicates.
    #[must_use]
    pub fn not_have_attributes_that(self) -> RelatedThat<K, Attributes> {
        RelatedThat::new(self.builder, conditions::not_have_attributes_that())
    }
}

impl<K: ObjectKind, S> SyntaxElement<K> for Should<K, S> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self {
            builder,
            state: PhantomData,
        }
    }
}

impl<K: ObjectKind, S> ObjectsShould for Should<K, S> {
    type Object = K::Object;
    type Next = ShouldConjunction<K>;

    fn with_condition(mut self, condition: ArchitectureCondition<K::Object>) -> Self::Next {
        self.builder.add_condition(condition);
        create(self.builder)
    }
}

/// A finished rule with per-object conditions.
///
/// More conditions can still be joined, and the rule can be combined with
/// a further rule.
#[derive(Debug)]
pub struct ShouldConjunction<K: ObjectKind> {
    builder: RuleBuilder<K>,
}

impl<K: ObjectKind> ShouldConjunction<K> {
    /// Both the current and the next condition must hold.
    #[must_use]
    pub fn and(mut self) -> Should<K, Chained> {
        self.builder.set_connector(Connector::And);
        create(self.builder)
    }

    /// The current or the next condition must hold.
    #[must_use]
    pub fn or(mut self) -> Should<K, Chained> {
        self.builder.set_connector(Connector::Or);
        create(self.builder)
    }

    /// Appends `because <reason>` to the description.
    #[must_use]
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.builder.set_reason(reason);
        self
    }

    /// Starts a second rule that must hold as well.
    #[must_use]
    pub fn and_also(self) -> CombinedRuleDefinition {
        CombinedRuleDefinition::new(Arc::new(self), Connector::And)
    }

    /// Starts a second rule; the combination holds if either rule holds.
    #[must_use]
    pub fn or_also(self) -> CombinedRuleDefinition {
        CombinedRuleDefinition::new(Arc::new(self), Connector::Or)
    }
}

impl<K: ObjectKind> SyntaxElement<K> for ShouldConjunction<K> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self { builder }
    }
}

impl<K: ObjectKind> ArchRule for ShouldConjunction<K> {
    fn description(&self) -> String {
        self.builder.description()
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        self.builder.evaluate(architecture)
    }
}

/// A finished rule asserting that objects exist, or that none do.
#[derive(Debug)]
pub struct ExistenceRule<K: ObjectKind> {
    builder: RuleBuilder<K>,
}

impl<K: ObjectKind> ExistenceRule<K> {
    /// Appends `because <reason>` to the description.
    #[must_use]
    pub fn because(mut self, reason: impl Into<String>) -> Self {
        self.builder.set_reason(reason);
        self
    }

    /// Starts a second rule that must hold as well.
    #[must_use]
    pub fn and_also(self) -> CombinedRuleDefinition {
        CombinedRuleDefinition::new(Arc::new(self), Connector::And)
    }

    /// Starts a second rule; the combination holds if either rule holds.
    #[must_use]
    pub fn or_also(self) -> CombinedRuleDefinition {
        CombinedRuleDefinition::new(Arc::new(self), Connector::Or)
    }
}

impl<K: ObjectKind> SyntaxElement<K> for ExistenceRule<K> {
    fn from_builder(builder: RuleBuilder<K>) -> Self {
        Self { builder }
    }
}

impl<K: ObjectKind> ArchRule for ExistenceRule<K> {
    fn description(&self) -> String {
        self.builder.description()
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        self.builder.evaluate(architecture)
    }
}
