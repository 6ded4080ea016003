//! The accumulator behind every fluent rule.

use crate::condition::{ArchitectureCondition, ExistsCondition};
use crate::engine::{self, TerminalCondition};
use crate::error::RuleError;
use crate::kind::ObjectKind;
use crate::model::Architecture;
use crate::predicate::Predicate;
use crate::provider::ObjectProvider;
use crate::rule::{combine_reports, ArchRule, Connector, RuleRef};
use crate::types::RuleReport;
use std::fmt::Write;

/// Collects the predicates and the terminal condition of one rule over
/// objects of kind `K`.
///
/// A builder is moved from stage to stage while a rule is written and is
/// never shared between rules under construction.
pub struct RuleBuilder<K: ObjectKind> {
    predicates: Vec<Predicate<K::Object>>,
    condition: Option<TerminalCondition<K::Object>>,
    pending: Option<Connector>,
    reason: Option<String>,
    prior: Option<(RuleRef, Connector)>,
}

impl<K: ObjectKind> RuleBuilder<K> {
    /// Creates a builder ranging over every object of kind `K`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
            condition: None,
            pending: None,
            reason: None,
            prior: None,
        }
    }

    /// Creates a builder whose rule is joined to an already finished rule.
    ///
    /// The resulting rule is a combined rule: it can be evaluated but does
    /// not hand out objects.
    #[must_use]
    pub fn combined_with(prior: RuleRef, connector: Connector) -> Self {
        Self {
            prior: Some((prior, connector)),
            ..Self::new()
        }
    }

    /// Appends a predicate to the candidate filter.
    pub fn add_predicate(&mut self, predicate: Predicate<K::Object>) {
        self.predicates.push(predicate);
    }

    /// Adds a per-object condition, joined to the current one with the
    /// connector set by [`RuleBuilder::set_connector`] (AND by default).
    pub fn add_condition(&mut self, condition: impl Into<ArchitectureCondition<K::Object>>) {
        let current = self.condition.take();
        let joined = self.join(current, condition.into());
        self.pending = None;
        self.condition = Some(joined);
    }

    /// Makes the rule an existence check on its candidate set.
    pub fn set_existence(&mut self, condition: ExistsCondition) {
        self.condition = Some(TerminalCondition::Existence(condition));
    }

    /// Sets how the next condition joins the current one.
    pub fn set_connector(&mut self, connector: Connector) {
        self.pending = Some(connector);
    }

    /// Sets the reason appended to the description.
    pub fn set_reason(&mut self, reason: impl Into<String>) {
        self.reason = Some(reason.into());
    }

    /// Returns the condition the rule would have after adding `extra`,
    /// without changing the builder.
    #[must_use]
    pub fn preview_condition(
        &self,
        extra: ArchitectureCondition<K::Object>,
    ) -> TerminalCondition<K::Object> {
        self.join(self.condition.clone(), extra)
    }

    fn join(
        &self,
        current: Option<TerminalCondition<K::Object>>,
        next: ArchitectureCondition<K::Object>,
    ) -> TerminalCondition<K::Object> {
        match current {
            Some(TerminalCondition::PerObject(current)) => {
                TerminalCondition::PerObject(match self.pending.unwrap_or(Connector::And) {
                    Connector::And => current.and(next),
                    Connector::Or => current.or(next),
                })
            }
            _ => TerminalCondition::PerObject(next),
        }
    }

    /// Returns true once a terminal condition has been attached.
    #[must_use]
    pub fn has_condition(&self) -> bool {
        self.condition.is_some()
    }

    /// Returns true if this rule is joined to a previous rule.
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.prior.is_some()
    }

    /// Returns the candidate description, e.g. `Classes that are public`.
    #[must_use]
    pub fn subject_description(&self) -> String {
        if self.predicates.is_empty() {
            return K::LABEL.to_string();
        }
        let predicates: Vec<&str> = self.predicates.iter().map(Predicate::description).collect();
        format!("{} that {}", K::LABEL, predicates.join(" and "))
    }

    /// Returns the full sentence of the rule.
    #[must_use]
    pub fn description(&self) -> String {
        self.describe(self.condition.as_ref())
    }

    /// Returns the sentence of the rule as if `condition` were attached.
    #[must_use]
    pub fn describe(&self, condition: Option<&TerminalCondition<K::Object>>) -> String {
        let own = self.describe_own(condition);
        match &self.prior {
            Some((prior, connector)) => format!("{} {connector} {own}", prior.description()),
            None => own,
        }
    }

    fn describe_own(&self, condition: Option<&TerminalCondition<K::Object>>) -> String {
        let mut text = self.subject_description();
        if let Some(condition) = condition {
            let _ = write!(text, " should {}", condition.description());
        }
        if let Some(reason) = &self.reason {
            let _ = write!(text, " because {reason}");
        }
        text
    }

    /// Returns the objects of kind `K` satisfying every predicate, in model
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::CombinedRuleObjects`] if the rule is combined
    /// with another rule, or any error raised by a predicate.
    pub fn filtered_objects<'a>(
        &self,
        architecture: &'a Architecture,
    ) -> Result<Vec<&'a K::Object>, RuleError> {
        if self.prior.is_some() {
            return Err(RuleError::CombinedRuleObjects {
                description: self.description(),
            });
        }
        self.candidates(architecture)
    }

    fn candidates<'a>(
        &self,
        architecture: &'a Architecture,
    ) -> Result<Vec<&'a K::Object>, RuleError> {
        engine::filter(K::select(architecture), &self.predicates, architecture)
    }

    /// Evaluates the rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::MissingCondition`] if no condition is attached,
    /// or any error raised while filtering or checking.
    pub fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        let condition = self
            .condition
            .as_ref()
            .ok_or_else(|| RuleError::MissingCondition {
                description: self.description(),
            })?;
        self.evaluate_with(condition, architecture)
    }

    /// Evaluates the rule with `condition` in place of the attached one.
    ///
    /// # Errors
    ///
    /// Propagates any error raised while filtering or checking, including
    /// errors of a previous rule this one is combined with.
    pub fn evaluate_with(
        &self,
        condition: &TerminalCondition<K::Object>,
        architecture: &Architecture,
    ) -> Result<RuleReport, RuleError> {
        let own_description = self.describe_own(Some(condition));
        let candidates = self.candidates(architecture)?;
        let own = engine::evaluate(&own_description, &candidates, condition, architecture)?;

        match &self.prior {
            None => Ok(own),
            Some((prior, connector)) => {
                let prior_report = prior.evaluate(architecture)?;
                Ok(combine_reports(
                    self.describe(Some(condition)),
                    *connector,
                    prior_report,
                    own,
                ))
            }
        }
    }
}

impl<K: ObjectKind> Default for RuleBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ObjectKind> Clone for RuleBuilder<K> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
            condition: self.condition.clone(),
            pending: self.pending,
            reason: self.reason.clone(),
            prior: self.prior.clone(),
        }
    }
}

impl<K: ObjectKind> std::fmt::Debug for RuleBuilder<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleBuilder")
            .field("description", &self.description())
            .field("predicates", &self.predicates.len())
            .finish_non_exhaustive()
    }
}

impl<K: ObjectKind> ArchRule for RuleBuilder<K> {
    fn description(&self) -> String {
        RuleBuilder::description(self)
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        RuleBuilder::evaluate(self, architecture)
    }
}

impl<K: ObjectKind> ObjectProvider<K::Object> for RuleBuilder<K> {
    fn description(&self) -> String {
        RuleBuilder::description(self)
    }

    fn objects<'a>(
        &self,
        architecture: &'a Architecture,
    ) -> Result<Vec<&'a K::Object>, RuleError> {
        self.filtered_objects(architecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::condition::SimpleCondition;
    use crate::kind::Classes;
    use crate::model::{AnalyzedObject, Type, Visibility};
    use std::sync::Arc;

    fn architecture() -> Architecture {
        Architecture::new([
            Type::class("App.Service"),
            Type::class("App.Hidden").with_visibility(Visibility::Private),
            Type::interface("App.IRepo"),
        ])
    }

    fn be_public() -> SimpleCondition<Type> {
        SimpleCondition::new(
            |t: &Type| t.visibility() == Visibility::Public,
            "be public",
            "is not public",
        )
    }

    fn have_name(name: &'static str) -> SimpleCondition<Type> {
        SimpleCondition::new(
            move |t: &Type| t.name() == name,
            format!("have name \"{name}\""),
            format!("does not have name \"{name}\""),
        )
    }

    struct Passing;

    impl ArchRule for Passing {
        fn description(&self) -> String {
            "Types should pass".to_string()
        }

        fn evaluate(&self, _: &Architecture) -> Result<RuleReport, RuleError> {
            Ok(RuleReport::new(self.description()))
        }
    }

    #[test]
    fn description_reads_as_sentence() {
        let mut builder = RuleBuilder::<Classes>::new();
        assert_eq!(builder.description(), "Classes");

        builder.add_predicate(Predicate::new(
            |t: &Type| t.namespace() == "App",
            "reside in namespace \"App\"",
            "does not reside in namespace \"App\"",
        ));
        builder.add_condition(be_public());
        builder.set_connector(Connector::Or);
        builder.add_condition(have_name("Service"));
        builder.set_reason("services are entry points");

        assert_eq!(
            builder.description(),
            "Classes that reside in namespace \"App\" should be public or have name \
             \"Service\" because services are entry points"
        );
    }

    #[test]
    fn evaluate_without_condition_fails() {
        let builder = RuleBuilder::<Classes>::new();
        assert_eq!(
            builder.evaluate(&architecture()),
            Err(RuleError::MissingCondition {
                description: "Classes".to_string()
            })
        );
    }

    #[test]
    fn evaluate_reports_failing_candidates() {
        let mut builder = RuleBuilder::<Classes>::new();
        builder.add_condition(be_public());
        let report = builder.evaluate(&architecture()).unwrap();
        assert_eq!(report.violating_objects(), ["App.Hidden"]);
        assert_eq!(report.violations[0].message, "is not public");
    }

    #[test]
    fn existence_replaces_condition() {
        let mut builder = RuleBuilder::<Classes>::new();
        builder.add_condition(be_public());
        builder.set_existence(ExistsCondition::exists());
        assert_eq!(builder.description(), "Classes should exist");
        assert!(builder.evaluate(&architecture()).unwrap().passed());
    }

    #[test]
    fn preview_leaves_builder_untouched() {
        let mut builder = RuleBuilder::<Classes>::new();
        builder.add_condition(be_public());
        let preview = builder.preview_condition(have_name("Service").into());
        assert_eq!(preview.description(), "be public and have name \"Service\"");
        assert_eq!(builder.description(), "Classes should be public");
    }

    #[test]
    fn combined_builder_refuses_objects() {
        let builder = RuleBuilder::<Classes>::combined_with(Arc::new(Passing), Connector::And);
        assert!(builder.is_combined());
        assert_eq!(
            builder.filtered_objects(&architecture()),
            Err(RuleError::CombinedRuleObjects {
                description: "Types should pass and Classes".to_string()
            })
        );
    }

    #[test]
    fn combined_builder_joins_reports() {
        let mut and = RuleBuilder::<Classes>::combined_with(Arc::new(Passing), Connector::And);
        and.add_condition(be_public());
        let report = and.evaluate(&architecture()).unwrap();
        assert_eq!(report.description, "Types should pass and Classes should be public");
        assert_eq!(report.violating_objects(), ["App.Hidden"]);
        assert_eq!(report.violations[0].rule, "Classes should be public");

        let mut or = RuleBuilder::<Classes>::combined_with(Arc::new(Passing), Connector::Or);
        or.add_condition(be_public());
        assert!(or.evaluate(&architecture()).unwrap().passed());
    }

    #[test]
    fn builder_is_object_provider() {
        let mut builder = RuleBuilder::<Classes>::new();
        builder.add_predicate(Predicate::new(
            |t: &Type| t.visibility() == Visibility::Public,
            "are public",
            "is not public",
        ));
        let architecture = architecture();
        let objects = ObjectProvider::objects(&builder, &architecture).unwrap();
        let names: Vec<&str> = objects.iter().map(|t| t.full_name()).collect();
        assert_eq!(names, ["App.Service"]);
    }
}
