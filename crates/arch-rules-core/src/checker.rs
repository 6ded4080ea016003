//! Runs a set of named rules against one architecture.

use crate::config::{Config, RuleConfig};
use crate::error::RuleError;
use crate::model::Architecture;
use crate::rule::{ArchRule, RuleBox};
use crate::types::{CheckResult, Severity};
use tracing::{debug, info, warn};

/// Builder for configuring a [`Checker`].
#[derive(Default)]
pub struct CheckerBuilder {
    rules: Vec<(String, RuleBox)>,
    config: Option<Config>,
}

impl CheckerBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule under `name`.
    ///
    /// The name is the key of the rule's `[rules.<name>]` configuration.
    #[must_use]
    pub fn rule<R: ArchRule + 'static>(mut self, name: impl Into<String>, rule: R) -> Self {
        self.rules.push((name.into(), Box::new(rule)));
        self
    }

    /// Registers a boxed rule under `name`.
    #[must_use]
    pub fn rule_box(mut self, name: impl Into<String>, rule: RuleBox) -> Self {
        self.rules.push((name.into(), rule));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the checker.
    #[must_use]
    pub fn build(self) -> Checker {
        let config = self.config.unwrap_or_default();
        for name in config.rules.keys() {
            if !self.rules.iter().any(|(registered, _)| registered == name) {
                debug!("Configuration for unknown rule: {}", name);
            }
        }
        Checker {
            rules: self.rules,
            config,
        }
    }
}

/// Evaluates every registered rule in registration order.
///
/// Use [`Checker::builder()`] to construct an instance.
pub struct Checker {
    rules: Vec<(String, RuleBox)>,
    config: Config,
}

impl Checker {
    /// Creates a new builder for configuring a checker.
    #[must_use]
    pub fn builder() -> CheckerBuilder {
        CheckerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str) -> Option<&RuleConfig> {
        self.config.rules.get(rule_name)
    }

    /// Returns the severity at or above which a check fails.
    #[must_use]
    pub fn fail_threshold(&self) -> Severity {
        self.config.fail_threshold()
    }

    /// Checks every enabled rule.
    ///
    /// # Errors
    ///
    /// Aborts on the first rule that fails to evaluate.
    pub fn check(&self, architecture: &Architecture) -> Result<CheckResult, RuleError> {
        info!(
            "Checking {} rule(s) against {} type(s)",
            self.rules.len(),
            architecture.len()
        );

        let mut result = CheckResult::new();
        for (name, rule) in &self.rules {
            if !self.config.is_rule_enabled(name) {
                warn!("Skipping disabled rule: {}", name);
                result.rules_skipped += 1;
                continue;
            }

            debug!("Evaluating rule: {}", name);
            let mut report = rule.evaluate(architecture)?;
            if let Some(severity) = self.config.rule_severity(name) {
                report = report.with_severity(severity);
            }
            result.reports.push(report);
            result.rules_checked += 1;
        }

        info!(
            "Check complete: {} violation(s) in {} rule(s)",
            result.violations().count(),
            result.rules_checked
        );

        Ok(result)
    }

    /// Returns true if `result` has violations at or above the configured
    /// threshold.
    #[must_use]
    pub fn failed(&self, result: &CheckResult) -> bool {
        result.has_violations_at(self.fail_threshold())
    }
}
