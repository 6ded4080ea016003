//! The finished-rule abstraction and boolean combination of rules.

use crate::error::RuleError;
use crate::model::Architecture;
use crate::types::RuleReport;
use std::fmt;
use std::sync::Arc;

/// A finished rule that can be checked against an architecture.
///
/// Rules are immutable once built, so a rule can be evaluated from any
/// thread against any number of architectures.
///
/// # Example
///
/// ```ignore
/// use arch_rules::prelude::*;
///
/// let rule = classes()
///     .that()
///     .reside_in_namespace("App.Domain")
///     .should()
///     .not_depend_on("App.Web.**");
///
/// assert!(rule.has_no_violations(&architecture)?);
/// ```
pub trait ArchRule: Send + Sync {
    /// Returns the sentence describing the rule.
    fn description(&self) -> String;

    /// Checks the rule and reports every violation.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule is malformed, e.g. it asks a combined
    /// rule for its objects.
    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError>;

    /// Returns true if the rule holds.
    ///
    /// # Errors
    ///
    /// Same as [`ArchRule::evaluate`].
    fn has_no_violations(&self, architecture: &Architecture) -> Result<bool, RuleError> {
        Ok(self.evaluate(architecture)?.passed())
    }
}

/// Type alias for boxed rule trait objects.
pub type RuleBox = Box<dyn ArchRule>;

/// Type alias for shared rule trait objects.
pub type RuleRef = Arc<dyn ArchRule>;

impl<R: ArchRule + ?Sized> ArchRule for Box<R> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        (**self).evaluate(architecture)
    }
}

impl<R: ArchRule + ?Sized> ArchRule for Arc<R> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        (**self).evaluate(architecture)
    }
}

/// How two rules or two conditions are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// Both must hold.
    And,
    /// At least one must hold.
    Or,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => f.write_str("and"),
            Self::Or => f.write_str("or"),
        }
    }
}

/// Merges the reports of two rules joined by `connector`.
///
/// AND keeps the violations of both sides. OR passes when either side
/// passed and keeps both sides' violations otherwise.
#[must_use]
pub fn combine_reports(
    description: impl Into<String>,
    connector: Connector,
    first: RuleReport,
    second: RuleReport,
) -> RuleReport {
    let mut report = RuleReport::new(description);
    if connector == Connector::Or && (first.passed() || second.passed()) {
        return report;
    }
    report.violations = first.violations;
    report.violations.extend(second.violations);
    report
}

/// Two independent rules joined by AND or OR.
///
/// The two rules may range over different object kinds, so a combined
/// rule never hands out objects.
#[derive(Clone)]
pub struct CombinedRule {
    first: RuleRef,
    connector: Connector,
    second: RuleRef,
}

impl CombinedRule {
    /// Joins two rules.
    #[must_use]
    pub fn new(
        first: impl ArchRule + 'static,
        connector: Connector,
        second: impl ArchRule + 'static,
    ) -> Self {
        Self {
            first: Arc::new(first),
            connector,
            second: Arc::new(second),
        }
    }

    /// Both rules must hold.
    #[must_use]
    pub fn and(first: impl ArchRule + 'static, second: impl ArchRule + 'static) -> Self {
        Self::new(first, Connector::And, second)
    }

    /// At least one rule must hold.
    #[must_use]
    pub fn or(first: impl ArchRule + 'static, second: impl ArchRule + 'static) -> Self {
        Self::new(first, Connector::Or, second)
    }

    /// Returns the connector joining both rules.
    #[must_use]
    pub fn connector(&self) -> Connector {
        self.connector
    }
}

impl ArchRule for CombinedRule {
    fn description(&self) -> String {
        format!(
            "{} {} {}",
            self.first.description(),
            self.connector,
            self.second.description()
        )
    }

    fn evaluate(&self, architecture: &Architecture) -> Result<RuleReport, RuleError> {
        let first = self.first.evaluate(architecture)?;
        let second = self.second.evaluate(architecture)?;
        Ok(combine_reports(
            self.description(),
            self.connector,
            first,
            second,
        ))
    }
}

impl fmt::Debug for CombinedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombinedRule")
            .field("description", &self.description())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Violation;

    struct FixedRule {
        description: &'static str,
        failing: &'static [&'static str],
    }

    impl ArchRule for FixedRule {
        fn description(&self) -> String {
            self.description.to_string()
        }

        fn evaluate(&self, _: &Architecture) -> Result<RuleReport, RuleError> {
            let mut report = RuleReport::new(self.description);
            report.violations = self
                .failing
                .iter()
                .map(|o| Violation::new(self.description, Some((*o).to_string()), "fails"))
                .collect();
            Ok(report)
        }
    }

    const PASSING: FixedRule = FixedRule {
        description: "A",
        failing: &[],
    };
    const FAILING: FixedRule = FixedRule {
        description: "B",
        failing: &["X", "Y"],
    };

    #[test]
    fn and_passes_iff_both_pass() {
        let architecture = Architecture::default();
        for (a, b, expected) in [
            (PASSING, PASSING, true),
            (PASSING, FAILING, false),
            (FAILING, PASSING, false),
            (FAILING, FAILING, false),
        ] {
            let rule = CombinedRule::and(a, b);
            assert_eq!(rule.has_no_violations(&architecture), Ok(expected));
        }
    }

    #[test]
    fn or_passes_iff_either_passes() {
        let architecture = Architecture::default();
        for (a, b, expected) in [
            (PASSING, PASSING, true),
            (PASSING, FAILING, true),
            (FAILING, PASSING, true),
            (FAILING, FAILING, false),
        ] {
            let rule = CombinedRule::or(a, b);
            assert_eq!(rule.has_no_violations(&architecture), Ok(expected));
        }
    }

    #[test]
    fn combined_report_keeps_violation_order() {
        let rule = CombinedRule::and(FAILING, FixedRule {
            description: "C",
            failing: &["Z"],
        });
        let report = rule.evaluate(&Architecture::default()).unwrap();
        assert_eq!(report.description, "B and C");
        assert_eq!(report.violating_objects(), ["X", "Y", "Z"]);
    }

    #[test]
    fn combined_rules_nest() {
        let rule = CombinedRule::or(CombinedRule::and(PASSING, FAILING), PASSING);
        assert_eq!(rule.description(), "A and B or A");
        assert_eq!(rule.connector(), Connector::Or);
    }
}
