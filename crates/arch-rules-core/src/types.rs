//! Core types for rule violations and results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity level for rule violations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a check.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    #[default]
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One failed check of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Description of the rule that was violated.
    pub rule: String,
    /// Full name of the violating object. Absent when the rule failed on
    /// the size of its candidate set rather than on one object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// The condition's fail description, possibly followed by details.
    pub message: String,
    /// Severity of this violation.
    pub severity: Severity,
}

impl Violation {
    /// Creates a new violation with [`Severity::Error`].
    #[must_use]
    pub fn new(
        rule: impl Into<String>,
        object: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule: rule.into(),
            object,
            message: message.into(),
            severity: Severity::Error,
        }
    }

    /// Overrides the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.object {
            Some(object) => write!(f, "\"{object}\" {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Outcome of evaluating one rule against one architecture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleReport {
    /// Description of the evaluated rule.
    pub description: String,
    /// Violations in candidate order.
    pub violations: Vec<Violation>,
}

impl RuleReport {
    /// Creates a report without violations.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            violations: Vec::new(),
        }
    }

    /// Returns true if the rule holds.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the full names of the violating objects, in order.
    #[must_use]
    pub fn violating_objects(&self) -> Vec<&str> {
        self.violations
            .iter()
            .filter_map(|v| v.object.as_deref())
            .collect()
    }

    /// Sets the severity of every violation.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        for violation in &mut self.violations {
            violation.severity = severity;
        }
        self
    }
}

impl fmt::Display for RuleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return write!(f, "\"{}\" passed", self.description);
        }
        write!(f, "\"{}\" failed:", self.description)?;
        for violation in &self.violations {
            write!(f, "\n  {}: {violation}", violation.severity)?;
        }
        Ok(())
    }
}

/// Result of running several rules through a [`crate::Checker`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// One report per evaluated rule, in registration order.
    pub reports: Vec<RuleReport>,
    /// Number of rules evaluated. Disabled rules are not counted.
    pub rules_checked: usize,
    /// Number of rules skipped by configuration.
    pub rules_skipped: usize,
}

impl CheckResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterates over all violations of all reports.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.reports.iter().flat_map(|r| r.violations.iter())
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.violations().any(|v| v.severity == Severity::Error)
    }

    /// Checks if any violations meet or exceed the given severity threshold.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.violations().any(|v| v.severity >= severity)
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, i), v| match v.severity {
                Severity::Error => (e + 1, w, i),
                Severity::Warning => (e, w + 1, i),
                Severity::Info => (e, w, i + 1),
            })
    }

    /// Returns the reports of rules that did not pass.
    #[must_use]
    pub fn failed_reports(&self) -> Vec<&RuleReport> {
        self.reports.iter().filter(|r| !r.passed()).collect()
    }

    /// Formats violations at or above `fail_on` as a test failure report.
    ///
    /// Produces a multi-line report suitable for `panic!()` messages in
    /// `cargo test` integration.
    #[must_use]
    pub fn format_test_report(&self, fail_on: Severity) -> String {
        use std::fmt::Write;

        let failing: Vec<&Violation> = self
            .violations()
            .filter(|v| v.severity >= fail_on)
            .collect();

        let mut report = String::new();
        let _ = writeln!(report, "\n=== arch-rules: {} violation(s) ===\n", failing.len());
        for v in &failing {
            let _ = writeln!(report, "{}", v.rule);
            let _ = writeln!(report, "  {}: {v}", v.severity);
            let _ = writeln!(report);
        }
        let _ = write!(report, "{self}");
        report
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (errors, warnings, infos) = self.count_by_severity();
        write!(
            f,
            "Total: {errors} error(s), {warnings} warning(s), {infos} info(s) in {} rule(s)",
            self.rules_checked
        )?;
        if self.rules_skipped > 0 {
            write!(f, ", {} skipped", self.rules_skipped)?;
        }
        Ok(())
    }
}
