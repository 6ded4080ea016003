//! Evaluation of a finished rule against an architecture.

use crate::condition::{ArchitectureCondition, ExistsCondition};
use crate::error::RuleError;
use crate::model::{AnalyzedObject, Architecture};
use crate::predicate::Predicate;
use crate::types::{RuleReport, Violation};
use tracing::debug;

/// The single terminal assertion of a rule.
pub enum TerminalCondition<T> {
    /// Checked once per candidate.
    PerObject(ArchitectureCondition<T>),
    /// Checked once against the number of candidates.
    Existence(ExistsCondition),
}

impl<T: 'static> TerminalCondition<T> {
    /// Returns the description of the condition.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::PerObject(c) => c.description(),
            Self::Existence(c) => c.description(),
        }
    }

    /// Returns the fail description of the condition.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        match self {
            Self::PerObject(c) => c.fail_description(),
            Self::Existence(c) => c.fail_description(),
        }
    }
}

impl<T> Clone for TerminalCondition<T> {
    fn clone(&self) -> Self {
        match self {
            Self::PerObject(c) => Self::PerObject(c.clone()),
            Self::Existence(c) => Self::Existence(c.clone()),
        }
    }
}

impl<T> std::fmt::Debug for TerminalCondition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PerObject(c) => f.debug_tuple("PerObject").field(c).finish(),
            Self::Existence(c) => f.debug_tuple("Existence").field(c).finish(),
        }
    }
}

/// Keeps the objects satisfying every predicate, in their given order.
///
/// Predicates are checked in order and stop at the first one an object
/// fails.
///
/// # Errors
///
/// Propagates the first error raised by an architecture-scoped predicate.
pub fn filter<'a, T: 'static>(
    objects: Vec<&'a T>,
    predicates: &[Predicate<T>],
    architecture: &Architecture,
) -> Result<Vec<&'a T>, RuleError> {
    let mut kept = Vec::with_capacity(objects.len());
    'objects: for object in objects {
        for predicate in predicates {
            if !predicate.test(object, architecture)? {
                continue 'objects;
            }
        }
        kept.push(object);
    }
    Ok(kept)
}

/// Applies `condition` to the candidates of the rule `description`.
///
/// A per-object condition is bound to the architecture once, and only if
/// there are candidates. It yields one violation per failing candidate. A
/// failed existence check yields a single violation without an object
/// when there are no candidates, and one violation per candidate
/// otherwise.
///
/// # Errors
///
/// Propagates the first error raised by the condition.
pub fn evaluate<T: AnalyzedObject>(
    description: &str,
    candidates: &[&T],
    condition: &TerminalCondition<T>,
    architecture: &Architecture,
) -> Result<RuleReport, RuleError> {
    let mut report = RuleReport::new(description);

    match condition {
        TerminalCondition::PerObject(condition) if !candidates.is_empty() => {
            let check = condition.bind(architecture)?;
            for &candidate in candidates {
                let outcome = check(candidate)?;
                if outcome.is_pass() {
                    continue;
                }
                let message = match outcome.detail() {
                    Some(detail) => format!("{}: {detail}", condition.fail_description()),
                    None => condition.fail_description().to_string(),
                };
                report.violations.push(Violation::new(
                    description,
                    Some(candidate.full_name().to_string()),
                    message,
                ));
            }
        }
        TerminalCondition::PerObject(_) => {}
        TerminalCondition::Existence(condition) => {
            if !condition.check(candidates.len()) {
                if candidates.is_empty() {
                    report.violations.push(Violation::new(
                        description,
                        None,
                        condition.fail_description(),
                    ));
                }
                for candidate in candidates {
                    report.violations.push(Violation::new(
                        description,
                        Some(candidate.full_name().to_string()),
                        condition.fail_description(),
                    ));
                }
            }
        }
    }

    debug!(
        "Evaluated \"{}\": {} candidate(s), {} violation(s)",
        description,
        candidates.len(),
        report.violations.len()
    );
    Ok(report)
}
