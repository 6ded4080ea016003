//! Errors raised while building or evaluating rules.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that abort the evaluation of a single rule.
///
/// None of these are retried: a rule that fails with one of these is
/// malformed, not flaky.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum RuleError {
    /// Objects were requested from a rule that combines other rules.
    ///
    /// The branches of a combined rule may range over unrelated object
    /// kinds, so there is no single object sequence to hand out.
    #[error(
        "objects() can't be used with combined rule \"{description}\" because the analyzed \
         objects might be of different type"
    )]
    #[diagnostic(
        code(arch_rules::combined_rule_objects),
        help("use the individual rules as object providers instead")
    )]
    CombinedRuleObjects {
        /// Description of the offending rule.
        description: String,
    },

    /// A rule builder was evaluated before a condition was attached.
    #[error("rule \"{description}\" has no condition to evaluate")]
    #[diagnostic(
        code(arch_rules::missing_condition),
        help("finish the rule with `should()` and a condition")
    )]
    MissingCondition {
        /// Description of the incomplete rule.
        description: String,
    },
}
