//! Ready-made predicates and conditions.
//!
//! Every positive factory has a negated twin testing the strict
//! complement. The texts of both are built from one [`Phrase`], so the
//! pair always reads as opposites: alternatives are joined with `or` in
//! the positive form and with `and` in the negated form.
//!
//! - [`predicates`] and [`conditions`] work on any analyzed object
//! - [`type_predicates`] and [`type_conditions`] need a [`crate::Type`]

pub mod conditions;
pub mod predicates;
pub mod type_conditions;
pub mod type_predicates;

use crate::condition::{ArchitectureCondition, SimpleCondition};
use crate::error::RuleError;
use crate::model::Architecture;
use crate::predicate::Predicate;

/// Wraps a name or pattern in double quotes.
pub(crate) fn quoted(text: impl AsRef<str>) -> String {
    format!("\"{}\"", text.as_ref())
}

/// Quotes every item and joins them as `(any_of, all_of)` texts.
pub(crate) fn alternatives<S: AsRef<str>>(items: &[S]) -> (String, String) {
    if items.is_empty() {
        let none = "one of no objects".to_string();
        return (none.clone(), none);
    }
    let quoted: Vec<String> = items.iter().map(quoted).collect();
    (quoted.join(" or "), quoted.join(" and "))
}

enum Verb {
    Be,
    Regular(&'static str),
}

/// The verb phrase shared by a predicate/condition family and its
/// negation.
pub(crate) struct Phrase {
    verb: Verb,
    positive: String,
    negative: String,
}

impl Phrase {
    /// `are x` / `be x` / `is not x`.
    pub(crate) fn be(object: impl Into<String>) -> Self {
        let object = object.into();
        Self {
            verb: Verb::Be,
            negative: object.clone(),
            positive: object,
        }
    }

    /// `<verb> x` / `does not <verb> x`.
    pub(crate) fn regular(verb: &'static str, object: impl Into<String>) -> Self {
        let object = object.into();
        Self {
            verb: Verb::Regular(verb),
            negative: object.clone(),
            positive: object,
        }
    }

    /// Uses a different object text in the negated form.
    pub(crate) fn negated_as(mut self, object: impl Into<String>) -> Self {
        self.negative = object.into();
        self
    }

    /// Description and fail description of a predicate.
    pub(crate) fn predicate_texts(&self, negated: bool) -> (String, String) {
        let (p, n) = (&self.positive, &self.negative);
        match (&self.verb, negated) {
            (Verb::Be, false) => (format!("are {p}"), format!("is not {p}")),
            (Verb::Be, true) => (format!("are not {n}"), format!("is {n}")),
            (Verb::Regular(v), false) => (format!("{v} {p}"), format!("does not {v} {p}")),
            (Verb::Regular(v), true) => (format!("do not {v} {n}"), format!("does {v} {n}")),
        }
    }

    /// Description and fail description of a condition.
    pub(crate) fn condition_texts(&self, negated: bool) -> (String, String) {
        let (p, n) = (&self.positive, &self.negative);
        match (&self.verb, negated) {
            (Verb::Be, false) => (format!("be {p}"), format!("is not {p}")),
            (Verb::Be, true) => (format!("not be {n}"), format!("is {n}")),
            (Verb::Regular(v), false) => (format!("{v} {p}"), format!("does not {v} {p}")),
            (Verb::Regular(v), true) => (format!("not {v} {n}"), format!("does {v} {n}")),
        }
    }
}

pub(crate) fn predicate<T: 'static>(
    phrase: &Phrase,
    negated: bool,
    test: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> Predicate<T> {
    let (description, fail_description) = phrase.predicate_texts(negated);
    if negated {
        Predicate::new(move |o| !test(o), description, fail_description)
    } else {
        Predicate::new(test, description, fail_description)
    }
}

pub(crate) fn architecture_predicate<T: 'static>(
    phrase: &Phrase,
    negated: bool,
    test: impl Fn(&T, &Architecture) -> Result<bool, RuleError> + Send + Sync + 'static,
) -> Predicate<T> {
    let (description, fail_description) = phrase.predicate_texts(negated);
    if negated {
        Predicate::with_architecture(
            move |o, a| test(o, a).map(|held| !held),
            description,
            fail_description,
        )
    } else {
        Predicate::with_architecture(test, description, fail_description)
    }
}

pub(crate) fn condition<T: 'static>(
    phrase: &Phrase,
    negated: bool,
    test: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> SimpleCondition<T> {
    let (description, fail_description) = phrase.condition_texts(negated);
    if negated {
        SimpleCondition::new(move |o| !test(o), description, fail_description)
    } else {
        SimpleCondition::new(test, description, fail_description)
    }
}

pub(crate) fn architecture_condition<T: 'static>(
    phrase: &Phrase,
    negated: bool,
    test: impl Fn(&T, &Architecture) -> Result<bool, RuleError> + Send + Sync + 'static,
) -> ArchitectureCondition<T> {
    let (description, fail_description) = phrase.condition_texts(negated);
    if negated {
        ArchitectureCondition::new(
            move |o, a| test(o, a).map(|held| !held),
            description,
            fail_description,
        )
    } else {
        ArchitectureCondition::new(test, description, fail_description)
    }
}
