//! Conditions are the terminal assertion of a rule.
//!
//! There are four families:
//!
//! - [`SimpleCondition`]: looks at one object
//! - [`ArchitectureCondition`]: looks at one object and the architecture
//! - [`RelationCondition`]: relates one object to a second object set
//! - [`ExistsCondition`]: asserts on the size of the candidate set
//!
//! Each family combines with itself through `and`/`or`. Combining texts
//! follows De Morgan: `a and b` fails with `fail(a) or fail(b)`, `a or b`
//! fails with `fail(a) and fail(b)`. Mixed chains are parenthesised, so
//! `(a and b) or c` fails with `(fail(a) or fail(b)) and fail(c)`.

use crate::error::RuleError;
use crate::model::Architecture;
use crate::provider::ObjectProvider;
use crate::rule::Connector;
use std::fmt;
use std::sync::Arc;

/// Per-object result of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    passed: bool,
    detail: Option<String>,
}

impl Outcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            passed: true,
            detail: None,
        }
    }

    /// A failing outcome without further explanation.
    #[must_use]
    pub fn fail() -> Self {
        Self {
            passed: false,
            detail: None,
        }
    }

    /// A failing outcome explaining what was found on the object.
    #[must_use]
    pub fn fail_with(detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: Some(detail.into()),
        }
    }

    /// Returns true if the object satisfied the condition.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.passed
    }

    /// Returns the explanation of a failure, if the condition gave one.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }

    fn both(self, next: impl FnOnce() -> Self) -> Self {
        if self.passed {
            next()
        } else {
            self
        }
    }

    fn either(self, next: impl FnOnce() -> Self) -> Self {
        if self.passed {
            return self;
        }
        let other = next();
        if other.passed {
            return other;
        }
        let detail = match (self.detail, other.detail) {
            (Some(a), Some(b)) => Some(format!("{a} and {b}")),
            (a, b) => a.or(b),
        };
        Self {
            passed: false,
            detail,
        }
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        Self {
            passed,
            detail: None,
        }
    }
}

/// The texts of one operand of a combination, and how that operand was
/// itself joined.
type Texts<'a> = (&'a str, &'a str, Option<Connector>);

/// Description and fail description of `a <connector> b`.
///
/// Fail texts are joined with the opposite connector. An operand joined
/// with the other connector is parenthesised in both texts.
fn combined_texts(connector: Connector, a: Texts<'_>, b: Texts<'_>) -> (String, String) {
    let wrap = |text: &str, joined: Option<Connector>| match joined {
        Some(inner) if inner != connector => format!("({text})"),
        _ => text.to_string(),
    };
    let fail_connector = match connector {
        Connector::And => Connector::Or,
        Connector::Or => Connector::And,
    };
    (
        format!("{} {connector} {}", wrap(a.0, a.2), wrap(b.0, b.2)),
        format!("{} {fail_connector} {}", wrap(a.1, a.2), wrap(b.1, b.2)),
    )
}

// ────────────────────────────────────────────
// SimpleCondition
// ────────────────────────────────────────────

type SimpleCheck<T> = Arc<dyn Fn(&T) -> Outcome + Send + Sync>;

/// A condition over a single object.
pub struct SimpleCondition<T> {
    check: SimpleCheck<T>,
    description: String,
    fail_description: String,
    joined: Option<Connector>,
}

impl<T: 'static> SimpleCondition<T> {
    /// Creates a condition from a boolean test.
    #[must_use]
    pub fn new(
        test: impl Fn(&T) -> bool + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self::explained(move |o| Outcome::from(test(o)), description, fail_description)
    }

    /// Creates a condition whose failures carry a per-object explanation.
    #[must_use]
    pub fn explained(
        check: impl Fn(&T) -> Outcome + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self {
            check: Arc::new(check),
            description: description.into(),
            fail_description: fail_description.into(),
            joined: None,
        }
    }

    /// Checks one object.
    #[must_use]
    pub fn check(&self, object: &T) -> Outcome {
        (self.check)(object)
    }

    /// Returns the description, e.g. `be public`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of a failing object, e.g. `is not public`.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        &self.fail_description
    }

    fn texts(&self) -> Texts<'_> {
        (&self.description, &self.fail_description, self.joined)
    }

    /// Both conditions must hold. `other` is not checked when `self` fails.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::And, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined =
            Self::explained(move |o| a(o).both(|| b(o)), description, fail_description);
        joined.joined = Some(Connector::And);
        joined
    }

    /// At least one condition must hold.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::Or, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined =
            Self::explained(move |o| a(o).either(|| b(o)), description, fail_description);
        joined.joined = Some(Connector::Or);
        joined
    }
}

impl<T> Clone for SimpleCondition<T> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            description: self.description.clone(),
            fail_description: self.fail_description.clone(),
            joined: self.joined,
        }
    }
}

impl<T> fmt::Debug for SimpleCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCondition")
            .field("description", &self.description)
            .field("fail_description", &self.fail_description)
            .finish_non_exhaustive()
    }
}

// ────────────────────────────────────────────
// ArchitectureCondition
// ────────────────────────────────────────────

/// A per-object check bound to one architecture.
pub type BoundCheck<'a, T> = Box<dyn Fn(&T) -> Result<Outcome, RuleError> + 'a>;

type Binder<T> =
    Arc<dyn for<'a> Fn(&'a Architecture) -> Result<BoundCheck<'a, T>, RuleError> + Send + Sync>;

/// A condition over a single object that needs the architecture as context.
///
/// The condition is bound to an architecture once per evaluation, so
/// object providers it depends on run once rather than per object.
pub struct ArchitectureCondition<T> {
    bind: Binder<T>,
    description: String,
    fail_description: String,
    joined: Option<Connector>,
}

impl<T: 'static> ArchitectureCondition<T> {
    /// Creates a condition from a fallible boolean test.
    #[must_use]
    pub fn new(
        test: impl Fn(&T, &Architecture) -> Result<bool, RuleError> + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self::explained(
            move |o, a| test(o, a).map(Outcome::from),
            description,
            fail_description,
        )
    }

    /// Creates a condition whose failures carry a per-object explanation.
    #[must_use]
    pub fn explained(
        check: impl Fn(&T, &Architecture) -> Result<Outcome, RuleError> + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        let check = Arc::new(check);
        Self::prepared(
            move |architecture| {
                let check = Arc::clone(&check);
                let bound: BoundCheck<'_, T> =
                    Box::new(move |o: &T| -> Result<Outcome, RuleError> {
                        check(o, architecture)
                    });
                Ok(bound)
            },
            description,
            fail_description,
        )
    }

    /// Creates a condition from a binder, which does the per-architecture
    /// work once and returns the per-object check.
    #[must_use]
    pub fn prepared(
        bind: impl for<'a> Fn(&'a Architecture) -> Result<BoundCheck<'a, T>, RuleError>
            + Send
            + Sync
            + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self {
            bind: Arc::new(bind),
            description: description.into(),
            fail_description: fail_description.into(),
            joined: None,
        }
    }

    /// Binds the condition to `architecture`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the binder, e.g. an object provider that
    /// cannot produce objects.
    pub fn bind<'a>(&self, architecture: &'a Architecture) -> Result<BoundCheck<'a, T>, RuleError> {
        (self.bind)(architecture)
    }

    /// Checks one object.
    ///
    /// # Errors
    ///
    /// Propagates errors from binding or from the underlying test.
    pub fn check(&self, object: &T, architecture: &Architecture) -> Result<Outcome, RuleError> {
        let bound = self.bind(architecture)?;
        bound(object)
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of a failing object.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        &self.fail_description
    }

    fn texts(&self) -> Texts<'_> {
        (&self.description, &self.fail_description, self.joined)
    }

    /// Both conditions must hold. `other` is not checked on objects for
    /// which `self` fails.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::And, self.texts(), other.texts());
        let (a, b) = (self.bind, other.bind);
        let mut joined = Self::prepared(
            move |architecture| {
                let (first, second) = (a(architecture)?, b(architecture)?);
                let bound: BoundCheck<'_, T> =
                    Box::new(move |o: &T| -> Result<Outcome, RuleError> {
                        let outcome = first(o)?;
                        if !outcome.is_pass() {
                            return Ok(outcome);
                        }
                        second(o)
                    });
                Ok(bound)
            },
            description,
            fail_description,
        );
        joined.joined = Some(Connector::And);
        joined
    }

    /// At least one condition must hold.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::Or, self.texts(), other.texts());
        let (a, b) = (self.bind, other.bind);
        let mut joined = Self::prepared(
            move |architecture| {
                let (first, second) = (a(architecture)?, b(architecture)?);
                let bound: BoundCheck<'_, T> =
                    Box::new(move |o: &T| -> Result<Outcome, RuleError> {
                        let outcome = first(o)?;
                        if outcome.is_pass() {
                            return Ok(outcome);
                        }
                        let other = second(o)?;
                        Ok(outcome.either(|| other))
                    });
                Ok(bound)
            },
            description,
            fail_description,
        );
        joined.joined = Some(Connector::Or);
        joined
    }
}

impl<T: 'static> From<SimpleCondition<T>> for ArchitectureCondition<T> {
    fn from(condition: SimpleCondition<T>) -> Self {
        let check = condition.check;
        let mut lifted = Self::prepared(
            move |_| {
                let check = Arc::clone(&check);
                let bound: BoundCheck<'_, T> =
                    Box::new(move |o: &T| -> Result<Outcome, RuleError> { Ok(check(o)) });
                Ok(bound)
            },
            condition.description,
            condition.fail_description,
        );
        lifted.joined = condition.joined;
        lifted
    }
}

impl<T> Clone for ArchitectureCondition<T> {
    fn clone(&self) -> Self {
        Self {
            bind: Arc::clone(&self.bind),
            description: self.description.clone(),
            fail_description: self.fail_description.clone(),
            joined: self.joined,
        }
    }
}

impl<T> fmt::Debug for ArchitectureCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArchitectureCondition")
            .field("description", &self.description)
            .field("fail_description", &self.fail_description)
            .finish_non_exhaustive()
    }
}

// ────────────────────────────────────────────
// RelationCondition
// ────────────────────────────────────────────

type RelationCheck<T, R> = Arc<dyn Fn(&T, &[&R]) -> bool + Send + Sync>;

/// A condition relating an object to a second set of related objects.
///
/// The related set is supplied later, as an [`ObjectProvider`], via
/// [`RelationCondition::with_related`].
pub struct RelationCondition<T, R> {
    check: RelationCheck<T, R>,
    description: String,
    fail_description: String,
    joined: Option<Connector>,
}

impl<T: 'static, R: 'static> RelationCondition<T, R> {
    fn from_check(
        check: RelationCheck<T, R>,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self {
            check,
            description: description.into(),
            fail_description: fail_description.into(),
            joined: None,
        }
    }

    /// Satisfied iff `relation` holds for at least one related object.
    #[must_use]
    pub fn any(
        relation: impl Fn(&T, &R) -> bool + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self::from_check(
            Arc::new(move |o, related| related.iter().any(|r| relation(o, r))),
            description,
            fail_description,
        )
    }

    /// Satisfied iff `relation` holds for every related object.
    #[must_use]
    pub fn all(
        relation: impl Fn(&T, &R) -> bool + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self::from_check(
            Arc::new(move |o, related| related.iter().all(|r| relation(o, r))),
            description,
            fail_description,
        )
    }

    /// Checks one object against an already computed related set.
    #[must_use]
    pub fn check(&self, object: &T, related: &[&R]) -> bool {
        (self.check)(object, related)
    }

    /// Returns the description, e.g. `depend on classes that`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of a failing object.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        &self.fail_description
    }

    fn texts(&self) -> Texts<'_> {
        (&self.description, &self.fail_description, self.joined)
    }

    /// Both relations must hold against the same related set.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::And, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined = Self::from_check(
            Arc::new(move |o, related| a(o, related) && b(o, related)),
            description,
            fail_description,
        );
        joined.joined = Some(Connector::And);
        joined
    }

    /// At least one relation must hold against the same related set.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::Or, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined = Self::from_check(
            Arc::new(move |o, related| a(o, related) || b(o, related)),
            description,
            fail_description,
        );
        joined.joined = Some(Connector::Or);
        joined
    }

    /// Binds the related set, producing a per-object condition.
    ///
    /// The provider is evaluated once per evaluation, against the same
    /// architecture as the objects being checked.
    #[must_use]
    pub fn with_related(self, related: Arc<dyn ObjectProvider<R>>) -> ArchitectureCondition<T> {
        let related_description = related.description();
        let check = self.check;
        ArchitectureCondition::prepared(
            move |architecture| {
                let objects = related.objects(architecture)?;
                let check = Arc::clone(&check);
                let bound: BoundCheck<'_, T> =
                    Box::new(move |o: &T| -> Result<Outcome, RuleError> {
                        Ok(Outcome::from(check(o, objects.as_slice())))
                    });
                Ok(bound)
            },
            format!("{} {related_description}", self.description),
            format!("{} {related_description}", self.fail_description),
        )
    }
}

impl<T, R> Clone for RelationCondition<T, R> {
    fn clone(&self) -> Self {
        Self {
            check: Arc::clone(&self.check),
            description: self.description.clone(),
            fail_description: self.fail_description.clone(),
            joined: self.joined,
        }
    }
}

impl<T, R> fmt::Debug for RelationCondition<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationCondition")
            .field("description", &self.description)
            .field("fail_description", &self.fail_description)
            .finish_non_exhaustive()
    }
}

// ────────────────────────────────────────────
// ExistsCondition
// ────────────────────────────────────────────

type CountCheck = Arc<dyn Fn(usize) -> bool + Send + Sync>;

/// A cardinality assertion over the whole candidate set.
#[derive(Clone)]
pub struct ExistsCondition {
    check: CountCheck,
    description: String,
    fail_description: String,
    joined: Option<Connector>,
}

impl ExistsCondition {
    fn from_check(check: CountCheck, description: &str, fail_description: &str) -> Self {
        Self {
            check,
            description: description.to_string(),
            fail_description: fail_description.to_string(),
            joined: None,
        }
    }

    /// At least one candidate must exist.
    #[must_use]
    pub fn exists() -> Self {
        Self::from_check(Arc::new(|count| count > 0), "exist", "does not exist")
    }

    /// No candidate may exist.
    #[must_use]
    pub fn absent() -> Self {
        Self::from_check(Arc::new(|count| count == 0), "not exist", "does exist")
    }

    /// Checks the number of candidates.
    #[must_use]
    pub fn check(&self, count: usize) -> bool {
        (self.check)(count)
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of a failing candidate set.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        &self.fail_description
    }

    fn texts(&self) -> Texts<'_> {
        (&self.description, &self.fail_description, self.joined)
    }

    /// Both cardinality assertions must hold.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::And, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined = Self::from_check(
            Arc::new(move |count| a(count) && b(count)),
            &description,
            &fail_description,
        );
        joined.joined = Some(Connector::And);
        joined
    }

    /// At least one cardinality assertion must hold.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        let (description, fail_description) =
            combined_texts(Connector::Or, self.texts(), other.texts());
        let (a, b) = (self.check, other.check);
        let mut joined = Self::from_check(
            Arc::new(move |count| a(count) || b(count)),
            &description,
            &fail_description,
        );
        joined.joined = Some(Connector::Or);
        joined
    }
}

impl fmt::Debug for ExistsCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExistsCondition")
            .field("description", &self.description)
            .field("fail_description", &self.fail_description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnalyzedObject, Type, Visibility};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn is_public() -> SimpleCondition<Type> {
        SimpleCondition::new(
            |t: &Type| t.visibility() == Visibility::Public,
            "be public",
            "is not public",
        )
    }

    fn named_service() -> SimpleCondition<Type> {
        SimpleCondition::new(
            |t: &Type| t.name() == "Service",
            "have name \"Service\"",
            "does not have name \"Service\"",
        )
    }

    #[test]
    fn and_or_follow_boolean_logic() {
        let objects = [
            Type::class("App.Service"),
            Type::class("App.Service").with_visibility(Visibility::Private),
            Type::class("App.Repo"),
            Type::class("App.Repo").with_visibility(Visibility::Internal),
        ];
        let both = is_public().and(named_service());
        let either = is_public().or(named_service());

        for object in &objects {
            let public = is_public().check(object).is_pass();
            let named = named_service().check(object).is_pass();
            assert_eq!(both.check(object).is_pass(), public && named);
            assert_eq!(either.check(object).is_pass(), public || named);
        }
    }

    #[test]
    fn combined_texts_follow_de_morgan() {
        let both = is_public().and(named_service());
        assert_eq!(both.description(), "be public and have name \"Service\"");
        assert_eq!(
            both.fail_description(),
            "is not public or does not have name \"Service\""
        );

        let either = is_public().or(named_service());
        assert_eq!(either.description(), "be public or have name \"Service\"");
        assert_eq!(
            either.fail_description(),
            "is not public and does not have name \"Service\""
        );
    }

    #[test]
    fn mixed_chains_are_parenthesised() {
        let mixed = is_public().and(named_service()).or(is_public());
        insta::assert_snapshot!(
            mixed.description(),
            @r#"(be public and have name "Service") or be public"#
        );
        insta::assert_snapshot!(
            mixed.fail_description(),
            @r#"(is not public or does not have name "Service") and is not public"#
        );

        let lifted: ArchitectureCondition<Type> = is_public().or(named_service()).into();
        let nested = lifted.and(is_public().into());
        insta::assert_snapshot!(
            nested.description(),
            @r#"(be public or have name "Service") and be public"#
        );
    }

    #[test]
    fn uniform_chains_stay_flat() {
        let chain = is_public().and(named_service()).and(is_public());
        assert!(!chain.description().contains('('));
        assert!(!chain.fail_description().contains('('));
    }

    #[test]
    fn and_is_associative() {
        let left = is_public().and(named_service()).and(is_public());
        let right = is_public().and(named_service().and(is_public()));
        assert_eq!(left.description(), right.description());
        let object = Type::class("App.Service");
        assert_eq!(
            left.check(&object).is_pass(),
            right.check(&object).is_pass()
        );
    }

    #[test]
    fn and_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counted = SimpleCondition::new(
            move |_: &Type| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            },
            "counted",
            "not counted",
        );
        let never = SimpleCondition::new(|_: &Type| false, "never", "always");

        let combined = never.and(counted);
        assert!(!combined.check(&Type::class("App.Service")).is_pass());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn or_merges_failure_details() {
        let a = SimpleCondition::explained(|_: &Type| Outcome::fail_with("x"), "a", "not a");
        let b = SimpleCondition::explained(|_: &Type| Outcome::fail_with("y"), "b", "not b");
        let outcome = a.or(b).check(&Type::class("App.Service"));
        assert!(!outcome.is_pass());
        assert_eq!(outcome.detail(), Some("x and y"));
    }

    #[test]
    fn simple_lifts_into_architecture_condition() {
        let lifted: ArchitectureCondition<Type> = is_public().into();
        let architecture = Architecture::default();
        assert_eq!(lifted.description(), "be public");
        assert!(lifted
            .check(&Type::class("App.Service"), &architecture)
            .map(|o| o.is_pass())
            .unwrap_or(false));
    }

    #[test]
    fn architecture_conditions_combine() {
        let known = ArchitectureCondition::new(
            |t: &Type, a: &Architecture| Ok(a.type_of(t.full_name()).is_some()),
            "be known",
            "is unknown",
        );
        let combined = known.or(is_public().into());
        let architecture = Architecture::new([Type::class("App.Known")]);

        let hidden = Type::class("App.Hidden").with_visibility(Visibility::Private);
        assert_eq!(
            combined.check(&hidden, &architecture).map(|o| o.is_pass()),
            Ok(false)
        );
        assert_eq!(combined.fail_description(), "is unknown and is not public");
    }

    #[test]
    fn relation_quantifiers_are_complements() {
        let depends = RelationCondition::any(
            |t: &Type, r: &Type| t.depends_on_type(r.full_name()),
            "depend on classes that",
            "does not depend on classes that",
        );
        let not_depends = RelationCondition::all(
            |t: &Type, r: &Type| !t.depends_on_type(r.full_name()),
            "not depend on classes that",
            "does depend on classes that",
        );

        let repo = Type::class("App.Repo");
        let logger = Type::class("App.Logger");
        let service = Type::class("App.Service").depending_on(
            crate::model::DependencyKind::MethodCall,
            "App.Repo",
        );

        for related in [vec![], vec![&repo], vec![&logger], vec![&repo, &logger]] {
            assert_eq!(
                depends.check(&service, &related),
                !not_depends.check(&service, &related)
            );
        }
    }

    #[test]
    fn exists_polarity() {
        assert!(!ExistsCondition::exists().check(0));
        assert!(ExistsCondition::exists().check(2));
        assert!(ExistsCondition::absent().check(0));
        assert!(!ExistsCondition::absent().check(1));

        let contradiction = ExistsCondition::exists().and(ExistsCondition::absent());
        let tautology = ExistsCondition::exists().or(ExistsCondition::absent());
        for count in 0..3 {
            assert!(!contradiction.check(count));
            assert!(tautology.check(count));
        }
        assert_eq!(contradiction.fail_description(), "does not exist or does exist");
    }
}
