//! Predicates narrow the set of objects a rule is checked against.

use crate::error::RuleError;
use crate::model::Architecture;
use std::fmt;
use std::sync::Arc;

type SimpleTest<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;
type ArchitectureTest<T> = Arc<dyn Fn(&T, &Architecture) -> Result<bool, RuleError> + Send + Sync>;

enum PredicateTest<T> {
    Simple(SimpleTest<T>),
    Architecture(ArchitectureTest<T>),
}

impl<T> Clone for PredicateTest<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Simple(test) => Self::Simple(Arc::clone(test)),
            Self::Architecture(test) => Self::Architecture(Arc::clone(test)),
        }
    }
}

/// A boolean filter over one object, with the text used to describe it.
///
/// Both texts are fixed when the predicate is created.
pub struct Predicate<T> {
    test: PredicateTest<T>,
    description: String,
    fail_description: String,
}

impl<T: 'static> Predicate<T> {
    /// Creates a predicate that only looks at the object.
    #[must_use]
    pub fn new(
        test: impl Fn(&T) -> bool + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self {
            test: PredicateTest::Simple(Arc::new(test)),
            description: description.into(),
            fail_description: fail_description.into(),
        }
    }

    /// Creates a predicate that needs the whole architecture as context.
    #[must_use]
    pub fn with_architecture(
        test: impl Fn(&T, &Architecture) -> Result<bool, RuleError> + Send + Sync + 'static,
        description: impl Into<String>,
        fail_description: impl Into<String>,
    ) -> Self {
        Self {
            test: PredicateTest::Architecture(Arc::new(test)),
            description: description.into(),
            fail_description: fail_description.into(),
        }
    }

    /// Evaluates the predicate for one object.
    ///
    /// # Errors
    ///
    /// Propagates errors from architecture-scoped tests, e.g. an object
    /// provider that cannot produce objects.
    pub fn test(&self, object: &T, architecture: &Architecture) -> Result<bool, RuleError> {
        match &self.test {
            PredicateTest::Simple(test) => Ok(test(object)),
            PredicateTest::Architecture(test) => test(object, architecture),
        }
    }

    /// Returns true if this predicate needs the architecture as context.
    #[must_use]
    pub fn needs_architecture(&self) -> bool {
        matches!(self.test, PredicateTest::Architecture(_))
    }

    /// Returns the description, e.g. `have name "Service"`.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the description of an object failing this predicate.
    #[must_use]
    pub fn fail_description(&self) -> &str {
        &self.fail_description
    }
}

impl<T> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            test: self.test.clone(),
            description: self.description.clone(),
            fail_description: self.fail_description.clone(),
        }
    }
}

impl<T> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("description", &self.description)
            .field("fail_description", &self.fail_description)
            .finish_non_exhaustive()
    }
}
