//! Named sources of objects, usable as rule parameters.

use crate::engine;
use crate::error::RuleError;
use crate::kind::ObjectKind;
use crate::model::{Architecture, Type};
use crate::predicate::Predicate;
use tracing::debug;

/// Yields the objects matching some filter from an architecture.
///
/// Finished rules are providers of their own filtered objects, so one
/// rule's candidate set can be handed to another rule as a parameter.
pub trait ObjectProvider<T>: Send + Sync {
    /// Human-readable description of the provided objects, read as "any
    /// of them".
    fn description(&self) -> String;

    /// Description of the provided objects read as "all of them", as
    /// negated texts use it. Defaults to [`ObjectProvider::description`].
    fn joint_description(&self) -> String {
        self.description()
    }

    /// Returns the provided objects in model order.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::CombinedRuleObjects`] when the provider is part
    /// of a combined rule, or any error raised while filtering.
    fn objects<'a>(&self, architecture: &'a Architecture) -> Result<Vec<&'a T>, RuleError>;
}

/// A fixed set of types named by full name.
///
/// Names are resolved through [`Architecture::type_of`]; a name missing
/// from the architecture provides nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet {
    names: Vec<String>,
}

impl TypeSet {
    /// Creates a set from type full names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the full names in the set.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn joined(&self, connector: &str) -> String {
        if self.names.is_empty() {
            return "no types".to_string();
        }
        self.names
            .iter()
            .map(|n| format!("\"{n}\""))
            .collect::<Vec<_>>()
            .join(connector)
    }
}

impl ObjectProvider<Type> for TypeSet {
    fn description(&self) -> String {
        self.joined(" or ")
    }

    fn joint_description(&self) -> String {
        self.joined(" and ")
    }

    fn objects<'a>(&self, architecture: &'a Architecture) -> Result<Vec<&'a Type>, RuleError> {
        Ok(self
            .names
            .iter()
            .filter_map(|name| {
                let resolved = architecture.type_of(name);
                if resolved.is_none() {
                    debug!("Type {} is not part of the architecture", name);
                }
                resolved
            })
            .collect())
    }
}

/// The related objects of a relational condition: every object of kind
/// `K` satisfying all collected predicates.
pub struct RelatedObjects<K: ObjectKind> {
    predicates: Vec<Predicate<K::Object>>,
}

impl<K: ObjectKind> RelatedObjects<K> {
    /// Creates an unfiltered set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            predicates: Vec::new(),
        }
    }

    /// Narrows the set with another predicate.
    pub fn add_predicate(&mut self, predicate: Predicate<K::Object>) {
        self.predicates.push(predicate);
    }
}

impl<K: ObjectKind> Default for RelatedObjects<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ObjectKind> Clone for RelatedObjects<K> {
    fn clone(&self) -> Self {
        Self {
            predicates: self.predicates.clone(),
        }
    }
}

impl<K: ObjectKind> std::fmt::Debug for RelatedObjects<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelatedObjects")
            .field("kind", &K::LABEL)
            .field("predicates", &self.predicates)
            .finish()
    }
}

impl<K: ObjectKind> ObjectProvider<K::Object> for RelatedObjects<K> {
    fn description(&self) -> String {
        self.predicates
            .iter()
            .map(Predicate::description)
            .collect::<Vec<_>>()
            .join(" and ")
    }

    fn objects<'a>(
        &self,
        architecture: &'a Architecture,
    ) -> Result<Vec<&'a K::Object>, RuleError> {
        engine::filter(K::select(architecture), &self.predicates, architecture)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Classes;
    use crate::model::AnalyzedObject;

    fn architecture() -> Architecture {
        Architecture::new([
            Type::class("App.Service"),
            Type::interface("App.IRepo"),
            Type::class("App.Repo"),
        ])
    }

    #[test]
    fn type_set_resolves_in_given_order_and_skips_unknown() {
        let architecture = architecture();
        let set = TypeSet::new(["App.Repo", "App.Missing", "App.Service"]);
        let names: Vec<&str> = set
            .objects(&architecture)
            .unwrap()
            .iter()
            .map(|t| t.full_name())
            .collect();
        assert_eq!(names, ["App.Repo", "App.Service"]);
        assert_eq!(
            set.description(),
            "\"App.Repo\" or \"App.Missing\" or \"App.Service\""
        );
        assert_eq!(
            set.joint_description(),
            "\"App.Repo\" and \"App.Missing\" and \"App.Service\""
        );
        assert_eq!(TypeSet::default().joint_description(), "no types");
    }

    #[test]
    fn related_objects_filter_by_kind_and_predicates() {
        let architecture = architecture();
        let mut related = RelatedObjects::<Classes>::new();
        related.add_predicate(Predicate::new(
            |t: &Type| t.name().ends_with("Repo"),
            "have name ending with \"Repo\"",
            "does not have name ending with \"Repo\"",
        ));

        let objects = related.objects(&architecture).unwrap();
        assert_eq!(objects.len(), 1);
        assert_eq!(objects[0].full_name(), "App.Repo");
        assert_eq!(related.description(), "have name ending with \"Repo\"");
    }
}
