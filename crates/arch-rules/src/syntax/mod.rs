//! The fluent grammar.
//!
//! Every stage is its own type wrapping the [`RuleBuilder`] of the rule
//! being written. A transition moves the builder into the next stage, so a
//! stage only ever offers the calls that are legal at its position:
//!
//! ```text
//! classes() ─┬─ that() ── <predicate> ──┬─ and() ── that-stage ...
//!            │                          └─ should()
//!            └─ should() ── <condition> ─┬─ and() / or() ── <condition> ...
//!                                        ├─ because(..)
//!                                        └─ and_also() / or_also() ── classes() ...
//! ```
//!
//! Predicate factories live in [`ObjectsThat`] and [`TypesThat`], condition
//! factories in [`ObjectsShould`] and [`TypesShould`]. They are provided
//! methods, so a stage gets the whole family by implementing one method.

mod combined;
mod conditions;
mod given;
mod predicates;
mod related;
mod should;

pub use combined::CombinedRuleDefinition;
pub use conditions::{ObjectsShould, TypesShould};
pub use given::{GivenObjects, GivenObjectsConjunction, GivenObjectsThat};
pub use predicates::{ObjectsThat, TypesThat};
pub use related::{RelatedConjunction, RelatedThat};
pub use should::{Chained, ExistenceRule, Fresh, Should, ShouldConjunction};

use arch_rules_core::{ObjectKind, RuleBuilder};

/// A grammar stage that can be opened around an existing builder.
pub trait SyntaxElement<K: ObjectKind>: Sized {
    /// Wraps `builder` without touching its accumulated state.
    fn from_builder(builder: RuleBuilder<K>) -> Self;
}

/// Moves `builder` into the stage `S`.
pub(crate) fn create<S, K>(builder: RuleBuilder<K>) -> S
where
    S: SyntaxElement<K>,
    K: ObjectKind,
{
    S::from_builder(builder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arch_rules_core::definitions::predicates;
    use arch_rules_core::{ArchRule, Classes, ObjectProvider, Type};

    #[test]
    fn transitions_keep_accumulated_state() {
        let mut builder = RuleBuilder::<Classes>::new();
        builder.add_predicate(predicates::have_name::<Type>("Service"));

        let given: GivenObjectsConjunction<Classes> = create(builder);
        let rule = given.and().are_public().should().be_public().because("reasons");

        assert_eq!(
            rule.description(),
            "Classes that have name \"Service\" and are public should be public because reasons"
        );
    }

    #[test]
    fn given_stage_describes_its_objects() {
        let given: GivenObjects<Classes> = create(RuleBuilder::new());
        assert_eq!(ObjectProvider::description(&given), "Classes");
    }
}
