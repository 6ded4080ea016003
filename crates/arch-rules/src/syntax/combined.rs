//! Second halves of combined rules.

use super::given::GivenObjects;
use super::create;
use arch_rules_core::{
    Attributes, Classes, Connector, Interfaces, MethodMembers, ObjectKind, RuleBuilder, RuleRef,
    Types,
};

/// A finished rule waiting for the objects of the rule it is combined
/// with.
///
/// The second rule may range over a different kind of object than the
/// first. Its given stages still act as object providers, but asking them
/// for objects fails with [`arch_rules_core::RuleError::CombinedRuleObjects`].
pub struct CombinedRuleDefinition {
    prior: RuleRef,
    connector: Connector,
}

impl CombinedRuleDefinition {
    pub(crate) fn new(prior: RuleRef, connector: Connector) -> Self {
        Self { prior, connector }
    }

    /// Continues with objects of kind `K`.
    #[must_use]
    pub fn objects<K: ObjectKind>(self) -> GivenObjects<K> {
        create(RuleBuilder::combined_with(self.prior, self.connector))
    }

    /// Continues with all types.
    #[must_use]
    pub fn types(self) -> GivenObjects<Types> {
        self.objects()
    }

    /// Continues with classes.
    #[must_use]
    pub fn classes(self) -> GivenObjects<Classes> {
        self.objects()
    }

    /// Continues with interfaces.
    #[must_use]
    pub fn interfaces(self) -> GivenObjects<Interfaces> {
        self.objects()
    }

    /// Continues with attributes.
    #[must_use]
    pub fn attributes(self) -> GivenObjects<Attributes> {
        self.objects()
    }

    /// Continues with method members.
    #[must_use]
    pub fn method_members(self) -> GivenObjects<MethodMembers> {
        self.objects()
    }
}

impl std::fmt::Debug for CombinedRuleDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CombinedRuleDefinition")
            .field("prior", &self.prior.description())
            .field("connector", &self.connector)
            .finish()
    }
}
