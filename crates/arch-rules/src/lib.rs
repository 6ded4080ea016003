//! # arch-rules
//!
//! Architecture rules as type-checked sentences.
//!
//! Rules are written against an [`Architecture`], a read-only model of a
//! codebase, and read like the constraint they enforce. The grammar is
//! enforced by the compiler: a condition cannot be written before
//! `should()`, and a predicate cannot follow a condition.
//!
//! ## Quick Start
//!
//! ```
//! use arch_rules::prelude::*;
//! use arch_rules::{Architecture, DependencyKind, Type};
//!
//! let architecture = Architecture::new([
//!     Type::class("App.Domain.Order"),
//!     Type::class("App.Web.OrderController")
//!         .depending_on(DependencyKind::FieldType, "App.Domain.Order"),
//! ]);
//!
//! let rule = classes()
//!     .that()
//!     .reside_in_namespace("App.Domain")
//!     .should()
//!     .not_depend_on("App.Web.**")
//!     .because("the domain does not know about delivery");
//!
//! assert!(rule.has_no_violations(&architecture)?);
//! # Ok::<(), arch_rules::RuleError>(())
//! ```
//!
//! ## Combining Rules
//!
//! ```
//! use arch_rules::prelude::*;
//! use arch_rules::{Architecture, Type};
//!
//! let architecture = Architecture::new([Type::interface("App.IRepository")]);
//!
//! let rule = interfaces()
//!     .should()
//!     .have_name_starting_with("I")
//!     .and_also()
//!     .classes()
//!     .that()
//!     .implement_interface("**.IRepository")
//!     .should()
//!     .not_exist();
//!
//! let report = rule.evaluate(&architecture)?;
//! assert!(report.passed());
//! # Ok::<(), arch_rules::RuleError>(())
//! ```
//!
//! Rules of different kinds can also be joined after the fact with
//! [`CombinedRule::and`] and [`CombinedRule::or`], and run together by a
//! [`Checker`].

#![forbid(unsafe_code)]

pub mod syntax;

pub use arch_rules_core::*;

use syntax::{create, GivenObjects};

/// Rules about every type.
#[must_use]
pub fn types() -> GivenObjects<Types> {
    objects()
}

/// Rules about classes.
#[must_use]
pub fn classes() -> GivenObjects<Classes> {
    objects()
}

/// Rules about interfaces.
#[must_use]
pub fn interfaces() -> GivenObjects<Interfaces> {
    objects()
}

/// Rules about attributes.
#[must_use]
pub fn attributes() -> GivenObjects<Attributes> {
    objects()
}

/// Rules about method members.
#[must_use]
pub fn method_members() -> GivenObjects<MethodMembers> {
    objects()
}

/// Rules about objects of any kind `K`.
#[must_use]
pub fn objects<K: ObjectKind>() -> GivenObjects<K> {
    create(RuleBuilder::new())
}

/// Everything needed to write and check rules.
pub mod prelude {
    pub use crate::syntax::{ObjectsShould, ObjectsThat, TypesShould, TypesThat};
    pub use crate::{attributes, classes, interfaces, method_members, objects, types};
    pub use arch_rules_core::{AnalyzedObject, ArchRule, ObjectProvider};
}
