//! # arch-rules-core
//!
//! Core of an architecture rule checker: rules are written against a
//! read-only model of a codebase and evaluated into violation reports.
//!
//! This crate provides:
//!
//! - [`Architecture`], [`Type`] and [`Member`]: the analyzed model
//! - [`Predicate`] and the condition family in [`condition`], with
//!   ready-made factories in [`definitions`]
//! - [`ObjectProvider`] for using one rule's objects inside another rule
//! - [`RuleBuilder`], [`ArchRule`] and [`CombinedRule`]
//! - [`Checker`] for running named, configurable rules together
//!
//! Most users write rules through the fluent API of the `arch-rules`
//! crate, which builds on these types.
//!
//! ## Example
//!
//! ```
//! use arch_rules_core::definitions::{conditions, type_predicates};
//! use arch_rules_core::{Architecture, ArchRule, Classes, DependencyKind, RuleBuilder, Type};
//!
//! let architecture = Architecture::new([
//!     Type::class("App.Service").depending_on(DependencyKind::MethodCall, "App.Repo"),
//!     Type::class("App.Repo"),
//! ]);
//!
//! let mut rule = RuleBuilder::<Classes>::new();
//! rule.add_predicate(type_predicates::reside_in_namespace("App"));
//! rule.add_condition(conditions::only_depend_on(["App.Repo"]));
//!
//! let report = rule.evaluate(&architecture)?;
//! assert!(report.passed());
//! # Ok::<(), arch_rules_core::RuleError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod checker;
pub mod condition;
mod config;
pub mod definitions;
pub mod engine;
mod error;
mod kind;
mod model;
mod pattern;
mod predicate;
mod provider;
mod rule;
mod types;

pub use builder::RuleBuilder;
pub use checker::{Checker, CheckerBuilder};
pub use condition::{
    ArchitectureCondition, BoundCheck, ExistsCondition, Outcome, RelationCondition,
    SimpleCondition,
};
pub use config::{Config, ConfigError, RuleConfig};
pub use engine::TerminalCondition;
pub use error::RuleError;
pub use kind::{Attributes, Classes, Interfaces, MethodMembers, ObjectKind, Types};
pub use model::{
    AnalyzedObject, Architecture, Dependency, DependencyKind, Member, MemberKind, Type, TypeKind,
    Visibility,
};
pub use pattern::{name_matches, NamePattern};
pub use predicate::Predicate;
pub use provider::{ObjectProvider, RelatedObjects, TypeSet};
pub use rule::{combine_reports, ArchRule, CombinedRule, Connector, RuleBox, RuleRef};
pub use types::{CheckResult, RuleReport, Severity, Violation};
