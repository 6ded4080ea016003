//! Conditions over any analyzed object.

use super::{alternatives, condition, quoted, Phrase};
use crate::condition::{
    ArchitectureCondition, BoundCheck, ExistsCondition, Outcome, RelationCondition,
    SimpleCondition,
};
use crate::error::RuleError;
use crate::model::{AnalyzedObject, Type, Visibility};
use crate::pattern::NamePattern;
use crate::provider::ObjectProvider;
use std::sync::Arc;

/// The filtered set must not be empty.
#[must_use]
pub fn exist() -> ExistsCondition {
    ExistsCondition::exists()
}

/// The filtered set must be empty.
#[must_use]
pub fn not_exist() -> ExistsCondition {
    ExistsCondition::absent()
}

fn be_phrase<T: AnalyzedObject>(objects: &[T]) -> Phrase {
    let names: Vec<&str> = objects.iter().map(AnalyzedObject::full_name).collect();
    let (any, all) = alternatives(&names);
    Phrase::be(any).negated_as(all)
}

/// Every object must equal one of `objects`.
pub fn be<T>(objects: impl IntoIterator<Item = T>) -> SimpleCondition<T>
where
    T: AnalyzedObject + PartialEq,
{
    let objects: Vec<T> = objects.into_iter().collect();
    condition(&be_phrase(&objects), false, move |o| objects.contains(o))
}

/// No object may equal any of `objects`.
pub fn not_be<T>(objects: impl IntoIterator<Item = T>) -> SimpleCondition<T>
where
    T: AnalyzedObject + PartialEq,
{
    let objects: Vec<T> = objects.into_iter().collect();
    condition(&be_phrase(&objects), true, move |o| objects.contains(o))
}

/// Lists the distinct dependency targets of `object` selected by `pick`,
/// in dependency order.
fn targets_where<'a, T: AnalyzedObject>(
    object: &'a T,
    pick: impl Fn(&str) -> bool,
) -> Vec<&'a str> {
    let mut targets: Vec<&str> = Vec::new();
    for dependency in object.dependencies() {
        let target = dependency.target();
        if pick(target) && !targets.contains(&target) {
            targets.push(target);
        }
    }
    targets
}

/// Passes iff no offending target was found, explaining the failure with
/// the offending targets otherwise.
fn without_offenders(offenders: &[&str]) -> Outcome {
    if offenders.is_empty() {
        return Outcome::pass();
    }
    let names: Vec<String> = offenders.iter().map(quoted).collect();
    Outcome::fail_with(names.join(", "))
}

/// Some dependency target must match `pattern`.
pub fn depend_on<T: AnalyzedObject>(pattern: impl Into<NamePattern>) -> SimpleCondition<T> {
    let pattern = pattern.into();
    let phrase = Phrase::regular("depend on", quoted(pattern.as_str()));
    condition(&phrase, false, move |o: &T| o.depends_on(&pattern))
}

/// No dependency target may match `pattern`. Failures list the matching
/// targets.
pub fn not_depend_on<T: AnalyzedObject>(pattern: impl Into<NamePattern>) -> SimpleCondition<T> {
    let pattern = pattern.into();
    let (description, fail_description) =
        Phrase::regular("depend on", quoted(pattern.as_str())).condition_texts(true);
    SimpleCondition::explained(
        move |o: &T| without_offenders(&targets_where(o, |t| pattern.matches(t))),
        description,
        fail_description,
    )
}

fn names_of(types: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    types.into_iter().map(Into::into).collect()
}

/// Some dependency must target one of the types named by `types`.
pub fn depend_on_any<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> SimpleCondition<T> {
    let types = names_of(types);
    let (any, _) = alternatives(&types);
    condition(&Phrase::regular("depend on", any), false, move |o: &T| {
        types.iter().any(|t| o.depends_on_type(t))
    })
}

/// No dependency may target a type named by `types`. Failures list the
/// offending targets.
pub fn not_depend_on_any<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> SimpleCondition<T> {
    let types = names_of(types);
    let (any, all) = alternatives(&types);
    let (description, fail_description) = Phrase::regular("depend on", any)
        .negated_as(all)
        .condition_texts(true);
    SimpleCondition::explained(
        move |o: &T| without_offenders(&targets_where(o, |t| types.iter().any(|n| n == t))),
        description,
        fail_description,
    )
}

/// The verb phrase of a provider-based family: the provider's own
/// description in the positive form, its joint description negated.
fn provided_phrase(verb: &'static str, provider: &dyn ObjectProvider<Type>) -> Phrase {
    Phrase::regular(verb, provider.description()).negated_as(provider.joint_description())
}

/// Checks objects against the types yielded by `provider`. The provider
/// runs once per evaluation.
fn against_provided<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
    check: impl Fn(&T, &[&Type]) -> Outcome + Send + Sync + 'static,
    (description, fail_description): (String, String),
) -> ArchitectureCondition<T> {
    let check = Arc::new(check);
    ArchitectureCondition::prepared(
        move |architecture| {
            let provided = provider.objects(architecture)?;
            let check = Arc::clone(&check);
            let bound: BoundCheck<'_, T> =
                Box::new(move |o: &T| -> Result<Outcome, RuleError> {
                    Ok(check(o, provided.as_slice()))
                });
            Ok(bound)
        },
        description,
        fail_description,
    )
}

/// Some dependency must target a type yielded by `provider`, evaluated
/// against the architecture under check.
pub fn depend_on_any_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> ArchitectureCondition<T> {
    let texts = provided_phrase("depend on", &*provider).condition_texts(false);
    against_provided(
        provider,
        |o: &T, types: &[&Type]| {
            Outcome::from(types.iter().any(|t| o.depends_on_type(t.full_name())))
        },
        texts,
    )
}

/// No dependency may target a type yielded by `provider`. Failures list
/// the offending targets.
pub fn not_depend_on_any_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> ArchitectureCondition<T> {
    let texts = provided_phrase("depend on", &*provider).condition_texts(true);
    against_provided(
        provider,
        |o: &T, types: &[&Type]| {
            without_offenders(&targets_where(o, |t| types.iter().any(|ty| ty.full_name() == t)))
        },
        texts,
    )
}

fn only_texts(types: &[String], negated: bool) -> (String, String) {
    match (types.is_empty(), negated) {
        (true, false) => ("have no dependencies".into(), "has dependencies".into()),
        (true, true) => ("have dependencies".into(), "has no dependencies".into()),
        (false, false) => {
            let (any, all) = alternatives(types);
            (
                format!("only depend on {any}"),
                format!("does depend on types other than {all}"),
            )
        }
        (false, true) => {
            let (_, all) = alternatives(types);
            (
                format!("not only depend on {all}"),
                format!("does only depend on {all}"),
            )
        }
    }
}

/// Every dependency must target one of the types named by `types`.
///
/// An object without dependencies satisfies any non-empty set. An empty
/// set reads as "have no dependencies" and holds only for objects without
/// dependencies. Failures list the offending targets.
pub fn only_depend_on<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> SimpleCondition<T> {
    let types = names_of(types);
    let (description, fail_description) = only_texts(&types, false);
    SimpleCondition::explained(
        move |o: &T| without_offenders(&targets_where(o, |t| !types.iter().any(|n| n == t))),
        description,
        fail_description,
    )
}

/// Some dependency must target a type outside of `types`.
pub fn not_only_depend_on<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> SimpleCondition<T> {
    let types = names_of(types);
    let (description, fail_description) = only_texts(&types, true);
    SimpleCondition::new(
        move |o: &T| !targets_where(o, |t| !types.iter().any(|n| n == t)).is_empty(),
        description,
        fail_description,
    )
}

/// Every dependency must target a type yielded by `provider`. Failures
/// list the offending targets.
pub fn only_depend_on_types_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> ArchitectureCondition<T> {
    let texts = (
        format!("only depend on {}", provider.description()),
        format!("does depend on types other than {}", provider.joint_description()),
    );
    against_provided(
        provider,
        |o: &T, allowed: &[&Type]| {
            without_offenders(&targets_where(o, |t| {
                !allowed.iter().any(|ty| ty.full_name() == t)
            }))
        },
        texts,
    )
}

/// Some dependency must target a type not yielded by `provider`.
pub fn not_only_depend_on_types_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> ArchitectureCondition<T> {
    let all = provider.joint_description();
    let texts = (
        format!("not only depend on {all}"),
        format!("does only depend on {all}"),
    );
    against_provided(
        provider,
        |o: &T, allowed: &[&Type]| {
            Outcome::from(
                o.dependencies()
                    .iter()
                    .any(|d| !allowed.iter().any(|ty| ty.full_name() == d.target())),
            )
        },
        texts,
    )
}

fn name_condition<T: AnalyzedObject>(
    object: String,
    negated: bool,
    test: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> SimpleCondition<T> {
    condition(&Phrase::regular("have", object), negated, test)
}

/// The name must be exactly `name`.
pub fn have_name<T: AnalyzedObject>(name: impl Into<String>) -> SimpleCondition<T> {
    let name = name.into();
    name_condition(format!("name {}", quoted(&name)), false, move |o: &T| {
        o.name() == name
    })
}

/// The name must not be `name`.
pub fn not_have_name<T: AnalyzedObject>(name: impl Into<String>) -> SimpleCondition<T> {
    let name = name.into();
    name_condition(format!("name {}", quoted(&name)), true, move |o: &T| {
        o.name() == name
    })
}

/// The name must start with `prefix`.
pub fn have_name_starting_with<T: AnalyzedObject>(prefix: impl Into<String>) -> SimpleCondition<T> {
    let prefix = prefix.into();
    let object = format!("name starting with {}", quoted(&prefix));
    name_condition(object, false, move |o: &T| o.name().starts_with(&prefix))
}

/// The name must not start with `prefix`.
pub fn not_have_name_starting_with<T: AnalyzedObject>(
    prefix: impl Into<String>,
) -> SimpleCondition<T> {
    let prefix = prefix.into();
    let object = format!("name starting with {}", quoted(&prefix));
    name_condition(object, true, move |o: &T| o.name().starts_with(&prefix))
}

/// The name must end with `suffix`.
pub fn have_name_ending_with<T: AnalyzedObject>(suffix: impl Into<String>) -> SimpleCondition<T> {
    let suffix = suffix.into();
    let object = format!("name ending with {}", quoted(&suffix));
    name_condition(object, false, move |o: &T| o.name().ends_with(&suffix))
}

/// The name must not end with `suffix`.
pub fn not_have_name_ending_with<T: AnalyzedObject>(
    suffix: impl Into<String>,
) -> SimpleCondition<T> {
    let suffix = suffix.into();
    let object = format!("name ending with {}", quoted(&suffix));
    name_condition(object, true, move |o: &T| o.name().ends_with(&suffix))
}

/// The name must contain `text`.
pub fn have_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> SimpleCondition<T> {
    let text = text.into();
    let object = format!("name containing {}", quoted(&text));
    name_condition(object, false, move |o: &T| o.name().contains(&text))
}

/// The name must not contain `text`.
pub fn not_have_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> SimpleCondition<T> {
    let text = text.into();
    let object = format!("name containing {}", quoted(&text));
    name_condition(object, true, move |o: &T| o.name().contains(&text))
}

/// The full name must be exactly `full_name`.
pub fn have_full_name<T: AnalyzedObject>(full_name: impl Into<String>) -> SimpleCondition<T> {
    let full_name = full_name.into();
    let object = format!("full name {}", quoted(&full_name));
    name_condition(object, false, move |o: &T| o.full_name() == full_name)
}

/// The full name must not be `full_name`.
pub fn not_have_full_name<T: AnalyzedObject>(full_name: impl Into<String>) -> SimpleCondition<T> {
    let full_name = full_name.into();
    let object = format!("full name {}", quoted(&full_name));
    name_condition(object, true, move |o: &T| o.full_name() == full_name)
}

/// The full name must contain `text`.
pub fn have_full_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> SimpleCondition<T> {
    let text = text.into();
    let object = format!("full name containing {}", quoted(&text));
    name_condition(object, false, move |o: &T| o.full_name().contains(&text))
}

/// The full name must not contain `text`.
pub fn not_have_full_name_containing<T: AnalyzedObject>(
    text: impl Into<String>,
) -> SimpleCondition<T> {
    let text = text.into();
    let object = format!("full name containing {}", quoted(&text));
    name_condition(object, true, move |o: &T| o.full_name().contains(&text))
}

/// The full name must match `pattern`.
pub fn have_full_name_matching<T: AnalyzedObject>(
    pattern: impl Into<NamePattern>,
) -> SimpleCondition<T> {
    let pattern = pattern.into();
    let object = format!("full name matching {}", quoted(pattern.as_str()));
    name_condition(object, false, move |o: &T| pattern.matches(o.full_name()))
}

/// The full name must not match `pattern`.
pub fn not_have_full_name_matching<T: AnalyzedObject>(
    pattern: impl Into<NamePattern>,
) -> SimpleCondition<T> {
    let pattern = pattern.into();
    let object = format!("full name matching {}", quoted(pattern.as_str()));
    name_condition(object, true, move |o: &T| pattern.matches(o.full_name()))
}

/// The declared visibility must be `visibility`.
pub fn visibility_is<T: AnalyzedObject>(visibility: Visibility) -> SimpleCondition<T> {
    condition(&Phrase::be(visibility.as_str()), false, move |o: &T| {
        o.visibility() == visibility
    })
}

/// The declared visibility must not be `visibility`.
pub fn visibility_is_not<T: AnalyzedObject>(visibility: Visibility) -> SimpleCondition<T> {
    condition(&Phrase::be(visibility.as_str()), true, move |o: &T| {
        o.visibility() == visibility
    })
}

/// Some related class must be a dependency target.
#[must_use]
pub fn depend_on_classes_that<T: AnalyzedObject>() -> RelationCondition<T, Type> {
    RelationCondition::any(
        |o: &T, class: &Type| o.depends_on_type(class.full_name()),
        "depend on classes that",
        "does not depend on classes that",
    )
}

/// No related class may be a dependency target.
#[must_use]
pub fn not_depend_on_classes_that<T: AnalyzedObject>() -> RelationCondition<T, Type> {
    RelationCondition::all(
        |o: &T, class: &Type| !o.depends_on_type(class.full_name()),
        "not depend on classes that",
        "does depend on classes that",
    )
}

/// Some related attribute must be applied to the object.
#[must_use]
pub fn have_attributes_that<T: AnalyzedObject>() -> RelationCondition<T, Type> {
    RelationCondition::any(
        |o: &T, attribute: &Type| o.has_attribute(attribute.full_name()),
        "have attributes that",
        "does not have attributes that",
    )
}

/// No related attribute may be applied to the object.
#[must_use]
pub fn not_have_attributes_that<T: AnalyzedObject>() -> RelationCondition<T, Type> {
    RelationCondition::all(
        |o: &T, attribute: &Type| !o.has_attribute(attribute.full_name()),
        "not have attributes that",
        "does have attributes that",
    )
}
