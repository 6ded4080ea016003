//! Predicates over any analyzed object.

use super::{alternatives, architecture_predicate, predicate, quoted, Phrase};
use crate::model::{AnalyzedObject, Type, Visibility};
use crate::pattern::NamePattern;
use crate::predicate::Predicate;
use crate::provider::ObjectProvider;
use std::sync::Arc;

fn be_phrase<T: AnalyzedObject>(objects: &[T]) -> Phrase {
    let names: Vec<&str> = objects.iter().map(AnalyzedObject::full_name).collect();
    let (any, all) = alternatives(&names);
    Phrase::be(any).negated_as(all)
}

/// Objects equal to one of `objects`.
pub fn are<T>(objects: impl IntoIterator<Item = T>) -> Predicate<T>
where
    T: AnalyzedObject + PartialEq,
{
    let objects: Vec<T> = objects.into_iter().collect();
    predicate(&be_phrase(&objects), false, move |o| objects.contains(o))
}

/// Objects equal to none of `objects`.
pub fn are_not<T>(objects: impl IntoIterator<Item = T>) -> Predicate<T>
where
    T: AnalyzedObject + PartialEq,
{
    let objects: Vec<T> = objects.into_iter().collect();
    predicate(&be_phrase(&objects), true, move |o| objects.contains(o))
}

fn depend_on_phrase(pattern: &NamePattern) -> Phrase {
    Phrase::regular("depend on", quoted(pattern.as_str()))
}

/// Objects with a dependency whose target matches `pattern`.
pub fn depend_on<T: AnalyzedObject>(pattern: impl Into<NamePattern>) -> Predicate<T> {
    let pattern = pattern.into();
    predicate(&depend_on_phrase(&pattern), false, move |o: &T| {
        o.depends_on(&pattern)
    })
}

/// Objects without any dependency whose target matches `pattern`.
pub fn do_not_depend_on<T: AnalyzedObject>(pattern: impl Into<NamePattern>) -> Predicate<T> {
    let pattern = pattern.into();
    predicate(&depend_on_phrase(&pattern), true, move |o: &T| {
        o.depends_on(&pattern)
    })
}

fn names_of(types: impl IntoIterator<Item = impl Into<String>>) -> Vec<String> {
    types.into_iter().map(Into::into).collect()
}

fn depend_on_any_phrase(types: &[String]) -> Phrase {
    let (any, all) = alternatives(types);
    Phrase::regular("depend on", any).negated_as(all)
}

/// Objects depending on at least one of the types named by `types`.
pub fn depend_on_any<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> Predicate<T> {
    let types = names_of(types);
    predicate(&depend_on_any_phrase(&types), false, move |o: &T| {
        types.iter().any(|t| o.depends_on_type(t))
    })
}

/// Objects depending on none of the types named by `types`.
pub fn do_not_depend_on_any<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> Predicate<T> {
    let types = names_of(types);
    predicate(&depend_on_any_phrase(&types), true, move |o: &T| {
        types.iter().any(|t| o.depends_on_type(t))
    })
}

fn depend_on_any_in_predicate<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
    negated: bool,
) -> Predicate<T> {
    let phrase = Phrase::regular("depend on", provider.description())
        .negated_as(provider.joint_description());
    architecture_predicate(&phrase, negated, move |o: &T, architecture| {
        let types = provider.objects(architecture)?;
        Ok(types.iter().any(|t| o.depends_on_type(t.full_name())))
    })
}

/// Objects depending on at least one type yielded by `provider`.
pub fn depend_on_any_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> Predicate<T> {
    depend_on_any_in_predicate(provider, false)
}

/// Objects depending on no type yielded by `provider`.
pub fn do_not_depend_on_any_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> Predicate<T> {
    depend_on_any_in_predicate(provider, true)
}

fn only_depend_on_predicate<T: AnalyzedObject>(types: Vec<String>, negated: bool) -> Predicate<T> {
    let phrase = if types.is_empty() {
        Phrase::regular("have", "no dependencies")
    } else {
        let (any, all) = alternatives(&types);
        Phrase::regular("only depend on", any).negated_as(all)
    };
    predicate(&phrase, negated, move |o: &T| {
        o.dependencies()
            .iter()
            .all(|d| types.iter().any(|t| t == d.target()))
    })
}

/// Objects whose every dependency targets one of `types`. With no
/// types, objects without dependencies.
pub fn only_depend_on<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> Predicate<T> {
    only_depend_on_predicate(names_of(types), false)
}

/// Objects with at least one dependency outside of `types`.
pub fn do_not_only_depend_on<T: AnalyzedObject>(
    types: impl IntoIterator<Item = impl Into<String>>,
) -> Predicate<T> {
    only_depend_on_predicate(names_of(types), true)
}

fn only_depend_on_types_in_predicate<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
    negated: bool,
) -> Predicate<T> {
    let phrase = Phrase::regular("only depend on", provider.description())
        .negated_as(provider.joint_description());
    architecture_predicate(&phrase, negated, move |o: &T, architecture| {
        let allowed = provider.objects(architecture)?;
        Ok(o.dependencies()
            .iter()
            .all(|d| allowed.iter().any(|t| t.full_name() == d.target())))
    })
}

/// Objects whose every dependency targets a type yielded by `provider`.
pub fn only_depend_on_types_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> Predicate<T> {
    only_depend_on_types_in_predicate(provider, false)
}

/// Objects with a dependency on a type not yielded by `provider`.
pub fn do_not_only_depend_on_types_in<T: AnalyzedObject>(
    provider: Arc<dyn ObjectProvider<Type>>,
) -> Predicate<T> {
    only_depend_on_types_in_predicate(provider, true)
}

fn name_predicate<T: AnalyzedObject>(
    object: String,
    negated: bool,
    test: impl Fn(&T) -> bool + Send + Sync + 'static,
) -> Predicate<T> {
    predicate(&Phrase::regular("have", object), negated, test)
}

/// Objects named exactly `name`.
pub fn have_name<T: AnalyzedObject>(name: impl Into<String>) -> Predicate<T> {
    let name = name.into();
    name_predicate(format!("name {}", quoted(&name)), false, move |o: &T| {
        o.name() == name
    })
}

/// Objects not named `name`.
pub fn do_not_have_name<T: AnalyzedObject>(name: impl Into<String>) -> Predicate<T> {
    let name = name.into();
    name_predicate(format!("name {}", quoted(&name)), true, move |o: &T| {
        o.name() == name
    })
}

/// Objects whose name starts with `prefix`.
pub fn have_name_starting_with<T: AnalyzedObject>(prefix: impl Into<String>) -> Predicate<T> {
    let prefix = prefix.into();
    let object = format!("name starting with {}", quoted(&prefix));
    name_predicate(object, false, move |o: &T| o.name().starts_with(&prefix))
}

/// Objects whose name does not start with `prefix`.
pub fn do_not_have_name_starting_with<T: AnalyzedObject>(
    prefix: impl Into<String>,
) -> Predicate<T> {
    let prefix = prefix.into();
    let object = format!("name starting with {}", quoted(&prefix));
    name_predicate(object, true, move |o: &T| o.name().starts_with(&prefix))
}

/// Objects whose name ends with `suffix`.
pub fn have_name_ending_with<T: AnalyzedObject>(suffix: impl Into<String>) -> Predicate<T> {
    let suffix = suffix.into();
    let object = format!("name ending with {}", quoted(&suffix));
    name_predicate(object, false, move |o: &T| o.name().ends_with(&suffix))
}

/// Objects whose name does not end with `suffix`.
pub fn do_not_have_name_ending_with<T: AnalyzedObject>(suffix: impl Into<String>) -> Predicate<T> {
    let suffix = suffix.into();
    let object = format!("name ending with {}", quoted(&suffix));
    name_predicate(object, true, move |o: &T| o.name().ends_with(&suffix))
}

/// Objects whose name contains `text`.
pub fn have_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> Predicate<T> {
    let text = text.into();
    let object = format!("name containing {}", quoted(&text));
    name_predicate(object, false, move |o: &T| o.name().contains(&text))
}

/// Objects whose name does not contain `text`.
pub fn do_not_have_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> Predicate<T> {
    let text = text.into();
    let object = format!("name containing {}", quoted(&text));
    name_predicate(object, true, move |o: &T| o.name().contains(&text))
}

/// Objects whose full name is exactly `full_name`.
pub fn have_full_name<T: AnalyzedObject>(full_name: impl Into<String>) -> Predicate<T> {
    let full_name = full_name.into();
    let object = format!("full name {}", quoted(&full_name));
    name_predicate(object, false, move |o: &T| o.full_name() == full_name)
}

/// Objects whose full name is not `full_name`.
pub fn do_not_have_full_name<T: AnalyzedObject>(full_name: impl Into<String>) -> Predicate<T> {
    let full_name = full_name.into();
    let object = format!("full name {}", quoted(&full_name));
    name_predicate(object, true, move |o: &T| o.full_name() == full_name)
}

/// Objects whose full name contains `text`.
pub fn have_full_name_containing<T: AnalyzedObject>(text: impl Into<String>) -> Predicate<T> {
    let text = text.into();
    let object = format!("full name containing {}", quoted(&text));
    name_predicate(object, false, move |o: &T| o.full_name().contains(&text))
}

/// Objects whose full name does not contain `text`.
pub fn do_not_have_full_name_containing<T: AnalyzedObject>(
    text: impl Into<String>,
) -> Predicate<T> {
    let text = text.into();
    let object = format!("full name containing {}", quoted(&text));
    name_predicate(object, true, move |o: &T| o.full_name().contains(&text))
}

/// Objects whose full name matches `pattern`.
pub fn have_full_name_matching<T: AnalyzedObject>(pattern: impl Into<NamePattern>) -> Predicate<T> {
    let pattern = pattern.into();
    let object = format!("full name matching {}", quoted(pattern.as_str()));
    name_predicate(object, false, move |o: &T| pattern.matches(o.full_name()))
}

/// Objects whose full name does not match `pattern`.
pub fn do_not_have_full_name_matching<T: AnalyzedObject>(
    pattern: impl Into<NamePattern>,
) -> Predicate<T> {
    let pattern = pattern.into();
    let object = format!("full name matching {}", quoted(pattern.as_str()));
    name_predicate(object, true, move |o: &T| pattern.matches(o.full_name()))
}

/// Objects declared with `visibility`.
pub fn visibility_is<T: AnalyzedObject>(visibility: Visibility) -> Predicate<T> {
    predicate(&Phrase::be(visibility.as_str()), false, move |o: &T| {
        o.visibility() == visibility
    })
}

/// Objects declared with any visibility but `visibility`.
pub fn visibility_is_not<T: AnalyzedObject>(visibility: Visibility) -> Predicate<T> {
    predicate(&Phrase::be(visibility.as_str()), true, move |o: &T| {
        o.visibility() == visibility
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Architecture, DependencyKind};
    use crate::provider::TypeSet;

    fn samples() -> Vec<Type> {
        vec![
            Type::class("App.Service")
                .depending_on(DependencyKind::MethodCall, "App.Repo")
                .depending_on(DependencyKind::MethodCall, "App.Logger"),
            Type::class("App.Repo").with_visibility(Visibility::Internal),
            Type::class("App.Data.UserRepo")
                .with_visibility(Visibility::Private)
                .depending_on(DependencyKind::FieldType, "App.Repo"),
        ]
    }

    fn assert_complements(positive: &Predicate<Type>, negative: &Predicate<Type>) {
        let architecture = Architecture::new(samples());
        for object in architecture.types() {
            assert_eq!(
                positive.test(object, &architecture),
                negative.test(object, &architecture).map(|held| !held),
                "{} / {} disagree on {}",
                positive.description(),
                negative.description(),
                object.full_name()
            );
        }
        assert_ne!(positive.description(), negative.description());
    }

    #[test]
    fn every_negation_is_the_complement() {
        let provider: Arc<dyn ObjectProvider<Type>> = Arc::new(TypeSet::new(["App.Logger"]));
        let pairs: Vec<(Predicate<Type>, Predicate<Type>)> = vec![
            (
                are([Type::class("App.Repo")]),
                are_not([Type::class("App.Repo")]),
            ),
            (depend_on("App.*"), do_not_depend_on("App.*")),
            (
                depend_on_any(["App.Logger"]),
                do_not_depend_on_any(["App.Logger"]),
            ),
            (
                depend_on_any_in(Arc::clone(&provider)),
                do_not_depend_on_any_in(Arc::clone(&provider)),
            ),
            (
                only_depend_on(["App.Repo"]),
                do_not_only_depend_on(["App.Repo"]),
            ),
            (
                only_depend_on(Vec::<String>::new()),
                do_not_only_depend_on(Vec::<String>::new()),
            ),
            (
                only_depend_on_types_in(Arc::new(TypeSet::new(["App.Repo"]))),
                do_not_only_depend_on_types_in(Arc::new(TypeSet::new(["App.Repo"]))),
            ),
            (have_name("Repo"), do_not_have_name("Repo")),
            (
                have_name_starting_with("S"),
                do_not_have_name_starting_with("S"),
            ),
            (
                have_name_ending_with("Repo"),
                do_not_have_name_ending_with("Repo"),
            ),
            (
                have_name_containing("er"),
                do_not_have_name_containing("er"),
            ),
            (have_full_name("App.Repo"), do_not_have_full_name("App.Repo")),
            (
                have_full_name_containing("Data"),
                do_not_have_full_name_containing("Data"),
            ),
            (
                have_full_name_matching("App.**.*Repo"),
                do_not_have_full_name_matching("App.**.*Repo"),
            ),
        ];
        for (positive, negative) in &pairs {
            assert_complements(positive, negative);
        }
        for visibility in Visibility::ALL {
            assert_complements(&visibility_is(visibility), &visibility_is_not(visibility));
        }
    }

    #[test]
    fn alternatives_are_joined_by_polarity() {
        let positive: Predicate<Type> = depend_on_any(["App.A", "App.B"]);
        let negative: Predicate<Type> = do_not_depend_on_any(["App.A", "App.B"]);
        assert_eq!(positive.description(), "depend on \"App.A\" or \"App.B\"");
        assert_eq!(
            negative.description(),
            "do not depend on \"App.A\" and \"App.B\""
        );
    }

    #[test]
    fn provided_alternatives_are_joined_by_polarity() {
        let set = || -> Arc<dyn ObjectProvider<Type>> {
            Arc::new(TypeSet::new(["App.A", "App.B"]))
        };
        let positive: Predicate<Type> = depend_on_any_in(set());
        let negative: Predicate<Type> = do_not_depend_on_any_in(set());
        let only: Predicate<Type> = do_not_only_depend_on_types_in(set());

        assert_eq!(positive.description(), "depend on \"App.A\" or \"App.B\"");
        assert_eq!(
            negative.description(),
            do_not_depend_on_any::<Type>(["App.A", "App.B"]).description()
        );
        assert_eq!(
            only.description(),
            "do not only depend on \"App.A\" and \"App.B\""
        );
    }

    #[test]
    fn only_depend_on_types_in_checks_every_dependency() {
        let architecture = Architecture::new(samples());
        let only_repo: Predicate<Type> =
            only_depend_on_types_in(Arc::new(TypeSet::new(["App.Repo"])));
        let matching: Vec<&str> = architecture
            .types()
            .iter()
            .filter(|t| only_repo.test(t, &architecture) == Ok(true))
            .map(|t| t.full_name())
            .collect();
        assert_eq!(matching, ["App.Repo", "App.Data.UserRepo"]);
    }

    #[test]
    fn only_depend_on_nothing_means_no_dependencies() {
        let architecture = Architecture::default();
        let none: Predicate<Type> = only_depend_on(Vec::<String>::new());
        assert_eq!(none.description(), "have no dependencies");
        assert_eq!(
            none.test(&Type::class("App.Plain"), &architecture),
            Ok(true)
        );
        assert_eq!(
            none.test(
                &Type::class("App.Busy").depending_on(DependencyKind::Other, "App.Plain"),
                &architecture
            ),
            Ok(false)
        );
    }

    #[test]
    fn only_depend_on_holds_vacuously_for_nonempty_set() {
        let architecture = Architecture::default();
        let only_repo: Predicate<Type> = only_depend_on(["App.Repo"]);
        assert_eq!(
            only_repo.test(&Type::class("App.Plain"), &architecture),
            Ok(true)
        );
    }

    #[test]
    fn visibilities_are_exclusive() {
        let architecture = Architecture::default();
        let private = Type::class("App.Hidden").with_visibility(Visibility::Private);
        let not_public: Predicate<Type> = visibility_is_not(Visibility::Public);
        let is_private: Predicate<Type> = visibility_is(Visibility::Private);
        let internal = Type::class("App.Inner").with_visibility(Visibility::Internal);

        assert_eq!(is_private.test(&private, &architecture), Ok(true));
        assert_eq!(not_public.test(&internal, &architecture), Ok(true));
        assert_eq!(is_private.test(&internal, &architecture), Ok(false));
        assert_eq!(is_private.description(), "are private");
        assert_eq!(not_public.fail_description(), "is public");
    }
}
