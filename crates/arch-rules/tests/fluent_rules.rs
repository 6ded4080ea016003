//! Integration test: rules written through the fluent grammar and
//! evaluated against small hand-built architectures.

use arch_rules::prelude::*;
use arch_rules::{
    Architecture, CombinedRule, DependencyKind, Member, RuleError, RuleRef, Type, TypeSet,
    Visibility,
};
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn layered() -> Architecture {
    Architecture::new([
        Type::class("App.Domain.Order"),
        Type::class("App.Domain.Customer")
            .depending_on(DependencyKind::FieldType, "App.Domain.Order"),
        Type::class("App.Domain.Invoice")
            .depending_on(DependencyKind::MethodCall, "App.Web.InvoiceView"),
        Type::attribute("App.Audited"),
        Type::class("App.Web.InvoiceView"),
        Type::class("App.Web.OrderController")
            .with_attribute("App.Audited")
            .depending_on(DependencyKind::FieldType, "App.Domain.Order")
            .with_member(Member::method("Index")),
    ])
}

// ── End-to-end scenarios ──

#[test]
fn only_depend_on_reports_the_offending_target() {
    init_tracing();
    let architecture = Architecture::new([
        Type::class("App.Service")
            .depending_on(DependencyKind::MethodCall, "App.Repo")
            .depending_on(DependencyKind::MethodCall, "App.Logger"),
        Type::class("App.Repo"),
        Type::class("App.Logger"),
    ]);

    let rule = classes()
        .that()
        .reside_in_namespace("App")
        .should()
        .only_depend_on(["App.Repo"]);
    let report = rule.evaluate(&architecture).unwrap();

    assert!(!report.passed());
    assert_eq!(report.violating_objects(), ["App.Service"]);
    insta::assert_snapshot!(
        report.violations[0].to_string(),
        @r#""App.Service" does depend on types other than "App.Repo": "App.Logger""#
    );
}

#[test]
fn predicates_exclude_objects_before_the_condition() {
    let architecture = Architecture::new([
        Type::class("App.PrivateFooImpl").with_visibility(Visibility::Private),
        Type::class("App.PublicFooImpl"),
    ]);

    let rule = types()
        .that()
        .are_private()
        .should()
        .not_have_name_containing("Impl");
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(report.violating_objects(), ["App.PrivateFooImpl"]);
    assert_eq!(
        report.violations[0].message,
        "does have name containing \"Impl\""
    );
    assert_eq!(
        rule.description(),
        "Types that are private should not have name containing \"Impl\""
    );
}

#[test]
fn missing_objects_fail_as_a_whole() {
    let architecture = Architecture::new([
        Type::interface("App.IRepository"),
        Type::class("App.Service"),
    ]);

    let rule = classes()
        .that()
        .implement_interface("**.IRepository")
        .should()
        .exist();
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].object, None);
    assert_eq!(report.violations[0].message, "does not exist");
    insta::assert_snapshot!(
        rule.description(),
        @r#"Classes that implement interface "**.IRepository" should exist"#
    );
}

// ── Grammar ──

#[test]
fn filtered_objects_keep_model_order() {
    let architecture = layered();
    let given = classes().that().do_not_reside_in_namespace("App.Web");

    let names: Vec<&str> = given
        .objects(&architecture)
        .unwrap()
        .iter()
        .map(|t| t.full_name())
        .collect();
    assert_eq!(
        names,
        ["App.Domain.Order", "App.Domain.Customer", "App.Domain.Invoice"]
    );
}

#[test]
fn conjunction_of_predicates_narrows_further() {
    let architecture = layered();
    let given = classes()
        .that()
        .reside_in_namespace("App.Domain")
        .and()
        .depend_on("App.**");

    assert_eq!(
        given.description(),
        "Classes that reside in namespace \"App.Domain\" and depend on \"App.**\""
    );
    assert_eq!(given.objects(&architecture).unwrap().len(), 2);
}

#[test]
fn and_fails_with_either_reason() {
    let architecture = Architecture::new([
        Type::class("App.OrderService"),
        Type::class("App.Hidden").with_visibility(Visibility::Internal),
    ]);

    let rule = classes()
        .should()
        .be_public()
        .and()
        .have_name_ending_with("Service");
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(
        rule.description(),
        "Classes should be public and have name ending with \"Service\""
    );
    assert_eq!(report.violating_objects(), ["App.Hidden"]);
    assert_eq!(
        report.violations[0].message,
        "is not public or does not have name ending with \"Service\""
    );
}

#[test]
fn or_fails_only_when_both_fail() {
    let architecture = Architecture::new([
        Type::class("App.OrderService").with_visibility(Visibility::Internal),
        Type::class("App.Hidden").with_visibility(Visibility::Internal),
    ]);

    let rule = classes()
        .should()
        .be_public()
        .or()
        .have_name_ending_with("Service");
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(report.violating_objects(), ["App.Hidden"]);
    assert_eq!(
        report.violations[0].message,
        "is not public and does not have name ending with \"Service\""
    );
}

#[test]
fn mixed_chains_read_with_parentheses() {
    let architecture = Architecture::new([
        Type::class("App.OrderService"),
        Type::class("App.Hidden").with_visibility(Visibility::Internal),
        Type::class("App.Legacy").with_visibility(Visibility::Internal),
    ]);

    let rule = classes()
        .should()
        .be_public()
        .and()
        .have_name_ending_with("Service")
        .or()
        .have_name("Legacy");
    let report = rule.evaluate(&architecture).unwrap();

    insta::assert_snapshot!(
        rule.description(),
        @r#"Classes should (be public and have name ending with "Service") or have name "Legacy""#
    );
    assert_eq!(report.violating_objects(), ["App.Hidden"]);
    assert_eq!(
        report.violations[0].message,
        "(is not public or does not have name ending with \"Service\") and does not have name \
         \"Legacy\""
    );
}

#[test]
fn provided_types_are_described_like_named_types() {
    let named = classes().should().not_depend_on_any(["App.A", "App.B"]);
    let provided = classes()
        .should()
        .not_depend_on_any_in(TypeSet::new(["App.A", "App.B"]));
    assert_eq!(named.description(), provided.description());

    let only = classes()
        .should()
        .only_depend_on_types_in(TypeSet::new(["App.A", "App.B"]));
    assert_eq!(
        only.description(),
        classes().should().only_depend_on(["App.A", "App.B"]).description()
    );
}

#[test]
fn provider_predicates_select_subjects() {
    let architecture = layered();
    let domain = classes().that().reside_in_namespace("App.Domain");

    let rule = classes()
        .that()
        .do_not_only_depend_on_types_in(domain)
        .should()
        .reside_in_namespace("App.Web");
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(
        rule.description(),
        "Classes that do not only depend on Classes that reside in namespace \"App.Domain\" \
         should reside in namespace \"App.Web\""
    );
    assert_eq!(report.violating_objects(), ["App.Domain.Invoice"]);
}

#[test]
fn member_kinds_and_assignability_by_name() {
    let architecture = Architecture::new([
        Type::interface("App.IEntity"),
        Type::class("App.Order")
            .implementing("App.IEntity")
            .with_member(Member::property("Id")),
        Type::class("App.Draft")
            .implementing("App.IEntity")
            .with_member(Member::field("Id")),
        Type::class("App.Clock").with_member(Member::method("Now")),
    ]);

    let rule = classes()
        .that()
        .are_assignable_to_types_with_full_name_containing("IEntity")
        .should()
        .have_property_member_with_name("Id");
    let report = rule.evaluate(&architecture).unwrap();
    assert_eq!(report.violating_objects(), ["App.Draft"]);
    assert_eq!(
        report.violations[0].message,
        "does not have property member with name \"Id\""
    );

    let clocks = classes()
        .that()
        .have_method_member_with_name("Now")
        .should()
        .not_be_assignable_to_types_with_full_name_containing("IEntity");
    assert!(clocks.has_no_violations(&architecture).unwrap());
}

#[test]
fn because_is_appended() {
    let rule = interfaces()
        .should()
        .have_name_starting_with("I")
        .because("it is the naming convention");

    assert_eq!(
        rule.description(),
        "Interfaces should have name starting with \"I\" because it is the naming convention"
    );
}

#[test]
fn relational_condition_checks_related_classes() {
    let architecture = layered();

    let rule = classes()
        .that()
        .reside_in_namespace("App.Domain")
        .should()
        .not_depend_on_classes_that()
        .reside_in_namespace("App.Web");
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(
        rule.description(),
        "Classes that reside in namespace \"App.Domain\" should not depend on classes that \
         reside in namespace \"App.Web\""
    );
    assert_eq!(report.violating_objects(), ["App.Domain.Invoice"]);
    assert_eq!(
        report.violations[0].message,
        "does depend on classes that reside in namespace \"App.Web\""
    );
}

#[test]
fn relational_condition_continues_with_more_conditions() {
    let architecture = layered();

    let rule = classes()
        .that()
        .reside_in_namespace("App.Web")
        .should()
        .have_attributes_that()
        .have_full_name("App.Audited")
        .or_should()
        .have_name_ending_with("View");
    let report = rule.evaluate(&architecture).unwrap();

    assert!(report.passed(), "{:?}", report.violations);
    assert_eq!(
        rule.description(),
        "Classes that reside in namespace \"App.Web\" should have attributes that have full \
         name \"App.Audited\" or have name ending with \"View\""
    );
}

#[test]
fn one_rule_feeds_another() {
    let architecture = layered();
    let domain = classes().that().reside_in_namespace("App.Domain");

    let rule = classes()
        .that()
        .reside_in_namespace("App.Web")
        .should()
        .only_depend_on_types_in(domain);
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(
        rule.description(),
        "Classes that reside in namespace \"App.Web\" should only depend on Classes that \
         reside in namespace \"App.Domain\""
    );
    assert_eq!(report.violating_objects(), ["App.Web.OrderController"]);
    assert!(report.violations[0].message.ends_with(": \"App.Audited\""));
}

#[test]
fn method_members_are_rule_subjects() {
    let architecture = layered();

    let rule = method_members().should().be_public();
    assert!(rule.has_no_violations(&architecture).unwrap());
    assert_eq!(rule.description(), "Method members should be public");
}

// ── Combined rules ──

#[test]
fn combined_definition_refuses_objects() {
    let architecture = layered();
    let given = classes().should().be_public().and_also().interfaces();

    assert_eq!(
        given.objects(&architecture).unwrap_err(),
        RuleError::CombinedRuleObjects {
            description: "Classes should be public and Interfaces".to_string()
        }
    );
}

#[test]
fn combined_provider_error_aborts_evaluation() {
    let architecture = layered();
    let combined = classes().should().be_public().or_also().classes();

    let rule = types().should().not_depend_on_any_in(combined);
    let err = rule.evaluate(&architecture).unwrap_err();

    assert!(matches!(err, RuleError::CombinedRuleObjects { .. }));
}

#[test]
fn and_also_requires_both_rules() {
    let architecture = layered();

    let rule = classes()
        .that()
        .reside_in_namespace("App.Domain")
        .should()
        .not_depend_on("App.Web.**")
        .and_also()
        .attributes()
        .should()
        .exist();
    let report = rule.evaluate(&architecture).unwrap();

    assert_eq!(
        rule.description(),
        "Classes that reside in namespace \"App.Domain\" should not depend on \"App.Web.**\" \
         and Attributes should exist"
    );
    assert_eq!(report.violating_objects(), ["App.Domain.Invoice"]);
    assert_eq!(
        report.violations[0].rule,
        "Classes that reside in namespace \"App.Domain\" should not depend on \"App.Web.**\""
    );
}

#[test]
fn or_also_passes_when_one_rule_holds() {
    let architecture = layered();

    let rule = classes()
        .should()
        .have_name_starting_with("X")
        .or_also()
        .interfaces()
        .should()
        .not_exist();

    assert!(rule.has_no_violations(&architecture).unwrap());
}

#[test]
fn combined_rule_mixes_object_kinds() {
    let architecture = layered();
    let member_rule: RuleRef = Arc::new(method_members().should().have_name("Index"));
    let attribute_rule: RuleRef =
        Arc::new(attributes().should().have_name_ending_with("Attribute"));

    let both = CombinedRule::and(Arc::clone(&member_rule), Arc::clone(&attribute_rule));
    let either = CombinedRule::or(member_rule, attribute_rule);

    assert_eq!(
        both.description(),
        "Method members should have name \"Index\" and Attributes should have name ending with \
         \"Attribute\""
    );
    assert_eq!(
        both.evaluate(&architecture).unwrap().violating_objects(),
        ["App.Audited"]
    );
    assert!(either.has_no_violations(&architecture).unwrap());
}

// ── Concurrency ──

#[test]
fn finished_rules_are_checked_from_many_threads() {
    init_tracing();
    let architecture = Arc::new(layered());
    let rules: Vec<RuleRef> = vec![
        Arc::new(
            classes()
                .that()
                .reside_in_namespace("App.Domain")
                .should()
                .not_depend_on("App.Web.**"),
        ),
        Arc::new(classes().that().have_name("Nothing").should().not_exist()),
        Arc::new(types().should().not_be_nested()),
    ];

    let handles: Vec<_> = rules
        .into_iter()
        .map(|rule| {
            let architecture = Arc::clone(&architecture);
            std::thread::spawn(move || rule.evaluate(&architecture).unwrap().violations.len())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counts, [1, 0, 0]);
}
