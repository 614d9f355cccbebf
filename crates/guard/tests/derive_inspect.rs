//! Coverage for the `#[derive(Inspect)]` registration macro.

use dto_guard::{Inspect, Rule, Validator};
use std::any::Any;

#[derive(Inspect)]
struct SignupRequest {
    #[rule(not_empty)]
    #[rule(min_length = 3)]
    #[rule(max_length = 64)]
    name: String,
    #[rule(range(min = 13, max = 130))]
    age: u32,
    #[rule(email)]
    contact: Option<String>,
    #[rule(required, positive)]
    score: Option<i64>,
    #[rule(matches = "^[a-z0-9-]+$", name = "slugName")]
    slug: String,
    #[rule(custom = "shouting")]
    greeting: String,
    note: String,
}

/// Upper-case-only greeting, attached through `#[rule(custom)]`.
struct Shouting;

impl Rule for Shouting {
    fn validate(&self, value: &dyn Any) -> bool {
        matches!(
            value.downcast_ref::<String>(),
            Some(text) if !text.chars().any(char::is_lowercase)
        )
    }

    fn message(&self) -> String {
        "value must be upper-case".to_string()
    }
}

fn shouting() -> Box<dyn Rule> {
    Box::new(Shouting)
}

fn subject() -> SignupRequest {
    SignupRequest {
        name: "ada".to_string(),
        age: 36,
        contact: Some("ada@example.com".to_string()),
        score: Some(5),
        slug: "field-notes".to_string(),
        greeting: "HELLO".to_string(),
        note: String::new(),
    }
}

#[test]
fn well_formed_request_passes() {
    assert!(Validator::instance().validate(&subject()).is_ok());
}

#[test]
fn fields_enumerate_in_declaration_order() {
    let dto = subject();
    let names: Vec<&str> = dto.fields().iter().map(|field| field.name()).collect();
    assert_eq!(
        names,
        vec!["name", "age", "contact", "score", "slugName", "greeting", "note"]
    );
}

#[test]
fn rules_attach_in_attribute_order() {
    let dto = SignupRequest {
        name: "a".to_string(),
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(
        error,
        Some(ref e) if e.field() == "name"
            && e.rule_message() == "value must be at least 3 characters"
    ));
}

#[test]
fn first_field_wins_over_later_failures() {
    let dto = SignupRequest {
        name: "  ".to_string(),
        age: 7,
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(error, Some(ref e) if e.field() == "name"));
}

#[test]
fn absent_optional_skips_value_rules() {
    let dto = SignupRequest {
        contact: None,
        ..subject()
    };
    assert!(Validator::instance().validate(&dto).is_ok());
}

#[test]
fn present_optional_is_still_checked() {
    let dto = SignupRequest {
        contact: Some("not-an-address".to_string()),
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(
        error,
        Some(ref e) if e.field() == "contact"
            && e.rule_message() == "value must be a valid email address"
    ));
}

#[test]
fn required_rejects_absent_optionals() {
    let dto = SignupRequest {
        score: None,
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(
        error,
        Some(ref e) if e.field() == "score" && e.rule_message() == "value is required"
    ));
}

#[test]
fn renamed_field_reports_wire_name() {
    let dto = SignupRequest {
        slug: "Bad Slug".to_string(),
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(error, Some(ref e) if e.field() == "slugName"));
}

#[test]
fn custom_rule_constructor_is_attached() {
    let dto = SignupRequest {
        greeting: "hello".to_string(),
        ..subject()
    };
    let error = Validator::instance().validate(&dto).err();

    assert!(matches!(
        error,
        Some(ref e) if e.field() == "greeting" && e.rule_message() == "value must be upper-case"
    ));
}

#[test]
fn range_is_inclusive_at_bounds() {
    assert!(
        Validator::instance()
            .validate(&SignupRequest {
                age: 13,
                ..subject()
            })
            .is_ok()
    );
    assert!(
        Validator::instance()
            .validate(&SignupRequest {
                age: 130,
                ..subject()
            })
            .is_ok()
    );

    let error = Validator::instance()
        .validate(&SignupRequest {
            age: 131,
            ..subject()
        })
        .err();
    assert!(matches!(
        error,
        Some(ref e) if e.field() == "age"
            && e.rule_message() == "value must be between 13 and 130"
    ));
}

#[derive(Inspect)]
struct Empty {}

#[test]
fn struct_without_fields_passes() {
    assert!(Validator::instance().validate(&Empty {}).is_ok());
}
