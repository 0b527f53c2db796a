//! Integration tests for member constraint sets.
//!
//! Covers registration, nested sets, instance-level chains and both
//! evaluation modes through the public prelude.

use nebula_constraint::prelude::*;
use pretty_assertions::assert_eq;

#[derive(Debug, Clone, PartialEq)]
struct Address {
    city: Option<String>,
    zip: String,
}

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: Option<String>,
    age: i32,
    email: String,
    tags: Vec<String>,
    address: Option<Address>,
}

fn person() -> Person {
    Person {
        name: Some("Ada".to_owned()),
        age: 36,
        email: "ada@example.com".to_owned(),
        tags: vec!["admin".to_owned()],
        address: Some(Address {
            city: Some("London".to_owned()),
            zip: "N1 9GU".to_owned(),
        }),
    }
}

fn person_constraints(config: ValidationConfig) -> MemberConstraintSet<Person> {
    let mut set = MemberConstraintSet::with_config(config);
    set.verify_that("Name", |p: &Person| p.name.clone())
        .unwrap()
        .is_not_null_or_empty();
    set.verify_that("Age", |p: &Person| p.age)
        .unwrap()
        .is_greater_than(18);
    set.verify_that("Email", |p: &Person| p.email.clone())
        .unwrap()
        .contains("@");
    set
}

// ============================================================================
// MEMBER CHAINS
// ============================================================================

#[test]
fn valid_message_produces_no_errors() {
    let set = person_constraints(ValidationConfig::default());
    assert!(set.validate(&person()).is_ok());

    let mut errors = ErrorMessageCollection::new();
    assert!(!set.write_error_messages(&person(), &mut errors));
    assert!(errors.is_empty());
}

#[test]
fn failed_member_reports_under_its_name() {
    let set = person_constraints(ValidationConfig::default());
    let subject = Person { age: 16, ..person() };

    let errors = set.validate(&subject).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["Age"]);

    let error = &errors.get("Age")[0];
    assert_eq!(error.to_string(), "Age must be greater than 18");
    assert_eq!(error.member().type_name(), "i32");
    assert_eq!(error.value(), &Argument::text("16"));
}

#[test]
fn collect_all_reports_every_failed_member() {
    let set = person_constraints(ValidationConfig::default());
    let subject = Person {
        name: None,
        age: 3,
        email: "nobody".to_owned(),
        ..person()
    };

    let errors = set.validate(&subject).unwrap_err();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["Name", "Age", "Email"]);
    assert_eq!(errors.get("Email")[0].to_string(), "Email must contain '@'");
}

#[test]
fn halt_on_first_error_stops_after_first_member() {
    let set = person_constraints(ValidationConfig::fail_fast());
    let subject = Person {
        name: None,
        age: 3,
        ..person()
    };

    let mut errors = ErrorMessageCollection::new();
    assert!(set.write_error_messages(&subject, &mut errors));
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("Name"));
}

#[test]
fn registering_a_member_again_extends_its_chain() {
    let mut set = MemberConstraintSet::<Person>::new();
    set.verify_that("Age", |p: &Person| p.age)
        .unwrap()
        .is_greater_than_or_equal_to(0);
    set.verify_that("Age", |p: &Person| p.age)
        .unwrap()
        .is_smaller_than(130);

    assert_eq!(set.member_names().collect::<Vec<_>>(), vec!["Age"]);

    let negative = set.validate(&Person { age: -1, ..person() }).unwrap_err();
    assert_eq!(negative.get("Age")[0].constraint_name().as_str(), "is_greater_than_or_equal_to");

    let ancient = set.validate(&Person { age: 200, ..person() }).unwrap_err();
    assert_eq!(ancient.len(), 1);
    assert_eq!(ancient.get("Age")[0].to_string(), "Age must be smaller than 130");
}

#[test]
fn chains_thread_filter_output() {
    let mut set = MemberConstraintSet::<Person>::new();
    set.verify_that("Name", |p: &Person| p.name.clone())
        .unwrap()
        .is_not_null()
        .matches("^[A-Z]")
        .unwrap();

    assert!(set.validate(&person()).is_ok());

    let missing = set.validate(&Person { name: None, ..person() }).unwrap_err();
    assert_eq!(missing.get("Name")[0].to_string(), "Name must not be null");

    let lower = Person {
        name: Some("ada".to_owned()),
        ..person()
    };
    let errors = set.validate(&lower).unwrap_err();
    assert_eq!(errors.get("Name")[0].to_string(), "Name must match pattern '^[A-Z]'");
}

#[test]
fn collection_and_custom_predicates() {
    let mut set = MemberConstraintSet::<Person>::new();
    set.verify_that("Tags", |p: &Person| p.tags.clone())
        .unwrap()
        .is_not_empty()
        .satisfies_fn("has_unique_tags", |tags: &Vec<String>| {
            let mut sorted = tags.clone();
            sorted.sort();
            sorted.dedup();
            sorted.len() == tags.len()
        })
        .unwrap();

    assert!(set.validate(&person()).is_ok());

    let empty = set.validate(&Person { tags: Vec::new(), ..person() }).unwrap_err();
    assert_eq!(empty.get("Tags")[0].constraint_name().as_str(), "is_not_empty");

    let duplicated = Person {
        tags: vec!["a".to_owned(), "a".to_owned()],
        ..person()
    };
    let error = set.validate(&duplicated).unwrap_err();
    assert_eq!(error.get("Tags")[0].constraint_name().as_str(), "has_unique_tags");
}

#[test]
fn invalid_member_name_is_rejected() {
    let mut set = MemberConstraintSet::<Person>::new();
    let error = set.verify_that("not a name", |p: &Person| p.age).unwrap_err();
    assert!(matches!(error, ConstraintError::InvalidIdentifier { .. }));
    assert!(set.is_empty());
}

// ============================================================================
// NESTED SETS
// ============================================================================

fn nested_constraints(config: ValidationConfig) -> MemberConstraintSet<Person> {
    let mut set = MemberConstraintSet::with_config(config);
    set.verify_that("Address", |p: &Person| p.address.clone())
        .unwrap()
        .is_not_null()
        .and_nested(|address| {
            address
                .verify_that("City", |a: &Address| a.city.clone())?
                .is_not_null();
            address
                .verify_that("Zip", |a: &Address| a.zip.clone())?
                .is_not_null_or_empty();
            Ok(())
        })
        .unwrap();
    set
}

#[test]
fn nested_members_use_dotted_keys() {
    let set = nested_constraints(ValidationConfig::default());
    assert_eq!(
        set.member_names().collect::<Vec<_>>(),
        vec!["Address", "Address.City", "Address.Zip"]
    );

    let subject = Person {
        address: Some(Address {
            city: None,
            zip: String::new(),
        }),
        ..person()
    };
    let errors = set.validate(&subject).unwrap_err();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["Address.City", "Address.Zip"]);
    assert_eq!(errors.get("Address.City")[0].to_string(), "Address.City must not be null");
    assert_eq!(errors.get("Address.City")[0].member().type_name(), "Option<String>");
}

#[test]
fn nested_members_are_skipped_when_parent_chain_fails() {
    let set = nested_constraints(ValidationConfig::default());
    let errors = set.validate(&Person { address: None, ..person() }).unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("Address")[0].to_string(), "Address must not be null");
}

#[test]
fn nested_instance_constraints_run_after_nested_members_pass() {
    let mut set = MemberConstraintSet::<Person>::new();
    set.verify_that("Address", |p: &Person| p.address.clone())
        .unwrap()
        .is_not_null()
        .and_nested(|address| {
            address
                .verify_that("City", |a: &Address| a.city.clone())?
                .is_not_null();
            address
                .verify_that_instance()
                .satisfies_fn("is_london_zip", |a: &Address| a.zip.starts_with('N'))?;
            Ok(())
        })
        .unwrap();

    let outside = Person {
        address: Some(Address {
            city: Some("Paris".to_owned()),
            zip: "75001".to_owned(),
        }),
        ..person()
    };
    let errors = set.validate(&outside).unwrap_err();
    assert_eq!(errors.get("Address")[0].constraint_name().as_str(), "is_london_zip");

    let cityless = Person {
        address: Some(Address {
            city: None,
            zip: "75001".to_owned(),
        }),
        ..person()
    };
    let errors = set.validate(&cityless).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert!(errors.contains_key("Address.City"));
}

// ============================================================================
// INSTANCE CHAINS
// ============================================================================

#[test]
fn instance_chain_reports_under_empty_key() {
    let mut set = MemberConstraintSet::<Person>::new();
    set.verify_that_instance()
        .satisfies_fn("has_contact", |p: &Person| p.email.contains('@') || p.address.is_some())
        .unwrap();

    let unreachable = Person {
        email: String::new(),
        address: None,
        ..person()
    };
    let errors = set.validate(&unreachable).unwrap_err();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec![""]);
    assert_eq!(errors.get("")[0].to_string(), "Person does not satisfy the required condition");
}

#[test]
fn instance_chain_is_skipped_when_a_member_fails() {
    let mut set = person_constraints(ValidationConfig::default());
    set.verify_that_instance()
        .satisfies_fn("is_never_valid", |_: &Person| false)
        .unwrap();

    let errors = set.validate(&Person { age: 1, ..person() }).unwrap_err();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["Age"]);

    let errors = set.validate(&person()).unwrap_err();
    assert_eq!(errors.keys().collect::<Vec<_>>(), vec![""]);
}

// ============================================================================
// CONFIGURATION AND READERS
// ============================================================================

#[test]
fn configuration_from_json_selects_mode() {
    let config = ValidationConfig::from_json_str(r#"{ "mode": "halt_on_first_error" }"#).unwrap();
    assert_eq!(config.mode, EvaluationMode::HaltOnFirstError);

    let set = person_constraints(config);
    let subject = Person {
        name: None,
        age: 3,
        ..person()
    };
    assert_eq!(set.validate(&subject).unwrap_err().len(), 1);
}

#[test]
fn custom_reader_receives_every_message() {
    let set = person_constraints(ValidationConfig::default());
    let subject = Person {
        name: None,
        age: 3,
        ..person()
    };

    let mut reader: Vec<(String, ErrorMessage)> = Vec::new();
    assert!(set.write_error_messages(&subject, &mut reader));
    let keys: Vec<_> = reader.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["Name", "Age"]);
}

#[test]
fn cloned_set_evaluates_independently() {
    let set = person_constraints(ValidationConfig::default());
    let mut extended = set.clone();
    extended
        .verify_that("Tags", |p: &Person| p.tags.clone())
        .unwrap()
        .is_empty();

    assert!(set.validate(&person()).is_ok());
    assert!(extended.validate(&person()).is_err());
}
