#![cfg(feature = "validation")]
//! Integration tests for the validus library.
//!
//! These tests use the prelude only and exercise the modules together, the
//! way an application validating user input would.

use rstest::rstest;
use validus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Registration {
    username: String,
    password: String,
    tags: Vec<String>,
}

fn username(input: &str) -> ValidationNel<String, String> {
    Validation::from_condition(
        input.len() >= 3,
        input.to_string(),
        format!("username {input:?} is shorter than 3 characters"),
    )
    .into_nel()
}

fn password(input: &str) -> ValidationNel<String, String> {
    let long_enough = Validation::from_condition(
        input.len() >= 8,
        (),
        "password is shorter than 8 characters".to_string(),
    )
    .into_nel();
    let has_digit = Validation::from_condition(
        input.chars().any(|character| character.is_ascii_digit()),
        (),
        "password has no digit".to_string(),
    )
    .into_nel();

    long_enough
        .ap_right(has_digit)
        .ap_right(Validation::success(input.to_string()))
}

fn tag(input: &str) -> ValidationNel<String, String> {
    Validation::from_condition(
        input.chars().all(char::is_alphanumeric),
        input.to_lowercase(),
        format!("tag {input:?} is not alphanumeric"),
    )
    .into_nel()
}

fn register(name: &str, secret: &str, tags: &[&str]) -> ValidationNel<String, Registration> {
    let build = curry!(|username: String, password: String, tags: Vec<String>| Registration {
        username,
        password,
        tags
    });

    username(name)
        .map(build)
        .ap(password(secret))
        .ap(traverse(tags.iter().copied(), tag))
}

#[rstest]
fn valid_registration() {
    let registration = register("alice", "s3cretpass", &["Rust", "FP"]);
    assert_eq!(
        registration,
        Validation::success(Registration {
            username: "alice".to_string(),
            password: "s3cretpass".to_string(),
            tags: vec!["rust".to_string(), "fp".to_string()],
        })
    );
}

#[rstest]
fn every_problem_is_reported_in_field_order() {
    let errors = register("al", "short", &["ok", "not ok", "x-y"]).unwrap_failure();
    assert_eq!(
        errors.into_vec(),
        vec![
            "username \"al\" is shorter than 3 characters",
            "password is shorter than 8 characters",
            "password has no digit",
            "tag \"not ok\" is not alphanumeric",
            "tag \"x-y\" is not alphanumeric",
        ]
    );
}

#[rstest]
#[case("alice", "s3cretpass", &[], true)]
#[case("alice", "s3cretpass", &["bad tag"], false)]
#[case("al", "s3cretpass", &[], false)]
fn registration_outcome(
    #[case] name: &str,
    #[case] secret: &str,
    #[case] tags: &[&str],
    #[case] valid: bool,
) {
    assert_eq!(register(name, secret, tags).is_success(), valid);
}

#[rstest]
fn errors_can_be_counted_with_fold() {
    let summary = register("al", "short", &[]).fold(
        |errors| format!("{} problems", errors.len()),
        |registration| registration.username,
    );
    assert_eq!(summary, "3 problems");
}

#[rstest]
fn generic_functor_code_accepts_validation_and_list() {
    fn lengths<F: Functor<Inner = String>>(container: F) -> F::WithType<usize> {
        container.fmap(|text| text.len())
    }

    let list = NonEmptyList::from_parts("a".to_string(), ["bcd".to_string()]);
    assert_eq!(lengths(list).into_vec(), vec![1, 3]);

    let valid: Validation<(), String> = Validation::success("four".to_string());
    assert_eq!(lengths(valid), Validation::success(4));
}

#[rstest]
fn option_drops_missing_fields_validation_names_them() {
    let name: Option<String> = None;
    let age: Option<u32> = None;
    assert_eq!(name.map2(age, |name, age| (name, age)), None);

    let name: ValidationNel<&str, String> = Validation::failure("name missing").into_nel();
    let age: ValidationNel<&str, u32> = Validation::failure("age missing").into_nel();
    let errors = Validation::map2(name, age, |name, age| (name, age)).unwrap_failure();
    assert_eq!(errors.into_vec(), vec!["name missing", "age missing"]);
}
