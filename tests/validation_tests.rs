#![cfg(feature = "validation")]
//! Behaviour of `Validation` through the public API.

use std::panic;

use rstest::rstest;
use validus::compose::constant;
use validus::curry;
use validus::persistent::NonEmptyList;
use validus::typeclass::{Applicative, Bifunctor, Functor};
use validus::validation::{NoSuchElementError, Validation, ValidationNel, traverse};

// =============================================================================
// Curried Application
// =============================================================================

#[rstest]
fn curried_plus_applied_to_two_successes() {
    let plus = curry!(|a: i32, b: i32| a + b);
    let sum: Validation<String, i32> = Validation::success(plus)
        .ap(Validation::success(1))
        .ap(Validation::success(2));
    assert_eq!(sum, Validation::success(3));
}

#[rstest]
fn curried_plus_with_both_arguments_failing() {
    let plus = curry!(|a: i32, b: i32| a + b);
    let sum: Validation<String, i32> = Validation::success(plus)
        .ap(Validation::failure("first ".to_string()))
        .ap(Validation::failure("second".to_string()));
    assert_eq!(sum, Validation::failure("first second".to_string()));
}

#[rstest]
fn four_field_chain_keeps_field_order() {
    let fields: Vec<ValidationNel<char, u8>> = vec![
        Validation::failure('a').into_nel(),
        Validation::success(2),
        Validation::failure('c').into_nel(),
        Validation::failure('d').into_nel(),
    ];
    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or(Validation::success(0));

    let sum = next()
        .map(curry!(|a: u8, b: u8, c: u8, d: u8| a + b + c + d))
        .ap(next())
        .ap(next())
        .ap(next());

    assert_eq!(sum.unwrap_failure().into_vec(), vec!['a', 'c', 'd']);
}

// =============================================================================
// Functor Defaults
// =============================================================================

#[rstest]
#[case(Validation::success(1), Validation::success("constant"))]
#[case(Validation::failure("Error!"), Validation::failure("Error!"))]
fn replace_swaps_success_value(
    #[case] input: Validation<&'static str, i32>,
    #[case] expected: Validation<&'static str, &'static str>,
) {
    assert_eq!(input.replace("constant"), expected);
}

#[rstest]
fn map_with_constant_function() {
    let valid: Validation<&str, i32> = Validation::success(1);
    assert_eq!(valid.map(constant("constant")), Validation::success("constant"));
}

#[rstest]
fn void_discards_value() {
    let valid: Validation<&str, i32> = Validation::success(1);
    assert_eq!(valid.void(), Validation::success(()));
}

// =============================================================================
// Contract Violations
// =============================================================================

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| payload.downcast_ref::<&str>().map(|message| (*message).to_string()))
        .unwrap_or_default()
}

#[rstest]
fn reading_value_of_failure_panics_with_no_such_element() {
    let invalid: Validation<&str, i32> = Validation::failure("Error!");
    let payload = panic::catch_unwind(|| invalid.unwrap_success()).unwrap_err();
    assert_eq!(
        panic_message(&*payload),
        NoSuchElementError::MissingValue.to_string()
    );
}

#[rstest]
fn reading_error_of_success_panics_with_no_such_element() {
    let valid: Validation<&str, i32> = Validation::success(1);
    let payload = panic::catch_unwind(|| valid.unwrap_failure()).unwrap_err();
    assert_eq!(
        panic_message(&*payload),
        NoSuchElementError::MissingError.to_string()
    );
}

#[rstest]
fn non_panicking_accessors() {
    let invalid: Validation<&str, i32> = Validation::failure("Error!");
    assert_eq!(invalid.success_ref(), None);
    assert_eq!(invalid.failure_ref(), Some(&"Error!"));
    assert_eq!(invalid.into_success(), None);
}

// =============================================================================
// Accumulating Versus Fail-Fast
// =============================================================================

#[rstest]
fn result_keeps_first_error_validation_keeps_all() {
    let left_error = "left".to_string();
    let right_error = "right".to_string();

    let fail_fast: Result<(i32, i32), String> =
        Err::<i32, String>(left_error.clone()).product(Err(right_error.clone()));
    assert_eq!(fail_fast, Err("left".to_string()));

    let accumulated: Validation<Vec<String>, (i32, i32)> =
        Validation::<Vec<String>, i32>::failure(vec![left_error])
            .product(Validation::failure(vec![right_error]));
    assert_eq!(
        accumulated,
        Validation::failure(vec!["left".to_string(), "right".to_string()])
    );
}

#[rstest]
fn result_round_trip_through_validation() {
    let parsed: Validation<std::num::ParseIntError, i32> = "12".parse::<i32>().into();
    assert_eq!(parsed.into_result(), Ok(12));
}

// =============================================================================
// Collecting
// =============================================================================

fn parse_port(input: &str) -> ValidationNel<String, u16> {
    Validation::from(input.parse::<u16>().map_err(|_| format!("invalid port: {input}"))).into_nel()
}

#[rstest]
fn traverse_collects_every_parse_error() {
    let ports: ValidationNel<String, Vec<u16>> = traverse(["80", "http", "443", "-1"], parse_port);
    assert_eq!(
        ports.unwrap_failure(),
        NonEmptyList::from_parts(
            "invalid port: http".to_string(),
            ["invalid port: -1".to_string()]
        )
    );
}

#[rstest]
fn traverse_success_preserves_order() {
    let ports: ValidationNel<String, Vec<u16>> = traverse(["80", "443"], parse_port);
    assert_eq!(ports, Validation::success(vec![80, 443]));
}

// =============================================================================
// Bifunctor and Formatting
// =============================================================================

#[rstest]
fn first_maps_accumulated_errors() {
    let invalid: ValidationNel<&str, i32> = Validation::failure("bad").into_nel();
    let counted = invalid.first(|errors| errors.len());
    assert_eq!(counted, Validation::failure(1));
}

#[rstest]
#[case(Validation::success(7), "Success(7)")]
#[case(
    Validation::failure(NonEmptyList::from_parts("a", ["b"])),
    "Failure(NonEmptyList[a, b])"
)]
fn display_renders_variant(
    #[case] validation: ValidationNel<&'static str, i32>,
    #[case] expected: &str,
) {
    assert_eq!(validation.to_string(), expected);
}
