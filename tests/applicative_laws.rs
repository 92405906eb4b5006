#![cfg(feature = "validation")]
//! Property-based tests for the accumulating Applicative and the Monad
//! instance of `Validation`.
//!
//! - **Combination table**: `ap` over every Success/Failure pairing
//! - **Identity**: `pure(id).ap(v) == v`
//! - **Homomorphism**: `pure(f).ap(pure(x)) == pure(f(x))`
//! - **Interchange**: `u.ap(pure(y)) == pure(|f| f(y)).ap(u)`
//! - **Grouping**: accumulated errors do not depend on how `ap` calls are grouped
//! - **Monad identities**: `pure(a).flat_map(f) == f(a)`, `m.flat_map(pure) == m`

use proptest::prelude::*;
use validus::persistent::NonEmptyList;
use validus::typeclass::{Applicative, Monad, Semigroup};
use validus::validation::{Validation, ValidationNel};

type Errors = Vec<String>;

fn validation_strategy() -> impl Strategy<Value = Validation<Errors, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Validation::<Errors, i32>::success),
        prop::collection::vec("[a-z]{1,6}", 1..4).prop_map(Validation::<Errors, i32>::failure),
    ]
}

fn errors_strategy() -> impl Strategy<Value = Errors> {
    prop::collection::vec("[a-z]{1,6}", 1..4)
}

fn increment(value: i32) -> i32 {
    value.wrapping_add(1)
}

// =============================================================================
// Combination Table
// =============================================================================

proptest! {
    #[test]
    fn prop_ap_success_success(value: i32) {
        let function: Validation<Errors, fn(i32) -> i32> = Validation::success(increment as fn(i32) -> i32);
        prop_assert_eq!(function.ap(Validation::success(value)), Validation::success(increment(value)));
    }

    #[test]
    fn prop_ap_success_failure(error in errors_strategy()) {
        let function: Validation<Errors, fn(i32) -> i32> = Validation::success(increment as fn(i32) -> i32);
        let argument: Validation<Errors, i32> = Validation::failure(error.clone());
        prop_assert_eq!(function.ap(argument), Validation::failure(error));
    }

    #[test]
    fn prop_ap_failure_success(error in errors_strategy(), value in any::<i32>()) {
        let function: Validation<Errors, fn(i32) -> i32> = Validation::failure(error.clone());
        prop_assert_eq!(function.ap(Validation::success(value)), Validation::failure(error));
    }

    #[test]
    fn prop_ap_failure_failure_combines_in_order(
        left in errors_strategy(),
        right in errors_strategy(),
    ) {
        let function: Validation<Errors, fn(i32) -> i32> = Validation::failure(left.clone());
        let argument: Validation<Errors, i32> = Validation::failure(right.clone());
        prop_assert_eq!(function.ap(argument), Validation::failure(left.combine(right)));
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(value in validation_strategy()) {
        let identity: Validation<Errors, fn(i32) -> i32> =
            Validation::success(validus::compose::identity::<i32> as fn(i32) -> i32);
        prop_assert_eq!(identity.ap(value.clone()), value);
    }

    #[test]
    fn prop_homomorphism_law(value: i32) {
        let function = <Validation<Errors, ()>>::pure(increment as fn(i32) -> i32);
        let left: Validation<Errors, i32> = function.apply(<Validation<Errors, ()>>::pure(value));
        let right: Validation<Errors, i32> = <Validation<Errors, ()>>::pure(increment(value));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_interchange_law(
        function_errors in prop::option::of(errors_strategy()),
        value in any::<i32>(),
    ) {
        let function: Validation<Errors, fn(i32) -> i32> = match function_errors {
            Some(errors) => Validation::failure(errors),
            None => Validation::success(increment as fn(i32) -> i32),
        };

        let left = function.clone().ap(Validation::success(value));
        let right = Validation::<Errors, _>::success(move |f: fn(i32) -> i32| f(value)).ap(function);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_map2_equals_map_then_ap(
        first in validation_strategy(),
        second in validation_strategy(),
    ) {
        let by_map2 = first.clone().map2(second.clone(), i32::wrapping_add);
        let by_ap = first.map(|a| move |b: i32| a.wrapping_add(b)).ap(second);
        prop_assert_eq!(by_map2, by_ap);
    }

    #[test]
    fn prop_accumulation_is_independent_of_grouping(
        first in validation_strategy(),
        second in validation_strategy(),
        third in validation_strategy(),
    ) {
        let left_grouped = first.clone().product(second.clone()).product(third.clone());
        let right_grouped = first.product(second.product(third));

        prop_assert_eq!(left_grouped.is_success(), right_grouped.is_success());
        prop_assert_eq!(left_grouped.into_failure(), right_grouped.into_failure());
    }

    #[test]
    fn prop_ap_left_and_ap_right_keep_errors_of_both_sides(
        first in validation_strategy(),
        second in validation_strategy(),
    ) {
        let expected_errors = first.clone().product(second.clone()).into_failure();
        prop_assert_eq!(first.clone().ap_left(second.clone()).into_failure(), expected_errors.clone());
        prop_assert_eq!(first.ap_right(second).into_failure(), expected_errors);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

fn halve_if_even(value: i32) -> Validation<Errors, i32> {
    Validation::from_condition(value % 2 == 0, value / 2, vec![format!("{value} is odd")])
}

proptest! {
    #[test]
    fn prop_left_identity_law(value: i32) {
        let left = <Validation<Errors, ()>>::pure(value).flat_map(halve_if_even);
        prop_assert_eq!(left, halve_if_even(value));
    }

    #[test]
    fn prop_right_identity_law(value in validation_strategy()) {
        let result = value.clone().flat_map(Validation::success);
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_associativity_law(value in validation_strategy()) {
        let left = Monad::flat_map(value.clone(), halve_if_even).flat_map(halve_if_even);
        let right = value.flat_map(|x| halve_if_even(x).flat_map(halve_if_even));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// NonEmptyList Error Container
// =============================================================================

proptest! {
    #[test]
    fn prop_every_failing_field_is_reported(flags in prop::collection::vec(any::<bool>(), 1..8)) {
        let expected: Vec<usize> = flags
            .iter()
            .enumerate()
            .filter_map(|(index, passes)| (!passes).then_some(index))
            .collect();

        let collected: ValidationNel<usize, Vec<usize>> = flags
            .iter()
            .enumerate()
            .map(|(index, passes)| Validation::from_condition(*passes, index, index).into_nel())
            .collect();

        match NonEmptyList::try_from(expected) {
            Ok(errors) => {
                prop_assert_eq!(collected, Validation::failure(errors));
            }
            Err(_) => {
                prop_assert!(collected.is_success());
            }
        }
    }
}
