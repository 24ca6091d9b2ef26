//! Property-based tests for primality classification.
//!
//! Uses proptest to check the classification rules across generated integers,
//! floats and non-numeric values.

#![expect(
    clippy::float_arithmetic,
    reason = "generated floats are offset from integers to probe the tolerance"
)]
#![expect(
    clippy::integer_division_remainder_used,
    reason = "the reference oracle divides by every smaller candidate"
)]

use primality::{PrimalityError, Value, ValueKind, classify, is_prime, is_prime_integer};
use proptest::prelude::*;

fn naive_is_prime(candidate: u32) -> bool {
    candidate >= 2 && (2..candidate).all(|divisor| candidate % divisor != 0)
}

fn arbitrary_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Boolean),
        (-1_000_000_i64..1_000_000).prop_map(Value::from),
        (-1_000.0_f64..1_000.0).prop_map(Value::Float),
        ".*".prop_map(Value::Text),
        Just(Value::Null),
        Just(Value::Sequence(Vec::new())),
    ]
}

const fn rejected(received: ValueKind) -> Result<bool, PrimalityError> {
    Err(PrimalityError::InvalidType { received })
}

proptest! {
    #[test]
    fn integers_below_two_are_never_prime(candidate in i64::MIN..2) {
        prop_assert_eq!(is_prime(candidate), Ok(false));
    }

    #[test]
    fn booleans_are_always_rejected(flag in any::<bool>()) {
        prop_assert_eq!(is_prime(flag), rejected(ValueKind::Boolean));
    }

    #[test]
    fn strings_are_always_rejected(text in ".*") {
        prop_assert_eq!(is_prime(text), rejected(ValueKind::Text));
    }

    #[test]
    fn numeric_looking_strings_are_still_rejected(candidate in any::<i32>()) {
        prop_assert_eq!(is_prime(candidate.to_string()), rejected(ValueKind::Text));
    }

    #[test]
    fn floats_outside_tolerance_are_rejected(base in -10_000_i32..10_000, fraction in 0.001_f64..0.999) {
        let raw = f64::from(base) + fraction;
        prop_assert_eq!(is_prime(raw), rejected(ValueKind::Float));
    }

    #[test]
    fn near_integral_floats_match_their_integer(base in -100_000_i32..100_000, offset in -4e-11_f64..4e-11) {
        let raw = f64::from(base) + offset;
        prop_assert_eq!(is_prime(raw), Ok(is_prime_integer(i128::from(base))));
    }

    #[test]
    fn integral_floats_match_integers(candidate in -1_000_000_i32..1_000_000) {
        prop_assert_eq!(is_prime(f64::from(candidate)), is_prime(candidate));
    }

    #[test]
    fn trial_division_agrees_with_definition(candidate in 0_u32..5_000) {
        prop_assert_eq!(is_prime(candidate), Ok(naive_is_prime(candidate)));
    }

    #[test]
    fn products_are_composite(left in 2_i64..50_000, right in 2_i64..50_000) {
        prop_assert_eq!(is_prime(left * right), Ok(false));
    }

    #[test]
    fn squares_are_composite(root in 2_i64..100_000) {
        prop_assert!(!is_prime_integer(i128::from(root * root)));
    }

    #[test]
    fn classification_is_idempotent(value in arbitrary_value()) {
        let first = classify(&value);
        let second = classify(&value);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn literals_classify_like_typed_values(candidate in -1_000_000_i64..1_000_000) {
        let literal = Value::parse_literal(&candidate.to_string());
        prop_assert_eq!(classify(&literal), is_prime(candidate));
    }
}
