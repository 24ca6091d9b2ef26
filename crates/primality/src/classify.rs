//! Primality classification.
//!
//! The order of checks is load-bearing: booleans are rejected before floats
//! are normalised, and normalisation runs before the integer check.

use crate::error::PrimalityError;
use crate::value::{Value, ValueKind};

/// Absolute distance within which a float is treated as its nearest integer.
pub const NEAR_INTEGER_TOLERANCE: f64 = 1e-10;

/// 2^127, the smallest float magnitude that no longer fits in an `i128`.
const I128_SPAN: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// Classifies any value convertible into [`Value`].
///
/// # Errors
///
/// Returns [`PrimalityError::InvalidType`] when the value is a boolean, a
/// float farther than [`NEAR_INTEGER_TOLERANCE`] from an integer, or any
/// non-numeric kind.
///
/// # Examples
///
/// ```
/// use primality::{PrimalityError, ValueKind, is_prime};
///
/// assert_eq!(is_prime(1_000_000_007), Ok(true));
/// assert_eq!(is_prime(8.0), Ok(false));
/// assert_eq!(
///     is_prime(2.3),
///     Err(PrimalityError::InvalidType {
///         received: ValueKind::Float
///     })
/// );
/// ```
pub fn is_prime<V>(value: V) -> Result<bool, PrimalityError>
where
    V: Into<Value>,
{
    classify(&value.into())
}

/// Classifies a borrowed [`Value`].
///
/// # Errors
///
/// Returns [`PrimalityError::InvalidType`] under the same conditions as
/// [`is_prime`].
pub fn classify(value: &Value) -> Result<bool, PrimalityError> {
    match value {
        Value::Boolean(_) => Err(invalid_type(value.kind())),
        Value::Float(raw) => match snap_to_integer(*raw) {
            Some(Snapped::Integer(candidate)) => Ok(is_prime_integer(candidate)),
            Some(Snapped::BeyondRange) => Ok(false),
            None => Err(invalid_type(ValueKind::Float)),
        },
        Value::Integer(candidate) => Ok(is_prime_integer(*candidate)),
        Value::Text(_) | Value::Null | Value::Sequence(_) | Value::Mapping(_) => {
            Err(invalid_type(value.kind()))
        }
    }
}

/// Returns `true` when `candidate` is prime.
///
/// Values below 2 are never prime. Trial division runs up to and including
/// the exact integer square root, so squares of primes are rejected.
///
/// # Examples
///
/// ```
/// use primality::is_prime_integer;
///
/// assert!(is_prime_integer(1_000_003));
/// assert!(!is_prime_integer(121));
/// assert!(!is_prime_integer(-13));
/// ```
#[must_use]
pub fn is_prime_integer(candidate: i128) -> bool {
    if candidate < 2 {
        return false;
    }
    let magnitude = candidate.unsigned_abs();
    if magnitude == 2 {
        return true;
    }
    if divides(2, magnitude) {
        return false;
    }
    let limit = magnitude.isqrt();
    !(3..=limit)
        .step_by(2)
        .any(|divisor| divides(divisor, magnitude))
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "trial division is defined by the remainder"
)]
const fn divides(divisor: u128, dividend: u128) -> bool {
    dividend % divisor == 0
}

/// Outcome of snapping a near-integral float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Snapped {
    Integer(i128),
    /// Integral but at least 2^127 in magnitude. Such floats are even, so the
    /// verdict is known without trial division.
    BeyondRange,
}

/// Returns the nearest integer when `raw` lies within tolerance of it.
///
/// `NaN` and infinities never satisfy the tolerance check.
#[expect(
    clippy::float_arithmetic,
    reason = "the tolerance rule is defined over the float distance to the nearest integer"
)]
fn snap_to_integer(raw: f64) -> Option<Snapped> {
    let nearest = raw.round();
    let within_tolerance = (raw - nearest).abs() < NEAR_INTEGER_TOLERANCE;
    if !within_tolerance {
        return None;
    }
    if nearest.abs() >= I128_SPAN {
        return Some(Snapped::BeyondRange);
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "nearest is integral and its magnitude is below 2^127"
    )]
    let integer = nearest as i128;
    Some(Snapped::Integer(integer))
}

const fn invalid_type(received: ValueKind) -> PrimalityError {
    PrimalityError::InvalidType { received }
}
