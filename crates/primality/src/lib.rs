//! Primality classification over dynamically typed numeric input.
//!
//! This crate decides whether a runtime value represents a prime integer. The
//! input is modelled as a tagged [`Value`] so that callers holding loosely
//! typed data (JSON bodies, command-line literals, scripting values) can pass
//! it through unchanged and receive either a verdict or a typed rejection.
//!
//! # Overview
//!
//! Classification follows a fixed order of checks:
//!
//! - Booleans are rejected before any numeric handling, even though they are
//!   often interchangeable with `0`/`1`.
//! - Floats within [`NEAR_INTEGER_TOLERANCE`] of an integer are treated as
//!   that integer; every other float is rejected.
//! - Integers are classified by trial division up to their exact integer
//!   square root.
//! - Anything else (strings, null, sequences, mappings) is rejected.
//!
//! # Example
//!
//! ```
//! use primality::{PrimalityError, ValueKind, is_prime};
//!
//! assert_eq!(is_prime(7), Ok(true));
//! assert_eq!(is_prime(19.000_000_000_000_004), Ok(true));
//! assert_eq!(is_prime(25), Ok(false));
//! assert_eq!(
//!     is_prime(true),
//!     Err(PrimalityError::InvalidType {
//!         received: ValueKind::Boolean
//!     })
//! );
//! ```

mod classify;
pub mod cli;
mod error;
mod value;

pub use classify::{NEAR_INTEGER_TOLERANCE, classify, is_prime, is_prime_integer};
pub use error::PrimalityError;
pub use value::{Value, ValueKind};
