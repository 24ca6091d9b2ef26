//! Error types for the primality crate.
//!
//! Classification has exactly one failure mode: the input is not an integer
//! once the near-integer float rule has been applied.

use thiserror::Error;

use crate::value::ValueKind;

/// Errors that can occur when classifying a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PrimalityError {
    /// The value is not an integer and could not be normalised into one.
    #[error("expected an integer, received {received}")]
    InvalidType {
        /// Runtime kind of the rejected value.
        received: ValueKind,
    },
}
