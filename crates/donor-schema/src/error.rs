//! Error types for schema parsing.

use thiserror::Error;

/// Raised when a wire literal does not belong to an enumerated field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The value is not one of the eight blood type literals.
    #[error("`{value}` is not a valid blood type; expected one of A+, A-, B+, B-, AB+, AB-, O+, O-")]
    UnknownBloodType {
        /// The rejected input.
        value: String,
    },

    /// The value is neither `phone` nor `email`.
    #[error("`{value}` is not a valid contact type; expected phone or email")]
    UnknownContactType {
        /// The rejected input.
        value: String,
    },
}
