//! Shared validation error for the domain layer.
//!
//! Value objects and request types report bad input through
//! [`ValidationError`] so that callers can distinguish "never left the
//! client" failures from backend rejections.

use thiserror::Error;

/// A locally detected problem with user-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must match '{other}'")]
    FieldMismatch { field: String, other: String },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// A required field was blank or missing.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Two fields that must agree did not (password confirmation).
    pub fn field_mismatch(field: impl Into<String>, other: impl Into<String>) -> Self {
        ValidationError::FieldMismatch {
            field: field.into(),
            other: other.into(),
        }
    }

    /// A field was present but unparseable or otherwise malformed.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
