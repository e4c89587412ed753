//! Auth flow error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors surfaced by login, registration, and logout flows.
///
/// The variant records how far the submission got: `Validation` means
/// no network call was made, `Rejected` means the backend answered
/// with a refusal, `Transport` means the exchange itself broke down.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Local validation failed before any network call.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend processed the submission and refused it.
    /// The message is already display-ready.
    #[error("{message}")]
    Rejected { message: String },

    /// The backend could not be reached or answered unusably.
    #[error("{message}")]
    Transport { message: String },

    /// Another submission is already in flight and this one was ignored.
    #[error("Another authentication request is already in progress")]
    InFlight,
}

impl AuthError {
    pub fn rejected(message: impl Into<String>) -> Self {
        AuthError::Rejected { message: message.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        AuthError::Transport { message: message.into() }
    }

    /// Returns true if the submission never reached the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, AuthError::InFlight)
    }
}
