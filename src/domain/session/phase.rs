//! Authentication phase state machine.
//!
//! Defines all possible auth phases and valid transitions
//! according to the sign-in lifecycle.

use crate::domain::foundation::StateMachine;
use serde::{Deserialize, Serialize};

/// Authentication phase of the client.
///
/// Every credentialed exchange with the backend passes through
/// `Authenticating`, including logout. While a request is in flight
/// the controller rejects further submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPhase {
    /// No identity is held. Durable storage carries no session keys.
    Anonymous,

    /// A login, registration, or logout request is in flight.
    /// Further submissions are ignored until it settles.
    Authenticating,

    /// An identity is held and mirrored in durable storage.
    Authenticated,
}

impl AuthPhase {
    /// Returns true while a request is in flight and new submissions
    /// must be ignored.
    pub fn is_busy(&self) -> bool {
        matches!(self, AuthPhase::Authenticating)
    }

    /// Returns true when an identity is currently held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthPhase::Authenticated)
    }
}

impl StateMachine for AuthPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AuthPhase::*;
        matches!(
            (self, target),
            // From ANONYMOUS
            (Anonymous, Authenticating)
            // From AUTHENTICATING
                | (Authenticating, Authenticated) // Login or registration succeeded
                | (Authenticating, Anonymous) // Attempt failed, or logout settled
            // From AUTHENTICATED
                | (Authenticated, Authenticating) // Logout or re-login submitted
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AuthPhase::*;
        match self {
            Anonymous => vec![Authenticating],
            Authenticating => vec![Authenticated, Anonymous],
            Authenticated => vec![Authenticating],
        }
    }
}
