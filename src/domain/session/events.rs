//! Session change events.
//!
//! A single event type describes every session transition:
//! - restored from durable storage at startup
//! - logged in with credentials
//! - registered (which signs the new account in)
//! - logged out

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::session::Session;

// ════════════════════════════════════════════════════════════════════════════
// SessionChangeCause
// ════════════════════════════════════════════════════════════════════════════

/// Why a session transition happened.
///
/// Observers behave the same for every cause; the cause exists for
/// logging and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionChangeCause {
    /// Identity loaded from durable storage at startup.
    Restored,

    /// Login succeeded against the backend.
    LoggedIn,

    /// Registration succeeded, signing the new account in.
    Registered,

    /// Logout completed. Local state is cleared even when the
    /// backend call failed.
    LoggedOut,
}

// ════════════════════════════════════════════════════════════════════════════
// SessionChanged
// ════════════════════════════════════════════════════════════════════════════

/// Published after the session belief changes and durable storage has
/// been brought in line with it.
///
/// Carries the complete new session, not a delta. Observers can act
/// on it without consulting the controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionChanged {
    /// The session as of this change.
    pub session: Session,

    /// What triggered the change.
    pub cause: SessionChangeCause,

    /// When the change was applied locally.
    pub occurred_at: DateTime<Utc>,
}

impl SessionChanged {
    pub fn new(session: Session, cause: SessionChangeCause) -> Self {
        Self {
            session,
            cause,
            occurred_at: Utc::now(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Unit Tests
// ════════════════════════════════════════════════════════════════════════════
