//! Session value objects.
//!
//! A `Session` is the client's current belief about who is signed in.
//! It is a cache of backend truth, refreshed by auth flows and restored
//! from durable storage on startup.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{UserId, Username};

/// Identity of a signed-in account as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: UserId,
    pub username: Username,
}

impl Identity {
    pub fn new(user_id: UserId, username: Username) -> Self {
        Self { user_id, username }
    }
}

/// The client's current session belief.
///
/// Either no identity is held, or exactly one complete identity is.
/// There is no partial state; storage adapters enforce the same rule
/// for the durable mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    Anonymous,
    SignedIn(Identity),
}

impl Session {
    /// Convenience constructor for a signed-in session.
    pub fn signed_in(user_id: UserId, username: Username) -> Self {
        Session::SignedIn(Identity::new(user_id, username))
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Session::Anonymous => None,
            Session::SignedIn(identity) => Some(identity),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.identity().map(|i| i.user_id)
    }

    pub fn username(&self) -> Option<&Username> {
        self.identity().map(|i| &i.username)
    }

    /// Rebuilds a session from the two durable storage entries.
    ///
    /// The pair is all-or-nothing: a half-written record or a
    /// malformed id reads as anonymous, never as a partial identity.
    pub fn from_stored_entries(user_id: Option<&str>, username: Option<&str>) -> Session {
        match (user_id, username) {
            (Some(id), Some(name)) => match (id.parse::<UserId>(), Username::new(name)) {
                (Ok(user_id), Ok(username)) => Session::signed_in(user_id, username),
                _ => Session::Anonymous,
            },
            _ => Session::Anonymous,
        }
    }
}
