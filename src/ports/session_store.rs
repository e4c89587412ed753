//! Session Store Port - Interface for the durable identity cache.
//!
//! The store holds at most one identity under two well-known keys and
//! enforces an all-or-nothing contract: either both keys are present
//! and a complete identity loads, or the store reads as anonymous.

use async_trait::async_trait;

use crate::domain::session::{Identity, Session};

/// Storage key for the account id, held as a decimal string.
pub const USER_ID_KEY: &str = "loggedInUserId";

/// Storage key for the account username.
pub const USERNAME_KEY: &str = "loggedInUsername";

/// Errors that can occur during session store operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionStoreError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize session record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize session record: {0}")]
    DeserializationFailed(String),
}

/// Port for persisting the signed-in identity across restarts
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Loads the stored identity.
    ///
    /// # Returns
    /// `Session::SignedIn` when both keys hold a usable value,
    /// `Session::Anonymous` otherwise. A half-written record (one key
    /// present, or an unparseable id) reads as anonymous; it is never
    /// surfaced as a partial identity.
    ///
    /// # Errors
    /// Returns `SessionStoreError` only when the backing medium
    /// cannot be read at all.
    async fn load(&self) -> Result<Session, SessionStoreError>;

    /// Saves a complete identity, replacing any previous record.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the record cannot be written.
    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError>;

    /// Removes both keys. Clearing an empty store succeeds.
    ///
    /// # Errors
    /// Returns `SessionStoreError` if the record cannot be removed.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
