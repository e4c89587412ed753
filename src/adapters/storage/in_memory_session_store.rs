//! In-memory Session Store Adapter
//!
//! Keeps the session record in a process-local map. Used by tests and
//! by demo wiring where durability across restarts is not wanted.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::session::{Identity, Session};
use crate::ports::{SessionStore, SessionStoreError, USERNAME_KEY, USER_ID_KEY};

/// In-memory storage for the session record
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw entry directly, bypassing the save contract.
    ///
    /// Lets tests stage half-written or malformed records that the
    /// load contract must mask.
    pub async fn set_entry(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.write().await.insert(key.into(), value.into());
    }

    /// Number of entries currently held.
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load(&self) -> Result<Session, SessionStoreError> {
        let entries = self.entries.read().await;

        // Incomplete or malformed pairs mask to anonymous.
        Ok(Session::from_stored_entries(
            entries.get(USER_ID_KEY).map(String::as_str),
            entries.get(USERNAME_KEY).map(String::as_str),
        ))
    }

    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(USER_ID_KEY.to_string(), identity.user_id.to_string());
        entries.insert(USERNAME_KEY.to_string(), identity.username.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(USER_ID_KEY);
        entries.remove(USERNAME_KEY);
        Ok(())
    }
}
