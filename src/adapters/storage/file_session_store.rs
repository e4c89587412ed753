//! File-based Session Store Adapter
//!
//! Persists the signed-in identity as a small JSON record on disk,
//! holding the same two keys a browser client keeps in local storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::session::{Identity, Session};
use crate::ports::{SessionStore, SessionStoreError, USERNAME_KEY, USER_ID_KEY};

/// File-based storage for the session record
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    record_path: PathBuf,
}

impl FileSessionStore {
    /// Create a new file store backed by the given record path
    ///
    /// # Arguments
    /// * `record_path` - Location of the JSON session record
    ///
    /// # Example
    /// ```ignore
    /// let store = FileSessionStore::new("./data/session.json");
    /// ```
    pub fn new<P: AsRef<Path>>(record_path: P) -> Self {
        Self {
            record_path: record_path.as_ref().to_path_buf(),
        }
    }

    /// Ensure the parent directory exists
    async fn ensure_parent_dir(&self) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.record_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Session, SessionStoreError> {
        if !self.record_path.exists() {
            return Ok(Session::Anonymous);
        }

        let text = fs::read_to_string(&self.record_path)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        let record: HashMap<String, String> = serde_json::from_str(&text)
            .map_err(|e| SessionStoreError::DeserializationFailed(e.to_string()))?;

        // Incomplete or malformed pairs mask to anonymous.
        Ok(Session::from_stored_entries(
            record.get(USER_ID_KEY).map(String::as_str),
            record.get(USERNAME_KEY).map(String::as_str),
        ))
    }

    async fn save(&self, identity: &Identity) -> Result<(), SessionStoreError> {
        self.ensure_parent_dir().await?;

        let mut record = HashMap::new();
        record.insert(USER_ID_KEY, identity.user_id.to_string());
        record.insert(USERNAME_KEY, identity.username.to_string());

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| SessionStoreError::SerializationFailed(e.to_string()))?;

        fs::write(&self.record_path, json)
            .await
            .map_err(|e| SessionStoreError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        if self.record_path.exists() {
            fs::remove_file(&self.record_path)
                .await
                .map_err(|e| SessionStoreError::IoError(e.to_string()))?;
        }

        Ok(())
    }
}
