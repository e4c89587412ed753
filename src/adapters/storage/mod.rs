//! Storage Adapters
//!
//! Implementations of the SessionStore port for persisting the
//! signed-in identity.
//!
//! ## Available Adapters
//!
//! - **FileSessionStore** - Stores the record as a JSON file on disk
//! - **InMemorySessionStore** - Stores the record in memory (testing/demo)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileSessionStore, InMemorySessionStore};
//!
//! // Production: file-based storage
//! let store = FileSessionStore::new("./data/session.json");
//!
//! // Testing: in-memory storage
//! let store = InMemorySessionStore::new();
//! ```

mod file_session_store;
mod in_memory_session_store;

pub use file_session_store::FileSessionStore;
pub use in_memory_session_store::InMemorySessionStore;
