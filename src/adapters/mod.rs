//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the client core to the outside world:
//! - `http` - API transport implementations (REST client, mock)
//! - `page` - Host page implementations (console, recording)
//! - `storage` - Session store implementations (file, in-memory)

pub mod http;
pub mod page;
pub mod storage;

pub use http::{MockTransport, RestClient, RestClientConfig};
pub use page::{ConsolePage, PageMutation, RecordingPage};
pub use storage::{FileSessionStore, InMemorySessionStore};
