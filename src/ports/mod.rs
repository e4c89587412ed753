//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Backend Ports
//!
//! - `ApiTransport` - Port for issuing JSON calls against the marketplace API
//! - `SessionStore` - Port for the durable identity cache
//!
//! ## Page Ports
//!
//! - `HostPage` - Port for mutating navbar, forms, and named page regions
//! - `SessionObserver` - Port for reacting to session change events

mod observer;
mod page;
mod session_store;
mod transport;

pub use observer::SessionObserver;
pub use page::{AuthForm, HostPage, NavbarView, PageKind, Region, RegionView, StatusTone};
pub use session_store::{SessionStore, SessionStoreError, USERNAME_KEY, USER_ID_KEY};
pub use transport::{ApiFailure, ApiRequest, ApiTransport, Method};
