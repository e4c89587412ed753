//! Application layer - Auth flows and page synchronization.
//!
//! This layer orchestrates domain operations and coordinates between
//! ports: the AuthController drives credential flows, and the fetchers
//! render backend data into page regions through the `HostPage` port.

pub mod auth_controller;
pub mod catalog;
pub mod profile;
pub mod recommendations;
pub mod view_sync;

pub use auth_controller::AuthController;
pub use catalog::CatalogFeed;
pub use profile::ProfilePanels;
pub use recommendations::RecommendationFeed;
pub use view_sync::ViewSync;
