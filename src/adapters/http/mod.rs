//! HTTP Adapters.
//!
//! Implementations of the ApiTransport port.
//!
//! ## Available Adapters
//!
//! - `RestClient` - reqwest-backed client for the marketplace API
//! - `MockTransport` - Configurable in-memory transport for testing

mod mock_transport;
mod rest_client;

pub use mock_transport::MockTransport;
pub use rest_client::{RestClient, RestClientConfig};
