//! Session domain module.
//!
//! Holds the client's belief about who is signed in: the session value
//! itself, the auth phase state machine, credential submissions, and
//! the change event that observers subscribe to.
//!
//! # Events
//!
//! - `SessionChanged` - Published after every session transition

mod errors;
mod events;
mod phase;
mod requests;
mod session;

pub use errors::AuthError;
pub use events::{SessionChangeCause, SessionChanged};
pub use phase::AuthPhase;
pub use requests::{LoginRequest, RegisterRequest};
pub use session::{Identity, Session};
