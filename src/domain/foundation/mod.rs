//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types, and the state
//! machine trait that form the vocabulary of the AutoAggregator client.

mod errors;
mod ids;
mod state_machine;

pub use errors::ValidationError;
pub use ids::{UserId, Username};
pub use state_machine::StateMachine;
