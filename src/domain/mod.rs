//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `session` - Session belief, auth phase machine, and change events
//! - `catalog` - Listing wire models, cards, filters, and activity records

pub mod catalog;
pub mod foundation;
pub mod session;
