//! AutoAggregator Client - Browser-style client core for a car marketplace
//!
//! This crate implements the session, auth, and page-rendering logic of
//! the AutoAggregator frontend against a pluggable transport, session
//! store, and host page.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
