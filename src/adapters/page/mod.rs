//! Page adapters.
//!
//! Implementations of the `HostPage` port: a console renderer for the
//! demo binary and a recording page for tests.

pub mod console_page;
pub mod recording_page;

pub use console_page::ConsolePage;
pub use recording_page::{PageMutation, RecordingPage};
