//! Session Observer Port - Interface for reacting to session changes.
//!
//! Observers are registered with the auth controller and invoked
//! after every session transition, in subscription order, once the
//! durable store already reflects the new session.

use async_trait::async_trait;

use crate::domain::session::SessionChanged;

/// Port for components that react to session changes
#[async_trait]
pub trait SessionObserver: Send + Sync {
    /// Handles one session change.
    ///
    /// Called for every transition, including a change that restates
    /// the session already believed. Handling must be idempotent.
    async fn on_session_changed(&self, event: &SessionChanged);

    /// Observer name for logging.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn session_observer_is_object_safe() {
        fn _accepts_dyn(_observer: &dyn SessionObserver) {}
    }
}
