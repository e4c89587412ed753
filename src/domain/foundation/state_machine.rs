//! Validated transitions for lifecycle enums.
//!
//! Phase enums in this crate (the auth phase being the main one) only
//! ever move along a fixed set of edges. Implementing [`StateMachine`]
//! declares those edges once and gives the enum a checked
//! `transition_to` for free.

use super::ValidationError;

/// Declares the legal edges of a lifecycle enum.
///
/// An implementor answers two questions: "may I go from here to there?"
/// and "where may I go from here?". Everything else (checked moves,
/// terminal detection) is derived.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for AuthPhase {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Anonymous, Authenticating) | /* ... */)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Anonymous => vec![Authenticating],
///             /* ... */
///         }
///     }
/// }
///
/// let phase = AuthPhase::Anonymous.transition_to(AuthPhase::Authenticating)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Whether the edge from `self` to `target` exists.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Every state reachable from `self` in one step.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, rejecting edges the machine does not declare.
    ///
    /// Callers should go through this rather than assigning states
    /// directly so that illegal moves surface as errors.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Transition from {:?} to {:?} is not allowed", self, target),
            ))
        }
    }

    /// True when no outgoing edge exists.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Fixture machine: a region fetch that can be retried after failure
    // but never leaves Loaded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum FetchState {
        Idle,
        InFlight,
        Loaded,
        Failed,
    }

    impl StateMachine for FetchState {
        fn can_transition_to(&self, target: &Self) -> bool {
            use FetchState::*;
            matches!(
                (self, target),
                (Idle, InFlight) | (InFlight, Loaded) | (InFlight, Failed) | (Failed, InFlight)
            )
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use FetchState::*;
            match self {
                Idle => vec![InFlight],
                InFlight => vec![Loaded, Failed],
                Loaded => vec![],
                Failed => vec![InFlight],
            }
        }
    }

    const ALL: [FetchState; 4] = [
        FetchState::Idle,
        FetchState::InFlight,
        FetchState::Loaded,
        FetchState::Failed,
    ];

    #[test]
    fn declared_edge_transitions() {
        assert_eq!(
            FetchState::Idle.transition_to(FetchState::InFlight),
            Ok(FetchState::InFlight)
        );
        assert_eq!(
            FetchState::Failed.transition_to(FetchState::InFlight),
            Ok(FetchState::InFlight)
        );
    }

    #[test]
    fn undeclared_edge_is_rejected() {
        let result = FetchState::Idle.transition_to(FetchState::Loaded);
        assert!(result.is_err());
    }

    #[test]
    fn rejection_names_both_states() {
        let err = FetchState::Loaded
            .transition_to(FetchState::Idle)
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Loaded"), "got: {message}");
        assert!(message.contains("Idle"), "got: {message}");
    }

    #[test]
    fn loaded_is_the_only_terminal_state() {
        for state in ALL {
            assert_eq!(state.is_terminal(), state == FetchState::Loaded);
        }
    }

    #[test]
    fn guard_and_transition_list_agree() {
        for from in ALL {
            for to in ALL {
                let listed = from.valid_transitions().contains(&to);
                assert_eq!(
                    from.can_transition_to(&to),
                    listed,
                    "disagreement on {:?} -> {:?}",
                    from,
                    to
                );
            }
        }
    }
}
