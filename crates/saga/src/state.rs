//! Saga state machine.

use serde::{Deserialize, Serialize};

/// The state of a saga run through its lifecycle.
///
/// State transitions:
/// ```text
/// Started ──► Validating ──► Executing ──┬──► Completed
///                                        └──► Compensating ──► Failed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SagaState {
    /// The run has been created but not validated yet.
    #[default]
    Started,

    /// Request validation and amount computation are in progress.
    Validating,

    /// Forward steps are being executed.
    Executing,

    /// Every step completed (terminal state).
    Completed,

    /// A step failed; completed steps are being undone in reverse order.
    Compensating,

    /// Compensation finished after a failure (terminal state).
    Failed,
}

impl SagaState {
    /// Returns true if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SagaState::Completed | SagaState::Failed)
    }

    /// Returns the state name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SagaState::Started => "Started",
            SagaState::Validating => "Validating",
            SagaState::Executing => "Executing",
            SagaState::Completed => "Completed",
            SagaState::Compensating => "Compensating",
            SagaState::Failed => "Failed",
        }
    }
}

impl std::fmt::Display for SagaState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_started() {
        assert_eq!(SagaState::default(), SagaState::Started);
    }

    #[test]
    fn terminal_states() {
        assert!(!SagaState::Started.is_terminal());
        assert!(!SagaState::Validating.is_terminal());
        assert!(!SagaState::Executing.is_terminal());
        assert!(!SagaState::Compensating.is_terminal());
        assert!(SagaState::Completed.is_terminal());
        assert!(SagaState::Failed.is_terminal());
    }

    #[test]
    fn display() {
        assert_eq!(SagaState::Executing.to_string(), "Executing");
        assert_eq!(SagaState::Compensating.to_string(), "Compensating");
    }
}
