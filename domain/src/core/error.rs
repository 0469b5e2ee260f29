//! Domain error types

use crate::interview::phase::InterviewPhase;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation was called in a phase that does not allow it
    /// (e.g. submitting an answer before `start()` or after completion).
    #[error("Cannot {operation} while the interview is {phase}")]
    InvalidState {
        operation: &'static str,
        phase: InterviewPhase,
    },

    #[error("Invalid interview id: {0}")]
    InvalidInterviewId(String),

    #[error("Illegal phase transition: {from} -> {to}")]
    IllegalTransition {
        from: InterviewPhase,
        to: InterviewPhase,
    },
}

impl DomainError {
    pub fn invalid_state(operation: &'static str, phase: InterviewPhase) -> Self {
        DomainError::InvalidState { operation, phase }
    }

    /// Check if this error was caused by calling an operation in the wrong phase
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, DomainError::InvalidState { .. })
    }
}
