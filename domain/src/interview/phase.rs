//! Interview phases

use serde::{Deserialize, Serialize};

/// Phase of an interview conversation
///
/// ```text
/// Uninitialized ─start→ AwaitingAnswer ─submit→ Evaluating ─┬→ AwaitingAnswer
///                            ↑                              ├→ Clarifying ─submit→ Evaluating
///                            └──────────────────────────────┘└→ Finalizing → Complete
/// ```
///
/// `Evaluating` and `Finalizing` only exist while an answer is being
/// processed; callers observe them through progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    /// `start()` has not been called yet
    #[default]
    Uninitialized,
    /// Waiting for the candidate to answer the current question
    AwaitingAnswer,
    /// The judge (or fallback heuristic) is evaluating an answer
    Evaluating,
    /// The last answer was rejected; waiting for a clarified answer
    Clarifying,
    /// All questions answered; persisting and notifying
    Finalizing,
    /// Interview finished
    Complete,
}

impl InterviewPhase {
    pub fn as_str(&self) -> &str {
        match self {
            InterviewPhase::Uninitialized => "uninitialized",
            InterviewPhase::AwaitingAnswer => "awaiting_answer",
            InterviewPhase::Evaluating => "evaluating",
            InterviewPhase::Clarifying => "clarifying",
            InterviewPhase::Finalizing => "finalizing",
            InterviewPhase::Complete => "complete",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            InterviewPhase::Uninitialized => "Uninitialized",
            InterviewPhase::AwaitingAnswer => "Awaiting Answer",
            InterviewPhase::Evaluating => "Evaluating",
            InterviewPhase::Clarifying => "Clarifying",
            InterviewPhase::Finalizing => "Finalizing",
            InterviewPhase::Complete => "Complete",
        }
    }

    /// Whether a candidate answer may be submitted in this phase
    pub fn accepts_answers(&self) -> bool {
        matches!(
            self,
            InterviewPhase::AwaitingAnswer | InterviewPhase::Clarifying
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, InterviewPhase::Complete)
    }

    /// Check whether moving from `self` to `next` is a legal transition.
    pub fn can_transition_to(&self, next: InterviewPhase) -> bool {
        use InterviewPhase::*;
        matches!(
            (self, next),
            (Uninitialized, AwaitingAnswer)
                | (AwaitingAnswer, Evaluating)
                | (Clarifying, Evaluating)
                | (Evaluating, AwaitingAnswer)
                | (Evaluating, Clarifying)
                | (Evaluating, Finalizing)
                | (Finalizing, Complete)
        )
    }
}

impl std::fmt::Display for InterviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
