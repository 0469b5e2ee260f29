//! Verdict on a single candidate answer

use crate::interview::message::wording::GENERIC_CLARIFICATION_REASON;
use serde::{Deserialize, Serialize};

/// Where a verdict came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictSource {
    /// Produced by the LLM judge
    Judge,
    /// Produced by the length heuristic (no judge, judge failure or timeout)
    Heuristic,
    /// Answer was blank; no judge was consulted
    BlankAnswer,
}

/// Result of evaluating one answer against its question
///
/// # Example
///
/// ```
/// use interview_domain::Verdict;
///
/// let ok = Verdict::Accepted;
/// assert!(ok.is_accepted());
///
/// let retry = Verdict::needs_clarification("");
/// assert_eq!(retry.reason(), Some("Please provide a more detailed answer."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", content = "reason", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    NeedsClarification(String),
}

impl Verdict {
    /// Build a clarification verdict. Blank reasons are replaced with the
    /// generic reason so the reason is never empty.
    pub fn needs_clarification(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let reason = reason.trim();
        if reason.is_empty() {
            Verdict::NeedsClarification(GENERIC_CLARIFICATION_REASON.to_string())
        } else {
            Verdict::NeedsClarification(reason.to_string())
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Verdict::Accepted => None,
            Verdict::NeedsClarification(reason) => Some(reason),
        }
    }
}

/// A verdict together with the path that produced it (for logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub source: VerdictSource,
}

impl Evaluation {
    pub fn new(verdict: Verdict, source: VerdictSource) -> Self {
        Self { verdict, source }
    }
}
