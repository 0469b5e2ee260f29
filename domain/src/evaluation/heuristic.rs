//! Deterministic fallback policy used when the judge is unavailable

use super::verdict::Verdict;
use crate::core::string::trimmed_char_count;
use serde::{Deserialize, Serialize};

/// Default minimum: answers must be longer than this many characters.
pub const DEFAULT_MIN_ANSWER_CHARS: usize = 3;

/// Length-based fallback heuristic.
///
/// Accepted iff the trimmed answer has more than `min_answer_chars`
/// characters. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthHeuristic {
    pub min_answer_chars: usize,
}

impl Default for LengthHeuristic {
    fn default() -> Self {
        Self {
            min_answer_chars: DEFAULT_MIN_ANSWER_CHARS,
        }
    }
}

impl LengthHeuristic {
    pub fn new(min_answer_chars: usize) -> Self {
        Self { min_answer_chars }
    }

    pub fn evaluate(&self, answer: &str) -> Verdict {
        if trimmed_char_count(answer) > self.min_answer_chars {
            Verdict::Accepted
        } else {
            Verdict::needs_clarification("")
        }
    }
}

/// True when the answer carries no text at all.
pub fn is_blank(answer: &str) -> bool {
    answer.trim().is_empty()
}
