//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as the judge timeout and session lifetime.

use interview_domain::LengthHeuristic;
use interview_domain::evaluation::heuristic::DEFAULT_MIN_ANSWER_CHARS;
use std::time::Duration;

/// Default upper bound on a single judge call.
pub const DEFAULT_JUDGE_TIMEOUT: Duration = Duration::from_secs(15);

/// Application behavior configuration.
///
/// Controls how answers are evaluated and how long idle sessions live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterviewBehavior {
    /// Maximum time to wait for the judge before falling back to the heuristic.
    pub judge_timeout: Duration,
    /// Fallback heuristic threshold (answers must be longer than this).
    pub min_answer_chars: usize,
    /// Idle sessions older than this are evicted. `None` keeps them forever.
    pub session_ttl: Option<Duration>,
}

impl Default for InterviewBehavior {
    fn default() -> Self {
        Self {
            judge_timeout: DEFAULT_JUDGE_TIMEOUT,
            min_answer_chars: DEFAULT_MIN_ANSWER_CHARS,
            session_ttl: Some(Duration::from_secs(30 * 60)),
        }
    }
}

impl InterviewBehavior {
    /// Creates a behavior with the judge timeout specified in seconds.
    pub fn with_judge_timeout_seconds(mut self, seconds: u64) -> Self {
        self.judge_timeout = Duration::from_secs(seconds);
        self
    }

    pub fn with_min_answer_chars(mut self, min_answer_chars: usize) -> Self {
        self.min_answer_chars = min_answer_chars;
        self
    }

    /// Sets the session TTL from optional seconds; `None` disables eviction.
    pub fn with_session_ttl_seconds(mut self, seconds: Option<u64>) -> Self {
        self.session_ttl = seconds.map(Duration::from_secs);
        self
    }

    pub fn heuristic(&self) -> LengthHeuristic {
        LengthHeuristic::new(self.min_answer_chars)
    }
}
