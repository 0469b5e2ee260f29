//! Port for structured transcript logging.
//!
//! Defines the [`ConversationLogger`] trait for recording interview events
//! (greetings, candidate answers, verdicts, completion) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostics, while this port keeps a machine-readable
//! record of every interview for later review.

use interview_domain::InterviewId;
use serde_json::Value;

/// A structured interview event.
pub struct ConversationEvent {
    /// Event type identifier (e.g. "interview_started", "verdict").
    pub event_type: &'static str,
    /// Interview the event belongs to (`None` for the default question set).
    pub interview_id: Option<InterviewId>,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(
        event_type: &'static str,
        interview_id: Option<&InterviewId>,
        payload: Value,
    ) -> Self {
        Self {
            event_type,
            interview_id: interview_id.cloned(),
            payload,
        }
    }
}

/// Port for logging interview events.
///
/// `log` is synchronous and infallible so it can never disturb the
/// conversation; implementations swallow their own failures.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcript logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
