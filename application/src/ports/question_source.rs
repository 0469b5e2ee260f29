//! Question source port
//!
//! Supplies the ordered question list for an interview.

use async_trait::async_trait;
use interview_domain::InterviewId;

/// Source of interview questions
///
/// Implementations must not fail: when no interview-specific list exists, or
/// the backing storage is unreadable, they log the problem and return the
/// default question set instead.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Load the questions for `interview_id` (default set when `None`).
    async fn load(&self, interview_id: Option<&InterviewId>) -> Vec<String>;
}
