//! Response store port
//!
//! Persists accepted answers keyed by interview id.

use async_trait::async_trait;
use interview_domain::{AnswerSheet, InterviewId};
use thiserror::Error;

/// Errors raised by response stores. Never fatal to a conversation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Question text collides with a reserved key: {0}")]
    ReservedKey(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable storage for accepted answers
///
/// Must tolerate concurrent saves for different interview ids.
/// Concurrent saves for the same id are last-writer-wins.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Store the full answer sheet for an interview, replacing earlier saves.
    ///
    /// `candidate` labels who gave the answers, when known.
    async fn save(
        &self,
        interview_id: Option<&InterviewId>,
        candidate: Option<&str>,
        answers: &AnswerSheet,
    ) -> Result<(), StoreError>;

    /// Load the last saved answer sheet, if any.
    async fn load(&self, interview_id: Option<&InterviewId>)
    -> Result<Option<AnswerSheet>, StoreError>;
}
