//! Answer judge port
//!
//! Defines the interface to the LLM that judges candidate answers.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while asking the judge.
///
/// These are transient from the conversation's point of view: the evaluator
/// recovers from every one of them with the fallback heuristic.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Judge not configured: {0}")]
    NotConfigured(String),
}

/// LLM-backed judge
///
/// Implementations (adapters) live in the infrastructure layer. The judge
/// only returns raw text; turning it into a verdict is domain logic
/// ([`interview_domain::parse_judge_response`]).
#[async_trait]
pub trait AnswerJudge: Send + Sync {
    /// Short name used in logs (e.g. the model id)
    fn name(&self) -> &str;

    /// Send the rubric and evaluation prompt, returning the raw reply.
    async fn judge(&self, system_prompt: &str, prompt: &str) -> Result<String, JudgeError>;
}
