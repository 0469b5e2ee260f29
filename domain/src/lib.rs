//! Domain layer for interview-bot
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Interview
//!
//! An interview walks a candidate through a fixed list of questions:
//!
//! - **Verdict**: every answer is either accepted or needs clarification
//! - **Clarification**: a rejected answer keeps the same question
//! - **Finalization**: the last accepted answer completes the interview
//!
//! ## Judge
//!
//! Answers are judged by a pluggable LLM with a lenient rubric
//! ([`JudgePrompt`], [`parse_judge_response`]), with a deterministic length
//! heuristic ([`LengthHeuristic`]) as fallback.

pub mod candidate;
pub mod core;
pub mod evaluation;
pub mod interview;

// Re-export commonly used types
pub use candidate::CandidateProfile;
pub use crate::core::{error::DomainError, interview_id::InterviewId};
pub use evaluation::{
    Evaluation, JudgePrompt, LengthHeuristic, Verdict, VerdictSource, is_blank,
    parse_judge_response,
};
pub use interview::{
    answers::AnswerSheet,
    defaults::{DEFAULT_QUESTIONS, default_questions},
    message::{AgentMessage, AgentMessageKind, wording},
    phase::InterviewPhase,
    state::{Advance, ClarificationRequest, InterviewState},
    summary::{InterviewReport, InterviewSummary},
    transcript::{Speaker, TranscriptEntry},
};
