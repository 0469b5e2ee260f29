//! Application layer for interview-bot
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::InterviewBehavior;
pub use ports::{
    answer_judge::{AnswerJudge, JudgeError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    notification_sink::{NoNotification, NotificationError, NotificationSink},
    progress::{InterviewProgressNotifier, NoProgress},
    question_source::QuestionSource,
    response_store::{ResponseStore, StoreError},
};
pub use use_cases::conversation_engine::{ConversationEngine, EngineError, EnginePorts};
pub use use_cases::evaluate_answer::AnswerEvaluator;
pub use use_cases::session_store::{SessionHandle, SessionStore};
