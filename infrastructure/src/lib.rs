//! Infrastructure layer for interview-bot
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod judge;
pub mod logging;
pub mod notify;
pub mod questions;
pub mod storage;

#[cfg(test)]
mod test_http;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileJudgeConfig, FileNotificationConfig,
    FileStorageConfig, NotificationKind, StorageBackend,
};
pub use judge::{JudgeEndpoint, OpenAiCompatibleJudge};
pub use logging::JsonlTranscriptLogger;
pub use notify::{LogNotificationSink, WebhookNotificationSink};
pub use questions::{FileQuestionSource, InMemoryQuestionSource, QuestionSetInfo};
pub use storage::{HistoryStatistics, InMemoryResponseStore, JsonFileResponseStore};
