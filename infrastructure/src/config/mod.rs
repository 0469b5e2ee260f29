//! Configuration file loading for interview-bot
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `INTERVIEW_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./interview.toml` or `./.interview.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/interview-bot/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileEvaluationConfig, FileJudgeConfig, FileLoggingConfig,
    FileNotificationConfig, FileQuestionsConfig, FileSessionsConfig, FileStorageConfig,
    NotificationKind, StorageBackend,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
