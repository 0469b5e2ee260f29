//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Every section has defaults, so an empty file (or no file at all) yields a
//! working configuration.

use interview_application::InterviewBehavior;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("judge.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("judge.model cannot be empty")]
    EmptyModelName,

    #[error("judge.base_url must start with http:// or https://")]
    InvalidBaseUrl,

    #[error("notification.webhook_url is required when notification.sink = \"webhook\"")]
    MissingWebhookUrl,

    #[error("sessions.reap_interval_seconds cannot be 0")]
    InvalidReapInterval,
}

/// Raw judge configuration from TOML
///
/// Any OpenAI-compatible chat-completions endpoint works; the defaults
/// target Groq.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    /// Disable to run heuristic-only
    pub enabled: bool,
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Upper bound on one judge call
    pub timeout_seconds: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: "llama-3.3-70b-versatile".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            timeout_seconds: 15,
            temperature: 0.0,
            max_tokens: 64,
        }
    }
}

/// Raw evaluation configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEvaluationConfig {
    /// Fallback heuristic: answers must be longer than this (trimmed chars)
    pub min_answer_chars: usize,
}

impl Default for FileEvaluationConfig {
    fn default() -> Self {
        Self {
            min_answer_chars: 3,
        }
    }
}

/// Raw question source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    /// Directory holding `questions.json` and `questions_<id>.json`
    pub dir: String,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            dir: "data".to_string(),
        }
    }
}

/// Where accepted answers are stored
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Json,
    Memory,
}

/// Raw storage configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStorageConfig {
    pub backend: StorageBackend,
    /// Directory for `user_responses*.json`
    pub dir: String,
    /// Also append every save to `user_responses_history.jsonl`
    pub history: bool,
}

impl Default for FileStorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Json,
            dir: "data".to_string(),
            history: false,
        }
    }
}

/// How the finished interview is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Write the report to the log
    #[default]
    Log,
    /// POST the report as JSON
    Webhook,
    None,
}

/// Raw notification configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNotificationConfig {
    pub sink: NotificationKind,
    pub webhook_url: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for FileNotificationConfig {
    fn default() -> Self {
        Self {
            sink: NotificationKind::Log,
            webhook_url: None,
            timeout_seconds: 10,
        }
    }
}

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionsConfig {
    /// Idle sessions are evicted after this many seconds. Omit to keep them.
    pub ttl_seconds: Option<u64>,
    pub reap_interval_seconds: u64,
}

impl Default for FileSessionsConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: Some(30 * 60),
            reap_interval_seconds: 60,
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Write diagnostics here instead of stderr
    pub file: Option<String>,
    /// Append interview transcripts (JSONL) to this file
    pub transcript_file: Option<String>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub judge: FileJudgeConfig,
    pub evaluation: FileEvaluationConfig,
    pub questions: FileQuestionsConfig,
    pub storage: FileStorageConfig,
    pub notification: FileNotificationConfig,
    pub sessions: FileSessionsConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.judge.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        if self.judge.enabled {
            if self.judge.model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
            let url = self.judge.base_url.trim();
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigValidationError::InvalidBaseUrl);
            }
        }

        if self.notification.sink == NotificationKind::Webhook
            && self
                .notification
                .webhook_url
                .as_deref()
                .is_none_or(|u| u.trim().is_empty())
        {
            return Err(ConfigValidationError::MissingWebhookUrl);
        }

        if self.sessions.reap_interval_seconds == 0 {
            return Err(ConfigValidationError::InvalidReapInterval);
        }

        Ok(())
    }

    /// Application-level behavior derived from this configuration.
    pub fn behavior(&self) -> InterviewBehavior {
        InterviewBehavior::default()
            .with_judge_timeout_seconds(self.judge.timeout_seconds)
            .with_min_answer_chars(self.evaluation.min_answer_chars)
            .with_session_ttl_seconds(self.sessions.ttl_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[judge]
enabled = true
base_url = "http://localhost:11434/v1"
model = "llama3"
api_key_env = "LOCAL_KEY"
timeout_seconds = 5

[evaluation]
min_answer_chars = 10

[questions]
dir = "/srv/questions"

[storage]
backend = "memory"
history = true

[notification]
sink = "webhook"
webhook_url = "https://hooks.example.com/interviews"

[sessions]
ttl_seconds = 600

[logging]
transcript_file = "logs/transcripts.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.judge.model, "llama3");
        assert_eq!(config.judge.api_key_env, "LOCAL_KEY");
        assert_eq!(config.evaluation.min_answer_chars, 10);
        assert_eq!(config.questions.dir, "/srv/questions");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.history);
        assert_eq!(config.notification.sink, NotificationKind::Webhook);
        assert_eq!(config.sessions.ttl_seconds, Some(600));
        assert_eq!(
            config.logging.transcript_file.as_deref(),
            Some("logs/transcripts.jsonl")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[judge]
model = "mixtral-8x7b"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.judge.model, "mixtral-8x7b");
        // Defaults should apply
        assert_eq!(config.judge.api_key_env, "GROQ_API_KEY");
        assert_eq!(config.judge.timeout_seconds, 15);
        assert_eq!(config.storage.backend, StorageBackend::Json);
        assert_eq!(config.notification.sink, NotificationKind::Log);
    }

    #[test]
    fn test_validate_default_config() {
        assert!(FileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config: FileConfig = toml::from_str("[judge]\ntimeout_seconds = 0").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_empty_model_only_matters_when_enabled() {
        let mut config: FileConfig = toml::from_str("[judge]\nmodel = \"  \"").unwrap();
        assert_eq!(config.validate(), Err(ConfigValidationError::EmptyModelName));

        config.judge.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_webhook_requires_url() {
        let config: FileConfig = toml::from_str("[notification]\nsink = \"webhook\"").unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingWebhookUrl)
        );
    }

    #[test]
    fn test_behavior_mapping() {
        let config: FileConfig = toml::from_str(
            "[judge]\ntimeout_seconds = 4\n[evaluation]\nmin_answer_chars = 7\n[sessions]\nttl_seconds = 90",
        )
        .unwrap();
        let behavior = config.behavior();
        assert_eq!(behavior.judge_timeout, Duration::from_secs(4));
        assert_eq!(behavior.min_answer_chars, 7);
        assert_eq!(behavior.session_ttl, Some(Duration::from_secs(90)));
    }
}
