//! OpenAI-compatible chat-completions judge.
//!
//! Works with any endpoint speaking the `/chat/completions` protocol (Groq,
//! OpenAI, local llama.cpp / Ollama servers). The default configuration
//! targets Groq.

use async_trait::async_trait;
use interview_application::{AnswerJudge, JudgeError};
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Configuration for the judge endpoint.
#[derive(Debug, Clone)]
pub struct JudgeEndpoint {
    /// Base URL of the API, without the `/chat/completions` suffix
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Verdicts are one line; keep replies short
    pub max_tokens: u32,
    /// HTTP-level timeout. The evaluator applies its own bound on top.
    pub timeout: Duration,
}

impl Default for JudgeEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.0,
            max_tokens: 64,
            timeout: Duration::from_secs(15),
        }
    }
}

impl JudgeEndpoint {
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// Judge backed by an OpenAI-compatible HTTP API
pub struct OpenAiCompatibleJudge {
    endpoint: JudgeEndpoint,
    api_key: Secret<String>,
    client: Client,
}

impl OpenAiCompatibleJudge {
    pub fn new(endpoint: JudgeEndpoint, api_key: impl Into<String>) -> Result<Self, JudgeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(JudgeError::NotConfigured("API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(endpoint.timeout)
            .build()
            .map_err(|e| JudgeError::NotConfigured(e.to_string()))?;

        Ok(Self {
            endpoint,
            api_key: Secret::new(api_key),
            client,
        })
    }

    /// Build from an API key stored in the environment variable `var`.
    pub fn from_env(endpoint: JudgeEndpoint, var: &str) -> Result<Self, JudgeError> {
        let key = std::env::var(var)
            .map_err(|_| JudgeError::NotConfigured(format!("{} is not set", var)))?;
        Self::new(endpoint, key)
    }

    pub fn endpoint(&self) -> &JudgeEndpoint {
        &self.endpoint
    }

    async fn handle_status(response: Response) -> Result<Response, JudgeError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        match status.as_u16() {
            401 | 403 => Err(JudgeError::AuthenticationFailed(format!(
                "status {}",
                status
            ))),
            429 => Err(JudgeError::RequestFailed("rate limited".to_string())),
            _ => Err(JudgeError::RequestFailed(format!(
                "status {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            ))),
        }
    }
}

#[async_trait]
impl AnswerJudge for OpenAiCompatibleJudge {
    fn name(&self) -> &str {
        &self.endpoint.model
    }

    async fn judge(&self, system_prompt: &str, prompt: &str) -> Result<String, JudgeError> {
        let request = ChatRequest {
            model: &self.endpoint.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.endpoint.temperature,
            max_tokens: self.endpoint.max_tokens,
        };

        let response = self
            .client
            .post(self.endpoint.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    JudgeError::Timeout
                } else if e.is_connect() {
                    JudgeError::ConnectionError(format!("Connection failed: {}", e))
                } else {
                    JudgeError::ConnectionError(e.to_string())
                }
            })?;

        let response = Self::handle_status(response).await?;
        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| JudgeError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| JudgeError::InvalidResponse("No choices in response".to_string()))?;

        debug!("Judge {} returned {} bytes", self.endpoint.model, content.len());
        Ok(content)
    }
}
