//! Conversation transcript entries

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Candidate,
    Agent,
}

impl Speaker {
    pub fn as_str(&self) -> &str {
        match self {
            Speaker::Candidate => "candidate",
            Speaker::Agent => "agent",
        }
    }
}

/// A single message in the interview transcript (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub text: String,
}

impl TranscriptEntry {
    pub fn candidate(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Candidate,
            text: text.into(),
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
        }
    }
}
