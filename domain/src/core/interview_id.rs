//! Interview identifier value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Opaque key correlating a question set and its answers to one interview
/// (typically a job-offer id).
///
/// The id ends up in file names (`questions_<id>.json`), so only ASCII
/// alphanumerics, `-`, `_` and `.` are accepted and `..` is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InterviewId(String);

impl InterviewId {
    /// Try to create an interview id, returning an error if it is empty or
    /// contains characters that are not allowed
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        let trimmed = value.trim();

        let valid_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));

        if trimmed.is_empty() || !valid_chars || trimmed.contains("..") {
            return Err(DomainError::InvalidInterviewId(value));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for InterviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InterviewId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for InterviewId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<InterviewId> for String {
    fn from(id: InterviewId) -> Self {
        id.0
    }
}
