//! In-memory question source for embedding and tests.

use async_trait::async_trait;
use interview_application::QuestionSource;
use interview_domain::{InterviewId, default_questions};
use std::collections::HashMap;

/// Question lists held in memory, keyed by interview id
pub struct InMemoryQuestionSource {
    by_id: HashMap<InterviewId, Vec<String>>,
    default: Vec<String>,
}

impl Default for InMemoryQuestionSource {
    fn default() -> Self {
        Self::new(default_questions())
    }
}

impl InMemoryQuestionSource {
    /// Source whose default set is `default`.
    pub fn new(default: Vec<String>) -> Self {
        Self {
            by_id: HashMap::new(),
            default,
        }
    }

    pub fn with_questions(mut self, interview_id: InterviewId, questions: Vec<String>) -> Self {
        self.by_id.insert(interview_id, questions);
        self
    }
}

#[async_trait]
impl QuestionSource for InMemoryQuestionSource {
    async fn load(&self, interview_id: Option<&InterviewId>) -> Vec<String> {
        interview_id
            .and_then(|id| self.by_id.get(id))
            .filter(|questions| !questions.is_empty())
            .unwrap_or(&self.default)
            .clone()
    }
}
