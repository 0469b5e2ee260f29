//! In-memory implementation of `ResponseStore`.
//!
//! All answers are lost on restart.

use async_trait::async_trait;
use interview_application::{ResponseStore, StoreError};
use interview_domain::{AnswerSheet, InterviewId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory response store.
///
/// Keyed by interview id (`None` is the default question set).
/// Concurrent saves for the same key are last-writer-wins.
pub struct InMemoryResponseStore {
    sheets: RwLock<HashMap<Option<InterviewId>, AnswerSheet>>,
}

impl InMemoryResponseStore {
    pub fn new() -> Self {
        Self {
            sheets: RwLock::new(HashMap::new()),
        }
    }

    pub async fn len(&self) -> usize {
        self.sheets.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sheets.read().await.is_empty()
    }
}

impl Default for InMemoryResponseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn save(
        &self,
        interview_id: Option<&InterviewId>,
        _candidate: Option<&str>,
        answers: &AnswerSheet,
    ) -> Result<(), StoreError> {
        let mut sheets = self.sheets.write().await;
        sheets.insert(interview_id.cloned(), answers.clone());
        Ok(())
    }

    async fn load(
        &self,
        interview_id: Option<&InterviewId>,
    ) -> Result<Option<AnswerSheet>, StoreError> {
        let sheets = self.sheets.read().await;
        Ok(sheets.get(&interview_id.cloned()).cloned())
    }
}
