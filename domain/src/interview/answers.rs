//! Accepted answers collected during an interview

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping of question text to accepted answer text (Value Object)
///
/// Backed by a `BTreeMap` so projections and persisted snapshots are
/// deterministic. Use [`AnswerSheet::in_question_order`] when the original
/// question order matters (reports, notifications).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    entries: BTreeMap<String, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the accepted answer for a question.
    ///
    /// Re-recording the same question text overwrites the earlier answer, so
    /// duplicate questions in a question list share one entry.
    pub fn record(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.entries.insert(question.into(), answer.into());
    }

    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries.get(question).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    /// Answered questions in the order they appear in `questions`.
    pub fn in_question_order<'a>(&'a self, questions: &'a [String]) -> Vec<(&'a str, &'a str)> {
        let mut seen = std::collections::HashSet::new();
        questions
            .iter()
            .filter(|q| seen.insert(q.as_str()))
            .filter_map(|q| self.get(q).map(|a| (q.as_str(), a)))
            .collect()
    }
}

impl FromIterator<(String, String)> for AnswerSheet {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
