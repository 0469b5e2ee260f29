//! JSON file response store.
//!
//! Each save rewrites `user_responses_<id>.json` (or `user_responses.json`
//! for the default question set) with the full answer map plus a
//! `timestamp` entry. Writes go to a temporary file that is then renamed
//! over the target, so readers never see a half-written file.
//!
//! With history enabled every save is also appended to
//! `user_responses_history.jsonl`:
//!
//! ```text
//! {"interview_id":"42","candidate":"Ana","responses":{...},
//!  "timestamp":"...","date":"2024-05-01","time":"10:15:00","entry_number":3}
//! ```
//!
//! [`JsonFileResponseStore::statistics`] summarizes that file.

use async_trait::async_trait;
use interview_application::{ResponseStore, StoreError};
use interview_domain::{AnswerSheet, InterviewId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Key added next to the answers in every saved file.
pub const TIMESTAMP_KEY: &str = "timestamp";

const HISTORY_FILE: &str = "user_responses_history.jsonl";

#[derive(Serialize)]
struct HistoryEntry<'a> {
    interview_id: Option<&'a str>,
    candidate: Option<&'a str>,
    responses: &'a AnswerSheet,
    timestamp: String,
    date: String,
    time: String,
    entry_number: usize,
}

/// The fields of a history line that statistics look at.
#[derive(Deserialize)]
struct HistoryLine {
    #[serde(default)]
    interview_id: Option<String>,
    #[serde(default)]
    candidate: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
}

/// Summary of the save history file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryStatistics {
    pub total_entries: usize,
    pub unique_candidates: usize,
    pub unique_interviews: usize,
    pub first_entry: Option<String>,
    pub last_entry: Option<String>,
    pub file_size_bytes: u64,
}

/// Response store writing one JSON file per interview id
pub struct JsonFileResponseStore {
    dir: PathBuf,
    history: bool,
    history_lock: Mutex<()>,
    tmp_counter: AtomicU64,
}

impl JsonFileResponseStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            history: false,
            history_lock: Mutex::new(()),
            tmp_counter: AtomicU64::new(0),
        }
    }

    /// Also append every save to the history file.
    pub fn with_history(mut self, enabled: bool) -> Self {
        self.history = enabled;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the answers file for `interview_id`.
    pub fn file_for(&self, interview_id: Option<&InterviewId>) -> PathBuf {
        match interview_id {
            Some(id) => self.dir.join(format!("user_responses_{}.json", id)),
            None => self.dir.join("user_responses.json"),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    async fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<(), StoreError> {
        let n = self.tmp_counter.fetch_add(1, Ordering::Relaxed);
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let tmp = path.with_file_name(format!(".{}.{}.tmp", file_name, n));

        tokio::fs::write(&tmp, content).await?;
        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    /// Read the history file back. `None` when nothing was recorded yet.
    ///
    /// Lines that do not parse are skipped with a warning.
    pub async fn statistics(&self) -> Result<Option<HistoryStatistics>, StoreError> {
        let path = self.history_path();
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file_size_bytes = tokio::fs::metadata(&path).await?.len();

        let mut total_entries = 0;
        let mut candidates = HashSet::new();
        let mut interviews = HashSet::new();
        let mut timestamps = Vec::new();

        for (number, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let entry: HistoryLine = match serde_json::from_str(line) {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping {} line {}: {}", path.display(), number + 1, e);
                    continue;
                }
            };
            total_entries += 1;
            candidates.extend(entry.candidate);
            interviews.extend(entry.interview_id);
            timestamps.extend(entry.timestamp);
        }

        // RFC 3339 timestamps in one offset sort chronologically as strings.
        timestamps.sort();
        Ok(Some(HistoryStatistics {
            total_entries,
            unique_candidates: candidates.len(),
            unique_interviews: interviews.len(),
            first_entry: timestamps.first().cloned(),
            last_entry: timestamps.last().cloned(),
            file_size_bytes,
        }))
    }

    async fn append_history(
        &self,
        interview_id: Option<&InterviewId>,
        candidate: Option<&str>,
        answers: &AnswerSheet,
        saved_at: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let _guard = self.history_lock.lock().await;
        let path = self.history_path();

        let previous = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content.lines().filter(|l| !l.trim().is_empty()).count(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => 0,
            Err(e) => return Err(e.into()),
        };

        let entry = HistoryEntry {
            interview_id: interview_id.map(InterviewId::as_str),
            candidate,
            responses: answers,
            timestamp: saved_at.to_rfc3339(),
            date: saved_at.format("%Y-%m-%d").to_string(),
            time: saved_at.format("%H:%M:%S").to_string(),
            entry_number: previous + 1,
        };
        let mut line = serde_json::to_string(&entry)?;
        line.push('\n');

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl ResponseStore for JsonFileResponseStore {
    async fn save(
        &self,
        interview_id: Option<&InterviewId>,
        candidate: Option<&str>,
        answers: &AnswerSheet,
    ) -> Result<(), StoreError> {
        // The timestamp shares the answer map, so a question with that exact
        // text could not be read back.
        if answers.iter().any(|(q, _)| q == TIMESTAMP_KEY) {
            warn!("Refusing to save a question named {:?}", TIMESTAMP_KEY);
            return Err(StoreError::ReservedKey(TIMESTAMP_KEY.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let saved_at = Utc::now();
        let mut document: Map<String, Value> = answers
            .iter()
            .map(|(q, a)| (q.to_string(), Value::String(a.to_string())))
            .collect();
        document.insert(TIMESTAMP_KEY.to_string(), Value::String(saved_at.to_rfc3339()));

        let path = self.file_for(interview_id);
        let content = serde_json::to_vec_pretty(&Value::Object(document))?;
        self.write_atomic(&path, &content).await?;
        debug!("Saved {} answers to {}", answers.len(), path.display());

        if self.history {
            self.append_history(interview_id, candidate, answers, saved_at)
                .await?;
        }
        Ok(())
    }

    async fn load(
        &self,
        interview_id: Option<&InterviewId>,
    ) -> Result<Option<AnswerSheet>, StoreError> {
        let path = self.file_for(interview_id);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let document: Map<String, Value> = serde_json::from_str(&content)?;
        let sheet = document
            .into_iter()
            .filter(|(key, _)| key != TIMESTAMP_KEY)
            .filter_map(|(key, value)| match value {
                Value::String(answer) => Some((key, answer)),
                _ => None,
            })
            .collect();
        Ok(Some(sheet))
    }
}
