//! File-backed question source.
//!
//! Looks for `questions_<id>.json`, then `questions.json`, in one directory,
//! and falls back to the built-in default questions. Both
//! `{"questions": [...]}` and a bare JSON array are accepted.

use async_trait::async_trait;
use interview_application::QuestionSource;
use interview_domain::{InterviewId, default_questions};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const DEFAULT_FILE: &str = "questions.json";
const FILE_PREFIX: &str = "questions_";
const FILE_SUFFIX: &str = ".json";

#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    Wrapped { questions: Vec<String> },
    Bare(Vec<String>),
}

impl QuestionFile {
    fn into_questions(self) -> Vec<String> {
        let raw = match self {
            QuestionFile::Wrapped { questions } => questions,
            QuestionFile::Bare(questions) => questions,
        };
        raw.into_iter()
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty())
            .collect()
    }
}

/// One question file found in the directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSetInfo {
    pub file_name: String,
    /// `None` for the default `questions.json`
    pub interview_id: Option<String>,
    pub question_count: usize,
}

impl QuestionSetInfo {
    pub fn is_default(&self) -> bool {
        self.interview_id.is_none()
    }
}

/// Question source reading JSON files from a directory
pub struct FileQuestionSource {
    dir: PathBuf,
}

impl FileQuestionSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, interview_id: &InterviewId) -> PathBuf {
        self.dir
            .join(format!("{}{}{}", FILE_PREFIX, interview_id, FILE_SUFFIX))
    }

    /// Read one question file. Missing, unreadable, malformed and empty files
    /// all yield `None`.
    async fn read_file(path: &Path) -> Option<Vec<String>> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No question file at {}", path.display());
                return None;
            }
            Err(e) => {
                warn!("Could not read question file {}: {}", path.display(), e);
                return None;
            }
        };

        match serde_json::from_str::<QuestionFile>(&content) {
            Ok(file) => {
                let questions = file.into_questions();
                if questions.is_empty() {
                    warn!("Question file {} contains no questions", path.display());
                    None
                } else {
                    Some(questions)
                }
            }
            Err(e) => {
                warn!("Malformed question file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Enumerate the question files in the directory, sorted by file name.
    ///
    /// Files that cannot be parsed are skipped.
    pub async fn list_available(&self) -> Vec<QuestionSetInfo> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Cannot list {}: {}", self.dir.display(), e);
                return Vec::new();
            }
        };

        let mut sets = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let file_name = entry.file_name().to_string_lossy().into_owned();

            let interview_id = if file_name == DEFAULT_FILE {
                None
            } else if let Some(id) = file_name
                .strip_prefix(FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(FILE_SUFFIX))
            {
                Some(id.to_string())
            } else {
                continue;
            };

            if let Some(questions) = Self::read_file(&entry.path()).await {
                sets.push(QuestionSetInfo {
                    file_name,
                    interview_id,
                    question_count: questions.len(),
                });
            }
        }

        sets.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        sets
    }
}

#[async_trait]
impl QuestionSource for FileQuestionSource {
    async fn load(&self, interview_id: Option<&InterviewId>) -> Vec<String> {
        if let Some(id) = interview_id {
            let path = self.file_for(id);
            if let Some(questions) = Self::read_file(&path).await {
                info!("Loaded {} questions from {}", questions.len(), path.display());
                return questions;
            }
            info!("No specific questions for {}, trying the default file", id);
        }

        let path = self.dir.join(DEFAULT_FILE);
        if let Some(questions) = Self::read_file(&path).await {
            info!("Loaded {} questions from {}", questions.len(), path.display());
            return questions;
        }

        warn!(
            "No question files in {}, using built-in questions",
            self.dir.display()
        );
        default_questions()
    }
}
