//! Read-only projections of an interview

use super::answers::AnswerSheet;
use crate::core::interview_id::InterviewId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot returned by `summary()`
///
/// `questions_asked` always equals `answers.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewSummary {
    pub answers: AnswerSheet,
    pub questions_asked: usize,
    pub total_questions: usize,
    pub complete: bool,
    pub message_count: usize,
}

impl InterviewSummary {
    pub fn new(
        answers: AnswerSheet,
        total_questions: usize,
        complete: bool,
        message_count: usize,
    ) -> Self {
        Self {
            questions_asked: answers.len(),
            answers,
            total_questions,
            complete,
            message_count,
        }
    }

    /// Fraction of questions answered (0.0 when there are no questions)
    pub fn progress_ratio(&self) -> f64 {
        if self.total_questions == 0 {
            0.0
        } else {
            self.questions_asked as f64 / self.total_questions as f64
        }
    }
}

/// Everything a notification needs once the interview is finished
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewReport {
    pub interview_id: Option<InterviewId>,
    pub questions: Vec<String>,
    pub answers: AnswerSheet,
    pub completed_at: DateTime<Utc>,
}

impl InterviewReport {
    pub fn subject(&self) -> String {
        match &self.interview_id {
            Some(id) => format!("Interview summary - {}", id),
            None => "Interview summary".to_string(),
        }
    }

    /// Plain-text body listing every answered question in interview order,
    /// followed by the completion time.
    pub fn render_plain_text(&self) -> String {
        let mut body = String::from("Summary of the interview run by the recruiting assistant:\n\n");

        if let Some(id) = &self.interview_id {
            body.push_str(&format!("Position: {}\n\n", id));
        }

        for (question, answer) in self.answers.in_question_order(&self.questions) {
            body.push_str(&format!("Question: {}\n", question));
            body.push_str(&format!("Answer: {}\n\n", answer));
        }

        body.push_str(&format!(
            "Date and time: {}\n",
            self.completed_at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
        ));
        body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_report() -> InterviewReport {
        let mut answers = AnswerSheet::new();
        answers.record("Skills?", "Python, SQL");
        answers.record("Name?", "Juan Pérez");
        InterviewReport {
            interview_id: Some(InterviewId::new("offer-1").unwrap()),
            questions: vec!["Name?".to_string(), "Skills?".to_string()],
            answers,
            completed_at: Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_counts_answers() {
        let mut answers = AnswerSheet::new();
        answers.record("a", "b");
        let summary = InterviewSummary::new(answers, 4, false, 3);
        assert_eq!(summary.questions_asked, 1);
        assert_eq!(summary.progress_ratio(), 0.25);
    }

    #[test]
    fn test_report_body_follows_question_order() {
        let body = sample_report().render_plain_text();
        let name = body.find("Question: Name?").unwrap();
        let skills = body.find("Question: Skills?").unwrap();
        assert!(name < skills);
        assert!(body.contains("Answer: Juan Pérez"));
        assert!(body.contains("Position: offer-1"));
        assert!(body.contains("Date and time: 2026-03-01T10:30:00Z"));
    }

    #[test]
    fn test_subject() {
        assert_eq!(sample_report().subject(), "Interview summary - offer-1");
    }
}
