//! Webhook notification sink.
//!
//! POSTs the finished interview as JSON. Whatever listens on the other end
//! (an e-mail or SMS bridge, a recruiting system) takes it from there.
//!
//! Payload:
//!
//! ```json
//! {
//!   "subject": "Interview summary - 42",
//!   "interview_id": "42",
//!   "completed_at": "2026-03-01T10:30:00Z",
//!   "answers": [{"question": "Name?", "answer": "Juan Pérez"}],
//!   "body": "Summary of the interview ..."
//! }
//! ```

use async_trait::async_trait;
use interview_application::{NotificationError, NotificationSink};
use interview_domain::InterviewReport;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct AnswerPair<'a> {
    question: &'a str,
    answer: &'a str,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    subject: String,
    interview_id: Option<&'a str>,
    completed_at: String,
    answers: Vec<AnswerPair<'a>>,
    body: String,
}

impl<'a> WebhookPayload<'a> {
    fn from_report(report: &'a InterviewReport) -> Self {
        Self {
            subject: report.subject(),
            interview_id: report.interview_id.as_ref().map(|id| id.as_str()),
            completed_at: report
                .completed_at
                .to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
            answers: report
                .answers
                .in_question_order(&report.questions)
                .into_iter()
                .map(|(question, answer)| AnswerPair { question, answer })
                .collect(),
            body: report.render_plain_text(),
        }
    }
}

/// Sink posting reports to an HTTP endpoint
pub struct WebhookNotificationSink {
    url: String,
    client: Client,
}

impl WebhookNotificationSink {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, NotificationError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(NotificationError::NotConfigured(
                "webhook URL is empty".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotificationError::NotConfigured(e.to_string()))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl NotificationSink for WebhookNotificationSink {
    async fn notify(&self, report: &InterviewReport) -> Result<(), NotificationError> {
        let payload = WebhookPayload::from_report(report);

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    NotificationError::DeliveryFailed(format!("timed out posting to {}", self.url))
                } else if e.is_connect() {
                    NotificationError::DeliveryFailed(format!("connection failed: {}", e))
                } else {
                    NotificationError::DeliveryFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotificationError::Rejected {
                status: status.as_u16(),
            });
        }

        debug!("Webhook {} accepted the report ({})", self.url, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_http::{bind, serve_once};
    use chrono::TimeZone;
    use interview_domain::{AnswerSheet, InterviewId};

    fn report() -> InterviewReport {
        let mut answers = AnswerSheet::new();
        answers.record("Skills?", "Python, SQL");
        answers.record("Name?", "Juan Pérez");
        InterviewReport {
            interview_id: Some(InterviewId::new("42").unwrap()),
            questions: vec!["Name?".to_string(), "Skills?".to_string()],
            answers,
            completed_at: chrono::Utc.with_ymd_and_hms(2026, 3, 1, 10, 30, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_posts_report_as_json() {
        let (listener, base) = bind().await;
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 200 OK", "{}"));

        let sink = WebhookNotificationSink::new(format!("{}/hook", base), Duration::from_secs(5))
            .unwrap();
        sink.notify(&report()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.head.starts_with("post /hook"));
        let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(body["interview_id"], "42");
        assert_eq!(body["completed_at"], "2026-03-01T10:30:00Z");
        assert_eq!(body["answers"][0]["question"], "Name?");
        assert_eq!(body["answers"][1]["answer"], "Python, SQL");
    }

    #[tokio::test]
    async fn test_error_status_is_rejected() {
        let (listener, base) = bind().await;
        let server = tokio::spawn(serve_once(listener, "HTTP/1.1 503 Service Unavailable", "{}"));

        let sink = WebhookNotificationSink::new(base, Duration::from_secs(5)).unwrap();
        let err = sink.notify(&report()).await.unwrap_err();
        assert!(matches!(err, NotificationError::Rejected { status: 503 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_delivery() {
        let (listener, base) = bind().await;
        drop(listener);

        let sink = WebhookNotificationSink::new(base, Duration::from_secs(2)).unwrap();
        let err = sink.notify(&report()).await.unwrap_err();
        assert!(matches!(err, NotificationError::DeliveryFailed(_)));
    }

    #[test]
    fn test_empty_url_is_not_configured() {
        assert!(matches!(
            WebhookNotificationSink::new("  ", Duration::from_secs(1)),
            Err(NotificationError::NotConfigured(_))
        ));
    }
}
