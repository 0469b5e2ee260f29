//! Notification sink port
//!
//! Emits the interview report once the last question is answered.

use async_trait::async_trait;
use interview_domain::InterviewReport;
use thiserror::Error;

/// Errors raised while notifying. Never fatal to a conversation.
#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("Recipient rejected the notification (status {status})")]
    Rejected { status: u16 },

    #[error("Notification sink not configured: {0}")]
    NotConfigured(String),
}

/// Destination for finished interview reports (e-mail bridge, webhook, log…)
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, report: &InterviewReport) -> Result<(), NotificationError>;
}

/// Sink that accepts everything and does nothing (notifications disabled).
pub struct NoNotification;

#[async_trait]
impl NotificationSink for NoNotification {
    async fn notify(&self, _report: &InterviewReport) -> Result<(), NotificationError> {
        Ok(())
    }
}
