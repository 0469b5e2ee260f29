//! Notification sink that writes the report to the log.

use async_trait::async_trait;
use interview_application::{NotificationError, NotificationSink};
use interview_domain::InterviewReport;
use tracing::info;

/// Writes the plain-text report through `tracing` at info level
#[derive(Debug, Default)]
pub struct LogNotificationSink;

#[async_trait]
impl NotificationSink for LogNotificationSink {
    async fn notify(&self, report: &InterviewReport) -> Result<(), NotificationError> {
        info!(
            "{}\n{}",
            report.subject(),
            report.render_plain_text().trim_end()
        );
        Ok(())
    }
}
