//! Notification sink adapters.

mod log_sink;
mod webhook_sink;

pub use log_sink::LogNotificationSink;
pub use webhook_sink::WebhookNotificationSink;
