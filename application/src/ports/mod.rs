//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod answer_judge;
pub mod conversation_logger;
pub mod notification_sink;
pub mod progress;
pub mod question_source;
pub mod response_store;
