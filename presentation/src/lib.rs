//! Presentation layer for interview-bot
//!
//! This crate contains the CLI definition, output formatting,
//! progress reporting, and the interactive interview REPL.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::InterviewRepl;
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::EvaluationSpinner;
