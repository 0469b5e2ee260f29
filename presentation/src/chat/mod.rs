//! Interactive interview module
//!
//! Provides a reedline-based interactive interface to the conversation engine.

mod repl;

pub use repl::InterviewRepl;
