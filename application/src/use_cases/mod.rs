//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod conversation_engine;
pub mod evaluate_answer;
pub mod session_store;
