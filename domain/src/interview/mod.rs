//! Interview subdomain
//!
//! The interview is a small state machine over a fixed question list:
//! answers are judged one at a time, rejected answers trigger a
//! clarification request, accepted answers advance to the next question, and
//! the last accepted answer finalizes the interview.

pub mod answers;
pub mod defaults;
pub mod message;
pub mod phase;
pub mod state;
pub mod summary;
pub mod transcript;
