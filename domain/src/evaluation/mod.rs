//! Answer evaluation primitives
//!
//! - [`verdict::Verdict`] - Accepted / NeedsClarification(reason)
//! - [`parsing::parse_judge_response`] - judge text → verdict (lenient)
//! - [`heuristic::LengthHeuristic`] - fallback when the judge is unavailable
//! - [`prompt::JudgePrompt`] - the rubric sent to the judge

pub mod heuristic;
pub mod parsing;
pub mod prompt;
pub mod verdict;

pub use heuristic::{LengthHeuristic, is_blank};
pub use parsing::parse_judge_response;
pub use prompt::JudgePrompt;
pub use verdict::{Evaluation, Verdict, VerdictSource};
