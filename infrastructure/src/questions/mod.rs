//! Question source adapters.

mod file_source;
mod memory;

pub use file_source::{FileQuestionSource, QuestionSetInfo};
pub use memory::InMemoryQuestionSource;
