//! Answer judge adapters.

mod openai_compatible;

pub use openai_compatible::{
    DEFAULT_BASE_URL, DEFAULT_MODEL, JudgeEndpoint, OpenAiCompatibleJudge,
};
