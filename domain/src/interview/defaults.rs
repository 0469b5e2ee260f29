//! Built-in question set used when no interview-specific list exists

/// Generic screening questions.
pub const DEFAULT_QUESTIONS: &[&str] = &[
    "What is your full name?",
    "Could you briefly describe your professional experience?",
    "What are your main technical skills?",
    "Why are you interested in this position?",
    "When would you be available to start?",
];

pub fn default_questions() -> Vec<String> {
    DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
}
