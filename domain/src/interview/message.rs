//! Agent-facing messages and their wording

use serde::{Deserialize, Serialize};

/// What an agent message is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentMessageKind {
    /// Opening message (with the first question when one exists)
    Greeting,
    /// Acknowledgement plus the next question
    Question,
    /// Request to expand on a rejected answer
    Clarification,
    /// Final message after the last accepted answer
    Completion,
    /// Anything else (e.g. nothing to evaluate)
    Notice,
}

/// Message returned to the UI after `start()` or `submit_answer()`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    pub kind: AgentMessageKind,
    pub text: String,
}

impl AgentMessage {
    pub fn new(kind: AgentMessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn is_completion(&self) -> bool {
        self.kind == AgentMessageKind::Completion
    }
}

impl std::fmt::Display for AgentMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Fixed wording used by the conversation engine.
pub mod wording {
    use crate::core::interview_id::InterviewId;

    const INTRO: &str = "Hello! I'm the recruiting assistant.\n\
        I'm going to ask you a few questions to get to know you better.\n\
        Please answer as honestly as possible.";

    /// Greeting shown when no question could be loaded.
    pub const GENERIC_GREETING: &str =
        "Hello! I'm the recruiting assistant. How can I help you?";

    pub const NOTHING_TO_EVALUATE: &str = "There are no interview questions configured right now, \
        so there is nothing to evaluate. Our team will get in touch with you soon.";

    /// Shown by front ends when an operation fails. Internal error text is
    /// never put in the conversation.
    pub const TRY_AGAIN: &str = "Sorry, something went wrong on our side. Please try again.";

    /// Reason used when an answer is rejected without a judge-provided reason.
    pub const GENERIC_CLARIFICATION_REASON: &str = "Please provide a more detailed answer.";

    pub const COMPLETION_SUCCESS: &str = "Thank you very much for your time!\n\n\
        ✅ Your answers have been saved\n\
        ✅ A summary has been sent to our recruiting team\n\n\
        Our team will review your information and get in touch with you soon.\n\n\
        Have a great day!";

    pub const COMPLETION_WITH_ISSUES: &str = "Thank you for completing the interview.\n\
        Your answers were processed with some technical issues, \
        but our team will get in touch with you soon.";

    pub fn greeting(interview_id: Option<&InterviewId>, first_question: &str) -> String {
        let mut text = INTRO.to_string();
        if let Some(id) = interview_id {
            text.push_str(&format!("\n\nThis interview is for the position: **{}**", id));
        }
        text.push_str("\n\nLet's begin:\n\n");
        text.push_str(first_question);
        text
    }

    pub fn clarification(reason: &str, question: &str) -> String {
        format!(
            "I'd like you to expand on your previous answer.\n{}\n\n\
             Please provide more details about: {}",
            reason, question
        )
    }

    pub fn next_question(question: &str) -> String {
        format!(
            "Perfect, thank you for your answer.\n\nNext question:\n{}",
            question
        )
    }

    pub fn completion(finalized_cleanly: bool) -> &'static str {
        if finalized_cleanly {
            COMPLETION_SUCCESS
        } else {
            COMPLETION_WITH_ISSUES
        }
    }
}
