//! Prompt templates for the answer judge

/// Templates for the judge rubric
pub struct JudgePrompt;

impl JudgePrompt {
    /// System prompt: the lenient rubric
    pub fn system() -> &'static str {
        r#"You are an assistant helping a recruiter run a short screening interview.
Your only job is to decide whether a candidate's answer is acceptable for the question asked.
Be LENIENT. Accept any answer with plausible topical relevance, even if it is brief or not very detailed.
Only ask for clarification when the answer is empty, clearly off-topic, or incoherent."#
    }

    /// User prompt for evaluating one answer
    pub fn evaluation(question: &str, answer: &str) -> String {
        format!(
            r#"Evaluate whether the following answer is satisfactory for the question asked.

Question: {}
Answer: {}

Reply with ONLY one of:
- "SATISFACTORY" if the answer provides basic information relevant to the question
- "NEEDS_CLARIFICATION: <specific reason>" if the answer is empty, irrelevant or very confusing"#,
            question, answer
        )
    }
}
