//! Console output formatter for interview messages and summaries

use colored::Colorize;
use interview_domain::{AgentMessage, AgentMessageKind, InterviewSummary};

/// Formats interview output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format one agent reply, colored by kind
    pub fn agent_message(message: &AgentMessage) -> String {
        let label = match message.kind {
            AgentMessageKind::Greeting | AgentMessageKind::Question => "Agent:".cyan().bold(),
            AgentMessageKind::Clarification => "Agent:".yellow().bold(),
            AgentMessageKind::Completion => "Agent:".green().bold(),
            AgentMessageKind::Notice => "Agent:".dimmed(),
        };
        format!("{} {}", label, message.text)
    }

    /// Format the interview summary
    pub fn summary(summary: &InterviewSummary, questions: &[String]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Interview Summary"));
        output.push('\n');

        let status = if summary.complete {
            "complete".green().bold()
        } else {
            "in progress".yellow().bold()
        };
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));
        output.push_str(&format!(
            "{} {}/{} ({:.0}%)\n",
            "Answered:".cyan().bold(),
            summary.questions_asked,
            summary.total_questions,
            summary.progress_ratio() * 100.0
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Messages:".cyan().bold(),
            summary.message_count
        ));

        if !summary.answers.is_empty() {
            output.push_str(&format!("\n{}\n", "Answers".cyan().bold()));
            output.push_str(&"-".repeat(40));
            output.push('\n');
            for (question, answer) in summary.answers.in_question_order(questions) {
                output.push_str(&format!("{}\n", question.bold()));
                output.push_str(&Self::indent(answer, "  "));
                output.push('\n');
            }
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format the summary as JSON
    pub fn summary_json(summary: &InterviewSummary) -> String {
        serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_domain::AnswerSheet;

    fn summary() -> InterviewSummary {
        let mut answers = AnswerSheet::new();
        answers.record("Skills?", "Python\nSQL");
        answers.record("Name?", "Ana");
        InterviewSummary::new(answers, 3, false, 5)
    }

    #[test]
    fn test_summary_lists_answers_in_question_order() {
        colored::control::set_override(false);
        let questions = vec![
            "Name?".to_string(),
            "Skills?".to_string(),
            "Salary?".to_string(),
        ];
        let text = ConsoleFormatter::summary(&summary(), &questions);

        assert!(text.contains("Answered: 2/3 (67%)"));
        assert!(text.contains("in progress"));
        assert!(text.find("Name?").unwrap() < text.find("Skills?").unwrap());
        assert!(text.contains("  Python\n  SQL"));
        assert!(!text.contains("Salary?"));
    }

    #[test]
    fn test_summary_json_uses_domain_field_names() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::summary_json(&summary())).unwrap();
        assert_eq!(value["questions_asked"], 2);
        assert_eq!(value["total_questions"], 3);
        assert_eq!(value["complete"], false);
        assert_eq!(value["answers"]["Name?"], "Ana");
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
