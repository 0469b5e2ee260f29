//! REPL (Read-Eval-Print Loop) for an interactive interview

use crate::ConsoleFormatter;
use colored::Colorize;
use interview_application::SessionHandle;
use interview_domain::{InterviewSummary, wording};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::PathBuf;
use tracing::{error, warn};

const HISTORY_CAPACITY: usize = 500;

/// What the loop should do after a slash command
enum CommandResult {
    Continue,
    Exit,
}

/// REPL commands. Any other line, including one that starts with `/`, is an
/// answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    Help,
    Summary,
    Restart,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "/quit" | "/exit" | "/q" => Some(Command::Quit),
            "/help" | "/h" | "/?" => Some(Command::Help),
            "/summary" => Some(Command::Summary),
            "/restart" => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Interactive interview REPL
///
/// Reads candidate answers line by line and prints the agent's replies. The
/// loop ends when the interview completes, on `/quit`, or on Ctrl-D.
pub struct InterviewRepl {
    session: SessionHandle,
    history_file: Option<PathBuf>,
}

impl InterviewRepl {
    pub fn new(session: SessionHandle) -> Self {
        Self {
            session,
            history_file: None,
        }
    }

    /// Keep line-editor history in `path`.
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        self.history_file = path;
        self
    }

    fn line_editor(&self) -> Reedline {
        let editor = Reedline::create();
        let Some(path) = &self.history_file else {
            return editor;
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                warn!("Could not open history file {}: {}", path.display(), e);
                editor
            }
        }
    }

    /// Run the interview until it completes or the candidate leaves.
    ///
    /// Returns the summary at the point the loop ended.
    pub async fn run(&mut self) -> std::io::Result<InterviewSummary> {
        let mut line_editor = self.line_editor();
        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("you".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();
        if !self.start().await {
            return Ok(self.session.lock().await.summary());
        }

        loop {
            match line_editor.read_line(&prompt) {
                Ok(Signal::Success(line)) => {
                    if let Some(command) = Command::parse(&line) {
                        match self.handle_command(command).await {
                            CommandResult::Exit => break,
                            CommandResult::Continue => continue,
                        }
                    }

                    if self.process_answer(&line).await {
                        break;
                    }
                }
                Ok(Signal::CtrlC) => {
                    println!("^C");
                    continue;
                }
                Ok(Signal::CtrlD) => {
                    println!("Bye!");
                    break;
                }
                Ok(_) => continue,
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(self.session.lock().await.summary())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│           Interview Bot - Screening         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!(
            "Type your answers and press Enter. {} shows the commands.",
            "/help".cyan()
        );
        println!();
    }

    async fn start(&mut self) -> bool {
        let result = self.session.lock().await.start().await;
        match result {
            Ok(message) => {
                println!("{}", ConsoleFormatter::agent_message(&message));
                println!();
                true
            }
            Err(e) => {
                error!("Could not start the interview: {}", e);
                eprintln!("{}", wording::TRY_AGAIN.red());
                false
            }
        }
    }

    /// Send one answer to the engine. Returns true once the interview is
    /// complete.
    async fn process_answer(&mut self, answer: &str) -> bool {
        let mut engine = self.session.lock().await;
        match engine.submit_answer(answer).await {
            Ok(message) => {
                println!();
                println!("{}", ConsoleFormatter::agent_message(&message));
                println!();
                engine.is_complete()
            }
            Err(e) if e.is_invalid_state() => {
                warn!("Answer ignored: {}", e);
                println!(
                    "{}",
                    "The interview is over. Use /restart to begin again or /quit to leave."
                        .yellow()
                );
                engine.is_complete()
            }
            Err(e) => {
                error!("Answer could not be processed: {}", e);
                eprintln!("{}", wording::TRY_AGAIN.red());
                false
            }
        }
    }

    /// Handle slash commands.
    async fn handle_command(&mut self, command: Command) -> CommandResult {
        match command {
            Command::Quit => {
                println!("Bye!");
                CommandResult::Exit
            }
            Command::Help => {
                println!();
                println!("Commands:");
                println!("  {}    - Show this help", "/help".cyan());
                println!("  {} - Show the answers collected so far", "/summary".cyan());
                println!("  {} - Start the interview over", "/restart".cyan());
                println!("  {}    - Leave the interview", "/quit".cyan());
                println!();
                CommandResult::Continue
            }
            Command::Summary => {
                let engine = self.session.lock().await;
                println!();
                println!(
                    "{}",
                    ConsoleFormatter::summary(&engine.summary(), engine.state().questions())
                );
                CommandResult::Continue
            }
            Command::Restart => {
                println!();
                if self.start().await {
                    CommandResult::Continue
                } else {
                    CommandResult::Exit
                }
            }
        }
    }
}
