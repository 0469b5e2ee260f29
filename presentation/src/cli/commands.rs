//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How the final interview summary is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON summary (answers, counts, completion flag)
    Json,
}

/// CLI arguments for interview-bot
#[derive(Parser, Debug)]
#[command(name = "interview-bot")]
#[command(author, version, about = "Screening interview assistant - asks, judges, follows up")]
#[command(long_about = r#"
Interview Bot walks a candidate through a list of screening questions.

Every answer is judged by an LLM with a lenient rubric. Vague or off-topic
answers get a follow-up; accepted answers are saved and the next question is
asked. When the last question is answered the summary is sent to the
configured notification sink.

Questions are read from (in order):
1. <questions.dir>/questions_<job-offer>.json
2. <questions.dir>/questions.json
3. Built-in generic questions

Configuration files are loaded from (in priority order):
1. INTERVIEW_* environment variables (e.g. INTERVIEW_JUDGE__MODEL)
2. --config <path>     Explicit config file
3. ./interview.toml    Project-level config
4. ~/.config/interview-bot/config.toml   Global config

Example:
  interview-bot --job-offer 42
  interview-bot --candidate '{"name":"Ana","phone":"600000000","job_offer_id":"42"}'
  interview-bot --heuristic-only --output json
"#)]
pub struct Cli {
    /// Job offer id selecting the question set
    #[arg(short, long, value_name = "ID", conflicts_with = "candidate")]
    pub job_offer: Option<String>,

    /// Candidate identity as JSON ({"name", "phone", "job_offer_id"})
    #[arg(long, value_name = "JSON")]
    pub candidate: Option<String>,

    /// Never call the judge; use the length heuristic only
    #[arg(long)]
    pub heuristic_only: bool,

    /// List the available question files and exit
    #[arg(long)]
    pub list_questions: bool,

    /// Summarize the saved-answers history file and exit
    #[arg(long)]
    pub history_stats: bool,

    /// Format of the summary printed when the interview ends
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write diagnostics to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
