//! CLI entrypoint for Interview Bot
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use interview_application::{
    AnswerEvaluator, AnswerJudge, ConversationLogger, EnginePorts, InterviewProgressNotifier,
    NoNotification, NoProgress, NotificationSink, ResponseStore, SessionStore,
};
use interview_domain::{CandidateProfile, InterviewId};
use interview_infrastructure::{
    ConfigLoader, FileConfig, FileQuestionSource, InMemoryResponseStore, JsonFileResponseStore,
    JsonlTranscriptLogger, JudgeEndpoint, LogNotificationSink, NotificationKind,
    OpenAiCompatibleJudge, StorageBackend, WebhookNotificationSink,
};
use interview_presentation::{Cli, ConsoleFormatter, EvaluationSpinner, InterviewRepl, OutputFormat};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// The CLI drives a single conversation.
const CLI_SESSION_KEY: &str = "cli";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Pick up GROQ_API_KEY and friends from .env before anything reads them
    let dotenv = dotenvy::dotenv();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        let config = load_config(&cli)?;
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    let config = load_config(&cli)?;
    config.validate().context("Invalid configuration")?;

    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_file.as_deref())?;

    match dotenv {
        Ok(path) => info!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => warn!("Could not read .env: {}", e),
    }

    info!("Starting Interview Bot");

    let question_source = Arc::new(FileQuestionSource::new(&config.questions.dir));

    if cli.list_questions {
        let sets = question_source.list_available().await;
        if sets.is_empty() {
            println!(
                "No question files in {}; the built-in questions will be used.",
                question_source.dir().display()
            );
        }
        for set in sets {
            let label = set.interview_id.as_deref().unwrap_or("(default)");
            println!(
                "{:<24} {:>3} questions  {}",
                label, set.question_count, set.file_name
            );
        }
        return Ok(());
    }

    if cli.history_stats {
        return print_history_stats(&config).await;
    }

    let (interview_id, candidate) = resolve_candidate(&cli)?;

    // === Dependency Injection ===
    let behavior = config.behavior();
    let judge = build_judge(&cli, &config);
    let evaluator = AnswerEvaluator::from_behavior(judge, &behavior);

    let mut ports = EnginePorts::new(
        question_source,
        evaluator,
        build_response_store(&config),
        build_notification_sink(&config)?,
    );

    if let Some(path) = &config.logging.transcript_file
        && let Some(logger) = JsonlTranscriptLogger::open(path)
    {
        info!("Writing transcripts to {}", logger.path().display());
        ports = ports.with_conversation_logger(Arc::new(logger) as Arc<dyn ConversationLogger>);
    }

    let progress: Arc<dyn InterviewProgressNotifier> = if cli.quiet {
        Arc::new(NoProgress)
    } else {
        Arc::new(EvaluationSpinner::new())
    };
    ports = ports.with_progress(progress);

    let sessions = Arc::new(SessionStore::new(ports, behavior.session_ttl));
    let _reaper = sessions.spawn_reaper(Duration::from_secs(config.sessions.reap_interval_seconds));

    let session = sessions.open_for(CLI_SESSION_KEY, interview_id, candidate);
    let history_file = dirs::data_dir().map(|p| p.join("interview-bot").join("history.txt"));

    let summary = InterviewRepl::new(Arc::clone(&session))
        .with_history_file(history_file)
        .run()
        .await?;

    let output = match cli.output {
        OutputFormat::Text => {
            let engine = session.lock().await;
            ConsoleFormatter::summary(&summary, engine.state().questions())
        }
        OutputFormat::Json => ConsoleFormatter::summary_json(&summary),
    };
    println!("{}", output);

    sessions.remove(CLI_SESSION_KEY);
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Initialize logging based on verbosity level.
///
/// With a log file, output goes through a non-blocking writer so it never
/// interleaves with the REPL; the returned guard flushes it on exit.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Cannot create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Interview id and candidate label from `--job-offer` or `--candidate`.
fn resolve_candidate(cli: &Cli) -> Result<(Option<InterviewId>, Option<String>)> {
    if let Some(raw) = &cli.job_offer {
        return Ok((Some(InterviewId::new(raw.as_str())?), None));
    }
    if let Some(payload) = &cli.candidate {
        let profile =
            CandidateProfile::from_json(payload).context("Invalid --candidate payload")?;
        let label = profile.label();
        if let Some(label) = &label {
            info!("Interviewing {}", label);
        }
        return Ok((profile.interview_id()?, label));
    }
    Ok((None, None))
}

async fn print_history_stats(config: &FileConfig) -> Result<()> {
    let store = JsonFileResponseStore::new(&config.storage.dir);
    let Some(stats) = store.statistics().await? else {
        println!("No history at {}", store.history_path().display());
        return Ok(());
    };

    println!("History file:      {}", store.history_path().display());
    println!("Entries:           {}", stats.total_entries);
    println!("Unique candidates: {}", stats.unique_candidates);
    println!("Unique interviews: {}", stats.unique_interviews);
    println!(
        "First entry:       {}",
        stats.first_entry.as_deref().unwrap_or("-")
    );
    println!(
        "Last entry:        {}",
        stats.last_entry.as_deref().unwrap_or("-")
    );
    println!(
        "File size:         {:.2} KB",
        stats.file_size_bytes as f64 / 1024.0
    );
    Ok(())
}

/// Build the judge, or `None` for heuristic-only mode.
///
/// A missing API key is reported once here; the engine then runs on the
/// fallback heuristic.
fn build_judge(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn AnswerJudge>> {
    if cli.heuristic_only || !config.judge.enabled {
        info!("Judge disabled, answers are checked with the length heuristic");
        return None;
    }

    let endpoint = JudgeEndpoint {
        base_url: config.judge.base_url.clone(),
        model: config.judge.model.clone(),
        temperature: config.judge.temperature,
        max_tokens: config.judge.max_tokens,
        timeout: Duration::from_secs(config.judge.timeout_seconds),
    };

    match OpenAiCompatibleJudge::from_env(endpoint, &config.judge.api_key_env) {
        Ok(judge) => {
            info!("Using judge {} at {}", judge.name(), config.judge.base_url);
            Some(Arc::new(judge))
        }
        Err(e) => {
            warn!("{}; running with the fallback heuristic only", e);
            None
        }
    }
}

fn build_response_store(config: &FileConfig) -> Arc<dyn ResponseStore> {
    match config.storage.backend {
        StorageBackend::Json => Arc::new(
            JsonFileResponseStore::new(&config.storage.dir).with_history(config.storage.history),
        ),
        StorageBackend::Memory => Arc::new(InMemoryResponseStore::new()),
    }
}

fn build_notification_sink(config: &FileConfig) -> Result<Arc<dyn NotificationSink>> {
    let sink: Arc<dyn NotificationSink> = match config.notification.sink {
        NotificationKind::Log => Arc::new(LogNotificationSink),
        NotificationKind::None => Arc::new(NoNotification),
        NotificationKind::Webhook => {
            let url = config.notification.webhook_url.clone().unwrap_or_default();
            let timeout = Duration::from_secs(config.notification.timeout_seconds);
            Arc::new(WebhookNotificationSink::new(url, timeout)?)
        }
    };
    Ok(sink)
}
