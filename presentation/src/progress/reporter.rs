//! Progress reporting while answers are evaluated

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use interview_application::InterviewProgressNotifier;
use interview_domain::{Evaluation, VerdictSource};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner while the judge is thinking
pub struct EvaluationSpinner {
    bar: Mutex<Option<ProgressBar>>,
}

impl EvaluationSpinner {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn take_bar(&self) -> Option<ProgressBar> {
        self.bar.lock().ok().and_then(|mut bar| bar.take())
    }
}

impl Default for EvaluationSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl InterviewProgressNotifier for EvaluationSpinner {
    fn on_evaluation_start(&self, _question: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Reviewing your answer...".dimmed().to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bar) = self.bar.lock()
            && let Some(previous) = bar.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_evaluation_complete(&self, evaluation: &Evaluation) {
        if let Some(pb) = self.take_bar() {
            pb.finish_and_clear();
        }
        if evaluation.source == VerdictSource::Heuristic {
            eprintln!(
                "{}",
                "(answer checked offline: the judge was unavailable)".dimmed()
            );
        }
    }

    fn on_finalized(&self, persisted: bool, notified: bool) {
        if let Some(pb) = self.take_bar() {
            pb.finish_and_clear();
        }
        if !persisted {
            eprintln!("{} answers could not be saved", "!".yellow());
        }
        if !notified {
            eprintln!("{} summary could not be sent", "!".yellow());
        }
    }
}
