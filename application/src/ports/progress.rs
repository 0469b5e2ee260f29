//! Progress notification port
//!
//! Lets front ends show what the engine is doing while an answer is being
//! processed (e.g. a spinner during the judge call).

use interview_domain::{Evaluation, InterviewPhase};

/// Callback for progress updates during an interview
///
/// Implementations live in the presentation layer. Every method has a no-op
/// default.
pub trait InterviewProgressNotifier: Send + Sync {
    /// Called on every phase transition, including the transient
    /// `Evaluating` and `Finalizing` phases.
    fn on_phase_change(&self, _from: InterviewPhase, _to: InterviewPhase) {}

    /// Called right before an answer is evaluated.
    fn on_evaluation_start(&self, _question: &str) {}

    /// Called with the evaluation result.
    fn on_evaluation_complete(&self, _evaluation: &Evaluation) {}

    /// Called after finalization with the outcome of both side-effects.
    fn on_finalized(&self, _persisted: bool, _notified: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl InterviewProgressNotifier for NoProgress {}
