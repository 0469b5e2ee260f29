//! Conversation engine use case.
//!
//! Drives one interview: loads the questions, evaluates each answer, asks
//! for clarification or advances, and finalizes (persist + notify) after the
//! last accepted answer.
//!
//! # Decision policy
//!
//! On every [`ConversationEngine::submit_answer`], in order:
//!
//! 1. Reject the call if the interview is complete or not started.
//! 2. Evaluate the answer against the current question.
//! 3. `NeedsClarification(reason)`: remember the reason, restate it with the
//!    question, keep the index.
//! 4. `Accepted`: clear the clarification, record and persist the answer
//!    (best-effort), advance. After the last question: notify (best-effort)
//!    and complete with wording that reflects whether both side-effects
//!    succeeded.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::notification_sink::NotificationSink;
use crate::ports::progress::{InterviewProgressNotifier, NoProgress};
use crate::ports::question_source::QuestionSource;
use crate::ports::response_store::ResponseStore;
use crate::use_cases::evaluate_answer::AnswerEvaluator;
use interview_domain::core::string::preview;
use interview_domain::{
    Advance, AgentMessage, DomainError, InterviewId, InterviewPhase, InterviewState,
    InterviewSummary, Verdict,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by the conversation engine.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl EngineError {
    /// `submit_answer` was called before `start()` or after completion.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EngineError::Domain(e) if e.is_invalid_state())
    }
}

/// The collaborators an engine talks to.
///
/// Cheap to clone; the session store keeps one and hands copies to every
/// engine it creates.
#[derive(Clone)]
pub struct EnginePorts {
    pub question_source: Arc<dyn QuestionSource>,
    pub evaluator: AnswerEvaluator,
    pub response_store: Arc<dyn ResponseStore>,
    pub notification_sink: Arc<dyn NotificationSink>,
    pub conversation_logger: Arc<dyn ConversationLogger>,
    pub progress: Arc<dyn InterviewProgressNotifier>,
}

impl EnginePorts {
    pub fn new(
        question_source: Arc<dyn QuestionSource>,
        evaluator: AnswerEvaluator,
        response_store: Arc<dyn ResponseStore>,
        notification_sink: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            question_source,
            evaluator,
            response_store,
            notification_sink,
            conversation_logger: Arc::new(NoConversationLogger),
            progress: Arc::new(NoProgress),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Create with a progress notifier.
    pub fn with_progress(mut self, progress: Arc<dyn InterviewProgressNotifier>) -> Self {
        self.progress = progress;
        self
    }
}

/// Owns one [`InterviewState`] and applies the decision policy to it.
///
/// Every mutator takes `&mut self`, so answers for one interview are
/// processed strictly one after another.
pub struct ConversationEngine {
    state: InterviewState,
    ports: EnginePorts,
    candidate: Option<String>,
    last_save_ok: bool,
}

impl ConversationEngine {
    pub fn new(interview_id: Option<InterviewId>, ports: EnginePorts) -> Self {
        Self {
            state: InterviewState::new(interview_id),
            ports,
            candidate: None,
            last_save_ok: true,
        }
    }

    /// Label saved answers with the candidate's name or id.
    pub fn with_candidate(mut self, candidate: Option<String>) -> Self {
        self.candidate = candidate;
        self
    }

    pub fn candidate(&self) -> Option<&str> {
        self.candidate.as_deref()
    }

    pub fn state(&self) -> &InterviewState {
        &self.state
    }

    pub fn interview_id(&self) -> Option<&InterviewId> {
        self.state.interview_id()
    }

    pub fn phase(&self) -> InterviewPhase {
        self.state.phase()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn summary(&self) -> InterviewSummary {
        self.state.summary()
    }

    /// Discard the current state and go back to `Uninitialized`.
    pub fn reset(&mut self) {
        let interview_id = self.state.interview_id().cloned();
        self.state = InterviewState::new(interview_id);
        self.last_save_ok = true;
        self.log_event("interview_reset", json!({}));
    }

    /// Load the questions and greet the candidate.
    ///
    /// On an engine that was already started this resets the state first and
    /// starts over.
    pub async fn start(&mut self) -> Result<AgentMessage, EngineError> {
        if self.state.phase() != InterviewPhase::Uninitialized {
            info!(
                "Restarting interview {} from phase {}",
                self.describe_id(),
                self.state.phase()
            );
            self.reset();
        }

        let questions = self
            .ports
            .question_source
            .load(self.state.interview_id())
            .await;

        if questions.is_empty() {
            warn!(
                "No questions available for interview {}, greeting only",
                self.describe_id()
            );
        } else {
            info!(
                "Starting interview {} with {} questions",
                self.describe_id(),
                questions.len()
            );
        }

        let from = self.state.phase();
        let message = self.state.begin(questions)?;
        self.notify_phase(from);

        self.log_event(
            "interview_started",
            json!({ "total_questions": self.state.questions().len() }),
        );
        self.log_agent_message(&message);
        Ok(message)
    }

    /// Process one candidate answer and return the agent's reply.
    pub async fn submit_answer(&mut self, text: &str) -> Result<AgentMessage, EngineError> {
        let phase = self.state.phase();
        if !phase.accepts_answers() {
            return Err(DomainError::invalid_state("submit an answer", phase).into());
        }

        self.state.record_candidate_message(text);
        self.log_event("candidate_message", json!({ "text": text }));

        if !self.state.has_questions() {
            debug!("Answer received but there is no question to evaluate it against");
            let message = self.state.reply_nothing_to_evaluate();
            self.log_agent_message(&message);
            return Ok(message);
        }

        let question = self.state.start_evaluation()?;
        self.notify_phase(phase);
        self.ports.progress.on_evaluation_start(&question);

        let evaluation = self.ports.evaluator.evaluate(&question, text).await;
        self.ports.progress.on_evaluation_complete(&evaluation);
        self.log_event(
            "verdict",
            json!({
                "question": question,
                "verdict": evaluation.verdict,
                "source": evaluation.source,
            }),
        );

        let message = match evaluation.verdict {
            Verdict::NeedsClarification(reason) => {
                info!(
                    "Answer to '{}' needs clarification: {}",
                    preview(&question, 60),
                    reason
                );
                let message = self.state.reject_answer(&reason)?;
                self.notify_phase(InterviewPhase::Evaluating);
                message
            }
            Verdict::Accepted => {
                info!("Answer accepted for '{}'", preview(&question, 60));
                let advance = self.state.accept_answer(text)?;
                self.notify_phase(InterviewPhase::Evaluating);
                self.persist_answers().await;

                match advance {
                    Advance::NextQuestion(message) => message,
                    Advance::Finalize => self.finalize().await?,
                }
            }
        };

        self.log_agent_message(&message);
        Ok(message)
    }

    /// Save the current answer sheet. Failures are logged and remembered for
    /// the closing wording, never propagated.
    async fn persist_answers(&mut self) {
        let result = self
            .ports
            .response_store
            .save(
                self.state.interview_id(),
                self.candidate.as_deref(),
                self.state.answers(),
            )
            .await;

        match result {
            Ok(()) => {
                debug!(
                    "Saved {} answers for interview {}",
                    self.state.answers().len(),
                    self.describe_id()
                );
                self.last_save_ok = true;
            }
            Err(e) => {
                warn!(
                    "Could not persist answers for interview {}: {}",
                    self.describe_id(),
                    e
                );
                self.last_save_ok = false;
            }
        }
    }

    async fn finalize(&mut self) -> Result<AgentMessage, EngineError> {
        info!("Finalizing interview {}", self.describe_id());

        let report = self.state.report(chrono::Utc::now());
        let notified = match self.ports.notification_sink.notify(&report).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Could not send interview summary for {}: {}",
                    self.describe_id(),
                    e
                );
                false
            }
        };

        let persisted = self.last_save_ok;
        self.ports.progress.on_finalized(persisted, notified);

        let message = self.state.complete(persisted && notified)?;
        self.notify_phase(InterviewPhase::Finalizing);

        self.log_event(
            "interview_completed",
            json!({
                "answers": self.state.answers(),
                "persisted": persisted,
                "notified": notified,
            }),
        );
        Ok(message)
    }

    fn notify_phase(&self, from: InterviewPhase) {
        let to = self.state.phase();
        if from != to {
            self.ports.progress.on_phase_change(from, to);
        }
    }

    fn describe_id(&self) -> String {
        self.state
            .interview_id()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "<default>".to_string())
    }

    fn log_event(&self, event_type: &'static str, payload: serde_json::Value) {
        self.ports.conversation_logger.log(ConversationEvent::new(
            event_type,
            self.state.interview_id(),
            payload,
        ));
    }

    fn log_agent_message(&self, message: &AgentMessage) {
        self.log_event(
            "agent_message",
            json!({ "kind": message.kind, "text": message.text }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_judge::{AnswerJudge, JudgeError};
    use crate::ports::notification_sink::NotificationError;
    use crate::ports::response_store::StoreError;
    use async_trait::async_trait;
    use interview_domain::{
        AgentMessageKind, AnswerSheet, InterviewReport, LengthHeuristic, Speaker, wording,
    };
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    // ==================== Test doubles ====================

    struct FixedQuestions(Vec<String>);

    impl FixedQuestions {
        fn of(questions: &[&str]) -> Arc<Self> {
            Arc::new(Self(questions.iter().map(|q| q.to_string()).collect()))
        }
    }

    #[async_trait]
    impl QuestionSource for FixedQuestions {
        async fn load(&self, _interview_id: Option<&InterviewId>) -> Vec<String> {
            self.0.clone()
        }
    }

    /// Judge replying from a script; errors once the script runs out.
    struct ScriptedJudge {
        replies: Mutex<VecDeque<&'static str>>,
    }

    impl ScriptedJudge {
        fn new(replies: &[&'static str]) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.iter().copied().collect()),
            })
        }
    }

    #[async_trait]
    impl AnswerJudge for ScriptedJudge {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn judge(&self, _system: &str, _prompt: &str) -> Result<String, JudgeError> {
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .map(str::to_string)
                .ok_or_else(|| JudgeError::RequestFailed("script exhausted".to_string()))
        }
    }

    struct ThrowingJudge;

    #[async_trait]
    impl AnswerJudge for ThrowingJudge {
        fn name(&self) -> &str {
            "throwing"
        }

        async fn judge(&self, _system: &str, _prompt: &str) -> Result<String, JudgeError> {
            Err(JudgeError::AuthenticationFailed("bad key".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingStore {
        saves: Mutex<Vec<AnswerSheet>>,
        candidates: Mutex<Vec<Option<String>>>,
        fail: AtomicBool,
    }

    #[async_trait]
    impl ResponseStore for RecordingStore {
        async fn save(
            &self,
            _interview_id: Option<&InterviewId>,
            candidate: Option<&str>,
            answers: &AnswerSheet,
        ) -> Result<(), StoreError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(StoreError::Unavailable("disk full".to_string()));
            }
            self.saves.lock().unwrap().push(answers.clone());
            self.candidates
                .lock()
                .unwrap()
                .push(candidate.map(str::to_string));
            Ok(())
        }

        async fn load(
            &self,
            _interview_id: Option<&InterviewId>,
        ) -> Result<Option<AnswerSheet>, StoreError> {
            Ok(self.saves.lock().unwrap().last().cloned())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: AtomicUsize,
        last: Mutex<Option<InterviewReport>>,
        fail: AtomicBool,
    }

    #[async_trait]
    impl NotificationSink for RecordingSink {
        async fn notify(&self, report: &InterviewReport) -> Result<(), NotificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(report.clone());
            if self.fail.load(Ordering::SeqCst) {
                return Err(NotificationError::DeliveryFailed("smtp down".to_string()));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct PhaseRecorder {
        transitions: Mutex<Vec<(InterviewPhase, InterviewPhase)>>,
    }

    impl InterviewProgressNotifier for PhaseRecorder {
        fn on_phase_change(&self, from: InterviewPhase, to: InterviewPhase) {
            self.transitions.lock().unwrap().push((from, to));
        }
    }

    struct Harness {
        engine: ConversationEngine,
        store: Arc<RecordingStore>,
        sink: Arc<RecordingSink>,
    }

    fn harness(questions: &[&str], evaluator: AnswerEvaluator) -> Harness {
        let store = Arc::new(RecordingStore::default());
        let sink = Arc::new(RecordingSink::default());
        let ports = EnginePorts::new(
            FixedQuestions::of(questions),
            evaluator,
            store.clone(),
            sink.clone(),
        );
        Harness {
            engine: ConversationEngine::new(None, ports),
            store,
            sink,
        }
    }

    fn heuristic_only() -> AnswerEvaluator {
        AnswerEvaluator::heuristic_only(LengthHeuristic::default())
    }

    fn judged_by(judge: Arc<dyn AnswerJudge>) -> AnswerEvaluator {
        AnswerEvaluator::with_judge(judge, LengthHeuristic::default(), Duration::from_secs(1))
    }

    // ==================== Lifecycle ====================

    #[tokio::test]
    async fn test_submit_before_start_is_invalid_state() {
        let mut h = harness(&["Name?"], heuristic_only());
        let err = h.engine.submit_answer("Juan Pérez").await.unwrap_err();
        assert!(err.is_invalid_state());
        assert!(h.engine.state().transcript().is_empty());
    }

    #[tokio::test]
    async fn test_start_greets_with_first_question() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        let message = h.engine.start().await.unwrap();

        assert_eq!(message.kind, AgentMessageKind::Greeting);
        assert!(message.text.ends_with("Name?"));
        assert_eq!(h.engine.phase(), InterviewPhase::AwaitingAnswer);
        assert_eq!(h.engine.state().current_index(), 0);
        assert_eq!(h.engine.state().transcript().len(), 1);
    }

    #[tokio::test]
    async fn test_start_twice_resets_explicitly() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Juan Pérez").await.unwrap();
        assert_eq!(h.engine.summary().questions_asked, 1);

        h.engine.start().await.unwrap();
        let summary = h.engine.summary();
        assert_eq!(summary.questions_asked, 0);
        assert_eq!(summary.message_count, 1);
        assert_eq!(h.engine.state().current_index(), 0);
    }

    #[tokio::test]
    async fn test_reset_returns_to_uninitialized() {
        let mut h = harness(&["Name?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.reset();
        assert_eq!(h.engine.phase(), InterviewPhase::Uninitialized);
        assert!(h.engine.submit_answer("hello there").await.unwrap_err().is_invalid_state());
    }

    #[tokio::test]
    async fn test_empty_question_source_degrades_gracefully() {
        let mut h = harness(&[], heuristic_only());
        let greeting = h.engine.start().await.unwrap();
        assert_eq!(greeting.text, wording::GENERIC_GREETING);
        assert!(!h.engine.is_complete());

        let reply = h.engine.submit_answer("anything at all").await.unwrap();
        assert_eq!(reply.kind, AgentMessageKind::Notice);
        assert!(!h.engine.is_complete());
        assert_eq!(h.engine.summary().questions_asked, 0);
        assert!(h.store.saves.lock().unwrap().is_empty());
        assert_eq!(h.sink.calls.load(Ordering::SeqCst), 0);
    }

    // ==================== Decision policy ====================

    #[tokio::test]
    async fn test_n_accepted_answers_complete_the_interview() {
        for n in 1..=5 {
            let questions: Vec<String> = (0..n).map(|i| format!("Question {}?", i)).collect();
            let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
            let mut h = harness(&refs, heuristic_only());
            h.engine.start().await.unwrap();

            for i in 0..n {
                assert!(!h.engine.is_complete());
                assert_eq!(h.engine.state().current_index(), i);
                h.engine.submit_answer("a perfectly fine answer").await.unwrap();
            }

            assert!(h.engine.is_complete());
            assert_eq!(h.engine.state().current_index(), n);
            assert_eq!(h.sink.calls.load(Ordering::SeqCst), 1);
        }
    }

    #[tokio::test]
    async fn test_clarification_never_advances_or_records() {
        let judge = ScriptedJudge::new(&[
            "NEEDS_CLARIFICATION: off-topic",
            "NEEDS_CLARIFICATION: still off-topic",
        ]);
        let mut h = harness(&["Name?", "Skills?"], judged_by(judge));
        h.engine.start().await.unwrap();

        for _ in 0..2 {
            let reply = h.engine.submit_answer("I like turtles").await.unwrap();
            assert_eq!(reply.kind, AgentMessageKind::Clarification);
            assert!(reply.text.contains("Name?"));
            assert_eq!(h.engine.state().current_index(), 0);
            assert!(h.engine.state().answers().is_empty());
            assert_eq!(h.engine.phase(), InterviewPhase::Clarifying);
        }
        assert!(h.store.saves.lock().unwrap().is_empty());
        assert_eq!(
            h.engine.state().pending_clarification().unwrap().reason,
            "still off-topic"
        );
    }

    #[tokio::test]
    async fn test_scenario_with_heuristic_fallback() {
        let mut h = harness(&["Name?", "Skills?"], judged_by(Arc::new(ThrowingJudge)));
        h.engine.start().await.unwrap();

        let reply = h.engine.submit_answer("Juan Pérez").await.unwrap();
        assert_eq!(reply.kind, AgentMessageKind::Question);
        assert!(reply.text.contains("Skills?"));

        let reply = h.engine.submit_answer("x").await.unwrap();
        assert_eq!(reply.kind, AgentMessageKind::Clarification);
        assert_eq!(h.engine.state().current_index(), 1);

        let reply = h.engine.submit_answer("Python, SQL").await.unwrap();
        assert!(reply.is_completion());
        assert_eq!(reply.text, wording::COMPLETION_SUCCESS);
        assert!(h.engine.is_complete());
        assert_eq!(h.sink.calls.load(Ordering::SeqCst), 1);

        let report = h.sink.last.lock().unwrap().clone().unwrap();
        assert_eq!(report.answers.get("Name?"), Some("Juan Pérez"));
        assert_eq!(report.answers.get("Skills?"), Some("Python, SQL"));
    }

    #[tokio::test]
    async fn test_whitespace_answer_needs_clarification_even_if_judge_accepts() {
        let judge = ScriptedJudge::new(&["SATISFACTORY", "SATISFACTORY"]);
        let mut h = harness(&["Name?"], judged_by(judge));
        h.engine.start().await.unwrap();

        let reply = h.engine.submit_answer("   ").await.unwrap();
        assert_eq!(reply.kind, AgentMessageKind::Clarification);
        assert!(!h.engine.is_complete());
    }

    #[tokio::test]
    async fn test_each_acceptance_persists_snapshot() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Juan Pérez").await.unwrap();
        h.engine.submit_answer("Python, SQL").await.unwrap();

        let saves = h.store.saves.lock().unwrap();
        assert_eq!(saves.len(), 2);
        assert_eq!(saves[0].len(), 1);
        assert_eq!(saves[1].len(), 2);
    }

    #[tokio::test]
    async fn test_candidate_label_reaches_store_across_restart() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        h.engine = h.engine.with_candidate(Some("Ana".to_string()));
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Ana López").await.unwrap();
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Ana López").await.unwrap();

        assert_eq!(h.engine.candidate(), Some("Ana"));
        let candidates = h.store.candidates.lock().unwrap();
        assert_eq!(
            *candidates,
            vec![Some("Ana".to_string()), Some("Ana".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_after_completion_is_invalid_state() {
        let mut h = harness(&["Name?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Juan Pérez").await.unwrap();
        assert!(h.engine.is_complete());

        let before = h.engine.summary();
        let err = h.engine.submit_answer("one more thing").await.unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(h.engine.summary(), before);
    }

    // ==================== Finalization wording ====================

    #[tokio::test]
    async fn test_notification_failure_does_not_block_completion() {
        let mut h = harness(&["Name?"], heuristic_only());
        h.sink.fail.store(true, Ordering::SeqCst);
        h.engine.start().await.unwrap();

        let reply = h.engine.submit_answer("Juan Pérez").await.unwrap();
        assert!(h.engine.is_complete());
        assert_eq!(reply.text, wording::COMPLETION_WITH_ISSUES);
        assert_eq!(h.sink.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_persistence_failure_is_not_fatal() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        h.store.fail.store(true, Ordering::SeqCst);
        h.engine.start().await.unwrap();

        h.engine.submit_answer("Juan Pérez").await.unwrap();
        assert_eq!(h.engine.state().current_index(), 1);

        let reply = h.engine.submit_answer("Python, SQL").await.unwrap();
        assert!(h.engine.is_complete());
        assert_eq!(reply.text, wording::COMPLETION_WITH_ISSUES);
    }

    // ==================== Projections ====================

    #[tokio::test]
    async fn test_summary_is_a_pure_projection() {
        let mut h = harness(&["Name?", "Skills?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Juan Pérez").await.unwrap();
        h.engine.submit_answer("x").await.unwrap();

        let first = h.engine.summary();
        let second = h.engine.summary();
        assert_eq!(first, second);
        assert_eq!(first.questions_asked, first.answers.len());
        assert_eq!(first.questions_asked, 1);
        assert_eq!(first.total_questions, 2);
        assert_eq!(first.message_count, 5);
        assert!(!first.complete);
    }

    #[tokio::test]
    async fn test_transcript_alternates_speakers() {
        let mut h = harness(&["Name?"], heuristic_only());
        h.engine.start().await.unwrap();
        h.engine.submit_answer("Juan Pérez").await.unwrap();

        let speakers: Vec<Speaker> = h
            .engine
            .state()
            .transcript()
            .iter()
            .map(|e| e.speaker)
            .collect();
        assert_eq!(speakers, vec![Speaker::Agent, Speaker::Candidate, Speaker::Agent]);
    }

    #[tokio::test]
    async fn test_phase_transitions_are_reported() {
        let recorder = Arc::new(PhaseRecorder::default());
        let ports = EnginePorts::new(
            FixedQuestions::of(&["Name?"]),
            heuristic_only(),
            Arc::new(RecordingStore::default()),
            Arc::new(RecordingSink::default()),
        )
        .with_progress(recorder.clone());
        let mut engine = ConversationEngine::new(None, ports);

        engine.start().await.unwrap();
        engine.submit_answer("x").await.unwrap();
        engine.submit_answer("Juan Pérez").await.unwrap();

        use InterviewPhase::*;
        assert_eq!(
            *recorder.transitions.lock().unwrap(),
            vec![
                (Uninitialized, AwaitingAnswer),
                (AwaitingAnswer, Evaluating),
                (Evaluating, Clarifying),
                (Clarifying, Evaluating),
                (Evaluating, Finalizing),
                (Finalizing, Complete),
            ]
        );
    }
}
