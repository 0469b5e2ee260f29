//! Interview state and its transitions

use super::answers::AnswerSheet;
use super::message::{AgentMessage, AgentMessageKind, wording};
use super::phase::InterviewPhase;
use super::summary::{InterviewReport, InterviewSummary};
use super::transcript::TranscriptEntry;
use crate::core::error::DomainError;
use crate::core::interview_id::InterviewId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why the last answer was rejected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClarificationRequest {
    pub reason: String,
}

/// Outcome of recording an accepted answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved on; the message carries the next question
    NextQuestion(AgentMessage),
    /// That was the last question; the interview must be finalized
    Finalize,
}

/// State of one interview (Entity)
///
/// All mutation goes through the methods below, which enforce the phase
/// transitions of [`InterviewPhase`] and the invariant
/// `current_index <= questions.len()`. The state does no I/O; loading
/// questions, judging, persistence and notification belong to the
/// conversation engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewState {
    interview_id: Option<InterviewId>,
    questions: Vec<String>,
    current_index: usize,
    answers: AnswerSheet,
    pending_clarification: Option<ClarificationRequest>,
    phase: InterviewPhase,
    transcript: Vec<TranscriptEntry>,
}

impl InterviewState {
    pub fn new(interview_id: Option<InterviewId>) -> Self {
        Self {
            interview_id,
            questions: Vec::new(),
            current_index: 0,
            answers: AnswerSheet::new(),
            pending_clarification: None,
            phase: InterviewPhase::Uninitialized,
            transcript: Vec::new(),
        }
    }

    // ==================== Accessors ====================

    pub fn interview_id(&self) -> Option<&InterviewId> {
        self.interview_id.as_ref()
    }

    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &AnswerSheet {
        &self.answers
    }

    pub fn pending_clarification(&self) -> Option<&ClarificationRequest> {
        self.pending_clarification.as_ref()
    }

    pub fn phase(&self) -> InterviewPhase {
        self.phase
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn is_complete(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn has_questions(&self) -> bool {
        !self.questions.is_empty()
    }

    /// The question currently waiting for an answer, if any
    pub fn current_question(&self) -> Option<&str> {
        if self.phase == InterviewPhase::Uninitialized || self.is_complete() {
            return None;
        }
        self.questions.get(self.current_index).map(String::as_str)
    }

    // ==================== Transitions ====================

    fn transition_to(&mut self, next: InterviewPhase) -> Result<(), DomainError> {
        if !self.phase.can_transition_to(next) {
            return Err(DomainError::IllegalTransition {
                from: self.phase,
                to: next,
            });
        }
        self.phase = next;
        Ok(())
    }

    fn push_agent(&mut self, kind: AgentMessageKind, text: impl Into<String>) -> AgentMessage {
        let message = AgentMessage::new(kind, text);
        self.transcript.push(TranscriptEntry::agent(message.text.clone()));
        message
    }

    /// Load the question list and greet the candidate.
    ///
    /// With no questions the state still moves to `AwaitingAnswer` but only a
    /// generic greeting is produced.
    pub fn begin(&mut self, questions: Vec<String>) -> Result<AgentMessage, DomainError> {
        if self.phase != InterviewPhase::Uninitialized {
            return Err(DomainError::invalid_state("start", self.phase));
        }
        self.transition_to(InterviewPhase::AwaitingAnswer)?;
        self.questions = questions;
        self.current_index = 0;

        let text = match self.questions.first() {
            Some(first) => wording::greeting(self.interview_id.as_ref(), first),
            None => wording::GENERIC_GREETING.to_string(),
        };
        Ok(self.push_agent(AgentMessageKind::Greeting, text))
    }

    /// Append the candidate's message to the transcript.
    pub fn record_candidate_message(&mut self, text: impl Into<String>) {
        self.transcript.push(TranscriptEntry::candidate(text));
    }

    /// Reply used when there is no question to evaluate the answer against.
    pub fn reply_nothing_to_evaluate(&mut self) -> AgentMessage {
        self.push_agent(AgentMessageKind::Notice, wording::NOTHING_TO_EVALUATE)
    }

    /// Enter `Evaluating` and return the question the answer belongs to.
    pub fn start_evaluation(&mut self) -> Result<String, DomainError> {
        if !self.phase.accepts_answers() {
            return Err(DomainError::invalid_state("evaluate an answer", self.phase));
        }
        let question = self
            .questions
            .get(self.current_index)
            .cloned()
            .ok_or(DomainError::invalid_state("evaluate an answer", self.phase))?;
        self.transition_to(InterviewPhase::Evaluating)?;
        Ok(question)
    }

    /// Keep the current question and ask the candidate to expand.
    pub fn reject_answer(&mut self, reason: &str) -> Result<AgentMessage, DomainError> {
        self.transition_to(InterviewPhase::Clarifying)?;
        self.pending_clarification = Some(ClarificationRequest {
            reason: reason.to_string(),
        });
        let question = self.questions[self.current_index].clone();
        Ok(self.push_agent(
            AgentMessageKind::Clarification,
            wording::clarification(reason, &question),
        ))
    }

    /// Record the answer for the current question and move forward.
    pub fn accept_answer(&mut self, answer: &str) -> Result<Advance, DomainError> {
        if self.phase != InterviewPhase::Evaluating {
            return Err(DomainError::invalid_state("accept an answer", self.phase));
        }
        self.pending_clarification = None;
        let question = self.questions[self.current_index].clone();
        self.answers.record(question, answer);
        self.current_index += 1;

        match self.questions.get(self.current_index).cloned() {
            Some(next) => {
                self.transition_to(InterviewPhase::AwaitingAnswer)?;
                Ok(Advance::NextQuestion(self.push_agent(
                    AgentMessageKind::Question,
                    wording::next_question(&next),
                )))
            }
            None => {
                self.transition_to(InterviewPhase::Finalizing)?;
                Ok(Advance::Finalize)
            }
        }
    }

    /// Mark the interview complete and produce the closing message.
    ///
    /// `finalized_cleanly` selects between the success wording and the
    /// "processed with technical issues" wording.
    pub fn complete(&mut self, finalized_cleanly: bool) -> Result<AgentMessage, DomainError> {
        self.transition_to(InterviewPhase::Complete)?;
        Ok(self.push_agent(
            AgentMessageKind::Completion,
            wording::completion(finalized_cleanly),
        ))
    }

    // ==================== Projections ====================

    pub fn summary(&self) -> InterviewSummary {
        InterviewSummary::new(
            self.answers.clone(),
            self.questions.len(),
            self.is_complete(),
            self.transcript.len(),
        )
    }

    pub fn report(&self, completed_at: DateTime<Utc>) -> InterviewReport {
        InterviewReport {
            interview_id: self.interview_id.clone(),
            questions: self.questions.clone(),
            answers: self.answers.clone(),
            completed_at,
        }
    }
}
