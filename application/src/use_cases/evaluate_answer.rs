//! Answer evaluation use case.
//!
//! Produces a [`Verdict`] for one candidate answer. The judge is tried first
//! under a bounded timeout; when it is absent, fails, or times out the
//! deterministic [`LengthHeuristic`] decides instead. Evaluation itself never
//! fails.

use crate::config::InterviewBehavior;
use crate::ports::answer_judge::AnswerJudge;
use interview_domain::core::string::preview;
use interview_domain::{
    Evaluation, JudgePrompt, LengthHeuristic, Verdict, VerdictSource, is_blank,
    parse_judge_response,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Evaluates answers with an optional judge and a fallback heuristic
#[derive(Clone)]
pub struct AnswerEvaluator {
    judge: Option<Arc<dyn AnswerJudge>>,
    heuristic: LengthHeuristic,
    timeout: Duration,
}

impl AnswerEvaluator {
    /// Evaluator that never calls a judge.
    pub fn heuristic_only(heuristic: LengthHeuristic) -> Self {
        Self {
            judge: None,
            heuristic,
            timeout: Duration::ZERO,
        }
    }

    pub fn with_judge(judge: Arc<dyn AnswerJudge>, heuristic: LengthHeuristic, timeout: Duration) -> Self {
        Self {
            judge: Some(judge),
            heuristic,
            timeout,
        }
    }

    /// Build from application behavior; `judge = None` means heuristic-only.
    pub fn from_behavior(judge: Option<Arc<dyn AnswerJudge>>, behavior: &InterviewBehavior) -> Self {
        Self {
            judge,
            heuristic: behavior.heuristic(),
            timeout: behavior.judge_timeout,
        }
    }

    pub fn has_judge(&self) -> bool {
        self.judge.is_some()
    }

    /// Evaluate `answer` against `question`.
    pub async fn evaluate(&self, question: &str, answer: &str) -> Evaluation {
        if is_blank(answer) {
            debug!("Blank answer, asking for clarification without judging");
            return Evaluation::new(Verdict::needs_clarification(""), VerdictSource::BlankAnswer);
        }

        let Some(judge) = &self.judge else {
            return self.fallback(answer);
        };

        let prompt = JudgePrompt::evaluation(question, answer);
        let call = judge.judge(JudgePrompt::system(), &prompt);

        match tokio::time::timeout(self.timeout, call).await {
            Ok(Ok(response)) => {
                debug!(
                    "Judge {} replied: {}",
                    judge.name(),
                    preview(&response, 120)
                );
                Evaluation::new(parse_judge_response(&response), VerdictSource::Judge)
            }
            Ok(Err(e)) => {
                warn!("Judge {} failed, using fallback heuristic: {}", judge.name(), e);
                self.fallback(answer)
            }
            Err(_) => {
                warn!(
                    "Judge {} timed out after {:?}, using fallback heuristic",
                    judge.name(),
                    self.timeout
                );
                self.fallback(answer)
            }
        }
    }

    fn fallback(&self, answer: &str) -> Evaluation {
        Evaluation::new(self.heuristic.evaluate(answer), VerdictSource::Heuristic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::answer_judge::JudgeError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedJudge {
        reply: &'static str,
        calls: AtomicUsize,
    }

    impl FixedJudge {
        fn new(reply: &'static str) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl AnswerJudge for FixedJudge {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn judge(&self, _system: &str, _prompt: &str) -> Result<String, JudgeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    struct ThrowingJudge;

    #[async_trait]
    impl AnswerJudge for ThrowingJudge {
        fn name(&self) -> &str {
            "throwing"
        }

        async fn judge(&self, _system: &str, _prompt: &str) -> Result<String, JudgeError> {
            Err(JudgeError::ConnectionError("unreachable".to_string()))
        }
    }

    struct SlowJudge;

    #[async_trait]
    impl AnswerJudge for SlowJudge {
        fn name(&self) -> &str {
            "slow"
        }

        async fn judge(&self, _system: &str, _prompt: &str) -> Result<String, JudgeError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok("NEEDS_CLARIFICATION: too slow to matter".to_string())
        }
    }

    fn with(judge: Arc<dyn AnswerJudge>) -> AnswerEvaluator {
        AnswerEvaluator::with_judge(judge, LengthHeuristic::default(), Duration::from_millis(50))
    }

    #[tokio::test]
    async fn test_judge_verdict_is_used() {
        let evaluator = with(Arc::new(FixedJudge::new("NEEDS_CLARIFICATION: off-topic")));
        let evaluation = evaluator.evaluate("Skills?", "I like turtles").await;
        assert_eq!(evaluation.source, VerdictSource::Judge);
        assert_eq!(evaluation.verdict, Verdict::NeedsClarification("off-topic".to_string()));
    }

    #[tokio::test]
    async fn test_unparseable_judge_reply_accepts() {
        let evaluator = with(Arc::new(FixedJudge::new("hmm, hard to say")));
        let evaluation = evaluator.evaluate("Skills?", "x").await;
        assert!(evaluation.verdict.is_accepted());
    }

    #[tokio::test]
    async fn test_blank_answer_skips_judge() {
        let judge = Arc::new(FixedJudge::new("SATISFACTORY"));
        let evaluator = with(judge.clone());
        let evaluation = evaluator.evaluate("Name?", "   \n").await;
        assert_eq!(evaluation.source, VerdictSource::BlankAnswer);
        assert!(!evaluation.verdict.is_accepted());
        assert_eq!(judge.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_throwing_judge_falls_back_deterministically() {
        let evaluator = with(Arc::new(ThrowingJudge));
        for answer in ["abcd", "Juan Pérez", "Python, SQL"] {
            let evaluation = evaluator.evaluate("Q?", answer).await;
            assert_eq!(evaluation.source, VerdictSource::Heuristic);
            assert!(evaluation.verdict.is_accepted(), "{answer} should be accepted");
        }
        for answer in ["x", "ab", "abc", " ab "] {
            let evaluation = evaluator.evaluate("Q?", answer).await;
            assert!(!evaluation.verdict.is_accepted(), "{answer} should be rejected");
        }
    }

    #[tokio::test]
    async fn test_timeout_falls_back() {
        let evaluator = with(Arc::new(SlowJudge));
        let evaluation = evaluator.evaluate("Q?", "a fine answer").await;
        assert_eq!(evaluation.source, VerdictSource::Heuristic);
        assert!(evaluation.verdict.is_accepted());
    }

    #[tokio::test]
    async fn test_heuristic_only() {
        let evaluator = AnswerEvaluator::heuristic_only(LengthHeuristic::default());
        assert!(!evaluator.has_judge());
        assert!(evaluator.evaluate("Q?", "long enough").await.verdict.is_accepted());
        assert!(!evaluator.evaluate("Q?", "no").await.verdict.is_accepted());
    }
}
