//! Session store.
//!
//! Keeps one [`ConversationEngine`] per concurrent conversation and evicts
//! sessions that have been idle longer than the configured TTL.

use crate::use_cases::conversation_engine::{ConversationEngine, EnginePorts};
use interview_domain::InterviewId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Shared handle to one session's engine.
///
/// The async mutex serializes answers within the session; different sessions
/// never contend on it.
pub type SessionHandle = Arc<tokio::sync::Mutex<ConversationEngine>>;

struct SessionEntry {
    engine: SessionHandle,
    last_activity: Instant,
}

/// Concurrent map of session key to conversation engine
pub struct SessionStore {
    ports: EnginePorts,
    ttl: Option<Duration>,
    sessions: Mutex<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    /// `ttl = None` keeps idle sessions forever.
    pub fn new(ports: EnginePorts, ttl: Option<Duration>) -> Self {
        Self {
            ports,
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    // The map is only held for short, non-async sections, so a poisoned lock
    // still contains consistent data.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionEntry>> {
        self.sessions.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Return the session for `key`, creating a fresh (not yet started)
    /// engine for `interview_id` if none exists.
    pub fn open(&self, key: &str, interview_id: Option<InterviewId>) -> SessionHandle {
        self.open_for(key, interview_id, None)
    }

    /// Like [`open`](Self::open), labelling a newly created session with the
    /// candidate's name or id. An existing session keeps its label.
    pub fn open_for(
        &self,
        key: &str,
        interview_id: Option<InterviewId>,
        candidate: Option<String>,
    ) -> SessionHandle {
        let mut sessions = self.lock();
        let entry = sessions.entry(key.to_string()).or_insert_with(|| {
            info!(
                "Opening session {} for interview {}",
                key,
                interview_id.as_ref().map(InterviewId::as_str).unwrap_or("<default>")
            );
            let engine =
                ConversationEngine::new(interview_id, self.ports.clone()).with_candidate(candidate);
            SessionEntry {
                engine: Arc::new(tokio::sync::Mutex::new(engine)),
                last_activity: Instant::now(),
            }
        });
        entry.last_activity = Instant::now();
        Arc::clone(&entry.engine)
    }

    /// Look up an existing session and refresh its activity time.
    pub fn get(&self, key: &str) -> Option<SessionHandle> {
        let mut sessions = self.lock();
        sessions.get_mut(key).map(|entry| {
            entry.last_activity = Instant::now();
            Arc::clone(&entry.engine)
        })
    }

    /// Drop a session. Returns whether it existed.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.lock().remove(key).is_some();
        if removed {
            debug!("Removed session {}", key);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Remove every session idle for at least the TTL. Returns how many
    /// were evicted.
    pub fn evict_expired(&self) -> usize {
        let Some(ttl) = self.ttl else {
            return 0;
        };

        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|key, entry| {
            let keep = entry.last_activity.elapsed() < ttl;
            if !keep {
                debug!("Evicting idle session {}", key);
            }
            keep
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!("Evicted {} idle session(s)", evicted);
        }
        evicted
    }

    /// Run [`SessionStore::evict_expired`] every `period` in the background.
    ///
    /// Returns `None` when eviction is disabled.
    pub fn spawn_reaper(self: &Arc<Self>, period: Duration) -> Option<JoinHandle<()>> {
        self.ttl?;
        let store = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            loop {
                ticker.tick().await;
                store.evict_expired();
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notification_sink::NoNotification;
    use crate::ports::question_source::QuestionSource;
    use crate::ports::response_store::{ResponseStore, StoreError};
    use crate::use_cases::evaluate_answer::AnswerEvaluator;
    use async_trait::async_trait;
    use interview_domain::{AnswerSheet, LengthHeuristic};

    struct OneQuestion;

    #[async_trait]
    impl QuestionSource for OneQuestion {
        async fn load(&self, interview_id: Option<&InterviewId>) -> Vec<String> {
            match interview_id {
                Some(id) => vec![format!("Why {}?", id)],
                None => vec!["Name?".to_string()],
            }
        }
    }

    struct NullStore;

    #[async_trait]
    impl ResponseStore for NullStore {
        async fn save(
            &self,
            _interview_id: Option<&InterviewId>,
            _candidate: Option<&str>,
            _answers: &AnswerSheet,
        ) -> Result<(), StoreError> {
            Ok(())
        }

        async fn load(
            &self,
            _interview_id: Option<&InterviewId>,
        ) -> Result<Option<AnswerSheet>, StoreError> {
            Ok(None)
        }
    }

    fn ports() -> EnginePorts {
        EnginePorts::new(
            Arc::new(OneQuestion),
            AnswerEvaluator::heuristic_only(LengthHeuristic::default()),
            Arc::new(NullStore),
            Arc::new(NoNotification),
        )
    }

    #[tokio::test]
    async fn test_open_reuses_existing_session() {
        let store = SessionStore::new(ports(), None);
        let first = store.open("chat-1", None);
        let second = store.open("chat-1", None);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_open_for_labels_only_new_sessions() {
        let store = SessionStore::new(ports(), None);
        let first = store.open_for("chat-1", None, Some("Ana".to_string()));
        let again = store.open_for("chat-1", None, Some("Luis".to_string()));

        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(first.lock().await.candidate(), Some("Ana"));
        assert_eq!(store.open("chat-2", None).lock().await.candidate(), None);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new(ports(), None);
        let a = store.open("a", Some(InterviewId::new("offer-a").unwrap()));
        let b = store.open("b", None);

        a.lock().await.start().await.unwrap();
        b.lock().await.start().await.unwrap();
        a.lock().await.submit_answer("because I like it").await.unwrap();

        assert!(a.lock().await.is_complete());
        assert!(!b.lock().await.is_complete());
        assert_eq!(
            a.lock().await.state().questions(),
            &["Why offer-a?".to_string()]
        );
    }

    #[tokio::test]
    async fn test_zero_ttl_evicts_everything() {
        let store = SessionStore::new(ports(), Some(Duration::ZERO));
        store.open("a", None);
        store.open("b", None);
        assert_eq!(store.evict_expired(), 2);
        assert!(store.is_empty());
        assert!(store.get("a").is_none());
    }

    #[tokio::test]
    async fn test_without_ttl_nothing_is_evicted() {
        let store = Arc::new(SessionStore::new(ports(), None));
        store.open("a", None);
        assert_eq!(store.evict_expired(), 0);
        assert_eq!(store.len(), 1);
        assert!(store.spawn_reaper(Duration::from_millis(10)).is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let store = SessionStore::new(ports(), Some(Duration::from_secs(60)));
        store.open("a", None);
        assert!(store.remove("a"));
        assert!(!store.remove("a"));
        assert_eq!(store.evict_expired(), 0);
    }
}
