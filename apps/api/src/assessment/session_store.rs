//! Assessment Session State: ephemeral per-principal state for one assessment flow.
//!
//! Sessions live in memory only and are discarded on `end` or process restart.
//! Every mutation is confined to the entry keyed by its principal, and a write is
//! visible to the next read for the same principal.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::assessment::question_bank::Track;
use crate::assessment::submission::{InterviewResponse, TestTally};

/// Candidate-chosen parameters recorded at setup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub domain: String,
    pub role: String,
    pub difficulty: String,
}

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    pub session_id: Uuid,
    pub principal_id: String,
    pub selection: Option<Selection>,
    pub test_raw_scores: Option<TestTally>,
    pub interview_raw_responses: Option<Vec<InterviewResponse>>,
    pub started_at: DateTime<Utc>,
}

impl AssessmentSession {
    fn new(principal_id: &str) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            principal_id: principal_id.to_string(),
            selection: None,
            test_raw_scores: None,
            interview_raw_responses: None,
            started_at: Utc::now(),
        }
    }

    /// Track derived from the selected domain; IT when nothing is selected yet.
    pub fn track(&self) -> Track {
        self.selection
            .as_ref()
            .map(|s| Track::from_domain(&s.domain))
            .unwrap_or_default()
    }
}

/// Shared handle to all live sessions. Cheap to clone.
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, AssessmentSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session for the principal, replacing any existing one.
    pub async fn begin(&self, principal_id: &str) -> AssessmentSession {
        let session = AssessmentSession::new(principal_id);
        self.sessions
            .write()
            .await
            .insert(principal_id.to_string(), session.clone());
        info!(principal = principal_id, session_id = %session.session_id, "Session started");
        session
    }

    pub async fn set_selection(&self, principal_id: &str, selection: Selection) -> AssessmentSession {
        self.mutate(principal_id, |session| {
            session.selection = Some(selection);
            session.clone()
        })
        .await
    }

    /// Overwrites any earlier test submission. The tally is already validated.
    pub async fn record_test_submission(&self, principal_id: &str, tally: TestTally) {
        debug!(principal = principal_id, total = tally.total(), "Recording test submission");
        self.mutate(principal_id, |session| session.test_raw_scores = Some(tally))
            .await;
    }

    /// Overwrites any earlier interview submission. Any sequence is accepted, including empty.
    pub async fn record_interview_submission(
        &self,
        principal_id: &str,
        responses: Vec<InterviewResponse>,
    ) {
        debug!(
            principal = principal_id,
            responses = responses.len(),
            "Recording interview submission"
        );
        self.mutate(principal_id, |session| {
            session.interview_raw_responses = Some(responses)
        })
        .await;
    }

    /// Discards everything held for the principal.
    pub async fn end(&self, principal_id: &str) -> Option<AssessmentSession> {
        let removed = self.sessions.write().await.remove(principal_id);
        if removed.is_some() {
            info!(principal = principal_id, "Session ended");
        }
        removed
    }

    pub async fn snapshot(&self, principal_id: &str) -> Option<AssessmentSession> {
        self.sessions.read().await.get(principal_id).cloned()
    }

    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops sessions started more than `max_age` ago and returns how many went.
    /// Sessions are otherwise only removed by `end`, so without this the map keeps
    /// every principal that ever wrote.
    pub async fn sweep_expired(&self, max_age: Duration) -> usize {
        let cutoff = Utc::now() - max_age;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.started_at > cutoff);
        let swept = before - sessions.len();
        if swept > 0 {
            info!(swept, remaining = sessions.len(), "Expired sessions swept");
        }
        swept
    }

    /// Applies `f` under the write lock, creating the session first if `begin` was skipped.
    async fn mutate<F, R>(&self, principal_id: &str, f: F) -> R
    where
        F: FnOnce(&mut AssessmentSession) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(principal_id.to_string())
            .or_insert_with(|| AssessmentSession::new(principal_id));
        f(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::question_bank::Category;

    fn selection(domain: &str) -> Selection {
        Selection {
            domain: domain.to_string(),
            role: "Backend Engineer".to_string(),
            difficulty: "medium".to_string(),
        }
    }

    fn tally(verbal: u8) -> TestTally {
        TestTally::from_counts([(Category::Verbal, verbal)]).unwrap()
    }

    #[tokio::test]
    async fn test_begin_creates_empty_session() {
        let store = SessionStore::new();
        store.begin("alice").await;

        let session = store.snapshot("alice").await.unwrap();
        assert_eq!(session.principal_id, "alice");
        assert!(session.selection.is_none());
        assert!(session.test_raw_scores.is_none());
        assert!(session.interview_raw_responses.is_none());
        assert_eq!(store.active_sessions().await, 1);
    }

    #[tokio::test]
    async fn test_begin_resets_existing_session() {
        let store = SessionStore::new();
        let first = store.begin("alice").await;
        store.record_test_submission("alice", tally(5)).await;

        let second = store.begin("alice").await;
        assert_ne!(first.session_id, second.session_id);
        assert!(store.snapshot("alice").await.unwrap().test_raw_scores.is_none());
    }

    #[tokio::test]
    async fn test_resubmission_overwrites() {
        let store = SessionStore::new();
        store.begin("alice").await;
        store.record_test_submission("alice", tally(3)).await;
        store.record_test_submission("alice", tally(7)).await;

        let session = store.snapshot("alice").await.unwrap();
        assert_eq!(session.test_raw_scores, Some(tally(7)));

        store
            .record_interview_submission("alice", vec![InterviewResponse::new("Q1", "A1")])
            .await;
        store.record_interview_submission("alice", vec![]).await;
        let session = store.snapshot("alice").await.unwrap();
        assert_eq!(session.interview_raw_responses, Some(vec![]));
    }

    #[tokio::test]
    async fn test_selection_is_idempotent_and_drives_track() {
        let store = SessionStore::new();
        store.begin("bob").await;
        store.set_selection("bob", selection("Non-IT")).await;
        let session = store.set_selection("bob", selection("Non-IT")).await;

        assert_eq!(session.selection, Some(selection("Non-IT")));
        assert_eq!(session.track(), Track::NonIt);
    }

    #[tokio::test]
    async fn test_principals_are_isolated() {
        let store = SessionStore::new();
        store.begin("alice").await;
        store.begin("bob").await;
        store.record_test_submission("alice", tally(9)).await;

        assert!(store.snapshot("bob").await.unwrap().test_raw_scores.is_none());
        store.end("alice").await;
        assert!(store.snapshot("alice").await.is_none());
        assert!(store.snapshot("bob").await.is_some());
    }

    #[tokio::test]
    async fn test_record_without_begin_creates_session() {
        let store = SessionStore::new();
        store.record_test_submission("carol", tally(4)).await;
        let session = store.snapshot("carol").await.unwrap();
        assert_eq!(session.test_raw_scores, Some(tally(4)));
        assert_eq!(session.track(), Track::It);
    }

    #[tokio::test]
    async fn test_sweep_drops_only_expired_sessions() {
        let store = SessionStore::new();
        store.begin("fresh").await;
        store.record_test_submission("stale", tally(2)).await;
        store
            .sessions
            .write()
            .await
            .get_mut("stale")
            .unwrap()
            .started_at = Utc::now() - Duration::hours(48);

        assert_eq!(store.sweep_expired(Duration::hours(24)).await, 1);
        assert!(store.snapshot("stale").await.is_none());
        assert!(store.snapshot("fresh").await.is_some());
        assert_eq!(store.sweep_expired(Duration::hours(24)).await, 0);
    }

    #[tokio::test]
    async fn test_end_unknown_principal_is_noop() {
        let store = SessionStore::new();
        assert!(store.end("nobody").await.is_none());
        assert_eq!(store.active_sessions().await, 0);
    }
}
