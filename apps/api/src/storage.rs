//! In-memory storage for interview sessions and product feedback.
//!
//! Both stores live only for the process lifetime; a restart silently
//! discards everything. Session ids are sequential handles starting at 1,
//! never reused. Every mutation is one short write-lock acquisition — locks
//! are never held across a generator call.

use std::collections::HashMap;

use chrono::Utc;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use crate::models::feedback::InterviewFeedback;
use crate::models::role::PracticeRole;
use crate::models::session::{
    InterviewSession, NewUserFeedback, SessionId, SessionStatus, UserFeedback,
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Interview session {0} not found")]
    NotFound(SessionId),
}

#[derive(Debug)]
struct SessionTable {
    sessions: HashMap<SessionId, InterviewSession>,
    next_id: SessionId,
}

/// Owner of the full interview session lifecycle.
#[derive(Debug)]
pub struct SessionStore {
    inner: RwLock<SessionTable>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SessionTable {
                sessions: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Allocates a new in-progress session with no questions yet. The caller
    /// has already validated `role` at the orchestration boundary.
    pub async fn create(&self, role: PracticeRole) -> InterviewSession {
        let mut table = self.inner.write().await;
        let id = table.next_id;
        table.next_id += 1;
        let session = InterviewSession {
            id,
            role,
            status: SessionStatus::InProgress,
            current_question_index: 0,
            questions: Vec::new(),
            responses: Vec::new(),
            feedback: None,
            overall_score: None,
            created_at: Utc::now(),
            completed_at: None,
        };
        table.sessions.insert(id, session.clone());
        session
    }

    /// Returns a snapshot of the session, if it exists.
    pub async fn get(&self, id: SessionId) -> Option<InterviewSession> {
        self.inner.read().await.sessions.get(&id).cloned()
    }

    /// Sets the question list. Called exactly once per session, immediately
    /// after creation once the generator has produced the questions.
    pub async fn attach_questions(
        &self,
        id: SessionId,
        questions: Vec<String>,
    ) -> Result<InterviewSession, StoreError> {
        self.update(id, |session| session.questions = questions).await
    }

    /// Writes `responses[index]` and advances the cursor to `index + 1`,
    /// backfilling skipped slots with empty strings.
    ///
    /// Indices past `questions.len()` are accepted: the store does not cap
    /// progression, and the orchestrator reads a past-the-end cursor as
    /// "last question submitted".
    pub async fn record_answer(
        &self,
        id: SessionId,
        index: usize,
        answer: String,
    ) -> Result<InterviewSession, StoreError> {
        self.update(id, |session| {
            if index >= session.responses.len() {
                session.responses.resize(index + 1, String::new());
            }
            session.responses[index] = answer;
            session.current_question_index = index + 1;
        })
        .await
    }

    /// Steps the cursor back one question (floor 0) for "previous question"
    /// navigation. Recorded responses are left untouched.
    pub async fn rewind(&self, id: SessionId) -> Result<InterviewSession, StoreError> {
        self.update(id, |session| {
            session.current_question_index = session.current_question_index.saturating_sub(1);
        })
        .await
    }

    /// Transitions the session to completed and stores its feedback.
    ///
    /// Not idempotent: a second call overwrites feedback and the completion
    /// timestamp. Callers complete a session at most once.
    pub async fn complete(
        &self,
        id: SessionId,
        feedback: InterviewFeedback,
        overall_score: u32,
    ) -> Result<InterviewSession, StoreError> {
        self.update(id, |session| {
            session.status = SessionStatus::Completed;
            session.feedback = Some(feedback);
            session.overall_score = Some(overall_score);
            session.completed_at = Some(Utc::now());
        })
        .await
    }

    async fn update(
        &self,
        id: SessionId,
        apply: impl FnOnce(&mut InterviewSession),
    ) -> Result<InterviewSession, StoreError> {
        let mut table = self.inner.write().await;
        let session = table.sessions.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        apply(session);
        Ok(session.clone())
    }
}

#[derive(Debug)]
struct FeedbackTable {
    records: Vec<UserFeedback>,
    next_id: u32,
}

/// Append-only log of product feedback. No update, no delete.
#[derive(Debug)]
pub struct FeedbackLog {
    inner: Mutex<FeedbackTable>,
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackLog {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(FeedbackTable {
                records: Vec::new(),
                next_id: 1,
            }),
        }
    }

    pub async fn append(&self, new: NewUserFeedback) -> UserFeedback {
        let mut table = self.inner.lock().await;
        let id = table.next_id;
        table.next_id += 1;
        let record = UserFeedback {
            id,
            session_id: new.session_id,
            role: new.role,
            rating: new.rating,
            experience: new.experience,
            suggestions: new.suggestions,
            follow_up: new.follow_up,
            created_at: Utc::now(),
        };
        table.records.push(record.clone());
        record
    }

    #[allow(dead_code)]
    pub async fn all(&self) -> Vec<UserFeedback> {
        self.inner.lock().await.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::feedback::NextSteps;

    fn sample_feedback(overall: u32) -> InterviewFeedback {
        InterviewFeedback {
            overall_score: overall,
            grade: "A-".to_string(),
            communication: 4.5,
            strengths: vec![],
            improvements: vec![],
            question_analysis: vec![],
            next_steps: NextSteps {
                practice_areas: vec![],
                resources: vec![],
            },
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_from_one() {
        let store = SessionStore::new();
        let a = store.create(PracticeRole::QaTesting).await;
        let b = store.create(PracticeRole::BusinessAnalyst).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(a.status, SessionStatus::InProgress);
        assert_eq!(a.current_question_index, 0);
        assert!(a.questions.is_empty());
        assert!(a.feedback.is_none());
        assert!(a.overall_score.is_none());
    }

    #[tokio::test]
    async fn test_get_unknown_session_is_none() {
        let store = SessionStore::new();
        assert!(store.get(42).await.is_none());
    }

    #[tokio::test]
    async fn test_attach_questions_on_unknown_session_is_not_found() {
        let store = SessionStore::new();
        let err = store
            .attach_questions(7, vec!["q".to_string()])
            .await
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound(7));
    }

    #[tokio::test]
    async fn test_record_answer_sets_response_and_advances_cursor() {
        let store = SessionStore::new();
        let session = store.create(PracticeRole::ProductManagement).await;
        store
            .attach_questions(session.id, vec!["q1".to_string(), "q2".to_string()])
            .await
            .unwrap();

        store
            .record_answer(session.id, 0, "my answer".to_string())
            .await
            .unwrap();

        let session = store.get(session.id).await.unwrap();
        assert_eq!(session.responses[0], "my answer");
        assert_eq!(session.current_question_index, 1);
    }

    #[tokio::test]
    async fn test_record_answer_backfills_skipped_slots_with_empty_strings() {
        let store = SessionStore::new();
        let session = store.create(PracticeRole::CustomerSuccess).await;

        store
            .record_answer(session.id, 2, "third".to_string())
            .await
            .unwrap();

        let session = store.get(session.id).await.unwrap();
        assert_eq!(session.responses, vec!["", "", "third"]);
        assert_eq!(session.current_question_index, 3);
    }

    #[tokio::test]
    async fn test_record_answer_past_question_count_is_accepted() {
        // The store does not cap progression at questions.len(); the
        // orchestrator reads the past-the-end cursor as completion intent.
        let store = SessionStore::new();
        let session = store.create(PracticeRole::AiDataAnalyst).await;
        store
            .attach_questions(session.id, vec!["only question".to_string()])
            .await
            .unwrap();

        let session = store
            .record_answer(session.id, 4, "overflow".to_string())
            .await
            .unwrap();
        assert_eq!(session.current_question_index, 5);
        assert_eq!(session.responses.len(), 5);
    }

    #[tokio::test]
    async fn test_rewind_decrements_cursor_and_preserves_responses() {
        let store = SessionStore::new();
        let session = store.create(PracticeRole::QaTesting).await;
        store
            .record_answer(session.id, 0, "kept".to_string())
            .await
            .unwrap();

        let session = store.rewind(session.id).await.unwrap();
        assert_eq!(session.current_question_index, 0);
        assert_eq!(session.responses[0], "kept");

        // Floor at zero.
        let session = store.rewind(session.id).await.unwrap();
        assert_eq!(session.current_question_index, 0);
    }

    #[tokio::test]
    async fn test_complete_stamps_feedback_score_and_timestamp() {
        let store = SessionStore::new();
        let session = store.create(PracticeRole::BusinessAnalyst).await;

        let completed = store
            .complete(session.id, sample_feedback(82), 82)
            .await
            .unwrap();

        assert_eq!(completed.status, SessionStatus::Completed);
        assert_eq!(completed.overall_score, Some(82));
        assert_eq!(completed.feedback.as_ref().unwrap().overall_score, 82);
        assert!(completed.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_status_never_regresses_from_completed() {
        let store = SessionStore::new();
        let session = store.create(PracticeRole::QaTesting).await;
        store
            .complete(session.id, sample_feedback(70), 70)
            .await
            .unwrap();

        // Later mutations leave the terminal status in place.
        let session = store
            .record_answer(session.id, 0, "late answer".to_string())
            .await
            .unwrap();
        assert_eq!(session.status, SessionStatus::Completed);

        // A second complete overwrites feedback but cannot regress status.
        let session = store
            .complete(session.id, sample_feedback(90), 90)
            .await
            .unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.overall_score, Some(90));
    }

    #[tokio::test]
    async fn test_feedback_log_appends_with_sequential_ids() {
        let log = FeedbackLog::new();
        let first = log
            .append(NewUserFeedback {
                session_id: Some(1),
                role: Some("product-management".to_string()),
                rating: 5,
                experience: Some("great".to_string()),
                suggestions: None,
                follow_up: None,
            })
            .await;
        let second = log
            .append(NewUserFeedback {
                session_id: None,
                role: None,
                rating: 3,
                experience: None,
                suggestions: None,
                follow_up: None,
            })
            .await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let all = log.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].rating, 5);
        assert_eq!(all[1].session_id, None);
    }
}
