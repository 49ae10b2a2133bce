//! Interview session and product-feedback records owned by the in-memory store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::feedback::InterviewFeedback;
use crate::models::role::PracticeRole;

/// Stable integer handle for a session. Assigned sequentially from 1,
/// never reused, meaningful only for identity and creation order.
pub type SessionId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    InProgress,
    Completed,
    /// Reachable in the type, never set by any current operation.
    /// Reserved for idle-session expiry.
    Abandoned,
}

/// One practice interview attempt: its questions, answers, and eventual feedback.
///
/// Invariant: `feedback` and `overall_score` are both `None` or both `Some`,
/// and `overall_score` mirrors `feedback.overall_score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub id: SessionId,
    pub role: PracticeRole,
    pub status: SessionStatus,
    pub current_question_index: usize,
    pub questions: Vec<String>,
    /// Sparse until answered; unanswered slots hold empty strings.
    pub responses: Vec<String>,
    pub feedback: Option<InterviewFeedback>,
    pub overall_score: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Product feedback left by a user about the practice experience itself
/// (not interview feedback). Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFeedback {
    pub id: u32,
    pub session_id: Option<SessionId>,
    pub role: Option<String>,
    /// 1-5, validated at the orchestration boundary.
    pub rating: u8,
    pub experience: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert shape for [`UserFeedback`]; also the request body of `POST /api/feedback`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserFeedback {
    pub session_id: Option<SessionId>,
    pub role: Option<String>,
    pub rating: u8,
    pub experience: Option<String>,
    pub suggestions: Option<String>,
    pub follow_up: Option<String>,
}
