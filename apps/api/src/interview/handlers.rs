//! Axum route handlers for the session lifecycle, role catalog, usage stats,
//! and product feedback.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::interview::actions;
use crate::models::role::PracticeRole;
use crate::models::session::{InterviewSession, NewUserFeedback, SessionId, UserFeedback};
use crate::state::AppState;
use crate::storage::StoreError;
use crate::usage::UsageStats;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    pub role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub question_index: usize,
    pub answer: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/roles
///
/// The role catalog as a slug-keyed metadata map.
pub async fn handle_get_roles() -> Json<Value> {
    let mut roles = serde_json::Map::new();
    for role in PracticeRole::ALL {
        roles.insert(
            role.slug().to_string(),
            serde_json::to_value(role.info()).unwrap_or_default(),
        );
    }
    Json(Value::Object(roles))
}

/// GET /api/usage
pub async fn handle_get_usage(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Json<UsageStats> {
    Json(state.usage.stats(&addr.ip().to_string()).await)
}

/// POST /api/interview/start
pub async fn handle_start_interview(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<StartInterviewRequest>,
) -> Result<Json<InterviewSession>, AppError> {
    actions::start_interview(&state, &addr.ip().to_string(), &req.role)
        .await
        .map(Json)
}

/// GET /api/interview/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<InterviewSession>, AppError> {
    let session = state.sessions.get(id).await.ok_or(StoreError::NotFound(id))?;
    Ok(Json(session))
}

/// POST /api/interview/:id/answer
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
    Json(req): Json<SubmitAnswerRequest>,
) -> Result<Json<InterviewSession>, AppError> {
    actions::submit_answer(&state, id, req.question_index, req.answer)
        .await
        .map(Json)
}

/// POST /api/interview/:id/previous
pub async fn handle_previous_question(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<InterviewSession>, AppError> {
    actions::previous_question(&state, id).await.map(Json)
}

/// POST /api/interview/:id/complete
pub async fn handle_complete_interview(
    State(state): State<AppState>,
    Path(id): Path<SessionId>,
) -> Result<Json<InterviewSession>, AppError> {
    actions::complete_interview(&state, id).await.map(Json)
}

/// POST /api/feedback
pub async fn handle_submit_feedback(
    State(state): State<AppState>,
    Json(req): Json<NewUserFeedback>,
) -> Result<Json<UserFeedback>, AppError> {
    if !(1..=5).contains(&req.rating) {
        return Err(AppError::Validation(
            "rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(Json(state.feedback_log.append(req).await))
}
