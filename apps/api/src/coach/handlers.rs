//! Axum handlers for the coaching surfaces: resume review, elevator pitch,
//! HR roleplay, and soft-skill scenarios.
//!
//! Every analysis call follows the same gated sequence: quota check →
//! generator call → usage record. Capacity failures are absorbed with demo
//! content (and still charged, since the user saw a success); any other
//! generator failure surfaces and leaves the quota untouched.

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::coach::scenarios;
use crate::errors::AppError;
use crate::generator::{demo, GeneratorError};
use crate::models::feedback::{
    PitchFeedback, ResumeAnalysis, RoleplayFeedback, SoftSkillFeedback,
};
use crate::state::AppState;
use crate::usage::ActionKind;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalyzeRequest {
    pub resume_text: String,
    pub job_description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchAnalyzeRequest {
    pub pitch_text: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleplayAnalyzeRequest {
    pub topic: String,
    pub question: String,
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct SoftSkillAnalyzeRequest {
    pub question: String,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct RoleplaySessionResponse {
    pub topic: String,
    pub questions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SoftSkillQuestionsResponse {
    pub questions: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/resume/analyze
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<ResumeAnalyzeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    analyze_resume(&state, &addr.ip().to_string(), req)
        .await
        .map(Json)
}

/// POST /api/pitch/analyze
pub async fn handle_analyze_pitch(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<PitchAnalyzeRequest>,
) -> Result<Json<PitchFeedback>, AppError> {
    analyze_pitch(&state, &addr.ip().to_string(), req)
        .await
        .map(Json)
}

/// GET /api/roleplay/session
///
/// Hands out a random HR topic and its paired questions. Local content,
/// not quota-gated.
pub async fn handle_roleplay_session() -> Json<RoleplaySessionResponse> {
    let scenario = scenarios::pick_roleplay_scenario();
    Json(RoleplaySessionResponse {
        topic: scenario.topic.to_string(),
        questions: scenario.questions.iter().map(|q| q.to_string()).collect(),
    })
}

/// POST /api/roleplay/analyze
pub async fn handle_analyze_roleplay(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<RoleplayAnalyzeRequest>,
) -> Result<Json<RoleplayFeedback>, AppError> {
    analyze_roleplay(&state, &addr.ip().to_string(), req)
        .await
        .map(Json)
}

/// GET /api/soft-skills/questions
///
/// Three random scenarios from the bank. Local content, not quota-gated.
pub async fn handle_soft_skill_questions() -> Json<SoftSkillQuestionsResponse> {
    Json(SoftSkillQuestionsResponse {
        questions: scenarios::pick_soft_skill_questions(),
    })
}

/// POST /api/soft-skills/analyze
pub async fn handle_analyze_soft_skill(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(req): Json<SoftSkillAnalyzeRequest>,
) -> Result<Json<SoftSkillFeedback>, AppError> {
    analyze_soft_skill(&state, &addr.ip().to_string(), req)
        .await
        .map(Json)
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

pub(crate) async fn analyze_resume(
    state: &AppState,
    client: &str,
    req: ResumeAnalyzeRequest,
) -> Result<ResumeAnalysis, AppError> {
    if req.resume_text.len() < 100 {
        return Err(AppError::Validation(
            "Resume text must be at least 100 characters".to_string(),
        ));
    }
    // A short JD is treated as absent, matching the general-quality prompt.
    let job_description = req.job_description.as_deref().filter(|jd| jd.trim().len() > 50);

    run_gated(
        state,
        client,
        ActionKind::ResumeCheck,
        "resume_check",
        demo::resume_analysis,
        state.generator.resume_analysis(&req.resume_text, job_description),
    )
    .await
}

pub(crate) async fn analyze_pitch(
    state: &AppState,
    client: &str,
    req: PitchAnalyzeRequest,
) -> Result<PitchFeedback, AppError> {
    if req.pitch_text.trim().is_empty() {
        return Err(AppError::Validation("Pitch text cannot be empty".to_string()));
    }

    run_gated(
        state,
        client,
        ActionKind::PitchReview,
        "pitch_review",
        demo::pitch_feedback,
        state.generator.pitch_feedback(&req.pitch_text),
    )
    .await
}

pub(crate) async fn analyze_roleplay(
    state: &AppState,
    client: &str,
    req: RoleplayAnalyzeRequest,
) -> Result<RoleplayFeedback, AppError> {
    if req.topic.trim().is_empty()
        || req.question.trim().is_empty()
        || req.response.trim().is_empty()
    {
        return Err(AppError::Validation(
            "topic, question, and response are all required".to_string(),
        ));
    }

    run_gated(
        state,
        client,
        ActionKind::RoleplayReview,
        "roleplay_review",
        demo::roleplay_feedback,
        state
            .generator
            .roleplay_feedback(&req.topic, &req.question, &req.response),
    )
    .await
}

pub(crate) async fn analyze_soft_skill(
    state: &AppState,
    client: &str,
    req: SoftSkillAnalyzeRequest,
) -> Result<SoftSkillFeedback, AppError> {
    if req.question.trim().is_empty() || req.response.trim().is_empty() {
        return Err(AppError::Validation(
            "question and response are required".to_string(),
        ));
    }

    run_gated(
        state,
        client,
        ActionKind::SoftSkillReview,
        "soft_skill_review",
        demo::soft_skill_feedback,
        state
            .generator
            .soft_skill_feedback(&req.question, &req.response),
    )
    .await
}

/// The gated-action sequence shared by every coach analysis:
/// quota check → generator call → usage record.
///
/// The generator future is not polled until the quota check passes, so a
/// refused client never reaches the upstream.
async fn run_gated<T, F>(
    state: &AppState,
    client: &str,
    kind: ActionKind,
    action: &'static str,
    fallback: impl FnOnce() -> T,
    call: F,
) -> Result<T, AppError>
where
    F: Future<Output = Result<T, GeneratorError>>,
{
    state
        .usage
        .check_allowed(client, kind)
        .await
        .into_result()?;

    let value = match call.await {
        Ok(value) => value,
        Err(GeneratorError::Capacity(reason)) => {
            warn!(action, %reason, "generator at capacity, serving demo content");
            fallback()
        }
        Err(GeneratorError::Other(reason)) => {
            error!(action, %reason, "generator failure");
            return Err(AppError::Generator(reason));
        }
    };

    state.usage.record(client, kind).await;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::testing::{state_with, StubMode};

    const CLIENT: &str = "203.0.113.7";

    fn long_resume() -> String {
        "Experienced graduate with projects in data analysis and web development. "
            .repeat(3)
    }

    #[tokio::test]
    async fn test_short_resume_is_rejected_before_the_generator() {
        let (state, stub) = state_with(StubMode::Succeed);
        let err = analyze_resume(
            &state,
            CLIENT,
            ResumeAnalyzeRequest {
                resume_text: "too short".to_string(),
                job_description: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.call_count(), 0);
        assert_eq!(state.usage.stats(CLIENT).await.resume_checks_remaining, 2);
    }

    #[tokio::test]
    async fn test_successful_resume_check_records_usage() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let analysis = analyze_resume(
            &state,
            CLIENT,
            ResumeAnalyzeRequest {
                resume_text: long_resume(),
                job_description: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(analysis.match_score, 88);
        assert_eq!(state.usage.stats(CLIENT).await.resume_checks_remaining, 1);
    }

    #[tokio::test]
    async fn test_capacity_failure_serves_demo_analysis_and_still_charges() {
        let (state, _stub) = state_with(StubMode::Capacity);
        let analysis = analyze_resume(
            &state,
            CLIENT,
            ResumeAnalyzeRequest {
                resume_text: long_resume(),
                job_description: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(analysis, demo::resume_analysis());
        assert_eq!(state.usage.stats(CLIENT).await.resume_checks_remaining, 1);
    }

    #[tokio::test]
    async fn test_other_failure_surfaces_and_preserves_quota() {
        let (state, _stub) = state_with(StubMode::Fail);
        let err = analyze_pitch(
            &state,
            CLIENT,
            PitchAnalyzeRequest {
                pitch_text: "Hi, I'm a software engineering student.".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Generator(_)));
        assert_eq!(state.usage.stats(CLIENT).await.pitch_reviews_remaining, 2);
    }

    #[tokio::test]
    async fn test_quota_refusal_never_reaches_the_generator() {
        let (state, stub) = state_with(StubMode::Succeed);
        for _ in 0..ActionKind::ResumeCheck.daily_limit() {
            state.usage.record(CLIENT, ActionKind::ResumeCheck).await;
        }

        let err = analyze_resume(
            &state,
            CLIENT,
            ResumeAnalyzeRequest {
                resume_text: long_resume(),
                job_description: None,
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::QuotaExceeded(msg) if msg.contains("Resume check limit")));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_empty_roleplay_fields_are_rejected() {
        let (state, stub) = state_with(StubMode::Succeed);
        let err = analyze_roleplay(
            &state,
            CLIENT,
            RoleplayAnalyzeRequest {
                topic: "Handling Workplace Pressure".to_string(),
                question: "  ".to_string(),
                response: "answer".to_string(),
            },
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_soft_skill_analysis_happy_path() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let feedback = analyze_soft_skill(
            &state,
            CLIENT,
            SoftSkillAnalyzeRequest {
                question: "How would you handle a struggling teammate?".to_string(),
                response: "I would check in privately and offer to pair.".to_string(),
            },
        )
        .await
        .unwrap();

        assert_eq!(feedback.empathy_score, 88);
        assert_eq!(
            state.usage.stats(CLIENT).await.soft_skill_reviews_remaining,
            2
        );
    }
}
