pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coach::handlers as coach;
use crate::interview::handlers as interview;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/roles", get(interview::handle_get_roles))
        .route("/api/usage", get(interview::handle_get_usage))
        // Interview lifecycle
        .route("/api/interview/start", post(interview::handle_start_interview))
        .route("/api/interview/:id", get(interview::handle_get_interview))
        .route(
            "/api/interview/:id/answer",
            post(interview::handle_submit_answer),
        )
        .route(
            "/api/interview/:id/previous",
            post(interview::handle_previous_question),
        )
        .route(
            "/api/interview/:id/complete",
            post(interview::handle_complete_interview),
        )
        // Product feedback
        .route("/api/feedback", post(interview::handle_submit_feedback))
        // Coaching surfaces
        .route("/api/resume/analyze", post(coach::handle_analyze_resume))
        .route("/api/pitch/analyze", post(coach::handle_analyze_pitch))
        .route("/api/roleplay/session", get(coach::handle_roleplay_session))
        .route("/api/roleplay/analyze", post(coach::handle_analyze_roleplay))
        .route(
            "/api/soft-skills/questions",
            get(coach::handle_soft_skill_questions),
        )
        .route(
            "/api/soft-skills/analyze",
            post(coach::handle_analyze_soft_skill),
        )
        .with_state(state)
}
