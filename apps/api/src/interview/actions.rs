//! Interview session lifecycle orchestration.
//!
//! Each gated flow runs the same sequence: quota check → domain action →
//! usage record. Quota is checked and charged at `start`; completing the
//! session is part of the same charged action and is not re-gated.

use tracing::{error, warn};

use crate::errors::AppError;
use crate::generator::{demo, GeneratorError};
use crate::models::role::PracticeRole;
use crate::models::session::{InterviewSession, SessionId};
use crate::state::AppState;
use crate::storage::StoreError;
use crate::usage::ActionKind;

/// Creates a session for the given role slug and fills in its questions.
///
/// On a capacity failure the demo question bank is substituted and the start
/// still counts as a success. On any other generator failure the session is
/// left in its pre-call state (in_progress, no questions), no quota is
/// consumed, and the error surfaces so the client can retry.
pub async fn start_interview(
    state: &AppState,
    client: &str,
    role_slug: &str,
) -> Result<InterviewSession, AppError> {
    let role = PracticeRole::from_slug(role_slug)
        .ok_or_else(|| AppError::Validation("Invalid role specified".to_string()))?;

    state
        .usage
        .check_allowed(client, ActionKind::Interview)
        .await
        .into_result()?;

    let session = state.sessions.create(role).await;

    let questions = match state.generator.interview_questions(role).await {
        Ok(questions) => questions,
        Err(GeneratorError::Capacity(reason)) => {
            warn!(session_id = session.id, %reason, "generator at capacity, serving demo questions");
            demo::interview_questions(role)
        }
        Err(GeneratorError::Other(reason)) => {
            error!(session_id = session.id, %reason, "question generation failed");
            return Err(AppError::Generator(reason));
        }
    };

    let session = state.sessions.attach_questions(session.id, questions).await?;
    state.usage.record(client, ActionKind::Interview).await;
    Ok(session)
}

/// Records one answer and advances the session cursor.
pub async fn submit_answer(
    state: &AppState,
    id: SessionId,
    question_index: usize,
    answer: String,
) -> Result<InterviewSession, AppError> {
    Ok(state.sessions.record_answer(id, question_index, answer).await?)
}

/// Steps back to the previous question without touching recorded answers.
pub async fn previous_question(
    state: &AppState,
    id: SessionId,
) -> Result<InterviewSession, AppError> {
    Ok(state.sessions.rewind(id).await?)
}

/// Analyzes the transcript and transitions the session to completed.
///
/// A capacity failure completes the session with the deterministic demo
/// feedback instead of surfacing an error. Any other generator failure
/// leaves the session in_progress so the attempt can be retried.
pub async fn complete_interview(
    state: &AppState,
    id: SessionId,
) -> Result<InterviewSession, AppError> {
    let session = state.sessions.get(id).await.ok_or(StoreError::NotFound(id))?;

    let feedback = match state
        .generator
        .interview_feedback(session.role, &session.questions, &session.responses)
        .await
    {
        Ok(feedback) => feedback,
        Err(GeneratorError::Capacity(reason)) => {
            warn!(session_id = id, %reason, "generator at capacity, serving demo feedback");
            demo::interview_feedback(&session.questions)
        }
        Err(GeneratorError::Other(reason)) => {
            error!(session_id = id, %reason, "feedback analysis failed");
            return Err(AppError::Generator(reason));
        }
    };

    let overall_score = feedback.overall_score;
    Ok(state.sessions.complete(id, feedback, overall_score).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::testing::{state_with, StubMode, STUB_OVERALL_SCORE};
    use crate::generator::QUESTIONS_PER_SESSION;
    use crate::models::session::SessionStatus;

    const CLIENT: &str = "198.51.100.4";

    #[tokio::test]
    async fn test_start_creates_a_session_with_questions_and_charges_quota() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let session = start_interview(&state, CLIENT, "product-management")
            .await
            .unwrap();

        assert_eq!(session.id, 1);
        assert_eq!(session.role, PracticeRole::ProductManagement);
        assert_eq!(session.status, SessionStatus::InProgress);
        assert_eq!(session.questions.len(), QUESTIONS_PER_SESSION);
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 2);
    }

    #[tokio::test]
    async fn test_start_with_unknown_role_is_a_validation_error() {
        let (state, stub) = state_with(StubMode::Succeed);
        let err = start_interview(&state, CLIENT, "astronaut").await.unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg == "Invalid role specified"));
        assert_eq!(stub.call_count(), 0);
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 3);
    }

    #[tokio::test]
    async fn test_start_at_capacity_serves_the_demo_bank_and_still_charges() {
        let (state, _stub) = state_with(StubMode::Capacity);
        let session = start_interview(&state, CLIENT, "qa-testing").await.unwrap();

        assert_eq!(session.questions, demo::interview_questions(PracticeRole::QaTesting));
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 2);
    }

    #[tokio::test]
    async fn test_start_failure_preserves_quota_and_the_pre_call_session() {
        let (state, _stub) = state_with(StubMode::Fail);
        let err = start_interview(&state, CLIENT, "qa-testing").await.unwrap_err();

        assert!(matches!(err, AppError::Generator(_)));
        // Counter before == counter after.
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 3);
        // The created session is still there, untouched by the failed call.
        let session = state.sessions.get(1).await.unwrap();
        assert_eq!(session.status, SessionStatus::InProgress);
        assert!(session.questions.is_empty());
    }

    #[tokio::test]
    async fn test_fourth_start_is_refused_with_the_limit_message() {
        let (state, stub) = state_with(StubMode::Succeed);
        for _ in 0..3 {
            start_interview(&state, CLIENT, "business-analyst").await.unwrap();
        }

        let err = start_interview(&state, CLIENT, "business-analyst")
            .await
            .unwrap_err();
        assert!(
            matches!(err, AppError::QuotaExceeded(msg) if msg.contains("3 practice interviews"))
        );
        // Three generator calls, not four: the refused start never got there.
        assert_eq!(stub.call_count(), 3);
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 0);
        // Another client is unaffected.
        assert_eq!(state.usage.stats("other").await.interviews_remaining, 3);
    }

    #[tokio::test]
    async fn test_answer_then_rewind_keeps_the_recorded_response() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let session = start_interview(&state, CLIENT, "customer-success")
            .await
            .unwrap();

        let session = submit_answer(&state, session.id, 0, "first answer".to_string())
            .await
            .unwrap();
        assert_eq!(session.responses[0], "first answer");
        assert_eq!(session.current_question_index, 1);

        let session = previous_question(&state, session.id).await.unwrap();
        assert_eq!(session.current_question_index, 0);
        assert_eq!(session.responses[0], "first answer");
    }

    #[tokio::test]
    async fn test_complete_stores_feedback_and_mirrors_the_score() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let session = start_interview(&state, CLIENT, "ai-data-analyst")
            .await
            .unwrap();
        submit_answer(&state, session.id, 0, "an answer".to_string())
            .await
            .unwrap();

        let session = complete_interview(&state, session.id).await.unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.overall_score, Some(STUB_OVERALL_SCORE));
        assert_eq!(
            session.feedback.as_ref().unwrap().overall_score,
            STUB_OVERALL_SCORE
        );
        assert!(session.completed_at.is_some());
    }

    #[tokio::test]
    async fn test_complete_at_capacity_finishes_with_demo_feedback_charging_once() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let started = start_interview(&state, CLIENT, "qa-testing").await.unwrap();

        // Flip the generator to capacity failures for the analysis call.
        let (capacity_state, _capacity_stub) = state_with(StubMode::Capacity);
        let state = AppState {
            generator: capacity_state.generator,
            ..state
        };

        let session = complete_interview(&state, started.id).await.unwrap();
        assert_eq!(session.status, SessionStatus::Completed);
        assert_eq!(session.overall_score, Some(78));
        assert_eq!(
            session.feedback.unwrap(),
            demo::interview_feedback(&started.questions)
        );
        // Charged exactly once, at start.
        assert_eq!(state.usage.stats(CLIENT).await.interviews_remaining, 2);
    }

    #[tokio::test]
    async fn test_complete_failure_leaves_the_session_in_progress() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let started = start_interview(&state, CLIENT, "qa-testing").await.unwrap();

        let (fail_state, _fail_stub) = state_with(StubMode::Fail);
        let state = AppState {
            generator: fail_state.generator,
            ..state
        };

        let err = complete_interview(&state, started.id).await.unwrap_err();
        assert!(matches!(err, AppError::Generator(_)));

        let session = state.sessions.get(started.id).await.unwrap();
        assert_eq!(session.status, SessionStatus::InProgress);
        assert!(session.feedback.is_none());
        assert!(session.overall_score.is_none());
    }

    #[tokio::test]
    async fn test_complete_unknown_session_is_not_found() {
        let (state, _stub) = state_with(StubMode::Succeed);
        let err = complete_interview(&state, 77).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
