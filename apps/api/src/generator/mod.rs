//! Feedback Generator — the narrow seam between the practice flows and the
//! LLM upstream.
//!
//! Carried in `AppState` as `Arc<dyn FeedbackGenerator>` so orchestration and
//! tests never touch the provider directly. Failures split into exactly two
//! classes: `Capacity` (absorbed by the orchestrator with demo content) and
//! `Other` (surfaced, quota preserved).

use async_trait::async_trait;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::models::feedback::{
    InterviewFeedback, PitchFeedback, ResumeAnalysis, RoleplayFeedback, SoftSkillFeedback,
};
use crate::models::role::PracticeRole;

pub mod demo;
pub mod llm;
pub mod prompts;

/// Number of questions every interview session carries.
pub const QUESTIONS_PER_SESSION: usize = 5;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The upstream provider is rate-limited, overloaded, or timing out.
    #[error("generator at capacity: {0}")]
    Capacity(String),

    /// Any other failure: transport trouble, malformed output, bad credentials.
    #[error("generator failure: {0}")]
    Other(String),
}

impl From<LlmError> for GeneratorError {
    fn from(err: LlmError) -> Self {
        if err.is_capacity() {
            GeneratorError::Capacity(err.to_string())
        } else {
            GeneratorError::Other(err.to_string())
        }
    }
}

/// External capability that turns roles and Q&A transcripts into structured,
/// scored feedback.
#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    /// Produces the fixed-length question list for a new session.
    async fn interview_questions(&self, role: PracticeRole)
        -> Result<Vec<String>, GeneratorError>;

    /// Scores a finished interview transcript.
    async fn interview_feedback(
        &self,
        role: PracticeRole,
        questions: &[String],
        responses: &[String],
    ) -> Result<InterviewFeedback, GeneratorError>;

    /// Reviews a resume, optionally against a job description.
    async fn resume_analysis(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ResumeAnalysis, GeneratorError>;

    /// Reviews an elevator pitch.
    async fn pitch_feedback(&self, pitch_text: &str) -> Result<PitchFeedback, GeneratorError>;

    /// Reviews one HR roleplay answer in the context of its topic.
    async fn roleplay_feedback(
        &self,
        topic: &str,
        question: &str,
        response: &str,
    ) -> Result<RoleplayFeedback, GeneratorError>;

    /// Reviews one soft-skill scenario answer.
    async fn soft_skill_feedback(
        &self,
        question: &str,
        response: &str,
    ) -> Result<SoftSkillFeedback, GeneratorError>;
}
