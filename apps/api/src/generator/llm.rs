//! LLM-backed implementation of [`FeedbackGenerator`].

use async_trait::async_trait;
use serde::Deserialize;

use crate::generator::{prompts, FeedbackGenerator, GeneratorError, QUESTIONS_PER_SESSION};
use crate::llm_client::{CallBudget, LlmClient};
use crate::models::feedback::{
    InterviewFeedback, PitchFeedback, ResumeAnalysis, RoleplayFeedback, SoftSkillFeedback,
};
use crate::models::role::PracticeRole;

// Output budgets per call shape. Generation runs warm (0.7), analysis cool (0.3).
const QUESTION_BUDGET: CallBudget = CallBudget {
    max_tokens: 400,
    temperature: 0.7,
};
const INTERVIEW_FEEDBACK_BUDGET: CallBudget = CallBudget {
    max_tokens: 800,
    temperature: 0.3,
};
const COACH_BUDGET: CallBudget = CallBudget {
    max_tokens: 600,
    temperature: 0.3,
};
// The pitch response carries a full rewritten pitch on top of the scores.
const PITCH_BUDGET: CallBudget = CallBudget {
    max_tokens: 800,
    temperature: 0.3,
};

pub struct LlmFeedbackGenerator {
    llm: LlmClient,
}

impl LlmFeedbackGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[derive(Debug, Deserialize)]
struct QuestionList {
    questions: Vec<String>,
}

#[async_trait]
impl FeedbackGenerator for LlmFeedbackGenerator {
    async fn interview_questions(
        &self,
        role: PracticeRole,
    ) -> Result<Vec<String>, GeneratorError> {
        let prompt = prompts::question_prompt(role.info());
        let list: QuestionList = self
            .llm
            .call_json(&prompt, prompts::QUESTION_SYSTEM, QUESTION_BUDGET)
            .await?;

        if list.questions.len() != QUESTIONS_PER_SESSION {
            return Err(GeneratorError::Other(format!(
                "expected {QUESTIONS_PER_SESSION} questions for {}, got {}",
                role.slug(),
                list.questions.len()
            )));
        }
        Ok(list.questions)
    }

    async fn interview_feedback(
        &self,
        role: PracticeRole,
        questions: &[String],
        responses: &[String],
    ) -> Result<InterviewFeedback, GeneratorError> {
        let prompt = prompts::interview_feedback_prompt(role.info(), questions, responses);
        Ok(self
            .llm
            .call_json(
                &prompt,
                prompts::INTERVIEW_FEEDBACK_SYSTEM,
                INTERVIEW_FEEDBACK_BUDGET,
            )
            .await?)
    }

    async fn resume_analysis(
        &self,
        resume_text: &str,
        job_description: Option<&str>,
    ) -> Result<ResumeAnalysis, GeneratorError> {
        let prompt = prompts::resume_prompt(resume_text, job_description);
        Ok(self
            .llm
            .call_json(&prompt, prompts::RESUME_SYSTEM, COACH_BUDGET)
            .await?)
    }

    async fn pitch_feedback(&self, pitch_text: &str) -> Result<PitchFeedback, GeneratorError> {
        let prompt = prompts::pitch_prompt(pitch_text);
        Ok(self
            .llm
            .call_json(&prompt, prompts::PITCH_SYSTEM, PITCH_BUDGET)
            .await?)
    }

    async fn roleplay_feedback(
        &self,
        topic: &str,
        question: &str,
        response: &str,
    ) -> Result<RoleplayFeedback, GeneratorError> {
        let prompt = prompts::roleplay_prompt(topic, question, response);
        Ok(self
            .llm
            .call_json(&prompt, prompts::ROLEPLAY_SYSTEM, COACH_BUDGET)
            .await?)
    }

    async fn soft_skill_feedback(
        &self,
        question: &str,
        response: &str,
    ) -> Result<SoftSkillFeedback, GeneratorError> {
        let prompt = prompts::soft_skill_prompt(question, response);
        Ok(self
            .llm
            .call_json(&prompt, prompts::SOFT_SKILL_SYSTEM, COACH_BUDGET)
            .await?)
    }
}
