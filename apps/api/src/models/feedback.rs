//! Structured feedback records produced by the Feedback Generator.
//!
//! Field names follow the client wire format (camelCase), which is also the
//! exact JSON shape the generator prompts instruct the model to return.

use serde::{Deserialize, Serialize};

/// Full scored feedback for a completed interview session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewFeedback {
    /// 0-100.
    pub overall_score: u32,
    /// Letter grade (A+ through F).
    pub grade: String,
    /// 0-5, one decimal place.
    pub communication: f32,
    pub strengths: Vec<Strength>,
    pub improvements: Vec<Improvement>,
    pub question_analysis: Vec<QuestionAnalysis>,
    pub next_steps: NextSteps,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub title: String,
    pub description: String,
    pub tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionAnalysis {
    pub question_index: usize,
    pub question: String,
    /// 0-10.
    pub score: u32,
    pub what_worked: Vec<String>,
    pub could_improve: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextSteps {
    pub practice_areas: Vec<String>,
    pub resources: Vec<String>,
}

/// Resume review against an optional job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    /// 0-100: match against the JD, or general quality when no JD was given.
    pub match_score: u32,
    pub missing_keywords: Vec<String>,
    pub improvement_suggestions: Vec<String>,
    pub improved_bullet_points: Vec<String>,
    pub overall_feedback: String,
}

/// Elevator pitch review. All scores 0-100 except the filler-word count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchFeedback {
    pub clarity_score: u32,
    pub confidence_score: u32,
    pub filler_words: u32,
    pub structure_score: u32,
    pub tone_score: u32,
    pub improvement_suggestions: Vec<String>,
    pub overall_feedback: String,
    pub enhanced_version: String,
}

/// HR roleplay answer review. Scores 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleplayFeedback {
    pub persuasiveness_score: u32,
    pub structure_score: u32,
    pub communication_score: u32,
    pub improvement_suggestions: Vec<String>,
    pub strengths_identified: Vec<String>,
    pub overall_feedback: String,
}

/// Soft-skill scenario answer review. Scores 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillFeedback {
    pub empathy_score: u32,
    pub structure_score: u32,
    pub relevance_score: u32,
    pub improvement_suggestions: Vec<String>,
    pub strengths_identified: Vec<String>,
    pub overall_feedback: String,
}
