//! Deterministic demo-mode payloads.
//!
//! Served by the orchestrator whenever the upstream provider reports a
//! capacity failure, so the user still gets a complete, valid result. The
//! content is fixed: the same inputs always produce the same payload.

use crate::models::feedback::{
    Improvement, InterviewFeedback, NextSteps, PitchFeedback, QuestionAnalysis, ResumeAnalysis,
    RoleplayFeedback, SoftSkillFeedback, Strength,
};
use crate::models::role::PracticeRole;

pub fn interview_questions(role: PracticeRole) -> Vec<String> {
    let questions: [&str; 5] = match role {
        PracticeRole::ProductManagement => [
            "How would you prioritize features for a new mobile app when you have limited development resources?",
            "Describe a time when you had to gather requirements from different stakeholders with conflicting needs.",
            "How would you measure the success of a new product feature after its launch?",
            "Walk me through how you would conduct user research for a feature you're considering.",
            "How would you handle a situation where engineering says a feature will take 6 months but the business wants it in 2 months?",
        ],
        PracticeRole::AiDataAnalyst => [
            "How would you explain a complex data finding to a non-technical stakeholder?",
            "Describe your approach to cleaning and validating a new dataset you've never worked with before.",
            "How would you identify the most important metrics to track for an e-commerce business?",
            "Walk me through how you would investigate a sudden drop in user engagement metrics.",
            "How would you design an A/B test to measure the impact of a new recommendation algorithm?",
        ],
        PracticeRole::QaTesting => [
            "How would you test a login feature for a mobile app?",
            "Describe your approach to testing an e-commerce checkout process.",
            "How would you prioritize which bugs to fix first when you have limited time?",
            "Walk me through how you would create test cases for a search functionality.",
            "How would you handle a situation where developers say they can't reproduce a bug you found?",
        ],
        PracticeRole::CustomerSuccess => [
            "How would you handle a frustrated customer who is threatening to cancel their subscription?",
            "Describe how you would onboard a new customer to ensure they get value from our product quickly.",
            "How would you identify which customers are at risk of churning and what would you do about it?",
            "Walk me through how you would conduct a quarterly business review with a key client.",
            "How would you handle a situation where a customer is asking for a feature that doesn't exist in our product?",
        ],
        PracticeRole::BusinessAnalyst => [
            "How would you gather requirements for a new internal process improvement project?",
            "Describe how you would analyze and present the ROI of a proposed system upgrade.",
            "How would you handle conflicting requirements from different business units?",
            "Walk me through your process for documenting and communicating workflow changes.",
            "How would you identify inefficiencies in a current business process and propose solutions?",
        ],
    };
    questions.iter().map(|q| q.to_string()).collect()
}

pub fn interview_feedback(questions: &[String]) -> InterviewFeedback {
    InterviewFeedback {
        overall_score: 78,
        grade: "B+".to_string(),
        communication: 4.2,
        strengths: vec![
            Strength {
                title: "Clear Problem-Solving Approach".to_string(),
                description: "You demonstrated a structured way of thinking through challenges and breaking them down into manageable components.".to_string(),
            },
            Strength {
                title: "Good Understanding of Role Requirements".to_string(),
                description: "Your responses show awareness of key responsibilities and stakeholder dynamics in this position.".to_string(),
            },
        ],
        improvements: vec![
            Improvement {
                title: "Provide More Specific Examples".to_string(),
                description: "While your conceptual understanding is good, adding concrete examples from projects, internships, or coursework would strengthen your responses.".to_string(),
                tip: "Use the STAR method (Situation, Task, Action, Result) to structure your examples with specific outcomes and metrics.".to_string(),
            },
            Improvement {
                title: "Demonstrate Industry Knowledge".to_string(),
                description: "Show deeper awareness of current trends, tools, and best practices in your field.".to_string(),
                tip: "Research recent industry developments and mention specific tools or methodologies you've learned about or used.".to_string(),
            },
        ],
        question_analysis: questions
            .iter()
            .enumerate()
            .map(|(index, question)| QuestionAnalysis {
                question_index: index,
                question: question.clone(),
                // Deterministic stand-in for a per-answer score.
                score: 7 + (index as u32 % 3),
                what_worked: vec![
                    "Showed logical thinking process".to_string(),
                    "Understood the core challenge".to_string(),
                    "Considered multiple perspectives".to_string(),
                ],
                could_improve: vec![
                    "Add more specific examples".to_string(),
                    "Mention relevant tools or frameworks".to_string(),
                    "Discuss potential challenges and mitigation".to_string(),
                ],
            })
            .collect(),
        next_steps: NextSteps {
            practice_areas: vec![
                "Behavioral interview techniques (STAR method)".to_string(),
                "Industry-specific case studies".to_string(),
                "Technical knowledge for your role".to_string(),
            ],
            resources: vec![
                "Practice with mock interview platforms".to_string(),
                "Read industry blogs and case studies".to_string(),
                "Join professional communities and forums".to_string(),
            ],
        },
    }
}

pub fn resume_analysis() -> ResumeAnalysis {
    ResumeAnalysis {
        match_score: 72,
        missing_keywords: vec![
            "Python".to_string(),
            "SQL".to_string(),
            "Data Visualization".to_string(),
            "Machine Learning".to_string(),
            "Git".to_string(),
        ],
        improvement_suggestions: vec![
            "Add quantifiable achievements with specific numbers and percentages".to_string(),
            "Include more technical skills relevant to your target role".to_string(),
            "Use stronger action verbs to begin each bullet point".to_string(),
            "Highlight leadership experience and team collaboration".to_string(),
            "Add relevant certifications or courses completed".to_string(),
        ],
        improved_bullet_points: vec![
            "Led cross-functional team of 5 developers to deliver software project 2 weeks ahead of schedule, resulting in 15% cost savings".to_string(),
            "Implemented automated testing framework that reduced bug detection time by 40% and improved code quality metrics".to_string(),
            "Analyzed customer feedback data using SQL and Python, identifying key pain points that led to 25% improvement in user satisfaction".to_string(),
        ],
        overall_feedback: "Your resume shows strong technical foundation and relevant experience. Focus on quantifying your achievements with specific metrics and adding more technical skills relevant to your target role. Consider reorganizing sections to highlight your most relevant experience first.".to_string(),
    }
}

pub fn pitch_feedback() -> PitchFeedback {
    PitchFeedback {
        clarity_score: 78,
        confidence_score: 82,
        filler_words: 2,
        structure_score: 75,
        tone_score: 80,
        improvement_suggestions: vec![
            "Add specific metrics or achievements to strengthen credibility".to_string(),
            "Practice smoother transitions between key points".to_string(),
            "Include a clear call-to-action at the end".to_string(),
            "Reduce hesitation words like 'um' and 'uh'".to_string(),
            "Make your unique value proposition more prominent".to_string(),
        ],
        overall_feedback: "Your elevator pitch demonstrates good fundamentals with a clear structure and confident tone. The content is relevant and shows your passion for the field. To enhance impact, focus on quantifying your achievements and practicing smoother delivery. Your enthusiasm comes through well, which is a significant strength.".to_string(),
        enhanced_version: "Hi, I'm a software engineering student with a passion for creating user-centered applications that solve real problems. I recently developed a task management web app that helped 200+ beta users increase their productivity by 40% through smart deadline tracking and progress visualization. With strong skills in React, Node.js, and user experience design, I'm seeking internship opportunities where I can contribute to meaningful projects while learning from experienced developers. I'd love to discuss how my technical skills and fresh perspective could benefit your team.".to_string(),
    }
}

pub fn roleplay_feedback() -> RoleplayFeedback {
    RoleplayFeedback {
        persuasiveness_score: 80,
        structure_score: 75,
        communication_score: 85,
        improvement_suggestions: vec![
            "Use the STAR method (Situation, Task, Action, Result) for more structured responses".to_string(),
            "Include specific metrics or outcomes to strengthen credibility".to_string(),
            "Practice smoother transitions between different parts of your answer".to_string(),
        ],
        strengths_identified: vec![
            "Clear and confident communication style".to_string(),
            "Good understanding of professional workplace dynamics".to_string(),
            "Shows accountability and problem-solving mindset".to_string(),
        ],
        overall_feedback: "Your response demonstrates solid professional communication skills and good awareness of workplace dynamics. You show confidence in your approach and provide practical solutions. To enhance your responses, focus on using structured frameworks like STAR and include more specific examples with measurable outcomes.".to_string(),
    }
}

pub fn soft_skill_feedback() -> SoftSkillFeedback {
    SoftSkillFeedback {
        empathy_score: 85,
        structure_score: 78,
        relevance_score: 82,
        improvement_suggestions: vec![
            "Consider acknowledging the emotional impact on all parties involved".to_string(),
            "Add more specific steps or examples to demonstrate your approach".to_string(),
            "Include how you would follow up to ensure the solution was effective".to_string(),
        ],
        strengths_identified: vec![
            "Shows clear understanding of the situation".to_string(),
            "Demonstrates proactive communication approach".to_string(),
            "Displays good problem-solving mindset".to_string(),
        ],
        overall_feedback: "Your response shows strong soft skills fundamentals with good empathy and practical thinking. You demonstrate understanding of interpersonal dynamics and show a collaborative approach to problem-solving. To enhance your response, consider adding more specific examples and follow-up strategies.".to_string(),
    }
}
