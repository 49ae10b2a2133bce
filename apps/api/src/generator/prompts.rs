// All LLM prompt constants and builders for the feedback generator.
// Every prompt instructs the model to return the exact JSON shape the
// corresponding model struct deserializes.

use crate::models::role::RoleInfo;

pub const QUESTION_SYSTEM: &str = "\
You are an expert interview coach specializing in entry-level tech and business roles. \
Generate realistic, practical interview questions that help assess candidates' \
potential and thinking process. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const INTERVIEW_FEEDBACK_SYSTEM: &str = "\
You are a senior hiring manager and interview coach with expertise in evaluating \
entry-level candidates. Provide detailed, constructive feedback that helps candidates \
improve while recognizing their potential. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const RESUME_SYSTEM: &str = "\
You are an expert resume reviewer and career coach. Provide specific, actionable \
feedback that makes resumes stronger for entry-level applicants. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const PITCH_SYSTEM: &str = "\
You are an expert communication coach specializing in elevator pitches and \
professional presentations. Provide detailed, actionable feedback to help candidates \
improve their pitch delivery and impact. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const ROLEPLAY_SYSTEM: &str = "\
You are an experienced HR interviewer evaluating behavioral responses. Provide \
constructive feedback on persuasiveness, structure, and communication. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

pub const SOFT_SKILL_SYSTEM: &str = "\
You are a workplace soft-skills coach evaluating scenario responses for empathy, \
structure, and relevance. Provide constructive, encouraging feedback. \
You MUST respond with valid JSON only — no markdown fences, no explanations.";

const QUESTION_TEMPLATE: &str = r#"Generate 5 interview questions for a {title} entry-level position.

The questions should be:
- Appropriate for freshers and recent graduates
- Focused on practical scenarios they might face in the role
- Testing both technical knowledge and soft skills
- Realistic for someone with 0-2 years of experience

Role context: {description}

Return the response as JSON in this exact format:
{
  "questions": [
    "Question 1 text here",
    "Question 2 text here",
    "Question 3 text here",
    "Question 4 text here",
    "Question 5 text here"
  ]
}"#;

pub fn question_prompt(info: &RoleInfo) -> String {
    QUESTION_TEMPLATE
        .replace("{title}", info.title)
        .replace("{description}", info.description)
}

const INTERVIEW_FEEDBACK_FORMAT: &str = r#"Provide comprehensive feedback in this exact JSON format:
{
  "overallScore": number (0-100),
  "grade": "letter grade (A+, A, A-, B+, B, B-, C+, C, C-, D, F)",
  "communication": number (0-5, one decimal place),
  "strengths": [
    {
      "title": "Strength name",
      "description": "Detailed explanation of what they did well"
    }
  ],
  "improvements": [
    {
      "title": "Area for improvement",
      "description": "What needs work and why it matters",
      "tip": "Specific actionable advice"
    }
  ],
  "questionAnalysis": [
    {
      "questionIndex": number,
      "question": "question text",
      "score": number (0-10),
      "whatWorked": ["point 1", "point 2", "point 3"],
      "couldImprove": ["point 1", "point 2", "point 3"]
    }
  ],
  "nextSteps": {
    "practiceAreas": ["area 1", "area 2", "area 3"],
    "resources": ["resource 1", "resource 2", "resource 3"]
  }
}

Focus on:
- Constructive, encouraging feedback
- Specific, actionable improvements
- Recognition of effort and potential
- Entry-level appropriate expectations
- Real-world applicability"#;

pub fn interview_feedback_prompt(
    info: &RoleInfo,
    questions: &[String],
    responses: &[String],
) -> String {
    let mut transcript = String::new();
    for (i, question) in questions.iter().enumerate() {
        let response = responses
            .get(i)
            .map(String::as_str)
            .filter(|r| !r.is_empty())
            .unwrap_or("No response provided");
        transcript.push_str(&format!(
            "\nQuestion {}: {}\nResponse: {}\n",
            i + 1,
            question,
            response
        ));
    }

    format!(
        "Analyze these interview responses for a {title} position and provide detailed feedback.\n\n\
         Role: {title}\nDescription: {description}\n\n\
         Questions and Responses:\n{transcript}\n\n{format}",
        title = info.title,
        description = info.description,
        transcript = transcript,
        format = INTERVIEW_FEEDBACK_FORMAT,
    )
}

const RESUME_FORMAT: &str = r#"Provide analysis in this exact JSON format:
{
  "matchScore": number (0-100),
  "missingKeywords": ["keyword1", "keyword2", "keyword3"] (5-8 important keywords),
  "improvementSuggestions": [
    "suggestion1",
    "suggestion2",
    "suggestion3",
    "suggestion4",
    "suggestion5"
  ] (specific actionable improvements),
  "improvedBulletPoints": [
    "Enhanced bullet point 1",
    "Enhanced bullet point 2",
    "Enhanced bullet point 3"
  ] (rewrite 3 existing experience bullets to be more impactful),
  "overallFeedback": "comprehensive summary and main recommendations for improvement"
}"#;

pub fn resume_prompt(resume_text: &str, job_description: Option<&str>) -> String {
    match job_description {
        Some(jd) => format!(
            "Analyze this resume against the provided job description and provide detailed feedback.\n\n\
             RESUME:\n{resume_text}\n\nJOB DESCRIPTION:\n{jd}\n\n\
             matchScore measures how well the resume matches the job requirements; \
             missingKeywords are important JD keywords absent from the resume.\n\n{RESUME_FORMAT}"
        ),
        None => format!(
            "Analyze this resume and provide detailed improvement feedback.\n\n\
             RESUME:\n{resume_text}\n\n\
             matchScore is a general resume quality score; missingKeywords are \
             important industry skills that could strengthen the resume.\n\n{RESUME_FORMAT}"
        ),
    }
}

pub fn pitch_prompt(pitch_text: &str) -> String {
    format!(
        r#"Analyze this elevator pitch and provide detailed feedback:

PITCH:
"{pitch_text}"

Evaluate the pitch on these criteria and provide analysis in this exact JSON format:
{{
  "clarityScore": number (0-100, how clear and understandable the message is),
  "confidenceScore": number (0-100, how confident and assertive the tone is),
  "fillerWords": number (count of filler words like um, uh, like, you know),
  "structureScore": number (0-100, how well organized and logical the flow is),
  "toneScore": number (0-100, how professional and engaging the tone is),
  "improvementSuggestions": [
    "specific suggestion 1",
    "specific suggestion 2",
    "specific suggestion 3",
    "specific suggestion 4",
    "specific suggestion 5"
  ] (actionable improvements for better pitch delivery),
  "overallFeedback": "comprehensive summary of strengths and areas for improvement",
  "enhancedVersion": "rewritten version of the pitch incorporating improvements while maintaining the original intent and personality"
}}

Focus on practical advice for delivery, content structure, and professional impact."#
    )
}

pub fn roleplay_prompt(topic: &str, question: &str, response: &str) -> String {
    format!(
        r#"Analyze this HR roleplay response in the context of the given topic:

TOPIC: "{topic}"
QUESTION: "{question}"
RESPONSE: "{response}"

Evaluate the response on these criteria and provide analysis in this exact JSON format:
{{
  "persuasivenessScore": number (0-100, how convincing and compelling the response is),
  "structureScore": number (0-100, how well organized and logical the response is),
  "communicationScore": number (0-100, how clear, professional, and effective the communication is),
  "improvementSuggestions": [
    "specific suggestion 1",
    "specific suggestion 2",
    "specific suggestion 3"
  ] (actionable improvements for better HR interview performance),
  "strengthsIdentified": [
    "strength 1",
    "strength 2",
    "strength 3"
  ] (what the candidate did well),
  "overallFeedback": "comprehensive summary of the response quality and main recommendations"
}}"#
    )
}

pub fn soft_skill_prompt(question: &str, response: &str) -> String {
    format!(
        r#"Analyze this soft skills response to a scenario-based question:

QUESTION: "{question}"
RESPONSE: "{response}"

Evaluate the response on these criteria and provide analysis in this exact JSON format:
{{
  "empathyScore": number (0-100, how well the response considers others' feelings and perspectives),
  "structureScore": number (0-100, how well organized and logical the response is),
  "relevanceScore": number (0-100, how directly the response addresses the scenario),
  "improvementSuggestions": [
    "specific suggestion 1",
    "specific suggestion 2",
    "specific suggestion 3"
  ] (actionable improvements),
  "strengthsIdentified": [
    "strength 1",
    "strength 2",
    "strength 3"
  ] (what the candidate did well),
  "overallFeedback": "comprehensive summary of the response quality and main recommendations"
}}"#
    )
}
