//! Static scenario banks for the roleplay and soft-skill surfaces.
//!
//! These are served locally without a generator call; only the analysis of
//! the user's answer goes upstream.

use rand::seq::SliceRandom;

/// One HR roleplay topic with its two paired questions.
#[derive(Debug, Clone, Copy)]
pub struct RoleplayScenario {
    pub topic: &'static str,
    pub questions: [&'static str; 2],
}

pub static HR_SCENARIOS: [RoleplayScenario; 6] = [
    RoleplayScenario {
        topic: "Handling Workplace Pressure",
        questions: [
            "Tell me about a time when you had to handle multiple competing priorities with tight deadlines. How did you manage the pressure?",
            "How would you communicate with your team and supervisor when you realize you might not meet a critical deadline?",
        ],
    },
    RoleplayScenario {
        topic: "Team Leadership and Collaboration",
        questions: [
            "Describe a situation where you had to lead a team through a challenging project. What was your approach?",
            "How would you handle a situation where team members have conflicting opinions about the project direction?",
        ],
    },
    RoleplayScenario {
        topic: "Problem-Solving and Innovation",
        questions: [
            "Tell me about a time when you identified a problem that others hadn't noticed. How did you address it?",
            "How would you approach implementing a new process or technology that your team is resistant to adopting?",
        ],
    },
    RoleplayScenario {
        topic: "Communication and Conflict Resolution",
        questions: [
            "Describe a time when you had to deliver difficult news to a client or stakeholder. How did you handle it?",
            "How would you resolve a situation where there's miscommunication between departments affecting your project?",
        ],
    },
    RoleplayScenario {
        topic: "Adaptability and Change Management",
        questions: [
            "Tell me about a time when project requirements changed significantly midway through. How did you adapt?",
            "How would you help your team embrace a major organizational change that affects their daily work?",
        ],
    },
    RoleplayScenario {
        topic: "Professional Development and Growth",
        questions: [
            "Describe a time when you received constructive criticism. How did you use it to improve?",
            "How would you approach mentoring a junior colleague who is struggling with their responsibilities?",
        ],
    },
];

pub static SOFT_SKILL_SCENARIOS: [&str; 10] = [
    "How would you handle a situation where a team member consistently misses deadlines and it's affecting the project timeline?",
    "Describe how you would approach giving constructive feedback to a colleague who seems resistant to change.",
    "You notice a teammate is struggling with their workload but hasn't asked for help. How would you handle this situation?",
    "How would you mediate a conflict between two team members who have different approaches to solving a problem?",
    "Describe how you would motivate a team during a particularly challenging project with tight deadlines.",
    "How would you handle a situation where you need to deliver disappointing news to stakeholders?",
    "You're working with a remote team member who seems disengaged during meetings. How would you address this?",
    "How would you approach building trust with a new team when joining a project mid-way?",
    "Describe how you would handle receiving criticism about your work from a supervisor.",
    "How would you encourage innovation and creative thinking within your team while meeting deadlines?",
];

/// Number of scenarios handed out per soft-skill practice round.
pub const SOFT_SKILL_QUESTION_COUNT: usize = 3;

pub fn pick_roleplay_scenario() -> &'static RoleplayScenario {
    HR_SCENARIOS
        .choose(&mut rand::thread_rng())
        .unwrap_or(&HR_SCENARIOS[0])
}

pub fn pick_soft_skill_questions() -> Vec<String> {
    SOFT_SKILL_SCENARIOS
        .choose_multiple(&mut rand::thread_rng(), SOFT_SKILL_QUESTION_COUNT)
        .map(|scenario| scenario.to_string())
        .collect()
}
