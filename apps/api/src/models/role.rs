use serde::{Deserialize, Serialize};

/// The closed set of practice tracks the product offers.
/// Serialized as the client-facing slugs ("product-management", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeRole {
    ProductManagement,
    AiDataAnalyst,
    QaTesting,
    CustomerSuccess,
    BusinessAnalyst,
}

/// Display metadata for a practice role. Served verbatim to the client by
/// `GET /api/roles` and interpolated into generator prompts.
#[derive(Debug, Clone, Serialize)]
pub struct RoleInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub duration: &'static str,
    pub popularity: &'static str,
    pub gradient: &'static str,
}

impl PracticeRole {
    pub const ALL: [PracticeRole; 5] = [
        PracticeRole::ProductManagement,
        PracticeRole::AiDataAnalyst,
        PracticeRole::QaTesting,
        PracticeRole::CustomerSuccess,
        PracticeRole::BusinessAnalyst,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            PracticeRole::ProductManagement => "product-management",
            PracticeRole::AiDataAnalyst => "ai-data-analyst",
            PracticeRole::QaTesting => "qa-testing",
            PracticeRole::CustomerSuccess => "customer-success",
            PracticeRole::BusinessAnalyst => "business-analyst",
        }
    }

    /// Validation boundary for caller-supplied role strings. Everything past
    /// this point works with the typed identifier.
    pub fn from_slug(slug: &str) -> Option<PracticeRole> {
        match slug {
            "product-management" => Some(PracticeRole::ProductManagement),
            "ai-data-analyst" => Some(PracticeRole::AiDataAnalyst),
            "qa-testing" => Some(PracticeRole::QaTesting),
            "customer-success" => Some(PracticeRole::CustomerSuccess),
            "business-analyst" => Some(PracticeRole::BusinessAnalyst),
            _ => None,
        }
    }

    pub fn info(self) -> &'static RoleInfo {
        match self {
            PracticeRole::ProductManagement => &RoleInfo {
                title: "Product Management",
                description: "Practice feature prioritization, user research, and product strategy questions for APM roles.",
                icon: "lightbulb",
                color: "primary",
                duration: "~15 minutes",
                popularity: "Most Popular",
                gradient: "from-blue-500 to-blue-600",
            },
            PracticeRole::AiDataAnalyst => &RoleInfo {
                title: "AI/Data Analyst",
                description: "Master data interpretation, SQL basics, and analytical thinking for data-driven roles.",
                icon: "chart-bar",
                color: "accent",
                duration: "~20 minutes",
                popularity: "High Demand",
                gradient: "from-orange-500 to-orange-600",
            },
            PracticeRole::QaTesting => &RoleInfo {
                title: "QA Testing",
                description: "Learn test case design, bug reporting, and quality assurance methodologies.",
                icon: "bug",
                color: "success",
                duration: "~12 minutes",
                popularity: "Beginner Friendly",
                gradient: "from-green-500 to-green-600",
            },
            PracticeRole::CustomerSuccess => &RoleInfo {
                title: "Customer Success",
                description: "Practice client relationship management, problem-solving, and communication skills.",
                icon: "handshake",
                color: "purple",
                duration: "~18 minutes",
                popularity: "People-Focused",
                gradient: "from-purple-500 to-purple-600",
            },
            PracticeRole::BusinessAnalyst => &RoleInfo {
                title: "Business Analyst",
                description: "Master process optimization, stakeholder management, and business requirement analysis.",
                icon: "cogs",
                color: "indigo",
                duration: "~16 minutes",
                popularity: "Career Switcher Friendly",
                gradient: "from-indigo-500 to-indigo-600",
            },
        }
    }
}
