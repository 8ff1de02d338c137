use serde::{Deserialize, Serialize};
use std::fmt;

/// Questionnaire sections. Each maps to exactly one wizard step, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    CompanyProfile,
    RdActivities,
    Technology,
    Partnerships,
    Market,
    Financial,
    Team,
}

impl QuestionCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::CompanyProfile,
            Self::RdActivities,
            Self::Technology,
            Self::Partnerships,
            Self::Market,
            Self::Financial,
            Self::Team,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CompanyProfile => "Company Profile",
            Self::RdActivities => "R&D Activities",
            Self::Technology => "Technology",
            Self::Partnerships => "Partnerships",
            Self::Market => "Market",
            Self::Financial => "Financial",
            Self::Team => "Team",
        }
    }

    pub const fn step(self) -> usize {
        self as usize
    }

    pub fn from_step(step: usize) -> Option<Self> {
        Self::ordered().get(step).copied()
    }
}

/// Input modality, which also fixes the shape of the stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Boolean,
    Single,
    Multi,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Boolean => "a yes/no flag",
            Self::Single => "a single option",
            Self::Multi => "a list of options",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    CompanyStage,
    AustralianCompany,
    Turnover,
    YearsOperating,
    Location,
    RdActivities,
    RdSpend,
    HypothesisDocumentation,
    AiFocus,
    NrfSector,
    ResearchPartnerships,
    IndustryPartners,
    ExportPlans,
    MarketValidation,
    CofundingCapacity,
    FinancialRecords,
    TeamCapacity,
    TimelineUrgency,
}

impl QuestionId {
    pub const fn key(self) -> &'static str {
        match self {
            Self::CompanyStage => "company_stage",
            Self::AustralianCompany => "australian_company",
            Self::Turnover => "turnover",
            Self::YearsOperating => "years_operating",
            Self::Location => "location",
            Self::RdActivities => "rd_activities",
            Self::RdSpend => "rd_spend",
            Self::HypothesisDocumentation => "hypothesis_documentation",
            Self::AiFocus => "ai_focus",
            Self::NrfSector => "nrf_sector",
            Self::ResearchPartnerships => "research_partnerships",
            Self::IndustryPartners => "industry_partners",
            Self::ExportPlans => "export_plans",
            Self::MarketValidation => "market_validation",
            Self::CofundingCapacity => "cofunding_capacity",
            Self::FinancialRecords => "financial_records",
            Self::TeamCapacity => "team_capacity",
            Self::TimelineUrgency => "timeline_urgency",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        QUESTIONS
            .iter()
            .map(|question| question.id)
            .find(|id| id.key() == value.trim())
    }

    pub fn question(self) -> &'static Question {
        &QUESTIONS[self as usize]
    }

    pub fn kind(self) -> QuestionKind {
        self.question().kind
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub category: QuestionCategory,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [QuestionOption],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<&'static str>,
    pub required: bool,
}

impl Question {
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|option| option.value == value)
    }
}

/// Questions rendered on a wizard step; empty past the last questionnaire step.
pub fn questions_for_step(step: usize) -> Vec<&'static Question> {
    match QuestionCategory::from_step(step) {
        Some(category) => QUESTIONS
            .iter()
            .filter(|question| question.category == category)
            .collect(),
        None => Vec::new(),
    }
}

const fn opt(value: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption {
        value,
        label,
        description: None,
    }
}

const fn described(
    value: &'static str,
    label: &'static str,
    description: &'static str,
) -> QuestionOption {
    QuestionOption {
        value,
        label,
        description: Some(description),
    }
}

pub static QUESTIONS: [Question; 18] = [
    Question {
        id: QuestionId::CompanyStage,
        category: QuestionCategory::CompanyProfile,
        prompt: "What stage is your company at?",
        kind: QuestionKind::Single,
        options: &[
            described("idea", "Idea Stage", "Concept only, no product yet"),
            described("mvp", "MVP/Prototype", "Working prototype or early product"),
            described("early_revenue", "Early Revenue", "Some customers, <$500K revenue"),
            described("growth", "Growth Stage", "$500K+ revenue, scaling"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::AustralianCompany,
        category: QuestionCategory::CompanyProfile,
        prompt: "Is your company registered in Australia with an ACN?",
        kind: QuestionKind::Boolean,
        options: &[],
        help: None,
        required: true,
    },
    Question {
        id: QuestionId::Turnover,
        category: QuestionCategory::CompanyProfile,
        prompt: "What is your annual turnover?",
        kind: QuestionKind::Single,
        options: &[
            opt("under_1m", "Under $1M"),
            opt("1m_to_10m", "$1M - $10M"),
            opt("10m_to_20m", "$10M - $20M"),
            opt("over_20m", "Over $20M"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::YearsOperating,
        category: QuestionCategory::CompanyProfile,
        prompt: "How long has your company been operating?",
        kind: QuestionKind::Single,
        options: &[
            opt("under_1", "Less than 1 year"),
            opt("1_to_3", "1-3 years"),
            opt("over_3", "More than 3 years"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::Location,
        category: QuestionCategory::CompanyProfile,
        prompt: "Where is your company primarily based?",
        kind: QuestionKind::Single,
        options: &[
            opt("vic", "Victoria"),
            opt("nsw", "New South Wales"),
            opt("qld", "Queensland"),
            opt("other", "Other Australian state/territory"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::RdActivities,
        category: QuestionCategory::RdActivities,
        prompt: "Does your work involve experimental activities with uncertain outcomes?",
        kind: QuestionKind::Boolean,
        options: &[],
        help: Some("Activities where you don't know if the outcome will work, involving technical uncertainty"),
        required: false,
    },
    Question {
        id: QuestionId::RdSpend,
        category: QuestionCategory::RdActivities,
        prompt: "What is your estimated annual R&D spending?",
        kind: QuestionKind::Single,
        options: &[
            opt("under_20k", "Under $20K"),
            opt("20k_to_100k", "$20K - $100K"),
            opt("100k_to_500k", "$100K - $500K"),
            opt("over_500k", "Over $500K"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::HypothesisDocumentation,
        category: QuestionCategory::RdActivities,
        prompt: "Do you document hypotheses BEFORE conducting experiments?",
        kind: QuestionKind::Boolean,
        options: &[],
        help: Some("Critical for R&D Tax claims - must have dated records showing hypothesis before work"),
        required: false,
    },
    Question {
        id: QuestionId::AiFocus,
        category: QuestionCategory::Technology,
        prompt: "What AI/ML activities are you engaged in?",
        kind: QuestionKind::Multi,
        options: &[
            opt("model_development", "Novel model/algorithm development"),
            opt("fine_tuning", "Fine-tuning models for new applications"),
            opt("integration", "AI system integration"),
            opt("api_usage", "Using AI APIs (OpenAI, Claude, etc.)"),
            opt("none", "No AI/ML focus"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::NrfSector,
        category: QuestionCategory::Technology,
        prompt: "Which National Reconstruction Fund priority areas align with your work?",
        kind: QuestionKind::Multi,
        options: &[
            opt("medical", "Medical science & health tech"),
            opt("renewables", "Renewables & low emission tech"),
            opt("manufacturing", "Advanced manufacturing"),
            opt("agriculture", "Agriculture value-add"),
            opt("defence", "Defence capability"),
            opt("enabling", "Enabling capabilities (software/AI)"),
            opt("none", "None of the above"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::ResearchPartnerships,
        category: QuestionCategory::Partnerships,
        prompt: "Do you have existing relationships with research institutions?",
        kind: QuestionKind::Single,
        options: &[
            opt("none", "No existing relationships"),
            opt("informal", "Informal connections only"),
            opt("active", "Active collaboration discussions"),
            opt("formal", "Formal research partnership in place"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::IndustryPartners,
        category: QuestionCategory::Partnerships,
        prompt: "Do you have industry partners (other companies) for collaborative projects?",
        kind: QuestionKind::Boolean,
        options: &[],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::ExportPlans,
        category: QuestionCategory::Market,
        prompt: "Are you planning to export or expand internationally?",
        kind: QuestionKind::Single,
        options: &[
            opt("no", "No international plans"),
            opt("considering", "Considering but not active"),
            opt("planning", "Actively planning export strategy"),
            opt("exporting", "Already exporting"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::MarketValidation,
        category: QuestionCategory::Market,
        prompt: "What level of market validation do you have?",
        kind: QuestionKind::Single,
        options: &[
            opt("none", "No validation yet"),
            opt("interviews", "Customer interviews only"),
            opt("pilots", "Pilot customers or trials"),
            opt("revenue", "Paying customers"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::CofundingCapacity,
        category: QuestionCategory::Financial,
        prompt: "Can you provide matched co-funding for grants?",
        kind: QuestionKind::Single,
        options: &[
            opt("none", "No co-funding capacity"),
            opt("up_to_50k", "Up to $50K"),
            opt("50k_to_250k", "$50K - $250K"),
            opt("over_250k", "Over $250K"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::FinancialRecords,
        category: QuestionCategory::Financial,
        prompt: "Do you have audited/reviewed financial statements?",
        kind: QuestionKind::Boolean,
        options: &[],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::TeamCapacity,
        category: QuestionCategory::Team,
        prompt: "What is your team's capacity for grant applications?",
        kind: QuestionKind::Single,
        options: &[
            opt("minimal", "Minimal - founders stretched thin"),
            opt("moderate", "Moderate - some bandwidth available"),
            opt("dedicated", "Can dedicate significant time"),
            opt("resourced", "Have dedicated grants/finance person"),
        ],
        help: None,
        required: false,
    },
    Question {
        id: QuestionId::TimelineUrgency,
        category: QuestionCategory::Team,
        prompt: "How urgent is your funding need?",
        kind: QuestionKind::Single,
        options: &[
            opt("immediate", "Immediate (0-3 months)"),
            opt("soon", "Soon (3-6 months)"),
            opt("planned", "Planned (6-12 months)"),
            opt("opportunistic", "Opportunistic - no urgency"),
        ],
        help: None,
        required: false,
    },
];
