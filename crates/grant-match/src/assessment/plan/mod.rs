mod export;
mod schedule;
mod templates;

pub use export::write_plan_csv;
pub use schedule::{HorizonWindow, ScheduledAction};
pub use templates::{ActionTemplate, PlanBlueprint, PlanTrigger};

use serde::{Deserialize, Serialize};

use super::answers::AnswerStore;
use super::catalog::ProgramId;
use super::eligibility::Eligibility;
use super::profile::CompanyProfile;

/// The three 30-day windows of the action plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    Immediate,
    ShortTerm,
    MediumTerm,
}

impl Horizon {
    pub const fn ordered() -> [Self; 3] {
        [Self::Immediate, Self::ShortTerm, Self::MediumTerm]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Immediate => "Immediate Actions",
            Self::ShortTerm => "Short-Term Actions",
            Self::MediumTerm => "Medium-Term Actions",
        }
    }

    pub const fn theme(self) -> &'static str {
        match self {
            Self::Immediate => "Foundation & Quick Wins",
            Self::ShortTerm => "Build & Validate",
            Self::MediumTerm => "Execute & Scale",
        }
    }

    /// Inclusive day range, counted from day 1 of the plan.
    pub const fn days(self) -> (u32, u32) {
        match self {
            Self::Immediate => (1, 30),
            Self::ShortTerm => (31, 60),
            Self::MediumTerm => (61, 90),
        }
    }
}

/// Urgency of an action. Display styling only; plan order never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
}

impl Priority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub program: ProgramId,
    pub program_name: &'static str,
    pub action: &'static str,
    pub priority: Priority,
    pub effort: &'static str,
    pub outcome: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionPlan {
    pub immediate: Vec<Action>,
    pub short_term: Vec<Action>,
    pub medium_term: Vec<Action>,
}

impl ActionPlan {
    pub fn horizon(&self, horizon: Horizon) -> &[Action] {
        match horizon {
            Horizon::Immediate => &self.immediate,
            Horizon::ShortTerm => &self.short_term,
            Horizon::MediumTerm => &self.medium_term,
        }
    }

    pub(crate) fn push(&mut self, horizon: Horizon, action: Action) {
        match horizon {
            Horizon::Immediate => self.immediate.push(action),
            Horizon::ShortTerm => self.short_term.push(action),
            Horizon::MediumTerm => self.medium_term.push(action),
        }
    }

    /// Every action paired with its horizon, horizon by horizon.
    pub fn iter(&self) -> impl Iterator<Item = (Horizon, &Action)> {
        Horizon::ordered()
            .into_iter()
            .flat_map(move |horizon| self.horizon(horizon).iter().map(move |a| (horizon, a)))
    }

    pub fn len(&self) -> usize {
        self.immediate.len() + self.short_term.len() + self.medium_term.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the 90-day plan for the eligible programs using the standard blueprint.
pub fn generate_plan(eligibility: &Eligibility, answers: &AnswerStore) -> ActionPlan {
    let profile = CompanyProfile::from_answers(answers);
    PlanBlueprint::standard().generate(eligibility, &profile)
}
