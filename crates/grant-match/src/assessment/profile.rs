//! Typed view of an [`AnswerStore`].
//!
//! Every select answer is parsed into its tier enum. Unanswered questions and option
//! values outside the catalog both come through as `None` (or an empty set), so gates
//! built on the profile fail closed instead of erroring.

use std::collections::BTreeSet;

use serde::Serialize;

use super::answers::AnswerStore;
use super::catalog::QuestionId;

macro_rules! answer_tier {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn from_value(value: &str) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            pub const fn value(self) -> &'static str {
                match self {
                    $(Self::$variant => $value),+
                }
            }
        }
    };
}

answer_tier!(CompanyStage {
    Idea => "idea",
    Mvp => "mvp",
    EarlyRevenue => "early_revenue",
    Growth => "growth",
});

answer_tier!(Turnover {
    Under1m => "under_1m",
    OneTo10m => "1m_to_10m",
    TenTo20m => "10m_to_20m",
    Over20m => "over_20m",
});

answer_tier!(YearsOperating {
    UnderOne => "under_1",
    OneToThree => "1_to_3",
    OverThree => "over_3",
});

answer_tier!(Location {
    Victoria => "vic",
    NewSouthWales => "nsw",
    Queensland => "qld",
    Other => "other",
});

answer_tier!(
    /// Annual R&D spend. `Under20k` sits below the R&D Tax Incentive floor.
    RdSpend {
        Under20k => "under_20k",
        TwentyTo100k => "20k_to_100k",
        HundredTo500k => "100k_to_500k",
        Over500k => "over_500k",
    }
);

answer_tier!(AiFocus {
    ModelDevelopment => "model_development",
    FineTuning => "fine_tuning",
    Integration => "integration",
    ApiUsage => "api_usage",
    NoFocus => "none",
});

answer_tier!(
    /// National Reconstruction Fund priority area. `Unaligned` is the "none of the above"
    /// sentinel and disqualifies alignment even when picked alongside real sectors.
    NrfSector {
        Medical => "medical",
        Renewables => "renewables",
        Manufacturing => "manufacturing",
        Agriculture => "agriculture",
        Defence => "defence",
        Enabling => "enabling",
        Unaligned => "none",
    }
);

answer_tier!(ResearchPartnerships {
    NoRelationship => "none",
    Informal => "informal",
    Active => "active",
    Formal => "formal",
});

answer_tier!(ExportPlans {
    NoPlans => "no",
    Considering => "considering",
    Planning => "planning",
    Exporting => "exporting",
});

answer_tier!(MarketValidation {
    Unvalidated => "none",
    Interviews => "interviews",
    Pilots => "pilots",
    Revenue => "revenue",
});

answer_tier!(CofundingCapacity {
    NoCapacity => "none",
    UpTo50k => "up_to_50k",
    FiftyTo250k => "50k_to_250k",
    Over250k => "over_250k",
});

answer_tier!(TeamCapacity {
    Minimal => "minimal",
    Moderate => "moderate",
    Dedicated => "dedicated",
    Resourced => "resourced",
});

answer_tier!(TimelineUrgency {
    Immediate => "immediate",
    Soon => "soon",
    Planned => "planned",
    Opportunistic => "opportunistic",
});

/// Snapshot of the company as described by the current answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompanyProfile {
    pub stage: Option<CompanyStage>,
    pub australian_company: bool,
    pub turnover: Option<Turnover>,
    pub years_operating: Option<YearsOperating>,
    pub location: Option<Location>,
    pub rd_activities: bool,
    pub rd_spend: Option<RdSpend>,
    pub hypothesis_documentation: bool,
    pub ai_focus: BTreeSet<AiFocus>,
    pub nrf_sectors: BTreeSet<NrfSector>,
    pub research_partnerships: Option<ResearchPartnerships>,
    pub industry_partners: bool,
    pub export_plans: Option<ExportPlans>,
    pub market_validation: Option<MarketValidation>,
    pub cofunding: Option<CofundingCapacity>,
    pub financial_records: bool,
    pub team_capacity: Option<TeamCapacity>,
    pub timeline_urgency: Option<TimelineUrgency>,
}

impl CompanyProfile {
    pub fn from_answers(answers: &AnswerStore) -> Self {
        let choice = |question| answers.choice(question).unwrap_or_default();
        let selections = |question| answers.selections(question).iter().map(String::as_str);

        Self {
            stage: CompanyStage::from_value(choice(QuestionId::CompanyStage)),
            australian_company: answers.flag(QuestionId::AustralianCompany),
            turnover: Turnover::from_value(choice(QuestionId::Turnover)),
            years_operating: YearsOperating::from_value(choice(QuestionId::YearsOperating)),
            location: Location::from_value(choice(QuestionId::Location)),
            rd_activities: answers.flag(QuestionId::RdActivities),
            rd_spend: RdSpend::from_value(choice(QuestionId::RdSpend)),
            hypothesis_documentation: answers.flag(QuestionId::HypothesisDocumentation),
            ai_focus: selections(QuestionId::AiFocus)
                .filter_map(AiFocus::from_value)
                .collect(),
            nrf_sectors: selections(QuestionId::NrfSector)
                .filter_map(NrfSector::from_value)
                .collect(),
            research_partnerships: ResearchPartnerships::from_value(choice(
                QuestionId::ResearchPartnerships,
            )),
            industry_partners: answers.flag(QuestionId::IndustryPartners),
            export_plans: ExportPlans::from_value(choice(QuestionId::ExportPlans)),
            market_validation: MarketValidation::from_value(choice(QuestionId::MarketValidation)),
            cofunding: CofundingCapacity::from_value(choice(QuestionId::CofundingCapacity)),
            financial_records: answers.flag(QuestionId::FinancialRecords),
            team_capacity: TeamCapacity::from_value(choice(QuestionId::TeamCapacity)),
            timeline_urgency: TimelineUrgency::from_value(choice(QuestionId::TimelineUrgency)),
        }
    }

    /// Co-funding counts only when a tier other than "none" was selected.
    pub fn has_cofunding(&self) -> bool {
        matches!(self.cofunding, Some(tier) if tier != CofundingCapacity::NoCapacity)
    }

    pub fn turnover_under_20m(&self) -> bool {
        matches!(self.turnover, Some(tier) if tier != Turnover::Over20m)
    }

    /// At least one priority area picked and the "none" sentinel absent.
    pub fn nrf_aligned(&self) -> bool {
        !self.nrf_sectors.is_empty() && !self.nrf_sectors.contains(&NrfSector::Unaligned)
    }

    pub fn has_market_traction(&self) -> bool {
        matches!(
            self.market_validation,
            Some(MarketValidation::Pilots | MarketValidation::Revenue)
        )
    }
}
