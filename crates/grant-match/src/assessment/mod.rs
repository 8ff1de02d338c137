//! The assessment pipeline: answers feed the eligibility evaluator, whose results
//! drive the 90-day action plan and the aggregate report.

pub mod answers;
pub mod catalog;
pub mod checklist;
pub mod eligibility;
pub mod plan;
pub mod profile;
pub mod report;

pub use answers::{AnswerError, AnswerStore, AnswerValue};
pub use checklist::{ChecklistError, ChecklistState, ReadinessScore};
pub use eligibility::{evaluate, Eligibility, EligibilityResult, ScoreComponent};
pub use plan::{generate_plan, write_plan_csv, Action, ActionPlan, Horizon, Priority};
pub use profile::CompanyProfile;
pub use report::{summarize, AssessmentReport, EligibilitySummary};
