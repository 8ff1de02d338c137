mod stack;
mod summary;

pub use stack::{
    funding_stack, FundingLayer, RealityCheck, StackLayerView, StackingRules, REALITY_CHECK,
    STACKING_RULES,
};
pub use summary::{nominal_funding, summarize, EligibilitySummary};

use chrono::NaiveDate;
use serde::Serialize;

use super::answers::AnswerStore;
use super::checklist::{ChecklistState, ReadinessScore};
use super::eligibility::{evaluate, EligibilityResult};
use super::plan::{generate_plan, ActionPlan, ScheduledAction};

/// Everything the results screen shows, recomputed from the current answers.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub summary: EligibilitySummary,
    pub ranked: Vec<EligibilityResult>,
    pub plan: ActionPlan,
    pub readiness: ReadinessScore,
    pub funding_stack: Vec<StackLayerView>,
    pub stacking_rules: StackingRules,
    pub reality_check: RealityCheck,
}

impl AssessmentReport {
    pub fn build(answers: &AnswerStore, checklist: &ChecklistState) -> Self {
        let eligibility = evaluate(answers);
        let plan = generate_plan(&eligibility, answers);

        Self {
            summary: summarize(&eligibility),
            ranked: eligibility.ranked().into_iter().cloned().collect(),
            plan,
            readiness: checklist.readiness(),
            funding_stack: funding_stack(&eligibility),
            stacking_rules: STACKING_RULES,
            reality_check: REALITY_CHECK,
        }
    }

    pub fn eligible(&self) -> impl Iterator<Item = &EligibilityResult> {
        self.ranked.iter().filter(|result| result.eligible)
    }

    pub fn ineligible(&self) -> impl Iterator<Item = &EligibilityResult> {
        self.ranked.iter().filter(|result| !result.eligible)
    }

    pub fn schedule(&self, plan_start: NaiveDate) -> Vec<ScheduledAction> {
        self.plan.schedule(plan_start)
    }
}
