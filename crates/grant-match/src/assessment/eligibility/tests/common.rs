use crate::assessment::answers::{AnswerStore, AnswerValue};
use crate::assessment::catalog::ProgramId;
use crate::assessment::eligibility::{evaluate, Eligibility, EligibilityResult};

pub(super) fn flag(value: bool) -> AnswerValue {
    AnswerValue::Flag(value)
}

pub(super) fn choice(value: &str) -> AnswerValue {
    AnswerValue::choice(value)
}

pub(super) fn pick(values: &[&str]) -> AnswerValue {
    AnswerValue::selection(values.iter().copied())
}

pub(super) fn answers(entries: Vec<(&str, AnswerValue)>) -> AnswerStore {
    AnswerStore::from_entries(entries).expect("fixture answers are well formed")
}

/// A seed-stage Australian AI company that clears every gate in the catalog.
pub(super) fn strong_candidate() -> AnswerStore {
    answers(vec![
        ("company_stage", choice("early_revenue")),
        ("australian_company", flag(true)),
        ("turnover", choice("under_1m")),
        ("years_operating", choice("1_to_3")),
        ("location", choice("vic")),
        ("rd_activities", flag(true)),
        ("rd_spend", choice("100k_to_500k")),
        ("hypothesis_documentation", flag(false)),
        ("ai_focus", pick(&["fine_tuning", "integration"])),
        ("nrf_sector", pick(&["enabling", "medical"])),
        ("research_partnerships", choice("active")),
        ("industry_partners", flag(true)),
        ("export_plans", choice("planning")),
        ("market_validation", choice("pilots")),
        ("cofunding_capacity", choice("50k_to_250k")),
        ("financial_records", flag(true)),
        ("team_capacity", choice("moderate")),
        ("timeline_urgency", choice("immediate")),
    ])
}

pub(super) fn result(eligibility: &Eligibility, program: ProgramId) -> &EligibilityResult {
    eligibility
        .get(program)
        .unwrap_or_else(|| panic!("{program} missing from eligibility map"))
}

pub(super) fn evaluate_entries(entries: Vec<(&str, AnswerValue)>) -> Eligibility {
    evaluate(&answers(entries))
}
