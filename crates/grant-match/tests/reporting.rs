use grant_match::assessment::catalog::ProgramId;
use grant_match::assessment::report::{FundingLayer, REALITY_CHECK, STACKING_RULES};
use grant_match::assessment::{AnswerStore, AssessmentReport, ChecklistState};
use serde_json::Value;

fn sample_answers() -> AnswerStore {
    AnswerStore::from_json(
        r#"{
            "australian_company": true,
            "turnover": "1m_to_10m",
            "rd_activities": true,
            "rd_spend": "over_500k",
            "hypothesis_documentation": true,
            "nrf_sector": ["manufacturing"],
            "market_validation": "revenue",
            "cofunding_capacity": "none",
            "export_plans": "exporting"
        }"#,
    )
    .expect("valid answers")
}

#[test]
fn report_ranks_eligible_programs_by_score() {
    let report = AssessmentReport::build(&sample_answers(), &ChecklistState::new());

    let ranked: Vec<(ProgramId, u16)> = report
        .eligible()
        .map(|result| (result.program, result.score))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (ProgramId::Rdti, 100),
            (ProgramId::Csiro, 85),
            (ProgramId::Emdg, 85),
            (ProgramId::Igp, 80),
        ]
    );
    assert_eq!(report.summary.eligible_count, 4);
    assert_eq!(report.summary.potential_funding_estimate, 830_000);
}

#[test]
fn cofunding_constraints_live_in_stacking_rules_not_warnings() {
    let report = AssessmentReport::build(&sample_answers(), &ChecklistState::new());

    assert!(report.eligible().all(|result| result.warnings.is_empty()));
    assert!(report
        .stacking_rules
        .cannot_stack
        .contains(&"IGP requires CASH co-funding (not in-kind)"));
}

#[test]
fn funding_stack_marks_eligible_layers() {
    let report = AssessmentReport::build(&sample_answers(), &ChecklistState::new());

    let layers: Vec<(FundingLayer, Vec<ProgramId>)> = report
        .funding_stack
        .iter()
        .map(|layer| (layer.layer, layer.eligible_programs.clone()))
        .collect();
    assert_eq!(
        layers,
        vec![
            (FundingLayer::Foundation, vec![ProgramId::Rdti, ProgramId::Csiro]),
            (FundingLayer::Growth, vec![ProgramId::Igp]),
            (FundingLayer::Scale, vec![ProgramId::Emdg]),
        ]
    );
    assert_eq!(STACKING_RULES.can_stack.len(), 4);
}

#[test]
fn reality_check_travels_with_every_report() {
    let report = AssessmentReport::build(&sample_answers(), &ChecklistState::new());

    assert_eq!(report.reality_check.worth_pursuing.len(), 3);
    assert_eq!(report.reality_check.potential_distractions.len(), 3);
    assert!(REALITY_CHECK
        .potential_distractions
        .contains(&"CRC-P without research partners (6-12mo build)"));
    assert!(report.reality_check.reminder.starts_with("$100K customer contract"));

    let json: Value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(
        json["reality_check"]["worth_pursuing"][0],
        "R&D Tax: Essential if doing genuine R&D"
    );
}

#[test]
fn report_serializes_for_json_output() {
    let checklist = ChecklistState::from_entries([("acn", true), ("rd_logs", true)])
        .expect("catalog ids");
    let report = AssessmentReport::build(&sample_answers(), &checklist);

    let json: Value = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["summary"]["eligible_count"], 4);
    assert_eq!(json["ranked"][0]["program"], "rdti");
    assert_eq!(json["readiness"]["critical_checked"], 2);
    assert_eq!(json["readiness"]["percent"], 13);
    assert_eq!(json["funding_stack"][1]["layer"], "growth");
    assert!(json["plan"]["immediate"].is_array());
}
