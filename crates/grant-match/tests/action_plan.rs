use chrono::NaiveDate;
use grant_match::assessment::catalog::ProgramId;
use grant_match::assessment::{
    evaluate, generate_plan, write_plan_csv, AnswerStore, AnswerValue, Horizon, Priority,
};

fn strong_candidate() -> AnswerStore {
    AnswerStore::from_json(
        r#"{
            "company_stage": "early_revenue",
            "australian_company": true,
            "turnover": "under_1m",
            "years_operating": "1_to_3",
            "location": "vic",
            "rd_activities": true,
            "rd_spend": "100k_to_500k",
            "hypothesis_documentation": false,
            "ai_focus": ["fine_tuning", "integration"],
            "nrf_sector": ["enabling", "medical"],
            "research_partnerships": "active",
            "industry_partners": true,
            "export_plans": "planning",
            "market_validation": "pilots",
            "cofunding_capacity": "50k_to_250k",
            "financial_records": true,
            "team_capacity": "moderate",
            "timeline_urgency": "immediate"
        }"#,
    )
    .expect("fixture answers are well formed")
}

fn plan_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid plan start")
}

#[test]
fn strong_candidate_gets_every_template() {
    let answers = strong_candidate();
    let eligibility = evaluate(&answers);
    assert_eq!(eligibility.eligible().count(), 6);

    let plan = generate_plan(&eligibility, &answers);
    assert_eq!(plan.len(), 10);
    assert_eq!(plan.immediate.len(), 4);
    assert_eq!(plan.short_term.len(), 3);
    assert_eq!(plan.medium_term.len(), 3);

    let medium: Vec<ProgramId> = plan.medium_term.iter().map(|a| a.program).collect();
    assert_eq!(
        medium,
        vec![ProgramId::Igp, ProgramId::Emdg, ProgramId::Accelerator]
    );
    assert_eq!(
        plan.immediate
            .iter()
            .filter(|action| action.priority == Priority::Critical)
            .count(),
        1
    );
}

#[test]
fn plan_only_mentions_eligible_programs() {
    let answers = AnswerStore::from_json(
        r#"{"australian_company": true, "export_plans": "exporting", "turnover": "10m_to_20m"}"#,
    )
    .expect("valid answers");
    let eligibility = evaluate(&answers);
    let plan = generate_plan(&eligibility, &answers);

    assert_eq!(plan.len(), 1);
    for (horizon, action) in plan.iter() {
        assert_eq!(horizon, Horizon::MediumTerm);
        assert!(eligibility.is_eligible(action.program));
    }
}

#[test]
fn later_urgency_drops_accelerator_application() {
    let mut answers = strong_candidate();
    answers
        .set_by_key("timeline_urgency", AnswerValue::choice("planned"))
        .expect("valid choice");

    let plan = generate_plan(&evaluate(&answers), &answers);
    assert!(plan
        .medium_term
        .iter()
        .all(|action| action.program != ProgramId::Accelerator));
}

#[test]
fn csv_export_lists_scheduled_actions() {
    let answers = AnswerStore::from_json(
        r#"{
            "australian_company": true,
            "rd_spend": "over_500k",
            "rd_activities": true,
            "hypothesis_documentation": false
        }"#,
    )
    .expect("valid answers");
    let plan = generate_plan(&evaluate(&answers), &answers);

    let mut buffer = Vec::new();
    write_plan_csv(&mut buffer, &plan, plan_start()).expect("csv export succeeds");
    let output = String::from_utf8(buffer).expect("csv is utf-8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "horizon,program,action,priority,effort,outcome,starts_on,due_on",
            "immediate,rdti,Engage R&D tax specialist for initial assessment,High,2-4 hours,Understand potential claim value,2025-07-01,2025-07-30",
            "immediate,rdti,Set up R&D documentation system (Jira/Notion + Git),Critical,4-8 hours,Compliant record-keeping for claims,2025-07-01,2025-07-30",
        ]
    );
}

#[test]
fn csv_export_of_empty_plan_keeps_header() {
    let answers = AnswerStore::new();
    let plan = generate_plan(&evaluate(&answers), &answers);

    let mut buffer = Vec::new();
    write_plan_csv(&mut buffer, &plan, plan_start()).expect("csv export succeeds");
    assert_eq!(
        String::from_utf8(buffer).expect("csv is utf-8"),
        "horizon,program,action,priority,effort,outcome,starts_on,due_on\n"
    );
}

#[test]
fn medium_term_window_ends_on_day_ninety() {
    let plan = generate_plan(&evaluate(&strong_candidate()), &strong_candidate());
    let scheduled = plan.schedule(plan_start());

    let last = scheduled.last().expect("plan has actions");
    assert_eq!(last.horizon, Horizon::MediumTerm);
    assert_eq!(
        last.starts_on,
        NaiveDate::from_ymd_opt(2025, 8, 30).expect("valid date")
    );
    assert_eq!(
        last.due_on,
        NaiveDate::from_ymd_opt(2025, 9, 28).expect("valid date")
    );
}

#[test]
fn csiro_expression_of_interest_needs_cofunding() {
    let cases = [
        r#"{"australian_company": true, "turnover": "under_1m", "cofunding_capacity": "none"}"#,
        r#"{"australian_company": true, "turnover": "under_1m"}"#,
    ];

    for json in cases {
        let answers = AnswerStore::from_json(json).expect("valid answers");
        let eligibility = evaluate(&answers);
        assert!(eligibility.is_eligible(ProgramId::Csiro), "{json}");

        let plan = generate_plan(&eligibility, &answers);
        assert!(
            plan.immediate
                .iter()
                .all(|action| action.action != "Submit Expression of Interest to CSIRO Kick-Start"),
            "{json}"
        );
        assert!(
            plan.short_term.iter().any(|action| {
                action.action == "Develop full CSIRO Kick-Start application with facilitator"
            }),
            "{json}"
        );
    }

    let answers = AnswerStore::from_json(
        r#"{"australian_company": true, "turnover": "under_1m", "cofunding_capacity": "up_to_50k"}"#,
    )
    .expect("valid answers");
    let plan = generate_plan(&evaluate(&answers), &answers);
    assert_eq!(
        plan.immediate
            .iter()
            .map(|action| action.action)
            .collect::<Vec<_>>(),
        vec!["Submit Expression of Interest to CSIRO Kick-Start"]
    );
}
