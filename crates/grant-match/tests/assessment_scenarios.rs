use grant_match::assessment::catalog::{ProgramId, QuestionId, QuestionKind, PROGRAMS, QUESTIONS};
use grant_match::assessment::{evaluate, summarize, AnswerStore, AnswerValue, ChecklistState};

fn answers_from_json(json: &str) -> AnswerStore {
    AnswerStore::from_json(json).expect("answers json is valid")
}

#[test]
fn top_rd_spend_with_documented_hypotheses_scores_full_marks() {
    let answers = answers_from_json(
        r#"{
            "australian_company": true,
            "rd_spend": "over_500k",
            "rd_activities": true,
            "hypothesis_documentation": true
        }"#,
    );

    let eligibility = evaluate(&answers);
    let rdti = eligibility.get(ProgramId::Rdti).expect("rdti evaluated");
    assert!(rdti.eligible);
    assert_eq!(rdti.score, 100);
    assert!(rdti.reasons.is_empty());
}

#[test]
fn foreign_company_fails_every_program_on_residency() {
    let eligibility = evaluate(&answers_from_json(r#"{"australian_company": false}"#));

    assert_eq!(eligibility.len(), PROGRAMS.len());
    for result in eligibility.iter() {
        assert!(!result.eligible, "{} should be ineligible", result.program);
        assert_eq!(result.score, 0);
        assert!(
            result
                .reasons
                .iter()
                .any(|reason| reason == "Must be Australian company"),
            "{} is missing the residency reason",
            result.program
        );
    }
}

#[test]
fn large_turnover_blocks_igp_even_when_nrf_aligned() {
    let eligibility = evaluate(&answers_from_json(
        r#"{"australian_company": true, "turnover": "over_20m", "nrf_sector": ["enabling"]}"#,
    ));

    let igp = eligibility.get(ProgramId::Igp).expect("igp evaluated");
    assert!(!igp.eligible);
    assert_eq!(igp.reasons, vec!["Turnover must be under $20M".to_string()]);
}

#[test]
fn formal_research_partner_with_large_cofunding_maxes_crcp() {
    let eligibility = evaluate(&answers_from_json(
        r#"{
            "australian_company": true,
            "research_partnerships": "formal",
            "industry_partners": true,
            "cofunding_capacity": "over_250k"
        }"#,
    ));

    assert!(eligibility.is_eligible(ProgramId::Crcp));
    assert_eq!(eligibility.score(ProgramId::Crcp), 100);
}

#[test]
fn empty_answers_produce_no_funding() {
    let eligibility = evaluate(&AnswerStore::new());

    assert_eq!(eligibility.eligible().count(), 0);
    let summary = summarize(&eligibility);
    assert_eq!(summary.eligible_count, 0);
    assert_eq!(summary.potential_funding_estimate, 0);
}

#[test]
fn half_checked_checklist_reports_fifty_percent() {
    let checklist = ChecklistState::from_json(
        r#"{
            "acn": true, "abn": true, "ip_ownership": true,
            "financials": true, "bank_statements": true, "code_repos": true,
            "loi": true, "research_mou": true, "rd_logs": false
        }"#,
    )
    .expect("checklist json is valid");

    let readiness = checklist.readiness();
    assert_eq!(readiness.percent, 50);
    assert_eq!(readiness.critical_fraction(), (3, 6));
}

#[test]
fn answers_file_rejects_unknown_questions_and_wrong_shapes() {
    let err = AnswerStore::from_json(r#"{"headcount": "12"}"#).expect_err("unknown question");
    assert!(err.to_string().contains("headcount"));

    let err = AnswerStore::from_json(r#"{"ai_focus": "fine_tuning"}"#).expect_err("wrong shape");
    assert!(err.to_string().contains("ai_focus"));
}

#[test]
fn unlisted_option_values_fail_closed() {
    let mut answers = AnswerStore::new();
    answers
        .set(QuestionId::AustralianCompany, AnswerValue::Flag(true))
        .expect("valid flag");
    answers
        .set(QuestionId::ExportPlans, AnswerValue::choice("someday"))
        .expect("shape is valid even if the option is not");
    answers
        .set(QuestionId::Turnover, AnswerValue::choice("under_1m"))
        .expect("valid choice");

    let eligibility = evaluate(&answers);
    let emdg = eligibility.get(ProgramId::Emdg).expect("emdg evaluated");
    assert!(!emdg.eligible);
    assert_eq!(
        emdg.reasons,
        vec!["Must be actively planning/executing export".to_string()]
    );
}

#[test]
fn every_catalog_question_round_trips_through_the_store() {
    let mut answers = AnswerStore::new();
    for question in QUESTIONS.iter() {
        let value = match question.kind {
            QuestionKind::Boolean => AnswerValue::Flag(true),
            QuestionKind::Single => AnswerValue::choice(question.options[0].value),
            QuestionKind::Multi => AnswerValue::selection([question.options[0].value]),
        };
        answers.set(question.id, value).expect("catalog shape");
    }
    assert_eq!(answers.len(), QUESTIONS.len());
    assert_eq!(evaluate(&answers).len(), 6);
}
