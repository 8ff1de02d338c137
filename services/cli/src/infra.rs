use chrono::NaiveDate;
use grant_match::assessment::{AnswerStore, AnswerValue, ChecklistState};
use grant_match::config::OutputFormat;
use grant_match::error::AppError;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_format(raw: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(raw).map_err(|err| err.to_string())
}

pub(crate) fn load_answers(path: &Path) -> Result<AnswerStore, AppError> {
    parse_answers(&fs::read_to_string(path)?)
}

/// A missing checklist path means nothing is checked yet.
pub(crate) fn load_checklist(path: Option<&Path>) -> Result<ChecklistState, AppError> {
    match path {
        Some(path) => parse_checklist(&fs::read_to_string(path)?),
        None => Ok(ChecklistState::new()),
    }
}

/// Malformed JSON is a `Json` error; unknown ids and wrong shapes keep their typed error.
fn parse_answers(raw: &str) -> Result<AnswerStore, AppError> {
    let entries: BTreeMap<String, AnswerValue> = serde_json::from_str(raw)?;
    Ok(AnswerStore::from_entries(entries)?)
}

fn parse_checklist(raw: &str) -> Result<ChecklistState, AppError> {
    let entries: BTreeMap<String, bool> = serde_json::from_str(raw)?;
    Ok(ChecklistState::from_entries(entries)?)
}

/// Render dollar amounts with thousands separators, e.g. `$1,330,000`.
pub(crate) fn format_dollars(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("${grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dollar_amounts() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(80_000), "$80,000");
        assert_eq!(format_dollars(1_330_000), "$1,330,000");
    }

    #[test]
    fn parse_date_trims_input() {
        assert_eq!(
            parse_date(" 2025-07-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 7, 1).expect("valid date"))
        );
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn answer_files_keep_typed_validation_errors() {
        let store = parse_answers(r#"{"australian_company": true, "turnover": "under_1m"}"#)
            .expect("valid answers");
        assert_eq!(store.len(), 2);

        let err = parse_answers(r#"{"favourite_colour": true}"#).expect_err("unknown question");
        assert!(matches!(err, AppError::Answers(_)), "got {err:?}");

        let err = parse_answers(r#"{"australian_company": "yes"}"#).expect_err("wrong shape");
        assert!(matches!(err, AppError::Answers(_)), "got {err:?}");

        let err = parse_answers("{not json").expect_err("malformed");
        assert!(matches!(err, AppError::Json(_)), "got {err:?}");
    }

    #[test]
    fn checklist_files_keep_typed_validation_errors() {
        let state = parse_checklist(r#"{"acn": true}"#).expect("catalog id");
        assert_eq!(state.readiness().critical_checked, 1);

        let err = parse_checklist(r#"{"office_plants": true}"#).expect_err("unknown item");
        assert!(matches!(err, AppError::Checklist(_)), "got {err:?}");

        let err = parse_checklist(r#"{"acn": "done"}"#).expect_err("not a bool");
        assert!(matches!(err, AppError::Json(_)), "got {err:?}");
    }

    #[test]
    fn parse_format_accepts_known_formats() {
        assert_eq!(parse_format("json"), Ok(OutputFormat::Json));
        assert!(parse_format("yaml").is_err());
    }
}
