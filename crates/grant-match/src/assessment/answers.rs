use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use super::catalog::{QuestionId, QuestionKind};

static NO_SELECTION: BTreeSet<String> = BTreeSet::new();

/// A single questionnaire response. The variant must match the question's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Flag(bool),
    Choice(String),
    Selection(BTreeSet<String>),
}

impl AnswerValue {
    pub fn choice(value: impl Into<String>) -> Self {
        Self::Choice(value.into())
    }

    pub fn selection<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selection(values.into_iter().map(Into::into).collect())
    }

    pub const fn kind(&self) -> QuestionKind {
        match self {
            Self::Flag(_) => QuestionKind::Boolean,
            Self::Choice(_) => QuestionKind::Single,
            Self::Selection(_) => QuestionKind::Multi,
        }
    }
}

/// Input-shape problems detected when answers enter the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("answer for '{question}' must be {expected}, found {found}")]
    ShapeMismatch {
        question: QuestionId,
        expected: QuestionKind,
        found: QuestionKind,
    },
}

/// Current questionnaire responses keyed by question. Absent keys are unanswered and
/// read back as `false`, no choice, or an empty selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loosely keyed entries, validating every key and shape.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, AnswerError>
    where
        I: IntoIterator<Item = (K, AnswerValue)>,
        K: AsRef<str>,
    {
        let mut store = Self::new();
        for (key, value) in entries {
            store.set_by_key(key.as_ref(), value)?;
        }
        Ok(store)
    }

    /// Parse a JSON object of `question id -> value`. Validation errors surface as
    /// `serde_json` errors carrying the `AnswerError` message.
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn set(&mut self, question: QuestionId, value: AnswerValue) -> Result<(), AnswerError> {
        let expected = question.kind();
        if value.kind() != expected {
            return Err(AnswerError::ShapeMismatch {
                question,
                expected,
                found: value.kind(),
            });
        }

        warn_on_unlisted_options(question, &value);
        self.answers.insert(question, value);
        Ok(())
    }

    pub fn set_by_key(&mut self, key: &str, value: AnswerValue) -> Result<(), AnswerError> {
        let question =
            QuestionId::parse(key).ok_or_else(|| AnswerError::UnknownQuestion(key.to_string()))?;
        self.set(question, value)
    }

    /// Flip membership of `option` in a multi-select answer; returns whether it is now selected.
    pub fn toggle(&mut self, question: QuestionId, option: &str) -> Result<bool, AnswerError> {
        let expected = question.kind();
        if expected != QuestionKind::Multi {
            return Err(AnswerError::ShapeMismatch {
                question,
                expected,
                found: QuestionKind::Multi,
            });
        }

        let entry = self
            .answers
            .entry(question)
            .or_insert_with(|| AnswerValue::Selection(BTreeSet::new()));

        match entry {
            AnswerValue::Selection(selected) => {
                if selected.remove(option) {
                    return Ok(false);
                }
                if !question.question().has_option(option) {
                    warn!(
                        question = question.key(),
                        value = option,
                        "toggled value is outside the question's options"
                    );
                }
                selected.insert(option.to_string());
                Ok(true)
            }
            other => Err(AnswerError::ShapeMismatch {
                question,
                expected,
                found: other.kind(),
            }),
        }
    }

    pub fn clear(&mut self, question: QuestionId) -> Option<AnswerValue> {
        self.answers.remove(&question)
    }

    /// Drop every answer, as when the assessment is restarted.
    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn get(&self, question: QuestionId) -> Option<&AnswerValue> {
        self.answers.get(&question)
    }

    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.answers.contains_key(&question)
    }

    pub fn flag(&self, question: QuestionId) -> bool {
        matches!(self.answers.get(&question), Some(AnswerValue::Flag(true)))
    }

    pub fn choice(&self, question: QuestionId) -> Option<&str> {
        match self.answers.get(&question) {
            Some(AnswerValue::Choice(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    pub fn selections(&self, question: QuestionId) -> &BTreeSet<String> {
        match self.answers.get(&question) {
            Some(AnswerValue::Selection(values)) => values,
            _ => &NO_SELECTION,
        }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &AnswerValue)> {
        self.answers.iter().map(|(id, value)| (*id, value))
    }
}

impl<'de> Deserialize<'de> for AnswerStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, AnswerValue>::deserialize(deserializer)?;
        Self::from_entries(raw).map_err(serde::de::Error::custom)
    }
}

fn warn_on_unlisted_options(question: QuestionId, value: &AnswerValue) {
    let definition = question.question();
    let unlisted: Vec<&str> = match value {
        AnswerValue::Flag(_) => return,
        AnswerValue::Choice(choice) => vec![choice.as_str()],
        AnswerValue::Selection(selected) => selected.iter().map(String::as_str).collect(),
    }
    .into_iter()
    .filter(|candidate| !definition.has_option(candidate))
    .collect();

    if !unlisted.is_empty() {
        warn!(
            question = question.key(),
            values = ?unlisted,
            "answer carries values outside the question's options"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_answers_read_as_empty_values() {
        let store = AnswerStore::new();
        assert!(!store.flag(QuestionId::AustralianCompany));
        assert_eq!(store.choice(QuestionId::Turnover), None);
        assert!(store.selections(QuestionId::NrfSector).is_empty());
        assert!(!store.is_answered(QuestionId::AustralianCompany));
    }

    #[test]
    fn rejects_shape_that_does_not_match_question_kind() {
        let mut store = AnswerStore::new();
        let err = store
            .set(QuestionId::NrfSector, AnswerValue::choice("enabling"))
            .expect_err("nrf_sector is multi-select");
        assert_eq!(
            err,
            AnswerError::ShapeMismatch {
                question: QuestionId::NrfSector,
                expected: QuestionKind::Multi,
                found: QuestionKind::Single,
            }
        );
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_unknown_question_keys() {
        let err = AnswerStore::from_entries([("favourite_colour", AnswerValue::Flag(true))])
            .expect_err("unknown key");
        assert_eq!(err, AnswerError::UnknownQuestion("favourite_colour".to_string()));
    }

    #[test]
    fn accepts_option_values_outside_the_catalog() {
        let mut store = AnswerStore::new();
        store
            .set(QuestionId::Turnover, AnswerValue::choice("about_5m"))
            .expect("shape is valid");
        assert_eq!(store.choice(QuestionId::Turnover), Some("about_5m"));
    }

    #[test]
    fn toggle_adds_then_removes_membership() {
        let mut store = AnswerStore::new();
        assert!(store.toggle(QuestionId::AiFocus, "fine_tuning").expect("multi"));
        assert!(store.toggle(QuestionId::AiFocus, "integration").expect("multi"));
        assert!(!store.toggle(QuestionId::AiFocus, "fine_tuning").expect("multi"));

        let selected: Vec<&str> = store
            .selections(QuestionId::AiFocus)
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(selected, vec!["integration"]);
    }

    #[test]
    fn toggle_on_single_select_is_a_shape_error() {
        let mut store = AnswerStore::new();
        assert!(store.toggle(QuestionId::Turnover, "under_1m").is_err());
    }

    #[test]
    fn deserializes_json_object_and_collapses_duplicates() {
        let store = AnswerStore::from_json(
            r#"{"australian_company": true, "turnover": "under_1m", "nrf_sector": ["enabling", "medical", "enabling"]}"#,
        )
        .expect("valid answers");

        assert!(store.flag(QuestionId::AustralianCompany));
        assert_eq!(store.choice(QuestionId::Turnover), Some("under_1m"));
        assert_eq!(store.selections(QuestionId::NrfSector).len(), 2);
    }

    #[test]
    fn deserialize_reports_shape_errors() {
        let err = serde_json::from_str::<AnswerStore>(r#"{"australian_company": "yes"}"#)
            .expect_err("string for boolean question");
        assert!(err.to_string().contains("australian_company"));
    }

    #[test]
    fn reset_discards_everything() {
        let mut store = AnswerStore::new();
        store
            .set(QuestionId::IndustryPartners, AnswerValue::Flag(true))
            .expect("valid");
        store.reset();
        assert!(store.is_empty());
    }
}
