use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use super::catalog::{readiness_item, READINESS_ITEMS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChecklistError {
    #[error("unknown readiness checklist item '{0}'")]
    UnknownItem(String),
}

/// Checked state of the readiness checklist. Items never set read as unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChecklistState {
    items: BTreeMap<&'static str, bool>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, K>(entries: I) -> Result<Self, ChecklistError>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut state = Self::new();
        for (id, checked) in entries {
            state.set(id.as_ref(), checked)?;
        }
        Ok(state)
    }

    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn set(&mut self, id: &str, checked: bool) -> Result<(), ChecklistError> {
        let item = readiness_item(id).ok_or_else(|| ChecklistError::UnknownItem(id.to_string()))?;
        self.items.insert(item.id, checked);
        Ok(())
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.items.get(id).copied().unwrap_or(false)
    }

    pub fn readiness(&self) -> ReadinessScore {
        let mut score = ReadinessScore {
            percent: 0,
            checked: 0,
            total: READINESS_ITEMS.len(),
            critical_checked: 0,
            critical_total: 0,
        };

        for item in &READINESS_ITEMS {
            let checked = self.is_checked(item.id);
            if checked {
                score.checked += 1;
            }
            if item.critical {
                score.critical_total += 1;
                if checked {
                    score.critical_checked += 1;
                }
            }
        }

        score.percent = rounded_percent(score.checked, score.total);
        score
    }
}

impl<'de> Deserialize<'de> for ChecklistState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, bool>::deserialize(deserializer)?;
        Self::from_entries(raw).map_err(serde::de::Error::custom)
    }
}

/// Share of checklist items completed, plus the critical subset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessScore {
    pub percent: u8,
    pub checked: usize,
    pub total: usize,
    pub critical_checked: usize,
    pub critical_total: usize,
}

impl ReadinessScore {
    pub fn critical_fraction(&self) -> (usize, usize) {
        (self.critical_checked, self.critical_total)
    }

    pub fn critical_complete(&self) -> bool {
        self.critical_checked == self.critical_total
    }
}

// Half rounds up.
fn rounded_percent(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let percent = (part * 200 + whole) / (whole * 2);
    u8::try_from(percent).unwrap_or(100)
}
