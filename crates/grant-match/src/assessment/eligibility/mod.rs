mod gates;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use super::answers::AnswerStore;
use super::catalog::ProgramId;
use super::profile::CompanyProfile;

/// Discrete contribution to a match score, kept so a score can be explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreComponent {
    pub label: &'static str,
    pub points: u16,
}

/// Outcome of screening one program against the current answers.
///
/// `reasons` lists every failed gate and is empty exactly when `eligible` is true.
/// Ineligible programs always score 0. Scores are plain sums and may exceed 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityResult {
    pub program: ProgramId,
    pub eligible: bool,
    pub score: u16,
    pub components: Vec<ScoreComponent>,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Results for every catalog program, iterated in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Eligibility {
    results: BTreeMap<ProgramId, EligibilityResult>,
}

impl Eligibility {
    pub fn get(&self, program: ProgramId) -> Option<&EligibilityResult> {
        self.results.get(&program)
    }

    pub fn is_eligible(&self, program: ProgramId) -> bool {
        self.get(program).is_some_and(|result| result.eligible)
    }

    pub fn score(&self, program: ProgramId) -> u16 {
        self.get(program).map_or(0, |result| result.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EligibilityResult> {
        self.results.values()
    }

    pub fn eligible(&self) -> impl Iterator<Item = &EligibilityResult> {
        self.iter().filter(|result| result.eligible)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Eligible programs first, then by score descending. Ties keep catalog order.
    pub fn ranked(&self) -> Vec<&EligibilityResult> {
        let mut ranked: Vec<&EligibilityResult> = self.iter().collect();
        ranked.sort_by(|a, b| {
            b.eligible
                .cmp(&a.eligible)
                .then_with(|| b.score.cmp(&a.score))
        });
        ranked
    }
}

/// Screen every catalog program against the answers. Never fails: missing or
/// unrecognized answers simply fail the gates that depend on them.
pub fn evaluate(answers: &AnswerStore) -> Eligibility {
    evaluate_profile(&CompanyProfile::from_answers(answers))
}

pub fn evaluate_profile(profile: &CompanyProfile) -> Eligibility {
    let results = ProgramId::ordered()
        .into_iter()
        .map(|program| {
            let result = gates::screen(program, profile);
            debug!(
                program = program.key(),
                eligible = result.eligible,
                score = result.score,
                reasons = result.reasons.len(),
                warnings = result.warnings.len(),
                "screened funding program"
            );
            (program, result)
        })
        .collect();

    Eligibility { results }
}
