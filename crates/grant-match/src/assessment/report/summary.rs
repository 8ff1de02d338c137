use serde::Serialize;

use super::super::catalog::ProgramId;
use super::super::eligibility::Eligibility;

/// Headline numbers for the results page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EligibilitySummary {
    pub eligible_count: usize,
    pub potential_funding_estimate: u64,
}

/// Rough per-program dollar figure used only for the headline estimate.
pub const fn nominal_funding(program: ProgramId) -> u64 {
    match program {
        ProgramId::Rdti => 200_000,
        ProgramId::Igp => 500_000,
        ProgramId::Csiro => 50_000,
        ProgramId::Crcp => 500_000,
        ProgramId::Emdg => 80_000,
        ProgramId::Accelerator => 100_000,
    }
}

pub fn summarize(eligibility: &Eligibility) -> EligibilitySummary {
    eligibility.eligible().fold(
        EligibilitySummary {
            eligible_count: 0,
            potential_funding_estimate: 0,
        },
        |mut summary, result| {
            summary.eligible_count += 1;
            summary.potential_funding_estimate += nominal_funding(result.program);
            summary
        },
    )
}
