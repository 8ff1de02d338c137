use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed identifiers for the catalog. Declaration order is catalog order and drives
/// every tie-break and listing order downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgramId {
    Rdti,
    Igp,
    Csiro,
    Crcp,
    Emdg,
    Accelerator,
}

impl ProgramId {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Rdti,
            Self::Igp,
            Self::Csiro,
            Self::Crcp,
            Self::Emdg,
            Self::Accelerator,
        ]
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Rdti => "rdti",
            Self::Igp => "igp",
            Self::Csiro => "csiro",
            Self::Crcp => "crcp",
            Self::Emdg => "emdg",
            Self::Accelerator => "accelerator",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(value.trim()))
    }

    pub fn program(self) -> &'static Program {
        &PROGRAMS[self as usize]
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Descriptive metadata for a fundable program. Requirement tags are informational;
/// eligibility is decided by the evaluator's gates alone.
#[derive(Debug, Serialize)]
pub struct Program {
    pub id: ProgramId,
    pub name: &'static str,
    pub short_name: &'static str,
    pub funding: &'static str,
    pub range: &'static str,
    pub effort: &'static str,
    pub timeline: &'static str,
    pub priority_score: u8,
    pub color: &'static str,
    pub icon: &'static str,
    pub requirements: &'static [&'static str],
    pub description: &'static str,
}

pub static PROGRAMS: [Program; 6] = [
    Program {
        id: ProgramId::Rdti,
        name: "R&D Tax Incentive",
        short_name: "RDTI",
        funding: "43.5% refundable offset",
        range: "$50K - $500K+ annually",
        effort: "20-40 hours setup",
        timeline: "10 months after FY end",
        priority_score: 23,
        color: "#059669",
        icon: "💰",
        requirements: &[
            "australian_company",
            "rd_spend_20k",
            "experimental_activities",
            "documented_hypothesis",
        ],
        description: "Cash back on qualifying R&D expenditure. Essential for any AI startup doing genuine research.",
    },
    Program {
        id: ProgramId::Igp,
        name: "Industry Growth Program",
        short_name: "IGP",
        funding: "50% matched funding",
        range: "$50K - $5M",
        effort: "40-80 hours",
        timeline: "Rolling applications",
        priority_score: 21,
        color: "#0891b2",
        icon: "🚀",
        requirements: &[
            "australian_company",
            "turnover_under_20m",
            "innovative_product",
            "nrf_alignment",
        ],
        description: "Two-stage program: Free Advisory Services, then grant funding for commercialization.",
    },
    Program {
        id: ProgramId::Csiro,
        name: "CSIRO Kick-Start",
        short_name: "CSIRO",
        funding: "1:1 matched",
        range: "$10K - $50K",
        effort: "15-30 hours",
        timeline: "Year-round, non-competitive",
        priority_score: 20,
        color: "#7c3aed",
        icon: "🔬",
        requirements: &[
            "australian_company",
            "turnover_under_10m_or_under_3yrs",
            "can_match_funding",
            "technical_challenge",
        ],
        description: "Access CSIRO researchers and 'CSIRO-backed' credibility. High success rate.",
    },
    Program {
        id: ProgramId::Crcp,
        name: "CRC-P Grants",
        short_name: "CRC-P",
        funding: "1:1 matched",
        range: "$100K - $3M",
        effort: "100-200+ hours",
        timeline: "Round 18 late 2025",
        priority_score: 19,
        color: "#dc2626",
        icon: "🤝",
        requirements: &[
            "australian_company",
            "research_partner",
            "industry_partners",
            "significant_project",
        ],
        description: "Collaborative research grants requiring university + industry partners.",
    },
    Program {
        id: ProgramId::Emdg,
        name: "Export Market Development",
        short_name: "EMDG",
        funding: "50% reimbursement",
        range: "$20K - $80K/year",
        effort: "20-40 hours",
        timeline: "Round 5 TBD",
        priority_score: 18,
        color: "#ea580c",
        icon: "🌏",
        requirements: &[
            "australian_company",
            "turnover_under_20m",
            "export_ready",
            "marketing_spend_20k",
        ],
        description: "Reimbursement for export marketing activities. Up to 8 years eligibility.",
    },
    Program {
        id: ProgramId::Accelerator,
        name: "Startup Accelerators",
        short_name: "Accelerators",
        funding: "Equity investment",
        range: "$75K - $120K",
        effort: "Application + 12 weeks",
        timeline: "Cohort-based",
        priority_score: 17,
        color: "#be185d",
        icon: "⚡",
        requirements: &[
            "australian_company",
            "early_stage",
            "coachable_team",
            "scalable_model",
        ],
        description: "Startmate, Google AI First, MAP - mentorship, network, and investment.",
    },
];
