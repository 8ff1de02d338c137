use serde::Serialize;

use super::super::catalog::ProgramId;
use super::super::eligibility::Eligibility;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FundingLayer {
    Foundation,
    Growth,
    Scale,
}

impl FundingLayer {
    pub const fn ordered() -> [Self; 3] {
        [Self::Foundation, Self::Growth, Self::Scale]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation Layer",
            Self::Growth => "Growth Layer",
            Self::Scale => "Scale Layer",
        }
    }

    pub const fn programs(self) -> &'static [ProgramId] {
        match self {
            Self::Foundation => &[ProgramId::Rdti, ProgramId::Csiro],
            Self::Growth => &[ProgramId::Igp],
            Self::Scale => &[ProgramId::Crcp, ProgramId::Emdg],
        }
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            Self::Foundation => "Start claiming R&D Tax immediately. Use CSIRO for technical validation and \"CSIRO-backed\" credibility.",
            Self::Growth => "Free expert advice leads to stronger grant applications. Your co-funding qualifies for R&D Tax claims.",
            Self::Scale => "Use established research partnerships for CRC-P. Stack EMDG for international expansion.",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StackLayerView {
    pub layer: FundingLayer,
    pub label: &'static str,
    pub guidance: &'static str,
    pub programs: Vec<ProgramId>,
    pub eligible_programs: Vec<ProgramId>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StackingRules {
    pub can_stack: &'static [&'static str],
    pub cannot_stack: &'static [&'static str],
}

pub static STACKING_RULES: StackingRules = StackingRules {
    can_stack: &[
        "R&D Tax + Any grant (co-funding qualifies for RDTI)",
        "CSIRO Kick-Start + RDTI",
        "IGP + EMDG (different purposes)",
        "CRC-P + RDTI",
    ],
    cannot_stack: &[
        "Grant funds as co-funding for other grants",
        "IGP requires CASH co-funding (not in-kind)",
        "Same activities claimed across multiple grants",
    ],
};

/// Fixed guidance on which programs repay the effort, shown beside the stacking rules.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RealityCheck {
    pub worth_pursuing: &'static [&'static str],
    pub potential_distractions: &'static [&'static str],
    pub reminder: &'static str,
}

pub static REALITY_CHECK: RealityCheck = RealityCheck {
    worth_pursuing: &[
        "R&D Tax: Essential if doing genuine R&D",
        "IGP Advisory: FREE expert advice",
        "CSIRO Kick-Start: High success rate, credibility",
    ],
    potential_distractions: &[
        "CRC-P without research partners (6-12mo build)",
        "Multiple small grants <$50K (effort exceeds value)",
        "EMDG without clear export strategy",
    ],
    reminder: "$100K customer contract in 4 weeks beats $100K grant in 6 months. Grants should ACCELERATE, not REPLACE, commercial progress.",
};

/// Layered view of how eligible programs combine, foundation first.
pub fn funding_stack(eligibility: &Eligibility) -> Vec<StackLayerView> {
    FundingLayer::ordered()
        .into_iter()
        .map(|layer| StackLayerView {
            layer,
            label: layer.label(),
            guidance: layer.guidance(),
            programs: layer.programs().to_vec(),
            eligible_programs: layer
                .programs()
                .iter()
                .copied()
                .filter(|program| eligibility.is_eligible(*program))
                .collect(),
        })
        .collect()
}
