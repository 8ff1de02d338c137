use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessCategory {
    Corporate,
    Financial,
    IpTechnical,
    Commercial,
    Partners,
}

impl ReadinessCategory {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Corporate,
            Self::Financial,
            Self::IpTechnical,
            Self::Commercial,
            Self::Partners,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Corporate => "Corporate",
            Self::Financial => "Financial",
            Self::IpTechnical => "IP/Technical",
            Self::Commercial => "Commercial",
            Self::Partners => "Partners",
        }
    }
}

/// A document or capability worth having on hand before applying for any grant.
#[derive(Debug, Serialize)]
pub struct ReadinessItem {
    pub id: &'static str,
    pub category: ReadinessCategory,
    pub label: &'static str,
    pub critical: bool,
}

const fn item(
    id: &'static str,
    category: ReadinessCategory,
    label: &'static str,
    critical: bool,
) -> ReadinessItem {
    ReadinessItem {
        id,
        category,
        label,
        critical,
    }
}

pub static READINESS_ITEMS: [ReadinessItem; 16] = [
    item("acn", ReadinessCategory::Corporate, "Australian Company Number (ACN)", true),
    item("abn", ReadinessCategory::Corporate, "Valid ABN", true),
    item("gst", ReadinessCategory::Corporate, "GST Registered", true),
    item("tax_compliance", ReadinessCategory::Corporate, "2+ years tax compliance", false),
    item("financials", ReadinessCategory::Financial, "3 years financial statements", false),
    item("accountant_letter", ReadinessCategory::Financial, "Accountant confirmation letter", false),
    item("bank_statements", ReadinessCategory::Financial, "Recent bank statements", false),
    item("ip_ownership", ReadinessCategory::IpTechnical, "Clear IP ownership documentation", true),
    item("rd_logs", ReadinessCategory::IpTechnical, "R&D experiment logs with dates", true),
    item("code_repos", ReadinessCategory::IpTechnical, "Version-controlled code repositories", false),
    item("trl_assessment", ReadinessCategory::IpTechnical, "Technology Readiness Level assessment", false),
    item("plan_to_market", ReadinessCategory::Commercial, "Plan to market document", true),
    item("loi", ReadinessCategory::Commercial, "Letters of Intent/Support", false),
    item("pilot_agreements", ReadinessCategory::Commercial, "Pilot agreements/MoUs", false),
    item("partner_letters", ReadinessCategory::Partners, "Partner commitment letters", false),
    item("research_mou", ReadinessCategory::Partners, "Research institution MoU", false),
];

pub fn readiness_item(id: &str) -> Option<&'static ReadinessItem> {
    READINESS_ITEMS.iter().find(|item| item.id == id)
}
