use super::super::catalog::ProgramId;
use super::super::eligibility::{Eligibility, EligibilityResult};
use super::super::profile::{CompanyProfile, TimelineUrgency};
use super::{Action, ActionPlan, Horizon, Priority};

/// Extra condition, beyond eligibility, that must hold for a template to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTrigger {
    Always,
    HypothesesUndocumented,
    HasCofunding,
    MinimumScore(u16),
    ImmediateFundingNeed,
}

impl PlanTrigger {
    fn applies(self, result: &EligibilityResult, profile: &CompanyProfile) -> bool {
        match self {
            PlanTrigger::Always => true,
            PlanTrigger::HypothesesUndocumented => !profile.hypothesis_documentation,
            PlanTrigger::HasCofunding => profile.has_cofunding(),
            PlanTrigger::MinimumScore(minimum) => result.score >= minimum,
            PlanTrigger::ImmediateFundingNeed => {
                profile.timeline_urgency == Some(TimelineUrgency::Immediate)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionTemplate {
    pub key: &'static str,
    pub program: ProgramId,
    pub horizon: Horizon,
    pub trigger: PlanTrigger,
    pub action: &'static str,
    pub priority: Priority,
    pub effort: &'static str,
    pub outcome: &'static str,
}

impl ActionTemplate {
    fn instantiate(&self) -> Action {
        Action {
            program: self.program,
            program_name: self.program.program().name,
            action: self.action,
            priority: self.priority,
            effort: self.effort,
            outcome: self.outcome,
        }
    }
}

#[derive(Debug)]
pub struct PlanBlueprint {
    templates: Vec<ActionTemplate>,
}

impl PlanBlueprint {
    pub fn standard() -> Self {
        Self {
            templates: standard_action_templates(),
        }
    }

    pub fn templates_for_horizon(&self, horizon: Horizon) -> Vec<&ActionTemplate> {
        self.templates
            .iter()
            .filter(|template| template.horizon == horizon)
            .collect()
    }

    pub fn action_templates(&self) -> &[ActionTemplate] {
        &self.templates
    }

    /// Walk programs in catalog order so each horizon list follows catalog order.
    pub fn generate(&self, eligibility: &Eligibility, profile: &CompanyProfile) -> ActionPlan {
        let mut plan = ActionPlan::default();

        for result in eligibility.eligible() {
            self.templates
                .iter()
                .filter(|template| template.program == result.program)
                .filter(|template| template.trigger.applies(result, profile))
                .for_each(|template| plan.push(template.horizon, template.instantiate()));
        }

        plan
    }
}

fn standard_action_templates() -> Vec<ActionTemplate> {
    vec![
        ActionTemplate {
            key: "rdti_engage_specialist",
            program: ProgramId::Rdti,
            horizon: Horizon::Immediate,
            trigger: PlanTrigger::Always,
            action: "Engage R&D tax specialist for initial assessment",
            priority: Priority::High,
            effort: "2-4 hours",
            outcome: "Understand potential claim value",
        },
        ActionTemplate {
            key: "rdti_documentation_system",
            program: ProgramId::Rdti,
            horizon: Horizon::Immediate,
            trigger: PlanTrigger::HypothesesUndocumented,
            action: "Set up R&D documentation system (Jira/Notion + Git)",
            priority: Priority::Critical,
            effort: "4-8 hours",
            outcome: "Compliant record-keeping for claims",
        },
        ActionTemplate {
            key: "igp_advisory_application",
            program: ProgramId::Igp,
            horizon: Horizon::Immediate,
            trigger: PlanTrigger::Always,
            action: "Apply for FREE IGP Advisory Services via business.gov.au",
            priority: Priority::High,
            effort: "2-3 hours",
            outcome: "Independent expert advice + pathway to grants",
        },
        ActionTemplate {
            key: "igp_advisory_engagement",
            program: ProgramId::Igp,
            horizon: Horizon::ShortTerm,
            trigger: PlanTrigger::Always,
            action: "Complete IGP Advisory engagement",
            priority: Priority::High,
            effort: "10-15 hours",
            outcome: "Advisory Report for grant application",
        },
        ActionTemplate {
            key: "igp_grant_submission",
            program: ProgramId::Igp,
            horizon: Horizon::MediumTerm,
            trigger: PlanTrigger::MinimumScore(70),
            action: "Submit IGP grant application",
            priority: Priority::High,
            effort: "30-50 hours",
            outcome: "Up to $5M matched funding",
        },
        ActionTemplate {
            key: "csiro_expression_of_interest",
            program: ProgramId::Csiro,
            horizon: Horizon::Immediate,
            trigger: PlanTrigger::HasCofunding,
            action: "Submit Expression of Interest to CSIRO Kick-Start",
            priority: Priority::High,
            effort: "3-5 hours",
            outcome: "Access to CSIRO researchers + credibility signal",
        },
        ActionTemplate {
            key: "csiro_full_application",
            program: ProgramId::Csiro,
            horizon: Horizon::ShortTerm,
            trigger: PlanTrigger::Always,
            action: "Develop full CSIRO Kick-Start application with facilitator",
            priority: Priority::Medium,
            effort: "10-15 hours",
            outcome: "Matched funding + research collaboration",
        },
        ActionTemplate {
            key: "crcp_formalize_partners",
            program: ProgramId::Crcp,
            horizon: Horizon::ShortTerm,
            trigger: PlanTrigger::Always,
            action: "Formalize research partner relationships",
            priority: Priority::Medium,
            effort: "15-20 hours",
            outcome: "Partner commitments for Round 18",
        },
        ActionTemplate {
            key: "emdg_round_materials",
            program: ProgramId::Emdg,
            horizon: Horizon::MediumTerm,
            trigger: PlanTrigger::Always,
            action: "Prepare EMDG Round 5 application materials",
            priority: Priority::Medium,
            effort: "15-20 hours",
            outcome: "Up to $80K/year export reimbursement",
        },
        ActionTemplate {
            key: "accelerator_next_cohort",
            program: ProgramId::Accelerator,
            horizon: Horizon::MediumTerm,
            trigger: PlanTrigger::ImmediateFundingNeed,
            action: "Apply to Startmate/Google AI First next cohort",
            priority: Priority::Medium,
            effort: "10-15 hours",
            outcome: "$75-120K investment + network access",
        },
    ]
}
