use super::super::catalog::ProgramId;
use super::super::profile::{
    AiFocus, CofundingCapacity, CompanyProfile, CompanyStage, ExportPlans, MarketValidation,
    RdSpend, ResearchPartnerships, TeamCapacity, Turnover, YearsOperating,
};
use super::{EligibilityResult, ScoreComponent};

pub(crate) const AUSTRALIAN_COMPANY: &str = "Must be Australian company";
pub(crate) const TURNOVER_UNDER_20M: &str = "Turnover must be under $20M";

/// Accumulates gate failures, warnings, and score components for one program.
/// Every gate is checked; nothing short-circuits.
struct Screening {
    program: ProgramId,
    reasons: Vec<String>,
    warnings: Vec<String>,
    components: Vec<ScoreComponent>,
}

impl Screening {
    fn new(program: ProgramId) -> Self {
        Self {
            program,
            reasons: Vec::new(),
            warnings: Vec::new(),
            components: Vec::new(),
        }
    }

    fn require(&mut self, holds: bool, reason: &str) {
        if !holds {
            self.reasons.push(reason.to_string());
        }
    }

    fn warn_if(&mut self, condition: bool, warning: &str) {
        if condition {
            self.warnings.push(warning.to_string());
        }
    }

    fn passed(&self) -> bool {
        self.reasons.is_empty()
    }

    fn award(&mut self, label: &'static str, points: u16) {
        self.components.push(ScoreComponent { label, points });
    }

    fn bonus(&mut self, condition: bool, label: &'static str, points: u16) {
        if condition {
            self.award(label, points);
        }
    }

    fn finish(mut self) -> EligibilityResult {
        let eligible = self.passed();
        if !eligible {
            self.components.clear();
        }
        let score = self.components.iter().map(|component| component.points).sum();

        EligibilityResult {
            program: self.program,
            eligible,
            score,
            components: self.components,
            reasons: self.reasons,
            warnings: self.warnings,
        }
    }
}

pub(super) fn screen(program: ProgramId, profile: &CompanyProfile) -> EligibilityResult {
    match program {
        ProgramId::Rdti => rd_tax_incentive(profile),
        ProgramId::Igp => industry_growth(profile),
        ProgramId::Csiro => csiro_kick_start(profile),
        ProgramId::Crcp => crc_projects(profile),
        ProgramId::Emdg => export_market_development(profile),
        ProgramId::Accelerator => accelerators(profile),
    }
}

fn rd_tax_incentive(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Rdti);

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    screening.require(
        matches!(profile.rd_spend, Some(spend) if spend != RdSpend::Under20k),
        "Minimum $20K R&D spend required",
    );
    screening.require(profile.rd_activities, "Must have experimental activities");

    screening.warn_if(
        !profile.hypothesis_documentation,
        "Start documenting hypotheses BEFORE experiments",
    );

    if screening.passed() {
        match profile.rd_spend {
            Some(RdSpend::Over500k) => screening.award("R&D spend over $500K", 95),
            Some(RdSpend::HundredTo500k) => screening.award("R&D spend $100K-$500K", 85),
            _ => screening.award("R&D spend $20K-$100K", 70),
        }
        screening.bonus(
            profile.hypothesis_documentation,
            "hypotheses documented before experiments",
            5,
        );
    }

    screening.finish()
}

fn industry_growth(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Igp);

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    screening.require(profile.turnover_under_20m(), TURNOVER_UNDER_20M);
    screening.require(profile.nrf_aligned(), "Must align with NRF priority areas");

    if screening.passed() {
        screening.award("NRF-aligned commercialisation base", 60);
        match profile.market_validation {
            Some(MarketValidation::Revenue) => screening.award("paying customers", 20),
            Some(MarketValidation::Pilots) => screening.award("pilot customers", 10),
            _ => {}
        }
        screening.bonus(
            profile.nrf_sectors.len() > 1,
            "multiple NRF priority areas",
            10,
        );
        screening.bonus(profile.has_cofunding(), "co-funding available", 10);
    }

    screening.finish()
}

fn csiro_kick_start(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Csiro);

    let small_turnover = matches!(
        profile.turnover,
        Some(Turnover::Under1m | Turnover::OneTo10m)
    );
    let young_company = matches!(
        profile.years_operating,
        Some(years) if years != YearsOperating::OverThree
    );

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    screening.require(
        small_turnover || young_company,
        "Turnover must be <$10M OR operating <3 years",
    );

    if screening.passed() {
        screening.award("Kick-Start base", 75);
        screening.bonus(profile.has_cofunding(), "co-funding available", 15);
        screening.bonus(profile.rd_activities, "experimental R&D underway", 10);
    }

    screening.finish()
}

fn crc_projects(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Crcp);

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    screening.require(
        matches!(
            profile.research_partnerships,
            Some(ResearchPartnerships::Active | ResearchPartnerships::Formal)
        ),
        "Requires research institution partner",
    );
    screening.require(profile.industry_partners, "Requires 2+ industry partners");

    screening.warn_if(
        profile.team_capacity == Some(TeamCapacity::Minimal),
        "CRC-P requires 100-200+ hours - consider team capacity",
    );

    if screening.passed() {
        screening.award("collaborative research base", 60);
        screening.bonus(
            profile.research_partnerships == Some(ResearchPartnerships::Formal),
            "formal research partnership",
            20,
        );
        screening.bonus(
            profile.cofunding == Some(CofundingCapacity::Over250k),
            "co-funding over $250K",
            20,
        );
    }

    screening.finish()
}

fn export_market_development(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Emdg);

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    screening.require(profile.turnover_under_20m(), TURNOVER_UNDER_20M);
    screening.require(
        matches!(
            profile.export_plans,
            Some(ExportPlans::Planning | ExportPlans::Exporting)
        ),
        "Must be actively planning/executing export",
    );

    if screening.passed() {
        if profile.export_plans == Some(ExportPlans::Exporting) {
            screening.award("already exporting", 85);
        } else {
            screening.award("export strategy in planning", 65);
        }
        screening.bonus(profile.has_cofunding(), "co-funding available", 10);
    }

    screening.finish()
}

fn accelerators(profile: &CompanyProfile) -> EligibilityResult {
    let mut screening = Screening::new(ProgramId::Accelerator);

    screening.require(profile.australian_company, AUSTRALIAN_COMPANY);
    match profile.stage {
        Some(CompanyStage::Mvp | CompanyStage::EarlyRevenue) => {}
        Some(CompanyStage::Idea) => screening.require(false, "Most accelerators prefer MVP stage"),
        Some(CompanyStage::Growth) => {
            screening.require(false, "May be too advanced for accelerators")
        }
        None => screening.require(false, "Accelerators require an MVP or early-revenue stage"),
    }

    if screening.passed() {
        screening.award("cohort-ready stage", 70);
        screening.bonus(profile.has_market_traction(), "market traction", 15);
        screening.bonus(
            profile.ai_focus.contains(&AiFocus::ModelDevelopment)
                || profile.ai_focus.contains(&AiFocus::FineTuning),
            "deep AI/ML work",
            15,
        );
    }

    screening.finish()
}
