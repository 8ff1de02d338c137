use crate::infra::{format_dollars, load_answers, load_checklist, parse_date, parse_format};
use chrono::{Local, NaiveDate};
use clap::Args;
use grant_match::assessment::plan::Horizon;
use grant_match::assessment::report::AssessmentReport;
use grant_match::assessment::{evaluate, generate_plan, write_plan_csv};
use grant_match::config::{AppConfig, OutputFormat};
use grant_match::error::AppError;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON answers file mapping question id to a value
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// JSON readiness checklist mapping item id to true/false
    #[arg(long)]
    pub(crate) checklist: Option<PathBuf>,
    /// First day of the 90-day plan (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_date: Option<NaiveDate>,
    /// Output format (text or json). Overrides APP_OUTPUT_FORMAT.
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Args, Debug)]
pub(crate) struct PlanArgs {
    /// JSON answers file mapping question id to a value
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// First day of the 90-day plan (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub(crate) start_date: NaiveDate,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_assess(args: AssessArgs, config: &AppConfig) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        checklist,
        start_date,
        format,
    } = args;

    let store = load_answers(&answers)?;
    let checklist = load_checklist(checklist.as_deref())?;
    let start_date = start_date.unwrap_or_else(|| Local::now().date_naive());
    let format = format.unwrap_or(config.output.format);

    let report = AssessmentReport::build(&store, &checklist);
    info!(
        answers = store.len(),
        eligible = report.summary.eligible_count,
        actions = report.plan.len(),
        "assessment complete"
    );

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => render_report(&report, start_date),
    }

    Ok(())
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), AppError> {
    let PlanArgs {
        answers,
        start_date,
        output,
    } = args;

    let store = load_answers(&answers)?;
    let plan = generate_plan(&evaluate(&store), &store);

    match output {
        Some(path) => {
            write_plan_csv(File::create(&path)?, &plan, start_date)?;
            info!(
                path = %path.display(),
                actions = plan.len(),
                "action plan exported"
            );
        }
        None => write_plan_csv(io::stdout().lock(), &plan, start_date)?,
    }

    Ok(())
}

fn render_report(report: &AssessmentReport, start_date: NaiveDate) {
    println!("Funding eligibility report");
    println!(
        "Eligible programs: {} | Potential funding: {}+",
        report.summary.eligible_count,
        format_dollars(report.summary.potential_funding_estimate)
    );
    println!(
        "Grant readiness: {}% ({}/{} critical items)",
        report.readiness.percent, report.readiness.critical_checked, report.readiness.critical_total
    );

    if report.summary.eligible_count == 0 {
        println!("\nEligible programs: none");
    } else {
        println!("\nEligible programs");
        for result in report.eligible() {
            let program = result.program.program();
            println!("- {} ({}% match)", program.name, result.score);
            for component in &result.components {
                println!("    +{} {}", component.points, component.label);
            }
            for warning in &result.warnings {
                println!("    ! {warning}");
            }
        }
    }

    let ineligible: Vec<_> = report.ineligible().collect();
    if !ineligible.is_empty() {
        println!("\nNot currently eligible");
        for result in ineligible {
            println!(
                "- {}: {}",
                result.program.program().name,
                result.reasons.join("; ")
            );
        }
    }

    println!("\n90-day action plan (starting {start_date})");
    let scheduled = report.schedule(start_date);
    for horizon in Horizon::ordered() {
        let (first_day, last_day) = horizon.days();
        println!(
            "\n{} - Days {}-{}: {}",
            horizon.label(),
            first_day,
            last_day,
            horizon.theme()
        );
        let mut listed = false;
        for item in scheduled.iter().filter(|item| item.horizon == horizon) {
            listed = true;
            println!(
                "- [{}] {} ({}), due {}",
                item.priority_label, item.action.action, item.action.program_name, item.due_on
            );
            println!(
                "    effort {} | outcome {}",
                item.action.effort, item.action.outcome
            );
        }
        if !listed {
            println!("- nothing scheduled");
        }
    }

    println!("\nFunding stack");
    for layer in &report.funding_stack {
        let eligible: Vec<&str> = layer
            .eligible_programs
            .iter()
            .map(|program| program.program().short_name)
            .collect();
        let eligible = if eligible.is_empty() {
            "none eligible".to_string()
        } else {
            eligible.join(" + ")
        };
        println!("- {}: {}", layer.label, eligible);
        println!("    {}", layer.guidance);
    }

    println!("\nCan stack");
    for rule in report.stacking_rules.can_stack {
        println!("- {rule}");
    }
    println!("Cannot stack");
    for rule in report.stacking_rules.cannot_stack {
        println!("- {rule}");
    }

    let reality = &report.reality_check;
    println!("\nReality check");
    println!("Worth pursuing");
    for item in reality.worth_pursuing {
        println!("- {item}");
    }
    println!("Potential distractions");
    for item in reality.potential_distractions {
        println!("- {item}");
    }
    println!("Remember: {}", reality.reminder);
}
