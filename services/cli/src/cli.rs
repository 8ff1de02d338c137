use crate::assess::{run_assess, run_plan, AssessArgs, PlanArgs};
use crate::catalog::{run_programs, run_questions, QuestionsArgs};
use clap::{Parser, Subcommand};
use grant_match::config::AppConfig;
use grant_match::error::AppError;
use grant_match::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "grant-match",
    about = "Match an Australian startup against R&D and innovation funding programs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the funding program catalog
    Programs,
    /// List questionnaire questions, optionally for a single wizard step
    Questions(QuestionsArgs),
    /// Evaluate an answers file and print eligibility, plan, and readiness
    Assess(AssessArgs),
    /// Export the scheduled 90-day action plan as CSV
    Plan(PlanArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "configuration loaded");

    match cli.command {
        Command::Programs => run_programs(),
        Command::Questions(args) => run_questions(args),
        Command::Assess(args) => run_assess(args, &config),
        Command::Plan(args) => run_plan(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assess_with_format_override() {
        let cli = Cli::try_parse_from([
            "grant-match",
            "assess",
            "--answers",
            "answers.json",
            "--start-date",
            "2025-07-01",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Command::Assess(args) => {
                assert_eq!(args.answers.to_str(), Some("answers.json"));
                assert!(args.checklist.is_none());
                assert!(args.start_date.is_some());
                assert!(args.format.is_some());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn plan_requires_a_valid_start_date() {
        let err = Cli::try_parse_from([
            "grant-match",
            "plan",
            "--answers",
            "answers.json",
            "--start-date",
            "01/07/2025",
        ])
        .expect_err("date must be YYYY-MM-DD");
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn questions_step_is_optional() {
        let cli = Cli::try_parse_from(["grant-match", "questions"]).expect("arguments parse");
        assert!(matches!(cli.command, Command::Questions(QuestionsArgs { step: None })));
    }
}
