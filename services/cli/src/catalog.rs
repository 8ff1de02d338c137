use clap::Args;
use grant_match::assessment::catalog::{
    questions_for_step, Question, QuestionCategory, QuestionKind, PROGRAMS,
};
use grant_match::error::AppError;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct QuestionsArgs {
    /// Wizard step to list (0-6). Lists every step when omitted.
    #[arg(long)]
    pub(crate) step: Option<usize>,
}

pub(crate) fn run_programs() -> Result<(), AppError> {
    info!(programs = PROGRAMS.len(), "listing funding programs");

    println!("Funding programs");
    for program in &PROGRAMS {
        println!(
            "\n{} {} [{}] (priority {})",
            program.icon,
            program.name,
            program.id.key(),
            program.priority_score
        );
        println!("  {}", program.description);
        println!("  Funding: {} | Range: {}", program.funding, program.range);
        println!(
            "  Effort: {} | Timeline: {}",
            program.effort, program.timeline
        );
        println!("  Requirements: {}", program.requirements.join(", "));
    }

    Ok(())
}

pub(crate) fn run_questions(args: QuestionsArgs) -> Result<(), AppError> {
    let steps: Vec<usize> = match args.step {
        Some(step) => vec![step],
        None => QuestionCategory::ordered()
            .into_iter()
            .map(QuestionCategory::step)
            .collect(),
    };
    info!(steps = steps.len(), "listing questionnaire");

    for step in steps {
        let Some(category) = QuestionCategory::from_step(step) else {
            println!("Step {step}: no questions (results step)");
            continue;
        };

        println!("Step {} - {}", step, category.label());
        for question in questions_for_step(step) {
            render_question(question);
        }
        println!();
    }

    Ok(())
}

fn render_question(question: &Question) {
    let required = if question.required { " (required)" } else { "" };
    println!("- {} [{}]{}", question.prompt, question.id, required);
    if let Some(help) = question.help {
        println!("    {help}");
    }

    match question.kind {
        QuestionKind::Boolean => println!("    answer: true | false"),
        QuestionKind::Single | QuestionKind::Multi => {
            let shape = if question.kind == QuestionKind::Multi {
                "any of"
            } else {
                "one of"
            };
            println!("    answer {shape}:");
            for option in question.options {
                match option.description {
                    Some(description) => {
                        println!("      {} - {} ({})", option.value, option.label, description)
                    }
                    None => println!("      {} - {}", option.value, option.label),
                }
            }
        }
    }
}
