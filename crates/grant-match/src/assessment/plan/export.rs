use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::{ActionPlan, Horizon};

#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    horizon: Horizon,
    program: &'a str,
    action: &'a str,
    priority: &'a str,
    effort: &'a str,
    outcome: &'a str,
    starts_on: NaiveDate,
    due_on: NaiveDate,
}

/// Write the scheduled plan as CSV, one row per action, header included.
pub fn write_plan_csv<W: Write>(
    writer: W,
    plan: &ActionPlan,
    plan_start: NaiveDate,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    for scheduled in plan.schedule(plan_start) {
        csv_writer.serialize(PlanRow {
            horizon: scheduled.horizon,
            program: scheduled.action.program.key(),
            action: scheduled.action.action,
            priority: scheduled.priority_label,
            effort: scheduled.action.effort,
            outcome: scheduled.action.outcome,
            starts_on: scheduled.starts_on,
            due_on: scheduled.due_on,
        })?;
    }

    if plan.is_empty() {
        csv_writer.write_record([
            "horizon",
            "program",
            "action",
            "priority",
            "effort",
            "outcome",
            "starts_on",
            "due_on",
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
