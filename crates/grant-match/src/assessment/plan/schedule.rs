use chrono::{Duration, NaiveDate};
use serde::Serialize;

use super::{Action, ActionPlan, Horizon};

/// Calendar dates covered by one horizon, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HorizonWindow {
    pub horizon: Horizon,
    pub starts_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl HorizonWindow {
    pub fn resolve(horizon: Horizon, plan_start: NaiveDate) -> Self {
        let (first_day, last_day) = horizon.days();
        Self {
            horizon,
            starts_on: plan_start + Duration::days(i64::from(first_day) - 1),
            due_on: plan_start + Duration::days(i64::from(last_day) - 1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.due_on
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduledAction {
    pub horizon: Horizon,
    pub horizon_label: &'static str,
    #[serde(flatten)]
    pub action: Action,
    pub priority_label: &'static str,
    pub starts_on: NaiveDate,
    pub due_on: NaiveDate,
}

impl ActionPlan {
    pub fn windows(plan_start: NaiveDate) -> [HorizonWindow; 3] {
        Horizon::ordered().map(|horizon| HorizonWindow::resolve(horizon, plan_start))
    }

    /// Pin every action to its horizon's calendar window.
    pub fn schedule(&self, plan_start: NaiveDate) -> Vec<ScheduledAction> {
        self.iter()
            .map(|(horizon, action)| {
                let window = HorizonWindow::resolve(horizon, plan_start);
                ScheduledAction {
                    horizon,
                    horizon_label: horizon.label(),
                    action: action.clone(),
                    priority_label: action.priority.label(),
                    starts_on: window.starts_on,
                    due_on: window.due_on,
                }
            })
            .collect()
    }
}
