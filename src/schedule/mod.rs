//! Weekly plan assembly
//!
//! Pairs a split template with a one-rep-max profile and runs every slot
//! through the prescription engine. Weeks are independent of each other, so
//! any week of any cycle can be built on its own.

pub mod templates;

pub use templates::{DayTemplate, SplitTemplate, SPLIT_TEMPLATES};

use tracing::debug;

use crate::models::{OneRepMaxProfile, Workout, WorkoutDay, WorkoutPlan};
use crate::periodization::{CycleWeek, WeekNumber, CYCLE_LENGTH};
use crate::prescription::prescribe;

const PLAN_TYPE_TEMPLATE: &str = "template";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("Unknown split: {0}")]
    UnknownSplit(String),
}

/// Exact key first, then case-insensitive
pub fn template_for(split: &str) -> Result<&'static SplitTemplate, ScheduleError> {
    let split = split.trim();
    SPLIT_TEMPLATES
        .iter()
        .find(|t| t.key == split)
        .or_else(|| SPLIT_TEMPLATES.iter().find(|t| t.key.eq_ignore_ascii_case(split)))
        .ok_or_else(|| ScheduleError::UnknownSplit(split.to_string()))
}

pub fn split_keys() -> impl Iterator<Item = &'static str> {
    SPLIT_TEMPLATES.iter().map(|t| t.key)
}

fn build_day(day: &DayTemplate, profile: &OneRepMaxProfile, week: WeekNumber) -> WorkoutDay {
    WorkoutDay {
        day: day.day.to_string(),
        focus: day.focus.to_string(),
        exercises: day
            .exercises
            .iter()
            .map(|exercise| prescribe(&exercise.to_template(), profile, week))
            .collect(),
    }
}

/// One week of a split, every exercise prescribed
pub fn build_weekly_plan(template: &SplitTemplate, profile: &OneRepMaxProfile, week: WeekNumber) -> WorkoutPlan {
    let cycle_week = CycleWeek::from_week(week);
    debug!(split = template.key, week = %week, week_in_cycle = cycle_week.week_in_cycle, "building weekly plan");

    WorkoutPlan {
        plan_type: PLAN_TYPE_TEMPLATE.to_string(),
        split: template.key.to_string(),
        current_week: week.get(),
        week_percentage: cycle_week.percentage,
        is_deload: cycle_week.is_deload,
        workout: Workout {
            name: template.name.to_string(),
            description: template.description.to_string(),
            schedule: template
                .days
                .iter()
                .map(|day| build_day(day, profile, week))
                .collect(),
        },
    }
}

/// The four consecutive weeks starting at `first_week`
pub fn build_mesocycle(template: &SplitTemplate, profile: &OneRepMaxProfile, first_week: WeekNumber) -> Vec<WorkoutPlan> {
    std::iter::successors(Some(first_week), |week| Some(week.next()))
        .take(CYCLE_LENGTH as usize)
        .map(|week| build_weekly_plan(template, profile, week))
        .collect()
}
