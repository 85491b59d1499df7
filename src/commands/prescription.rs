//! Caller-facing operations combining the store with the prescription engine

use std::collections::BTreeMap;

use serde::Serialize;

use crate::db::AppState;
use crate::models::{
  ExercisePrescription, ExerciseSlot, ExerciseTemplate, OneRepMaxProfile, TrainingProgress, WorkoutPlan,
};
use crate::periodization::WeekNumber;
use crate::prescription::prescribe;
use crate::schedule::{build_weekly_plan, template_for};
use crate::store;

/// Progress as the dashboard expects it
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
  pub cycle_number: u32,
  pub completed_weeks: Vec<u32>,
  pub completed_exercises: BTreeMap<String, bool>,
  pub current_week: u32,
  pub is_cycle_complete: bool,
  pub split: Option<String>,
}

impl From<TrainingProgress> for ProgressSummary {
  fn from(progress: TrainingProgress) -> Self {
    let is_cycle_complete = progress.is_cycle_complete();
    Self {
      cycle_number: progress.cycle_number,
      completed_weeks: progress.completed_weeks,
      completed_exercises: progress.completed_exercises,
      current_week: progress.current_week,
      is_cycle_complete,
      split: progress.split,
    }
  }
}

fn parse_week(week: u32) -> Result<WeekNumber, String> {
  WeekNumber::new(week).map_err(|e| e.to_string())
}

/// ---------------------------------------------------------------------------
/// Plan Commands
/// ---------------------------------------------------------------------------

/// Weekly plan for a user's split; `week` defaults to their current week
pub async fn get_weekly_plan(
  state: &AppState,
  user_id: &str,
  week: Option<u32>,
  split: Option<String>,
) -> Result<WorkoutPlan, String> {
  let profile = store::load_profile(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to load 1RM profile: {}", e))?;
  let progress = store::load_progress(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to load progress: {}", e))?;

  let split = split
    .or(progress.split)
    .unwrap_or_else(|| state.config.default_split.clone());
  let template = template_for(&split).map_err(|e| e.to_string())?;
  let week = parse_week(week.unwrap_or(progress.current_week))?;

  Ok(build_weekly_plan(template, &profile, week))
}

/// Prescribe a single exercise against a user's stored maxes
pub async fn prescribe_exercise(
  state: &AppState,
  user_id: &str,
  template: ExerciseTemplate,
  week: u32,
) -> Result<ExercisePrescription, String> {
  let week = parse_week(week)?;
  let profile = store::load_profile(&state.db, user_id)
    .await
    .map_err(|e| format!("Failed to load 1RM profile: {}", e))?;

  Ok(prescribe(&template, &profile, week))
}

/// ---------------------------------------------------------------------------
/// Profile & Progress Commands
/// ---------------------------------------------------------------------------

pub async fn save_one_rep_max(
  state: &AppState,
  user_id: &str,
  profile: OneRepMaxProfile,
) -> Result<OneRepMaxProfile, String> {
  store::save_profile(&state.db, user_id, &profile)
    .await
    .map_err(|e| format!("Failed to save 1RM profile: {}", e))?;
  Ok(profile)
}

pub async fn get_progress(state: &AppState, user_id: &str) -> Result<ProgressSummary, String> {
  store::load_progress(&state.db, user_id)
    .await
    .map(ProgressSummary::from)
    .map_err(|e| format!("Failed to load progress: {}", e))
}

pub async fn complete_week(state: &AppState, user_id: &str, week: u32) -> Result<ProgressSummary, String> {
  let week = parse_week(week)?;
  store::complete_week(&state.db, user_id, week)
    .await
    .map(ProgressSummary::from)
    .map_err(|e| format!("Failed to complete week: {}", e))
}

/// Check (`is_completed`) or uncheck one exercise, addressed as `w{week}_d{day}_e{index}`
pub async fn toggle_exercise(
  state: &AppState,
  user_id: &str,
  exercise_id: &str,
  is_completed: bool,
) -> Result<ProgressSummary, String> {
  let slot = exercise_id.parse::<ExerciseSlot>().map_err(|e| e.to_string())?;
  store::toggle_exercise(&state.db, user_id, slot, is_completed)
    .await
    .map(ProgressSummary::from)
    .map_err(|e| format!("Failed to update exercise: {}", e))
}

pub async fn start_new_cycle(
  state: &AppState,
  user_id: &str,
  profile: OneRepMaxProfile,
) -> Result<ProgressSummary, String> {
  store::start_new_cycle(&state.db, user_id, &profile)
    .await
    .map(ProgressSummary::from)
    .map_err(|e| format!("Failed to start new cycle: {}", e))
}

pub async fn set_split(state: &AppState, user_id: &str, split: &str) -> Result<ProgressSummary, String> {
  let template = template_for(split).map_err(|e| e.to_string())?;
  store::set_split(&state.db, user_id, template.key)
    .await
    .map(ProgressSummary::from)
    .map_err(|e| format!("Failed to save split: {}", e))
}
