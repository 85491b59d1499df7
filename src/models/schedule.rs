use serde::{Deserialize, Serialize};

use super::ExercisePrescription;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
  pub day: String,
  pub focus: String,
  pub exercises: Vec<ExercisePrescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
  pub name: String,
  pub description: String,
  pub schedule: Vec<WorkoutDay>,
}

/// One week of a split with every exercise prescribed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
  #[serde(rename = "type")]
  pub plan_type: String,
  pub split: String,
  pub current_week: u32,
  pub week_percentage: f64,
  pub is_deload: bool,
  pub workout: Workout,
}
