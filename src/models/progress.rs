use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::periodization::CYCLE_LENGTH;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid exercise id: {0} (expected w<week>_d<day>_e<index>)")]
pub struct ExerciseIdError(String);

/// One exercise slot of a weekly plan, addressed as `w{week}_d{day}_e{index}`.
///
/// `day` and `index` are zero-based positions in the plan's schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseSlot {
  pub week: u32,
  pub day: usize,
  pub index: usize,
}

impl ExerciseSlot {
  pub fn new(week: u32, day: usize, index: usize) -> Self {
    Self { week, day, index }
  }
}

impl fmt::Display for ExerciseSlot {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "w{}_d{}_e{}", self.week, self.day, self.index)
  }
}

impl FromStr for ExerciseSlot {
  type Err = ExerciseIdError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || ExerciseIdError(s.to_string());
    let mut parts = s.trim().split('_');

    let mut field = |prefix: char| {
      parts
        .next()
        .and_then(|part| part.strip_prefix(prefix))
        .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(invalid)
    };

    let week: u32 = field('w')?.parse().map_err(|_| invalid())?;
    let day: usize = field('d')?.parse().map_err(|_| invalid())?;
    let index: usize = field('e')?.parse().map_err(|_| invalid())?;

    if week == 0 || parts.next().is_some() {
      return Err(invalid());
    }

    Ok(Self { week, day, index })
  }
}

/// Where a user is inside their current mesocycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgress {
  pub user_id: String,
  pub cycle_number: u32,
  pub current_week: u32,
  pub completed_weeks: Vec<u32>,
  /// Completed slots keyed by `ExerciseSlot` id; unchecked slots are absent
  #[serde(default)]
  pub completed_exercises: BTreeMap<String, bool>,
  pub split: Option<String>,
  pub updated_at: DateTime<Utc>,
}

impl TrainingProgress {
  /// Fresh progress for a user who has never completed a week
  pub fn start(user_id: &str) -> Self {
    Self {
      user_id: user_id.to_string(),
      cycle_number: 1,
      current_week: 1,
      completed_weeks: Vec::new(),
      completed_exercises: BTreeMap::new(),
      split: None,
      updated_at: Utc::now(),
    }
  }

  pub fn is_cycle_complete(&self) -> bool {
    (1..=CYCLE_LENGTH).all(|week| self.completed_weeks.contains(&week))
  }

  /// Mark a week done and move the pointer forward (capped at the deload week)
  pub fn mark_week_complete(&mut self, week: u32) {
    if !self.completed_weeks.contains(&week) {
      self.completed_weeks.push(week);
      self.completed_weeks.sort_unstable();
    }
    if week >= self.current_week {
      self.current_week = (week + 1).min(CYCLE_LENGTH);
    }
    self.updated_at = Utc::now();
  }

  pub fn is_exercise_completed(&self, slot: ExerciseSlot) -> bool {
    self.completed_exercises.contains_key(&slot.to_string())
  }

  pub fn set_exercise_completed(&mut self, slot: ExerciseSlot, completed: bool) {
    if completed {
      self.completed_exercises.insert(slot.to_string(), true);
    } else {
      self.completed_exercises.remove(&slot.to_string());
    }
    self.updated_at = Utc::now();
  }

  pub fn begin_next_cycle(&mut self) {
    self.cycle_number += 1;
    self.current_week = 1;
    self.completed_weeks.clear();
    self.completed_exercises.clear();
    self.updated_at = Utc::now();
  }
}
