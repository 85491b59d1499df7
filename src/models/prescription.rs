use serde::{Deserialize, Serialize};

/// Static default for one exercise slot in a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseTemplate {
  pub name: String,
  pub sets: u32,
  pub reps: String,
  pub rest: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub notes: Option<String>,
}

impl ExerciseTemplate {
  pub fn new(name: impl Into<String>, sets: u32, reps: impl Into<String>, rest: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      sets,
      reps: reps.into(),
      rest: rest.into(),
      weight: None,
      notes: None,
    }
  }

  pub fn with_weight(mut self, weight: impl Into<String>) -> Self {
    self.weight = Some(weight.into());
    self
  }
}

/// Concrete training parameters for one exercise in one week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrescription {
  pub name: String,
  pub sets: u32,
  pub reps: String,
  pub rest: String,
  /// `None` only when a static default without a load passed through
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub weight: Option<String>,
  pub notes: Option<String>,
}

impl From<&ExerciseTemplate> for ExercisePrescription {
  fn from(template: &ExerciseTemplate) -> Self {
    Self {
      name: template.name.clone(),
      sets: template.sets,
      reps: template.reps.clone(),
      rest: template.rest.clone(),
      weight: template.weight.clone(),
      notes: template.notes.clone(),
    }
  }
}
