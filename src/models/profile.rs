use serde::{Deserialize, Deserializer, Serialize};

/// The three lifts a user tests directly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnchorLift {
  #[serde(rename = "Bench press")]
  BenchPress,
  #[serde(rename = "Back squat")]
  BackSquat,
  #[serde(rename = "Deadlift")]
  Deadlift,
}

impl AnchorLift {
  pub const ALL: [AnchorLift; 3] = [
    AnchorLift::BenchPress,
    AnchorLift::BackSquat,
    AnchorLift::Deadlift,
  ];

  /// Key used by the client and the stored profile
  pub fn key(&self) -> &'static str {
    match self {
      AnchorLift::BenchPress => "Bench press",
      AnchorLift::BackSquat => "Back squat",
      AnchorLift::Deadlift => "Deadlift",
    }
  }
}

impl std::fmt::Display for AnchorLift {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.key())
  }
}

/// Tested one-rep-max values, in kg.
///
/// A stored value is always finite and positive; anything else collapses to
/// `None` on the way in, so "unknown" has a single representation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxProfile {
  #[serde(
    rename = "Bench press",
    default,
    deserialize_with = "deserialize_max",
    skip_serializing_if = "Option::is_none"
  )]
  bench_press: Option<f64>,
  #[serde(
    rename = "Back squat",
    default,
    deserialize_with = "deserialize_max",
    skip_serializing_if = "Option::is_none"
  )]
  back_squat: Option<f64>,
  #[serde(
    rename = "Deadlift",
    default,
    deserialize_with = "deserialize_max",
    skip_serializing_if = "Option::is_none"
  )]
  deadlift: Option<f64>,
}

impl OneRepMaxProfile {
  pub fn new(bench_press: Option<f64>, back_squat: Option<f64>, deadlift: Option<f64>) -> Self {
    Self {
      bench_press: bench_press.and_then(usable_max),
      back_squat: back_squat.and_then(usable_max),
      deadlift: deadlift.and_then(usable_max),
    }
  }

  pub fn with(mut self, lift: AnchorLift, value: f64) -> Self {
    *self.slot_mut(lift) = usable_max(value);
    self
  }

  /// Known max for a lift, if any
  pub fn get(&self, lift: AnchorLift) -> Option<f64> {
    match lift {
      AnchorLift::BenchPress => self.bench_press,
      AnchorLift::BackSquat => self.back_squat,
      AnchorLift::Deadlift => self.deadlift,
    }
  }

  /// Max for a lift with unknown read as zero
  pub fn value_or_zero(&self, lift: AnchorLift) -> f64 {
    self.get(lift).unwrap_or(0.0)
  }

  pub fn has_any(&self) -> bool {
    AnchorLift::ALL.iter().any(|lift| self.get(*lift).is_some())
  }

  fn slot_mut(&mut self, lift: AnchorLift) -> &mut Option<f64> {
    match lift {
      AnchorLift::BenchPress => &mut self.bench_press,
      AnchorLift::BackSquat => &mut self.back_squat,
      AnchorLift::Deadlift => &mut self.deadlift,
    }
  }
}

fn usable_max(value: f64) -> Option<f64> {
  (value.is_finite() && value > 0.0).then_some(value)
}

/// Form inputs arrive either as numbers or as the raw text the user typed
#[derive(Deserialize)]
#[serde(untagged)]
enum MaxInput {
  Number(f64),
  Text(String),
}

fn deserialize_max<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
  D: Deserializer<'de>,
{
  let input = Option::<MaxInput>::deserialize(deserializer)?;
  Ok(input.and_then(|value| match value {
    MaxInput::Number(n) => usable_max(n),
    MaxInput::Text(text) => text.trim().parse::<f64>().ok().and_then(usable_max),
  }))
}
