//! Four-week mesocycle periodization
//!
//! Maps an absolute training week to its position in the repeating cycle:
//! - weeks 1-3 build intensity (70% -> 75% -> 80% of 1RM)
//! - week 4 is a deload at 65%
//! - every completed cycle adds a fixed increment to the working max
//!
//! Rep ranges and rest periods are pure functions of the load percentage.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
/// Cycle Constants
// ---------------------------------------------------------------------------

pub const CYCLE_LENGTH: u32 = 4;

/// Added to every tested max once per completed cycle (kg)
pub const PROGRESSION_INCREMENT_KG: f64 = 2.5;

/// Load percentage indexed by `week_in_cycle - 1`
const WEEK_PERCENTAGES: [f64; CYCLE_LENGTH as usize] = [0.70, 0.75, 0.80, 0.65];

const DELOAD_WEEK_IN_CYCLE: u32 = 4;

// ---------------------------------------------------------------------------
/// Week Number: validated absolute training week
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    #[error("Week number must be 1 or greater (got {0})")]
    NotPositive(u32),
}

/// Absolute week number, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct WeekNumber(u32);

impl WeekNumber {
    pub const FIRST: WeekNumber = WeekNumber(1);

    pub fn new(week: u32) -> Result<Self, WeekError> {
        if week == 0 {
            return Err(WeekError::NotPositive(week));
        }
        Ok(Self(week))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u32> for WeekNumber {
    type Error = WeekError;
    fn try_from(week: u32) -> Result<Self, Self::Error> {
        Self::new(week)
    }
}

impl From<WeekNumber> for u32 {
    fn from(week: WeekNumber) -> Self {
        week.0
    }
}

impl std::fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
/// Cycle Week: position inside the mesocycle
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CycleWeek {
    pub week: u32,
    /// 1..=4
    pub week_in_cycle: u32,
    /// 0 for the first cycle
    pub cycle_number: u32,
    pub percentage: f64,
    pub is_deload: bool,
}

impl CycleWeek {
    pub fn from_week(week: WeekNumber) -> Self {
        let offset = week.get() - 1;
        let week_in_cycle = offset % CYCLE_LENGTH + 1;

        Self {
            week: week.get(),
            week_in_cycle,
            cycle_number: offset / CYCLE_LENGTH,
            percentage: WEEK_PERCENTAGES[(week_in_cycle - 1) as usize],
            is_deload: week_in_cycle == DELOAD_WEEK_IN_CYCLE,
        }
    }

    /// Tested max adjusted for long-term progression across cycles
    pub fn effective_max(&self, base_max: f64) -> f64 {
        base_max + self.cycle_number as f64 * PROGRESSION_INCREMENT_KG
    }

    /// Percentage as a whole number, e.g. 70 for 0.70
    pub fn percent_label(&self) -> u32 {
        (self.percentage * 100.0).round() as u32
    }
}

// ---------------------------------------------------------------------------
/// Rep / Rest Policy
// ---------------------------------------------------------------------------

/// Descending thresholds; first one the percentage reaches wins
const REP_RANGES: [(f64, &str); 3] = [(0.85, "3-5"), (0.75, "6-8"), (0.65, "8-12")];
const REP_RANGE_LIGHT: &str = "12-15";

const LONG_REST_THRESHOLD: f64 = 0.75;
pub const LONG_REST: &str = "2-3min";
pub const SHORT_REST: &str = "90s";

pub fn rep_range(percentage: f64) -> &'static str {
    REP_RANGES
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map(|(_, reps)| *reps)
        .unwrap_or(REP_RANGE_LIGHT)
}

pub fn rest_period(percentage: f64) -> &'static str {
    if percentage >= LONG_REST_THRESHOLD {
        LONG_REST
    } else {
        SHORT_REST
    }
}
