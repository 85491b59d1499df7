//! One-rep-max driven strength programming
//!
//! The prescription engine (`periodization`, `rounding`, `resolver`,
//! `estimator`, `prescription`) is pure and synchronous. `schedule` applies it
//! to split templates; `store`, `db` and `commands` are the persistence and
//! caller layers around it.

pub mod commands;
pub mod config;
pub mod db;
pub mod estimator;
pub mod models;
pub mod periodization;
pub mod prescription;
pub mod resolver;
pub mod rounding;
pub mod schedule;
pub mod store;

#[cfg(test)]
pub mod test_utils;

pub use models::{AnchorLift, ExercisePrescription, ExerciseTemplate, OneRepMaxProfile, WorkoutPlan};
pub use periodization::{CycleWeek, WeekError, WeekNumber};
pub use prescription::prescribe;
