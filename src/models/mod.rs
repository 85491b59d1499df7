pub mod prescription;
pub mod profile;
pub mod progress;
pub mod schedule;

pub use prescription::{ExercisePrescription, ExerciseTemplate};
pub use profile::{AnchorLift, OneRepMaxProfile};
pub use progress::{ExerciseIdError, ExerciseSlot, TrainingProgress};
pub use schedule::{Workout, WorkoutDay, WorkoutPlan};
