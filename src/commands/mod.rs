pub mod prescription;

pub use prescription::{
  complete_week, get_progress, get_weekly_plan, prescribe_exercise, save_one_rep_max,
  set_split, start_new_cycle, toggle_exercise, ProgressSummary,
};
