//! liftplan - one-rep-max driven training prescriptions
//!
//! Usage:
//! ```bash
//! # Prescribe one exercise from maxes given on the command line
//! liftplan prescribe "Incline Dumbbell Press" --week 1 --bench 100
//!
//! # Full week of a split for a stored user
//! liftplan plan --user sam --split "Push, pull, legs" --week 3
//!
//! # Record tested maxes, then move through the cycle
//! liftplan set-max --user sam --bench 100 --squat 140 --deadlift 180
//! liftplan toggle-exercise --user sam w1_d0_e0
//! liftplan complete-week --user sam --week 1
//! liftplan new-cycle --user sam --bench 102.5 --squat 145
//! ```

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use liftplan_lib::commands;
use liftplan_lib::config::AppConfig;
use liftplan_lib::db::AppState;
use liftplan_lib::schedule::{build_weekly_plan, split_keys, template_for};
use liftplan_lib::{prescribe, ExerciseTemplate, OneRepMaxProfile, WeekNumber};

#[derive(Parser)]
#[command(
  name = "liftplan",
  about = "Percentage-based strength programming from tested 1RMs"
)]
struct Cli {
  #[command(subcommand)]
  command: Command,

  /// Database URL override
  #[arg(long, global = true)]
  database_url: Option<String>,

  /// Enable debug logging
  #[arg(long, short = 'v', global = true)]
  verbose: bool,
}

#[derive(Args)]
struct MaxArgs {
  /// Bench press 1RM (kg)
  #[arg(long)]
  bench: Option<f64>,

  /// Back squat 1RM (kg)
  #[arg(long)]
  squat: Option<f64>,

  /// Deadlift 1RM (kg)
  #[arg(long)]
  deadlift: Option<f64>,
}

impl MaxArgs {
  fn profile(&self) -> OneRepMaxProfile {
    OneRepMaxProfile::new(self.bench, self.squat, self.deadlift)
  }
}

#[derive(Subcommand)]
enum Command {
  /// Prescribe a single exercise without touching the database
  Prescribe {
    /// Exercise name, matched case-insensitively
    exercise: String,

    #[arg(long, default_value = "1")]
    week: u32,

    #[arg(long, default_value = "4")]
    sets: u32,

    #[command(flatten)]
    maxes: MaxArgs,
  },

  /// Weekly plan for a split. With --user, maxes and week come from the store.
  Plan {
    #[arg(long, conflicts_with_all = ["bench", "squat", "deadlift"])]
    user: Option<String>,

    #[arg(long)]
    split: Option<String>,

    #[arg(long)]
    week: Option<u32>,

    #[command(flatten)]
    maxes: MaxArgs,
  },

  /// List the available splits
  Splits,

  /// Store tested maxes for a user
  SetMax {
    #[arg(long)]
    user: String,

    #[command(flatten)]
    maxes: MaxArgs,
  },

  /// Remember a user's split
  SetSplit {
    #[arg(long)]
    user: String,

    split: String,
  },

  /// Mark a week of the current cycle as done
  CompleteWeek {
    #[arg(long)]
    user: String,

    #[arg(long)]
    week: u32,
  },

  /// Check off one exercise of the cycle (or uncheck it with --undo)
  ToggleExercise {
    #[arg(long)]
    user: String,

    /// Slot id: w<week>_d<day>_e<index>, day and index counted from 0
    exercise_id: String,

    #[arg(long)]
    undo: bool,
  },

  /// Store retested maxes and start the next cycle
  NewCycle {
    #[arg(long)]
    user: String,

    #[command(flatten)]
    maxes: MaxArgs,
  },

  /// Show a user's position in the cycle
  Progress {
    #[arg(long)]
    user: String,
  },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

async fn open_state(config: AppConfig) -> Result<AppState> {
  Ok(AppState::initialize(config).await?)
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let mut config = AppConfig::load()?;
  if let Some(url) = cli.database_url {
    config.database_url = url;
  }

  let filter = if cli.verbose { "debug" } else { config.log_filter.as_str() };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::new(filter))
    .with_writer(std::io::stderr)
    .init();

  match cli.command {
    Command::Prescribe {
      exercise,
      week,
      sets,
      maxes,
    } => {
      let week = WeekNumber::new(week)?;
      let template = ExerciseTemplate::new(exercise, sets, "8-12", "90s");
      print_json(&prescribe(&template, &maxes.profile(), week))?;
    }
    Command::Plan {
      user: Some(user),
      split,
      week,
      ..
    } => {
      let state = open_state(config).await?;
      let plan = commands::get_weekly_plan(&state, &user, week, split)
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&plan)?;
    }
    Command::Plan {
      user: None,
      split,
      week,
      maxes,
    } => {
      let split = split.unwrap_or_else(|| config.default_split.clone());
      let template = template_for(&split)?;
      let week = week.map_or(Ok(WeekNumber::FIRST), WeekNumber::new)?;
      print_json(&build_weekly_plan(template, &maxes.profile(), week))?;
    }
    Command::Splits => {
      for key in split_keys() {
        println!("{}", key);
      }
    }
    Command::SetMax { user, maxes } => {
      let state = open_state(config).await?;
      let profile = commands::save_one_rep_max(&state, &user, maxes.profile())
        .await
        .map_err(|e| anyhow!(e))?;
      info!(user = %user, "1RM profile saved");
      print_json(&profile)?;
    }
    Command::SetSplit { user, split } => {
      let state = open_state(config).await?;
      let summary = commands::set_split(&state, &user, &split)
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&summary)?;
    }
    Command::CompleteWeek { user, week } => {
      let state = open_state(config).await?;
      let summary = commands::complete_week(&state, &user, week)
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&summary)?;
    }
    Command::ToggleExercise {
      user,
      exercise_id,
      undo,
    } => {
      let state = open_state(config).await?;
      let summary = commands::toggle_exercise(&state, &user, &exercise_id, !undo)
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&summary)?;
    }
    Command::NewCycle { user, maxes } => {
      let state = open_state(config).await?;
      let summary = commands::start_new_cycle(&state, &user, maxes.profile())
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&summary)?;
    }
    Command::Progress { user } => {
      let state = open_state(config).await?;
      let summary = commands::get_progress(&state, &user)
        .await
        .map_err(|e| anyhow!(e))?;
      print_json(&summary)?;
    }
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_plan_user_conflicts_with_inline_maxes() {
    let result = Cli::try_parse_from(["liftplan", "plan", "--user", "sam", "--bench", "100"]);
    assert_eq!(
      result.err().map(|e| e.kind()),
      Some(clap::error::ErrorKind::ArgumentConflict)
    );
  }

  #[test]
  fn test_plan_accepts_either_source_of_maxes() {
    assert!(Cli::try_parse_from(["liftplan", "plan", "--user", "sam", "--week", "2"]).is_ok());
    assert!(Cli::try_parse_from(["liftplan", "plan", "--bench", "100", "--squat", "140"]).is_ok());
  }

  #[test]
  fn test_toggle_exercise_undo_flag() {
    let cli = Cli::try_parse_from(["liftplan", "toggle-exercise", "--user", "sam", "w1_d0_e2", "--undo"]).unwrap();
    match cli.command {
      Command::ToggleExercise { exercise_id, undo, .. } => {
        assert_eq!(exercise_id, "w1_d0_e2");
        assert!(undo);
      }
      _ => panic!("expected toggle-exercise"),
    }
  }
}
