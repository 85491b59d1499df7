//! Persistence for one-rep-max profiles and cycle progress
//!
//! The prescription engine never reads from here; callers load a profile,
//! hand it to the engine and store whatever they want to keep.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection, SqliteExecutor, SqlitePool};
use tracing::{info, warn};

use crate::models::{AnchorLift, ExerciseSlot, OneRepMaxProfile, TrainingProgress};
use crate::periodization::{WeekNumber, CYCLE_LENGTH};

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),

  #[error("Corrupt record: {0}")]
  Corrupt(String),

  #[error("Week {0} is outside the 4-week cycle")]
  WeekOutOfCycle(u32),

  #[error("At least one 1RM value is required to start a new cycle")]
  EmptyProfile,
}

fn parse_timestamp(value: Option<String>) -> DateTime<Utc> {
  value
    .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
    .map(|dt| dt.with_timezone(&Utc))
    .unwrap_or_else(Utc::now)
}

/// ---------------------------------------------------------------------------
/// Write Transactions
/// ---------------------------------------------------------------------------

type TxFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'c>>;

/// Run `body` inside `BEGIN IMMEDIATE`: the write lock is held from the first
/// read, and other writers wait on the busy timeout.
async fn write_transaction<T, F>(pool: &SqlitePool, body: F) -> Result<T, StoreError>
where
  F: for<'c> FnOnce(&'c mut SqliteConnection) -> TxFuture<'c, T>,
{
  let mut conn = pool.acquire().await?;
  sqlx::query("BEGIN IMMEDIATE").execute(&mut *conn).await?;

  match body(&mut *conn).await {
    Ok(value) => {
      sqlx::query("COMMIT").execute(&mut *conn).await?;
      Ok(value)
    }
    Err(e) => {
      if let Err(rollback) = sqlx::query("ROLLBACK").execute(&mut *conn).await {
        warn!(error = %rollback, "rollback failed");
      }
      Err(e)
    }
  }
}

/// ---------------------------------------------------------------------------
/// One-Rep-Max Profiles
/// ---------------------------------------------------------------------------

/// Stored profile for a user; empty when nothing has been tested yet
pub async fn load_profile(pool: &SqlitePool, user_id: &str) -> Result<OneRepMaxProfile, StoreError> {
  let row: Option<(Option<f64>, Option<f64>, Option<f64>)> = sqlx::query_as(
    "SELECT bench_press, back_squat, deadlift FROM one_rep_max_profiles WHERE user_id = ?1",
  )
  .bind(user_id)
  .fetch_optional(pool)
  .await?;

  Ok(match row {
    Some((bench_press, back_squat, deadlift)) => OneRepMaxProfile::new(bench_press, back_squat, deadlift),
    None => OneRepMaxProfile::default(),
  })
}

/// Replace the stored profile. Unknown lifts are stored as NULL.
pub async fn save_profile<'e, E>(executor: E, user_id: &str, profile: &OneRepMaxProfile) -> Result<(), StoreError>
where
  E: SqliteExecutor<'e>,
{
  sqlx::query(
    r#"
    INSERT INTO one_rep_max_profiles (user_id, bench_press, back_squat, deadlift, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
    ON CONFLICT(user_id) DO UPDATE SET
      bench_press = excluded.bench_press,
      back_squat = excluded.back_squat,
      deadlift = excluded.deadlift,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(user_id)
  .bind(profile.get(AnchorLift::BenchPress))
  .bind(profile.get(AnchorLift::BackSquat))
  .bind(profile.get(AnchorLift::Deadlift))
  .bind(Utc::now().to_rfc3339())
  .execute(executor)
  .await?;

  Ok(())
}

/// ---------------------------------------------------------------------------
/// Training Progress
/// ---------------------------------------------------------------------------

/// Stored progress, or a fresh cycle-1/week-1 record if there is none
pub async fn load_progress<'e, E>(executor: E, user_id: &str) -> Result<TrainingProgress, StoreError>
where
  E: SqliteExecutor<'e>,
{
  let row = sqlx::query(
    r#"
    SELECT cycle_number, current_week, completed_weeks_json, completed_exercises_json, split, updated_at
    FROM training_progress
    WHERE user_id = ?1
    "#,
  )
  .bind(user_id)
  .fetch_optional(executor)
  .await?;

  let Some(row) = row else {
    return Ok(TrainingProgress::start(user_id));
  };

  let completed_json: String = row.get("completed_weeks_json");
  let completed_weeks: Vec<u32> = serde_json::from_str(&completed_json)
    .map_err(|e| StoreError::Corrupt(format!("completed weeks for {}: {}", user_id, e)))?;
  let exercises_json: String = row.get("completed_exercises_json");
  let completed_exercises = serde_json::from_str(&exercises_json)
    .map_err(|e| StoreError::Corrupt(format!("completed exercises for {}: {}", user_id, e)))?;

  Ok(TrainingProgress {
    user_id: user_id.to_string(),
    cycle_number: row.get::<i64, _>("cycle_number").max(1) as u32,
    current_week: row.get::<i64, _>("current_week").clamp(1, CYCLE_LENGTH as i64) as u32,
    completed_weeks,
    completed_exercises,
    split: row.get("split"),
    updated_at: parse_timestamp(row.get("updated_at")),
  })
}

pub async fn save_progress<'e, E>(executor: E, progress: &TrainingProgress) -> Result<(), StoreError>
where
  E: SqliteExecutor<'e>,
{
  let completed_json = serde_json::to_string(&progress.completed_weeks)
    .map_err(|e| StoreError::Corrupt(e.to_string()))?;
  let exercises_json = serde_json::to_string(&progress.completed_exercises)
    .map_err(|e| StoreError::Corrupt(e.to_string()))?;

  sqlx::query(
    r#"
    INSERT INTO training_progress
      (user_id, cycle_number, current_week, completed_weeks_json, completed_exercises_json, split, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(user_id) DO UPDATE SET
      cycle_number = excluded.cycle_number,
      current_week = excluded.current_week,
      completed_weeks_json = excluded.completed_weeks_json,
      completed_exercises_json = excluded.completed_exercises_json,
      split = excluded.split,
      updated_at = excluded.updated_at
    "#,
  )
  .bind(&progress.user_id)
  .bind(progress.cycle_number as i64)
  .bind(progress.current_week as i64)
  .bind(&completed_json)
  .bind(&exercises_json)
  .bind(&progress.split)
  .bind(progress.updated_at.to_rfc3339())
  .execute(executor)
  .await?;

  Ok(())
}

/// Load a user's progress, apply `update` and store it, under one write lock
async fn update_progress<F>(pool: &SqlitePool, user_id: &str, update: F) -> Result<TrainingProgress, StoreError>
where
  F: FnOnce(&mut TrainingProgress) + Send + 'static,
{
  let user_id = user_id.to_string();
  write_transaction(pool, move |conn| {
    Box::pin(async move {
      let mut progress = load_progress(&mut *conn, &user_id).await?;
      update(&mut progress);
      save_progress(&mut *conn, &progress).await?;
      Ok(progress)
    })
  })
  .await
}

fn check_in_cycle(week: u32) -> Result<(), StoreError> {
  if week > CYCLE_LENGTH {
    warn!(week, "rejecting week outside the cycle");
    return Err(StoreError::WeekOutOfCycle(week));
  }
  Ok(())
}

/// Mark a week of the current cycle as done
pub async fn complete_week(pool: &SqlitePool, user_id: &str, week: WeekNumber) -> Result<TrainingProgress, StoreError> {
  check_in_cycle(week.get())?;

  let progress = update_progress(pool, user_id, move |progress| progress.mark_week_complete(week.get())).await?;

  info!(
    user_id,
    week = week.get(),
    cycle_complete = progress.is_cycle_complete(),
    "week completed"
  );

  Ok(progress)
}

/// Check or uncheck one exercise slot of the current cycle
pub async fn toggle_exercise(
  pool: &SqlitePool,
  user_id: &str,
  slot: ExerciseSlot,
  completed: bool,
) -> Result<TrainingProgress, StoreError> {
  check_in_cycle(slot.week)?;

  let progress = update_progress(pool, user_id, move |progress| progress.set_exercise_completed(slot, completed)).await?;

  info!(user_id, exercise = %slot, completed, "exercise toggled");

  Ok(progress)
}

/// Store retested maxes and start the next cycle from week 1
pub async fn start_new_cycle(
  pool: &SqlitePool,
  user_id: &str,
  profile: &OneRepMaxProfile,
) -> Result<TrainingProgress, StoreError> {
  if !profile.has_any() {
    return Err(StoreError::EmptyProfile);
  }

  let user_id = user_id.to_string();
  let profile = profile.clone();
  let progress = write_transaction(pool, move |conn| {
    Box::pin(async move {
      let mut progress = load_progress(&mut *conn, &user_id).await?;
      progress.begin_next_cycle();
      save_profile(&mut *conn, &user_id, &profile).await?;
      save_progress(&mut *conn, &progress).await?;
      Ok(progress)
    })
  })
  .await?;

  info!(user_id = %progress.user_id, cycle_number = progress.cycle_number, "new cycle started");

  Ok(progress)
}

/// Remember which split the user trains
pub async fn set_split(pool: &SqlitePool, user_id: &str, split: &str) -> Result<TrainingProgress, StoreError> {
  let split = split.to_string();
  update_progress(pool, user_id, move |progress| {
    progress.split = Some(split);
    progress.updated_at = Utc::now();
  })
  .await
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::test_utils::{full_profile, setup_test_db, teardown_test_db};
  use sqlx::sqlite::SqlitePoolOptions;

  fn week(n: u32) -> WeekNumber {
    WeekNumber::new(n).unwrap()
  }

  #[tokio::test]
  async fn test_profile_roundtrip() {
    let pool = setup_test_db().await;

    let profile = OneRepMaxProfile::new(Some(100.0), None, Some(180.0));
    save_profile(&pool, "u1", &profile).await.expect("save profile");

    let loaded = load_profile(&pool, "u1").await.expect("load profile");
    assert_eq!(loaded, profile);
    assert_eq!(loaded.get(AnchorLift::BackSquat), None);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_missing_profile_is_empty() {
    let pool = setup_test_db().await;

    let loaded = load_profile(&pool, "nobody").await.expect("load profile");
    assert!(!loaded.has_any());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_save_profile_overwrites() {
    let pool = setup_test_db().await;

    save_profile(&pool, "u1", &full_profile()).await.unwrap();
    let retest = OneRepMaxProfile::default().with(AnchorLift::BenchPress, 105.0);
    save_profile(&pool, "u1", &retest).await.unwrap();

    let loaded = load_profile(&pool, "u1").await.unwrap();
    assert_eq!(loaded, retest);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_progress_defaults_for_new_user() {
    let pool = setup_test_db().await;

    let progress = load_progress(&pool, "u1").await.unwrap();
    assert_eq!(progress.cycle_number, 1);
    assert_eq!(progress.current_week, 1);
    assert!(progress.completed_weeks.is_empty());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_complete_weeks_through_cycle() {
    let pool = setup_test_db().await;

    for n in 1..=4 {
      complete_week(&pool, "u1", week(n)).await.expect("complete week");
    }

    let progress = load_progress(&pool, "u1").await.unwrap();
    assert_eq!(progress.completed_weeks, vec![1, 2, 3, 4]);
    assert_eq!(progress.current_week, 4);
    assert!(progress.is_cycle_complete());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_complete_week_rejects_week_outside_cycle() {
    let pool = setup_test_db().await;

    let result = complete_week(&pool, "u1", week(5)).await;
    assert!(matches!(result, Err(StoreError::WeekOutOfCycle(5))));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_new_cycle_stores_maxes_and_resets_weeks() {
    let pool = setup_test_db().await;

    complete_week(&pool, "u1", week(1)).await.unwrap();
    let retest = OneRepMaxProfile::new(Some(102.5), Some(142.5), None);
    let progress = start_new_cycle(&pool, "u1", &retest).await.expect("new cycle");

    assert_eq!(progress.cycle_number, 2);
    assert_eq!(progress.current_week, 1);
    assert!(progress.completed_weeks.is_empty());
    assert_eq!(load_profile(&pool, "u1").await.unwrap(), retest);
    assert_eq!(load_progress(&pool, "u1").await.unwrap().cycle_number, 2);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_new_cycle_requires_a_max() {
    let pool = setup_test_db().await;

    let result = start_new_cycle(&pool, "u1", &OneRepMaxProfile::default()).await;
    assert!(matches!(result, Err(StoreError::EmptyProfile)));
    assert_eq!(load_progress(&pool, "u1").await.unwrap().cycle_number, 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_toggle_exercise_persists_and_clears() {
    let pool = setup_test_db().await;
    let slot = ExerciseSlot::new(1, 0, 2);

    toggle_exercise(&pool, "u1", slot, true).await.expect("check exercise");
    let progress = load_progress(&pool, "u1").await.unwrap();
    assert!(progress.is_exercise_completed(slot));
    assert_eq!(progress.completed_exercises.get("w1_d0_e2"), Some(&true));

    toggle_exercise(&pool, "u1", slot, false).await.expect("uncheck exercise");
    let progress = load_progress(&pool, "u1").await.unwrap();
    assert!(progress.completed_exercises.is_empty());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_toggle_exercise_rejects_week_outside_cycle() {
    let pool = setup_test_db().await;

    let result = toggle_exercise(&pool, "u1", ExerciseSlot::new(5, 0, 0), true).await;
    assert!(matches!(result, Err(StoreError::WeekOutOfCycle(5))));

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_new_cycle_clears_completed_exercises() {
    let pool = setup_test_db().await;

    toggle_exercise(&pool, "u1", ExerciseSlot::new(2, 1, 0), true).await.unwrap();
    let progress = start_new_cycle(&pool, "u1", &full_profile()).await.unwrap();
    assert!(progress.completed_exercises.is_empty());
    assert!(load_progress(&pool, "u1").await.unwrap().completed_exercises.is_empty());

    teardown_test_db(pool).await;
  }

  #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
  async fn test_concurrent_week_completions_are_all_kept() {
    // File-backed so several pooled connections share one database
    let path = std::env::temp_dir().join(format!("liftplan-concurrent-{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);
    let pool = SqlitePoolOptions::new()
      .max_connections(4)
      .connect(&format!("sqlite://{}?mode=rwc", path.display()))
      .await
      .expect("open file database");
    sqlx::migrate!("./migrations").run(&pool).await.expect("migrate");

    for round in 0..20 {
      let user = format!("u{}", round);
      let (first, second) = tokio::join!(
        complete_week(&pool, &user, week(1)),
        complete_week(&pool, &user, week(2))
      );
      first.expect("complete week 1");
      second.expect("complete week 2");

      let progress = load_progress(&pool, &user).await.unwrap();
      assert_eq!(progress.completed_weeks, vec![1, 2], "round {}", round);
    }

    pool.close().await;
    let _ = std::fs::remove_file(&path);
  }

  #[tokio::test]
  async fn test_set_split_persists() {
    let pool = setup_test_db().await;

    set_split(&pool, "u1", "Full body").await.unwrap();
    let progress = load_progress(&pool, "u1").await.unwrap();
    assert_eq!(progress.split.as_deref(), Some("Full body"));

    teardown_test_db(pool).await;
  }
}
