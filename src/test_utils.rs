//! Test utilities and helpers for unit and integration testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Profile fixtures
//! - Helper assertions

use sqlx::SqlitePool;

use crate::models::{AnchorLift, OneRepMaxProfile};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  let pool = sqlx::sqlite::SqlitePoolOptions::new()
    .max_connections(1)
    .connect("sqlite::memory:")
    .await
    .expect("Failed to create in-memory database");

  sqlx::migrate!("./migrations")
    .run(&pool)
    .await
    .expect("Failed to run migrations");

  pool
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// ---------------------------------------------------------------------------
/// Profile Fixtures
/// ---------------------------------------------------------------------------

/// Only the bench press tested, at 100 kg
pub fn bench_only_profile() -> OneRepMaxProfile {
  OneRepMaxProfile::default().with(AnchorLift::BenchPress, 100.0)
}

/// All three anchors tested
pub fn full_profile() -> OneRepMaxProfile {
  OneRepMaxProfile::new(Some(100.0), Some(140.0), Some(180.0))
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('one_rep_max_profiles', 'training_progress')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2, "Expected 2 tables, got {}", tables.len());

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_fixtures_have_expected_maxes() {
    assert!(bench_only_profile().has_any());
    assert_eq!(bench_only_profile().get(AnchorLift::BackSquat), None);
    assert_eq!(full_profile().get(AnchorLift::Deadlift), Some(180.0));
  }
}
