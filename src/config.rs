use std::env;

use crate::schedule::{template_for, ScheduleError};

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

const DATABASE_URL_VAR: &str = "LIFTPLAN_DATABASE_URL";
const DEFAULT_SPLIT_VAR: &str = "LIFTPLAN_DEFAULT_SPLIT";
const LOG_FILTER_VAR: &str = "LIFTPLAN_LOG";

const DEFAULT_DATABASE_URL: &str = "sqlite://liftplan.db?mode=rwc";
const DEFAULT_SPLIT: &str = "Upper, lower";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  #[error("{var} is set but empty")]
  Empty { var: &'static str },

  #[error("{var}: {source}")]
  InvalidSplit {
    var: &'static str,
    #[source]
    source: ScheduleError,
  },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub database_url: String,
  /// Split used when a user has not picked one
  pub default_split: String,
  pub log_filter: String,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      default_split: DEFAULT_SPLIT.to_string(),
      log_filter: DEFAULT_LOG_FILTER.to_string(),
    }
  }
}

fn read_var(var: &'static str, default: &str) -> Result<String, ConfigError> {
  match env::var(var) {
    Ok(value) if value.trim().is_empty() => Err(ConfigError::Empty { var }),
    Ok(value) => Ok(value.trim().to_string()),
    Err(_) => Ok(default.to_string()),
  }
}

impl AppConfig {
  /// Read configuration from the process environment (after loading `.env`)
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let default_split = read_var(DEFAULT_SPLIT_VAR, DEFAULT_SPLIT)?;
    let default_split = template_for(&default_split)
      .map_err(|source| ConfigError::InvalidSplit {
        var: DEFAULT_SPLIT_VAR,
        source,
      })?
      .key
      .to_string();

    Ok(Self {
      database_url: read_var(DATABASE_URL_VAR, DEFAULT_DATABASE_URL)?,
      default_split,
      log_filter: read_var(LOG_FILTER_VAR, DEFAULT_LOG_FILTER)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  #[test]
  #[serial]
  fn test_defaults_when_unset() {
    temp_env::with_vars_unset([DATABASE_URL_VAR, DEFAULT_SPLIT_VAR, LOG_FILTER_VAR], || {
      let config = AppConfig::from_env().expect("defaults should load");
      assert_eq!(config, AppConfig::default());
    });
  }

  #[test]
  #[serial]
  fn test_reads_overrides() {
    temp_env::with_vars(
      [
        (DATABASE_URL_VAR, Some("sqlite::memory:")),
        (DEFAULT_SPLIT_VAR, Some("full body")),
        (LOG_FILTER_VAR, Some("liftplan_lib=debug")),
      ],
      || {
        let config = AppConfig::from_env().expect("overrides should load");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.default_split, "Full body");
        assert_eq!(config.log_filter, "liftplan_lib=debug");
      },
    );
  }

  #[test]
  #[serial]
  fn test_rejects_unknown_split() {
    temp_env::with_var(DEFAULT_SPLIT_VAR, Some("Crossfit"), || {
      let err = AppConfig::from_env().unwrap_err();
      assert!(matches!(err, ConfigError::InvalidSplit { .. }));
      assert_eq!(err.to_string(), "LIFTPLAN_DEFAULT_SPLIT: Unknown split: Crossfit");
    });
  }

  #[test]
  #[serial]
  fn test_rejects_empty_database_url() {
    temp_env::with_var(DATABASE_URL_VAR, Some("   "), || {
      let err = AppConfig::from_env().unwrap_err();
      assert!(matches!(err, ConfigError::Empty { var: DATABASE_URL_VAR }));
    });
  }
}
