//! Environment-driven store configuration.
//!
//! # Responsibility
//! - Resolve database path and logging settings from `REELREVIEW_*` variables.
//!
//! # Invariants
//! - Blank values are treated as unset.
//! - Resolution never fails; validation of the values happens where they
//!   are used (`open_db`, `init_logging`).

use crate::logging::default_log_level;
use std::path::PathBuf;

pub const DB_PATH_ENV: &str = "REELREVIEW_DB_PATH";
pub const LOG_LEVEL_ENV: &str = "REELREVIEW_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "REELREVIEW_LOG_DIR";

/// Resolved settings for opening the store and its logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Database file; `None` when not configured.
    pub db_path: Option<PathBuf>,
    /// Log level passed to `init_logging`.
    pub log_level: String,
    /// Log directory; file logging is skipped when `None`.
    pub log_dir: Option<String>,
}

impl StoreConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            db_path: read(DB_PATH_ENV).map(PathBuf::from),
            log_level: read(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_ENV),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, DB_PATH_ENV, LOG_DIR_ENV, LOG_LEVEL_ENV};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = StoreConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.db_path, None);
        assert_eq!(config.log_level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn values_are_trimmed_and_blank_values_ignored() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            (DB_PATH_ENV, "  /data/reviews.db "),
            (LOG_LEVEL_ENV, " warn"),
            (LOG_DIR_ENV, "   "),
        ]));
        assert_eq!(config.db_path, Some(PathBuf::from("/data/reviews.db")));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }
}
