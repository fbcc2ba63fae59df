//! Runtime settings resolved from the environment.
//!
//! # Responsibility
//! - Read logging settings for executables that embed the core.
//!
//! # Invariants
//! - Blank variables are treated as unset.
//! - An unset or unsupported level falls back to `default_log_level()`.
//! - Fallback reasons are returned in `warnings`, since logging is usually
//!   not running yet when settings are read.

use crate::logging::{default_log_level, normalize_level};
use std::path::PathBuf;

pub const LOG_LEVEL_ENV: &str = "BOOKTRACK_LOG_LEVEL";
pub const LOG_DIR_ENV: &str = "BOOKTRACK_LOG_DIR";

/// Core runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Normalized log level passed to `init_logging`.
    pub log_level: String,
    /// Directory for rolling log files; `None` disables file logging.
    pub log_dir: Option<PathBuf>,
    /// Values that were ignored while resolving, for the caller to report.
    pub warnings: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            warnings: Vec::new(),
        }
    }
}

impl CoreConfig {
    /// Reads `BOOKTRACK_LOG_LEVEL` and `BOOKTRACK_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(LOG_LEVEL_ENV)) {
            match normalize_level(&raw) {
                Ok(level) => config.log_level = level.to_string(),
                Err(err) => config.warnings.push(format!(
                    "{LOG_LEVEL_ENV}: {err}; using `{}`",
                    config.log_level
                )),
            }
        }
        config.log_dir = non_blank(lookup(LOG_DIR_ENV)).map(PathBuf::from);

        config
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}
