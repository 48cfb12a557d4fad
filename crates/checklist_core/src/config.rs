//! Store configuration.
//!
//! # Responsibility
//! - Carry the storage directory and blank-template size as an explicit value.
//! - Resolve the per-user default data directory.
//!
//! # Invariants
//! - `default_task_count` is a starting size, never a cap.
//! - Nothing here is process-global; tests build configs over temp dirs.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable overriding the default data directory.
pub const DATA_DIR_ENV: &str = "DAILY_CHECKLIST_DATA_DIR";
/// Blank slots created for a new day.
pub const DEFAULT_TASK_COUNT: usize = 5;

const APP_DIR_NAME: &str = "daily-checklist";
const LOG_DIR_NAME: &str = "logs";

/// What a store does when a persisted record cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptRecordPolicy {
    /// Surface the decode failure to the caller.
    #[default]
    FailFast,
    /// Rename the bad file aside and report the date as absent.
    Quarantine,
}

/// How record files are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the target file in place.
    #[default]
    Direct,
    /// Write a sibling `.tmp` file, then rename it over the target.
    TempThenRename,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDataDir,
    InvalidTaskCount(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataDir => write!(f, "data_dir cannot be empty"),
            Self::InvalidTaskCount(count) => {
                write!(f, "default_task_count must be at least 1, got {count}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Configuration consumed by `FileDayStore` and the blank template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub default_task_count: usize,
    pub corrupt_policy: CorruptRecordPolicy,
    pub write_mode: WriteMode,
}

impl StoreConfig {
    /// Creates a config rooted at `data_dir` with default behavior.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            default_task_count: DEFAULT_TASK_COUNT,
            corrupt_policy: CorruptRecordPolicy::default(),
            write_mode: WriteMode::default(),
        }
    }

    /// Creates a config rooted at the resolved default data directory.
    pub fn from_env() -> Self {
        Self::new(default_data_dir())
    }

    pub fn with_default_task_count(mut self, count: usize) -> Self {
        self.default_task_count = count;
        self
    }

    pub fn with_corrupt_policy(mut self, policy: CorruptRecordPolicy) -> Self {
        self.corrupt_policy = policy;
        self
    }

    pub fn with_write_mode(mut self, mode: WriteMode) -> Self {
        self.write_mode = mode;
        self
    }

    /// Checks the config before a store is built from it.
    ///
    /// # Errors
    /// - `EmptyDataDir` when `data_dir` is an empty path.
    /// - `InvalidTaskCount` when `default_task_count` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if self.default_task_count == 0 {
            return Err(ConfigError::InvalidTaskCount(self.default_task_count));
        }
        Ok(())
    }

    /// Directory for rolling log files (`<data_dir>/logs`).
    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join(LOG_DIR_NAME)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Resolves the per-user data directory.
///
/// Uses `DAILY_CHECKLIST_DATA_DIR` when set and non-blank, otherwise
/// `dirs::data_dir()/daily-checklist` (`~/.local/share/daily-checklist` on
/// Linux), falling back to the system temp dir when no home is known.
pub fn default_data_dir() -> PathBuf {
    if let Some(raw) = std::env::var_os(DATA_DIR_ENV) {
        if !raw.to_string_lossy().trim().is_empty() {
            return PathBuf::from(raw);
        }
    }
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| std::env::temp_dir().join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, CorruptRecordPolicy, StoreConfig, WriteMode, DEFAULT_TASK_COUNT};
    use std::path::PathBuf;

    #[test]
    fn new_uses_documented_defaults() {
        let config = StoreConfig::new("/tmp/checklist");
        assert_eq!(config.default_task_count, DEFAULT_TASK_COUNT);
        assert_eq!(config.corrupt_policy, CorruptRecordPolicy::FailFast);
        assert_eq!(config.write_mode, WriteMode::Direct);
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/checklist/logs"));
    }

    #[test]
    fn validate_rejects_zero_task_count_and_empty_dir() {
        let zero = StoreConfig::new("/tmp/checklist").with_default_task_count(0);
        assert_eq!(zero.validate(), Err(ConfigError::InvalidTaskCount(0)));

        let empty = StoreConfig::new("");
        assert_eq!(empty.validate(), Err(ConfigError::EmptyDataDir));
    }
}
