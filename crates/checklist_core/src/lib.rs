//! Core domain logic for Daily Checklist.
//! This crate is the single source of truth for day records, carry-over and
//! completion metrics; UI layers call into it through `DayService`.

pub mod aggregate;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use aggregate::completion::{
    completion, completion_bucket, completion_fraction, Completion, NO_TASKS,
};
pub use config::{
    default_data_dir, ConfigError, CorruptRecordPolicy, StoreConfig, WriteMode, DATA_DIR_ENV,
    DEFAULT_TASK_COUNT,
};
pub use logging::{default_log_level, init_logging, init_logging_for, logging_status, LoggingError};
pub use model::day::{DayRecord, Task};
pub use model::edit::{DayEdit, EditError};
pub use service::carry_over::{carry_over, CarryOverOutcome};
pub use service::day_service::{DayService, ServiceError, ServiceResult};
pub use store::{
    date_key, parse_date_key, DayStore, FileDayStore, MemoryDayStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
