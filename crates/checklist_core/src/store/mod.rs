//! Day store contracts and implementations.
//!
//! # Responsibility
//! - Define the load/save/blank contract over per-date records.
//! - Keep the on-disk encoding (JSON array of tasks) inside this boundary.
//!
//! # Invariants
//! - `load` returns `Ok(None)` for a date never saved; it never fabricates a
//!   record.
//! - `save` fully replaces prior content (last write wins, no merge).
//! - Stores do not cache and do not coordinate concurrent writers.

use crate::model::day::DayRecord;
use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod file_store;
mod memory_store;

pub use file_store::FileDayStore;
pub use memory_store::MemoryDayStore;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error raised by day store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem read, write, rename or mkdir failure.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Persisted bytes for `date` are not a valid task array.
    Malformed {
        date: NaiveDate,
        source: serde_json::Error,
    },
    /// Record could not be encoded.
    Encode(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "i/o error at `{}`: {source}", path.display()),
            Self::Malformed { date, source } => {
                write!(f, "malformed day record for {}: {source}", date_key(*date))
            }
            Self::Encode(err) => write!(f, "failed to encode day record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Malformed { source, .. } => Some(source),
            Self::Encode(err) => Some(err),
        }
    }
}

/// Persistence contract for per-date checklists.
pub trait DayStore {
    /// Returns the persisted record for `date`, or `None` when absent.
    fn load(&self, date: NaiveDate) -> StoreResult<Option<DayRecord>>;
    /// Persists `record` for `date`, replacing any prior content.
    fn save(&self, date: NaiveDate, record: &DayRecord) -> StoreResult<()>;
    /// Number of slots in a new day's template.
    fn default_task_count(&self) -> usize;

    /// Returns the blank template for a new day.
    fn blank(&self) -> DayRecord {
        DayRecord::blank(self.default_task_count())
    }
}

impl<S: DayStore + ?Sized> DayStore for &S {
    fn load(&self, date: NaiveDate) -> StoreResult<Option<DayRecord>> {
        (**self).load(date)
    }

    fn save(&self, date: NaiveDate, record: &DayRecord) -> StoreResult<()> {
        (**self).save(date, record)
    }

    fn default_task_count(&self) -> usize {
        (**self).default_task_count()
    }
}

/// Formats `date` as the storage key (`YYYY-MM-DD`).
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` storage key.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT).ok()
}

pub(crate) fn encode_record(record: &DayRecord) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(record).map_err(StoreError::Encode)
}

pub(crate) fn decode_record(date: NaiveDate, bytes: &[u8]) -> StoreResult<DayRecord> {
    serde_json::from_slice(bytes).map_err(|source| StoreError::Malformed { date, source })
}
