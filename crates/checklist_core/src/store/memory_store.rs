//! In-memory day store.
//!
//! Holds encoded bytes rather than decoded records so reads go through the
//! same decode path as files and byte-level comparisons stay meaningful.

use super::{decode_record, encode_record, DayStore, StoreResult};
use crate::config::DEFAULT_TASK_COUNT;
use crate::model::day::DayRecord;
use chrono::NaiveDate;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Throwaway store keyed by date.
#[derive(Debug)]
pub struct MemoryDayStore {
    records: RefCell<BTreeMap<NaiveDate, Vec<u8>>>,
    default_task_count: usize,
}

impl MemoryDayStore {
    pub fn new() -> Self {
        Self::with_default_task_count(DEFAULT_TASK_COUNT)
    }

    pub fn with_default_task_count(default_task_count: usize) -> Self {
        Self {
            records: RefCell::new(BTreeMap::new()),
            default_task_count,
        }
    }

    /// Returns the stored bytes for `date`.
    pub fn raw(&self, date: NaiveDate) -> Option<Vec<u8>> {
        self.records.borrow().get(&date).cloned()
    }

    /// Stores `bytes` for `date` without validation.
    pub fn insert_raw(&self, date: NaiveDate, bytes: impl Into<Vec<u8>>) {
        self.records.borrow_mut().insert(date, bytes.into());
    }

    /// Dates with a stored record, ascending.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.borrow().keys().copied().collect()
    }
}

impl Default for MemoryDayStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DayStore for MemoryDayStore {
    fn load(&self, date: NaiveDate) -> StoreResult<Option<DayRecord>> {
        match self.records.borrow().get(&date) {
            Some(bytes) => decode_record(date, bytes).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, date: NaiveDate, record: &DayRecord) -> StoreResult<()> {
        let bytes = encode_record(record)?;
        self.records.borrow_mut().insert(date, bytes);
        Ok(())
    }

    fn default_task_count(&self) -> usize {
        self.default_task_count
    }
}
