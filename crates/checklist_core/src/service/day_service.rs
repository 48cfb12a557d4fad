//! Day checklist use-case service.
//!
//! # Responsibility
//! - Provide the load/save/aggregate entry points the UI layer calls.
//! - Run "apply edit, then persist" as one step over an owned record.
//! - Run carry-over once at startup.
//!
//! # Invariants
//! - Opening a day that has no record creates and persists the blank template.
//! - Completion queries never create records.
//! - A rejected edit writes nothing.

use crate::aggregate::completion::{completion, Completion};
use crate::model::day::DayRecord;
use crate::model::edit::{DayEdit, EditError};
use crate::service::carry_over::{carry_over, CarryOverOutcome};
use crate::store::{date_key, DayStore, StoreError};
use chrono::NaiveDate;
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for day use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Persistence-layer failure.
    Store(StoreError),
    /// Edit referenced a slot that does not exist.
    Edit(EditError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Edit(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Edit(err) => Some(err),
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<EditError> for ServiceError {
    fn from(value: EditError) -> Self {
        Self::Edit(value)
    }
}

/// Use-case service over a `DayStore`.
pub struct DayService<S: DayStore> {
    store: S,
}

impl<S: DayStore> DayService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Forwards yesterday's unfinished tasks into `today`.
    ///
    /// Call once per process, before `today` is first displayed.
    pub fn carry_over(&self, today: NaiveDate) -> ServiceResult<CarryOverOutcome> {
        Ok(carry_over(&self.store, today)?)
    }

    /// Returns the stored record for `date`, or `None` when absent.
    pub fn load(&self, date: NaiveDate) -> ServiceResult<Option<DayRecord>> {
        Ok(self.store.load(date)?)
    }

    /// Returns the record for `date`, persisting the blank template first
    /// when the day has never been opened.
    pub fn load_or_create(&self, date: NaiveDate) -> ServiceResult<DayRecord> {
        if let Some(record) = self.store.load(date)? {
            return Ok(record);
        }
        let record = self.store.blank();
        self.store.save(date, &record)?;
        debug!(
            "event=day_create module=service status=ok date={} task_count={}",
            date_key(date),
            record.len()
        );
        Ok(record)
    }

    /// Replaces the record for `date`.
    pub fn save(&self, date: NaiveDate, record: &DayRecord) -> ServiceResult<()> {
        Ok(self.store.save(date, record)?)
    }

    /// Applies `edit` to the record for `date` and persists the result.
    ///
    /// An absent day starts from the blank template.
    ///
    /// # Errors
    /// - `ServiceError::Edit` when the edit references a missing slot; nothing
    ///   is written in that case.
    /// - `ServiceError::Store` on read or write failures.
    pub fn apply_edit(&self, date: NaiveDate, edit: &DayEdit) -> ServiceResult<DayRecord> {
        let mut record = match self.store.load(date)? {
            Some(record) => record,
            None => self.store.blank(),
        };
        if let Err(err) = record.apply(edit) {
            warn!(
                "event=day_edit module=service status=rejected date={} error={}",
                date_key(date),
                err
            );
            return Err(err.into());
        }
        self.store.save(date, &record)?;
        Ok(record)
    }

    /// Completion state for `date`; an absent day counts as `NoTasks`.
    pub fn completion(&self, date: NaiveDate) -> ServiceResult<Completion> {
        Ok(self
            .store
            .load(date)?
            .map_or(Completion::NoTasks, |record| completion(&record)))
    }

    /// Completion state for every date in `from..=to`, ascending.
    ///
    /// Returns an empty list when `from > to`.
    pub fn completion_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<Vec<(NaiveDate, Completion)>> {
        from.iter_days()
            .take_while(|date| *date <= to)
            .map(|date| self.completion(date).map(|state| (date, state)))
            .collect()
    }
}
