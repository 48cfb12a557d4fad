//! Completion metrics for a single day.
//!
//! # Responsibility
//! - Count entered and completed tasks.
//! - Provide the fraction form and the bucketed form used for color coding.
//!
//! # Invariants
//! - Tasks with blank text are never counted, whatever their flags.
//! - "Nothing entered" maps to `(-1, -1)` in fraction form and `-1` in
//!   bucketed form; the two forms always agree on it.

use crate::model::day::DayRecord;

/// Sentinel for "no tasks entered" in flat integer forms.
pub const NO_TASKS: i64 = -1;

/// Completion state of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// No task with text was entered.
    NoTasks,
    /// `done` of `total` entered tasks are checked; `total >= 1`.
    Progress { done: u32, total: u32 },
}

impl Completion {
    /// Returns `(done, total)`, or `(-1, -1)` when nothing was entered.
    pub fn as_pair(self) -> (i64, i64) {
        match self {
            Self::NoTasks => (NO_TASKS, NO_TASKS),
            Self::Progress { done, total } => (i64::from(done), i64::from(total)),
        }
    }

    /// Completed share in `0.0..=1.0`, or `None` when nothing was entered.
    pub fn ratio(self) -> Option<f64> {
        match self {
            Self::NoTasks => None,
            Self::Progress { done, total } => Some(f64::from(done) / f64::from(total)),
        }
    }

    /// `done` clamped to `0..=max_bucket`, or `-1` when nothing was entered.
    pub fn bucket(self, max_bucket: u32) -> i64 {
        match self {
            Self::NoTasks => NO_TASKS,
            Self::Progress { done, .. } => i64::from(done.min(max_bucket)),
        }
    }

    /// True when at least one task was entered and all are done.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Progress { done, total } if done == total)
    }
}

/// Reduces `record` to its completion state.
pub fn completion(record: &DayRecord) -> Completion {
    let mut done = 0u32;
    let mut total = 0u32;
    for task in record.tasks().iter().filter(|task| task.is_entered()) {
        total += 1;
        if task.done {
            done += 1;
        }
    }

    if total == 0 {
        Completion::NoTasks
    } else {
        Completion::Progress { done, total }
    }
}

/// Fraction form: `(done_count, total_entered)` or `(-1, -1)`.
pub fn completion_fraction(record: &DayRecord) -> (i64, i64) {
    completion(record).as_pair()
}

/// Bucketed form: `done_count` clamped to `0..=max_bucket`, or `-1` when
/// nothing was entered.
pub fn completion_bucket(record: &DayRecord, max_bucket: u32) -> i64 {
    completion(record).bucket(max_bucket)
}
