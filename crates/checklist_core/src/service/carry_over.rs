//! Carry-over of unfinished tasks into the next day.
//!
//! # Responsibility
//! - Forward every entered, unchecked task of yesterday into today.
//! - Fill today's unused slots first, then append the overflow.
//!
//! # Invariants
//! - Runs at most once per `today`: any `carried` task in today's record
//!   latches the transition as applied. The latch is per day, not per task:
//!   it holds while any carried task remains, even after its text is edited.
//! - Every no-op outcome leaves storage untouched.
//! - Relative order of forwarded tasks is preserved.

use crate::model::day::{DayRecord, Task};
use crate::store::{date_key, DayStore, StoreResult};
use chrono::NaiveDate;
use log::info;
use std::time::Instant;

/// What a carry-over run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOverOutcome {
    /// Yesterday has no stored record.
    NoPreviousDay,
    /// Yesterday has no entered, unchecked task.
    NothingToCarry,
    /// Today already holds carried tasks.
    AlreadyApplied,
    /// Tasks were forwarded: `filled` into free slots, `appended` at the end.
    Applied { filled: usize, appended: usize },
}

impl CarryOverOutcome {
    pub fn label(self) -> &'static str {
        match self {
            Self::NoPreviousDay => "no_previous_day",
            Self::NothingToCarry => "nothing_to_carry",
            Self::AlreadyApplied => "already_applied",
            Self::Applied { .. } => "applied",
        }
    }

    /// Number of tasks forwarded by this run.
    pub fn forwarded(self) -> usize {
        match self {
            Self::Applied { filled, appended } => filled + appended,
            _ => 0,
        }
    }
}

/// Moves yesterday's unfinished tasks into `today` and persists the result.
///
/// # Errors
/// - Propagates store read/decode failures for either day.
/// - Propagates the write failure of today's record.
pub fn carry_over<S: DayStore + ?Sized>(
    store: &S,
    today: NaiveDate,
) -> StoreResult<CarryOverOutcome> {
    let started_at = Instant::now();
    let outcome = run(store, today)?;
    info!(
        "event=carry_over module=service status=ok date={} outcome={} forwarded={} duration_ms={}",
        date_key(today),
        outcome.label(),
        outcome.forwarded(),
        started_at.elapsed().as_millis()
    );
    Ok(outcome)
}

fn run<S: DayStore + ?Sized>(store: &S, today: NaiveDate) -> StoreResult<CarryOverOutcome> {
    let Some(yesterday) = today.pred_opt() else {
        return Ok(CarryOverOutcome::NoPreviousDay);
    };
    let Some(previous) = store.load(yesterday)? else {
        return Ok(CarryOverOutcome::NoPreviousDay);
    };

    let incomplete: Vec<String> = previous
        .carry_candidates()
        .map(|task| task.text.clone())
        .collect();
    if incomplete.is_empty() {
        return Ok(CarryOverOutcome::NothingToCarry);
    }

    let mut record = match store.load(today)? {
        Some(record) => record,
        None => store.blank(),
    };
    if record.has_carried() {
        return Ok(CarryOverOutcome::AlreadyApplied);
    }

    let outcome = forward_tasks(&mut record, incomplete);
    store.save(today, &record)?;
    Ok(outcome)
}

/// Places `incomplete` texts into `record` as carried tasks.
pub(crate) fn forward_tasks(record: &mut DayRecord, incomplete: Vec<String>) -> CarryOverOutcome {
    let total = incomplete.len();
    let tasks = record.tasks_mut();
    let mut incomplete = incomplete.into_iter();
    let mut slot = 0;
    let mut filled = 0;

    for text in incomplete.by_ref() {
        while tasks.get(slot).is_some_and(Task::is_entered) {
            slot += 1;
        }
        match tasks.get_mut(slot) {
            Some(task) => {
                task.text = text;
                task.done = false;
                task.carried = true;
                filled += 1;
                slot += 1;
            }
            None => {
                tasks.push(Task::carried(text));
                break;
            }
        }
    }
    tasks.extend(incomplete.map(Task::carried));

    CarryOverOutcome::Applied {
        filled,
        appended: total - filled,
    }
}

#[cfg(test)]
mod tests {
    use super::{forward_tasks, CarryOverOutcome};
    use crate::model::day::{DayRecord, Task};

    #[test]
    fn forward_tasks_treats_whitespace_slot_as_free() {
        let mut record = DayRecord::new(vec![Task::new("  "), Task::new("kept")]);
        let outcome = forward_tasks(&mut record, vec!["a".to_string(), "b".to_string()]);

        assert_eq!(
            outcome,
            CarryOverOutcome::Applied {
                filled: 1,
                appended: 1
            }
        );
        assert_eq!(
            record.tasks(),
            &[Task::carried("a"), Task::new("kept"), Task::carried("b")]
        );
    }

    #[test]
    fn forward_tasks_clears_done_on_filled_slot() {
        let mut blank_done = Task::blank();
        blank_done.done = true;
        let mut record = DayRecord::new(vec![blank_done]);

        forward_tasks(&mut record, vec!["a".to_string()]);
        assert_eq!(record.tasks(), &[Task::carried("a")]);
    }
}
