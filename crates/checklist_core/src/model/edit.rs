//! Value-typed user edits over a `DayRecord`.
//!
//! # Responsibility
//! - Describe every user mutation as a plain command value.
//! - Apply a command to an owned record before the caller persists it.
//!
//! # Invariants
//! - Edits never set or clear `carried`; removing a task is the only way a
//!   carried flag leaves the record.
//! - Out-of-range indexes are rejected and leave the record unchanged.

use crate::model::day::{DayRecord, Task};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// A single user edit on one day's checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEdit {
    /// Replaces the text of the task at `index`.
    SetText { index: usize, text: String },
    /// Checks or unchecks the task at `index`.
    SetDone { index: usize, done: bool },
    /// Appends an unused slot.
    AddTask,
    /// Removes the task at `index`.
    RemoveTask { index: usize },
    /// Moves the task at `from` so it ends up at `to`.
    Reorder { from: usize, to: usize },
}

/// Edit rejected before touching the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for EditError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "task index {index} out of range for {len} task(s)")
            }
        }
    }
}

impl Error for EditError {}

impl DayRecord {
    /// Applies `edit` in place.
    ///
    /// # Errors
    /// - `EditError::IndexOutOfRange` when any referenced index is not a
    ///   current slot.
    pub fn apply(&mut self, edit: &DayEdit) -> Result<(), EditError> {
        let len = self.len();
        let tasks = self.tasks_mut();
        match edit {
            DayEdit::SetText { index, text } => {
                let task = tasks
                    .get_mut(*index)
                    .ok_or(EditError::IndexOutOfRange { index: *index, len })?;
                task.text.clone_from(text);
            }
            DayEdit::SetDone { index, done } => {
                let task = tasks
                    .get_mut(*index)
                    .ok_or(EditError::IndexOutOfRange { index: *index, len })?;
                task.done = *done;
            }
            DayEdit::AddTask => tasks.push(Task::blank()),
            DayEdit::RemoveTask { index } => {
                if *index >= len {
                    return Err(EditError::IndexOutOfRange { index: *index, len });
                }
                tasks.remove(*index);
            }
            DayEdit::Reorder { from, to } => {
                for index in [*from, *to] {
                    if index >= len {
                        return Err(EditError::IndexOutOfRange { index, len });
                    }
                }
                let task = tasks.remove(*from);
                tasks.insert(*to, task);
            }
        }
        Ok(())
    }
}
