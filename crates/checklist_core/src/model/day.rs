//! Task and day record model.
//!
//! # Responsibility
//! - Define the canonical `Task` and ordered `DayRecord` shapes.
//! - Keep the persisted JSON shape stable: an array of
//!   `{"text", "done", "carried"}` objects.
//!
//! # Invariants
//! - All three task fields are required when decoding.
//! - Text that is blank after trimming marks an unused slot.
//! - Record length is unbounded; the blank template only sets a start size.

use serde::{Deserialize, Serialize};

/// One checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Free text; empty (or whitespace only) means "unused slot".
    pub text: String,
    pub done: bool,
    /// True only when the text arrived through carry-over.
    pub carried: bool,
}

impl Task {
    /// Creates an unused slot.
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            done: false,
            carried: false,
        }
    }

    /// Creates a user-entered, not yet completed task.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            carried: false,
        }
    }

    /// Creates a task forwarded from a previous day.
    pub fn carried(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
            carried: true,
        }
    }

    /// Returns whether this slot holds entered text.
    pub fn is_entered(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Returns whether this task should move forward to the next day.
    pub fn is_carry_candidate(&self) -> bool {
        self.is_entered() && !self.done
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::blank()
    }
}

/// Ordered task list for one calendar date.
///
/// Serialized transparently as a JSON array so files written by earlier
/// releases load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayRecord {
    tasks: Vec<Task>,
}

impl DayRecord {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Creates the blank template with `count` unused slots.
    pub fn blank(count: usize) -> Self {
        Self {
            tasks: (0..count).map(|_| Task::blank()).collect(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    pub fn into_tasks(self) -> Vec<Task> {
        self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns whether carry-over has already touched this record.
    pub fn has_carried(&self) -> bool {
        self.tasks.iter().any(|task| task.carried)
    }

    /// Returns incomplete entered tasks in display order.
    pub fn carry_candidates(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|task| task.is_carry_candidate())
    }
}

impl From<Vec<Task>> for DayRecord {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::{DayRecord, Task};

    #[test]
    fn whitespace_text_is_not_entered() {
        let task = Task::new("   \t");
        assert!(!task.is_entered());
        assert!(!task.is_carry_candidate());
    }

    #[test]
    fn carry_candidates_skip_done_and_blank() {
        let mut done = Task::new("done");
        done.done = true;
        let record = DayRecord::new(vec![
            Task::new("a"),
            done,
            Task::blank(),
            Task::new("b"),
        ]);

        let texts: Vec<&str> = record
            .carry_candidates()
            .map(|task| task.text.as_str())
            .collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
