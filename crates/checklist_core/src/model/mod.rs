//! Day checklist domain model.
//!
//! # Responsibility
//! - Define the per-day task record and its persisted wire shape.
//! - Define value-typed edit commands applied to an owned record.
//!
//! # Invariants
//! - A `DayRecord` is keyed externally by calendar date; it does not store it.
//! - `Task::carried` is only ever set by carry-over.

pub mod day;
pub mod edit;
