//! Read-side reductions over day records.
//!
//! # Responsibility
//! - Reduce a day's tasks into display metrics for calendar rendering.
//! - Stay pure: no storage access, no mutation.

pub mod completion;
