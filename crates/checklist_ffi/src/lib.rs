//! Flutter-facing bindings for the Daily Checklist core.

pub mod api;
