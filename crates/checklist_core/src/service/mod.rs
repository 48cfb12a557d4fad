//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into the operations the UI layer invokes.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod carry_over;
pub mod day_service;
