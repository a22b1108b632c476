//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the core use cases of the application.

mod report;
mod triage;

pub use report::{Report, SymptomLine};
pub use triage::TriageService;
