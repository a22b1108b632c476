//! Domain layer: Core business types and logic.
//!
//! This module contains pure Rust types with no I/O or UI dependencies.
//! The rule evaluator in [`rules`] is a pure function over these types.

mod assessment;
mod rules;
mod symptom;

pub use assessment::{Assessment, Diagnosis, Investigation, RedFlag};
pub use rules::evaluate;
pub use symptom::{Severity, Symptom, SymptomEntry, SymptomRecord, MAX_DURATION_DAYS};
