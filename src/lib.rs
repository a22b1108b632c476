//! # feverdx
//!
//! Local-only fever triage assistant for the terminal.
//!
//! This crate provides:
//! - A pure rule evaluator mapping symptom input to differential diagnoses,
//!   suggested investigations, and red flags
//! - A terminal UI for symptom capture and summary display
//! - PDF export of the summary report
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types and the rule evaluator
//! - `ports`: Trait definitions for external operations
//! - `adapters`: Concrete implementations (printpdf)
//! - `application`: Use cases orchestrating domain and ports
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
pub mod tui;

pub use domain::{evaluate, Assessment, SymptomRecord};

/// Result type for feverdx operations
pub type Result<T> = std::result::Result<T, FeverdxError>;

/// Main error type for feverdx
#[derive(Debug, thiserror::Error)]
pub enum FeverdxError {
    #[error("Report export failed: {0}")]
    Export(#[from] adapters::ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
