//! TUI module: Terminal User Interface using Ratatui.
//!
//! Provides a clinical-themed interface for:
//! - Symptom capture (presence, severity, duration)
//! - Assessment summary with red flags
//! - PDF report export

mod app;
mod styles;
mod ui;

pub use app::App;
pub use styles::ClinicTheme;
