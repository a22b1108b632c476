//! Adapters layer: Concrete implementations of ports.
//!
//! - `pdf`: printpdf-based report export.

pub mod pdf;

// Re-export export error for lib.rs
pub use pdf::ExportError;
