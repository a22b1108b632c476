//! Exporter port: Trait for writing a report to stable storage.
//!
//! Abstracts the document format (PDF) from the application logic.

use std::path::PathBuf;

use crate::application::Report;

/// Trait for serializing a report into a document on stable storage.
///
/// Implementations write to a fixed location of their choosing and return
/// the path actually written, so the UI can tell the user where to look.
pub trait ReportExporter {
    /// Error type for export operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write the report and return the output path.
    ///
    /// # Errors
    /// Returns error if the document cannot be rendered or written.
    fn export(&self, report: &Report) -> Result<PathBuf, Self::Error>;
}
