//! Triage service: Orchestrates evaluation, summarization, and export.
//!
//! The service owns no state between calls: every interaction re-evaluates
//! the rule table from scratch against the current symptom record.

use std::path::PathBuf;

use crate::application::Report;
use crate::domain::{evaluate, Assessment, SymptomRecord};
use crate::ports::ReportExporter;
use crate::FeverdxError;

/// Service for running a triage pass and exporting its summary.
pub struct TriageService<E>
where
    E: ReportExporter,
{
    exporter: E,
}

impl<E> TriageService<E>
where
    E: ReportExporter,
    E::Error: Into<crate::adapters::ExportError>,
{
    /// Create a new triage service.
    pub fn new(exporter: E) -> Self {
        Self { exporter }
    }

    /// Evaluate the rule table against one record.
    ///
    /// Pure pass-through to the domain evaluator; the indirection exists so
    /// the UI depends on the service alone.
    #[must_use]
    pub fn assess(&self, record: &SymptomRecord) -> Assessment {
        let assessment = evaluate(record);
        tracing::debug!(
            diagnoses = assessment.diagnoses.len(),
            investigations = assessment.investigations.len(),
            red_flags = assessment.red_flags.len(),
            "Evaluated symptom record"
        );
        assessment
    }

    /// Build today's summary report for one record.
    #[must_use]
    pub fn summarize(&self, record: &SymptomRecord) -> Report {
        let assessment = self.assess(record);
        Report::build_today(record, &assessment)
    }

    /// Export the summary report as a document.
    ///
    /// Re-evaluates the record so the exported artifact always reflects the
    /// current input, then hands the report to the exporter port.
    ///
    /// # Errors
    /// Returns error if the exporter fails to render or write the document.
    pub fn export(&self, record: &SymptomRecord) -> Result<PathBuf, FeverdxError> {
        let report = self.summarize(record);

        tracing::info!(
            symptoms = report.symptoms.len(),
            diagnoses = report.diagnoses.len(),
            "Exporting summary report"
        );

        let path = self
            .exporter
            .export(&report)
            .map_err(|e| FeverdxError::Export(e.into()))?;

        tracing::info!(path = %path.display(), "Report exported");
        Ok(path)
    }
}
