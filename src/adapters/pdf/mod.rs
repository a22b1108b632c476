//! PDF adapter: renders a report as a paginated A4 document via `printpdf`.
//!
//! Layout is a single top-down text cursor using the builtin Helvetica
//! fonts. When the cursor would pass the bottom margin, a new page is
//! started and the cursor resets to the top.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference};

use crate::application::Report;
use crate::ports::ReportExporter;

/// Fixed output filename, written into the exporter's directory.
pub const REPORT_FILENAME: &str = "fever_summary_report.pdf";

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const TOP_Y: Mm = Mm(280.0);
const BOTTOM_Y: Mm = Mm(15.0);
const MARGIN_X: Mm = Mm(20.0);
const INDENT_X: Mm = Mm(25.0);

/// Error type for PDF export operations.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes reports as PDF files into a fixed directory.
pub struct PdfExporter {
    out_dir: PathBuf,
}

impl PdfExporter {
    /// Create an exporter writing into `out_dir`.
    pub fn new(out_dir: impl AsRef<Path>) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }

    /// Create an exporter writing into the current working directory.
    #[must_use]
    pub fn in_working_dir() -> Self {
        Self::new(".")
    }

    fn render(report: &Report) -> Result<PdfDocumentReference, ExportError> {
        let (doc, page1, layer1) = PdfDocument::new(&report.title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;

        let mut cursor = PageCursor::new(&doc, doc.get_page(page1).get_layer(layer1));

        // Title block
        cursor.layer.use_text(&report.title, 14.0, MARGIN_X, cursor.y, &bold);
        cursor.advance(Mm(6.0));
        cursor.layer.use_text(
            report.date.format("%Y-%m-%d").to_string(),
            10.0,
            MARGIN_X,
            cursor.y,
            &font,
        );
        cursor.advance(Mm(10.0));

        cursor.section("Symptoms:", &bold);
        for line in &report.symptoms {
            cursor.item(&format!("- {}", line.format()), &font);
        }
        cursor.advance(Mm(4.0));

        cursor.section("Diagnoses:", &bold);
        for d in &report.diagnoses {
            cursor.item(&format!("- {d}"), &font);
        }
        cursor.advance(Mm(4.0));

        cursor.section("Investigations:", &bold);
        for inv in &report.investigations {
            cursor.item(&format!("- {inv}"), &font);
        }
        cursor.advance(Mm(4.0));

        cursor.section("Red Flags:", &bold);
        for flag in report.red_flag_lines() {
            cursor.item(&format!("- {flag}"), &font);
        }

        Ok(doc)
    }
}

impl ReportExporter for PdfExporter {
    type Error = ExportError;

    fn export(&self, report: &Report) -> Result<PathBuf, ExportError> {
        let doc = Self::render(report)?;

        let path = self.out_dir.join(REPORT_FILENAME);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        doc.save(&mut writer)
            .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;

        Ok(path)
    }
}

/// Top-down text cursor with automatic page breaks.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y: Mm,
}

impl<'a> PageCursor<'a> {
    fn new(doc: &'a PdfDocumentReference, layer: PdfLayerReference) -> Self {
        Self {
            doc,
            layer,
            y: TOP_Y,
        }
    }

    /// Move down, starting a new page when the bottom margin is passed.
    fn advance(&mut self, dy: Mm) {
        self.y = Mm(self.y.0 - dy.0);
        if self.y.0 < BOTTOM_Y.0 {
            let (page, layer) = self.doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    fn section(&mut self, heading: &str, bold: &IndirectFontRef) {
        self.layer.use_text(heading, 11.0, MARGIN_X, self.y, bold);
        self.advance(Mm(6.0));
    }

    fn item(&mut self, text: &str, font: &IndirectFontRef) {
        self.layer.use_text(text, 10.0, INDENT_X, self.y, font);
        self.advance(Mm(5.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Report;
    use crate::domain::{evaluate, Severity, Symptom, SymptomEntry, SymptomRecord};

    fn sample_report() -> Report {
        let record = SymptomRecord::empty()
            .with(Symptom::Fever, SymptomEntry::present(Severity::Severe, 8))
            .with(Symptom::Cough, SymptomEntry::present(Severity::Mild, 3))
            .with(
                Symptom::Breathlessness,
                SymptomEntry::present(Severity::Severe, 2),
            );
        Report::build_today(&record, &evaluate(&record))
    }

    #[test]
    fn test_export_writes_pdf_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let exporter = PdfExporter::new(dir.path());

        let path = exporter.export(&sample_report()).expect("Should export");
        assert_eq!(path, dir.path().join(REPORT_FILENAME));

        let bytes = std::fs::read(&path).expect("Should read back");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_export_empty_report_succeeds() {
        // An all-absent record still produces a valid document with the
        // "None" red-flag placeholder.
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let exporter = PdfExporter::new(dir.path());

        let record = SymptomRecord::empty();
        let report = Report::build_today(&record, &evaluate(&record));
        let path = exporter.export(&report).expect("Should export");
        assert!(path.exists());
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let dir = tempfile::tempdir().expect("Should create temp dir");
        let exporter = PdfExporter::new(dir.path());

        let first = exporter.export(&sample_report()).expect("Should export");
        let second = exporter.export(&sample_report()).expect("Should export again");
        assert_eq!(first, second);
    }
}
