//! Report building: presentation-neutral summary of one evaluation pass.
//!
//! Both the on-screen summary and the PDF exporter consume the same
//! [`Report`], so the two rendering paths can never disagree about content.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{Assessment, SymptomRecord};

/// One reported symptom as it appears in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomLine {
    pub name: String,
    pub severity: Option<String>,
    pub duration_days: Option<u8>,
}

impl SymptomLine {
    /// Format as a single report line, e.g. `Fever: Severe, 5 days`.
    #[must_use]
    pub fn format(&self) -> String {
        let severity = self.severity.as_deref().unwrap_or("unspecified");
        match self.duration_days {
            Some(days) => format!("{}: {}, {} days", self.name, severity, days),
            None => format!("{}: {}", self.name, severity),
        }
    }
}

/// Human-readable summary of a symptom record and its assessment.
///
/// Line vectors mirror the assessment sets one-to-one: the diagnosis and
/// investigation sections always have exactly as many lines as the
/// corresponding set has members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub date: NaiveDate,
    pub symptoms: Vec<SymptomLine>,
    pub diagnoses: Vec<String>,
    pub investigations: Vec<String>,
    pub red_flags: Vec<String>,
}

impl Report {
    pub const TITLE: &'static str = "Fever Diagnostic Summary";

    /// Build a report from one record and its assessment, dated `date`.
    #[must_use]
    pub fn build(record: &SymptomRecord, assessment: &Assessment, date: NaiveDate) -> Self {
        let symptoms = record
            .present_symptoms()
            .map(|(symptom, entry)| SymptomLine {
                name: symptom.label().to_string(),
                severity: entry.severity.map(|s| s.label().to_string()),
                duration_days: entry.duration_days,
            })
            .collect();

        Self {
            title: Self::TITLE.to_string(),
            date,
            symptoms,
            diagnoses: assessment.diagnoses.iter().map(|d| d.to_string()).collect(),
            investigations: assessment
                .investigations
                .iter()
                .map(|i| i.to_string())
                .collect(),
            red_flags: assessment.red_flags.iter().map(|r| r.to_string()).collect(),
        }
    }

    /// Build a report dated today (local time).
    #[must_use]
    pub fn build_today(record: &SymptomRecord, assessment: &Assessment) -> Self {
        Self::build(record, assessment, chrono::Local::now().date_naive())
    }

    /// Red-flag section lines, with the explicit "None" placeholder when the
    /// list is empty.
    #[must_use]
    pub fn red_flag_lines(&self) -> Vec<String> {
        if self.red_flags.is_empty() {
            vec!["None".to_string()]
        } else {
            self.red_flags.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{evaluate, Severity, Symptom, SymptomEntry, SymptomRecord};

    fn sample_record() -> SymptomRecord {
        SymptomRecord::empty()
            .with(Symptom::Fever, SymptomEntry::present(Severity::Severe, 8))
            .with(Symptom::BodyPain, SymptomEntry::present(Severity::Moderate, 3))
            .with(Symptom::Rash, SymptomEntry::present(Severity::Mild, 2))
    }

    #[test]
    fn test_section_line_counts_match_set_cardinality() {
        let record = sample_record();
        let assessment = evaluate(&record);
        let report = Report::build_today(&record, &assessment);

        assert_eq!(report.diagnoses.len(), assessment.diagnoses.len());
        assert_eq!(report.investigations.len(), assessment.investigations.len());
        assert_eq!(report.red_flags.len(), assessment.red_flags.len());
    }

    #[test]
    fn test_only_present_symptoms_listed() {
        let record = sample_record();
        let report = Report::build_today(&record, &evaluate(&record));

        assert_eq!(report.symptoms.len(), 3);
        let names: Vec<&str> = report.symptoms.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Fever", "Body pain", "Rash"]);
    }

    #[test]
    fn test_red_flag_placeholder_when_empty() {
        let record = SymptomRecord::empty();
        let report = Report::build_today(&record, &evaluate(&record));

        assert!(report.red_flags.is_empty());
        assert_eq!(report.red_flag_lines(), vec!["None".to_string()]);
    }

    #[test]
    fn test_symptom_line_format() {
        let line = SymptomLine {
            name: "Fever".to_string(),
            severity: Some("Severe".to_string()),
            duration_days: Some(5),
        };
        assert_eq!(line.format(), "Fever: Severe, 5 days");
    }
}
