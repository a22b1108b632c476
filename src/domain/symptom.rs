//! Symptom capture types.
//!
//! A `SymptomRecord` is the complete input to the rule evaluator: for each of
//! the ten fixed symptoms, whether it is present and (only when present) its
//! severity and duration in days.

use serde::{Deserialize, Serialize};

/// The fixed set of symptoms the triage form captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symptom {
    Fever,
    BodyPain,
    Rash,
    Chills,
    Sweating,
    AbdominalPain,
    Diarrhea,
    Cough,
    Breathlessness,
    BurningMicturition,
}

impl Symptom {
    /// All symptoms in form/display order.
    pub const ALL: [Symptom; 10] = [
        Self::Fever,
        Self::BodyPain,
        Self::Rash,
        Self::Chills,
        Self::Sweating,
        Self::AbdominalPain,
        Self::Diarrhea,
        Self::Cough,
        Self::Breathlessness,
        Self::BurningMicturition,
    ];

    /// Human-readable label used in the form and the exported report.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fever => "Fever",
            Self::BodyPain => "Body pain",
            Self::Rash => "Rash",
            Self::Chills => "Chills",
            Self::Sweating => "Sweating",
            Self::AbdominalPain => "Abdominal pain",
            Self::Diarrhea => "Diarrhea",
            Self::Cough => "Cough",
            Self::Breathlessness => "Breathlessness",
            Self::BurningMicturition => "Burning micturition",
        }
    }

    /// Position in [`Symptom::ALL`], used to index a [`SymptomRecord`].
    #[must_use]
    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Fever => 0,
            Self::BodyPain => 1,
            Self::Rash => 2,
            Self::Chills => 3,
            Self::Sweating => 4,
            Self::AbdominalPain => 5,
            Self::Diarrhea => 6,
            Self::Cough => 7,
            Self::Breathlessness => 8,
            Self::BurningMicturition => 9,
        }
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Reported severity of a present symptom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

impl Severity {
    /// Selector order for the form (matches declaration order).
    pub const ALL: [Severity; 3] = [Self::Mild, Self::Moderate, Self::Severe];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Maximum reportable duration in days (form clamps input to this).
pub const MAX_DURATION_DAYS: u8 = 30;

/// One symptom's reported state.
///
/// `severity` and `duration_days` carry meaning only when `present` is true;
/// the evaluator guards every dependent rule with a presence check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub present: bool,
    pub severity: Option<Severity>,
    pub duration_days: Option<u8>,
}

impl SymptomEntry {
    /// An absent symptom.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }

    /// A present symptom with severity and duration.
    #[must_use]
    pub fn present(severity: Severity, duration_days: u8) -> Self {
        Self {
            present: true,
            severity: Some(severity),
            duration_days: Some(duration_days.min(MAX_DURATION_DAYS)),
        }
    }
}

/// Complete symptom input for one evaluation pass.
///
/// A fixed-shape record: one entry per symptom in [`Symptom::ALL`]. There is
/// no identity or lifecycle beyond the single pass; the evaluator recomputes
/// everything from scratch each time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomRecord {
    entries: [SymptomEntry; 10],
}

impl SymptomRecord {
    /// A record with no symptom present.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set one symptom's entry, replacing any previous state.
    pub fn set(&mut self, symptom: Symptom, entry: SymptomEntry) {
        self.entries[symptom.index()] = entry;
    }

    /// Builder-style variant of [`set`](Self::set) for tests and callers
    /// constructing records inline.
    #[must_use]
    pub fn with(mut self, symptom: Symptom, entry: SymptomEntry) -> Self {
        self.set(symptom, entry);
        self
    }

    #[must_use]
    pub fn entry(&self, symptom: Symptom) -> &SymptomEntry {
        &self.entries[symptom.index()]
    }

    #[must_use]
    pub fn is_present(&self, symptom: Symptom) -> bool {
        self.entry(symptom).present
    }

    /// Severity, only when the symptom is present.
    #[must_use]
    pub fn severity(&self, symptom: Symptom) -> Option<Severity> {
        let entry = self.entry(symptom);
        if entry.present {
            entry.severity
        } else {
            None
        }
    }

    /// Duration in days, only when the symptom is present.
    #[must_use]
    pub fn duration_days(&self, symptom: Symptom) -> Option<u8> {
        let entry = self.entry(symptom);
        if entry.present {
            entry.duration_days
        } else {
            None
        }
    }

    /// Whether any symptom is reported at all.
    #[must_use]
    pub fn any_present(&self) -> bool {
        Symptom::ALL.iter().any(|s| self.is_present(*s))
    }

    /// Iterate over present symptoms with their entries, in form order.
    pub fn present_symptoms(&self) -> impl Iterator<Item = (Symptom, &SymptomEntry)> {
        Symptom::ALL
            .iter()
            .map(|s| (*s, self.entry(*s)))
            .filter(|(_, e)| e.present)
    }
}
