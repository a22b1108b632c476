//! Assessment result types.
//!
//! Represents the output of one rule-evaluation pass: candidate differential
//! diagnoses, suggested investigations, and red flags needing urgent
//! escalation.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Candidate differential diagnosis labels.
///
/// These are candidates consistent with the reported symptoms, never a
/// confirmed diagnosis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Diagnosis {
    Dengue,
    Chikungunya,
    Malaria,
    Typhoid,
    Gastroenteritis,
    Covid19,
    Pneumonia,
    Tuberculosis,
    UrinaryTractInfection,
}

impl Diagnosis {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Dengue => "Dengue",
            Self::Chikungunya => "Chikungunya",
            Self::Malaria => "Malaria",
            Self::Typhoid => "Typhoid",
            Self::Gastroenteritis => "Gastroenteritis",
            Self::Covid19 => "COVID-19",
            Self::Pneumonia => "Pneumonia",
            Self::Tuberculosis => "Tuberculosis",
            Self::UrinaryTractInfection => "Urinary Tract Infection",
        }
    }
}

impl std::fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Suggested diagnostic investigations (tests, not treatments).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Investigation {
    Cbc,
    DengueNs1,
    DengueIgm,
    PeripheralSmear,
    RapidMalariaTest,
    WidalTest,
    StoolCulture,
    ChestXray,
    RtPcr,
    SputumAfb,
    UrineRoutine,
    UrineCulture,
}

impl Investigation {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cbc => "CBC",
            Self::DengueNs1 => "Dengue NS1",
            Self::DengueIgm => "Dengue IgM",
            Self::PeripheralSmear => "Peripheral smear",
            Self::RapidMalariaTest => "Rapid Malaria Test",
            Self::WidalTest => "Widal test",
            Self::StoolCulture => "Stool culture",
            Self::ChestXray => "Chest X-ray",
            Self::RtPcr => "RT-PCR",
            Self::SputumAfb => "Sputum AFB",
            Self::UrineRoutine => "Urine routine",
            Self::UrineCulture => "Urine culture",
        }
    }
}

impl std::fmt::Display for Investigation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Symptom combinations signaling need for urgent escalation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedFlag {
    SevereBreathlessness,
    SevereBurningMicturition,
    ProlongedFever,
}

impl RedFlag {
    /// Warning text shown on screen and in the exported report.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::SevereBreathlessness => "Severe breathlessness",
            Self::SevereBurningMicturition => "Suspected UTI with severe symptoms",
            Self::ProlongedFever => "Fever >7 days - prolonged febrile illness",
        }
    }
}

impl std::fmt::Display for RedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Output of one evaluation pass over a symptom record.
///
/// Diagnoses and investigations are deduplicated, order-insensitive sets;
/// red flags keep their fixed evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub diagnoses: BTreeSet<Diagnosis>,
    pub investigations: BTreeSet<Investigation>,
    pub red_flags: Vec<RedFlag>,
}

impl Assessment {
    /// Whether the pass produced nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty() && self.investigations.is_empty() && self.red_flags.is_empty()
    }

    /// Whether any red flag was raised.
    #[must_use]
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}
