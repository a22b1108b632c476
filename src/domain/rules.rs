//! The clinical heuristic table.
//!
//! A flat set of if/then rules mapping a [`SymptomRecord`] to an
//! [`Assessment`]. Each rule is evaluated independently and its contributions
//! unioned, so evaluation is idempotent and rule order never matters for the
//! diagnosis/investigation sets. Red flags are appended in a fixed order.
//!
//! Absent symptoms carry no severity or duration; every rule that reads one
//! is guarded by a presence check, so the function is total.

use super::assessment::{Assessment, Diagnosis, Investigation, RedFlag};
use super::symptom::{Severity, Symptom, SymptomRecord};

/// Fever duration (days) at or above which malaria is considered.
const MALARIA_FEVER_DAYS: u8 = 2;

/// Fever duration (days) at or above which the prolonged-fever flag fires.
const PROLONGED_FEVER_DAYS: u8 = 7;

/// Evaluate the full rule table against one symptom record.
///
/// Deterministic and pure: identical records always yield identical
/// assessments, and the record is never mutated.
#[must_use]
pub fn evaluate(record: &SymptomRecord) -> Assessment {
    let mut assessment = Assessment::default();

    // Body pain + rash with at least moderate fever: arboviral picture.
    if record.is_present(Symptom::BodyPain)
        && record.is_present(Symptom::Rash)
        && record
            .severity(Symptom::Fever)
            .is_some_and(|s| s >= Severity::Moderate)
    {
        assessment
            .diagnoses
            .extend([Diagnosis::Dengue, Diagnosis::Chikungunya]);
        assessment.investigations.extend([
            Investigation::Cbc,
            Investigation::DengueNs1,
            Investigation::DengueIgm,
        ]);
    }

    // Chills + sweating with fever lasting at least two days.
    if record.is_present(Symptom::Chills)
        && record.is_present(Symptom::Sweating)
        && record
            .duration_days(Symptom::Fever)
            .is_some_and(|d| d >= MALARIA_FEVER_DAYS)
    {
        assessment.diagnoses.insert(Diagnosis::Malaria);
        assessment.investigations.extend([
            Investigation::Cbc,
            Investigation::PeripheralSmear,
            Investigation::RapidMalariaTest,
        ]);
    }

    // Abdominal pain + diarrhea: enteric picture.
    if record.is_present(Symptom::AbdominalPain) && record.is_present(Symptom::Diarrhea) {
        assessment
            .diagnoses
            .extend([Diagnosis::Typhoid, Diagnosis::Gastroenteritis]);
        assessment.investigations.extend([
            Investigation::Cbc,
            Investigation::WidalTest,
            Investigation::StoolCulture,
        ]);
    }

    // Cough + breathlessness: respiratory picture.
    if record.is_present(Symptom::Cough) && record.is_present(Symptom::Breathlessness) {
        assessment.diagnoses.extend([
            Diagnosis::Covid19,
            Diagnosis::Pneumonia,
            Diagnosis::Tuberculosis,
        ]);
        assessment.investigations.extend([
            Investigation::Cbc,
            Investigation::ChestXray,
            Investigation::RtPcr,
            Investigation::SputumAfb,
        ]);
    }

    // Severe burning micturition: UTI.
    if record.severity(Symptom::BurningMicturition) == Some(Severity::Severe) {
        assessment.diagnoses.insert(Diagnosis::UrinaryTractInfection);
        assessment
            .investigations
            .extend([Investigation::UrineRoutine, Investigation::UrineCulture]);
    }

    // Red flags, in fixed evaluation order.
    if record.severity(Symptom::Breathlessness) == Some(Severity::Severe) {
        assessment.red_flags.push(RedFlag::SevereBreathlessness);
    }
    if record.severity(Symptom::BurningMicturition) == Some(Severity::Severe) {
        assessment.red_flags.push(RedFlag::SevereBurningMicturition);
    }
    if record
        .duration_days(Symptom::Fever)
        .is_some_and(|d| d >= PROLONGED_FEVER_DAYS)
    {
        assessment.red_flags.push(RedFlag::ProlongedFever);
    }

    assessment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::symptom::SymptomEntry;

    fn present(severity: Severity, days: u8) -> SymptomEntry {
        SymptomEntry::present(severity, days)
    }

    #[test]
    fn test_no_symptoms_yields_empty_assessment() {
        let assessment = evaluate(&SymptomRecord::empty());
        assert!(assessment.is_empty());
    }

    #[test]
    fn test_dengue_rule_fires_on_severe_fever() {
        let record = SymptomRecord::empty()
            .with(Symptom::BodyPain, present(Severity::Mild, 3))
            .with(Symptom::Rash, present(Severity::Mild, 2))
            .with(Symptom::Fever, present(Severity::Severe, 3));

        let assessment = evaluate(&record);
        assert!(assessment.diagnoses.contains(&Diagnosis::Dengue));
        assert!(assessment.diagnoses.contains(&Diagnosis::Chikungunya));
        assert!(assessment.investigations.contains(&Investigation::Cbc));
        assert!(assessment.investigations.contains(&Investigation::DengueNs1));
        assert!(assessment.investigations.contains(&Investigation::DengueIgm));
    }

    #[test]
    fn test_dengue_rule_needs_at_least_moderate_fever() {
        let record = SymptomRecord::empty()
            .with(Symptom::BodyPain, present(Severity::Severe, 3))
            .with(Symptom::Rash, present(Severity::Severe, 2))
            .with(Symptom::Fever, present(Severity::Mild, 3));

        let assessment = evaluate(&record);
        assert!(!assessment.diagnoses.contains(&Diagnosis::Dengue));
        assert!(!assessment.diagnoses.contains(&Diagnosis::Chikungunya));
    }

    #[test]
    fn test_dengue_rule_needs_fever_present() {
        // Body pain + rash alone must not fire the rule.
        let record = SymptomRecord::empty()
            .with(Symptom::BodyPain, present(Severity::Severe, 3))
            .with(Symptom::Rash, present(Severity::Severe, 2));

        assert!(evaluate(&record).diagnoses.is_empty());
    }

    #[test]
    fn test_malaria_duration_boundary() {
        let base = SymptomRecord::empty()
            .with(Symptom::Chills, present(Severity::Moderate, 2))
            .with(Symptom::Sweating, present(Severity::Moderate, 2));

        let one_day = base
            .clone()
            .with(Symptom::Fever, present(Severity::Moderate, 1));
        assert!(!evaluate(&one_day).diagnoses.contains(&Diagnosis::Malaria));

        let two_days = base.with(Symptom::Fever, present(Severity::Moderate, 2));
        let assessment = evaluate(&two_days);
        assert!(assessment.diagnoses.contains(&Diagnosis::Malaria));
        assert!(assessment
            .investigations
            .contains(&Investigation::RapidMalariaTest));
        assert!(assessment
            .investigations
            .contains(&Investigation::PeripheralSmear));
    }

    #[test]
    fn test_enteric_rule() {
        let record = SymptomRecord::empty()
            .with(Symptom::AbdominalPain, present(Severity::Mild, 1))
            .with(Symptom::Diarrhea, present(Severity::Mild, 1));

        let assessment = evaluate(&record);
        assert!(assessment.diagnoses.contains(&Diagnosis::Typhoid));
        assert!(assessment.diagnoses.contains(&Diagnosis::Gastroenteritis));
        assert!(assessment.investigations.contains(&Investigation::WidalTest));
        assert!(assessment
            .investigations
            .contains(&Investigation::StoolCulture));
    }

    #[test]
    fn test_respiratory_rule() {
        let record = SymptomRecord::empty()
            .with(Symptom::Cough, present(Severity::Moderate, 4))
            .with(Symptom::Breathlessness, present(Severity::Mild, 2));

        let assessment = evaluate(&record);
        assert_eq!(assessment.diagnoses.len(), 3);
        assert!(assessment.diagnoses.contains(&Diagnosis::Covid19));
        assert!(assessment.diagnoses.contains(&Diagnosis::Pneumonia));
        assert!(assessment.diagnoses.contains(&Diagnosis::Tuberculosis));
        assert!(assessment.investigations.contains(&Investigation::ChestXray));
        assert!(assessment.investigations.contains(&Investigation::SputumAfb));
    }

    #[test]
    fn test_uti_requires_severe_burning_micturition() {
        let moderate = SymptomRecord::empty()
            .with(Symptom::BurningMicturition, present(Severity::Moderate, 2));
        assert!(!evaluate(&moderate)
            .diagnoses
            .contains(&Diagnosis::UrinaryTractInfection));

        let severe = SymptomRecord::empty()
            .with(Symptom::BurningMicturition, present(Severity::Severe, 2));
        let assessment = evaluate(&severe);
        assert!(assessment
            .diagnoses
            .contains(&Diagnosis::UrinaryTractInfection));
        assert!(assessment
            .investigations
            .contains(&Investigation::UrineRoutine));
        assert!(assessment
            .investigations
            .contains(&Investigation::UrineCulture));
    }

    #[test]
    fn test_prolonged_fever_flag_boundary() {
        let six = SymptomRecord::empty().with(Symptom::Fever, present(Severity::Moderate, 6));
        assert!(!evaluate(&six)
            .red_flags
            .contains(&RedFlag::ProlongedFever));

        let seven = SymptomRecord::empty().with(Symptom::Fever, present(Severity::Moderate, 7));
        assert!(evaluate(&seven)
            .red_flags
            .contains(&RedFlag::ProlongedFever));
    }

    #[test]
    fn test_red_flag_evaluation_order() {
        let record = SymptomRecord::empty()
            .with(Symptom::Fever, present(Severity::Severe, 10))
            .with(Symptom::Breathlessness, present(Severity::Severe, 3))
            .with(Symptom::BurningMicturition, present(Severity::Severe, 2));

        let assessment = evaluate(&record);
        assert_eq!(
            assessment.red_flags,
            vec![
                RedFlag::SevereBreathlessness,
                RedFlag::SevereBurningMicturition,
                RedFlag::ProlongedFever,
            ]
        );
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let record = SymptomRecord::empty()
            .with(Symptom::Fever, present(Severity::Severe, 8))
            .with(Symptom::BodyPain, present(Severity::Moderate, 3))
            .with(Symptom::Rash, present(Severity::Mild, 2))
            .with(Symptom::Chills, present(Severity::Moderate, 4))
            .with(Symptom::Sweating, present(Severity::Moderate, 4))
            .with(Symptom::Cough, present(Severity::Mild, 5))
            .with(Symptom::Breathlessness, present(Severity::Severe, 1));

        let first = evaluate(&record);
        let second = evaluate(&record);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_cbc_deduplicated_across_rules() {
        // Dengue, malaria, enteric, and respiratory rules all add CBC; the
        // investigation set must hold it once.
        let record = SymptomRecord::empty()
            .with(Symptom::Fever, present(Severity::Severe, 5))
            .with(Symptom::BodyPain, present(Severity::Moderate, 3))
            .with(Symptom::Rash, present(Severity::Mild, 2))
            .with(Symptom::Chills, present(Severity::Moderate, 4))
            .with(Symptom::Sweating, present(Severity::Moderate, 4))
            .with(Symptom::AbdominalPain, present(Severity::Mild, 1))
            .with(Symptom::Diarrhea, present(Severity::Mild, 1))
            .with(Symptom::Cough, present(Severity::Mild, 5))
            .with(Symptom::Breathlessness, present(Severity::Mild, 1));

        let assessment = evaluate(&record);
        let cbc_count = assessment
            .investigations
            .iter()
            .filter(|i| **i == Investigation::Cbc)
            .count();
        assert_eq!(cbc_count, 1);
    }
}
