//! Input validation.
//!
//! Turns raw form answers into a [`PatientRecord`]. Validation is pure: the
//! only check is that every required field carries a recognized answer.
//! Optional findings that are blank or unrecognized are "not reported".

use ptnm::{
    parse_yes_no, AdditionalSymptoms, AgeBand, ChangeSinceOnset, CurvatureDegree,
    CurvatureDirection, DurationBand, Field, Grade, PatientRecord, RawAttributes,
};
use tracing::debug;

use crate::error::{ValidationError, ValidationResult};

/// Validate raw form answers.
///
/// A required field that is unanswered or holds an unrecognized label is
/// missing; the error lists every missing field in form order. Optional
/// findings never fail validation. When pain is not `yes`, the pain
/// duration is ignored entirely.
///
/// # Example
///
/// ```rust
/// use ptnm::{Field, RawAttributes};
/// use ptnm_classifier::{validate, ValidationError};
///
/// let raw = RawAttributes::new().with(Field::Age, "31-40");
/// match validate(&raw) {
///     Err(ValidationError::MissingFields(fields)) => assert_eq!(fields.len(), 7),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn validate(raw: &RawAttributes) -> ValidationResult<PatientRecord> {
    let mut reader = AnswerReader::new(raw);

    let age_band = reader.required(Field::Age, AgeBand::from_label);
    let symptom_duration = reader.required(Field::SymptomDuration, |s| {
        duration_in(s, &DurationBand::SYMPTOM)
    });
    let stability_duration = reader.optional(Field::DiseaseStability, |s| {
        duration_in(s, &DurationBand::STABILITY)
    });
    let change_since_onset = reader.required(Field::ChangeOverTime, ChangeSinceOnset::from_label);
    let pain_present = reader.required(Field::Pain, parse_yes_no);
    let pain_duration = if pain_present == Some(true) {
        reader.optional(Field::PainDuration, |s| duration_in(s, &DurationBand::PAIN))
    } else {
        None
    };
    let curvature_degree = reader.required(Field::CurvatureDegree, CurvatureDegree::from_label);
    let curvature_direction =
        reader.required(Field::CurvatureDirection, CurvatureDirection::from_label);
    let calcification = reader.optional(Field::Calcification, Grade::from_calcification_label);
    let indentation = reader.optional(Field::IndentationHourglass, Grade::from_indentation_label);
    let trauma_recalled = reader.required(Field::Trauma, parse_yes_no);
    let lifelong_onset = reader.required(Field::Lifelong, parse_yes_no);
    let additional_symptoms = reader.optional(Field::ShorteningEd, AdditionalSymptoms::from_label);

    if !reader.missing.is_empty() {
        debug!(missing = ?reader.missing, "record rejected: required fields missing");
        return Err(ValidationError::MissingFields(reader.missing));
    }

    let record = PatientRecord {
        age_band: present(age_band, Field::Age)?,
        symptom_duration: present(symptom_duration, Field::SymptomDuration)?,
        stability_duration,
        change_since_onset: present(change_since_onset, Field::ChangeOverTime)?,
        pain_present: present(pain_present, Field::Pain)?,
        pain_duration,
        curvature_degree: present(curvature_degree, Field::CurvatureDegree)?,
        curvature_direction: present(curvature_direction, Field::CurvatureDirection)?,
        calcification,
        indentation,
        trauma_recalled: present(trauma_recalled, Field::Trauma)?,
        lifelong_onset: present(lifelong_onset, Field::Lifelong)?,
        additional_symptoms,
    };

    debug!(?record, "record validated");
    Ok(record)
}

/// Reads answers field by field, collecting missing required fields.
///
/// Fields are read in form order, so `missing` is in form order too.
struct AnswerReader<'a> {
    raw: &'a RawAttributes,
    missing: Vec<Field>,
}

impl<'a> AnswerReader<'a> {
    fn new(raw: &'a RawAttributes) -> Self {
        Self {
            raw,
            missing: Vec::new(),
        }
    }

    /// Parses a required answer; unanswered or unrecognized counts as missing.
    fn required<T>(&mut self, field: Field, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let parsed = self.raw.get(field).and_then(parse);
        if parsed.is_none() {
            self.missing.push(field);
        }
        parsed
    }

    /// Parses an optional answer; unrecognized reads as not reported.
    fn optional<T>(&self, field: Field, parse: impl FnOnce(&str) -> Option<T>) -> Option<T> {
        let answer = self.raw.get(field)?;
        let parsed = parse(answer);
        if parsed.is_none() {
            debug!(%field, answer, "unrecognized answer read as not reported");
        }
        parsed
    }
}

fn duration_in(label: &str, allowed: &[DurationBand]) -> Option<DurationBand> {
    DurationBand::from_label(label).filter(|band| allowed.contains(band))
}

// Every required field was checked above, so this only fires if the
// required-field list and the record layout disagree.
fn present<T>(value: Option<T>, field: Field) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::MissingFields(vec![field]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_raw() -> RawAttributes {
        RawAttributes::new()
            .with(Field::Age, "31-40")
            .with(Field::SymptomDuration, "6-12 months")
            .with(Field::DiseaseStability, "6-12 months")
            .with(Field::ChangeOverTime, "remained stable")
            .with(Field::Pain, "no")
            .with(Field::CurvatureDegree, "30-45")
            .with(Field::CurvatureDirection, "Dorsal")
            .with(Field::Calcification, "None")
            .with(Field::IndentationHourglass, "None")
            .with(Field::Trauma, "no")
            .with(Field::Lifelong, "no")
            .with(Field::ShorteningEd, "None")
    }

    #[test]
    fn test_complete_record() {
        let record = validate(&complete_raw()).unwrap();
        assert_eq!(record.age_band, AgeBand::From31To40);
        assert_eq!(record.symptom_duration, DurationBand::SixToTwelveMonths);
        assert_eq!(record.stability_duration, Some(DurationBand::SixToTwelveMonths));
        assert_eq!(record.change_since_onset, ChangeSinceOnset::Stable);
        assert!(!record.pain_present);
        assert_eq!(record.calcification, Some(Grade::Absent));
        assert_eq!(record.additional_symptoms, Some(AdditionalSymptoms::Absent));
        assert!(!record.trauma_recalled);
        assert!(!record.lifelong_onset);
    }

    #[test]
    fn test_missing_trauma_and_lifelong() {
        let mut raw = complete_raw();
        raw.clear(Field::Trauma);
        raw.clear(Field::Lifelong);
        assert_eq!(
            validate(&raw),
            Err(ValidationError::MissingFields(vec![Field::Trauma, Field::Lifelong]))
        );
    }

    #[test]
    fn test_all_required_missing() {
        let err = validate(&RawAttributes::new()).unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(Field::REQUIRED.to_vec()));
    }

    #[test]
    fn test_unrecognized_required_answer_is_missing() {
        let raw = complete_raw()
            .with(Field::Lifelong, "sometimes")
            .with(Field::Age, "seventeen")
            .with(Field::Trauma, "");
        assert_eq!(
            validate(&raw),
            Err(ValidationError::MissingFields(vec![
                Field::Age,
                Field::Trauma,
                Field::Lifelong,
            ]))
        );
    }

    #[test]
    fn test_optional_fields_default_to_not_reported() {
        let mut raw = complete_raw();
        raw.clear(Field::DiseaseStability);
        raw.clear(Field::Calcification);
        raw.clear(Field::IndentationHourglass);
        raw.clear(Field::ShorteningEd);

        let record = validate(&raw).unwrap();
        assert_eq!(record.stability_duration, None);
        assert_eq!(record.calcification, None);
        assert_eq!(record.indentation, None);
        assert_eq!(record.additional_symptoms, None);
    }

    #[test]
    fn test_pain_duration_ignored_without_pain() {
        let raw = complete_raw()
            .with(Field::Pain, "no")
            .with(Field::PainDuration, "not a duration");
        let record = validate(&raw).unwrap();
        assert!(!record.pain_present);
        assert_eq!(record.pain_duration, None);
    }

    #[test]
    fn test_pain_duration_kept_with_pain() {
        let raw = complete_raw()
            .with(Field::Pain, "yes")
            .with(Field::PainDuration, ">12 months");
        let record = validate(&raw).unwrap();
        assert!(record.pain_present);
        assert_eq!(record.pain_duration, Some(DurationBand::MoreThanTwelveMonths));
    }

    #[test]
    fn test_pain_without_duration_is_valid() {
        let raw = complete_raw().with(Field::Pain, "yes");
        let record = validate(&raw).unwrap();
        assert!(record.pain_present);
        assert_eq!(record.pain_duration, None);
    }

    #[test]
    fn test_unrecognized_optional_answers_are_not_reported() {
        let raw = complete_raw()
            .with(Field::DiseaseStability, "a while")
            .with(Field::Calcification, "Moderate shadowing")
            .with(Field::IndentationHourglass, "lots")
            .with(Field::ShorteningEd, "unsure");
        let record = validate(&raw).unwrap();
        assert_eq!(record.stability_duration, None);
        assert_eq!(record.calcification, None);
        assert_eq!(record.indentation, None);
        assert_eq!(record.additional_symptoms, None);
    }

    #[test]
    fn test_unrecognized_pain_duration_is_not_reported() {
        let raw = complete_raw()
            .with(Field::Pain, "yes")
            .with(Field::PainDuration, "Since birth/puberty");
        let record = validate(&raw).unwrap();
        assert!(record.pain_present);
        assert_eq!(record.pain_duration, None);
    }

    #[test]
    fn test_duration_label_must_fit_field() {
        // "Still changing" only makes sense for stability.
        let raw = complete_raw().with(Field::SymptomDuration, "Still changing");
        assert_eq!(
            validate(&raw),
            Err(ValidationError::MissingFields(vec![Field::SymptomDuration]))
        );

        let raw = complete_raw().with(Field::DiseaseStability, "Still changing");
        let record = validate(&raw).unwrap();
        assert_eq!(record.stability_duration, Some(DurationBand::StillChanging));
    }

    #[test]
    fn test_grade_labels_checked_per_field() {
        let raw = complete_raw()
            .with(Field::Calcification, "Severe (>25% narrowing)")
            .with(Field::IndentationHourglass, "Moderate (10-25% narrowing)");
        let record = validate(&raw).unwrap();
        assert_eq!(record.calcification, None);
        assert_eq!(record.indentation, Some(Grade::Moderate));
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let raw = complete_raw()
            .with(Field::Trauma, "YES")
            .with(Field::CurvatureDirection, "ventral");
        let record = validate(&raw).unwrap();
        assert!(record.trauma_recalled);
        assert_eq!(record.curvature_direction, CurvatureDirection::Ventral);
    }

    #[test]
    fn test_to_raw_validates_back_to_same_record() {
        let record = validate(&complete_raw().with(Field::Pain, "yes")).unwrap();
        assert_eq!(validate(&record.to_raw()).unwrap(), record);
    }
}
