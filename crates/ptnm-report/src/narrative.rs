//! Case narrative.
//!
//! A fixed template filled from the form answers. Unanswered fields are
//! skipped; the remaining parts are joined with `. ` and closed with `.`.

use ptnm::{parse_yes_no, Field, PatientRecord, RawAttributes};

/// Builds the case description for a validated record.
///
/// # Example
///
/// ```rust
/// use ptnm::{Field, RawAttributes};
///
/// let raw = RawAttributes::new()
///     .with(Field::Age, "31-40")
///     .with(Field::SymptomDuration, "6-12 months")
///     .with(Field::Pain, "no");
///
/// assert_eq!(
///     ptnm_report::describe_answers(&raw),
///     "31-40-year-old male. with 6-12 months history of penile curvature. Denies pain."
/// );
/// ```
pub fn case_description(record: &PatientRecord) -> String {
    describe_answers(&record.to_raw())
}

/// Builds the case description directly from form answers.
pub fn describe_answers(raw: &RawAttributes) -> String {
    let mut parts: Vec<String> = Vec::new();
    let pain = raw.get(Field::Pain).and_then(parse_yes_no);
    let trauma = raw.get(Field::Trauma).and_then(parse_yes_no);

    if let Some(age) = raw.get(Field::Age) {
        parts.push(format!("{}-year-old male", age));
    }
    if let Some(duration) = raw.get(Field::SymptomDuration) {
        parts.push(format!("with {} history of penile curvature", duration));
    }
    if let Some(change) = raw.get(Field::ChangeOverTime) {
        parts.push(format!("Condition has {} since onset", change));
    }
    if let Some(stability) = raw.get(Field::DiseaseStability) {
        parts.push(format!("Stable for {}", stability));
    }
    match (pain, raw.get(Field::PainDuration)) {
        (Some(true), Some(duration)) => parts.push(format!("Reports pain for {}", duration)),
        (Some(false), _) => parts.push("Denies pain".to_string()),
        _ => {}
    }
    if let Some(degree) = raw.get(Field::CurvatureDegree) {
        parts.push(format!("{}-degree curvature", degree));
    }
    if let Some(direction) = raw.get(Field::CurvatureDirection) {
        parts.push(format!("{} direction", direction));
    }
    if let Some(calcification) = raw.get(Field::Calcification) {
        parts.push(format!("Calcification: {}", calcification));
    }
    if let Some(indentation) = raw.get(Field::IndentationHourglass) {
        parts.push(format!("Indentation/hourglass deformity: {}", indentation));
    }
    match trauma {
        Some(true) => parts.push("History of penile trauma recalled".to_string()),
        Some(false) => parts.push("No history of trauma".to_string()),
        None => {}
    }
    if raw.get(Field::Lifelong).and_then(parse_yes_no) == Some(true) {
        parts.push("Curvature present since birth or puberty".to_string());
    }
    if let Some(additional) = raw.get(Field::ShorteningEd) {
        parts.push(additional.to_string());
    }

    format!("{}.", parts.join(". "))
}
