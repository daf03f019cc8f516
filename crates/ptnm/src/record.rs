//! Raw form answers and the validated patient record.

use crate::attributes::{
    yes_no_label, AdditionalSymptoms, AgeBand, ChangeSinceOnset, CurvatureDegree,
    CurvatureDirection, Grade,
};
use crate::duration::DurationBand;

// =============================================================================
// Fields
// =============================================================================

/// Intake form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Field {
    /// Patient age band.
    Age,
    /// Duration of symptoms.
    SymptomDuration,
    /// How long the condition has been stable.
    DiseaseStability,
    /// Change since onset.
    ChangeOverTime,
    /// Current or past pain.
    Pain,
    /// Pain duration.
    PainDuration,
    /// Curvature degree band.
    CurvatureDegree,
    /// Curvature direction.
    CurvatureDirection,
    /// Plaque calcification.
    Calcification,
    /// Indentation/hourglass deformity.
    IndentationHourglass,
    /// History of trauma.
    Trauma,
    /// Curvature since birth/puberty.
    Lifelong,
    /// Shortening and/or erectile dysfunction.
    #[cfg_attr(feature = "serde", serde(rename = "shorteningED"))]
    ShorteningEd,
}

impl Field {
    /// All fields in form order.
    pub const ALL: [Field; 13] = [
        Field::Age,
        Field::SymptomDuration,
        Field::DiseaseStability,
        Field::ChangeOverTime,
        Field::Pain,
        Field::PainDuration,
        Field::CurvatureDegree,
        Field::CurvatureDirection,
        Field::Calcification,
        Field::IndentationHourglass,
        Field::Trauma,
        Field::Lifelong,
        Field::ShorteningEd,
    ];

    /// Fields that must be answered before a case can be classified.
    pub const REQUIRED: [Field; 8] = [
        Field::Age,
        Field::SymptomDuration,
        Field::ChangeOverTime,
        Field::Pain,
        Field::CurvatureDegree,
        Field::CurvatureDirection,
        Field::Trauma,
        Field::Lifelong,
    ];

    /// Form key for this field.
    pub fn key(self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::SymptomDuration => "symptomDuration",
            Field::DiseaseStability => "diseaseStability",
            Field::ChangeOverTime => "changeOverTime",
            Field::Pain => "pain",
            Field::PainDuration => "painDuration",
            Field::CurvatureDegree => "curvatureDegree",
            Field::CurvatureDirection => "curvatureDirection",
            Field::Calcification => "calcification",
            Field::IndentationHourglass => "indentationHourglass",
            Field::Trauma => "trauma",
            Field::Lifelong => "lifelong",
            Field::ShorteningEd => "shorteningED",
        }
    }

    /// Looks up a field by form key (exact match).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// Returns true if this field must be answered.
    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

// =============================================================================
// Raw attributes
// =============================================================================

/// Unvalidated form answers, one optional string per field.
///
/// Empty or whitespace-only strings count as unanswered.
///
/// # Example
///
/// ```rust
/// use ptnm::{Field, RawAttributes};
///
/// let raw = RawAttributes::new()
///     .with(Field::Age, "31-40")
///     .with(Field::Trauma, "no");
///
/// assert_eq!(raw.get(Field::Age), Some("31-40"));
/// assert_eq!(raw.get(Field::Lifelong), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct RawAttributes {
    /// Age band answer.
    pub age: Option<String>,
    /// Symptom duration answer.
    pub symptom_duration: Option<String>,
    /// Stability duration answer.
    pub disease_stability: Option<String>,
    /// Change since onset answer.
    pub change_over_time: Option<String>,
    /// Pain answer.
    pub pain: Option<String>,
    /// Pain duration answer.
    pub pain_duration: Option<String>,
    /// Curvature degree answer.
    pub curvature_degree: Option<String>,
    /// Curvature direction answer.
    pub curvature_direction: Option<String>,
    /// Calcification answer.
    pub calcification: Option<String>,
    /// Indentation/hourglass answer.
    pub indentation_hourglass: Option<String>,
    /// Trauma answer.
    pub trauma: Option<String>,
    /// Lifelong curvature answer.
    pub lifelong: Option<String>,
    /// Additional symptoms answer.
    #[cfg_attr(feature = "serde", serde(rename = "shorteningED"))]
    pub shortening_ed: Option<String>,
}

impl RawAttributes {
    /// Creates an empty set of answers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an answer, builder style.
    pub fn with(mut self, field: Field, answer: impl Into<String>) -> Self {
        self.set(field, answer);
        self
    }

    /// Sets an answer.
    pub fn set(&mut self, field: Field, answer: impl Into<String>) {
        *self.slot_mut(field) = Some(answer.into());
    }

    /// Clears an answer.
    pub fn clear(&mut self, field: Field) {
        *self.slot_mut(field) = None;
    }

    /// Returns the trimmed answer for a field, or `None` if unanswered.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field)
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Returns true if the field has a non-empty answer.
    pub fn is_answered(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Required fields that are still unanswered, in form order.
    pub fn missing_required(&self) -> Vec<Field> {
        Field::REQUIRED
            .into_iter()
            .filter(|f| !self.is_answered(*f))
            .collect()
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Age => &self.age,
            Field::SymptomDuration => &self.symptom_duration,
            Field::DiseaseStability => &self.disease_stability,
            Field::ChangeOverTime => &self.change_over_time,
            Field::Pain => &self.pain,
            Field::PainDuration => &self.pain_duration,
            Field::CurvatureDegree => &self.curvature_degree,
            Field::CurvatureDirection => &self.curvature_direction,
            Field::Calcification => &self.calcification,
            Field::IndentationHourglass => &self.indentation_hourglass,
            Field::Trauma => &self.trauma,
            Field::Lifelong => &self.lifelong,
            Field::ShorteningEd => &self.shortening_ed,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Age => &mut self.age,
            Field::SymptomDuration => &mut self.symptom_duration,
            Field::DiseaseStability => &mut self.disease_stability,
            Field::ChangeOverTime => &mut self.change_over_time,
            Field::Pain => &mut self.pain,
            Field::PainDuration => &mut self.pain_duration,
            Field::CurvatureDegree => &mut self.curvature_degree,
            Field::CurvatureDirection => &mut self.curvature_direction,
            Field::Calcification => &mut self.calcification,
            Field::IndentationHourglass => &mut self.indentation_hourglass,
            Field::Trauma => &mut self.trauma,
            Field::Lifelong => &mut self.lifelong,
            Field::ShorteningEd => &mut self.shortening_ed,
        }
    }
}

// =============================================================================
// Patient record
// =============================================================================

/// A validated patient record.
///
/// Optional findings use `None` as the "not reported" sentinel, meaning no
/// evidence either way. Records produced by validation never carry a
/// `pain_duration` when `pain_present` is false; for hand-built records the
/// duration is ignored in that case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatientRecord {
    /// Patient age band.
    pub age_band: AgeBand,
    /// Time since symptom onset.
    pub symptom_duration: DurationBand,
    /// How long the condition has been stable.
    pub stability_duration: Option<DurationBand>,
    /// Change since onset.
    pub change_since_onset: ChangeSinceOnset,
    /// Current or past pain.
    pub pain_present: bool,
    /// Pain duration, only when pain is present.
    pub pain_duration: Option<DurationBand>,
    /// Curvature degree band (descriptive).
    pub curvature_degree: CurvatureDegree,
    /// Curvature direction (descriptive).
    pub curvature_direction: CurvatureDirection,
    /// Plaque calcification grade.
    pub calcification: Option<Grade>,
    /// Indentation/hourglass deformity grade.
    pub indentation: Option<Grade>,
    /// Patient recalls a specific injury.
    pub trauma_recalled: bool,
    /// Curvature present since birth or puberty.
    pub lifelong_onset: bool,
    /// Shortening and/or erectile dysfunction.
    pub additional_symptoms: Option<AdditionalSymptoms>,
}

impl PatientRecord {
    /// Canonical form answers for this record.
    ///
    /// Unreported optional findings are left unanswered, as is the pain
    /// duration when pain is not present.
    pub fn to_raw(&self) -> RawAttributes {
        RawAttributes {
            age: Some(self.age_band.label().to_string()),
            symptom_duration: Some(self.symptom_duration.label().to_string()),
            disease_stability: self.stability_duration.map(|d| d.label().to_string()),
            change_over_time: Some(self.change_since_onset.label().to_string()),
            pain: Some(yes_no_label(self.pain_present).to_string()),
            pain_duration: self
                .pain_duration
                .filter(|_| self.pain_present)
                .map(|d| d.label().to_string()),
            curvature_degree: Some(self.curvature_degree.label().to_string()),
            curvature_direction: Some(self.curvature_direction.label().to_string()),
            calcification: self.calcification.map(|g| g.calcification_label().to_string()),
            indentation_hourglass: self.indentation.map(|g| g.indentation_label().to_string()),
            trauma: Some(yes_no_label(self.trauma_recalled).to_string()),
            lifelong: Some(yes_no_label(self.lifelong_onset).to_string()),
            shortening_ed: self.additional_symptoms.map(|s| s.label().to_string()),
        }
    }
}
