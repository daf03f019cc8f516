//! Categorical attribute types collected on the intake form.
//!
//! Each type knows its form label(s). Label matching trims surrounding
//! whitespace and ignores ASCII case.

/// Normalizes a form answer for label comparison.
pub(crate) fn normalize(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

/// Parses a `yes`/`no` answer.
pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match normalize(answer).as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

/// Form label for a yes/no flag.
pub fn yes_no_label(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

// =============================================================================
// Age
// =============================================================================

/// Patient age band in years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgeBand {
    /// 18-30 years
    From18To30,
    /// 31-40 years
    From31To40,
    /// 41-50 years
    From41To50,
    /// 51-60 years
    From51To60,
    /// 61-70 years
    From61To70,
    /// 71 years and over
    Over70,
}

impl AgeBand {
    /// All age bands, youngest first.
    pub const ALL: [AgeBand; 6] = [
        AgeBand::From18To30,
        AgeBand::From31To40,
        AgeBand::From41To50,
        AgeBand::From51To60,
        AgeBand::From61To70,
        AgeBand::Over70,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            AgeBand::From18To30 => "18-30",
            AgeBand::From31To40 => "31-40",
            AgeBand::From41To50 => "41-50",
            AgeBand::From51To60 => "51-60",
            AgeBand::From61To70 => "61-70",
            AgeBand::Over70 => "71+",
        }
    }

    /// Looks up an age band by form label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL.into_iter().find(|b| b.label() == wanted)
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Course of disease
// =============================================================================

/// Patient-reported change since onset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChangeSinceOnset {
    /// Curvature has improved.
    Improved,
    /// Curvature has remained stable.
    Stable,
    /// Curvature has worsened.
    Worsened,
}

impl ChangeSinceOnset {
    /// All answers in form order.
    pub const ALL: [ChangeSinceOnset; 3] = [
        ChangeSinceOnset::Improved,
        ChangeSinceOnset::Stable,
        ChangeSinceOnset::Worsened,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            ChangeSinceOnset::Improved => "improved",
            ChangeSinceOnset::Stable => "remained stable",
            ChangeSinceOnset::Worsened => "worsened",
        }
    }

    /// Looks up a change answer by form label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL.into_iter().find(|c| c.label() == wanted)
    }
}

impl std::fmt::Display for ChangeSinceOnset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Curvature
// =============================================================================

/// Curvature angle band in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvatureDegree {
    /// Mild, under 15 degrees.
    Under15,
    /// Mild-moderate, 15-30 degrees.
    From15To30,
    /// Moderate, 30-45 degrees.
    From30To45,
    /// Moderate-severe, 45-60 degrees.
    From45To60,
    /// Severe, 60-90 degrees.
    From60To90,
    /// Very severe, over 90 degrees.
    Over90,
}

impl CurvatureDegree {
    /// All bands, smallest first.
    pub const ALL: [CurvatureDegree; 6] = [
        CurvatureDegree::Under15,
        CurvatureDegree::From15To30,
        CurvatureDegree::From30To45,
        CurvatureDegree::From45To60,
        CurvatureDegree::From60To90,
        CurvatureDegree::Over90,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            CurvatureDegree::Under15 => "<15",
            CurvatureDegree::From15To30 => "15-30",
            CurvatureDegree::From30To45 => "30-45",
            CurvatureDegree::From45To60 => "45-60",
            CurvatureDegree::From60To90 => "60-90",
            CurvatureDegree::Over90 => ">90",
        }
    }

    /// Looks up a curvature band by form label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL.into_iter().find(|d| d.label() == wanted)
    }
}

impl std::fmt::Display for CurvatureDegree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of curvature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurvatureDirection {
    /// Upward.
    Dorsal,
    /// Up and to the side.
    Dorsolateral,
    /// To the side.
    Lateral,
    /// Down and to the side.
    Ventrolateral,
    /// Downward.
    Ventral,
    /// More than one direction.
    Multiple,
}

impl CurvatureDirection {
    /// All directions in form order.
    pub const ALL: [CurvatureDirection; 6] = [
        CurvatureDirection::Dorsal,
        CurvatureDirection::Dorsolateral,
        CurvatureDirection::Lateral,
        CurvatureDirection::Ventrolateral,
        CurvatureDirection::Ventral,
        CurvatureDirection::Multiple,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            CurvatureDirection::Dorsal => "Dorsal",
            CurvatureDirection::Dorsolateral => "Dorsolateral",
            CurvatureDirection::Lateral => "Lateral",
            CurvatureDirection::Ventrolateral => "Ventrolateral",
            CurvatureDirection::Ventral => "Ventral",
            CurvatureDirection::Multiple => "Multiple",
        }
    }

    /// Looks up a direction by form label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|d| normalize(d.label()) == wanted)
    }
}

impl std::fmt::Display for CurvatureDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Plaque findings
// =============================================================================

/// Severity grade shared by plaque calcification and indentation/hourglass
/// deformity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Grade {
    /// Finding absent.
    Absent,
    /// Mild.
    Mild,
    /// Moderate.
    Moderate,
    /// Severe.
    Severe,
}

impl Grade {
    /// All grades, least severe first.
    pub const ALL: [Grade; 4] = [Grade::Absent, Grade::Mild, Grade::Moderate, Grade::Severe];

    /// Looks up a grade from a calcification answer.
    ///
    /// Accepts the calcification form labels and the bare grade words
    /// (`none`, `mild`, `moderate`, `severe`).
    pub fn from_calcification_label(label: &str) -> Option<Self> {
        Self::lookup(label, Grade::calcification_label)
    }

    /// Looks up a grade from an indentation/hourglass answer.
    ///
    /// Accepts the indentation form labels and the bare grade words.
    pub fn from_indentation_label(label: &str) -> Option<Self> {
        Self::lookup(label, Grade::indentation_label)
    }

    fn lookup(label: &str, form_label: fn(Grade) -> &'static str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|g| normalize(form_label(*g)) == wanted || g.word() == wanted)
    }

    fn word(self) -> &'static str {
        match self {
            Grade::Absent => "none",
            Grade::Mild => "mild",
            Grade::Moderate => "moderate",
            Grade::Severe => "severe",
        }
    }

    /// Calcification form label.
    pub fn calcification_label(self) -> &'static str {
        match self {
            Grade::Absent => "None",
            Grade::Mild => "Mild (stippling)",
            Grade::Moderate => "Moderate (shadowing)",
            Grade::Severe => "Severe (>1cm)",
        }
    }

    /// Indentation/hourglass form label.
    pub fn indentation_label(self) -> &'static str {
        match self {
            Grade::Absent => "None",
            Grade::Mild => "Mild (<10% narrowing)",
            Grade::Moderate => "Moderate (10-25% narrowing)",
            Grade::Severe => "Severe (>25% narrowing)",
        }
    }

    /// Returns true for moderate or severe.
    pub fn is_significant(self) -> bool {
        self >= Grade::Moderate
    }
}

// =============================================================================
// Additional symptoms
// =============================================================================

/// Associated shortening and/or erectile dysfunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdditionalSymptoms {
    /// Neither.
    Absent,
    /// Penile shortening only.
    ShorteningOnly,
    /// Erectile dysfunction only.
    EdOnly,
    /// Both shortening and erectile dysfunction.
    Both,
}

impl AdditionalSymptoms {
    /// All answers in form order.
    pub const ALL: [AdditionalSymptoms; 4] = [
        AdditionalSymptoms::Absent,
        AdditionalSymptoms::ShorteningOnly,
        AdditionalSymptoms::EdOnly,
        AdditionalSymptoms::Both,
    ];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            AdditionalSymptoms::Absent => "None",
            AdditionalSymptoms::ShorteningOnly => "Penile shortening only",
            AdditionalSymptoms::EdOnly => "Erectile dysfunction only",
            AdditionalSymptoms::Both => "Both shortening and ED",
        }
    }

    /// Looks up an answer by form label.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|s| normalize(s.label()) == wanted)
    }
}

impl std::fmt::Display for AdditionalSymptoms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no() {
        assert_eq!(parse_yes_no("yes"), Some(true));
        assert_eq!(parse_yes_no(" No "), Some(false));
        assert_eq!(parse_yes_no("maybe"), None);
        assert_eq!(yes_no_label(true), "yes");
    }

    #[test]
    fn test_age_band_labels() {
        assert_eq!(AgeBand::from_label("31-40"), Some(AgeBand::From31To40));
        assert_eq!(AgeBand::from_label("71+"), Some(AgeBand::Over70));
        assert_eq!(AgeBand::from_label("17"), None);
    }

    #[test]
    fn test_change_labels() {
        assert_eq!(
            ChangeSinceOnset::from_label("Remained stable"),
            Some(ChangeSinceOnset::Stable)
        );
        assert_eq!(
            ChangeSinceOnset::from_label("worsened"),
            Some(ChangeSinceOnset::Worsened)
        );
    }

    #[test]
    fn test_curvature_labels() {
        assert_eq!(
            CurvatureDegree::from_label("30-45"),
            Some(CurvatureDegree::From30To45)
        );
        assert_eq!(
            CurvatureDirection::from_label("ventrolateral"),
            Some(CurvatureDirection::Ventrolateral)
        );
    }

    #[test]
    fn test_grade_from_field_labels() {
        assert_eq!(
            Grade::from_calcification_label("Moderate (shadowing)"),
            Some(Grade::Moderate)
        );
        assert_eq!(
            Grade::from_indentation_label("Severe (>25% narrowing)"),
            Some(Grade::Severe)
        );
        assert_eq!(Grade::from_calcification_label("None"), Some(Grade::Absent));
        assert_eq!(Grade::from_indentation_label("mild"), Some(Grade::Mild));
        assert_eq!(Grade::from_calcification_label("heavy"), None);
        assert_eq!(Grade::from_calcification_label("Moderate shadowing"), None);
    }

    #[test]
    fn test_grade_labels_do_not_cross_fields() {
        assert_eq!(Grade::from_calcification_label("Severe (>25% narrowing)"), None);
        assert_eq!(Grade::from_indentation_label("Mild (stippling)"), None);
    }

    #[test]
    fn test_grade_labels_roundtrip() {
        for grade in Grade::ALL {
            assert_eq!(
                Grade::from_calcification_label(grade.calcification_label()),
                Some(grade)
            );
            assert_eq!(
                Grade::from_indentation_label(grade.indentation_label()),
                Some(grade)
            );
        }
    }

    #[test]
    fn test_grade_significance() {
        assert!(!Grade::Mild.is_significant());
        assert!(Grade::Moderate.is_significant());
        assert!(Grade::Severe.is_significant());
    }

    #[test]
    fn test_additional_symptoms_labels() {
        assert_eq!(
            AdditionalSymptoms::from_label("Both shortening and ED"),
            Some(AdditionalSymptoms::Both)
        );
        assert_eq!(
            AdditionalSymptoms::from_label("none"),
            Some(AdditionalSymptoms::Absent)
        );
    }
}
