//! Plain-text report.

use chrono::{DateTime, Utc};
use std::fs;
use std::path::Path;
use tracing::info;

use ptnm::PatientRecord;
use ptnm_classifier::ClassificationResult;

use crate::error::{ReportError, ReportResult};
use crate::export::ClassificationExport;
use crate::narrative::case_description;

const RECOMMENDATIONS_PLACEHOLDER: &str =
    "Not generated. Management decisions rest with the treating clinician.";

/// A plain-text classification report.
#[derive(Debug, Clone, PartialEq)]
pub struct TextReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Template narrative of the case.
    pub case_description: String,
    /// Formatted classification.
    pub classification: ClassificationResult,
}

impl TextReport {
    /// Creates a report stamped with the current time.
    pub fn new(record: &PatientRecord, classification: ClassificationResult) -> Self {
        Self {
            generated_at: Utc::now(),
            case_description: case_description(record),
            classification,
        }
    }

    /// Creates a report from an existing export, keeping its timestamp.
    pub fn from_export(export: &ClassificationExport) -> Self {
        Self {
            generated_at: export.timestamp,
            case_description: export.case_description.clone(),
            classification: export.classification.clone(),
        }
    }

    /// Suggested download name, `ptnm-classification-<unix millis>.txt`.
    pub fn suggested_file_name(&self) -> String {
        format!(
            "ptnm-classification-{}.txt",
            self.generated_at.timestamp_millis()
        )
    }

    /// Renders the report text.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Saves the rendered report to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ReportResult<()> {
        let path = path.as_ref();
        fs::write(path, self.render()).map_err(|e| ReportError::io_error(path, e))?;
        info!(
            path = %path.display(),
            ptnm = %self.classification.ptnm,
            "saved text report"
        );
        Ok(())
    }
}

impl std::fmt::Display for TextReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let breakdown = &self.classification.breakdown;
        let metadata = &self.classification.metadata;

        writeln!(f, "{} CLASSIFICATION REPORT", metadata.scheme)?;
        writeln!(
            f,
            "Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f)?;
        writeln!(f, "PATIENT CASE:")?;
        writeln!(f, "{}", self.case_description)?;
        writeln!(f)?;
        writeln!(f, "CLASSIFICATION: {}", self.classification.ptnm)?;
        writeln!(f)?;
        writeln!(f, "COMPONENT BREAKDOWN:")?;
        writeln!(f, "P (PD Component): {}", breakdown.p)?;
        writeln!(f, "T (Trauma): {}", breakdown.t)?;
        writeln!(f, "N (Non-PD): {}", breakdown.n)?;
        writeln!(f, "M (Mode): {}", breakdown.m)?;
        writeln!(f)?;
        writeln!(f, "RECOMMENDATIONS:")?;
        writeln!(f, "{}", RECOMMENDATIONS_PLACEHOLDER)?;
        writeln!(f)?;
        write!(f, "Reference: {}", metadata.reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ptnm::{
        AgeBand, ChangeSinceOnset, CurvatureDegree, CurvatureDirection, DurationBand, Grade,
    };
    use ptnm_classifier::{format, Classifier};

    fn record() -> PatientRecord {
        PatientRecord {
            age_band: AgeBand::From51To60,
            symptom_duration: DurationBand::MoreThanTwoYears,
            stability_duration: Some(DurationBand::SixToTwelveMonths),
            change_since_onset: ChangeSinceOnset::Stable,
            pain_present: false,
            pain_duration: None,
            curvature_degree: CurvatureDegree::From60To90,
            curvature_direction: CurvatureDirection::Dorsolateral,
            calcification: Some(Grade::Severe),
            indentation: Some(Grade::Mild),
            trauma_recalled: false,
            lifelong_onset: false,
            additional_symptoms: None,
        }
    }

    fn report() -> TextReport {
        let record = record();
        TextReport::new(&record, format(&Classifier::new().classify(&record)))
    }

    #[test]
    fn test_render_layout() {
        let text = report().render();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "PTNM CLASSIFICATION REPORT");
        assert!(lines[1].starts_with("Generated: "));
        assert!(text.contains("PATIENT CASE:\n51-60-year-old male."));
        assert!(text.contains("CLASSIFICATION: PCaT0N0M0"));
        assert!(text.contains("P (PD Component): Calcifying PD - "));
        assert!(text.contains("M (Mode): Stable phase - "));
        assert!(text.contains("RECOMMENDATIONS:"));
        assert_eq!(
            lines[lines.len() - 1],
            "Reference: Trost et al. (2024) - Creation of a Novel Classification System (PTNM) for Peyronie's Disease"
        );
    }

    #[test]
    fn test_from_export_keeps_timestamp() {
        let record = record();
        let export =
            ClassificationExport::new(&record, format(&Classifier::new().classify(&record)));
        let report = TextReport::from_export(&export);

        assert_eq!(report.generated_at, export.timestamp);
        assert_eq!(
            report.suggested_file_name(),
            export.suggested_file_name().replace(".json", ".txt")
        );
    }
}
