//! JSON export of a classified case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

use ptnm::{PatientRecord, RawAttributes};
use ptnm_classifier::ClassificationResult;

use crate::error::{ReportError, ReportResult};
use crate::narrative::case_description;

/// A classified case as written to disk.
///
/// Serialized with the keys `patientData`, `caseDescription`,
/// `classification` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationExport {
    /// Form answers for the case.
    pub patient_data: RawAttributes,
    /// Template narrative of the case.
    pub case_description: String,
    /// Formatted classification.
    pub classification: ClassificationResult,
    /// When the export was created.
    pub timestamp: DateTime<Utc>,
}

impl ClassificationExport {
    /// Creates an export stamped with the current time.
    pub fn new(record: &PatientRecord, classification: ClassificationResult) -> Self {
        Self {
            patient_data: record.to_raw(),
            case_description: case_description(record),
            classification,
            timestamp: Utc::now(),
        }
    }

    /// Suggested download name, `ptnm-classification-<unix millis>.json`.
    pub fn suggested_file_name(&self) -> String {
        format!(
            "ptnm-classification-{}.json",
            self.timestamp.timestamp_millis()
        )
    }

    /// Serializes the export as indented JSON.
    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialization(e.to_string()))
    }

    /// Writes the export as indented JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> ReportResult<()> {
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }

    /// Saves the export to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ReportResult<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| ReportError::io_error(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush().map_err(|e| ReportError::io_error(path, e))?;

        info!(
            path = %path.display(),
            ptnm = %self.classification.ptnm,
            "saved classification export"
        );
        Ok(())
    }

    /// Loads an export from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ReportError::io_error(path, e))?;
        let reader = BufReader::new(file);
        let export: Self = serde_json::from_reader(reader)
            .map_err(|e| ReportError::Deserialization(e.to_string()))?;
        Ok(export)
    }
}
