//! Export round-trips through the filesystem.

use ptnm::{parse_code, Field, RawAttributes};
use ptnm_classifier::{format, validate, Classifier};
use ptnm_report::{ClassificationExport, ReportError, TextReport};
use tempfile::tempdir;

fn classified_export() -> ClassificationExport {
    let raw = RawAttributes::new()
        .with(Field::Age, "61-70")
        .with(Field::SymptomDuration, "3-6 months")
        .with(Field::DiseaseStability, "Still changing")
        .with(Field::ChangeOverTime, "worsened")
        .with(Field::Pain, "yes")
        .with(Field::PainDuration, "1-3 months")
        .with(Field::CurvatureDegree, "45-60")
        .with(Field::CurvatureDirection, "Dorsal")
        .with(Field::Calcification, "Mild (stippling)")
        .with(Field::Trauma, "yes")
        .with(Field::Lifelong, "no")
        .with(Field::ShorteningEd, "Both shortening and ED");
    let record = validate(&raw).unwrap();
    let result = format(&Classifier::new().classify(&record));
    ClassificationExport::new(&record, result)
}

#[test]
fn test_save_and_load() {
    let dir = tempdir().unwrap();
    let export = classified_export();
    let path = dir.path().join(export.suggested_file_name());

    export.save(&path).unwrap();
    let loaded = ClassificationExport::load(&path).unwrap();

    assert_eq!(loaded.classification.ptnm, "PPT1N0M1");
    assert_eq!(loaded.classification.code, export.classification.code);
    assert_eq!(loaded.timestamp, export.timestamp);
    assert_eq!(loaded, export);
    assert_eq!(
        parse_code(&loaded.classification.ptnm).unwrap(),
        loaded.classification.code
    );
}

#[test]
fn test_loaded_answers_validate_again() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("case.json");
    classified_export().save(&path).unwrap();

    let loaded = ClassificationExport::load(&path).unwrap();
    let record = validate(&loaded.patient_data).unwrap();
    assert_eq!(
        format(&Classifier::new().classify(&record)).ptnm,
        loaded.classification.ptnm
    );
}

#[test]
fn test_load_missing_file() {
    let dir = tempdir().unwrap();
    let err = ClassificationExport::load(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ReportError::Io { .. }));
}

#[test]
fn test_load_malformed_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{\"patientData\": 3}").unwrap();

    let err = ClassificationExport::load(&path).unwrap_err();
    assert!(matches!(err, ReportError::Deserialization(_)));
}

#[test]
fn test_text_report_save() {
    let dir = tempdir().unwrap();
    let report = TextReport::from_export(&classified_export());
    let path = dir.path().join(report.suggested_file_name());

    report.save(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();

    assert_eq!(text, report.render());
    assert!(text.contains("CLASSIFICATION: PPT1N0M1"));
    assert!(text.contains("Reports pain for 1-3 months"));
    assert!(text.contains("Both shortening and ED"));
}
