//! # ptnm-report
//!
//! Export artifacts for PTNM classifications.
//!
//! - [`case_description`] - template narrative of a case
//! - [`ClassificationExport`] - JSON export with the form answers, narrative,
//!   classification and timestamp
//! - [`TextReport`] - plain-text report for printing or filing
//!
//! ## Example
//!
//! ```rust,no_run
//! use ptnm::{Field, RawAttributes};
//! use ptnm_classifier::{format, validate, Classifier};
//! use ptnm_report::{ClassificationExport, TextReport};
//!
//! let raw = RawAttributes::new()
//!     .with(Field::Age, "31-40")
//!     .with(Field::SymptomDuration, "6-12 months")
//!     .with(Field::ChangeOverTime, "remained stable")
//!     .with(Field::DiseaseStability, "6-12 months")
//!     .with(Field::Pain, "no")
//!     .with(Field::CurvatureDegree, "30-45")
//!     .with(Field::CurvatureDirection, "Dorsal")
//!     .with(Field::Trauma, "no")
//!     .with(Field::Lifelong, "no");
//!
//! let record = validate(&raw)?;
//! let result = format(&Classifier::new().classify(&record));
//!
//! let export = ClassificationExport::new(&record, result);
//! export.save(export.suggested_file_name())?;
//!
//! let report = TextReport::from_export(&export);
//! report.save(report.suggested_file_name())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Saving logs an `info` event through `tracing`.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod export;
mod narrative;
mod text;

pub use error::{ReportError, ReportResult};
pub use export::ClassificationExport;
pub use narrative::{case_description, describe_answers};
pub use text::TextReport;
