//! # ptnm-classifier
//!
//! Deterministic PTNM classification of Peyronie's disease.
//!
//! This crate turns raw intake-form answers into a PTNM code through three
//! pure steps:
//!
//! - **Validator** - [`validate`] checks the required answers and produces a
//!   [`PatientRecord`](ptnm::PatientRecord)
//! - **Engine** - [`Classifier`] evaluates the four axes independently and
//!   attaches a reason code to each
//! - **Formatter** - [`format`] builds the canonical code string and a
//!   per-axis breakdown from a fixed sentence table
//!
//! ## Quick Start
//!
//! ```rust
//! use ptnm::{Field, RawAttributes};
//! use ptnm_classifier::{format, validate, Classifier};
//!
//! let raw = RawAttributes::new()
//!     .with(Field::Age, "31-40")
//!     .with(Field::SymptomDuration, "6-12 months")
//!     .with(Field::DiseaseStability, "6-12 months")
//!     .with(Field::ChangeOverTime, "remained stable")
//!     .with(Field::Pain, "no")
//!     .with(Field::CurvatureDegree, "30-45")
//!     .with(Field::CurvatureDirection, "Dorsal")
//!     .with(Field::Calcification, "None")
//!     .with(Field::IndentationHourglass, "None")
//!     .with(Field::Trauma, "no")
//!     .with(Field::Lifelong, "no")
//!     .with(Field::ShorteningEd, "None");
//!
//! let record = validate(&raw).unwrap();
//! let classification = Classifier::new().classify(&record);
//! let result = format(&classification);
//!
//! assert_eq!(result.ptnm, "PClT0N0M0");
//! ```
//!
//! ## Axis Rules
//!
//! | Axis | Rule (first match wins) |
//! |------|-------------------------|
//! | P | progressive, calcifying, relapsing/remitting, classical, undifferentiated |
//! | T | present iff trauma recalled |
//! | N | none if acquired; maturational or congenital if lifelong |
//! | M | not applicable, active if worsening, stable by threshold, else active |
//!
//! ## Feature Flags
//!
//! - `parallel` - Runs [`Classifier::classify_batch`] on rayon
//! - `serde` - Serialize/deserialize results and configuration
//!
//! ## Logging
//!
//! Decisions are logged through `tracing` at `debug` level. The crate never
//! installs a subscriber.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod engine;
mod error;
mod formatter;
mod rationale;
mod result;
mod validator;

// Public re-exports
pub use config::{ClassifierConfig, ClassifierConfigBuilder, StabilityThresholds};
pub use engine::{classify, Classifier};
pub use error::{ValidationError, ValidationResult};
pub use formatter::{format, Breakdown, ClassificationResult, Formatter, ResultMetadata};
pub use rationale::{MReason, NReason, PReason, Rationale, TReason};
pub use result::{AxisDecision, Classification};
pub use validator::validate;

// Re-export commonly used types from dependencies for convenience
pub use ptnm::{PatientRecord, PtnmCode, RawAttributes};
