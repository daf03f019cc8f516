//! # ptnm
//!
//! Vocabulary for the PTNM classification of Peyronie's disease
//! (Trost et al., 2024).
//!
//! This crate provides:
//! - **Attributes**: the categorical answers collected on the intake form,
//!   with their form labels
//! - **Duration bands**: one totally ordered [`DurationBand`] for every
//!   duration answer
//! - **Records**: unvalidated [`RawAttributes`] and the validated
//!   [`PatientRecord`]
//! - **Codes**: the four-axis [`PtnmCode`], its canonical string form and a
//!   parser for it
//!
//! Classification itself lives in `ptnm-classifier`.
//!
//! ## Usage
//!
//! ```rust
//! use ptnm::{parse_code, Mode, NonPdComponent, PdComponent, PtnmCode, Trauma};
//!
//! let code = PtnmCode::new(
//!     PdComponent::Classical,
//!     Trauma::Absent,
//!     NonPdComponent::None,
//!     Mode::Stable,
//! );
//! assert_eq!(code.to_string(), "PClT0N0M0");
//! assert_eq!(parse_code("PClT0N0M0").unwrap(), code);
//! ```
//!
//! ## Code Syntax Quick Reference
//!
//! | Axis | Token | Meaning |
//! |------|-------|---------|
//! | P | `0` | No PD component |
//! | P | `Cl` | Classical |
//! | P | `Ca` | Calcifying |
//! | P | `P` | Progressive |
//! | P | `R` | Relapsing/remitting |
//! | P | `U` | Undifferentiated |
//! | T | `0` / `1` | Trauma absent / present |
//! | N | `0` | No non-PD component |
//! | N | `C` | Congenital |
//! | N | `M` | Maturational |
//! | N | `U` | Undifferentiated |
//! | M | `0` / `1` / `x` | Stable / active / not applicable |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod attributes;
mod code;
mod duration;
mod error;
mod parser;
mod record;

pub use attributes::{
    parse_yes_no, yes_no_label, AdditionalSymptoms, AgeBand, ChangeSinceOnset, CurvatureDegree,
    CurvatureDirection, Grade,
};
pub use code::{Mode, NonPdComponent, PdComponent, PtnmCode, Trauma};
pub use duration::DurationBand;
pub use error::{CodeError, CodeResult};
pub use parser::parse_code;
pub use record::{Field, PatientRecord, RawAttributes};

/// Name of the classification scheme.
pub const SCHEME_NAME: &str = "PTNM";

/// Literature reference for the classification scheme.
pub const SCHEME_REFERENCE: &str =
    "Trost et al. (2024) - Creation of a Novel Classification System (PTNM) for Peyronie's Disease";
