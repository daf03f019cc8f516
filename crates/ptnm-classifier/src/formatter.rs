//! Result formatter.
//!
//! Turns a [`Classification`] into the external-facing result shape: the
//! canonical code string, one breakdown line per axis and metadata. Every
//! breakdown sentence comes from a fixed table keyed by reason code.

use ptnm::{PtnmCode, SCHEME_NAME, SCHEME_REFERENCE};

use crate::rationale::{MReason, NReason, PReason, Rationale, TReason};
use crate::result::Classification;

/// Per-axis breakdown lines.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    /// P axis line.
    pub p: String,
    /// T axis line.
    pub t: String,
    /// N axis line.
    pub n: String,
    /// M axis line.
    pub m: String,
}

/// Metadata describing how a result was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ResultMetadata {
    /// Classification scheme name.
    pub scheme: String,
    /// Literature reference for the scheme.
    pub reference: String,
    /// Version of this engine.
    pub engine_version: String,
}

impl Default for ResultMetadata {
    fn default() -> Self {
        Self {
            scheme: SCHEME_NAME.to_string(),
            reference: SCHEME_REFERENCE.to_string(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Classification result handed to rendering and export collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationResult {
    /// Canonical code string, e.g. `PClT1N0M0`.
    pub ptnm: String,
    /// One line per axis.
    pub breakdown: Breakdown,
    /// Structured code.
    pub code: PtnmCode,
    /// Structured reason codes.
    pub rationale: Rationale,
    /// How the result was produced.
    pub metadata: ResultMetadata,
}

/// Result formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    _private: (),
}

impl Formatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a classification.
    pub fn format(&self, classification: &Classification) -> ClassificationResult {
        Self::format_classification(classification)
    }

    /// Format a classification (static method).
    pub fn format_classification(classification: &Classification) -> ClassificationResult {
        let code = classification.code;
        let rationale = classification.rationale;

        ClassificationResult {
            ptnm: code.to_string(),
            breakdown: Breakdown {
                p: Self::line(code.p.name(), Self::p_sentence(rationale.p)),
                t: Self::line(code.t.name(), Self::t_sentence(rationale.t)),
                n: Self::line(code.n.name(), Self::n_sentence(rationale.n)),
                m: Self::line(code.m.name(), Self::m_sentence(rationale.m)),
            },
            code,
            rationale,
            metadata: ResultMetadata::default(),
        }
    }

    fn line(name: &str, sentence: &str) -> String {
        format!("{} - {}", name, sentence)
    }

    // =========================================================================
    // Sentence tables
    // =========================================================================

    /// Sentence for a P axis reason.
    pub fn p_sentence(reason: PReason) -> &'static str {
        match reason {
            PReason::WorseningAfterOnset => {
                "subjective worsening at least 3 months after onset"
            }
            PReason::SignificantCalcification => {
                "moderate or severe plaque calcification on imaging"
            }
            PReason::RelapseAfterStablePeriod => {
                "reactivation after at least 6 months of stability"
            }
            PReason::ClassicalByExclusion => {
                "meets exclusion criteria, no progressive, calcifying or relapsing features"
            }
            PReason::LifelongWithoutSubtype => {
                "lifelong curvature without features of a specific PD subtype"
            }
        }
    }

    /// Sentence for a T axis reason.
    pub fn t_sentence(reason: TReason) -> &'static str {
        match reason {
            TReason::TraumaRecalled => "patient recalled a specific injury",
            TReason::NoTraumaRecalled => "no recalled trauma",
        }
    }

    /// Sentence for an N axis reason.
    pub fn n_sentence(reason: NReason) -> &'static str {
        match reason {
            NReason::AcquiredOnset => "curvature developed later in life",
            NReason::CongenitalOnset => "curvature present since birth",
            NReason::PeripubertalOnset => "curvature developed around puberty",
        }
    }

    /// Sentence for an M axis reason.
    pub fn m_sentence(reason: MReason) -> &'static str {
        match reason {
            MReason::NoPdComponent => "no PD component to stage",
            MReason::NonPdOnly => "only a non-PD curvature component is present",
            MReason::Worsening => "curvature is still worsening",
            MReason::ClassicalStable => "classical PD stable for at least 3 months",
            MReason::NonclassicalStableAfterHistory => {
                "at least 12 months since onset and stable for at least 3 months"
            }
            MReason::NonclassicalStableProlonged => "stable for at least 6 months",
            MReason::StillChanging => "curvature is still actively changing",
            MReason::StabilityNotReported => "stability duration not reported",
            MReason::BelowStableThreshold => {
                "not yet stable long enough for the stable phase"
            }
        }
    }
}

/// Formats a classification.
pub fn format(classification: &Classification) -> ClassificationResult {
    Formatter::format_classification(classification)
}

// =============================================================================
// Tests
// =============================================================================
