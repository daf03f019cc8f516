//! Reason codes explaining each axis decision.
//!
//! There is exactly one reason per rule branch of the engine. The formatter
//! maps each one to a fixed sentence.

/// Why the P axis was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PReason {
    /// Subjective worsening at least the progressive threshold after onset.
    WorseningAfterOnset,
    /// Moderate or severe plaque calcification.
    SignificantCalcification,
    /// Renewed worsening after a long enough stable period.
    RelapseAfterStablePeriod,
    /// No other subtype applies and onset was acquired.
    ClassicalByExclusion,
    /// Lifelong curvature with no subtype evidence.
    LifelongWithoutSubtype,
}

/// Why the T axis was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TReason {
    /// Patient recalls a specific injury.
    TraumaRecalled,
    /// Patient recalls no injury.
    NoTraumaRecalled,
}

/// Why the N axis was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NReason {
    /// Curvature developed later in life.
    AcquiredOnset,
    /// Lifelong curvature not attributable to puberty.
    CongenitalOnset,
    /// Lifelong curvature in an age band consistent with peripubertal onset.
    PeripubertalOnset,
}

/// Why the M axis was assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MReason {
    /// No PD component to stage.
    NoPdComponent,
    /// Only the non-PD component carries meaning.
    NonPdOnly,
    /// Curvature is worsening.
    Worsening,
    /// Classical PD stable for at least the classical threshold.
    ClassicalStable,
    /// Nonclassical PD with long history and stable for the shorter window.
    NonclassicalStableAfterHistory,
    /// Nonclassical PD stable for the longer window.
    NonclassicalStableProlonged,
    /// Curvature is still changing.
    StillChanging,
    /// Stability duration was not reported.
    StabilityNotReported,
    /// Stable, but not yet for long enough.
    BelowStableThreshold,
}

/// Reason codes for all four axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rationale {
    /// P axis reason.
    pub p: PReason,
    /// T axis reason.
    pub t: TReason,
    /// N axis reason.
    pub n: NReason,
    /// M axis reason.
    pub m: MReason,
}
