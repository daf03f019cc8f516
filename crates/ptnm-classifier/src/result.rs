//! Classification result types.

use ptnm::{Mode, NonPdComponent, PdComponent, PtnmCode, Trauma};

use crate::rationale::{MReason, NReason, PReason, Rationale, TReason};

/// Output of the engine: a PTNM code and the reason behind each axis.
///
/// # Example
///
/// ```ignore
/// let classification = classifier.classify(&record);
///
/// println!("PTNM: {}", classification.code);
///
/// if classification.code.m == Mode::Active {
///     println!("Active phase: {:?}", classification.rationale.m);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    /// The four-axis code.
    pub code: PtnmCode,
    /// One reason code per axis.
    pub rationale: Rationale,
}

impl Classification {
    /// Assembles a classification from per-axis decisions.
    pub fn from_axes(
        p: AxisDecision<PdComponent, PReason>,
        t: AxisDecision<Trauma, TReason>,
        n: AxisDecision<NonPdComponent, NReason>,
        m: AxisDecision<Mode, MReason>,
    ) -> Self {
        Self {
            code: PtnmCode::new(p.value, t.value, n.value, m.value),
            rationale: Rationale {
                p: p.reason,
                t: t.reason,
                n: n.reason,
                m: m.reason,
            },
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.code, f)
    }
}

/// A single axis value with the reason it was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisDecision<V, R> {
    /// The sub-code.
    pub value: V,
    /// The reason code.
    pub reason: R,
}

impl<V, R> AxisDecision<V, R> {
    /// Creates a decision.
    pub fn new(value: V, reason: R) -> Self {
        Self { value, reason }
    }
}
