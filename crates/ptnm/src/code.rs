//! PTNM code types.
//!
//! A PTNM code has four independent axes, written in fixed order:
//!
//! | Axis | Meaning | Tokens |
//! |------|---------|--------|
//! | P | Peyronie's disease component | `0` `Cl` `Ca` `P` `R` `U` |
//! | T | Trauma | `0` `1` |
//! | N | Non-PD curvature component | `0` `C` `M` `U` |
//! | M | Mode (disease phase) | `0` `1` `x` |
//!
//! Example: `PClT1N0M0` is classical PD, trauma recalled, no non-PD
//! component, stable phase.

/// P axis: Peyronie's disease component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PdComponent {
    /// No PD component (`0`).
    None,
    /// Classical PD, an exclusion diagnosis (`Cl`).
    Classical,
    /// Calcifying PD (`Ca`).
    Calcifying,
    /// Progressive PD (`P`).
    Progressive,
    /// Relapsing/remitting PD (`R`).
    RelapsingRemitting,
    /// Undifferentiated (`U`).
    Undifferentiated,
}

impl PdComponent {
    /// Code token for this sub-code.
    pub fn token(self) -> &'static str {
        match self {
            PdComponent::None => "0",
            PdComponent::Classical => "Cl",
            PdComponent::Calcifying => "Ca",
            PdComponent::Progressive => "P",
            PdComponent::RelapsingRemitting => "R",
            PdComponent::Undifferentiated => "U",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            PdComponent::None => "No PD component",
            PdComponent::Classical => "Classical PD",
            PdComponent::Calcifying => "Calcifying PD",
            PdComponent::Progressive => "Progressive PD",
            PdComponent::RelapsingRemitting => "Relapsing/remitting PD",
            PdComponent::Undifferentiated => "Undifferentiated PD",
        }
    }
}

/// T axis: recalled trauma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Trauma {
    /// No trauma recalled (`0`).
    Absent,
    /// Trauma recalled (`1`).
    Present,
}

impl Trauma {
    /// Code token for this sub-code.
    pub fn token(self) -> &'static str {
        match self {
            Trauma::Absent => "0",
            Trauma::Present => "1",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Trauma::Absent => "Trauma absent",
            Trauma::Present => "Trauma present",
        }
    }
}

impl From<bool> for Trauma {
    fn from(recalled: bool) -> Self {
        if recalled {
            Trauma::Present
        } else {
            Trauma::Absent
        }
    }
}

/// N axis: non-PD curvature component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NonPdComponent {
    /// No non-PD component (`0`).
    None,
    /// Congenital curvature, present since birth (`C`).
    Congenital,
    /// Maturational curvature, developed around puberty (`M`).
    Maturational,
    /// Undifferentiated (`U`).
    Undifferentiated,
}

impl NonPdComponent {
    /// Code token for this sub-code.
    pub fn token(self) -> &'static str {
        match self {
            NonPdComponent::None => "0",
            NonPdComponent::Congenital => "C",
            NonPdComponent::Maturational => "M",
            NonPdComponent::Undifferentiated => "U",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            NonPdComponent::None => "No non-PD component",
            NonPdComponent::Congenital => "Congenital curvature",
            NonPdComponent::Maturational => "Maturational curvature",
            NonPdComponent::Undifferentiated => "Undifferentiated non-PD curvature",
        }
    }

    /// Returns true for the lifelong-onset subtypes.
    pub fn is_lifelong(self) -> bool {
        matches!(self, NonPdComponent::Congenital | NonPdComponent::Maturational)
    }
}

/// M axis: disease mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Stable phase (`0`).
    Stable,
    /// Active phase (`1`).
    Active,
    /// Not applicable (`x`).
    NotApplicable,
}

impl Mode {
    /// Code token for this sub-code.
    pub fn token(self) -> &'static str {
        match self {
            Mode::Stable => "0",
            Mode::Active => "1",
            Mode::NotApplicable => "x",
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Stable => "Stable phase",
            Mode::Active => "Active phase",
            Mode::NotApplicable => "Mode not applicable",
        }
    }
}

/// A complete PTNM code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PtnmCode {
    /// P axis.
    pub p: PdComponent,
    /// T axis.
    pub t: Trauma,
    /// N axis.
    pub n: NonPdComponent,
    /// M axis.
    pub m: Mode,
}

impl PtnmCode {
    /// Creates a code from its four axes.
    pub fn new(p: PdComponent, t: Trauma, n: NonPdComponent, m: Mode) -> Self {
        Self { p, t, n, m }
    }
}

impl std::fmt::Display for PtnmCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "P{}T{}N{}M{}",
            self.p.token(),
            self.t.token(),
            self.n.token(),
            self.m.token()
        )
    }
}

impl std::str::FromStr for PtnmCode {
    type Err = crate::CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_code(s)
    }
}
