//! Ordered duration bands.
//!
//! Every duration answer on the intake form (symptom duration, stability
//! duration, pain duration) is one of a fixed set of bands. They share a
//! single total order so threshold checks are plain `>=` comparisons:
//!
//! ```text
//! Still changing < <1 month < 1-3 months < 3-6 months < 6-12 months
//!   < >12 months < 1-2 years < >2 years < Since birth/puberty
//! ```

use crate::attributes::normalize;

/// A categorical duration band, ordered from shortest to longest.
///
/// `StillChanging` is only meaningful for stability duration and sorts below
/// any elapsed duration ("not yet stable"). `SinceBirthOrPuberty` is only
/// meaningful for symptom duration and sorts above every finite band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DurationBand {
    /// `Still changing`
    StillChanging,
    /// `<1 month`
    LessThanOneMonth,
    /// `1-3 months`
    OneToThreeMonths,
    /// `3-6 months`
    ThreeToSixMonths,
    /// `6-12 months`
    SixToTwelveMonths,
    /// `>12 months`
    MoreThanTwelveMonths,
    /// `1-2 years`
    OneToTwoYears,
    /// `>2 years`
    MoreThanTwoYears,
    /// `Since birth/puberty`
    SinceBirthOrPuberty,
}

impl DurationBand {
    /// All bands in ascending order.
    pub const ALL: [DurationBand; 9] = [
        DurationBand::StillChanging,
        DurationBand::LessThanOneMonth,
        DurationBand::OneToThreeMonths,
        DurationBand::ThreeToSixMonths,
        DurationBand::SixToTwelveMonths,
        DurationBand::MoreThanTwelveMonths,
        DurationBand::OneToTwoYears,
        DurationBand::MoreThanTwoYears,
        DurationBand::SinceBirthOrPuberty,
    ];

    /// Bands offered for symptom duration.
    pub const SYMPTOM: [DurationBand; 7] = [
        DurationBand::LessThanOneMonth,
        DurationBand::OneToThreeMonths,
        DurationBand::ThreeToSixMonths,
        DurationBand::SixToTwelveMonths,
        DurationBand::OneToTwoYears,
        DurationBand::MoreThanTwoYears,
        DurationBand::SinceBirthOrPuberty,
    ];

    /// Bands offered for stability duration.
    pub const STABILITY: [DurationBand; 6] = [
        DurationBand::StillChanging,
        DurationBand::LessThanOneMonth,
        DurationBand::OneToThreeMonths,
        DurationBand::ThreeToSixMonths,
        DurationBand::SixToTwelveMonths,
        DurationBand::MoreThanTwelveMonths,
    ];

    /// Bands offered for pain duration.
    pub const PAIN: [DurationBand; 5] = [
        DurationBand::LessThanOneMonth,
        DurationBand::OneToThreeMonths,
        DurationBand::ThreeToSixMonths,
        DurationBand::SixToTwelveMonths,
        DurationBand::MoreThanTwelveMonths,
    ];

    /// Form label for this band.
    pub fn label(self) -> &'static str {
        match self {
            DurationBand::StillChanging => "Still changing",
            DurationBand::LessThanOneMonth => "<1 month",
            DurationBand::OneToThreeMonths => "1-3 months",
            DurationBand::ThreeToSixMonths => "3-6 months",
            DurationBand::SixToTwelveMonths => "6-12 months",
            DurationBand::MoreThanTwelveMonths => ">12 months",
            DurationBand::OneToTwoYears => "1-2 years",
            DurationBand::MoreThanTwoYears => ">2 years",
            DurationBand::SinceBirthOrPuberty => "Since birth/puberty",
        }
    }

    /// Looks up a band by form label (trimmed, case-insensitive).
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = normalize(label);
        Self::ALL
            .into_iter()
            .find(|band| normalize(band.label()) == wanted)
    }

    /// Lower bound of the band in whole months.
    ///
    /// `None` for `StillChanging`, which is not an elapsed duration.
    pub fn lower_bound_months(self) -> Option<u32> {
        match self {
            DurationBand::StillChanging => None,
            DurationBand::LessThanOneMonth => Some(0),
            DurationBand::OneToThreeMonths => Some(1),
            DurationBand::ThreeToSixMonths => Some(3),
            DurationBand::SixToTwelveMonths => Some(6),
            DurationBand::MoreThanTwelveMonths | DurationBand::OneToTwoYears => Some(12),
            DurationBand::MoreThanTwoYears => Some(24),
            // Adults only; puberty is at least a few years back.
            DurationBand::SinceBirthOrPuberty => Some(60),
        }
    }

    /// Returns true if this band means the condition has not settled yet.
    pub fn is_still_changing(self) -> bool {
        self == DurationBand::StillChanging
    }

    /// Returns true if this band is at or beyond `threshold`.
    pub fn at_least(self, threshold: DurationBand) -> bool {
        self >= threshold
    }
}

impl std::fmt::Display for DurationBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_order_ascending() {
        for pair in DurationBand::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_still_changing_below_every_elapsed_band() {
        for band in DurationBand::ALL.iter().skip(1) {
            assert!(DurationBand::StillChanging < *band);
        }
    }

    #[test]
    fn test_lower_bounds_are_monotonic() {
        let bounds: Vec<u32> = DurationBand::ALL
            .iter()
            .filter_map(|b| b.lower_bound_months())
            .collect();
        assert!(bounds.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            DurationBand::from_label("3-6 months"),
            Some(DurationBand::ThreeToSixMonths)
        );
        assert_eq!(
            DurationBand::from_label("  still CHANGING "),
            Some(DurationBand::StillChanging)
        );
        assert_eq!(
            DurationBand::from_label("Since birth/puberty"),
            Some(DurationBand::SinceBirthOrPuberty)
        );
        assert_eq!(DurationBand::from_label("forever"), None);
    }

    #[test]
    fn test_label_roundtrip() {
        for band in DurationBand::ALL {
            assert_eq!(DurationBand::from_label(band.label()), Some(band));
        }
    }

    #[test]
    fn test_at_least() {
        assert!(DurationBand::SixToTwelveMonths.at_least(DurationBand::ThreeToSixMonths));
        assert!(DurationBand::ThreeToSixMonths.at_least(DurationBand::ThreeToSixMonths));
        assert!(!DurationBand::OneToThreeMonths.at_least(DurationBand::ThreeToSixMonths));
        assert!(DurationBand::OneToTwoYears.at_least(DurationBand::MoreThanTwelveMonths));
    }
}
