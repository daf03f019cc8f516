//! Configuration types for the classifier.

use ptnm::{AgeBand, DurationBand};

/// Configuration for the classifier.
///
/// The default reproduces the published scheme.
///
/// # Example
///
/// ```rust
/// use ptnm::{AgeBand, DurationBand};
/// use ptnm_classifier::{ClassifierConfig, StabilityThresholds};
///
/// let config = ClassifierConfig::builder()
///     .with_thresholds(StabilityThresholds::default())
///     .with_peripubertal_age_bands([AgeBand::From18To30, AgeBand::From31To40])
///     .build();
///
/// assert_eq!(config.thresholds.classical_stable, DurationBand::ThreeToSixMonths);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierConfig {
    /// Duration thresholds used by the P and M axes.
    pub thresholds: StabilityThresholds,
    /// Age bands in which lifelong curvature reported "since birth/puberty"
    /// is read as maturational rather than congenital.
    pub peripubertal_age_bands: Vec<AgeBand>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thresholds: StabilityThresholds::default(),
            peripubertal_age_bands: vec![AgeBand::From18To30],
        }
    }
}

impl ClassifierConfig {
    /// Creates a new builder for ClassifierConfig.
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Returns true if `age_band` is consistent with peripubertal onset.
    pub fn is_peripubertal(&self, age_band: AgeBand) -> bool {
        self.peripubertal_age_bands.contains(&age_band)
    }
}

/// Builder for ClassifierConfig.
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfigBuilder {
    thresholds: Option<StabilityThresholds>,
    peripubertal_age_bands: Option<Vec<AgeBand>>,
}

impl ClassifierConfigBuilder {
    /// Sets the duration thresholds.
    pub fn with_thresholds(mut self, thresholds: StabilityThresholds) -> Self {
        self.thresholds = Some(thresholds);
        self
    }

    /// Sets the age bands treated as consistent with peripubertal onset.
    pub fn with_peripubertal_age_bands(
        mut self,
        bands: impl IntoIterator<Item = AgeBand>,
    ) -> Self {
        self.peripubertal_age_bands = Some(bands.into_iter().collect());
        self
    }

    /// Builds the ClassifierConfig.
    pub fn build(self) -> ClassifierConfig {
        let defaults = ClassifierConfig::default();
        ClassifierConfig {
            thresholds: self.thresholds.unwrap_or(defaults.thresholds),
            peripubertal_age_bands: self
                .peripubertal_age_bands
                .unwrap_or(defaults.peripubertal_age_bands),
        }
    }
}

/// Duration thresholds of the scheme.
///
/// Each threshold is the lowest band that satisfies it, so "at least
/// 3 months" is [`DurationBand::ThreeToSixMonths`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StabilityThresholds {
    /// Minimum time since onset for subjective worsening to count as
    /// progressive.
    pub progressive_min_history: DurationBand,
    /// Minimum prior stable period before renewed worsening counts as a
    /// relapse.
    pub relapse_min_stability: DurationBand,
    /// Stability needed for classical PD to be in the stable phase.
    pub classical_stable: DurationBand,
    /// Time since onset that lets nonclassical PD use the shorter stability
    /// window.
    pub nonclassical_min_history: DurationBand,
    /// Stability needed by nonclassical PD once past the history threshold.
    pub nonclassical_history_stable: DurationBand,
    /// Stability that puts nonclassical PD in the stable phase regardless of
    /// history.
    pub nonclassical_stable: DurationBand,
}

impl Default for StabilityThresholds {
    fn default() -> Self {
        Self {
            progressive_min_history: DurationBand::ThreeToSixMonths,
            relapse_min_stability: DurationBand::SixToTwelveMonths,
            classical_stable: DurationBand::ThreeToSixMonths,
            nonclassical_min_history: DurationBand::MoreThanTwelveMonths,
            nonclassical_history_stable: DurationBand::ThreeToSixMonths,
            nonclassical_stable: DurationBand::SixToTwelveMonths,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classifier_config_default() {
        let config = ClassifierConfig::default();
        assert_eq!(config.thresholds, StabilityThresholds::default());
        assert_eq!(config.peripubertal_age_bands, vec![AgeBand::From18To30]);
    }

    #[test]
    fn test_stability_thresholds_default() {
        let t = StabilityThresholds::default();
        assert_eq!(t.progressive_min_history.lower_bound_months(), Some(3));
        assert_eq!(t.relapse_min_stability.lower_bound_months(), Some(6));
        assert_eq!(t.classical_stable.lower_bound_months(), Some(3));
        assert_eq!(t.nonclassical_min_history.lower_bound_months(), Some(12));
        assert_eq!(t.nonclassical_history_stable.lower_bound_months(), Some(3));
        assert_eq!(t.nonclassical_stable.lower_bound_months(), Some(6));
    }

    #[test]
    fn test_builder_overrides() {
        let thresholds = StabilityThresholds {
            classical_stable: DurationBand::SixToTwelveMonths,
            ..StabilityThresholds::default()
        };
        let config = ClassifierConfig::builder()
            .with_thresholds(thresholds)
            .with_peripubertal_age_bands(Vec::new())
            .build();

        assert_eq!(config.thresholds.classical_stable, DurationBand::SixToTwelveMonths);
        assert!(config.peripubertal_age_bands.is_empty());
        assert!(!config.is_peripubertal(AgeBand::From18To30));
    }

    #[test]
    fn test_builder_keeps_defaults() {
        let config = ClassifierConfig::builder().build();
        assert_eq!(config, ClassifierConfig::default());
        assert!(config.is_peripubertal(AgeBand::From18To30));
        assert!(!config.is_peripubertal(AgeBand::From31To40));
    }
}
