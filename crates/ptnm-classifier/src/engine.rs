//! PTNM classification engine.
//!
//! Each axis is evaluated independently; within an axis the first matching
//! rule wins. The engine is total: every [`PatientRecord`] yields a code.

use ptnm::{ChangeSinceOnset, Mode, NonPdComponent, PatientRecord, PdComponent, Trauma};
use tracing::debug;

use crate::config::ClassifierConfig;
use crate::rationale::{MReason, NReason, PReason, TReason};
use crate::result::{AxisDecision, Classification};

/// Main classification engine.
///
/// Holds only configuration, so a single instance can be shared freely
/// across threads.
///
/// # Example
///
/// ```rust
/// use ptnm::{Field, RawAttributes};
/// use ptnm_classifier::{validate, Classifier};
///
/// let raw = RawAttributes::new()
///     .with(Field::Age, "31-40")
///     .with(Field::SymptomDuration, "6-12 months")
///     .with(Field::DiseaseStability, "6-12 months")
///     .with(Field::ChangeOverTime, "remained stable")
///     .with(Field::Pain, "no")
///     .with(Field::CurvatureDegree, "30-45")
///     .with(Field::CurvatureDirection, "Dorsal")
///     .with(Field::Trauma, "no")
///     .with(Field::Lifelong, "no");
///
/// let record = validate(&raw).unwrap();
/// let classifier = Classifier::new();
/// assert_eq!(classifier.classify(&record).code.to_string(), "PClT0N0M0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Creates a classifier using the published thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a classifier with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ptnm::AgeBand;
    /// use ptnm_classifier::{Classifier, ClassifierConfig};
    ///
    /// let config = ClassifierConfig::builder()
    ///     .with_peripubertal_age_bands([AgeBand::From18To30, AgeBand::From31To40])
    ///     .build();
    /// let classifier = Classifier::with_config(config);
    /// ```
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Returns a reference to the classifier configuration.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a validated record.
    pub fn classify(&self, record: &PatientRecord) -> Classification {
        let p = self.pd_component(record);
        let t = self.trauma(record);
        let n = self.non_pd_component(record);
        let m = self.mode(record, p.value, n.value);

        debug!(p = ?p.reason, t = ?t.reason, n = ?n.reason, m = ?m.reason, "axis decisions");

        let classification = Classification::from_axes(p, t, n, m);
        debug!(code = %classification.code, "record classified");
        classification
    }

    /// Classifies many records, preserving input order.
    ///
    /// Runs on the rayon thread pool when the `parallel` feature is enabled.
    pub fn classify_batch(&self, records: &[PatientRecord]) -> Vec<Classification> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            records.par_iter().map(|r| self.classify(r)).collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            records.iter().map(|r| self.classify(r)).collect()
        }
    }

    // =========================================================================
    // P axis
    // =========================================================================

    /// Evaluates the P axis.
    ///
    /// Precedence: progressive, calcifying, relapsing/remitting, classical,
    /// undifferentiated.
    pub fn pd_component(&self, record: &PatientRecord) -> AxisDecision<PdComponent, PReason> {
        let thresholds = &self.config.thresholds;
        let worsened = record.change_since_onset == ChangeSinceOnset::Worsened;

        if worsened
            && record
                .symptom_duration
                .at_least(thresholds.progressive_min_history)
        {
            return AxisDecision::new(PdComponent::Progressive, PReason::WorseningAfterOnset);
        }

        if record.calcification.is_some_and(|g| g.is_significant()) {
            return AxisDecision::new(PdComponent::Calcifying, PReason::SignificantCalcification);
        }

        let long_stable_period = record
            .stability_duration
            .is_some_and(|s| s.at_least(thresholds.relapse_min_stability));
        if long_stable_period && worsened {
            return AxisDecision::new(
                PdComponent::RelapsingRemitting,
                PReason::RelapseAfterStablePeriod,
            );
        }

        if !record.lifelong_onset {
            return AxisDecision::new(PdComponent::Classical, PReason::ClassicalByExclusion);
        }

        AxisDecision::new(PdComponent::Undifferentiated, PReason::LifelongWithoutSubtype)
    }

    // =========================================================================
    // T axis
    // =========================================================================

    /// Evaluates the T axis.
    pub fn trauma(&self, record: &PatientRecord) -> AxisDecision<Trauma, TReason> {
        if record.trauma_recalled {
            AxisDecision::new(Trauma::Present, TReason::TraumaRecalled)
        } else {
            AxisDecision::new(Trauma::Absent, TReason::NoTraumaRecalled)
        }
    }

    // =========================================================================
    // N axis
    // =========================================================================

    /// Evaluates the N axis.
    ///
    /// Lifelong curvature reported as "since birth/puberty" in a configured
    /// peripubertal age band is maturational; any other lifelong curvature
    /// is congenital.
    pub fn non_pd_component(
        &self,
        record: &PatientRecord,
    ) -> AxisDecision<NonPdComponent, NReason> {
        if !record.lifelong_onset {
            return AxisDecision::new(NonPdComponent::None, NReason::AcquiredOnset);
        }

        let since_birth_or_puberty =
            record.symptom_duration == ptnm::DurationBand::SinceBirthOrPuberty;
        if since_birth_or_puberty && self.config.is_peripubertal(record.age_band) {
            AxisDecision::new(NonPdComponent::Maturational, NReason::PeripubertalOnset)
        } else {
            AxisDecision::new(NonPdComponent::Congenital, NReason::CongenitalOnset)
        }
    }

    // =========================================================================
    // M axis
    // =========================================================================

    /// Evaluates the M axis for already-decided P and N sub-codes.
    ///
    /// Worsening is active before any stability threshold is checked, so a
    /// relapsing/remitting case is never in the stable phase.
    pub fn mode(
        &self,
        record: &PatientRecord,
        p: PdComponent,
        n: NonPdComponent,
    ) -> AxisDecision<Mode, MReason> {
        let thresholds = &self.config.thresholds;

        if p == PdComponent::None {
            return AxisDecision::new(Mode::NotApplicable, MReason::NoPdComponent);
        }
        if p == PdComponent::Undifferentiated && n.is_lifelong() {
            return AxisDecision::new(Mode::NotApplicable, MReason::NonPdOnly);
        }

        if record.change_since_onset == ChangeSinceOnset::Worsened {
            return AxisDecision::new(Mode::Active, MReason::Worsening);
        }

        let Some(stability) = record.stability_duration else {
            return AxisDecision::new(Mode::Active, MReason::StabilityNotReported);
        };

        if p == PdComponent::Classical {
            if stability.at_least(thresholds.classical_stable) {
                return AxisDecision::new(Mode::Stable, MReason::ClassicalStable);
            }
        } else {
            let long_history = record
                .symptom_duration
                .at_least(thresholds.nonclassical_min_history);
            if long_history && stability.at_least(thresholds.nonclassical_history_stable) {
                return AxisDecision::new(Mode::Stable, MReason::NonclassicalStableAfterHistory);
            }
            if stability.at_least(thresholds.nonclassical_stable) {
                return AxisDecision::new(Mode::Stable, MReason::NonclassicalStableProlonged);
            }
        }

        if stability.is_still_changing() {
            AxisDecision::new(Mode::Active, MReason::StillChanging)
        } else {
            AxisDecision::new(Mode::Active, MReason::BelowStableThreshold)
        }
    }
}

/// Classifies a validated record with the published thresholds.
pub fn classify(record: &PatientRecord) -> Classification {
    Classifier::new().classify(record)
}
