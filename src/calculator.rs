//! Bedtime calculation
//!
//! This module orchestrates one pass through the pipeline: encode the input
//! snapshot, score it against the model, and subtract the predicted sleep
//! duration from the wake time.

use crate::encoder::FeatureEncoder;
use crate::error::EngineError;
use crate::model::SleepModel;
use crate::types::{Bedtime, InputSnapshot};

/// Calculator combining the feature encoder with a loaded sleep model.
///
/// Pure with respect to its inputs: under a fixed model, identical snapshots
/// always yield identical results.
pub struct BedtimeCalculator {
    model: Box<dyn SleepModel>,
}

impl BedtimeCalculator {
    /// Create a calculator around an already-loaded model.
    ///
    /// The model is the one expensive collaborator; load it once and reuse the
    /// calculator across recomputes rather than reloading per call.
    pub fn new(model: Box<dyn SleepModel>) -> Self {
        Self { model }
    }

    /// Model identifier for diagnostics
    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Compute a recommended bedtime, or `None` when the model fails.
    ///
    /// Model errors of either kind stop here; the caller only ever sees a
    /// value or an absence, never a stale or default bedtime.
    pub fn calculate(&self, snapshot: &InputSnapshot) -> Option<Bedtime> {
        self.try_calculate(snapshot).ok()
    }

    /// Compute a recommended bedtime, surfacing the model error on failure.
    ///
    /// For callers that keep the error kind for diagnostics. The published
    /// result shape remains value-or-absent either way.
    pub fn try_calculate(&self, snapshot: &InputSnapshot) -> Result<Bedtime, EngineError> {
        let features = FeatureEncoder::encode(snapshot);
        let predicted = self.model.predict(&features)?;

        // NaiveTime subtraction wraps around midnight, landing the bedtime on
        // the previous evening whenever the prediction exceeds the wake offset.
        let time = snapshot.wake_time.time() - predicted.duration();
        let previous_evening = predicted.seconds() > features.wake_seconds;

        Ok(Bedtime {
            time,
            previous_evening,
            predicted_sleep: predicted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LinearModelParams, LinearSleepModel, UnavailableModel};
    use crate::types::{CoffeeIntake, FeatureVector, PredictedSleep, SleepAmount, WakeTime};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    /// Model that predicts the same duration for every feature vector
    struct FixedModel {
        seconds: f64,
    }

    impl SleepModel for FixedModel {
        fn name(&self) -> &str {
            "fixed"
        }

        fn predict(&self, _features: &FeatureVector) -> Result<PredictedSleep, EngineError> {
            PredictedSleep::from_seconds(self.seconds)
        }
    }

    fn snapshot(hour: u32, minute: u32, hours: f64, cups: u8) -> InputSnapshot {
        InputSnapshot {
            wake_time: WakeTime::from_hm(hour, minute),
            sleep_amount: SleepAmount::new(hours).unwrap(),
            coffee_intake: CoffeeIntake::new(cups).unwrap(),
        }
    }

    #[test]
    fn seven_am_with_seven_and_a_half_hours_lands_on_half_past_eleven() {
        // 7.5 h predicted sleep before a 07:00 wake-up
        let calculator = BedtimeCalculator::new(Box::new(FixedModel { seconds: 27000.0 }));

        let bedtime = calculator.calculate(&snapshot(7, 0, 8.0, 1)).unwrap();

        assert_eq!(bedtime.time, NaiveTime::from_hms_opt(23, 30, 0).unwrap());
        assert!(bedtime.previous_evening);
        assert_eq!(bedtime.predicted_sleep.hours(), 7.5);
    }

    #[test]
    fn short_prediction_stays_on_the_wake_day() {
        // 2 h predicted sleep before a 07:00 wake-up is a same-day 05:00
        let calculator = BedtimeCalculator::new(Box::new(FixedModel { seconds: 7200.0 }));

        let bedtime = calculator.calculate(&snapshot(7, 0, 4.0, 1)).unwrap();

        assert_eq!(bedtime.time, NaiveTime::from_hms_opt(5, 0, 0).unwrap());
        assert!(!bedtime.previous_evening);
    }

    #[test]
    fn calculation_is_deterministic_under_a_fixed_model() {
        let calculator = BedtimeCalculator::new(Box::new(LinearSleepModel::default()));
        let input = snapshot(6, 45, 7.25, 4);

        assert_eq!(calculator.calculate(&input), calculator.calculate(&input));
    }

    #[test]
    fn unavailable_model_yields_absence_for_every_input() {
        let calculator =
            BedtimeCalculator::new(Box::new(UnavailableModel::new("artifact missing")));

        assert_eq!(calculator.calculate(&snapshot(7, 0, 8.0, 1)), None);
        assert_eq!(calculator.calculate(&snapshot(6, 30, 4.0, 20)), None);
        assert_eq!(calculator.calculate(&snapshot(10, 15, 12.0, 3)), None);
    }

    #[test]
    fn prediction_failure_yields_absence_not_a_default() {
        let negative = LinearSleepModel::new(LinearModelParams {
            intercept: -100000.0,
            wake_weight: 0.0,
            sleep_weight: 0.0,
            coffee_weight: 0.0,
        })
        .unwrap();
        let calculator = BedtimeCalculator::new(Box::new(negative));

        assert_eq!(calculator.calculate(&snapshot(7, 0, 8.0, 1)), None);
    }

    #[test]
    fn try_calculate_retains_the_error_kind() {
        let calculator =
            BedtimeCalculator::new(Box::new(UnavailableModel::new("artifact missing")));

        let result = calculator.try_calculate(&snapshot(7, 0, 8.0, 1));

        assert!(matches!(result, Err(EngineError::ModelUnavailable(_))));
    }
}
