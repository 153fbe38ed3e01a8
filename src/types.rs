//! Core types for the Restwise pipeline
//!
//! This module defines the value types that flow through each stage of the
//! pipeline: raw inputs, the input snapshot, the feature vector, the model
//! prediction, and the published recommendation.

use crate::error::EngineError;
use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Desired wake-up instant.
///
/// Only the hour and minute components are significant; the calendar date is
/// irrelevant to the engine and never consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeTime(NaiveTime);

impl WakeTime {
    /// Create a wake time from a time-of-day value. Seconds are discarded.
    pub fn new(time: NaiveTime) -> Self {
        Self(time.with_second(0).unwrap_or(time))
    }

    /// Create a wake time from raw hour/minute components.
    ///
    /// An out-of-range component is substituted with 0 rather than rejected,
    /// so a malformed input still yields a usable (if wrong) wake time.
    pub fn from_hm(hour: u32, minute: u32) -> Self {
        let hour = if hour < 24 { hour } else { 0 };
        let minute = if minute < 60 { minute } else { 0 };
        // In-range components always form a valid time
        Self(NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default())
    }

    /// Hour component (0-23)
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Minute component (0-59)
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds since midnight, derived purely from hour and minute
    pub fn seconds_after_midnight(&self) -> u32 {
        self.hour() * 3600 + self.minute() * 60
    }

    /// The underlying time-of-day value
    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl Default for WakeTime {
    /// 07:00, the reference default wake time
    fn default() -> Self {
        Self::from_hm(7, 0)
    }
}

/// Desired total sleep, in hours.
///
/// Valid values lie in [4.0, 12.0] on the quarter-hour step the input stepper
/// produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN_HOURS: f64 = 4.0;
    pub const MAX_HOURS: f64 = 12.0;
    pub const STEP_HOURS: f64 = 0.25;

    /// Validate a desired sleep amount.
    ///
    /// The bounds are inclusive: exactly 4.0 and exactly 12.0 are accepted
    /// without clamping. Values off the 0.25 h step are rejected.
    pub fn new(hours: f64) -> Result<Self, EngineError> {
        if !hours.is_finite() || !(Self::MIN_HOURS..=Self::MAX_HOURS).contains(&hours) {
            return Err(EngineError::SleepAmountOutOfRange(hours));
        }
        let steps = hours / Self::STEP_HOURS;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(EngineError::SleepAmountNotAligned(hours));
        }
        Ok(Self(hours))
    }

    pub fn hours(&self) -> f64 {
        self.0
    }
}

impl Default for SleepAmount {
    /// 8 hours, the reference default
    fn default() -> Self {
        Self(8.0)
    }
}

/// Daily coffee intake, in cups. Valid values lie in [1, 20].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeIntake(u8);

impl CoffeeIntake {
    pub const MIN_CUPS: u8 = 1;
    pub const MAX_CUPS: u8 = 20;

    /// Validate a daily cup count. Both bounds are inclusive.
    pub fn new(cups: u8) -> Result<Self, EngineError> {
        if !(Self::MIN_CUPS..=Self::MAX_CUPS).contains(&cups) {
            return Err(EngineError::CoffeeIntakeOutOfRange(cups));
        }
        Ok(Self(cups))
    }

    pub fn cups(&self) -> u8 {
        self.0
    }
}

impl Default for CoffeeIntake {
    /// One cup, the reference default
    fn default() -> Self {
        Self(1)
    }
}

/// Immutable snapshot of the three raw inputs.
///
/// Each recompute consumes one snapshot; nothing in the pipeline mutates it
/// or shares it across computations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub wake_time: WakeTime,
    pub sleep_amount: SleepAmount,
    pub coffee_intake: CoffeeIntake,
}

/// Numeric feature vector the trained model scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Wake time as seconds after midnight
    pub wake_seconds: f64,
    /// Desired sleep in hours, passed through unchanged
    pub desired_sleep_hours: f64,
    /// Coffee cup count in the model's numeric representation
    pub coffee_cups: f64,
}

/// Sleep duration predicted by the model, in seconds. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct PredictedSleep {
    seconds: f64,
}

impl PredictedSleep {
    /// Wrap a predicted duration. Rejects negative or non-finite values.
    pub fn from_seconds(seconds: f64) -> Result<Self, EngineError> {
        if !seconds.is_finite() || seconds < 0.0 {
            return Err(EngineError::PredictionError(format!(
                "predicted sleep duration is not a non-negative number: {seconds}"
            )));
        }
        Ok(Self { seconds })
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn hours(&self) -> f64 {
        self.seconds / 3600.0
    }

    /// The prediction as a chrono duration, rounded to whole milliseconds
    pub fn duration(&self) -> Duration {
        Duration::milliseconds((self.seconds * 1000.0).round() as i64)
    }
}

/// The recommended bedtime derived from one prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bedtime {
    /// Time-of-day to go to bed
    pub time: NaiveTime,
    /// True when the subtraction crossed midnight, i.e. the bedtime falls on
    /// the evening before the wake date
    pub previous_evening: bool,
    /// The prediction the bedtime was derived from
    pub predicted_sleep: PredictedSleep,
}

/// Result shape published to the presentation layer after each recompute.
///
/// `NotComputed` and `Unavailable` are distinguishable here, but both read as
/// absent through [`Recommendation::bedtime`]; the caller renders a single
/// "unavailable" signal either way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "bedtime")]
pub enum Recommendation {
    /// No recompute has run yet
    NotComputed,
    /// The last recompute ran but the model produced no prediction
    Unavailable,
    /// The last recompute produced a bedtime for the current inputs
    Ready(Bedtime),
}

impl Recommendation {
    /// The recommended bedtime, if one is available
    pub fn bedtime(&self) -> Option<&Bedtime> {
        match self {
            Recommendation::Ready(bedtime) => Some(bedtime),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Recommendation::Ready(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wake_time_default_is_seven() {
        let wake = WakeTime::default();
        assert_eq!(wake.hour(), 7);
        assert_eq!(wake.minute(), 0);
        assert_eq!(wake.seconds_after_midnight(), 25200);
    }

    #[test]
    fn wake_time_substitutes_zero_for_bad_components() {
        let wake = WakeTime::from_hm(27, 30);
        assert_eq!(wake.hour(), 0);
        assert_eq!(wake.minute(), 30);

        let wake = WakeTime::from_hm(7, 75);
        assert_eq!(wake.hour(), 7);
        assert_eq!(wake.minute(), 0);
    }

    #[test]
    fn wake_time_drops_seconds() {
        let wake = WakeTime::new(NaiveTime::from_hms_opt(6, 45, 59).unwrap());
        assert_eq!(wake.seconds_after_midnight(), 6 * 3600 + 45 * 60);
    }

    #[test]
    fn sleep_amount_accepts_bounds_exactly() {
        assert_eq!(SleepAmount::new(4.0).unwrap().hours(), 4.0);
        assert_eq!(SleepAmount::new(12.0).unwrap().hours(), 12.0);
        assert_eq!(SleepAmount::new(7.75).unwrap().hours(), 7.75);
    }

    #[test]
    fn sleep_amount_rejects_out_of_range() {
        assert!(SleepAmount::new(3.75).is_err());
        assert!(SleepAmount::new(12.25).is_err());
        assert!(SleepAmount::new(f64::NAN).is_err());
    }

    #[test]
    fn sleep_amount_rejects_off_step_values() {
        assert!(matches!(
            SleepAmount::new(8.1),
            Err(EngineError::SleepAmountNotAligned(_))
        ));
    }

    #[test]
    fn coffee_intake_accepts_bounds_exactly() {
        assert_eq!(CoffeeIntake::new(1).unwrap().cups(), 1);
        assert_eq!(CoffeeIntake::new(20).unwrap().cups(), 20);
    }

    #[test]
    fn coffee_intake_rejects_out_of_range() {
        assert!(CoffeeIntake::new(0).is_err());
        assert!(CoffeeIntake::new(21).is_err());
    }

    #[test]
    fn predicted_sleep_rejects_negative_and_non_finite() {
        assert!(PredictedSleep::from_seconds(-1.0).is_err());
        assert!(PredictedSleep::from_seconds(f64::NAN).is_err());
        assert!(PredictedSleep::from_seconds(f64::INFINITY).is_err());
        assert_eq!(PredictedSleep::from_seconds(0.0).unwrap().seconds(), 0.0);
    }

    #[test]
    fn predicted_sleep_unit_accessors_agree() {
        let predicted = PredictedSleep::from_seconds(27000.0).unwrap();
        assert_eq!(predicted.hours(), 7.5);
        assert_eq!(predicted.duration(), Duration::milliseconds(27_000_000));
    }

    #[test]
    fn recommendation_absence_shapes() {
        assert_eq!(Recommendation::NotComputed.bedtime(), None);
        assert_eq!(Recommendation::Unavailable.bedtime(), None);
        assert!(!Recommendation::NotComputed.is_available());
        assert!(!Recommendation::Unavailable.is_available());
        assert_ne!(Recommendation::NotComputed, Recommendation::Unavailable);
    }
}
