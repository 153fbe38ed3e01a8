//! Feature encoding
//!
//! This module converts an input snapshot into the numeric feature vector the
//! trained model expects:
//! - Wake time becomes seconds after midnight (hour and minute only)
//! - Desired sleep passes through in hours
//! - Coffee intake becomes a float cup count

use crate::types::{FeatureVector, InputSnapshot};

/// Encoder for turning raw inputs into model features
pub struct FeatureEncoder;

impl FeatureEncoder {
    /// Encode an input snapshot into a feature vector.
    ///
    /// Total over the constrained input domain: encoding never fails, and the
    /// same snapshot always yields the same vector. The calendar date behind
    /// the wake time is ignored; only hour and minute contribute.
    pub fn encode(snapshot: &InputSnapshot) -> FeatureVector {
        FeatureVector {
            wake_seconds: f64::from(snapshot.wake_time.seconds_after_midnight()),
            desired_sleep_hours: snapshot.sleep_amount.hours(),
            coffee_cups: f64::from(snapshot.coffee_intake.cups()),
        }
    }
}
