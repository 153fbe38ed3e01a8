//! Sleep prediction models
//!
//! This module defines the scoring seam between the engine and the trained
//! regression artifact, plus the two concrete implementations the engine
//! ships: an embedded linear evaluator and a permanently-failed placeholder
//! used when loading the artifact failed.

use crate::error::EngineError;
use crate::types::{FeatureVector, PredictedSleep};
use serde::{Deserialize, Serialize};

/// Capability to score a feature vector against a trained regression.
///
/// One scoring attempt per call; implementations never retry internally, and
/// failures propagate to the caller as-is.
pub trait SleepModel {
    /// Model identifier for diagnostics
    fn name(&self) -> &str;

    /// Predict achievable sleep duration for the given features.
    ///
    /// Fails with [`EngineError::ModelUnavailable`] when no usable model is
    /// loaded, and [`EngineError::PredictionError`] when scoring itself fails.
    fn predict(&self, features: &FeatureVector) -> Result<PredictedSleep, EngineError>;
}

/// Trained coefficients for the linear sleep model.
///
/// Prediction formula, in seconds of achievable sleep:
/// `intercept + wake_weight * wake_seconds + sleep_weight * desired_sleep_hours
///  + coffee_weight * coffee_cups`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModelParams {
    pub intercept: f64,
    pub wake_weight: f64,
    pub sleep_weight: f64,
    pub coffee_weight: f64,
}

impl Default for LinearModelParams {
    /// Coefficients fit offline against the reference training set: a little
    /// over the desired amount for early risers, less per cup of coffee.
    fn default() -> Self {
        Self {
            intercept: 2940.0,
            wake_weight: 0.04,
            sleep_weight: 3312.0,
            coffee_weight: -270.0,
        }
    }
}

impl LinearModelParams {
    fn validate(&self) -> Result<(), EngineError> {
        let coefficients = [
            self.intercept,
            self.wake_weight,
            self.sleep_weight,
            self.coffee_weight,
        ];
        if coefficients.iter().any(|c| !c.is_finite()) {
            return Err(EngineError::ModelUnavailable(format!(
                "non-finite coefficient in model parameters: {self:?}"
            )));
        }
        Ok(())
    }
}

/// Embedded linear-regression evaluator over the three input features.
#[derive(Debug, Clone)]
pub struct LinearSleepModel {
    params: LinearModelParams,
}

impl LinearSleepModel {
    /// Create a model from trained coefficients, rejecting unusable ones.
    pub fn new(params: LinearModelParams) -> Result<Self, EngineError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Load trained coefficients from a JSON artifact.
    ///
    /// Malformed JSON or non-finite coefficients surface as
    /// [`EngineError::ModelUnavailable`].
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let params: LinearModelParams = serde_json::from_str(json)
            .map_err(|e| EngineError::ModelUnavailable(e.to_string()))?;
        Self::new(params)
    }

    /// Serialize the coefficients back to JSON
    pub fn to_json(&self) -> Result<String, EngineError> {
        serde_json::to_string(&self.params).map_err(EngineError::JsonError)
    }

    pub fn params(&self) -> &LinearModelParams {
        &self.params
    }
}

impl Default for LinearSleepModel {
    fn default() -> Self {
        Self {
            params: LinearModelParams::default(),
        }
    }
}

impl SleepModel for LinearSleepModel {
    fn name(&self) -> &str {
        "linear-v1"
    }

    fn predict(&self, features: &FeatureVector) -> Result<PredictedSleep, EngineError> {
        let inputs = [
            features.wake_seconds,
            features.desired_sleep_hours,
            features.coffee_cups,
        ];
        if inputs.iter().any(|v| !v.is_finite()) {
            return Err(EngineError::PredictionError(format!(
                "non-finite feature value: {features:?}"
            )));
        }

        let seconds = self.params.intercept
            + self.params.wake_weight * features.wake_seconds
            + self.params.sleep_weight * features.desired_sleep_hours
            + self.params.coffee_weight * features.coffee_cups;

        PredictedSleep::from_seconds(seconds)
    }
}

/// Placeholder for a model that failed to load.
///
/// Every prediction attempt surfaces the original load failure; the failure is
/// permanent for this instance and is never retried.
#[derive(Debug, Clone)]
pub struct UnavailableModel {
    reason: String,
}

impl UnavailableModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SleepModel for UnavailableModel {
    fn name(&self) -> &str {
        "unavailable"
    }

    fn predict(&self, _features: &FeatureVector) -> Result<PredictedSleep, EngineError> {
        Err(EngineError::ModelUnavailable(self.reason.clone()))
    }
}

/// Load a linear model artifact once, for reuse across recomputes.
///
/// On load failure the returned model is an [`UnavailableModel`] carrying the
/// failure, so every subsequent recompute reports the same absence instead of
/// reattempting the load.
pub fn load_linear_model(json: &str) -> Box<dyn SleepModel> {
    match LinearSleepModel::from_json(json) {
        Ok(model) => Box::new(model),
        Err(e) => Box::new(UnavailableModel::new(e.to_string())),
    }
}
