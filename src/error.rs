//! Error types for Restwise

use thiserror::Error;

/// Errors that can occur in the recommendation engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// The trained model could not be initialized. Permanent for the loaded
    /// instance; every prediction attempt surfaces the same failure.
    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    /// Scoring failed for the given feature vector. Recoverable per-call.
    #[error("Prediction failed: {0}")]
    PredictionError(String),

    #[error("Sleep amount out of range [4.0, 12.0]: {0}")]
    SleepAmountOutOfRange(f64),

    #[error("Sleep amount not aligned to the 0.25 hour step: {0}")]
    SleepAmountNotAligned(f64),

    #[error("Coffee intake out of range [1, 20]: {0}")]
    CoffeeIntakeOutOfRange(u8),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl EngineError {
    /// True for model-side failures, the kinds a recompute converts into an
    /// absent recommendation.
    pub fn is_model_failure(&self) -> bool {
        matches!(
            self,
            EngineError::ModelUnavailable(_) | EngineError::PredictionError(_)
        )
    }
}
