//! Restwise - On-device prediction engine for bedtime recommendations
//!
//! Restwise turns three raw inputs (desired wake-up time, desired sleep
//! amount, daily coffee intake) into a recommended bedtime through a
//! deterministic pipeline: feature encoding → regression scoring → time
//! derivation, re-run synchronously on every input change.
//!
//! ## Modules
//!
//! - **encoder**: Normalize raw inputs into the model's feature vector
//! - **model**: Scoring seam over the trained regression artifact
//! - **calculator**: Derive a bedtime from one input snapshot
//! - **controller**: Recompute-on-change orchestration and publication

pub mod calculator;
pub mod controller;
pub mod encoder;
pub mod error;
pub mod model;
pub mod types;

pub use calculator::BedtimeCalculator;
pub use controller::{Freshness, InputChange, RecomputeController};
pub use encoder::FeatureEncoder;
pub use error::EngineError;
pub use model::{
    load_linear_model, LinearModelParams, LinearSleepModel, SleepModel, UnavailableModel,
};
pub use types::{
    Bedtime, CoffeeIntake, FeatureVector, InputSnapshot, PredictedSleep, Recommendation,
    SleepAmount, WakeTime,
};

/// Engine version reported in diagnostics
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name reported in diagnostics
pub const ENGINE_NAME: &str = "restwise";
