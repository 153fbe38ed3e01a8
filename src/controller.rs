//! Recompute orchestration
//!
//! This module owns the reactive contract of the engine: any input change
//! marks the current recommendation stale and triggers a synchronous run of
//! the calculation pipeline, after which the fresh result is published.

use crate::calculator::BedtimeCalculator;
use crate::error::EngineError;
use crate::types::{CoffeeIntake, InputSnapshot, Recommendation, SleepAmount, WakeTime};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Whether the published recommendation matches the current inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Inputs changed since the last recompute (or none has run yet)
    Stale,
    /// The published recommendation reflects the current inputs
    Fresh,
}

/// A single discrete change to one of the three inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    WakeTime(WakeTime),
    SleepAmount(SleepAmount),
    CoffeeIntake(CoffeeIntake),
}

/// Controller that re-runs the pipeline whenever an input changes.
///
/// Each recompute is a blocking call on the caller's thread; there is no
/// background queue and no coalescing. Controllers share no mutable state, so
/// independent sessions can each own one and run in parallel against the same
/// read-only model artifact.
pub struct RecomputeController {
    calculator: BedtimeCalculator,
    inputs: InputSnapshot,
    state: Freshness,
    published: Recommendation,
    last_error: Option<EngineError>,
    last_computed_at: Option<DateTime<Utc>>,
    session_id: String,
}

impl RecomputeController {
    /// Create a controller with the default input snapshot
    /// (07:00 wake, 8 h sleep, 1 cup).
    pub fn new(calculator: BedtimeCalculator) -> Self {
        Self::with_inputs(calculator, InputSnapshot::default())
    }

    /// Create a controller seeded with a specific input snapshot.
    pub fn with_inputs(calculator: BedtimeCalculator, inputs: InputSnapshot) -> Self {
        Self {
            calculator,
            inputs,
            state: Freshness::Stale,
            published: Recommendation::NotComputed,
            last_error: None,
            last_computed_at: None,
            session_id: Uuid::new_v4().to_string(),
        }
    }

    /// Run the eager first computation, so a recommendation is available
    /// before any user interaction. Call once on controller start.
    pub fn start(&mut self) -> &Recommendation {
        self.recompute()
    }

    /// Record one input change and mark the recommendation stale, without
    /// recomputing.
    ///
    /// Building block for callers that batch rapid successive changes (e.g.
    /// drag events): apply each change as it arrives and call [`recompute`]
    /// once at the end. The snapshot always holds the latest value, so the
    /// last change is the one reflected in the next published result.
    ///
    /// A change to an identical value is not a change event; the controller
    /// stays in its current state.
    ///
    /// [`recompute`]: RecomputeController::recompute
    pub fn apply(&mut self, change: InputChange) {
        let changed = match change {
            InputChange::WakeTime(wake_time) => {
                let changed = self.inputs.wake_time != wake_time;
                self.inputs.wake_time = wake_time;
                changed
            }
            InputChange::SleepAmount(sleep_amount) => {
                let changed = self.inputs.sleep_amount != sleep_amount;
                self.inputs.sleep_amount = sleep_amount;
                changed
            }
            InputChange::CoffeeIntake(coffee_intake) => {
                let changed = self.inputs.coffee_intake != coffee_intake;
                self.inputs.coffee_intake = coffee_intake;
                changed
            }
        };
        if changed {
            self.state = Freshness::Stale;
        }
    }

    /// Apply one input change and immediately recompute: exactly one
    /// synchronous pipeline run per discrete change.
    pub fn update(&mut self, change: InputChange) -> &Recommendation {
        self.apply(change);
        if self.state == Freshness::Stale {
            self.recompute();
        }
        &self.published
    }

    /// Run the pipeline against the current snapshot and publish the result.
    ///
    /// Always leaves the controller `Fresh`: a model failure publishes an
    /// explicit [`Recommendation::Unavailable`], never a stale value.
    pub fn recompute(&mut self) -> &Recommendation {
        self.state = Freshness::Stale;
        match self.calculator.try_calculate(&self.inputs) {
            Ok(bedtime) => {
                self.published = Recommendation::Ready(bedtime);
                self.last_error = None;
            }
            Err(e) => {
                self.published = Recommendation::Unavailable;
                self.last_error = Some(e);
            }
        }
        self.last_computed_at = Some(Utc::now());
        self.state = Freshness::Fresh;
        &self.published
    }

    pub fn state(&self) -> Freshness {
        self.state
    }

    pub fn inputs(&self) -> &InputSnapshot {
        &self.inputs
    }

    /// The last published recommendation
    pub fn recommendation(&self) -> &Recommendation {
        &self.published
    }

    /// The error behind the last `Unavailable` publication, kept for
    /// diagnostics only; it never changes the published shape.
    pub fn last_error(&self) -> Option<&EngineError> {
        self.last_error.as_ref()
    }

    /// When the last recompute finished, if any has run
    pub fn last_computed_at(&self) -> Option<DateTime<Utc>> {
        self.last_computed_at
    }

    /// Unique id for this controller session, for diagnostics
    pub fn session_id(&self) -> &str {
        &self.session_id
    }
}
