//! One-time schedule initialization.
//!
//! The staking service creates its schedule exactly once, at startup; the
//! builder is consumed by [`ScheduleBuilder::build`] so the resulting
//! [`ScheduleEngine`] cannot be re-initialized or re-started.

use minstake_core::constants::{
    DEFAULT_FLOOR_MINIMUM_STAKE, DEFAULT_INITIAL_MINIMUM_STAKE, DEFAULT_SCHEDULE_DURATION_SECS,
    DEFAULT_SCHEDULE_STEPS,
};
use minstake_core::error::ScheduleError;
use minstake_core::traits::Clock;
use minstake_core::types::{Amount, Timestamp};
use tracing::debug;

use crate::engine::ScheduleEngine;
use crate::params::ScheduleParameters;

/// Builder for [`ScheduleEngine`].
///
/// Starts from the default parameters; the schedule start has no default
/// and must be supplied with [`schedule_start`](Self::schedule_start) or
/// [`start_now`](Self::start_now).
///
/// # Examples
///
/// ```
/// use minstake_core::constants::tokens;
/// use minstake_schedule::ScheduleBuilder;
///
/// let engine = ScheduleBuilder::new()
///     .schedule_start(1_600_000_000)
///     .build()
///     .unwrap();
/// assert_eq!(engine.current_minimum_stake(1_600_000_000), tokens(100_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ScheduleBuilder {
    initial_amount: Amount,
    floor_amount: Amount,
    total_duration: u64,
    step_count: u64,
    schedule_start: Option<Timestamp>,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_MINIMUM_STAKE,
            floor_amount: DEFAULT_FLOOR_MINIMUM_STAKE,
            total_duration: DEFAULT_SCHEDULE_DURATION_SECS,
            step_count: DEFAULT_SCHEDULE_STEPS,
            schedule_start: None,
        }
    }
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_amount(mut self, amount: Amount) -> Self {
        self.initial_amount = amount;
        self
    }

    pub fn floor_amount(mut self, amount: Amount) -> Self {
        self.floor_amount = amount;
        self
    }

    /// Total schedule length in seconds.
    pub fn total_duration(mut self, secs: u64) -> Self {
        self.total_duration = secs;
        self
    }

    pub fn step_count(mut self, steps: u64) -> Self {
        self.step_count = steps;
        self
    }

    /// Take all four decay parameters from an already validated set.
    pub fn parameters(self, parameters: ScheduleParameters) -> Self {
        self.initial_amount(parameters.initial_amount())
            .floor_amount(parameters.floor_amount())
            .total_duration(parameters.total_duration())
            .step_count(parameters.step_count())
    }

    pub fn schedule_start(mut self, start: Timestamp) -> Self {
        self.schedule_start = Some(start);
        self
    }

    /// Start the schedule at the clock's current time.
    ///
    /// Reads the clock exactly once; later clock movement does not affect
    /// the stored start.
    pub fn start_now(self, clock: &impl Clock) -> Self {
        self.schedule_start(clock.now())
    }

    /// Validate the parameters and produce the immutable engine.
    ///
    /// # Errors
    ///
    /// Any [`ScheduleError`] from [`ScheduleParameters::new`] or
    /// [`ScheduleEngine::new`], or [`ScheduleError::MissingScheduleStart`].
    pub fn build(self) -> Result<ScheduleEngine, ScheduleError> {
        let parameters = ScheduleParameters::new(
            self.initial_amount,
            self.floor_amount,
            self.total_duration,
            self.step_count,
        )?;
        let start = self.schedule_start.ok_or(ScheduleError::MissingScheduleStart)?;
        let engine = ScheduleEngine::new(parameters, start)?;

        debug!(
            schedule_start = start,
            schedule_end = engine.schedule_end(),
            initial_amount = %parameters.initial_amount(),
            floor_amount = %parameters.floor_amount(),
            step_count = parameters.step_count(),
            step_duration = engine.step_duration(),
            decrement_per_step = %engine.decrement_per_step(),
            "minimum-stake schedule initialized"
        );
        Ok(engine)
    }
}
