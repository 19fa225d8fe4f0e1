//! Schedule engine implementing the [`MinimumStakeSchedule`] trait.
//!
//! Maps a query timestamp to the minimum stake in force at that instant.
//! Every query is O(1) integer arithmetic: derived values are computed once
//! at construction and the engine holds no mutable state.
//!
//! With the default parameters (100,000 → 10,000 tokens over two 365-day
//! years in 10 steps):
//! - `[start, start + 73d)`: 100,000 tokens
//! - `[start + 73d, start + 146d)`: 90,000 tokens
//! - …
//! - `[start + 365d, start + 438d)`: 50,000 tokens
//! - …
//! - `start + 657d` onward: 10,000 tokens (floor reached on the last step
//!   and held permanently from `start + 730d`)

use minstake_core::error::ScheduleError;
use minstake_core::traits::MinimumStakeSchedule;
use minstake_core::types::{Amount, Timestamp};
use serde::Serialize;
use tracing::debug;

use crate::params::ScheduleParameters;

/// One row of the schedule table: the minimum stake in force from
/// `starts_at` until the next row's `starts_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleStep {
    /// Position in the table, starting at 0 for the schedule start.
    pub index: u64,
    /// First timestamp at which `minimum_stake` applies.
    pub starts_at: Timestamp,
    /// Minimum stake in base units.
    pub minimum_stake: Amount,
}

/// The minimum-stake schedule, fixed at construction.
///
/// Built once by [`ScheduleBuilder`](crate::ScheduleBuilder) (or
/// [`ScheduleEngine::new`]); there are no setters, so the schedule start and
/// parameters cannot change for the lifetime of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEngine {
    parameters: ScheduleParameters,
    schedule_start: Timestamp,
    schedule_end: Timestamp,
    step_duration: u64,
    decrement_per_step: Amount,
}

impl ScheduleEngine {
    /// Create an engine for `parameters` starting at `schedule_start`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::ScheduleEndOverflow`] if `schedule_start + total_duration`
    /// does not fit in a [`Timestamp`].
    pub fn new(
        parameters: ScheduleParameters,
        schedule_start: Timestamp,
    ) -> Result<Self, ScheduleError> {
        let schedule_end = schedule_start
            .checked_add(parameters.total_duration())
            .ok_or(ScheduleError::ScheduleEndOverflow {
                start: schedule_start,
                duration: parameters.total_duration(),
            })?;

        Ok(Self {
            parameters,
            schedule_start,
            schedule_end,
            step_duration: parameters.step_duration(),
            decrement_per_step: parameters.decrement_per_step(),
        })
    }

    pub fn parameters(&self) -> &ScheduleParameters {
        &self.parameters
    }

    /// Timestamp the schedule started from. Never changes.
    pub fn minimum_stake_schedule_start(&self) -> Timestamp {
        self.schedule_start
    }

    /// First timestamp at which the floor amount applies.
    pub fn schedule_end(&self) -> Timestamp {
        self.schedule_end
    }

    /// Length of one step in seconds (truncated).
    pub fn step_duration(&self) -> u64 {
        self.step_duration
    }

    /// Amount removed per completed step (truncated).
    pub fn decrement_per_step(&self) -> Amount {
        self.decrement_per_step
    }

    /// Minimum stake (in base units) in force at `now`.
    ///
    /// 1. `now` before the start counts as zero elapsed time: initial amount.
    /// 2. `elapsed >= total_duration`: floor amount.
    /// 3. Otherwise `initial - completed_steps * decrement_per_step`, where a
    ///    step is completed only once its full length has elapsed and the
    ///    count is capped at `step_count - 1` (the floor step).
    ///
    /// The result is always within `[floor_amount, initial_amount]` and never
    /// increases as `now` increases.
    pub fn current_minimum_stake(&self, now: Timestamp) -> Amount {
        let Some(elapsed) = now.checked_sub(self.schedule_start) else {
            debug!(
                now,
                schedule_start = self.schedule_start,
                "query before schedule start, clamping elapsed time to zero"
            );
            return self.parameters.initial_amount();
        };

        if elapsed >= self.parameters.total_duration() {
            return self.parameters.floor_amount();
        }

        let steps = self.steps_for_elapsed(elapsed);
        // steps <= step_count - 1, so the product is at most initial - floor.
        self.parameters.initial_amount() - steps as Amount * self.decrement_per_step
    }

    /// Number of completed steps at `now`.
    ///
    /// 0 before and at the start, at most `step_count - 1` while the schedule
    /// runs, and `step_count` once it has ended.
    pub fn completed_steps(&self, now: Timestamp) -> u64 {
        match now.checked_sub(self.schedule_start) {
            None => 0,
            Some(elapsed) if elapsed >= self.parameters.total_duration() => {
                self.parameters.step_count()
            }
            Some(elapsed) => self.steps_for_elapsed(elapsed),
        }
    }

    /// Whether the schedule has fully elapsed at `now`.
    pub fn is_complete(&self, now: Timestamp) -> bool {
        now >= self.schedule_end
    }

    /// The next step boundary strictly after `now`.
    ///
    /// The final boundary is always [`schedule_end`](Self::schedule_end), even
    /// when `step_count * step_duration` falls short of it. Returns `None`
    /// once the schedule is complete.
    pub fn next_step_at(&self, now: Timestamp) -> Option<Timestamp> {
        if self.is_complete(now) {
            return None;
        }
        let next = self.completed_steps(now) + 1;
        if next >= self.parameters.step_count() {
            return Some(self.schedule_end);
        }
        // next * step_duration < total_duration, so this cannot overflow.
        Some(self.schedule_start + next * self.step_duration)
    }

    /// Seconds from `now` until the next step boundary.
    ///
    /// Returns `None` once the schedule is complete.
    pub fn seconds_until_next_step(&self, now: Timestamp) -> Option<u64> {
        self.next_step_at(now).map(|next| next.saturating_sub(now))
    }

    /// The full schedule as a table of steps, ending with the floor row.
    ///
    /// Row `k < step_count` starts at `start + k * step_duration`; the last
    /// row starts at the schedule end with the floor amount. Consecutive rows
    /// may carry the same amount when the decrement truncated to zero or the
    /// last step already sits on the floor.
    ///
    /// Rows are produced lazily: a schedule may have up to `u64::MAX` steps.
    pub fn steps(&self) -> impl Iterator<Item = ScheduleStep> + '_ {
        let step_count = self.parameters.step_count();
        let floor_row = ScheduleStep {
            index: step_count,
            starts_at: self.schedule_end,
            minimum_stake: self.parameters.floor_amount(),
        };

        (0..step_count)
            .map(move |k| {
                // k * step_duration <= total_duration, so this stays within schedule_end.
                let starts_at = self.schedule_start + k * self.step_duration;
                ScheduleStep {
                    index: k,
                    starts_at,
                    minimum_stake: self.current_minimum_stake(starts_at),
                }
            })
            .chain(std::iter::once(floor_row))
    }

    /// Completed steps for an in-range `elapsed`.
    ///
    /// Capped at `step_count - 1`: past that the floor step is in force, and
    /// when `total_duration % step_count` is at least one step long,
    /// `elapsed / step_duration` would otherwise overshoot before the
    /// schedule ends.
    fn steps_for_elapsed(&self, elapsed: u64) -> u64 {
        (elapsed / self.step_duration).min(self.parameters.step_count() - 1)
    }
}

impl MinimumStakeSchedule for ScheduleEngine {
    fn minimum_stake_at(&self, now: Timestamp) -> Amount {
        self.current_minimum_stake(now)
    }

    fn schedule_start(&self) -> Timestamp {
        self.schedule_start
    }
}
