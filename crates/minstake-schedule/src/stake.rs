//! Clock-bound view of a schedule, as consumed by the staking service.
//!
//! The staking service never passes timestamps around: it asks for "the
//! minimum stake" and the current time is read from its clock on every call.

use minstake_core::error::StakeError;
use minstake_core::traits::{Clock, MinimumStakeSchedule};
use minstake_core::types::{Amount, Timestamp};
use tracing::debug;

/// A schedule paired with the clock it is evaluated against.
///
/// The clock is queried on every call and its reading is never cached.
#[derive(Debug, Clone)]
pub struct MinimumStake<S, C> {
    schedule: S,
    clock: C,
}

impl<S: MinimumStakeSchedule, C: Clock> MinimumStake<S, C> {
    pub fn new(schedule: S, clock: C) -> Self {
        Self { schedule, clock }
    }

    /// Minimum stake required right now.
    pub fn minimum_stake(&self) -> Amount {
        self.schedule.minimum_stake_at(self.clock.now())
    }

    /// Timestamp the schedule started from.
    pub fn minimum_stake_schedule_start(&self) -> Timestamp {
        self.schedule.schedule_start()
    }

    /// Whether `amount` meets the current minimum.
    pub fn has_minimum_stake(&self, amount: Amount) -> bool {
        self.schedule.has_minimum_stake(amount, self.clock.now())
    }

    /// Reject `amount` if it is below the current minimum.
    ///
    /// Called before accepting a delegation or confirming that an operator
    /// is still eligible.
    pub fn ensure_minimum_stake(&self, amount: Amount) -> Result<(), StakeError> {
        let now = self.clock.now();
        self.schedule
            .ensure_minimum_stake(amount, now)
            .inspect_err(|err| debug!(now, %err, "stake rejected"))
    }

    pub fn schedule(&self) -> &S {
        &self.schedule
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
