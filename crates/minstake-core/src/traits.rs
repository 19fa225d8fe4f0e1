//! Trait interfaces for the minimum-stake schedule.
//!
//! These traits define the seams between the schedule and its host:
//! - [`Clock`]: source of the current time (the host implements)
//! - [`MinimumStakeSchedule`]: the threshold function (minstake-schedule implements)

use crate::error::StakeError;
use crate::types::{Amount, Timestamp};

/// Source of the current wall-clock time.
///
/// Queried once per evaluation; schedule types never cache its answer.
/// Implementations need not be strictly monotonic: readings earlier than the
/// schedule start are tolerated by every schedule.
pub trait Clock: Send + Sync {
    /// Current time in Unix seconds.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// A time-keyed minimum stake threshold.
///
/// Implementations are pure: the same `now` always yields the same amount,
/// and the amount never increases as `now` increases.
pub trait MinimumStakeSchedule: Send + Sync {
    /// Minimum stake (in base units) required at time `now`.
    fn minimum_stake_at(&self, now: Timestamp) -> Amount;

    /// Timestamp the schedule started decaying from.
    fn schedule_start(&self) -> Timestamp;

    /// Whether `amount` meets the threshold at `now`.
    ///
    /// Default implementation compares against [`minimum_stake_at`](Self::minimum_stake_at).
    fn has_minimum_stake(&self, amount: Amount, now: Timestamp) -> bool {
        amount >= self.minimum_stake_at(now)
    }

    /// Reject `amount` when it is below the threshold at `now`.
    fn ensure_minimum_stake(&self, amount: Amount, now: Timestamp) -> Result<(), StakeError> {
        let need = self.minimum_stake_at(now);
        if amount < need {
            return Err(StakeError::BelowMinimum { have: amount, need });
        }
        Ok(())
    }
}

impl<S: MinimumStakeSchedule + ?Sized> MinimumStakeSchedule for &S {
    fn minimum_stake_at(&self, now: Timestamp) -> Amount {
        (**self).minimum_stake_at(now)
    }

    fn schedule_start(&self) -> Timestamp {
        (**self).schedule_start()
    }
}

impl<S: MinimumStakeSchedule + ?Sized> MinimumStakeSchedule for Box<S> {
    fn minimum_stake_at(&self, now: Timestamp) -> Amount {
        (**self).minimum_stake_at(now)
    }

    fn schedule_start(&self) -> Timestamp {
        (**self).schedule_start()
    }
}

impl<S: MinimumStakeSchedule + ?Sized> MinimumStakeSchedule for std::sync::Arc<S> {
    fn minimum_stake_at(&self, now: Timestamp) -> Amount {
        (**self).minimum_stake_at(now)
    }

    fn schedule_start(&self) -> Timestamp {
        (**self).schedule_start()
    }
}
