//! Shared test helpers for scenario and adversarial tests.

use std::sync::Arc;

use minstake_core::traits::Clock;
use minstake_core::types::Timestamp;
use minstake_schedule::{ManualClock, MinimumStake, ScheduleBuilder, ScheduleEngine};

/// Arbitrary but fixed deployment time.
pub const DEPLOYED_AT: Timestamp = 1_577_836_800;

/// A staking service in miniature: a schedule initialized against a
/// manually driven clock.
pub struct StakingFixture {
    pub clock: Arc<ManualClock>,
    pub stake: MinimumStake<ScheduleEngine, Arc<ManualClock>>,
}

impl StakingFixture {
    /// Deploy with the default schedule at [`DEPLOYED_AT`].
    pub fn deploy() -> Self {
        Self::deploy_with(ScheduleBuilder::new())
    }

    /// Deploy with a customized builder; the start is taken from the clock.
    pub fn deploy_with(builder: ScheduleBuilder) -> Self {
        let clock = Arc::new(ManualClock::new(DEPLOYED_AT));
        let engine = builder
            .start_now(&clock)
            .build()
            .expect("fixture schedule must be valid");
        let stake = MinimumStake::new(engine, Arc::clone(&clock));
        Self { clock, stake }
    }

    /// Latest clock reading.
    pub fn latest(&self) -> Timestamp {
        self.clock.now()
    }

    /// Move the clock forward by `secs`.
    pub fn increase_time(&self, secs: u64) -> Timestamp {
        self.clock.advance(secs)
    }

    /// Move the clock forward to exactly `ts`; does nothing if already past it.
    pub fn increase_time_to(&self, ts: Timestamp) {
        let latest = self.latest();
        if ts > latest {
            self.increase_time(ts - latest);
        }
    }

    pub fn engine(&self) -> &ScheduleEngine {
        self.stake.schedule()
    }
}
