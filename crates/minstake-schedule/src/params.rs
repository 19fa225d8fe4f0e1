//! Static decay parameters.
//!
//! A [`ScheduleParameters`] value can only be obtained through
//! [`ScheduleParameters::new`] (or `Default`), so every instance satisfies:
//! - `step_count >= 1`
//! - `initial_amount > floor_amount`
//! - `total_duration >= step_count`, i.e. `step_duration() >= 1`

use minstake_core::constants::{
    DEFAULT_FLOOR_MINIMUM_STAKE, DEFAULT_INITIAL_MINIMUM_STAKE, DEFAULT_SCHEDULE_DURATION_SECS,
    DEFAULT_SCHEDULE_STEPS,
};
use minstake_core::error::ScheduleError;
use minstake_core::types::Amount;
use serde::Serialize;

/// Validated decay parameters of a minimum-stake schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleParameters {
    initial_amount: Amount,
    floor_amount: Amount,
    total_duration: u64,
    step_count: u64,
}

impl ScheduleParameters {
    /// Validate and create a parameter set.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::ZeroStepCount`] if `step_count == 0`
    /// - [`ScheduleError::FloorNotBelowInitial`] if `floor_amount >= initial_amount`
    /// - [`ScheduleError::DurationShorterThanSteps`] if the truncated step
    ///   length would be zero
    pub fn new(
        initial_amount: Amount,
        floor_amount: Amount,
        total_duration: u64,
        step_count: u64,
    ) -> Result<Self, ScheduleError> {
        if step_count == 0 {
            return Err(ScheduleError::ZeroStepCount);
        }
        if floor_amount >= initial_amount {
            return Err(ScheduleError::FloorNotBelowInitial {
                initial: initial_amount,
                floor: floor_amount,
            });
        }
        if total_duration < step_count {
            return Err(ScheduleError::DurationShorterThanSteps {
                duration: total_duration,
                steps: step_count,
            });
        }
        Ok(Self {
            initial_amount,
            floor_amount,
            total_duration,
            step_count,
        })
    }

    pub fn initial_amount(&self) -> Amount {
        self.initial_amount
    }

    pub fn floor_amount(&self) -> Amount {
        self.floor_amount
    }

    /// Total schedule length in seconds.
    pub fn total_duration(&self) -> u64 {
        self.total_duration
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Length of one step in seconds: `total_duration / step_count`, truncated.
    ///
    /// The remainder is not redistributed; it only delays the final drop to
    /// the floor, which always happens at `total_duration`.
    pub fn step_duration(&self) -> u64 {
        self.total_duration / self.step_count
    }

    /// Amount removed per completed step, truncated.
    ///
    /// The spread is divided over `step_count - 1` drops so that the last
    /// step (`step_count - 1` completed) sits on the floor: 100,000 → 10,000
    /// in 10 steps drops 10,000 per step. A single-step schedule holds the
    /// initial amount until the end, so its decrement is the whole spread.
    pub fn decrement_per_step(&self) -> Amount {
        let drops = self.step_count.saturating_sub(1).max(1);
        (self.initial_amount - self.floor_amount) / drops as Amount
    }
}

impl Default for ScheduleParameters {
    fn default() -> Self {
        Self {
            initial_amount: DEFAULT_INITIAL_MINIMUM_STAKE,
            floor_amount: DEFAULT_FLOOR_MINIMUM_STAKE,
            total_duration: DEFAULT_SCHEDULE_DURATION_SECS,
            step_count: DEFAULT_SCHEDULE_STEPS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minstake_core::constants::{tokens, SECONDS_PER_YEAR};

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    #[test]
    fn default_passes_validation() {
        let d = ScheduleParameters::default();
        let validated = ScheduleParameters::new(
            d.initial_amount(),
            d.floor_amount(),
            d.total_duration(),
            d.step_count(),
        );
        assert_eq!(validated, Ok(d));
    }

    #[test]
    fn zero_steps_rejected() {
        assert_eq!(
            ScheduleParameters::new(100, 10, 1_000, 0),
            Err(ScheduleError::ZeroStepCount)
        );
    }

    #[test]
    fn floor_above_initial_rejected() {
        assert_eq!(
            ScheduleParameters::new(10, 100, 1_000, 10),
            Err(ScheduleError::FloorNotBelowInitial { initial: 10, floor: 100 })
        );
    }

    #[test]
    fn floor_equal_to_initial_rejected() {
        assert_eq!(
            ScheduleParameters::new(50, 50, 1_000, 10),
            Err(ScheduleError::FloorNotBelowInitial { initial: 50, floor: 50 })
        );
    }

    #[test]
    fn zero_floor_accepted() {
        assert!(ScheduleParameters::new(1, 0, 1, 1).is_ok());
    }

    #[test]
    fn duration_shorter_than_steps_rejected() {
        assert_eq!(
            ScheduleParameters::new(100, 10, 9, 10),
            Err(ScheduleError::DurationShorterThanSteps { duration: 9, steps: 10 })
        );
    }

    #[test]
    fn duration_equal_to_steps_accepted() {
        let p = ScheduleParameters::new(100, 10, 10, 10).unwrap();
        assert_eq!(p.step_duration(), 1);
    }

    #[test]
    fn zero_steps_checked_before_amounts() {
        assert_eq!(
            ScheduleParameters::new(0, 0, 0, 0),
            Err(ScheduleError::ZeroStepCount)
        );
    }

    // ------------------------------------------------------------------
    // Derived values
    // ------------------------------------------------------------------

    #[test]
    fn default_step_duration() {
        // 2 years / 10 steps = 73 days
        assert_eq!(ScheduleParameters::default().step_duration(), 6_307_200);
        assert_eq!(
            ScheduleParameters::default().step_duration(),
            2 * SECONDS_PER_YEAR / 10
        );
    }

    #[test]
    fn default_decrement() {
        assert_eq!(ScheduleParameters::default().decrement_per_step(), tokens(10_000));
    }

    #[test]
    fn default_last_step_lands_on_floor() {
        let p = ScheduleParameters::default();
        assert_eq!(
            p.initial_amount() - 9 * p.decrement_per_step(),
            p.floor_amount()
        );
    }

    #[test]
    fn single_step_decrement_is_whole_spread() {
        let p = ScheduleParameters::new(100, 10, 50, 1).unwrap();
        assert_eq!(p.decrement_per_step(), 90);
    }

    #[test]
    fn step_duration_truncates() {
        let p = ScheduleParameters::new(100, 0, 1_009, 10).unwrap();
        assert_eq!(p.step_duration(), 100);
    }

    #[test]
    fn decrement_truncates() {
        let p = ScheduleParameters::new(100, 1, 1_000, 10).unwrap();
        // (100 - 1) / 9 = 11, exact
        assert_eq!(p.decrement_per_step(), 11);
        let p = ScheduleParameters::new(100, 0, 1_000, 10).unwrap();
        // 100 / 9 = 11, remainder 1 dropped
        assert_eq!(p.decrement_per_step(), 11);
    }

    #[test]
    fn decrement_can_be_zero() {
        let p = ScheduleParameters::new(5, 0, 1_000, 10).unwrap();
        // 5 / 9 = 0
        assert_eq!(p.decrement_per_step(), 0);
    }

    #[test]
    fn serializes_amounts_as_integers() {
        // u128 amounts exceed serde_json::Value's range, so check the text form.
        let json = serde_json::to_string(&ScheduleParameters::default()).unwrap();
        assert!(json.contains("\"initial_amount\":100000000000000000000000"), "{json}");
        assert!(json.contains("\"floor_amount\":10000000000000000000000"), "{json}");
        assert!(json.contains("\"total_duration\":63072000"), "{json}");
        assert!(json.contains("\"step_count\":10"), "{json}");
    }
}
