//! Scenario and adversarial test suite for the minimum-stake schedule.
//!
//! The integration tests under `tests/` drive the schedule the way the
//! staking service does: initialize once, then move a clock forward and
//! check the threshold on every eligibility decision.

pub mod helpers;
