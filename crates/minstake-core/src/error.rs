//! Error types for the minimum-stake schedule.
use thiserror::Error;

use crate::types::{Amount, Timestamp};

/// Misconfiguration detected while building a schedule.
///
/// Never produced at query time: a schedule that was built successfully
/// answers every query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("step count must be at least 1")] ZeroStepCount,
    #[error("floor amount {floor} must be below initial amount {initial}")] FloorNotBelowInitial { initial: Amount, floor: Amount },
    #[error("duration {duration}s is shorter than {steps} steps")] DurationShorterThanSteps { duration: u64, steps: u64 },
    #[error("schedule start was never set")] MissingScheduleStart,
    #[error("schedule end overflows: start {start} + duration {duration}")] ScheduleEndOverflow { start: Timestamp, duration: u64 },
    #[error("amount overflow")] AmountOverflow,
}

/// Stake rejected by the eligibility gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StakeError {
    #[error("stake below minimum: have {have}, need {need}")] BelowMinimum { have: Amount, need: Amount },
}

/// Failure while setting up a schedule from configuration.
///
/// Eligibility checks return [`StakeError`] directly; they never fail for
/// setup reasons.
#[derive(Error, Debug)]
pub enum MinStakeError {
    #[error(transparent)] Schedule(#[from] ScheduleError),
    #[error("config: {0}")] Config(String),
}
