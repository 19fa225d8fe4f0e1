//! # minstake-schedule: Step-decaying minimum-stake schedule.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! The minimum stake starts at an initial amount and drops by a fixed
//! decrement each time a full step elapses, reaching a floor amount once the
//! whole schedule duration has passed:
//! - **Truncating steps**: step length and per-step decrement are both
//!   integer quotients; a step only counts once its full length has elapsed.
//! - **Clamped start**: readings before the schedule start behave as the start.
//! - **Terminal floor**: from `start + duration` on, the floor applies forever.
//!
//! [`ScheduleBuilder`] performs the one-time initialization and yields an
//! immutable [`ScheduleEngine`]. [`MinimumStake`] binds an engine to a
//! [`Clock`](minstake_core::traits::Clock) for hosts that ask "what is the
//! minimum right now".

pub mod builder;
pub mod clock;
pub mod config;
pub mod engine;
pub mod params;
pub mod stake;

pub use builder::ScheduleBuilder;
pub use clock::{ManualClock, SystemClock};
pub use config::ScheduleConfig;
pub use engine::{ScheduleEngine, ScheduleStep};
pub use params::ScheduleParameters;
pub use stake::MinimumStake;
