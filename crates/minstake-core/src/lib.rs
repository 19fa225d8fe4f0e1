//! # minstake-core
//! Foundation types, constants and traits for the minimum-stake schedule.

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;
