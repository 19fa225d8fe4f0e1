//! Unit types shared across the workspace.

/// A token amount in base units (1 token = [`TOKEN`](crate::constants::TOKEN) base units).
///
/// `u128` because the default schedule starts at `100_000 * 10^18`, which
/// does not fit in a `u64`.
pub type Amount = u128;

/// Wall-clock time as Unix seconds.
pub type Timestamp = u64;
