//! Schedule constants. All stake amounts in base units (1 token = 10^18 base units).

use crate::error::ScheduleError;
use crate::types::Amount;

/// Number of decimal places of the staked token.
pub const TOKEN_DECIMALS: u32 = 18;

/// One whole token in base units.
pub const TOKEN: Amount = 10u128.pow(TOKEN_DECIMALS);

pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_DAY: u64 = 86_400;

/// A schedule year is exactly 365 days; leap days are not accounted for.
pub const SECONDS_PER_YEAR: u64 = 365 * SECONDS_PER_DAY;

/// Minimum stake required at the moment the schedule starts.
pub const DEFAULT_INITIAL_MINIMUM_STAKE: Amount = 100_000 * TOKEN;

/// Minimum stake required once the schedule has fully elapsed.
pub const DEFAULT_FLOOR_MINIMUM_STAKE: Amount = 10_000 * TOKEN;

/// Length of the decay schedule: two 365-day years.
///
/// # Examples
///
/// ```
/// use minstake_core::constants::{DEFAULT_SCHEDULE_DURATION_SECS, SECONDS_PER_DAY};
/// assert_eq!(DEFAULT_SCHEDULE_DURATION_SECS, SECONDS_PER_DAY * 365 * 2);
/// ```
pub const DEFAULT_SCHEDULE_DURATION_SECS: u64 = 2 * SECONDS_PER_YEAR;

/// Number of discrete decrements across the schedule.
pub const DEFAULT_SCHEDULE_STEPS: u64 = 10;

/// Convert a whole-token count into base units with the default 18 decimals.
///
/// Saturates at `Amount::MAX`, which is unreachable for any `u64` input.
///
/// # Examples
///
/// ```
/// use minstake_core::constants::{tokens, TOKEN};
/// assert_eq!(tokens(90_000), 90_000 * TOKEN);
/// ```
pub const fn tokens(whole: u64) -> Amount {
    (whole as Amount).saturating_mul(TOKEN)
}

/// Convert a whole-token count into base units for a token with `decimals`
/// decimal places.
///
/// Returns [`ScheduleError::AmountOverflow`] when `10^decimals` or the
/// product does not fit in an [`Amount`].
pub fn to_base_units(whole: u64, decimals: u32) -> Result<Amount, ScheduleError> {
    let unit = 10u128
        .checked_pow(decimals)
        .ok_or(ScheduleError::AmountOverflow)?;
    (whole as Amount)
        .checked_mul(unit)
        .ok_or(ScheduleError::AmountOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn token_is_ten_pow_eighteen() {
        assert_eq!(TOKEN, 1_000_000_000_000_000_000);
    }

    #[test]
    fn default_amounts_exceed_u64() {
        // The reason Amount is u128.
        assert!(DEFAULT_INITIAL_MINIMUM_STAKE > u64::MAX as Amount);
        assert!(DEFAULT_FLOOR_MINIMUM_STAKE > u64::MAX as Amount);
    }

    #[test]
    fn default_floor_below_initial() {
        assert!(DEFAULT_FLOOR_MINIMUM_STAKE < DEFAULT_INITIAL_MINIMUM_STAKE);
    }

    #[test]
    fn default_duration_is_two_years() {
        assert_eq!(DEFAULT_SCHEDULE_DURATION_SECS, 63_072_000);
    }

    #[test]
    fn default_duration_divides_evenly_into_steps() {
        assert_eq!(DEFAULT_SCHEDULE_DURATION_SECS % DEFAULT_SCHEDULE_STEPS, 0);
        assert_eq!(
            (DEFAULT_INITIAL_MINIMUM_STAKE - DEFAULT_FLOOR_MINIMUM_STAKE)
                % DEFAULT_SCHEDULE_STEPS as Amount,
            0
        );
    }

    #[test]
    fn tokens_matches_base_units() {
        assert_eq!(tokens(0), 0);
        assert_eq!(tokens(1), TOKEN);
        assert_eq!(tokens(100_000), DEFAULT_INITIAL_MINIMUM_STAKE);
    }

    #[test]
    fn to_base_units_default_decimals() {
        assert_eq!(to_base_units(10_000, TOKEN_DECIMALS), Ok(DEFAULT_FLOOR_MINIMUM_STAKE));
    }

    #[test]
    fn to_base_units_zero_decimals() {
        assert_eq!(to_base_units(42, 0), Ok(42));
    }

    #[test]
    fn to_base_units_overflowing_decimals() {
        // 10^39 > u128::MAX
        assert_eq!(to_base_units(1, 39), Err(ScheduleError::AmountOverflow));
    }

    #[test]
    fn to_base_units_overflowing_product() {
        assert_eq!(to_base_units(u64::MAX, 38), Err(ScheduleError::AmountOverflow));
    }

    proptest! {
        #[test]
        fn to_base_units_agrees_with_tokens(whole in any::<u64>()) {
            prop_assert_eq!(to_base_units(whole, TOKEN_DECIMALS), Ok(tokens(whole)));
        }

        #[test]
        fn to_base_units_preserves_order(a in any::<u64>(), b in any::<u64>(), decimals in 0u32..=19) {
            // 10^19 * u64::MAX still fits in a u128.
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(to_base_units(lo, decimals).unwrap() <= to_base_units(hi, decimals).unwrap());
        }

        #[test]
        fn to_base_units_divides_back(whole in any::<u64>(), decimals in 0u32..=19) {
            let amount = to_base_units(whole, decimals).unwrap();
            prop_assert_eq!(amount / 10u128.pow(decimals), whole as Amount);
            prop_assert_eq!(amount % 10u128.pow(decimals), 0);
        }
    }
}
