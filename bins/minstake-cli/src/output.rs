//! Human-readable rendering of amounts and timestamps.

use minstake_core::types::{Amount, Timestamp};

/// Render a base-unit amount as whole tokens, keeping only significant
/// fractional digits (`90000`, `0.5`, `12.000001`).
pub fn format_tokens(amount: Amount, decimals: u32) -> String {
    let Some(unit) = 10u128.checked_pow(decimals) else {
        return amount.to_string();
    };
    let whole = amount / unit;
    let frac = amount % unit;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{frac:0width$}", width = decimals as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

/// Render a Unix timestamp as RFC 3339 UTC, falling back to the raw number
/// when it is outside chrono's range.
pub fn format_timestamp(ts: Timestamp) -> String {
    i64::try_from(ts)
        .ok()
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| ts.to_string())
}

/// Render a second count as `"73d 0h 0m 0s"`.
pub fn format_duration(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = secs % 86_400 / 3_600;
    let minutes = secs % 3_600 / 60;
    let seconds = secs % 60;
    format!("{days}d {hours}h {minutes}m {seconds}s")
}

#[cfg(test)]
mod tests {
    use super::*;
    use minstake_core::constants::{tokens, TOKEN, TOKEN_DECIMALS};

    #[test]
    fn whole_tokens() {
        assert_eq!(format_tokens(tokens(90_000), TOKEN_DECIMALS), "90000");
        assert_eq!(format_tokens(0, TOKEN_DECIMALS), "0");
    }

    #[test]
    fn fractional_tokens_trimmed() {
        assert_eq!(format_tokens(TOKEN / 2, TOKEN_DECIMALS), "0.5");
        assert_eq!(format_tokens(12 * TOKEN + 1_000_000_000_000, TOKEN_DECIMALS), "12.000001");
    }

    #[test]
    fn zero_decimals() {
        assert_eq!(format_tokens(1_234, 0), "1234");
    }

    #[test]
    fn unrepresentable_decimals_fall_back() {
        assert_eq!(format_tokens(77, 50), "77");
    }

    #[test]
    fn timestamp_epoch() {
        assert_eq!(format_timestamp(0), "1970-01-01T00:00:00+00:00");
    }

    #[test]
    fn timestamp_out_of_range() {
        assert_eq!(format_timestamp(u64::MAX), u64::MAX.to_string());
    }

    #[test]
    fn duration_one_step() {
        assert_eq!(format_duration(6_307_200), "73d 0h 0m 0s");
        assert_eq!(format_duration(3_661), "0d 1h 1m 1s");
    }
}
