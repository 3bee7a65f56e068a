//! Decimal rounding for hour quantities.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept on aggregate outputs.
pub const SUMMARY_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept on the strict clock-in/clock-out delta.
pub const STRICT_TIME_DECIMAL_PLACES: u32 = 1;

/// Rounds to `dp` decimal places, midpoints away from zero.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::round_half_away;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_half_away(Decimal::new(1005, 3), 2), Decimal::new(101, 2));
/// assert_eq!(round_half_away(Decimal::new(-1005, 3), 2), Decimal::new(-101, 2));
/// ```
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
