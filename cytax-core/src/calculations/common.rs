//! Common utility functions for worksheet calculations.

use rust_decimal::Decimal;

/// Rounds a decimal value to whole currency units using half-up rounding
/// (midpoints go away from zero).
///
/// Display boundary only: worksheet intermediates are never rounded.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use cytax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.4)), dec!(123));
/// assert_eq!(round_half_up(dec!(123.5)), dec!(124));
/// assert_eq!(round_half_up(dec!(-123.5)), dec!(-124)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(913.4)), dec!(913));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(913.5)), dec!(914));
    }

    #[test]
    fn round_half_up_handles_negative_values() {
        assert_eq!(round_half_up(dec!(-913.5)), dec!(-914)); // Away from zero
    }

    #[test]
    fn round_half_up_preserves_whole_values() {
        assert_eq!(round_half_up(dec!(913)), dec!(913));
        assert_eq!(round_half_up(dec!(0)), dec!(0));
    }

    #[test]
    fn max_returns_larger_value() {
        assert_eq!(max(dec!(100), dec!(200)), dec!(200));
        assert_eq!(max(dec!(200), dec!(100)), dec!(200));
    }

    #[test]
    fn max_handles_negative_and_zero() {
        assert_eq!(max(dec!(-50), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(max(dec!(-100), dec!(-200)), dec!(-100));
    }
}
