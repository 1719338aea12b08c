//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the calculation
//! modules, mostly the rounding conventions of Swiss tax practice.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). Used for derived deduction
/// amounts and for percentages reported in results.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use swisstax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a final tax amount down to the nearest 0.05.
///
/// Swiss tax bills are settled in five-centime steps, always in the
/// taxpayer's favour. Every jurisdiction-level tax amount goes through this
/// once, after multipliers and reductions.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use swisstax_core::calculations::common::round_to_nickel;
///
/// assert_eq!(round_to_nickel(dec!(2736.58)), dec!(2736.55));
/// assert_eq!(round_to_nickel(dec!(2736.55)), dec!(2736.55));
/// assert_eq!(round_to_nickel(dec!(0.04)), dec!(0.00));
/// ```
pub fn round_to_nickel(value: Decimal) -> Decimal {
    (value * Decimal::from(20)).floor() / Decimal::from(20)
}

/// Floors a taxable income to the nearest 100 below.
///
/// The federal tariff is applied to taxable income truncated to full
/// hundreds; cantonal tariffs use the exact amount.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use swisstax_core::calculations::common::floor_to_hundred;
///
/// assert_eq!(floor_to_hundred(dec!(79552.80)), dec!(79500));
/// assert_eq!(floor_to_hundred(dec!(100000)), dec!(100000));
/// assert_eq!(floor_to_hundred(dec!(99)), dec!(0));
/// ```
pub fn floor_to_hundred(value: Decimal) -> Decimal {
    (value / Decimal::ONE_HUNDRED).floor() * Decimal::ONE_HUNDRED
}

/// Clamps a value to zero from below.
pub fn max_zero(value: Decimal) -> Decimal {
    if value > Decimal::ZERO {
        value
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(123.454));

        assert_eq!(result, dec!(123.45));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(123.455));

        assert_eq!(result, dec!(123.46));
    }

    #[test]
    fn round_half_up_preserves_already_rounded_values() {
        let result = round_half_up(dec!(123.45));

        assert_eq!(result, dec!(123.45));
    }

    // =========================================================================
    // round_to_nickel tests
    // =========================================================================

    #[test]
    fn round_to_nickel_floors_to_five_centimes() {
        let result = round_to_nickel(dec!(2736.58));

        assert_eq!(result, dec!(2736.55));
    }

    #[test]
    fn round_to_nickel_keeps_exact_values() {
        let result = round_to_nickel(dec!(6082.85));

        assert_eq!(result, dec!(6082.85));
    }

    #[test]
    fn round_to_nickel_never_rounds_up() {
        // 0.0999... would round up to 0.10 under half-up; the nickel step
        // always truncates in the taxpayer's favour.
        let result = round_to_nickel(dec!(0.0999));

        assert_eq!(result, dec!(0.05));
    }

    #[test]
    fn round_to_nickel_handles_zero() {
        let result = round_to_nickel(dec!(0.00));

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn round_to_nickel_handles_sub_nickel_amounts() {
        let result = round_to_nickel(dec!(0.04));

        assert_eq!(result, dec!(0.00));
    }

    // =========================================================================
    // floor_to_hundred tests
    // =========================================================================

    #[test]
    fn floor_to_hundred_truncates_to_full_hundreds() {
        let result = floor_to_hundred(dec!(79552.80));

        assert_eq!(result, dec!(79500));
    }

    #[test]
    fn floor_to_hundred_keeps_exact_hundreds() {
        let result = floor_to_hundred(dec!(100000));

        assert_eq!(result, dec!(100000));
    }

    #[test]
    fn floor_to_hundred_floors_below_first_hundred_to_zero() {
        let result = floor_to_hundred(dec!(99));

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // max_zero tests
    // =========================================================================

    #[test]
    fn max_zero_passes_positive_values() {
        let result = max_zero(dec!(415.20));

        assert_eq!(result, dec!(415.20));
    }

    #[test]
    fn max_zero_clamps_negative_values() {
        let result = max_zero(dec!(-415.20));

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn max_zero_keeps_zero() {
        let result = max_zero(dec!(0));

        assert_eq!(result, dec!(0));
    }
}
