//! Degressive AHV contributions for the self-employed.
//!
//! Employees have AHV/IV/EO withheld at a flat rate of gross salary. The
//! self-employed instead pay on their net self-employment income at a rate
//! that rises with income:
//!
//! | Income | Contribution |
//! |--------|--------------|
//! | below the lower threshold | flat minimum contribution |
//! | between the thresholds | the matching band's rate × the whole income |
//! | at or above the upper threshold | full rate × the whole income |
//!
//! The band rate applies to the entire income, not the slice above the band
//! boundary, which makes the scale degressive rather than progressive.
//!
//! # Circularity
//!
//! The AHV contribution is itself deductible, so the contribution depends
//! on taxable income, which depends on the contribution. The interlock is
//! resolved by a bounded fixed-point iteration: seed the contribution from
//! net income, derive taxable income, recompute the contribution from
//! taxable income plus the previous contribution, and repeat until two
//! successive taxable incomes differ by less than 1.00. Because taxable
//! income plus its own contribution is constant (net income minus the other
//! deductions), the iteration settles by the second round; the cap of five
//! rounds and the non-convergence warning only guard against malformed
//! scales.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use swisstax_core::calculations::ahv::SelfEmployedAhv;
//! use swisstax_core::{DegressiveRateBand, SelfEmployedAhvScale};
//!
//! let scale = SelfEmployedAhvScale {
//!     minimum_contribution: dec!(530),
//!     lower_threshold: dec!(10100),
//!     upper_threshold: dec!(60500),
//!     full_rate_percent: dec!(10),
//!     bands: vec![DegressiveRateBand {
//!         min_income: dec!(10100),
//!         max_income: dec!(60500),
//!         rate_percent: dec!(7),
//!     }],
//! };
//!
//! let ahv = SelfEmployedAhv::new(&scale);
//!
//! assert_eq!(ahv.contribution(dec!(5000)), dec!(530));
//! assert_eq!(ahv.contribution(dec!(40000)), dec!(2800.00));
//! assert_eq!(ahv.contribution(dec!(100000)), dec!(10000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{max_zero, round_half_up};
use crate::models::SelfEmployedAhvScale;

/// Maximum fixed-point rounds before giving up with the best estimate.
const MAX_ITERATIONS: u32 = 5;

/// Result of resolving the AHV/taxable-income interlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfEmployedResolution {
    /// Converged taxable income, floored at zero.
    pub taxable_income: Decimal,

    /// Converged AHV contribution.
    pub contribution: Decimal,

    /// Fixed-point rounds performed.
    pub iterations: u32,

    /// False when the iteration cap was hit; the result is then the best
    /// estimate rather than a fixed point.
    pub converged: bool,
}

/// Calculator for self-employed AHV contributions.
#[derive(Debug, Clone)]
pub struct SelfEmployedAhv<'a> {
    scale: &'a SelfEmployedAhvScale,
}

impl<'a> SelfEmployedAhv<'a> {
    pub fn new(scale: &'a SelfEmployedAhvScale) -> Self {
        Self { scale }
    }

    /// Annual AHV contribution on the given self-employment income.
    ///
    /// Incomes below the lower threshold owe the flat minimum contribution,
    /// even at zero or negative income (a registered self-employed person
    /// always owes the minimum).
    pub fn contribution(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income < self.scale.lower_threshold {
            return self.scale.minimum_contribution;
        }

        if income >= self.scale.upper_threshold {
            return round_half_up(income * self.scale.full_rate_percent / Decimal::ONE_HUNDRED);
        }

        let Some(band) = self
            .scale
            .bands
            .iter()
            .find(|b| income >= b.min_income && income < b.max_income)
        else {
            // A validated scale covers the whole degressive range; fall back
            // to the full rate rather than undercharging.
            warn!(
                income = %income,
                "no degressive band matched; applying full rate"
            );
            return round_half_up(income * self.scale.full_rate_percent / Decimal::ONE_HUNDRED);
        };

        round_half_up(income * band.rate_percent / Decimal::ONE_HUNDRED)
    }

    /// Resolves taxable income and AHV contribution simultaneously.
    ///
    /// `other_deductions` is the sum of every deduction except the AHV
    /// contribution itself. Taxable income is floored at zero in the result
    /// but the iteration runs on the unfloored value, since the contribution
    /// base must not be distorted by the clamp.
    pub fn resolve_taxable_income(
        &self,
        net_income: Decimal,
        other_deductions: Decimal,
    ) -> SelfEmployedResolution {
        let mut contribution = self.contribution(net_income);
        let mut taxable = net_income - other_deductions - contribution;

        for iteration in 1..=MAX_ITERATIONS {
            let next_contribution = self.contribution(taxable + contribution);
            let next_taxable = net_income - other_deductions - next_contribution;

            let settled = (next_taxable - taxable).abs() < Decimal::ONE;
            taxable = next_taxable;
            contribution = next_contribution;

            if settled {
                return SelfEmployedResolution {
                    taxable_income: max_zero(taxable),
                    contribution,
                    iterations: iteration,
                    converged: true,
                };
            }
        }

        warn!(
            net_income = %net_income,
            other_deductions = %other_deductions,
            taxable = %taxable,
            contribution = %contribution,
            "AHV fixed point did not settle; using best estimate"
        );

        SelfEmployedResolution {
            taxable_income: max_zero(taxable),
            contribution,
            iterations: MAX_ITERATIONS,
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use tracing_subscriber::fmt::format::FmtSpan;

    use super::*;
    use crate::models::DegressiveRateBand;

    /// Initializes tracing subscriber for tests that verify log output.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_span_events(FmtSpan::NONE)
            .with_test_writer()
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    fn test_scale() -> SelfEmployedAhvScale {
        SelfEmployedAhvScale {
            minimum_contribution: dec!(530),
            lower_threshold: dec!(10100),
            upper_threshold: dec!(60500),
            full_rate_percent: dec!(10),
            bands: vec![
                DegressiveRateBand {
                    min_income: dec!(10100),
                    max_income: dec!(17600),
                    rate_percent: dec!(5.371),
                },
                DegressiveRateBand {
                    min_income: dec!(17600),
                    max_income: dec!(23000),
                    rate_percent: dec!(5.494),
                },
                DegressiveRateBand {
                    min_income: dec!(23000),
                    max_income: dec!(28400),
                    rate_percent: dec!(5.741),
                },
                DegressiveRateBand {
                    min_income: dec!(28400),
                    max_income: dec!(33800),
                    rate_percent: dec!(6.104),
                },
                DegressiveRateBand {
                    min_income: dec!(33800),
                    max_income: dec!(39200),
                    rate_percent: dec!(6.468),
                },
                DegressiveRateBand {
                    min_income: dec!(39200),
                    max_income: dec!(44600),
                    rate_percent: dec!(6.952),
                },
                DegressiveRateBand {
                    min_income: dec!(44600),
                    max_income: dec!(50000),
                    rate_percent: dec!(7.436),
                },
                DegressiveRateBand {
                    min_income: dec!(50000),
                    max_income: dec!(55400),
                    rate_percent: dec!(8.041),
                },
                DegressiveRateBand {
                    min_income: dec!(55400),
                    max_income: dec!(60500),
                    rate_percent: dec!(9.163),
                },
            ],
        }
    }

    // =========================================================================
    // contribution tests
    // =========================================================================

    #[test]
    fn contribution_below_threshold_is_flat_minimum() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        assert_eq!(ahv.contribution(dec!(5000)), dec!(530));
        assert_eq!(ahv.contribution(dec!(0)), dec!(530));
        assert_eq!(ahv.contribution(dec!(-2000)), dec!(530));
    }

    #[test]
    fn contribution_just_below_threshold_is_flat_minimum() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        assert_eq!(ahv.contribution(dec!(10099.99)), dec!(530));
    }

    #[test]
    fn contribution_in_band_taxes_whole_income_at_band_rate() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        // 45000 falls into the 7.436% band: 45000 * 7.436% = 3346.20
        assert_eq!(ahv.contribution(dec!(45000)), dec!(3346.20));
    }

    #[test]
    fn contribution_at_band_boundary_uses_upper_band() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        // Band bounds are [min, max): exactly 17600 matches the 5.494% band.
        // 17600 * 5.494% = 966.94
        assert_eq!(ahv.contribution(dec!(17600)), dec!(966.94));
    }

    #[test]
    fn contribution_at_upper_threshold_uses_full_rate() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        // 60500 * 10% = 6050
        assert_eq!(ahv.contribution(dec!(60500)), dec!(6050.00));
    }

    #[test]
    fn contribution_above_upper_threshold_uses_full_rate() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        assert_eq!(ahv.contribution(dec!(100000)), dec!(10000.00));
    }

    #[test]
    fn contribution_in_scale_gap_falls_back_to_full_rate() {
        let _guard = init_test_tracing();
        let mut scale = test_scale();
        // Open a hole between 33800 and 39200.
        scale.bands.remove(4);
        let ahv = SelfEmployedAhv::new(&scale);

        // 35000 matches no band; the full 10% applies instead of
        // undercharging. Warning is logged (captured by test_writer).
        assert_eq!(ahv.contribution(dec!(35000)), dec!(3500.00));
    }

    // =========================================================================
    // resolve_taxable_income tests
    // =========================================================================

    #[test]
    fn resolve_settles_at_full_rate_income() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        let resolution = ahv.resolve_taxable_income(dec!(100000), dec!(0));

        // Seed: 10% of 100000 = 10000, taxable 90000. Recompute from
        // 90000 + 10000 = 100000: unchanged, settled immediately.
        assert_eq!(resolution.taxable_income, dec!(90000));
        assert_eq!(resolution.contribution, dec!(10000.00));
        assert_eq!(resolution.iterations, 1);
        assert!(resolution.converged);
    }

    #[test]
    fn resolve_settles_when_other_deductions_shift_the_band() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        let resolution = ahv.resolve_taxable_income(dec!(48000), dec!(3000));

        // Seed: 48000 is in the 7.436% band -> 3569.28, taxable 41430.72.
        // Round 1: base 41430.72 + 3569.28 = 45000 -> 3346.20, taxable
        // 41653.80 (moved by 223.08). Round 2: base 45000 again -> settled.
        assert_eq!(resolution.taxable_income, dec!(41653.80));
        assert_eq!(resolution.contribution, dec!(3346.20));
        assert_eq!(resolution.iterations, 2);
        assert!(resolution.converged);
    }

    #[test]
    fn resolve_floors_taxable_income_at_zero() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        let resolution = ahv.resolve_taxable_income(dec!(8000), dec!(9000));

        // Minimum contribution throughout; taxable would be negative.
        assert_eq!(resolution.taxable_income, dec!(0));
        assert_eq!(resolution.contribution, dec!(530));
        assert!(resolution.converged);
    }

    #[test]
    fn resolve_keeps_minimum_contribution_below_threshold() {
        let scale = test_scale();
        let ahv = SelfEmployedAhv::new(&scale);

        let resolution = ahv.resolve_taxable_income(dec!(9000), dec!(1000));

        // 9000 is below the lower threshold: flat 530 both rounds.
        assert_eq!(resolution.contribution, dec!(530));
        assert_eq!(resolution.taxable_income, dec!(7470));
        assert!(resolution.converged);
    }
}
