//! Cantonal wealth tax.
//!
//! Only cantons and municipalities tax net wealth; there is no federal
//! wealth tax. A civil-status allowance (plus a per-child supplement) comes
//! off the gross wealth first, the remainder runs through the canton's
//! cumulative per-mille brackets, and the resulting base tax is multiplied
//! by the cantonal, municipal and church multipliers just like income tax.
//! Each level is rounded down to the next 0.05 CHF on its own.

use rust_decimal::Decimal;

use crate::calculations::brackets::evaluate_wealth_brackets;
use crate::calculations::common::{max_zero, round_half_up, round_to_nickel};
use crate::models::{CivilStatus, Municipality, TaxpayerProfile, WealthTaxConfig, WealthTaxResult};

/// Computes the full wealth tax stack for one municipality.
///
/// Returns a zeroed result when the canton levies no wealth tax or when
/// nothing remains after the allowance.
pub fn calculate_wealth_tax(
    profile: &TaxpayerProfile,
    gross_wealth: Decimal,
    config: Option<&WealthTaxConfig>,
    canton_multiplier_percent: Decimal,
    municipality: &Municipality,
) -> WealthTaxResult {
    let gross = max_zero(gross_wealth);

    let Some(config) = config else {
        return WealthTaxResult::zeroed(gross);
    };
    if gross.is_zero() {
        return WealthTaxResult::zeroed(gross);
    }

    let allowance = match profile.civil_status {
        CivilStatus::Single => config.allowances.single,
        CivilStatus::Married => config.allowances.married,
    } + config.allowances.per_child * Decimal::from(profile.children);

    let taxable = max_zero(gross - allowance);
    let base = evaluate_wealth_brackets(taxable, &config.brackets);

    let cantonal = round_to_nickel(base * canton_multiplier_percent / Decimal::ONE_HUNDRED);
    let municipal =
        round_to_nickel(base * municipality.tax_multiplier_percent / Decimal::ONE_HUNDRED);

    // Wealth church tax follows the taxpayer's own religion only.
    let church_multiplier = municipality.church_tax.multiplier_for(profile.religion);
    let church = round_to_nickel(base * church_multiplier / Decimal::ONE_HUNDRED);

    let total = cantonal + municipal + church;
    let effective_rate = if gross > Decimal::ZERO {
        round_half_up(total / gross * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    WealthTaxResult {
        gross_wealth: gross,
        allowance,
        taxable_wealth: taxable,
        base_tax: round_to_nickel(base),
        cantonal,
        municipal,
        church,
        total,
        effective_rate,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ChurchTaxMultipliers, Religion, WealthAllowances, WealthTaxBracket};

    fn zurich_config() -> WealthTaxConfig {
        WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(77000),
                married: dec!(154000),
                per_child: dec!(15000),
            },
            brackets: vec![
                WealthTaxBracket {
                    min_wealth: dec!(0),
                    max_wealth: Some(dec!(318000)),
                    rate_permille: dec!(0.5),
                },
                WealthTaxBracket {
                    min_wealth: dec!(318000),
                    max_wealth: Some(dec!(705000)),
                    rate_permille: dec!(1.0),
                },
                WealthTaxBracket {
                    min_wealth: dec!(705000),
                    max_wealth: None,
                    rate_permille: dec!(1.5),
                },
            ],
        }
    }

    fn flat_config() -> WealthTaxConfig {
        WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(60000),
                married: dec!(120000),
                per_child: dec!(20000),
            },
            brackets: vec![WealthTaxBracket {
                min_wealth: dec!(0),
                max_wealth: None,
                rate_permille: dec!(0.875),
            }],
        }
    }

    fn zurich_city() -> Municipality {
        Municipality {
            id: "zh-zurich".to_string(),
            name: "Zürich".to_string(),
            canton_code: "ZH".to_string(),
            tax_multiplier_percent: dec!(119),
            church_tax: ChurchTaxMultipliers {
                roman_catholic: dec!(10),
                protestant: dec!(10),
                christ_catholic: dec!(14),
            },
        }
    }

    fn profile(
        civil_status: CivilStatus,
        religion: Religion,
        children: u32,
    ) -> TaxpayerProfile {
        TaxpayerProfile {
            civil_status,
            canton_code: "ZH".to_string(),
            municipality_id: "zh-zurich".to_string(),
            religion,
            partner_religion: None,
            children,
            children_in_childcare: 0,
        }
    }

    // =========================================================================
    // calculate_wealth_tax tests
    // =========================================================================

    #[test]
    fn wealth_tax_for_single_in_zurich() {
        let config = zurich_config();
        let profile = profile(CivilStatus::Single, Religion::None, 0);

        let result = calculate_wealth_tax(
            &profile,
            dec!(500000),
            Some(&config),
            dec!(98),
            &zurich_city(),
        );

        // 500000 - 77000 = 423000 taxable; base 318000 * 0.5permille
        // + 105000 * 1.0permille = 159 + 105 = 264
        assert_eq!(result.taxable_wealth, dec!(423000));
        assert_eq!(result.base_tax, dec!(264.00));
        assert_eq!(result.cantonal, dec!(258.70));
        assert_eq!(result.municipal, dec!(314.15));
        assert_eq!(result.church, dec!(0.00));
        assert_eq!(result.total, dec!(572.85));
        assert_eq!(result.effective_rate, dec!(0.11));
    }

    #[test]
    fn wealth_tax_allowance_grows_with_family() {
        let config = zurich_config();
        let profile = profile(CivilStatus::Married, Religion::None, 2);

        let result = calculate_wealth_tax(
            &profile,
            dec!(500000),
            Some(&config),
            dec!(98),
            &zurich_city(),
        );

        // 154000 + 2 * 15000 = 184000
        assert_eq!(result.allowance, dec!(184000));
        assert_eq!(result.taxable_wealth, dec!(316000));
    }

    #[test]
    fn wealth_tax_includes_church_for_members() {
        let config = zurich_config();
        let profile = profile(CivilStatus::Single, Religion::RomanCatholic, 0);

        let result = calculate_wealth_tax(
            &profile,
            dec!(500000),
            Some(&config),
            dec!(98),
            &zurich_city(),
        );

        // 264 * 10% = 26.40
        assert_eq!(result.church, dec!(26.40));
        assert_eq!(result.total, dec!(599.25));
    }

    #[test]
    fn wealth_tax_flat_rate_canton() {
        let config = flat_config();
        let profile = TaxpayerProfile {
            canton_code: "LU".to_string(),
            municipality_id: "lu-luzern".to_string(),
            ..profile(CivilStatus::Single, Religion::None, 0)
        };
        let municipality = Municipality {
            id: "lu-luzern".to_string(),
            name: "Luzern".to_string(),
            canton_code: "LU".to_string(),
            tax_multiplier_percent: dec!(175),
            church_tax: ChurchTaxMultipliers {
                roman_catholic: dec!(25),
                protestant: dec!(25),
                christ_catholic: dec!(30),
            },
        };

        let result = calculate_wealth_tax(
            &profile,
            dec!(300000),
            Some(&config),
            dec!(155),
            &municipality,
        );

        // 240000 * 0.875permille = 210 base; 210 * 155% = 325.50;
        // 210 * 175% = 367.50
        assert_eq!(result.base_tax, dec!(210.00));
        assert_eq!(result.cantonal, dec!(325.50));
        assert_eq!(result.municipal, dec!(367.50));
    }

    #[test]
    fn wealth_below_allowance_owes_nothing() {
        let config = zurich_config();
        let profile = profile(CivilStatus::Single, Religion::None, 0);

        let result = calculate_wealth_tax(
            &profile,
            dec!(50000),
            Some(&config),
            dec!(98),
            &zurich_city(),
        );

        assert_eq!(result.taxable_wealth, dec!(0));
        assert_eq!(result.total, dec!(0));
        assert_eq!(result.effective_rate, dec!(0.00));
    }

    #[test]
    fn canton_without_wealth_tax_yields_zero() {
        let profile = profile(CivilStatus::Single, Religion::None, 0);

        let result = calculate_wealth_tax(
            &profile,
            dec!(500000),
            None,
            dec!(98),
            &zurich_city(),
        );

        assert_eq!(result, WealthTaxResult::zeroed(dec!(500000)));
    }

    #[test]
    fn negative_wealth_is_treated_as_none() {
        let config = zurich_config();
        let profile = profile(CivilStatus::Single, Religion::None, 0);

        let result = calculate_wealth_tax(
            &profile,
            dec!(-10000),
            Some(&config),
            dec!(98),
            &zurich_city(),
        );

        assert_eq!(result, WealthTaxResult::zeroed(dec!(0)));
    }
}
