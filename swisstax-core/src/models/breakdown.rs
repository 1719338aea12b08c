use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::deductions::DeductionBreakdown;

/// Tax owed at one jurisdiction level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLevelResult {
    /// Final tax at this level, rounded down to the nearest 0.05.
    pub tax: Decimal,

    /// Multiplier applied to the base tax, as a percentage. The federal
    /// level carries 100 since no multiplier applies there.
    pub multiplier_percent: Decimal,
}

/// Wealth tax result across all levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthTaxResult {
    pub gross_wealth: Decimal,

    /// Tax-free allowance applied for the household.
    pub allowance: Decimal,

    /// Wealth remaining after the allowance, floored at zero.
    pub taxable_wealth: Decimal,

    /// Cumulative base tax before multipliers.
    pub base_tax: Decimal,

    pub cantonal: Decimal,

    pub municipal: Decimal,

    pub church: Decimal,

    pub total: Decimal,

    /// Total wealth tax as a percentage of gross wealth; zero when there is
    /// no gross wealth.
    pub effective_rate: Decimal,
}

impl WealthTaxResult {
    /// All-zero result for cantons without a wealth tax or taxpayers
    /// without wealth.
    pub fn zeroed(gross_wealth: Decimal) -> Self {
        Self {
            gross_wealth,
            allowance: Decimal::ZERO,
            taxable_wealth: Decimal::ZERO,
            base_tax: Decimal::ZERO,
            cantonal: Decimal::ZERO,
            municipal: Decimal::ZERO,
            church: Decimal::ZERO,
            total: Decimal::ZERO,
            effective_rate: Decimal::ZERO,
        }
    }
}

/// Complete result of one tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub gross_income: Decimal,

    /// Deductions applied under federal limits.
    pub federal_deductions: DeductionBreakdown,

    /// Deductions applied under the canton's limits.
    pub cantonal_deductions: DeductionBreakdown,

    /// Taxable income for the federal tariff (before the floor-to-100 step).
    pub taxable_income_federal: Decimal,

    /// Taxable income for the cantonal tariff.
    pub taxable_income_cantonal: Decimal,

    pub federal: TaxLevelResult,

    pub cantonal: TaxLevelResult,

    pub municipal: TaxLevelResult,

    pub church: TaxLevelResult,

    pub wealth: WealthTaxResult,

    /// Sum of the four income tax levels.
    pub total_income_tax: Decimal,

    /// Income tax plus wealth tax.
    pub total_tax: Decimal,

    /// Total tax as a percentage of gross income; zero when there is no
    /// gross income.
    pub effective_rate: Decimal,

    /// Combined marginal rate on the next unit of income: the federal
    /// bracket rate plus the cantonal bracket rate scaled by the cantonal
    /// and municipal multipliers. Church and wealth tax are excluded.
    pub marginal_rate: Decimal,

    /// Gross income minus total tax.
    pub net_income: Decimal,
}
