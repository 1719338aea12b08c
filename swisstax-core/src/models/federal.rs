use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::bracket::Tariffs;
use crate::models::canton::DeductionLimits;

/// Unemployment insurance (ALV) contribution rates.
///
/// The base rate applies up to the annual ceiling; income above it is only
/// charged the solidarity rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlvRates {
    /// Employee share below the ceiling, as a percentage.
    pub base_percent: Decimal,

    /// Annual income ceiling for the base rate.
    pub ceiling: Decimal,

    /// Employee share above the ceiling, as a percentage.
    pub solidarity_percent: Decimal,
}

/// One band of the degressive self-employed AHV scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegressiveRateBand {
    /// Lower income bound (inclusive).
    pub min_income: Decimal,

    /// Upper income bound (exclusive).
    pub max_income: Decimal,

    /// Contribution rate applied to the whole income, as a percentage.
    pub rate_percent: Decimal,
}

/// The degressive AHV/IV/EO contribution scale for the self-employed.
///
/// Below `lower_threshold` a flat minimum contribution is due; from
/// `upper_threshold` upward the full rate applies; in between, the matching
/// band's rate applies to the whole income (not just the slice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfEmployedAhvScale {
    pub minimum_contribution: Decimal,

    pub lower_threshold: Decimal,

    pub upper_threshold: Decimal,

    /// Rate at or above `upper_threshold`, as a percentage.
    pub full_rate_percent: Decimal,

    /// Degressive bands covering `[lower_threshold, upper_threshold)`.
    pub bands: Vec<DegressiveRateBand>,
}

/// Statutory social insurance rates shared by every jurisdiction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionConfig {
    /// Employee AHV/IV/EO share of gross salary, as a percentage.
    pub ahv_iv_eo_employee_percent: Decimal,

    pub alv: AlvRates,

    pub self_employed: SelfEmployedAhvScale,
}

/// Direct federal tax configuration.
///
/// The confederation levies no wealth tax and no multiplier; its tariff
/// result is the final federal tax before the per-child reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxConfig {
    pub tariffs: Tariffs,

    /// Flat reduction of the federal tax amount per dependent child.
    pub child_tax_reduction: Decimal,

    pub deduction_limits: DeductionLimits,
}
