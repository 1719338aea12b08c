use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::bracket::{Tariffs, WealthTaxBracket};

/// Caps for professional expense deductions (category 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalExpenseLimits {
    /// Flat-rate allowance granted instead of itemized expenses.
    pub flat_rate: Decimal,

    pub commuting_max: Decimal,

    pub meals_max: Decimal,

    pub other_max: Decimal,
}

/// Caps for insurance premium deductions (category 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePremiumLimits {
    pub single_max: Decimal,

    pub married_max: Decimal,

    /// Additional allowance per dependent child.
    pub per_child: Decimal,
}

/// Statutory pillar 3a tier caps (category 4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pillar3aLimits {
    /// Cap for taxpayers affiliated with an employer pension fund.
    pub with_pension_max: Decimal,

    /// Cap for taxpayers without an employer pension fund.
    pub without_pension_max: Decimal,
}

/// Flat social deduction amounts for cantons that grant one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialDeductionAmounts {
    pub single: Decimal,
    pub married: Decimal,
}

/// Caps and flat amounts for family-situation deductions (category 5).
///
/// Optional fields model deductions only some cantons grant; `None` means
/// the jurisdiction does not offer that deduction at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDeductionLimits {
    /// Flat deduction for married taxpayers.
    pub married_deduction: Decimal,

    /// Flat deduction when both spouses earn employment income.
    pub dual_earner: Option<Decimal>,

    /// Flat deduction per dependent child.
    pub per_child: Decimal,

    /// Cap on childcare expenses, per child in childcare.
    pub childcare_max_per_child: Decimal,

    /// Flat per-child amount replacing the childcare expense deduction when
    /// a parent cares for the children at home.
    pub self_care_per_child: Option<Decimal>,

    /// Flat deduction per child aged 15+ in education.
    pub child_education_per_child: Option<Decimal>,

    /// General social deduction by civil status.
    pub social: Option<SocialDeductionAmounts>,
}

/// Tenant's rent deduction rule for cantons that grant one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentDeductionRule {
    /// Deductible share of annual rent, as a percentage.
    pub percent: Decimal,

    /// Absolute cap on the rent deduction.
    pub max_amount: Decimal,
}

/// Caps for remaining deductions (category 6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDeductionLimits {
    /// Cap on job-related further education costs.
    pub education_max: Decimal,

    pub rent: Option<RentDeductionRule>,
}

/// Per-jurisdiction deduction caps, one set per canton plus one federal set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLimits {
    pub professional: ProfessionalExpenseLimits,
    pub insurance: InsurancePremiumLimits,
    pub pillar_3a: Pillar3aLimits,
    pub personal: PersonalDeductionLimits,
    pub other: OtherDeductionLimits,
}

/// Tax-free wealth allowances subtracted before the wealth tariff applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthAllowances {
    pub single: Decimal,
    pub married: Decimal,
    pub per_child: Decimal,
}

/// A canton's wealth tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthTaxConfig {
    pub allowances: WealthAllowances,

    /// Cumulative brackets over taxable wealth (after allowances).
    pub brackets: Vec<WealthTaxBracket>,
}

/// Monthly cost-of-living estimates for a canton, used by the budget
/// comparison to substitute location-dependent expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostOfLiving {
    /// Reference rent for a family apartment.
    pub monthly_rent: Decimal,

    /// Average adult health insurance premium.
    pub monthly_health_insurance_adult: Decimal,

    /// Average full-time childcare cost per child.
    pub monthly_childcare_per_child: Decimal,
}

/// Complete tax configuration of one canton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantonalTaxConfig {
    pub name: String,

    /// Cantonal multiplier on the base tax, as a percentage (98 = 98%).
    pub tax_multiplier_percent: Decimal,

    pub tariffs: Tariffs,

    /// Cantons without a modelled wealth tax carry `None`; wealth tax is
    /// then zero for their residents.
    pub wealth_tax: Option<WealthTaxConfig>,

    pub deduction_limits: DeductionLimits,
}
