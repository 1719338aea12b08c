use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::taxpayer::TaxpayerProfile;

/// Annual income and wealth figures entered by the taxpayer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeInputs {
    /// Gross annual employment income, or net annual self-employment income
    /// when `is_self_employed` is set.
    pub gross_income: Decimal,

    /// Self-employed taxpayers pay degressive AHV instead of employee
    /// AHV/ALV contributions.
    pub is_self_employed: bool,

    /// Gross taxable wealth before allowances.
    pub gross_wealth: Decimal,
}

/// Claimed professional expenses (category 2).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalExpenses {
    /// Take the jurisdiction's flat-rate allowance instead of itemizing.
    pub use_flat_rate: bool,

    /// Annual commuting costs.
    pub commuting: Decimal,

    /// Additional meal costs for days worked away from home.
    pub meals: Decimal,

    /// Other actual professional expenses.
    pub other: Decimal,
}

/// Claimed insurance premiums (category 3).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsurancePremiums {
    /// Annual health insurance premiums for the household.
    pub health: Decimal,

    /// Other deductible premiums (life, accident).
    pub other: Decimal,
}

/// Claimed pension contributions (category 4).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionContributions {
    /// Voluntary pillar 2 purchases; deductible without a cap.
    pub pillar_2_purchases: Decimal,

    /// Pillar 3a contributions; capped at one of two statutory tiers.
    pub pillar_3a: Decimal,

    /// Whether the taxpayer is affiliated with an employer pension fund.
    /// Decides which pillar 3a tier applies.
    pub has_employer_pension: bool,
}

/// Family-situation toggles and amounts (category 5).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalCircumstances {
    /// Both spouses earn employment income (married couples only).
    pub both_spouses_employed: bool,

    /// Annual external childcare costs actually paid.
    pub childcare_costs: Decimal,

    /// Claim the canton's flat self-care amount per child instead of the
    /// childcare expense deduction. Mutually exclusive with childcare costs.
    pub use_self_care: bool,

    /// Children aged 15+ in education, for cantons granting an education
    /// deduction per child.
    pub children_in_education: u32,
}

/// Remaining deductible expenses (category 6).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherExpenses {
    /// Private debt interest paid.
    pub debt_interest: Decimal,

    /// Charitable donations.
    pub donations: Decimal,

    /// Out-of-pocket medical expenses.
    pub medical_expenses: Decimal,

    /// Alimony and support payments.
    pub alimony_paid: Decimal,

    /// Annual rent paid, for cantons granting a tenant's deduction.
    pub annual_rent: Decimal,

    /// Job-related further education costs.
    pub education_costs: Decimal,
}

/// Raw per-category deduction claims as the taxpayer enters them.
///
/// Social insurance contributions (category 1) are derived from income and
/// the statutory rates, so they carry no user inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInputs {
    pub professional: ProfessionalExpenses,
    pub insurance: InsurancePremiums,
    pub pension: PensionContributions,
    pub personal: PersonalCircumstances,
    pub other: OtherExpenses,
}

/// Complete input for one tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    /// Tax year the calculation refers to.
    pub year: i32,

    pub taxpayer: TaxpayerProfile,

    pub income: IncomeInputs,

    pub deductions: DeductionInputs,

    /// When false, both deduction breakdowns are all-zero and the gross
    /// income is taxed directly.
    pub enable_deductions: bool,
}
