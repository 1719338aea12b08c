use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Monthly housing costs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingCosts {
    pub rent: Decimal,
    pub utilities: Decimal,
}

impl HousingCosts {
    pub fn total(&self) -> Decimal {
        self.rent + self.utilities
    }
}

/// Monthly healthcare costs for the adults of the household.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthcareCosts {
    pub insurance: Decimal,
    pub out_of_pocket: Decimal,
}

impl HealthcareCosts {
    pub fn total(&self) -> Decimal {
        self.insurance + self.out_of_pocket
    }
}

/// Monthly child-related costs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildCosts {
    pub health_insurance: Decimal,
    pub childcare: Decimal,
    pub food: Decimal,
    pub clothing: Decimal,
    pub education: Decimal,
}

impl ChildCosts {
    pub fn total(&self) -> Decimal {
        self.health_insurance + self.childcare + self.food + self.clothing + self.education
    }
}

/// Monthly household budget as entered by the user.
///
/// Savings are treated as an allocated category like any other expense;
/// disposable income is what remains after all categories including the
/// savings allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetInputs {
    pub housing: HousingCosts,
    pub healthcare: HealthcareCosts,
    pub children: ChildCosts,
    pub transport: Decimal,
    pub food: Decimal,
    pub telecom: Decimal,
    pub insurance: Decimal,
    pub personal: Decimal,
    pub savings: Decimal,
    pub other: Decimal,
}

/// Outcome of one guideline check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuidelineStatus {
    Good,
    Warning,
    Over,
}

/// A single spending guideline evaluated against net income.
///
/// For expense categories the limits are ceilings; for the savings
/// guideline they are floors and the comparison is inverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetGuideline {
    pub category: String,

    /// Share of net income spent on this category, as a percentage.
    pub ratio: Decimal,

    pub warning_limit: Decimal,

    pub over_limit: Decimal,

    pub status: GuidelineStatus,

    /// Human-readable evaluation, e.g. for direct display in a UI.
    pub message: String,
}

/// Evaluated monthly budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetBreakdown {
    pub monthly_net_income: Decimal,

    pub housing: Decimal,
    pub healthcare: Decimal,
    pub children: Decimal,
    pub transport: Decimal,
    pub food: Decimal,
    pub telecom: Decimal,
    pub insurance: Decimal,
    pub personal: Decimal,
    pub savings: Decimal,
    pub other: Decimal,

    /// Sum of all categories including the savings allocation.
    pub monthly_expenses: Decimal,

    /// Net income minus expenses; negative for a deficit budget.
    pub monthly_disposable_income: Decimal,

    /// Housing costs as a percentage of net income; zero when net income
    /// is not positive.
    pub housing_ratio: Decimal,

    pub guidelines: Vec<BudgetGuideline>,

    pub suggestions: Vec<String>,

    /// True when disposable income is not negative.
    pub is_balanced: bool,
}
