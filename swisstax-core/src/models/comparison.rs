use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::breakdown::TaxBreakdown;
use crate::models::budget::BudgetBreakdown;

/// One municipality's row in a tax comparison, ranked by total tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparisonResult {
    pub canton_code: String,

    pub municipality_id: String,

    pub municipality_name: String,

    pub breakdown: TaxBreakdown,

    /// 1-based rank; 1 is the cheapest municipality.
    pub ranking: usize,

    /// Total tax here minus total tax in the cheapest municipality.
    pub difference_from_cheapest: Decimal,

    /// Total tax here minus the average over all compared municipalities.
    pub difference_from_average: Decimal,
}

/// One municipality's row in a budget comparison, ranked by disposable
/// income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetComparisonResult {
    pub canton_code: String,

    pub municipality_id: String,

    pub municipality_name: String,

    /// Monthly net income after taxes in this municipality.
    pub monthly_net_income: Decimal,

    pub budget: BudgetBreakdown,

    /// 1-based rank; 1 leaves the most disposable income.
    pub ranking: usize,

    /// Disposable income here minus the best municipality's (zero or
    /// negative).
    pub difference_from_best: Decimal,

    /// Disposable income here minus the average over all compared
    /// municipalities.
    pub difference_from_average: Decimal,
}
