use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::status::CivilStatus;

/// A single row of a progressive income tax tariff.
///
/// Brackets are stored sorted by `min_income`; the last bracket of a tariff
/// has `max_income` set to `None` and is open-ended. `base_amount` is the
/// accumulated tax owed at `min_income`, so a lookup never has to walk the
/// table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower income bound of the bracket (exclusive for matching).
    pub min_income: Decimal,

    /// Upper income bound (inclusive), or `None` for the top bracket.
    pub max_income: Option<Decimal>,

    /// Tax accumulated over all brackets below this one.
    pub base_amount: Decimal,

    /// Marginal rate inside this bracket, as a percentage (6.6 = 6.6%).
    pub rate_percent: Decimal,
}

/// A single row of a wealth tax tariff.
///
/// Unlike income brackets, wealth brackets carry no base amount: wealth tax
/// is evaluated cumulatively by walking the table and taxing the slice of
/// wealth falling into each bracket at that bracket's rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthTaxBracket {
    /// Lower wealth bound of the bracket.
    pub min_wealth: Decimal,

    /// Upper wealth bound, or `None` for the top bracket.
    pub max_wealth: Option<Decimal>,

    /// Rate for wealth inside this bracket, in per mille (0.5 = 0.05%).
    pub rate_permille: Decimal,
}

/// A pair of income tariffs split by civil status.
///
/// Every tariff-bearing jurisdiction (the confederation and each canton)
/// publishes separate schedules for single and married taxpayers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariffs {
    pub single: Vec<TaxBracket>,
    pub married: Vec<TaxBracket>,
}

impl Tariffs {
    /// Selects the schedule applicable to the given civil status.
    pub fn for_status(
        &self,
        status: CivilStatus,
    ) -> &[TaxBracket] {
        match status {
            CivilStatus::Single => &self.single,
            CivilStatus::Married => &self.married,
        }
    }
}
