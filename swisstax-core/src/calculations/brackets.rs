//! Progressive bracket evaluation for income and wealth tariffs.
//!
//! Two evaluation schemes exist side by side:
//!
//! * **Income tariffs** use base-amount lookup: the matching bracket's
//!   `base_amount` already contains the tax accumulated over all lower
//!   brackets, so the tax is `base + rate% × (amount − min)` in one step.
//! * **Wealth tariffs** carry no base amounts and are walked cumulatively:
//!   each bracket taxes the slice of wealth falling into it at that
//!   bracket's per-mille rate.
//!
//! Neither evaluator rounds; the five-centime rounding happens once per
//! jurisdiction level in the composer.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use swisstax_core::TaxBracket;
//! use swisstax_core::calculations::brackets::evaluate_income_brackets;
//!
//! let brackets = vec![
//!     TaxBracket {
//!         min_income: dec!(0),
//!         max_income: Some(dec!(15000)),
//!         base_amount: dec!(0),
//!         rate_percent: dec!(0),
//!     },
//!     TaxBracket {
//!         min_income: dec!(15000),
//!         max_income: None,
//!         base_amount: dec!(0),
//!         rate_percent: dec!(0.77),
//!     },
//! ];
//!
//! let result = evaluate_income_brackets(dec!(25000), &brackets);
//!
//! // 0 + (25000 - 15000) * 0.77% = 77
//! assert_eq!(result.tax, dec!(77.0000));
//! assert_eq!(result.marginal_rate, dec!(0.77));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::max_zero;
use crate::models::{TaxBracket, WealthTaxBracket};

/// Tax and marginal rate produced by an income tariff lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketMatch {
    /// Unrounded tax at the evaluated amount.
    pub tax: Decimal,

    /// Marginal rate of the matched bracket, as a percentage.
    pub marginal_rate: Decimal,
}

impl BracketMatch {
    fn zero() -> Self {
        Self {
            tax: Decimal::ZERO,
            marginal_rate: Decimal::ZERO,
        }
    }
}

/// Evaluates a progressive income tariff at the given amount.
///
/// Returns a zero match for non-positive amounts, for an empty tariff, and
/// when no bracket matches; a validated tariff always matches any positive
/// amount through its open-ended top bracket.
pub fn evaluate_income_brackets(
    amount: Decimal,
    brackets: &[TaxBracket],
) -> BracketMatch {
    if amount <= Decimal::ZERO {
        return BracketMatch::zero();
    }

    let Some(bracket) = brackets.iter().find(|b| {
        amount > b.min_income
            && (b.max_income.is_none() || amount <= b.max_income.unwrap_or(Decimal::MAX))
    }) else {
        return BracketMatch::zero();
    };

    let marginal_income = amount - bracket.min_income;
    let tax = bracket.base_amount + marginal_income * bracket.rate_percent / Decimal::ONE_HUNDRED;

    BracketMatch {
        tax: max_zero(tax),
        marginal_rate: bracket.rate_percent,
    }
}

/// Evaluates a wealth tariff cumulatively at the given taxable wealth.
///
/// Walks the brackets in order, taxing the slice of wealth inside each at
/// that bracket's per-mille rate, until the wealth is consumed. Returns the
/// unrounded base tax before multipliers.
pub fn evaluate_wealth_brackets(
    taxable_wealth: Decimal,
    brackets: &[WealthTaxBracket],
) -> Decimal {
    let mut remaining = max_zero(taxable_wealth);
    let mut tax = Decimal::ZERO;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let slice = match bracket.max_wealth {
            Some(max) => remaining.min(max - bracket.min_wealth),
            None => remaining,
        };

        tax += slice * bracket.rate_permille / Decimal::ONE_THOUSAND;
        remaining -= slice;
    }

    tax
}
