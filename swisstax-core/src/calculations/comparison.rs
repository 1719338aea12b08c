//! Ranking of per-municipality results.
//!
//! The comparison entry points on [`crate::TaxCalculator`] produce one raw
//! result per municipality and hand the whole set to these functions, which
//! sort, assign 1-based ranks and fill in the relative differences. Ranks
//! and differences are only meaningful within the set they were computed
//! for.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{BudgetComparisonResult, TaxComparisonResult};

/// Sorts ascending by total tax and fills ranking and difference fields.
///
/// The sort is stable, so municipalities with equal totals keep their
/// input order.
pub fn rank_tax_results(mut results: Vec<TaxComparisonResult>) -> Vec<TaxComparisonResult> {
    if results.is_empty() {
        return results;
    }

    results.sort_by(|a, b| a.breakdown.total_tax.cmp(&b.breakdown.total_tax));

    let cheapest = results[0].breakdown.total_tax;
    let sum: Decimal = results.iter().map(|r| r.breakdown.total_tax).sum();
    let average = sum / Decimal::from(results.len() as u64);

    for (index, result) in results.iter_mut().enumerate() {
        result.ranking = index + 1;
        result.difference_from_cheapest = result.breakdown.total_tax - cheapest;
        result.difference_from_average = round_half_up(result.breakdown.total_tax - average);
    }

    results
}

/// Sorts descending by monthly disposable income and fills ranking and
/// difference fields.
pub fn rank_budget_results(
    mut results: Vec<BudgetComparisonResult>,
) -> Vec<BudgetComparisonResult> {
    if results.is_empty() {
        return results;
    }

    results.sort_by(|a, b| {
        b.budget
            .monthly_disposable_income
            .cmp(&a.budget.monthly_disposable_income)
    });

    let best = results[0].budget.monthly_disposable_income;
    let sum: Decimal = results
        .iter()
        .map(|r| r.budget.monthly_disposable_income)
        .sum();
    let average = sum / Decimal::from(results.len() as u64);

    for (index, result) in results.iter_mut().enumerate() {
        result.ranking = index + 1;
        result.difference_from_best = result.budget.monthly_disposable_income - best;
        result.difference_from_average =
            round_half_up(result.budget.monthly_disposable_income - average);
    }

    results
}
