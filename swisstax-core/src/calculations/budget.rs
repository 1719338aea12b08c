//! Monthly household budget evaluation.
//!
//! Takes the monthly net income produced by a tax calculation and the
//! household's expense categories, and evaluates the result against the
//! usual Swiss budget-advice guidelines (housing at most a third of net
//! income, a savings rate of at least 10%, and so on). Savings count as an
//! allocated category, so a balanced budget is one whose disposable income
//! after the savings allocation is not negative.

use rust_decimal::Decimal;

use crate::calculations::common::round_half_up;
use crate::models::{BudgetBreakdown, BudgetGuideline, BudgetInputs, GuidelineStatus};

/// Evaluates a monthly budget against net income.
pub fn calculate_budget(
    inputs: &BudgetInputs,
    monthly_net_income: Decimal,
) -> BudgetBreakdown {
    let housing = inputs.housing.total();
    let healthcare = inputs.healthcare.total();
    let children = inputs.children.total();

    let monthly_expenses = housing
        + healthcare
        + children
        + inputs.transport
        + inputs.food
        + inputs.telecom
        + inputs.insurance
        + inputs.personal
        + inputs.savings
        + inputs.other;
    let monthly_disposable_income = monthly_net_income - monthly_expenses;

    let ratio = |amount: Decimal| -> Decimal {
        if monthly_net_income > Decimal::ZERO {
            round_half_up(amount / monthly_net_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    };

    let housing_ratio = ratio(housing);
    let guidelines = vec![
        spending_guideline("housing", housing_ratio, Decimal::from(30), Decimal::from(35)),
        spending_guideline("transport", ratio(inputs.transport), Decimal::from(15), Decimal::from(20)),
        spending_guideline("food", ratio(inputs.food), Decimal::from(15), Decimal::from(20)),
        spending_guideline(
            "insurance",
            ratio(healthcare + inputs.insurance),
            Decimal::from(12),
            Decimal::from(18),
        ),
        savings_guideline(ratio(inputs.savings), Decimal::from(10), Decimal::from(5)),
    ];

    let mut suggestions: Vec<String> = guidelines
        .iter()
        .filter(|guideline| guideline.status != GuidelineStatus::Good)
        .map(suggestion_for)
        .collect();
    if monthly_disposable_income < Decimal::ZERO {
        suggestions.push(format!(
            "Expenses exceed net income by CHF {} per month; the budget runs a deficit",
            -monthly_disposable_income
        ));
    }

    BudgetBreakdown {
        monthly_net_income,
        housing,
        healthcare,
        children,
        transport: inputs.transport,
        food: inputs.food,
        telecom: inputs.telecom,
        insurance: inputs.insurance,
        personal: inputs.personal,
        savings: inputs.savings,
        other: inputs.other,
        monthly_expenses,
        monthly_disposable_income,
        housing_ratio,
        guidelines,
        suggestions,
        is_balanced: monthly_disposable_income >= Decimal::ZERO,
    }
}

/// Guideline for an expense category: the limits are spending ceilings.
fn spending_guideline(
    category: &str,
    ratio: Decimal,
    warning_limit: Decimal,
    over_limit: Decimal,
) -> BudgetGuideline {
    let status = if ratio <= warning_limit {
        GuidelineStatus::Good
    } else if ratio <= over_limit {
        GuidelineStatus::Warning
    } else {
        GuidelineStatus::Over
    };

    BudgetGuideline {
        category: category.to_string(),
        ratio,
        warning_limit,
        over_limit,
        status,
        message: format!(
            "{category} takes {ratio}% of net income (guideline: at most {warning_limit}%)"
        ),
    }
}

/// The savings guideline is a floor, so the comparison is inverted.
fn savings_guideline(
    ratio: Decimal,
    warning_limit: Decimal,
    over_limit: Decimal,
) -> BudgetGuideline {
    let status = if ratio >= warning_limit {
        GuidelineStatus::Good
    } else if ratio >= over_limit {
        GuidelineStatus::Warning
    } else {
        GuidelineStatus::Over
    };

    BudgetGuideline {
        category: "savings".to_string(),
        ratio,
        warning_limit,
        over_limit,
        status,
        message: format!(
            "savings rate is {ratio}% of net income (guideline: at least {warning_limit}%)"
        ),
    }
}

fn suggestion_for(guideline: &BudgetGuideline) -> String {
    match guideline.category.as_str() {
        "housing" => {
            "Housing costs are above the guideline; consider a cheaper apartment or shared housing"
                .to_string()
        }
        "transport" => {
            "Transport costs are above the guideline; check season tickets or shared mobility"
                .to_string()
        }
        "food" => {
            "Food costs are above the guideline; meal planning usually brings these down"
                .to_string()
        }
        "insurance" => {
            "Insurance and healthcare costs are above the guideline; compare health insurance deductibles and providers"
                .to_string()
        }
        "savings" => {
            "Savings are below the recommended rate; aim for at least 10% of net income"
                .to_string()
        }
        other => format!("{other} is outside the guideline"),
    }
}
