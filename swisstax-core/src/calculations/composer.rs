//! The tax composer: one input, one complete breakdown.
//!
//! [`TaxCalculator`] borrows a [`TaxDataset`] and assembles the federal,
//! cantonal, municipal, church and wealth taxes for one taxpayer into a
//! [`TaxBreakdown`]. The cantonal bracket lookup happens once; its
//! unrounded base tax is shared by the cantonal, municipal and church
//! levels, each of which applies its own multiplier and is rounded down to
//! 0.05 CHF independently.
//!
//! The comparison surfaces re-run the same composition across every
//! municipality in the dataset and rank the results.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

use crate::calculations::brackets::{BracketMatch, evaluate_income_brackets};
use crate::calculations::budget::calculate_budget;
use crate::calculations::common::{floor_to_hundred, max_zero, round_half_up, round_to_nickel};
use crate::calculations::comparison::{rank_budget_results, rank_tax_results};
use crate::calculations::deductions::DeductionCalculator;
use crate::calculations::wealth::calculate_wealth_tax;
use crate::dataset::TaxDataset;
use crate::models::{
    BudgetComparisonResult, BudgetInputs, CantonalTaxConfig, CivilStatus, DeductionBreakdown,
    Municipality, TaxBracket, TaxBreakdown, TaxCalculationInput, TaxComparisonResult,
    TaxLevelResult, TaxpayerProfile,
};

/// A jurisdiction in the input could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxCalculationError {
    #[error("unknown canton code: {0}")]
    UnknownCanton(String),

    #[error("unknown municipality id: {0}")]
    UnknownMunicipality(String),
}

/// Calculates complete tax breakdowns against a borrowed dataset.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    dataset: &'a TaxDataset,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(dataset: &'a TaxDataset) -> Self {
        Self { dataset }
    }

    /// Calculates the full breakdown for the taxpayer's own jurisdiction.
    pub fn calculate(
        &self,
        input: &TaxCalculationInput,
    ) -> Result<TaxBreakdown, TaxCalculationError> {
        let profile = &input.taxpayer;

        let canton = self
            .dataset
            .canton(&profile.canton_code)
            .ok_or_else(|| TaxCalculationError::UnknownCanton(profile.canton_code.clone()))?;
        let municipality = self.dataset.municipality(&profile.municipality_id).ok_or_else(|| {
            TaxCalculationError::UnknownMunicipality(profile.municipality_id.clone())
        })?;

        Ok(self.compose(input, canton, municipality))
    }

    /// Variant for bulk comparison: overrides the taxpayer's jurisdiction
    /// and returns `None` instead of failing when it cannot be resolved.
    pub fn calculate_for_comparison(
        &self,
        input: &TaxCalculationInput,
        canton_code: &str,
        municipality_id: &str,
    ) -> Option<TaxBreakdown> {
        let canton = self.dataset.canton(canton_code)?;
        let municipality = self.dataset.municipality(municipality_id)?;

        let mut relocated = input.clone();
        relocated.taxpayer.canton_code = canton_code.to_string();
        relocated.taxpayer.municipality_id = municipality_id.to_string();

        Some(self.compose(&relocated, canton, municipality))
    }

    /// Runs the calculation in every municipality of the dataset and ranks
    /// the results by total tax. Municipalities whose jurisdiction cannot
    /// be resolved are skipped.
    pub fn compare_municipalities(
        &self,
        input: &TaxCalculationInput,
    ) -> Vec<TaxComparisonResult> {
        let mut results = Vec::with_capacity(self.dataset.municipalities().len());

        for municipality in self.dataset.municipalities() {
            let Some(breakdown) =
                self.calculate_for_comparison(input, &municipality.canton_code, &municipality.id)
            else {
                warn!(
                    municipality = %municipality.id,
                    canton = %municipality.canton_code,
                    "skipping municipality with unresolvable jurisdiction"
                );
                continue;
            };

            results.push(TaxComparisonResult {
                canton_code: municipality.canton_code.clone(),
                municipality_id: municipality.id.clone(),
                municipality_name: municipality.name.clone(),
                breakdown,
                ranking: 0,
                difference_from_cheapest: Decimal::ZERO,
                difference_from_average: Decimal::ZERO,
            });
        }

        rank_tax_results(results)
    }

    /// Runs the calculation and the monthly budget in every municipality
    /// and ranks the results by disposable income. Rent, adult health
    /// insurance and childcare are replaced with the canton's
    /// cost-of-living estimates where available.
    pub fn compare_budgets(
        &self,
        input: &TaxCalculationInput,
        budget: &BudgetInputs,
    ) -> Vec<BudgetComparisonResult> {
        let mut results = Vec::with_capacity(self.dataset.municipalities().len());

        for municipality in self.dataset.municipalities() {
            let Some(breakdown) =
                self.calculate_for_comparison(input, &municipality.canton_code, &municipality.id)
            else {
                warn!(
                    municipality = %municipality.id,
                    canton = %municipality.canton_code,
                    "skipping municipality with unresolvable jurisdiction"
                );
                continue;
            };

            let monthly_net_income = round_half_up(breakdown.net_income / Decimal::from(12));
            let localized = self.localized_budget(budget, &municipality.canton_code, &input.taxpayer);
            let evaluated = calculate_budget(&localized, monthly_net_income);

            results.push(BudgetComparisonResult {
                canton_code: municipality.canton_code.clone(),
                municipality_id: municipality.id.clone(),
                municipality_name: municipality.name.clone(),
                monthly_net_income,
                budget: evaluated,
                ranking: 0,
                difference_from_best: Decimal::ZERO,
                difference_from_average: Decimal::ZERO,
            });
        }

        rank_budget_results(results)
    }

    fn compose(
        &self,
        input: &TaxCalculationInput,
        canton: &CantonalTaxConfig,
        municipality: &Municipality,
    ) -> TaxBreakdown {
        let profile = &input.taxpayer;
        let income = &input.income;
        let gross = income.gross_income;

        let federal_config = self.dataset.federal();
        let contributions = self.dataset.contributions();

        let (federal_deductions, cantonal_deductions) = if input.enable_deductions {
            let federal = DeductionCalculator::new(&federal_config.deduction_limits, contributions)
                .calculate(profile, income, &input.deductions);
            let cantonal = DeductionCalculator::new(&canton.deduction_limits, contributions)
                .calculate(profile, income, &input.deductions);
            (federal, cantonal)
        } else {
            (DeductionBreakdown::zeroed(), DeductionBreakdown::zeroed())
        };

        let taxable_income_federal = max_zero(gross - federal_deductions.total);
        let taxable_income_cantonal = max_zero(gross - cantonal_deductions.total);

        // Federal: taxable income floored to full hundreds, bracket lookup,
        // per-child reduction off the tax itself.
        let federal_tariff = federal_config.tariffs.for_status(profile.civil_status);
        let federal_match =
            evaluate_income_brackets(floor_to_hundred(taxable_income_federal), federal_tariff);
        let child_reduction =
            federal_config.child_tax_reduction * Decimal::from(profile.children);
        let federal_tax = round_to_nickel(max_zero(federal_match.tax - child_reduction));

        // One cantonal bracket lookup; three levels ride its base.
        let cantonal_tariff = canton.tariffs.for_status(profile.civil_status);
        let cantonal_match = evaluate_income_brackets(taxable_income_cantonal, cantonal_tariff);
        let cantonal_tax = round_to_nickel(
            cantonal_match.tax * canton.tax_multiplier_percent / Decimal::ONE_HUNDRED,
        );
        let municipal_tax = round_to_nickel(
            cantonal_match.tax * municipality.tax_multiplier_percent / Decimal::ONE_HUNDRED,
        );
        let (church_tax, church_multiplier) = evaluate_church_tax(
            profile,
            municipality,
            &cantonal_match,
            taxable_income_cantonal,
            cantonal_tariff,
        );

        let wealth = calculate_wealth_tax(
            profile,
            income.gross_wealth,
            canton.wealth_tax.as_ref(),
            canton.tax_multiplier_percent,
            municipality,
        );

        let total_income_tax = federal_tax + cantonal_tax + municipal_tax + church_tax;
        let total_tax = total_income_tax + wealth.total;

        let effective_rate = if gross > Decimal::ZERO {
            round_half_up(total_tax / gross * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        };
        // Church and wealth tax are excluded from the marginal rate.
        let marginal_rate = round_half_up(
            federal_match.marginal_rate
                + cantonal_match.marginal_rate
                    * (canton.tax_multiplier_percent + municipality.tax_multiplier_percent)
                    / Decimal::ONE_HUNDRED,
        );

        TaxBreakdown {
            gross_income: gross,
            federal_deductions,
            cantonal_deductions,
            taxable_income_federal,
            taxable_income_cantonal,
            federal: TaxLevelResult {
                tax: federal_tax,
                multiplier_percent: Decimal::ONE_HUNDRED,
            },
            cantonal: TaxLevelResult {
                tax: cantonal_tax,
                multiplier_percent: canton.tax_multiplier_percent,
            },
            municipal: TaxLevelResult {
                tax: municipal_tax,
                multiplier_percent: municipality.tax_multiplier_percent,
            },
            church: TaxLevelResult {
                tax: church_tax,
                multiplier_percent: church_multiplier,
            },
            wealth,
            total_income_tax,
            total_tax,
            effective_rate,
            marginal_rate,
            net_income: gross - total_tax,
        }
    }

    fn localized_budget(
        &self,
        base: &BudgetInputs,
        canton_code: &str,
        profile: &TaxpayerProfile,
    ) -> BudgetInputs {
        let Some(costs) = self.dataset.cost_of_living(canton_code) else {
            return base.clone();
        };

        let mut localized = base.clone();
        localized.housing.rent = costs.monthly_rent;
        localized.healthcare.insurance = costs.monthly_health_insurance_adult
            * Decimal::from(profile.civil_status.adults());
        localized.children.childcare = costs.monthly_childcare_per_child
            * Decimal::from(profile.effective_children_in_childcare());
        localized
    }
}

/// Church tax on the shared cantonal base, with the married-couple
/// different-religion top-up.
///
/// When the spouses belong to different recognized churches, the partner's
/// share is approximated by taxing half the cantonal taxable income under
/// the partner's multiplier and adding it to the primary figure. The sum is
/// nickel-rounded once.
fn evaluate_church_tax(
    profile: &TaxpayerProfile,
    municipality: &Municipality,
    cantonal_match: &BracketMatch,
    taxable_income_cantonal: Decimal,
    cantonal_tariff: &[TaxBracket],
) -> (Decimal, Decimal) {
    let own_multiplier = municipality.church_tax.multiplier_for(profile.religion);
    let mut church = cantonal_match.tax * own_multiplier / Decimal::ONE_HUNDRED;

    if profile.civil_status == CivilStatus::Married {
        if let Some(partner_religion) = profile.partner_religion {
            if partner_religion != profile.religion {
                let partner_multiplier =
                    municipality.church_tax.multiplier_for(partner_religion);
                let half_base = evaluate_income_brackets(
                    taxable_income_cantonal / Decimal::from(2),
                    cantonal_tariff,
                );
                church += half_base.tax * partner_multiplier / Decimal::ONE_HUNDRED;
            }
        }
    }

    (round_to_nickel(church), own_multiplier)
}
