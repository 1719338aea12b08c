//! End-to-end calculations against the built-in 2025 tables.
//!
//! The expected figures were computed by hand from the bundled tariffs and
//! pin the whole pipeline: deductions, the federal floor-to-100 and child
//! reduction, per-level multiplier rounding, split church tax, wealth tax
//! and the comparison rankings.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swisstax_core::{
    BudgetInputs, ChildCosts, CivilStatus, DeductionInputs, GuidelineStatus, HealthcareCosts,
    HousingCosts, IncomeInputs, InsurancePremiums, OtherExpenses, PensionContributions,
    PersonalCircumstances, ProfessionalExpenses, Religion, TaxCalculationError,
    TaxCalculationInput, TaxCalculator, TaxpayerProfile,
};
use swisstax_data::builtin_dataset;

/// A single taxpayer in the given jurisdiction with deductions disabled.
fn single_input(canton: &str, municipality: &str, gross_income: Decimal) -> TaxCalculationInput {
    TaxCalculationInput {
        year: 2025,
        taxpayer: TaxpayerProfile {
            civil_status: CivilStatus::Single,
            canton_code: canton.to_string(),
            municipality_id: municipality.to_string(),
            religion: Religion::None,
            partner_religion: None,
            children: 0,
            children_in_childcare: 0,
        },
        income: IncomeInputs {
            gross_income,
            is_self_employed: false,
            gross_wealth: dec!(0),
        },
        deductions: DeductionInputs::default(),
        enable_deductions: false,
    }
}

#[test]
fn test_single_employee_in_zurich_without_deductions() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let breakdown = calculator
        .calculate(&single_input("ZH", "zh-zurich", dec!(100000)))
        .expect("calculation failed");

    assert_eq!(breakdown.taxable_income_federal, dec!(100000));
    assert_eq!(breakdown.taxable_income_cantonal, dec!(100000));

    assert_eq!(breakdown.federal.tax, dec!(2736.55));
    assert_eq!(breakdown.federal.multiplier_percent, dec!(100));
    assert_eq!(breakdown.cantonal.tax, dec!(6082.85));
    assert_eq!(breakdown.cantonal.multiplier_percent, dec!(98));
    assert_eq!(breakdown.municipal.tax, dec!(7386.30));
    assert_eq!(breakdown.municipal.multiplier_percent, dec!(119));
    assert_eq!(breakdown.church.tax, dec!(0));

    assert_eq!(breakdown.total_income_tax, dec!(16205.70));
    assert_eq!(breakdown.total_tax, dec!(16205.70));
    assert_eq!(breakdown.net_income, dec!(83794.30));
    assert_eq!(breakdown.effective_rate, dec!(16.21));
    assert_eq!(breakdown.marginal_rate, dec!(26.13));
}

#[test]
fn test_wealth_tax_for_single_zurich_resident() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let mut input = single_input("ZH", "zh-zurich", dec!(0));
    input.income.gross_wealth = dec!(500000);

    let breakdown = calculator.calculate(&input).expect("calculation failed");

    assert_eq!(breakdown.wealth.gross_wealth, dec!(500000));
    assert_eq!(breakdown.wealth.allowance, dec!(77000));
    assert_eq!(breakdown.wealth.taxable_wealth, dec!(423000));
    assert_eq!(breakdown.wealth.base_tax, dec!(264.00));
    assert_eq!(breakdown.wealth.cantonal, dec!(258.70));
    assert_eq!(breakdown.wealth.municipal, dec!(314.15));
    assert_eq!(breakdown.wealth.church, dec!(0));
    assert_eq!(breakdown.wealth.total, dec!(572.85));
    assert_eq!(breakdown.wealth.effective_rate, dec!(0.11));

    // No income, so the wealth tax is the entire bill.
    assert_eq!(breakdown.total_income_tax, dec!(0));
    assert_eq!(breakdown.total_tax, dec!(572.85));
    assert_eq!(breakdown.effective_rate, dec!(0));
}

#[test]
fn test_married_couple_with_split_church_tax() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let mut input = single_input("ZH", "zh-zurich", dec!(140000));
    input.taxpayer.civil_status = CivilStatus::Married;
    input.taxpayer.religion = Religion::RomanCatholic;
    input.taxpayer.partner_religion = Some(Religion::Protestant);

    let breakdown = calculator.calculate(&input).expect("calculation failed");

    assert_eq!(breakdown.federal.tax, dec!(4542.00));
    assert_eq!(breakdown.cantonal.tax, dec!(7952.70));
    assert_eq!(breakdown.municipal.tax, dec!(9656.85));

    // Each spouse owes their own denomination's multiplier on half the
    // household's base; the two shares round as one amount.
    assert_eq!(breakdown.church.tax, dec!(1075.10));
    assert_eq!(breakdown.church.multiplier_percent, dec!(10));

    assert_eq!(breakdown.total_tax, dec!(23226.65));
    assert_eq!(breakdown.net_income, dec!(116773.35));
    assert_eq!(breakdown.effective_rate, dec!(16.59));
    assert_eq!(breakdown.marginal_rate, dec!(28.53));
}

#[test]
fn test_self_employed_ahv_converges_with_taxable_income() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let mut input = single_input("ZH", "zh-zurich", dec!(48000));
    input.income.is_self_employed = true;
    input.enable_deductions = true;
    input.deductions.other.donations = dec!(3000);

    let breakdown = calculator.calculate(&input).expect("calculation failed");

    // The degressive contribution is computed on taxable income, which it
    // itself reduces; 3346.20 is the fixed point for net 48000.
    let social = &breakdown.federal_deductions.social_insurance;
    assert_eq!(social.ahv_iv_eo, dec!(3346.20));
    assert_eq!(social.alv, dec!(0));
    assert_eq!(social.total, dec!(3346.20));

    assert_eq!(breakdown.federal_deductions.total, dec!(6346.20));
    assert_eq!(breakdown.cantonal_deductions.total, dec!(6346.20));
    assert_eq!(breakdown.taxable_income_federal, dec!(41653.80));
    assert_eq!(breakdown.taxable_income_cantonal, dec!(41653.80));

    // The federal tariff runs on 41600 after the floor to full hundreds.
    assert_eq!(breakdown.federal.tax, dec!(214.50));
    assert_eq!(breakdown.cantonal.tax, dec!(1461.40));
    assert_eq!(breakdown.municipal.tax, dec!(1774.55));
    assert_eq!(breakdown.total_tax, dec!(3450.45));
    assert_eq!(breakdown.net_income, dec!(44549.55));
    assert_eq!(breakdown.effective_rate, dec!(7.19));
    assert_eq!(breakdown.marginal_rate, dec!(13.90));
}

#[test]
fn test_married_household_with_full_deductions() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let mut input = single_input("ZH", "zh-zurich", dec!(150000));
    input.taxpayer.civil_status = CivilStatus::Married;
    input.taxpayer.children = 2;
    input.taxpayer.children_in_childcare = 1;
    input.enable_deductions = true;
    input.deductions = DeductionInputs {
        professional: ProfessionalExpenses {
            use_flat_rate: true,
            ..Default::default()
        },
        insurance: InsurancePremiums {
            health: dec!(6000),
            other: dec!(500),
        },
        pension: PensionContributions {
            pillar_2_purchases: dec!(2000),
            pillar_3a: dec!(8000),
            has_employer_pension: true,
        },
        personal: PersonalCircumstances {
            both_spouses_employed: true,
            childcare_costs: dec!(12000),
            ..Default::default()
        },
        other: OtherExpenses {
            donations: dec!(500),
            ..Default::default()
        },
    };

    let breakdown = calculator.calculate(&input).expect("calculation failed");

    // Federal and cantonal limits differ, so the two breakdowns diverge.
    assert_eq!(breakdown.federal_deductions.total, dec!(70447.20));
    assert_eq!(breakdown.cantonal_deductions.total, dec!(69047.20));
    assert_eq!(breakdown.taxable_income_federal, dec!(79552.80));
    assert_eq!(breakdown.taxable_income_cantonal, dec!(80952.80));

    // ALV splits at the 148200 ceiling: 1.1% below it, 0.5% above.
    assert_eq!(
        breakdown.federal_deductions.social_insurance.alv,
        dec!(1639.20)
    );

    // 974.00 from the married tariff on 79500, minus two child reductions
    // of 263 each.
    assert_eq!(breakdown.federal.tax, dec!(448.00));
    assert_eq!(breakdown.cantonal.tax, dec!(3334.60));
    assert_eq!(breakdown.municipal.tax, dec!(4049.20));
    assert_eq!(breakdown.total_tax, dec!(7831.80));
    assert_eq!(breakdown.effective_rate, dec!(5.22));
    assert_eq!(breakdown.marginal_rate, dec!(19.19));
}

#[test]
fn test_identical_inputs_give_identical_results() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);
    let input = single_input("ZH", "zh-zurich", dec!(100000));

    let first = calculator.calculate(&input).expect("calculation failed");
    let second = calculator.calculate(&input).expect("calculation failed");

    assert_eq!(first, second);
}

#[test]
fn test_unknown_canton_is_an_error() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let err = calculator
        .calculate(&single_input("AG", "zh-zurich", dec!(80000)))
        .expect_err("AG is not in the built-in dataset");

    assert_eq!(err, TaxCalculationError::UnknownCanton("AG".to_string()));
}

#[test]
fn test_comparison_ranks_all_seventeen_municipalities() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let results = calculator.compare_municipalities(&single_input("ZH", "zh-zurich", dec!(100000)));

    assert_eq!(results.len(), 17);

    let order: Vec<&str> = results.iter().map(|r| r.municipality_id.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "zg-baar",
            "zg-zug",
            "zg-cham",
            "lu-luzern",
            "sg-rapperswil",
            "lu-kriens",
            "lu-emmen",
            "zh-kusnacht",
            "sg-stgallen",
            "sg-wil",
            "zh-uster",
            "zh-zurich",
            "zh-winterthur",
            "zh-dietikon",
            "be-bern",
            "be-biel",
            "be-thun",
        ]
    );

    let cheapest = &results[0];
    assert_eq!(cheapest.ranking, 1);
    assert_eq!(cheapest.canton_code, "ZG");
    assert_eq!(cheapest.breakdown.total_tax, dec!(7052.05));
    assert_eq!(cheapest.difference_from_cheapest, dec!(0));
    assert_eq!(cheapest.difference_from_average, dec!(-6900.26));

    let zurich = results
        .iter()
        .find(|r| r.municipality_id == "zh-zurich")
        .expect("zh-zurich missing from comparison");
    assert_eq!(zurich.ranking, 12);
    assert_eq!(zurich.breakdown.total_tax, dec!(16205.70));
    assert_eq!(zurich.difference_from_cheapest, dec!(9153.65));
    assert_eq!(zurich.difference_from_average, dec!(2253.39));

    let most_expensive = &results[16];
    assert_eq!(most_expensive.ranking, 17);
    assert_eq!(most_expensive.municipality_id, "be-thun");
    assert_eq!(most_expensive.breakdown.total_tax, dec!(20068.10));
    assert_eq!(most_expensive.difference_from_cheapest, dec!(13016.05));
    assert_eq!(most_expensive.difference_from_average, dec!(6115.79));
}

#[test]
fn test_budget_comparison_substitutes_local_costs() {
    let dataset = builtin_dataset();
    let calculator = TaxCalculator::new(&dataset);

    let mut input = single_input("ZH", "zh-zurich", dec!(140000));
    input.taxpayer.civil_status = CivilStatus::Married;
    input.taxpayer.religion = Religion::RomanCatholic;
    input.taxpayer.partner_religion = Some(Religion::Protestant);
    input.taxpayer.children = 2;
    input.taxpayer.children_in_childcare = 1;

    let budget = BudgetInputs {
        housing: HousingCosts {
            rent: dec!(2200),
            utilities: dec!(250),
        },
        healthcare: HealthcareCosts {
            insurance: dec!(800),
            out_of_pocket: dec!(150),
        },
        children: ChildCosts {
            health_insurance: dec!(200),
            childcare: dec!(1500),
            food: dec!(400),
            clothing: dec!(150),
            education: dec!(100),
        },
        transport: dec!(500),
        food: dec!(900),
        telecom: dec!(120),
        insurance: dec!(180),
        personal: dec!(400),
        savings: dec!(500),
        other: dec!(250),
    };

    let results = calculator.compare_budgets(&input, &budget);

    assert_eq!(results.len(), 17);

    let order: Vec<&str> = results.iter().map(|r| r.municipality_id.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "sg-rapperswil",
            "sg-stgallen",
            "sg-wil",
            "lu-luzern",
            "lu-kriens",
            "lu-emmen",
            "zg-baar",
            "zg-zug",
            "zg-cham",
            "be-bern",
            "be-biel",
            "be-thun",
            "zh-kusnacht",
            "zh-uster",
            "zh-zurich",
            "zh-winterthur",
            "zh-dietikon",
        ]
    );

    // Modest taxes and low reference costs put Rapperswil-Jona on top even
    // though Zug's municipalities tax far less.
    let best = &results[0];
    assert_eq!(best.ranking, 1);
    assert_eq!(best.municipality_id, "sg-rapperswil");
    assert_eq!(best.monthly_net_income, dec!(10134.56));

    // St. Gallen reference costs replace the entered rent, adult premiums
    // and childcare: 1500 + 250 utilities, 700 + 150 out of pocket, and
    // 1150 for the one child in childcare.
    assert_eq!(best.budget.housing, dec!(1750));
    assert_eq!(best.budget.healthcare, dec!(850));
    assert_eq!(best.budget.children, dec!(2000));
    assert_eq!(best.budget.monthly_expenses, dec!(7450));
    assert_eq!(best.budget.monthly_disposable_income, dec!(2684.56));
    assert_eq!(best.difference_from_best, dec!(0));
    assert_eq!(best.difference_from_average, dec!(927.46));
    assert!(best.budget.is_balanced);
    assert_eq!(best.budget.housing_ratio, dec!(17.27));

    // The savings allocation sits below the 5% floor everywhere.
    let savings = best
        .budget
        .guidelines
        .iter()
        .find(|g| g.category == "savings")
        .expect("savings guideline missing");
    assert_eq!(savings.ratio, dec!(4.93));
    assert_eq!(savings.status, GuidelineStatus::Over);
    assert!(!best.budget.suggestions.is_empty());

    let zurich = results
        .iter()
        .find(|r| r.municipality_id == "zh-zurich")
        .expect("zh-zurich missing from comparison");
    assert_eq!(zurich.ranking, 15);
    assert_eq!(zurich.monthly_net_income, dec!(9731.11));
    assert_eq!(zurich.budget.housing, dec!(2550));
    assert_eq!(zurich.budget.monthly_expenses, dec!(8780));
    assert_eq!(zurich.budget.monthly_disposable_income, dec!(951.11));
    assert_eq!(zurich.difference_from_best, dec!(-1733.45));
    assert_eq!(zurich.difference_from_average, dec!(-805.99));
    assert!(zurich.budget.is_balanced);
}
