//! Built-in reference tables for tax year 2025.
//!
//! Five cantons are modelled (ZH, BE, LU, ZG, SG) with seventeen
//! municipalities between them, plus the direct federal tariff and the
//! statutory contribution rates. The tables are plain Rust so that the
//! dataset needs no I/O to construct; [`crate::loader`] can overlay
//! tariffs from CSV afterwards.
//!
//! Amounts are CHF, rates are percentages unless noted per mille. The
//! income tariffs carry chain-consistent base amounts, which
//! `TaxDataset::validate` re-checks on every load.

mod cantons;
mod federal;
mod municipalities;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swisstax_core::{CostOfLiving, DegressiveRateBand, TaxBracket, TaxDataset, WealthTaxBracket};

/// Tax year the built-in tables describe.
pub const TAX_YEAR: i32 = 2025;

/// Assembles the complete built-in dataset.
pub fn builtin_dataset() -> TaxDataset {
    let mut dataset = TaxDataset::new(TAX_YEAR, federal::config(), federal::contributions());

    dataset.insert_canton("ZH", cantons::zurich());
    dataset.insert_canton("BE", cantons::bern());
    dataset.insert_canton("LU", cantons::luzern());
    dataset.insert_canton("ZG", cantons::zug());
    dataset.insert_canton("SG", cantons::st_gallen());

    for municipality in municipalities::all() {
        dataset.insert_municipality(municipality);
    }

    dataset.insert_cost_of_living(
        "ZH",
        CostOfLiving {
            monthly_rent: dec!(2300),
            monthly_health_insurance_adult: dec!(390),
            monthly_childcare_per_child: dec!(1600),
        },
    );
    dataset.insert_cost_of_living(
        "BE",
        CostOfLiving {
            monthly_rent: dec!(1700),
            monthly_health_insurance_adult: dec!(395),
            monthly_childcare_per_child: dec!(1250),
        },
    );
    dataset.insert_cost_of_living(
        "LU",
        CostOfLiving {
            monthly_rent: dec!(1850),
            monthly_health_insurance_adult: dec!(360),
            monthly_childcare_per_child: dec!(1350),
        },
    );
    dataset.insert_cost_of_living(
        "ZG",
        CostOfLiving {
            monthly_rent: dec!(2450),
            monthly_health_insurance_adult: dec!(340),
            monthly_childcare_per_child: dec!(1700),
        },
    );
    dataset.insert_cost_of_living(
        "SG",
        CostOfLiving {
            monthly_rent: dec!(1500),
            monthly_health_insurance_adult: dec!(350),
            monthly_childcare_per_child: dec!(1150),
        },
    );

    dataset
}

fn bracket(
    min_income: Decimal,
    max_income: Option<Decimal>,
    base_amount: Decimal,
    rate_percent: Decimal,
) -> TaxBracket {
    TaxBracket {
        min_income,
        max_income,
        base_amount,
        rate_percent,
    }
}

fn wealth_bracket(
    min_wealth: Decimal,
    max_wealth: Option<Decimal>,
    rate_permille: Decimal,
) -> WealthTaxBracket {
    WealthTaxBracket {
        min_wealth,
        max_wealth,
        rate_permille,
    }
}

fn band(
    min_income: Decimal,
    max_income: Decimal,
    rate_percent: Decimal,
) -> DegressiveRateBand {
    DegressiveRateBand {
        min_income,
        max_income,
        rate_percent,
    }
}
