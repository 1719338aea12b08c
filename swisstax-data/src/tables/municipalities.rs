//! Municipal tax and church tax multipliers.
//!
//! Each multiplier is a percentage of the unrounded cantonal base tax.
//! The church columns are Roman Catholic, Protestant (Reformed) and
//! Christ Catholic in that order.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use swisstax_core::{ChurchTaxMultipliers, Municipality};

/// All built-in municipalities, grouped by canton. The order here is the
/// order comparison results iterate in before ranking.
pub(super) fn all() -> Vec<Municipality> {
    vec![
        municipality("zh-zurich", "Zürich", "ZH", dec!(119), dec!(10), dec!(10), dec!(14)),
        municipality("zh-winterthur", "Winterthur", "ZH", dec!(125), dec!(12), dec!(12), dec!(15)),
        municipality("zh-uster", "Uster", "ZH", dec!(109), dec!(11), dec!(10), dec!(14)),
        municipality("zh-kusnacht", "Küsnacht", "ZH", dec!(73), dec!(9), dec!(9), dec!(13)),
        municipality("zh-dietikon", "Dietikon", "ZH", dec!(129), dec!(12), dec!(11), dec!(15)),
        municipality("be-bern", "Bern", "BE", dec!(154), dec!(20), dec!(18), dec!(26)),
        municipality("be-biel", "Biel/Bienne", "BE", dec!(163), dec!(21), dec!(19), dec!(27)),
        municipality("be-thun", "Thun", "BE", dec!(172), dec!(20), dec!(18), dec!(26)),
        municipality("lu-luzern", "Luzern", "LU", dec!(175), dec!(25), dec!(25), dec!(30)),
        municipality("lu-emmen", "Emmen", "LU", dec!(190), dec!(26), dec!(25), dec!(31)),
        municipality("lu-kriens", "Kriens", "LU", dec!(185), dec!(25), dec!(24), dec!(30)),
        municipality("zg-zug", "Zug", "ZG", dec!(60), dec!(17), dec!(17), dec!(22)),
        municipality("zg-baar", "Baar", "ZG", dec!(58), dec!(16), dec!(16), dec!(21)),
        municipality("zg-cham", "Cham", "ZG", dec!(66), dec!(17), dec!(16), dec!(22)),
        municipality("sg-stgallen", "St. Gallen", "SG", dec!(141), dec!(24), dec!(22), dec!(28)),
        municipality("sg-rapperswil", "Rapperswil-Jona", "SG", dec!(114), dec!(23), dec!(21), dec!(27)),
        municipality("sg-wil", "Wil", "SG", dec!(146), dec!(24), dec!(22), dec!(28)),
    ]
}

fn municipality(
    id: &str,
    name: &str,
    canton_code: &str,
    tax_multiplier_percent: Decimal,
    roman_catholic: Decimal,
    protestant: Decimal,
    christ_catholic: Decimal,
) -> Municipality {
    Municipality {
        id: id.to_string(),
        name: name.to_string(),
        canton_code: canton_code.to_string(),
        tax_multiplier_percent,
        church_tax: ChurchTaxMultipliers {
            roman_catholic,
            protestant,
            christ_catholic,
        },
    }
}
