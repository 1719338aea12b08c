use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::status::Religion;

/// Church tax multipliers of one municipality, per recognized denomination,
/// each as a percentage of the cantonal base tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChurchTaxMultipliers {
    pub roman_catholic: Decimal,
    pub protestant: Decimal,
    pub christ_catholic: Decimal,
}

impl ChurchTaxMultipliers {
    /// Multiplier for the given affiliation; zero for affiliations not
    /// liable for church tax.
    pub fn multiplier_for(
        &self,
        religion: Religion,
    ) -> Decimal {
        match religion {
            Religion::RomanCatholic => self.roman_catholic,
            Religion::Protestant => self.protestant,
            Religion::ChristCatholic => self.christ_catholic,
            Religion::None | Religion::Other => Decimal::ZERO,
        }
    }
}

/// A municipality and its piggyback multipliers on the cantonal base tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    /// Stable identifier, e.g. "zh-zurich".
    pub id: String,

    pub name: String,

    /// Code of the canton this municipality belongs to.
    pub canton_code: String,

    /// Municipal multiplier on the base tax, as a percentage.
    pub tax_multiplier_percent: Decimal,

    pub church_tax: ChurchTaxMultipliers,
}
