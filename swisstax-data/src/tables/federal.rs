//! Direct federal tax and the statutory contribution rates.
//!
//! The federal tariffs are the 2025 post-tariff schedules for single and
//! married taxpayers. The confederation grants its own deduction caps but
//! levies no wealth tax and applies no multiplier.

use rust_decimal_macros::dec;
use swisstax_core::{
    AlvRates, ContributionConfig, DeductionLimits, FederalTaxConfig, InsurancePremiumLimits,
    OtherDeductionLimits, PersonalDeductionLimits, Pillar3aLimits, ProfessionalExpenseLimits,
    SelfEmployedAhvScale, Tariffs, TaxBracket,
};

use super::{band, bracket};

pub(super) fn config() -> FederalTaxConfig {
    FederalTaxConfig {
        tariffs: Tariffs {
            single: single_tariff(),
            married: married_tariff(),
        },
        child_tax_reduction: dec!(263),
        deduction_limits: deduction_limits(),
    }
}

pub(super) fn contributions() -> ContributionConfig {
    ContributionConfig {
        ahv_iv_eo_employee_percent: dec!(5.3),
        alv: AlvRates {
            base_percent: dec!(1.1),
            ceiling: dec!(148200),
            solidarity_percent: dec!(0.5),
        },
        self_employed: SelfEmployedAhvScale {
            minimum_contribution: dec!(530),
            lower_threshold: dec!(10100),
            upper_threshold: dec!(60500),
            full_rate_percent: dec!(10),
            bands: vec![
                band(dec!(10100), dec!(17600), dec!(5.371)),
                band(dec!(17600), dec!(23000), dec!(5.494)),
                band(dec!(23000), dec!(28400), dec!(5.741)),
                band(dec!(28400), dec!(33800), dec!(6.104)),
                band(dec!(33800), dec!(39200), dec!(6.468)),
                band(dec!(39200), dec!(44600), dec!(6.952)),
                band(dec!(44600), dec!(50000), dec!(7.436)),
                band(dec!(50000), dec!(55400), dec!(8.041)),
                band(dec!(55400), dec!(60500), dec!(9.163)),
            ],
        },
    }
}

fn single_tariff() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(15000)), dec!(0), dec!(0)),
        bracket(dec!(15000), Some(dec!(32800)), dec!(0), dec!(0.77)),
        bracket(dec!(32800), Some(dec!(42900)), dec!(137.06), dec!(0.88)),
        bracket(dec!(42900), Some(dec!(57200)), dec!(225.94), dec!(2.64)),
        bracket(dec!(57200), Some(dec!(75200)), dec!(603.46), dec!(2.97)),
        bracket(dec!(75200), Some(dec!(81000)), dec!(1138.06), dec!(5.94)),
        bracket(dec!(81000), Some(dec!(107400)), dec!(1482.58), dec!(6.6)),
        bracket(dec!(107400), Some(dec!(139600)), dec!(3224.98), dec!(8.8)),
        bracket(dec!(139600), Some(dec!(182600)), dec!(6058.58), dec!(11)),
        bracket(dec!(182600), Some(dec!(783200)), dec!(10788.58), dec!(13.2)),
        bracket(dec!(783200), None, dec!(90067.78), dec!(11.5)),
    ]
}

fn married_tariff() -> Vec<TaxBracket> {
    vec![
        bracket(dec!(0), Some(dec!(29300)), dec!(0), dec!(0)),
        bracket(dec!(29300), Some(dec!(52700)), dec!(0), dec!(1)),
        bracket(dec!(52700), Some(dec!(60500)), dec!(234), dec!(2)),
        bracket(dec!(60500), Some(dec!(78100)), dec!(390), dec!(3)),
        bracket(dec!(78100), Some(dec!(93600)), dec!(918), dec!(4)),
        bracket(dec!(93600), Some(dec!(107200)), dec!(1538), dec!(5)),
        bracket(dec!(107200), Some(dec!(119000)), dec!(2218), dec!(6)),
        bracket(dec!(119000), Some(dec!(128800)), dec!(2926), dec!(7)),
        bracket(dec!(128800), Some(dec!(136600)), dec!(3612), dec!(8)),
        bracket(dec!(136600), Some(dec!(142300)), dec!(4236), dec!(9)),
        bracket(dec!(142300), Some(dec!(146300)), dec!(4749), dec!(10)),
        bracket(dec!(146300), Some(dec!(148300)), dec!(5149), dec!(11)),
        bracket(dec!(148300), Some(dec!(150300)), dec!(5369), dec!(12)),
        bracket(dec!(150300), Some(dec!(928700)), dec!(5609), dec!(13)),
        bracket(dec!(928700), None, dec!(106801), dec!(11.5)),
    ]
}

fn deduction_limits() -> DeductionLimits {
    DeductionLimits {
        professional: ProfessionalExpenseLimits {
            flat_rate: dec!(4000),
            commuting_max: dec!(3200),
            meals_max: dec!(3200),
            other_max: dec!(4000),
        },
        insurance: InsurancePremiumLimits {
            single_max: dec!(1800),
            married_max: dec!(3600),
            per_child: dec!(700),
        },
        pillar_3a: Pillar3aLimits {
            with_pension_max: dec!(7258),
            without_pension_max: dec!(36288),
        },
        personal: PersonalDeductionLimits {
            married_deduction: dec!(2800),
            dual_earner: Some(dec!(13900)),
            per_child: dec!(6700),
            childcare_max_per_child: dec!(25500),
            self_care_per_child: None,
            child_education_per_child: None,
            social: None,
        },
        other: OtherDeductionLimits {
            education_max: dec!(13000),
            rent: None,
        },
    }
}
