//! Cantonal tax configurations: tariffs, multipliers, wealth schedules
//! and per-canton deduction caps.
//!
//! The pillar 3a tiers are statutory federal caps and identical in every
//! canton; everything else differs per canton, including which optional
//! deductions (self-care, child education, social, rent) exist at all.

use rust_decimal_macros::dec;
use swisstax_core::{
    CantonalTaxConfig, DeductionLimits, InsurancePremiumLimits, OtherDeductionLimits,
    PersonalDeductionLimits, Pillar3aLimits, ProfessionalExpenseLimits, RentDeductionRule,
    SocialDeductionAmounts, Tariffs, WealthAllowances, WealthTaxConfig,
};

use super::{bracket, wealth_bracket};

fn pillar_3a() -> Pillar3aLimits {
    Pillar3aLimits {
        with_pension_max: dec!(7258),
        without_pension_max: dec!(36288),
    }
}

pub(super) fn zurich() -> CantonalTaxConfig {
    CantonalTaxConfig {
        name: "Zürich".to_string(),
        tax_multiplier_percent: dec!(98),
        tariffs: Tariffs {
            single: vec![
                bracket(dec!(0), Some(dec!(6900)), dec!(0), dec!(0)),
                bracket(dec!(6900), Some(dec!(11800)), dec!(0), dec!(2)),
                bracket(dec!(11800), Some(dec!(16600)), dec!(98), dec!(3)),
                bracket(dec!(16600), Some(dec!(24500)), dec!(242), dec!(4)),
                bracket(dec!(24500), Some(dec!(34100)), dec!(558), dec!(5)),
                bracket(dec!(34100), Some(dec!(45100)), dec!(1038), dec!(6)),
                bracket(dec!(45100), Some(dec!(58000)), dec!(1698), dec!(7)),
                bracket(dec!(58000), Some(dec!(75400)), dec!(2601), dec!(8)),
                bracket(dec!(75400), Some(dec!(109000)), dec!(3993), dec!(9)),
                bracket(dec!(109000), Some(dec!(142200)), dec!(7017), dec!(10)),
                bracket(dec!(142200), Some(dec!(194900)), dec!(10337), dec!(11)),
                bracket(dec!(194900), Some(dec!(263300)), dec!(16134), dec!(12)),
                bracket(dec!(263300), None, dec!(24342), dec!(13)),
            ],
            married: vec![
                bracket(dec!(0), Some(dec!(13900)), dec!(0), dec!(0)),
                bracket(dec!(13900), Some(dec!(20200)), dec!(0), dec!(2)),
                bracket(dec!(20200), Some(dec!(28200)), dec!(126), dec!(3)),
                bracket(dec!(28200), Some(dec!(37900)), dec!(366), dec!(4)),
                bracket(dec!(37900), Some(dec!(49000)), dec!(754), dec!(5)),
                bracket(dec!(49000), Some(dec!(63300)), dec!(1309), dec!(6)),
                bracket(dec!(63300), Some(dec!(95100)), dec!(2167), dec!(7)),
                bracket(dec!(95100), Some(dec!(127000)), dec!(4393), dec!(8)),
                bracket(dec!(127000), Some(dec!(174900)), dec!(6945), dec!(9)),
                bracket(dec!(174900), Some(dec!(232100)), dec!(11256), dec!(10)),
                bracket(dec!(232100), Some(dec!(294200)), dec!(16976), dec!(11)),
                bracket(dec!(294200), Some(dec!(365800)), dec!(23807), dec!(12)),
                bracket(dec!(365800), None, dec!(32399), dec!(13)),
            ],
        },
        wealth_tax: Some(WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(77000),
                married: dec!(154000),
                per_child: dec!(15000),
            },
            brackets: vec![
                wealth_bracket(dec!(0), Some(dec!(318000)), dec!(0.5)),
                wealth_bracket(dec!(318000), Some(dec!(705000)), dec!(1.0)),
                wealth_bracket(dec!(705000), Some(dec!(1413000)), dec!(1.5)),
                wealth_bracket(dec!(1413000), Some(dec!(2362000)), dec!(2.0)),
                wealth_bracket(dec!(2362000), Some(dec!(3158000)), dec!(2.5)),
                wealth_bracket(dec!(3158000), None, dec!(3.0)),
            ],
        }),
        deduction_limits: DeductionLimits {
            professional: ProfessionalExpenseLimits {
                flat_rate: dec!(4100),
                commuting_max: dec!(5200),
                meals_max: dec!(3200),
                other_max: dec!(4000),
            },
            insurance: InsurancePremiumLimits {
                single_max: dec!(2900),
                married_max: dec!(5800),
                per_child: dec!(1300),
            },
            pillar_3a: pillar_3a(),
            personal: PersonalDeductionLimits {
                married_deduction: dec!(2600),
                dual_earner: Some(dec!(5900)),
                per_child: dec!(9300),
                childcare_max_per_child: dec!(25000),
                self_care_per_child: None,
                child_education_per_child: None,
                social: None,
            },
            other: OtherDeductionLimits {
                education_max: dec!(12400),
                rent: None,
            },
        },
    }
}

pub(super) fn bern() -> CantonalTaxConfig {
    CantonalTaxConfig {
        name: "Bern".to_string(),
        tax_multiplier_percent: dec!(302.5),
        tariffs: Tariffs {
            single: vec![
                bracket(dec!(0), Some(dec!(5800)), dec!(0), dec!(0)),
                bracket(dec!(5800), Some(dec!(11400)), dec!(0), dec!(0.8)),
                bracket(dec!(11400), Some(dec!(17600)), dec!(44.8), dec!(1.6)),
                bracket(dec!(17600), Some(dec!(27300)), dec!(144), dec!(2.4)),
                bracket(dec!(27300), Some(dec!(39000)), dec!(376.8), dec!(3.2)),
                bracket(dec!(39000), Some(dec!(53500)), dec!(751.2), dec!(4)),
                bracket(dec!(53500), Some(dec!(72400)), dec!(1331.2), dec!(4.6)),
                bracket(dec!(72400), Some(dec!(97200)), dec!(2200.6), dec!(5.2)),
                bracket(dec!(97200), Some(dec!(130900)), dec!(3490.2), dec!(5.8)),
                bracket(dec!(130900), Some(dec!(177300)), dec!(5444.8), dec!(6.2)),
                bracket(dec!(177300), Some(dec!(240800)), dec!(8321.6), dec!(6.5)),
                bracket(dec!(240800), None, dec!(12449.1), dec!(6.65)),
            ],
            married: vec![
                bracket(dec!(0), Some(dec!(11500)), dec!(0), dec!(0)),
                bracket(dec!(11500), Some(dec!(22700)), dec!(0), dec!(0.8)),
                bracket(dec!(22700), Some(dec!(35100)), dec!(89.6), dec!(1.6)),
                bracket(dec!(35100), Some(dec!(54500)), dec!(288), dec!(2.4)),
                bracket(dec!(54500), Some(dec!(77900)), dec!(753.6), dec!(3.2)),
                bracket(dec!(77900), Some(dec!(106900)), dec!(1502.4), dec!(4)),
                bracket(dec!(106900), Some(dec!(144700)), dec!(2662.4), dec!(4.6)),
                bracket(dec!(144700), Some(dec!(194300)), dec!(4401.2), dec!(5.2)),
                bracket(dec!(194300), Some(dec!(261700)), dec!(6980.4), dec!(5.8)),
                bracket(dec!(261700), Some(dec!(354500)), dec!(10889.6), dec!(6.2)),
                bracket(dec!(354500), Some(dec!(481500)), dec!(16643.2), dec!(6.5)),
                bracket(dec!(481500), None, dec!(24898.2), dec!(6.65)),
            ],
        },
        wealth_tax: Some(WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(58000),
                married: dec!(116000),
                per_child: dec!(18000),
            },
            brackets: vec![
                wealth_bracket(dec!(0), Some(dec!(210000)), dec!(0.55)),
                wealth_bracket(dec!(210000), Some(dec!(420000)), dec!(0.85)),
                wealth_bracket(dec!(420000), Some(dec!(840000)), dec!(1.10)),
                wealth_bracket(dec!(840000), Some(dec!(1680000)), dec!(1.25)),
                wealth_bracket(dec!(1680000), None, dec!(1.35)),
            ],
        }),
        deduction_limits: DeductionLimits {
            professional: ProfessionalExpenseLimits {
                flat_rate: dec!(3900),
                commuting_max: dec!(6700),
                meals_max: dec!(3200),
                other_max: dec!(4000),
            },
            insurance: InsurancePremiumLimits {
                single_max: dec!(2400),
                married_max: dec!(4800),
                per_child: dec!(700),
            },
            pillar_3a: pillar_3a(),
            personal: PersonalDeductionLimits {
                married_deduction: dec!(5200),
                dual_earner: Some(dec!(9300)),
                per_child: dec!(8000),
                childcare_max_per_child: dec!(16000),
                self_care_per_child: None,
                child_education_per_child: Some(dec!(6200)),
                social: Some(SocialDeductionAmounts {
                    single: dec!(2400),
                    married: dec!(4800),
                }),
            },
            other: OtherDeductionLimits {
                education_max: dec!(12000),
                rent: None,
            },
        },
    }
}

pub(super) fn luzern() -> CantonalTaxConfig {
    CantonalTaxConfig {
        name: "Luzern".to_string(),
        tax_multiplier_percent: dec!(155),
        tariffs: Tariffs {
            single: vec![
                bracket(dec!(0), Some(dec!(9100)), dec!(0), dec!(0)),
                bracket(dec!(9100), Some(dec!(13500)), dec!(0), dec!(0.5)),
                bracket(dec!(13500), Some(dec!(18000)), dec!(22), dec!(1)),
                bracket(dec!(18000), Some(dec!(26900)), dec!(67), dec!(1.5)),
                bracket(dec!(26900), Some(dec!(41500)), dec!(200.5), dec!(2.5)),
                bracket(dec!(41500), Some(dec!(58600)), dec!(565.5), dec!(3.5)),
                bracket(dec!(58600), Some(dec!(83800)), dec!(1164), dec!(4)),
                bracket(dec!(83800), Some(dec!(124000)), dec!(2172), dec!(4.5)),
                bracket(dec!(124000), Some(dec!(166000)), dec!(3981), dec!(5)),
                bracket(dec!(166000), Some(dec!(209000)), dec!(6081), dec!(5.25)),
                bracket(dec!(209000), None, dec!(8338.5), dec!(5.5)),
            ],
            married: vec![
                bracket(dec!(0), Some(dec!(14600)), dec!(0), dec!(0)),
                bracket(dec!(14600), Some(dec!(21600)), dec!(0), dec!(0.5)),
                bracket(dec!(21600), Some(dec!(28800)), dec!(35), dec!(1)),
                bracket(dec!(28800), Some(dec!(43000)), dec!(107), dec!(1.5)),
                bracket(dec!(43000), Some(dec!(66400)), dec!(320), dec!(2.5)),
                bracket(dec!(66400), Some(dec!(93800)), dec!(905), dec!(3.5)),
                bracket(dec!(93800), Some(dec!(134100)), dec!(1864), dec!(4)),
                bracket(dec!(134100), Some(dec!(198400)), dec!(3476), dec!(4.5)),
                bracket(dec!(198400), Some(dec!(265600)), dec!(6369.5), dec!(5)),
                bracket(dec!(265600), Some(dec!(334400)), dec!(9729.5), dec!(5.25)),
                bracket(dec!(334400), None, dec!(13341.5), dec!(5.5)),
            ],
        },
        // Luzern taxes wealth at a single flat per-mille rate.
        wealth_tax: Some(WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(60000),
                married: dec!(120000),
                per_child: dec!(20000),
            },
            brackets: vec![wealth_bracket(dec!(0), None, dec!(0.875))],
        }),
        deduction_limits: DeductionLimits {
            professional: ProfessionalExpenseLimits {
                flat_rate: dec!(4000),
                commuting_max: dec!(6000),
                meals_max: dec!(3200),
                other_max: dec!(4000),
            },
            insurance: InsurancePremiumLimits {
                single_max: dec!(2600),
                married_max: dec!(5200),
                per_child: dec!(600),
            },
            pillar_3a: pillar_3a(),
            personal: PersonalDeductionLimits {
                married_deduction: dec!(4300),
                dual_earner: Some(dec!(4700)),
                per_child: dec!(6700),
                childcare_max_per_child: dec!(6000),
                self_care_per_child: Some(dec!(2000)),
                child_education_per_child: None,
                social: None,
            },
            other: OtherDeductionLimits {
                education_max: dec!(12000),
                rent: None,
            },
        },
    }
}

pub(super) fn zug() -> CantonalTaxConfig {
    CantonalTaxConfig {
        name: "Zug".to_string(),
        tax_multiplier_percent: dec!(82),
        tariffs: Tariffs {
            single: vec![
                bracket(dec!(0), Some(dec!(12300)), dec!(0), dec!(0)),
                bracket(dec!(12300), Some(dec!(19600)), dec!(0), dec!(0.75)),
                bracket(dec!(19600), Some(dec!(27100)), dec!(54.75), dec!(1.5)),
                bracket(dec!(27100), Some(dec!(36000)), dec!(167.25), dec!(2.25)),
                bracket(dec!(36000), Some(dec!(47400)), dec!(367.5), dec!(3)),
                bracket(dec!(47400), Some(dec!(62900)), dec!(709.5), dec!(3.75)),
                bracket(dec!(62900), Some(dec!(83700)), dec!(1290.75), dec!(4.5)),
                bracket(dec!(83700), Some(dec!(113200)), dec!(2226.75), dec!(5.25)),
                bracket(dec!(113200), Some(dec!(152900)), dec!(3775.5), dec!(6)),
                bracket(dec!(152900), None, dec!(6157.5), dec!(6.75)),
            ],
            married: vec![
                bracket(dec!(0), Some(dec!(21000)), dec!(0), dec!(0)),
                bracket(dec!(21000), Some(dec!(33300)), dec!(0), dec!(0.75)),
                bracket(dec!(33300), Some(dec!(46000)), dec!(92.25), dec!(1.5)),
                bracket(dec!(46000), Some(dec!(61200)), dec!(282.75), dec!(2.25)),
                bracket(dec!(61200), Some(dec!(80500)), dec!(624.75), dec!(3)),
                bracket(dec!(80500), Some(dec!(106900)), dec!(1203.75), dec!(3.75)),
                bracket(dec!(106900), Some(dec!(142200)), dec!(2193.75), dec!(4.5)),
                bracket(dec!(142200), Some(dec!(192400)), dec!(3782.25), dec!(5.25)),
                bracket(dec!(192400), Some(dec!(259900)), dec!(6417.75), dec!(6)),
                bracket(dec!(259900), None, dec!(10467.75), dec!(6.75)),
            ],
        },
        wealth_tax: Some(WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(111000),
                married: dec!(222000),
                per_child: dec!(55000),
            },
            brackets: vec![
                wealth_bracket(dec!(0), Some(dec!(250000)), dec!(0.425)),
                wealth_bracket(dec!(250000), Some(dec!(500000)), dec!(0.6)),
                wealth_bracket(dec!(500000), Some(dec!(1000000)), dec!(0.8)),
                wealth_bracket(dec!(1000000), None, dec!(1.0)),
            ],
        }),
        deduction_limits: DeductionLimits {
            professional: ProfessionalExpenseLimits {
                flat_rate: dec!(4200),
                commuting_max: dec!(6000),
                meals_max: dec!(3200),
                other_max: dec!(4000),
            },
            insurance: InsurancePremiumLimits {
                single_max: dec!(3300),
                married_max: dec!(6600),
                per_child: dec!(1100),
            },
            pillar_3a: pillar_3a(),
            personal: PersonalDeductionLimits {
                married_deduction: dec!(4400),
                dual_earner: Some(dec!(4400)),
                per_child: dec!(12000),
                childcare_max_per_child: dec!(25000),
                self_care_per_child: Some(dec!(6000)),
                child_education_per_child: None,
                social: None,
            },
            // Zug is the only modelled canton with a tenant's rent deduction.
            other: OtherDeductionLimits {
                education_max: dec!(12400),
                rent: Some(RentDeductionRule {
                    percent: dec!(20),
                    max_amount: dec!(8100),
                }),
            },
        },
    }
}

pub(super) fn st_gallen() -> CantonalTaxConfig {
    CantonalTaxConfig {
        name: "St. Gallen".to_string(),
        tax_multiplier_percent: dec!(105),
        tariffs: Tariffs {
            single: vec![
                bracket(dec!(0), Some(dec!(11700)), dec!(0), dec!(0)),
                bracket(dec!(11700), Some(dec!(14700)), dec!(0), dec!(1.6)),
                bracket(dec!(14700), Some(dec!(19500)), dec!(48), dec!(2.5)),
                bracket(dec!(19500), Some(dec!(26300)), dec!(168), dec!(3.3)),
                bracket(dec!(26300), Some(dec!(35300)), dec!(392.4), dec!(4)),
                bracket(dec!(35300), Some(dec!(48000)), dec!(752.4), dec!(4.7)),
                bracket(dec!(48000), Some(dec!(64900)), dec!(1349.3), dec!(5.4)),
                bracket(dec!(64900), Some(dec!(88600)), dec!(2261.9), dec!(6.1)),
                bracket(dec!(88600), Some(dec!(119200)), dec!(3707.6), dec!(6.8)),
                bracket(dec!(119200), Some(dec!(159100)), dec!(5788.4), dec!(7.5)),
                bracket(dec!(159100), Some(dec!(211900)), dec!(8780.9), dec!(8.2)),
                bracket(dec!(211900), None, dec!(13110.5), dec!(8.5)),
            ],
            married: vec![
                bracket(dec!(0), Some(dec!(20400)), dec!(0), dec!(0)),
                bracket(dec!(20400), Some(dec!(25700)), dec!(0), dec!(1.6)),
                bracket(dec!(25700), Some(dec!(34100)), dec!(84.8), dec!(2.5)),
                bracket(dec!(34100), Some(dec!(46000)), dec!(294.8), dec!(3.3)),
                bracket(dec!(46000), Some(dec!(61700)), dec!(687.5), dec!(4)),
                bracket(dec!(61700), Some(dec!(84000)), dec!(1315.5), dec!(4.7)),
                bracket(dec!(84000), Some(dec!(113600)), dec!(2363.6), dec!(5.4)),
                bracket(dec!(113600), Some(dec!(155100)), dec!(3962), dec!(6.1)),
                bracket(dec!(155100), Some(dec!(208600)), dec!(6493.5), dec!(6.8)),
                bracket(dec!(208600), Some(dec!(278400)), dec!(10131.5), dec!(7.5)),
                bracket(dec!(278400), Some(dec!(370800)), dec!(15366.5), dec!(8.2)),
                bracket(dec!(370800), None, dec!(22943.3), dec!(8.5)),
            ],
        },
        wealth_tax: Some(WealthTaxConfig {
            allowances: WealthAllowances {
                single: dec!(75000),
                married: dec!(150000),
                per_child: dec!(25000),
            },
            brackets: vec![wealth_bracket(dec!(0), None, dec!(1.7))],
        }),
        deduction_limits: DeductionLimits {
            professional: ProfessionalExpenseLimits {
                flat_rate: dec!(4000),
                commuting_max: dec!(3700),
                meals_max: dec!(3200),
                other_max: dec!(4000),
            },
            insurance: InsurancePremiumLimits {
                single_max: dec!(2400),
                married_max: dec!(4800),
                per_child: dec!(600),
            },
            pillar_3a: pillar_3a(),
            personal: PersonalDeductionLimits {
                married_deduction: dec!(3000),
                dual_earner: None,
                per_child: dec!(10200),
                childcare_max_per_child: dec!(25000),
                self_care_per_child: None,
                child_education_per_child: Some(dec!(13000)),
                social: None,
            },
            other: OtherDeductionLimits {
                education_max: dec!(12000),
                rent: None,
            },
        },
    }
}
