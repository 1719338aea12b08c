use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Social insurance contributions (category 1).
///
/// For employees, `ahv_iv_eo` and `alv` hold the statutory contributions on
/// gross salary. For the self-employed, `ahv_iv_eo` holds the converged
/// degressive AHV contribution and `alv` is zero (the self-employed pay no
/// unemployment insurance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialInsuranceDeductions {
    pub ahv_iv_eo: Decimal,
    pub alv: Decimal,
    pub total: Decimal,
}

/// Professional expense deductions (category 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfessionalDeductions {
    /// Flat-rate allowance, when the taxpayer opted for it.
    pub flat_rate: Decimal,

    /// Capped commuting costs.
    pub commuting: Decimal,

    /// Capped meal costs.
    pub meals: Decimal,

    /// Capped other professional expenses.
    pub other: Decimal,

    pub total: Decimal,
}

/// Pension contribution deductions (category 4).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionDeductions {
    /// Pillar 2 purchases, uncapped.
    pub pillar_2: Decimal,

    /// Pillar 3a contributions after the tier cap.
    pub pillar_3a: Decimal,

    pub total: Decimal,
}

/// Family-situation deductions (category 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDeductions {
    pub married: Decimal,
    pub dual_earner: Decimal,
    pub children: Decimal,
    pub childcare: Decimal,
    pub child_education: Decimal,
    pub social: Decimal,
    pub total: Decimal,
}

/// Remaining deductions (category 6).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherDeductions {
    pub debt_interest: Decimal,
    pub donations: Decimal,
    pub medical: Decimal,
    pub alimony: Decimal,
    pub education: Decimal,
    pub rent: Decimal,
    pub total: Decimal,
}

/// All applied deductions for one jurisdiction.
///
/// A calculation produces two of these, one under federal limits and one
/// under the canton's limits, because the caps differ per jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub social_insurance: SocialInsuranceDeductions,
    pub professional: ProfessionalDeductions,
    /// Insurance premiums after the civil-status cap (category 3).
    pub insurance_premiums: Decimal,
    pub pension: PensionDeductions,
    pub personal: PersonalDeductions,
    pub other: OtherDeductions,
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// The all-zero breakdown used when deductions are disabled.
    ///
    /// Every category is present with zero amounts rather than omitted, so
    /// consumers always see the same shape.
    pub fn zeroed() -> Self {
        Self {
            social_insurance: SocialInsuranceDeductions {
                ahv_iv_eo: Decimal::ZERO,
                alv: Decimal::ZERO,
                total: Decimal::ZERO,
            },
            professional: ProfessionalDeductions {
                flat_rate: Decimal::ZERO,
                commuting: Decimal::ZERO,
                meals: Decimal::ZERO,
                other: Decimal::ZERO,
                total: Decimal::ZERO,
            },
            insurance_premiums: Decimal::ZERO,
            pension: PensionDeductions {
                pillar_2: Decimal::ZERO,
                pillar_3a: Decimal::ZERO,
                total: Decimal::ZERO,
            },
            personal: PersonalDeductions {
                married: Decimal::ZERO,
                dual_earner: Decimal::ZERO,
                children: Decimal::ZERO,
                childcare: Decimal::ZERO,
                child_education: Decimal::ZERO,
                social: Decimal::ZERO,
                total: Decimal::ZERO,
            },
            other: OtherDeductions {
                debt_interest: Decimal::ZERO,
                donations: Decimal::ZERO,
                medical: Decimal::ZERO,
                alimony: Decimal::ZERO,
                education: Decimal::ZERO,
                rent: Decimal::ZERO,
                total: Decimal::ZERO,
            },
            total: Decimal::ZERO,
        }
    }
}
