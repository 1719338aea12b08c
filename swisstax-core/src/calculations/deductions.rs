//! The six-category deduction engine.
//!
//! Deductions are grouped the way Swiss tax returns group them:
//!
//! | # | Category | Rule |
//! |---|----------|------|
//! | 1 | Social insurance | statutory AHV/IV/EO and ALV rates; degressive AHV for the self-employed |
//! | 2 | Professional expenses | flat-rate allowance or itemized with per-item caps |
//! | 3 | Insurance premiums | capped by civil status plus a per-child allowance |
//! | 4 | Pension | pillar 2 purchases uncapped; pillar 3a capped at a statutory tier |
//! | 5 | Personal | married, dual-earner, per-child, childcare (or self-care), education, social |
//! | 6 | Other | debt interest, donations, medical, alimony, rent rule, education cap |
//!
//! Federal and cantonal law cap the same categories differently, so a tax
//! calculation runs this engine twice: once with the federal limits and once
//! with the canton's. The statutory contribution rates of category 1 are
//! identical in both runs.
//!
//! Category 1 is computed last: for the self-employed, the AHV contribution
//! depends on taxable income and therefore on the other five categories
//! (see [`crate::calculations::ahv`]).

use rust_decimal::Decimal;

use crate::calculations::ahv::SelfEmployedAhv;
use crate::calculations::common::{max_zero, round_half_up};
use crate::models::{
    CivilStatus, ContributionConfig, DeductionBreakdown, DeductionInputs, DeductionLimits,
    IncomeInputs, InsurancePremiums, OtherDeductions, OtherExpenses, PensionContributions,
    PensionDeductions, PersonalCircumstances, PersonalDeductions, ProfessionalDeductions,
    ProfessionalExpenses, SocialInsuranceDeductions, TaxpayerProfile,
};

/// Deduction engine bound to one jurisdiction's limits.
#[derive(Debug, Clone)]
pub struct DeductionCalculator<'a> {
    limits: &'a DeductionLimits,
    contributions: &'a ContributionConfig,
}

impl<'a> DeductionCalculator<'a> {
    pub fn new(
        limits: &'a DeductionLimits,
        contributions: &'a ContributionConfig,
    ) -> Self {
        Self {
            limits,
            contributions,
        }
    }

    /// Applies all six categories and totals them.
    pub fn calculate(
        &self,
        profile: &TaxpayerProfile,
        income: &IncomeInputs,
        inputs: &DeductionInputs,
    ) -> DeductionBreakdown {
        let professional = self.professional(&inputs.professional);
        let insurance_premiums = self.insurance_premiums(profile, &inputs.insurance);
        let pension = self.pension(&inputs.pension);
        let personal = self.personal(profile, &inputs.personal);
        let other = self.other(&inputs.other);

        // Category 1 last: the self-employed AHV fixed point needs the sum
        // of everything else that reduces taxable income.
        let non_social_total =
            professional.total + insurance_premiums + pension.total + personal.total + other.total;
        let social_insurance = self.social_insurance(income, non_social_total);

        let total = social_insurance.total + non_social_total;

        DeductionBreakdown {
            social_insurance,
            professional,
            insurance_premiums,
            pension,
            personal,
            other,
            total,
        }
    }

    /// Category 1: statutory social insurance contributions.
    fn social_insurance(
        &self,
        income: &IncomeInputs,
        other_deductions: Decimal,
    ) -> SocialInsuranceDeductions {
        if income.is_self_employed {
            let ahv = SelfEmployedAhv::new(&self.contributions.self_employed);
            let resolution = ahv.resolve_taxable_income(income.gross_income, other_deductions);

            // The self-employed pay no unemployment insurance.
            return SocialInsuranceDeductions {
                ahv_iv_eo: resolution.contribution,
                alv: Decimal::ZERO,
                total: resolution.contribution,
            };
        }

        let gross = max_zero(income.gross_income);
        let ahv_iv_eo = round_half_up(
            gross * self.contributions.ahv_iv_eo_employee_percent / Decimal::ONE_HUNDRED,
        );
        let alv = self.alv_contribution(gross);

        SocialInsuranceDeductions {
            ahv_iv_eo,
            alv,
            total: ahv_iv_eo + alv,
        }
    }

    /// Two-tier ALV: the base rate up to the ceiling, the solidarity rate
    /// on the part above it.
    fn alv_contribution(
        &self,
        gross: Decimal,
    ) -> Decimal {
        let rates = &self.contributions.alv;

        let contribution = if gross <= rates.ceiling {
            gross * rates.base_percent / Decimal::ONE_HUNDRED
        } else {
            rates.ceiling * rates.base_percent / Decimal::ONE_HUNDRED
                + (gross - rates.ceiling) * rates.solidarity_percent / Decimal::ONE_HUNDRED
        };

        round_half_up(contribution)
    }

    /// Category 2: flat-rate allowance or itemized expenses with caps.
    fn professional(
        &self,
        claimed: &ProfessionalExpenses,
    ) -> ProfessionalDeductions {
        let limits = &self.limits.professional;

        if claimed.use_flat_rate {
            return ProfessionalDeductions {
                flat_rate: limits.flat_rate,
                commuting: Decimal::ZERO,
                meals: Decimal::ZERO,
                other: Decimal::ZERO,
                total: limits.flat_rate,
            };
        }

        let commuting = max_zero(claimed.commuting).min(limits.commuting_max);
        let meals = max_zero(claimed.meals).min(limits.meals_max);
        let other = max_zero(claimed.other).min(limits.other_max);

        ProfessionalDeductions {
            flat_rate: Decimal::ZERO,
            commuting,
            meals,
            other,
            total: commuting + meals + other,
        }
    }

    /// Category 3: insurance premiums under the civil-status cap.
    fn insurance_premiums(
        &self,
        profile: &TaxpayerProfile,
        claimed: &InsurancePremiums,
    ) -> Decimal {
        let limits = &self.limits.insurance;

        let cap = match profile.civil_status {
            CivilStatus::Single => limits.single_max,
            CivilStatus::Married => limits.married_max,
        } + limits.per_child * Decimal::from(profile.children);

        max_zero(claimed.health + claimed.other).min(cap)
    }

    /// Category 4: pension contributions.
    fn pension(
        &self,
        claimed: &PensionContributions,
    ) -> PensionDeductions {
        let pillar_2 = max_zero(claimed.pillar_2_purchases);

        let tier = if claimed.has_employer_pension {
            self.limits.pillar_3a.with_pension_max
        } else {
            self.limits.pillar_3a.without_pension_max
        };
        let pillar_3a = max_zero(claimed.pillar_3a).min(tier);

        PensionDeductions {
            pillar_2,
            pillar_3a,
            total: pillar_2 + pillar_3a,
        }
    }

    /// Category 5: family-situation deductions.
    fn personal(
        &self,
        profile: &TaxpayerProfile,
        claimed: &PersonalCircumstances,
    ) -> PersonalDeductions {
        let limits = &self.limits.personal;
        let married = profile.civil_status == CivilStatus::Married;

        let married_deduction = if married {
            limits.married_deduction
        } else {
            Decimal::ZERO
        };

        let dual_earner = if married && claimed.both_spouses_employed {
            limits.dual_earner.unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        };

        let children = limits.per_child * Decimal::from(profile.children);

        let in_childcare = Decimal::from(profile.effective_children_in_childcare());
        let (childcare, self_care) = match limits.self_care_per_child {
            // The flat self-care amount replaces the expense deduction.
            Some(per_child) if claimed.use_self_care => (Decimal::ZERO, per_child * in_childcare),
            _ => (
                max_zero(claimed.childcare_costs).min(limits.childcare_max_per_child * in_childcare),
                Decimal::ZERO,
            ),
        };

        let child_education = match limits.child_education_per_child {
            Some(per_child) => {
                per_child * Decimal::from(claimed.children_in_education.min(profile.children))
            }
            None => Decimal::ZERO,
        };

        let social = match &limits.social {
            Some(amounts) => {
                if married {
                    amounts.married
                } else {
                    amounts.single
                }
            }
            None => Decimal::ZERO,
        };

        PersonalDeductions {
            married: married_deduction,
            dual_earner,
            children,
            childcare: childcare + self_care,
            child_education,
            social,
            total: married_deduction + dual_earner + children + childcare + self_care
                + child_education
                + social,
        }
    }

    /// Category 6: remaining deductions.
    fn other(
        &self,
        claimed: &OtherExpenses,
    ) -> OtherDeductions {
        let limits = &self.limits.other;

        let debt_interest = max_zero(claimed.debt_interest);
        let donations = max_zero(claimed.donations);
        let medical = max_zero(claimed.medical_expenses);
        let alimony = max_zero(claimed.alimony_paid);
        let education = max_zero(claimed.education_costs).min(limits.education_max);

        let rent = match &limits.rent {
            Some(rule) => round_half_up(
                max_zero(claimed.annual_rent) * rule.percent / Decimal::ONE_HUNDRED,
            )
            .min(rule.max_amount),
            None => Decimal::ZERO,
        };

        OtherDeductions {
            debt_interest,
            donations,
            medical,
            alimony,
            education,
            rent,
            total: debt_interest + donations + medical + alimony + education + rent,
        }
    }
}
