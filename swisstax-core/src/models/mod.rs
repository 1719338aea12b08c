mod bracket;
mod breakdown;
mod budget;
mod canton;
mod comparison;
mod deductions;
mod federal;
mod input;
mod municipality;
mod status;
mod taxpayer;

pub use bracket::{Tariffs, TaxBracket, WealthTaxBracket};
pub use breakdown::{TaxBreakdown, TaxLevelResult, WealthTaxResult};
pub use budget::{
    BudgetBreakdown, BudgetGuideline, BudgetInputs, ChildCosts, GuidelineStatus, HealthcareCosts,
    HousingCosts,
};
pub use canton::{
    CantonalTaxConfig, CostOfLiving, DeductionLimits, InsurancePremiumLimits, OtherDeductionLimits,
    PersonalDeductionLimits, Pillar3aLimits, ProfessionalExpenseLimits, RentDeductionRule,
    SocialDeductionAmounts, WealthAllowances, WealthTaxConfig,
};
pub use comparison::{BudgetComparisonResult, TaxComparisonResult};
pub use deductions::{
    DeductionBreakdown, OtherDeductions, PensionDeductions, PersonalDeductions,
    ProfessionalDeductions, SocialInsuranceDeductions,
};
pub use federal::{
    AlvRates, ContributionConfig, DegressiveRateBand, FederalTaxConfig, SelfEmployedAhvScale,
};
pub use input::{
    DeductionInputs, IncomeInputs, InsurancePremiums, OtherExpenses, PensionContributions,
    PersonalCircumstances, ProfessionalExpenses, TaxCalculationInput,
};
pub use municipality::{ChurchTaxMultipliers, Municipality};
pub use status::{CivilStatus, Religion};
pub use taxpayer::TaxpayerProfile;
