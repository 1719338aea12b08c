//! The reference-data container all calculations run against.
//!
//! A [`TaxDataset`] owns one tax year's federal configuration, the
//! statutory contribution rates, the cantonal configurations, the
//! municipality list and the per-canton cost-of-living estimates. The
//! calculators only borrow it; nothing in here is mutated at calculation
//! time.
//!
//! [`TaxDataset::validate`] checks the structural invariants the bracket
//! evaluators rely on (contiguous tariffs starting at zero, open-ended top
//! brackets, chain-consistent base amounts) so that malformed tables fail
//! at load time instead of producing silently wrong tax figures.

use std::collections::{BTreeMap, HashMap, HashSet};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{
    CantonalTaxConfig, ContributionConfig, CostOfLiving, FederalTaxConfig, Municipality,
    SelfEmployedAhvScale, TaxBracket, WealthTaxBracket,
};

/// Structural problem in a dataset, reported by [`TaxDataset::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("{canton} {tariff} tariff has no brackets")]
    EmptyTariff { canton: String, tariff: String },

    #[error("{canton} {tariff} tariff starts at {start} instead of zero")]
    FirstBracketNotZero {
        canton: String,
        tariff: String,
        start: Decimal,
    },

    #[error("{canton} {tariff} tariff has a gap or overlap at {boundary}")]
    BracketsNotContiguous {
        canton: String,
        tariff: String,
        boundary: Decimal,
    },

    #[error("{canton} {tariff} tariff must end with an open bracket")]
    MissingOpenBracket { canton: String, tariff: String },

    #[error(
        "{canton} {tariff} tariff base amount at {boundary} is {found}, expected {expected}"
    )]
    BaseAmountMismatch {
        canton: String,
        tariff: String,
        boundary: Decimal,
        expected: Decimal,
        found: Decimal,
    },

    #[error("municipality {municipality} references unknown canton {canton}")]
    UnknownCantonForMunicipality {
        municipality: String,
        canton: String,
    },

    #[error("duplicate municipality id {0}")]
    DuplicateMunicipalityId(String),

    #[error("{jurisdiction} has a non-positive tax multiplier")]
    NonPositiveMultiplier { jurisdiction: String },

    #[error("self-employed contribution bands have a gap or overlap at {boundary}")]
    AhvBandsNotContiguous { boundary: Decimal },
}

/// Immutable reference data for one tax year.
#[derive(Debug, Clone)]
pub struct TaxDataset {
    tax_year: i32,
    federal: FederalTaxConfig,
    contributions: ContributionConfig,
    cantons: BTreeMap<String, CantonalTaxConfig>,

    // Municipality insertion order is the comparison iteration order, so
    // they live in a Vec with a separate id index.
    municipalities: Vec<Municipality>,
    municipality_index: HashMap<String, usize>,

    cost_of_living: BTreeMap<String, CostOfLiving>,
}

impl TaxDataset {
    pub fn new(
        tax_year: i32,
        federal: FederalTaxConfig,
        contributions: ContributionConfig,
    ) -> Self {
        Self {
            tax_year,
            federal,
            contributions,
            cantons: BTreeMap::new(),
            municipalities: Vec::new(),
            municipality_index: HashMap::new(),
            cost_of_living: BTreeMap::new(),
        }
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    pub fn federal(&self) -> &FederalTaxConfig {
        &self.federal
    }

    pub fn federal_mut(&mut self) -> &mut FederalTaxConfig {
        &mut self.federal
    }

    pub fn contributions(&self) -> &ContributionConfig {
        &self.contributions
    }

    pub fn insert_canton(
        &mut self,
        code: impl Into<String>,
        config: CantonalTaxConfig,
    ) {
        self.cantons.insert(code.into(), config);
    }

    pub fn insert_municipality(&mut self, municipality: Municipality) {
        self.municipality_index
            .insert(municipality.id.clone(), self.municipalities.len());
        self.municipalities.push(municipality);
    }

    pub fn insert_cost_of_living(
        &mut self,
        canton_code: impl Into<String>,
        costs: CostOfLiving,
    ) {
        self.cost_of_living.insert(canton_code.into(), costs);
    }

    pub fn canton(&self, code: &str) -> Option<&CantonalTaxConfig> {
        self.cantons.get(code)
    }

    pub fn canton_mut(&mut self, code: &str) -> Option<&mut CantonalTaxConfig> {
        self.cantons.get_mut(code)
    }

    /// Canton codes and configs in alphabetical order.
    pub fn cantons(&self) -> impl Iterator<Item = (&str, &CantonalTaxConfig)> {
        self.cantons.iter().map(|(code, config)| (code.as_str(), config))
    }

    pub fn municipality(&self, id: &str) -> Option<&Municipality> {
        self.municipality_index
            .get(id)
            .map(|&index| &self.municipalities[index])
    }

    /// All municipalities in insertion order.
    pub fn municipalities(&self) -> &[Municipality] {
        &self.municipalities
    }

    pub fn cost_of_living(&self, canton_code: &str) -> Option<&CostOfLiving> {
        self.cost_of_living.get(canton_code)
    }

    /// Checks the structural invariants of every table in the dataset.
    ///
    /// Returns the first violation found; a dataset that passes is safe to
    /// hand to the calculators.
    pub fn validate(&self) -> Result<(), DatasetError> {
        validate_income_tariff("CH", "single", &self.federal.tariffs.single)?;
        validate_income_tariff("CH", "married", &self.federal.tariffs.married)?;
        validate_ahv_bands(&self.contributions.self_employed)?;

        for (code, canton) in &self.cantons {
            validate_income_tariff(code, "single", &canton.tariffs.single)?;
            validate_income_tariff(code, "married", &canton.tariffs.married)?;

            if canton.tax_multiplier_percent <= Decimal::ZERO {
                return Err(DatasetError::NonPositiveMultiplier {
                    jurisdiction: code.clone(),
                });
            }

            if let Some(wealth) = &canton.wealth_tax {
                validate_wealth_brackets(code, &wealth.brackets)?;
            }
        }

        let mut seen = HashSet::new();
        for municipality in &self.municipalities {
            if !seen.insert(municipality.id.as_str()) {
                return Err(DatasetError::DuplicateMunicipalityId(
                    municipality.id.clone(),
                ));
            }
            if !self.cantons.contains_key(&municipality.canton_code) {
                return Err(DatasetError::UnknownCantonForMunicipality {
                    municipality: municipality.id.clone(),
                    canton: municipality.canton_code.clone(),
                });
            }
            if municipality.tax_multiplier_percent <= Decimal::ZERO {
                return Err(DatasetError::NonPositiveMultiplier {
                    jurisdiction: municipality.id.clone(),
                });
            }
        }

        Ok(())
    }
}

fn validate_income_tariff(
    canton: &str,
    tariff: &str,
    brackets: &[TaxBracket],
) -> Result<(), DatasetError> {
    let Some(first) = brackets.first() else {
        return Err(DatasetError::EmptyTariff {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
        });
    };
    if !first.min_income.is_zero() {
        return Err(DatasetError::FirstBracketNotZero {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
            start: first.min_income,
        });
    }

    for pair in brackets.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);

        let Some(max) = current.max_income else {
            // An open bracket anywhere but last shadows its successors.
            return Err(DatasetError::BracketsNotContiguous {
                canton: canton.to_string(),
                tariff: tariff.to_string(),
                boundary: next.min_income,
            });
        };
        if max != next.min_income {
            return Err(DatasetError::BracketsNotContiguous {
                canton: canton.to_string(),
                tariff: tariff.to_string(),
                boundary: next.min_income,
            });
        }

        // The base amount of each bracket must equal the tax accumulated
        // through the previous one, otherwise the tariff jumps at the
        // boundary.
        let expected = current.base_amount
            + (max - current.min_income) * current.rate_percent / Decimal::ONE_HUNDRED;
        if next.base_amount != expected {
            return Err(DatasetError::BaseAmountMismatch {
                canton: canton.to_string(),
                tariff: tariff.to_string(),
                boundary: next.min_income,
                expected,
                found: next.base_amount,
            });
        }
    }

    let last = brackets.last().unwrap_or(first);
    if last.max_income.is_some() {
        return Err(DatasetError::MissingOpenBracket {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
        });
    }

    Ok(())
}

fn validate_wealth_brackets(
    canton: &str,
    brackets: &[WealthTaxBracket],
) -> Result<(), DatasetError> {
    let tariff = "wealth";

    let Some(first) = brackets.first() else {
        return Err(DatasetError::EmptyTariff {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
        });
    };
    if !first.min_wealth.is_zero() {
        return Err(DatasetError::FirstBracketNotZero {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
            start: first.min_wealth,
        });
    }

    for pair in brackets.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        if current.max_wealth != Some(next.min_wealth) {
            return Err(DatasetError::BracketsNotContiguous {
                canton: canton.to_string(),
                tariff: tariff.to_string(),
                boundary: next.min_wealth,
            });
        }
    }

    let last = brackets.last().unwrap_or(first);
    if last.max_wealth.is_some() {
        return Err(DatasetError::MissingOpenBracket {
            canton: canton.to_string(),
            tariff: tariff.to_string(),
        });
    }

    Ok(())
}

fn validate_ahv_bands(scale: &SelfEmployedAhvScale) -> Result<(), DatasetError> {
    // The degressive zone between the thresholds must be tiled without
    // gaps; outside it the minimum and the full rate apply.
    if scale.lower_threshold >= scale.upper_threshold {
        return Ok(());
    }

    let Some(first) = scale.bands.first() else {
        return Err(DatasetError::AhvBandsNotContiguous {
            boundary: scale.lower_threshold,
        });
    };
    if first.min_income != scale.lower_threshold {
        return Err(DatasetError::AhvBandsNotContiguous {
            boundary: scale.lower_threshold,
        });
    }

    for pair in scale.bands.windows(2) {
        if pair[0].max_income != pair[1].min_income {
            return Err(DatasetError::AhvBandsNotContiguous {
                boundary: pair[1].min_income,
            });
        }
    }

    let last = scale.bands.last().unwrap_or(first);
    if last.max_income != scale.upper_threshold {
        return Err(DatasetError::AhvBandsNotContiguous {
            boundary: scale.upper_threshold,
        });
    }

    Ok(())
}
