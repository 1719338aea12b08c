use std::collections::HashSet;
use std::io::Read;

use rust_decimal::Decimal;
use serde::Deserialize;
use swisstax_core::{CivilStatus, DatasetError, TaxBracket, TaxDataset};
use thiserror::Error;

/// Errors that can occur when loading tariff data.
#[derive(Debug, Error)]
pub enum TariffCsvError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Invalid civil status: {0}")]
    InvalidStatus(String),

    #[error("Unknown canton code: {0}")]
    UnknownCanton(String),

    #[error("Applied tariffs failed validation: {0}")]
    Dataset(#[from] DatasetError),
}

impl From<csv::Error> for TariffCsvError {
    fn from(err: csv::Error) -> Self {
        TariffCsvError::CsvParse(err.to_string())
    }
}

/// A single record from a tariff CSV file.
///
/// The CSV columns are:
/// - `canton`: canton code, or `CH` for the federal tariff
/// - `status`: `single` or `married`
/// - `min_income`: lower income bound of the bracket
/// - `max_income`: upper income bound (empty for the open top bracket)
/// - `base_amount`: tax accumulated at `min_income`
/// - `rate_percent`: marginal rate inside the bracket, as a percentage
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TariffRecord {
    pub canton: String,
    pub status: String,
    pub min_income: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub base_amount: Decimal,
    pub rate_percent: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for tariff overrides from CSV files.
///
/// Records replace whole tariffs in an existing [`TaxDataset`]: the first
/// record for a (canton, status) pair clears that tariff, subsequent
/// records append to it in file order. Applying the same file twice
/// therefore produces the same tariffs, and the dataset is re-validated
/// after every application so a malformed file cannot leave broken
/// tables behind.
pub struct TariffCsvLoader;

impl TariffCsvLoader {
    /// Parse tariff records from a CSV reader.
    ///
    /// Returns the records in file order. The reader can be any type that
    /// implements `Read`, such as a file or a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TariffRecord>, TariffCsvError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TariffRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Replace tariffs in the dataset with the given records.
    ///
    /// Returns the number of brackets applied. The dataset is validated
    /// after the replacement; on error the dataset may hold partially
    /// replaced tariffs and should be discarded.
    pub fn apply(
        dataset: &mut TaxDataset,
        records: &[TariffRecord],
    ) -> Result<usize, TariffCsvError> {
        let mut replaced: HashSet<(String, String)> = HashSet::new();
        let mut applied = 0;

        for record in records {
            let status = CivilStatus::parse(&record.status)
                .ok_or_else(|| TariffCsvError::InvalidStatus(record.status.clone()))?;

            let bracket = TaxBracket {
                min_income: record.min_income,
                max_income: record.max_income,
                base_amount: record.base_amount,
                rate_percent: record.rate_percent,
            };

            let tariffs = if record.canton == "CH" {
                &mut dataset.federal_mut().tariffs
            } else {
                &mut dataset
                    .canton_mut(&record.canton)
                    .ok_or_else(|| TariffCsvError::UnknownCanton(record.canton.clone()))?
                    .tariffs
            };
            let tariff = match status {
                CivilStatus::Single => &mut tariffs.single,
                CivilStatus::Married => &mut tariffs.married,
            };

            if replaced.insert((record.canton.clone(), record.status.clone())) {
                tariff.clear();
            }
            tariff.push(bracket);
            applied += 1;
        }

        dataset.validate()?;

        Ok(applied)
    }
}
