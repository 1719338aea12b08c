use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use swisstax_data::{TariffCsvLoader, builtin_dataset};

/// Validate the built-in tax dataset, optionally with tariff overrides.
///
/// The override CSV file should have the following columns:
/// - canton: canton code, or CH for the federal tariff
/// - status: single or married
/// - min_income: the lower income bound of the bracket
/// - max_income: the upper income bound (empty for the open top bracket)
/// - base_amount: the tax accumulated at min_income
/// - rate_percent: the marginal rate inside the bracket (e.g. 6.6 for 6.6%)
#[derive(Parser, Debug)]
#[command(name = "swisstax-data-check")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a CSV file with tariff overrides to apply before validation
    #[arg(short, long)]
    tariffs: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut dataset = builtin_dataset();

    if let Some(path) = &args.tariffs {
        println!("Applying tariff overrides from: {}", path.display());

        let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;

        let records = TariffCsvLoader::parse(file)
            .with_context(|| format!("Failed to parse CSV: {}", path.display()))?;

        println!("Parsed {} records from CSV", records.len());

        let applied = TariffCsvLoader::apply(&mut dataset, &records)
            .context("Failed to apply tariff overrides")?;

        println!("Replaced {} tariff brackets.", applied);
    } else {
        dataset
            .validate()
            .context("Built-in dataset failed validation")?;
    }

    println!("Dataset for tax year {} is consistent.", dataset.tax_year());

    for (code, canton) in dataset.cantons() {
        let municipalities = dataset
            .municipalities()
            .iter()
            .filter(|m| m.canton_code == code)
            .count();
        println!("  {} {} ({} municipalities)", code, canton.name, municipalities);
    }

    println!(
        "{} cantons, {} municipalities in total.",
        dataset.cantons().count(),
        dataset.municipalities().len()
    );

    Ok(())
}
