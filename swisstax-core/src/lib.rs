pub mod calculations;
pub mod dataset;
pub mod models;

pub use calculations::{TaxCalculationError, TaxCalculator, calculate_budget};
pub use dataset::{DatasetError, TaxDataset};
pub use models::*;
