pub mod loader;
pub mod tables;

pub use loader::{TariffCsvError, TariffCsvLoader, TariffRecord};
pub use tables::builtin_dataset;
