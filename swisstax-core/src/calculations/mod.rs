//! Pure calculation engines over the reference data.
//!
//! Layered bottom up: [`common`] holds the rounding helpers, [`brackets`]
//! evaluates tariffs, [`ahv`] resolves the self-employed contribution
//! fixed point, [`deductions`] runs the six-category deduction engine,
//! [`wealth`] and [`budget`] are stand-alone calculations, and
//! [`composer`] orchestrates everything per taxpayer with [`comparison`]
//! ranking the per-municipality results on top.

pub mod ahv;
pub mod brackets;
pub mod budget;
pub mod common;
pub mod comparison;
pub mod composer;
pub mod deductions;
pub mod wealth;

pub use budget::calculate_budget;
pub use composer::{TaxCalculationError, TaxCalculator};
pub use wealth::calculate_wealth_tax;
