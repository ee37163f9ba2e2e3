//! Common-expense proration across community units.

pub mod allocation;
pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use allocation::Allocation;
pub use calculator::{CENT_PLACES, ProrationCalculator, calculate_proration};
pub use error::ProrationError;
pub use types::{ProrationInput, ProrationMethod, ProrationShare};
