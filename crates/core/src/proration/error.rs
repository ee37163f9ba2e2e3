//! Proration error types.

use comuniapp_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Precondition failures detected before prorating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProrationError {
    /// There are no units to charge.
    #[error("At least one unit is required")]
    NoUnits,

    /// Total amount is below zero.
    #[error("Total amount cannot be negative: {0}")]
    NegativeTotal(Decimal),
}

impl From<ProrationError> for AppError {
    fn from(err: ProrationError) -> Self {
        AppError::Validation(err.to_string())
    }
}
