//! Parcel error types.

use comuniapp_shared::AppError;
use thiserror::Error;

use super::types::ParcelStatus;

/// Errors raised by parcel transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParcelError {
    /// Attempted an invalid status transition.
    #[error("Invalid parcel status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ParcelStatus,
        /// The attempted target status.
        to: ParcelStatus,
    },
}

impl From<ParcelError> for AppError {
    fn from(err: ParcelError) -> Self {
        AppError::BusinessRule(err.to_string())
    }
}
