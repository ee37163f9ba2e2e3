//! Visit error types.

use comuniapp_shared::AppError;
use thiserror::Error;

use super::types::VisitStatus;

/// Errors raised by visit transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VisitError {
    /// Attempted an invalid status transition.
    #[error("Invalid visit status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: VisitStatus,
        /// The attempted target status.
        to: VisitStatus,
    },
}

impl From<VisitError> for AppError {
    fn from(err: VisitError) -> Self {
        AppError::BusinessRule(err.to_string())
    }
}
