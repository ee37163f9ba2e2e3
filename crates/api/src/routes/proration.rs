//! Proration preview routes.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use comuniapp_core::community::Unit;
use comuniapp_core::proration::{
    ProrationCalculator, ProrationInput, ProrationMethod, ProrationShare,
};
use comuniapp_shared::AppError;
use comuniapp_shared::types::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::AppState;
use crate::error::error_response;

/// Creates the proration routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/proration/preview", post(preview_proration))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for a proration preview.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProrationPreviewRequest {
    /// Units to charge.
    pub units: Vec<Unit>,
    /// Amount to split.
    pub total_amount: Decimal,
    /// Splitting policy.
    pub method: ProrationMethod,
}

/// Proration preview response.
#[derive(Debug, Serialize)]
pub struct ProrationPreviewResponse {
    /// Splitting policy used.
    pub method: ProrationMethod,
    /// Requested total.
    pub total_amount: Money,
    /// Sum of the shares.
    pub allocated_total: Money,
    /// Per-unit shares in request order.
    pub shares: Vec<ProrationShare>,
}

// ============================================================================
// Handlers
// ============================================================================

async fn preview_proration(
    State(state): State<AppState>,
    Json(payload): Json<ProrationPreviewRequest>,
) -> Response {
    let input = ProrationInput::new(payload.total_amount, payload.method);
    if let Err(e) = input.validate(&payload.units) {
        debug!(error = %e, "Rejected proration preview");
        return error_response(&AppError::from(e));
    }

    let shares = ProrationCalculator::calculate_with_precision(
        &payload.units,
        input.total_amount,
        input.method,
        state.billing.decimal_places,
    );
    let allocated_total = ProrationCalculator::allocated_total(&shares);

    info!(
        units = payload.units.len(),
        method = %input.method,
        total = %input.total_amount,
        "Proration preview computed"
    );

    Json(ProrationPreviewResponse {
        method: input.method,
        total_amount: Money::new(input.total_amount, state.billing.currency),
        allocated_total: Money::new(allocated_total, state.billing.currency),
        shares,
    })
    .into_response()
}
