//! Common expense routes.

use axum::{
    Json, Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
};
use comuniapp_core::community::Unit;
use comuniapp_core::expense::{
    ExpenseForm, ExpenseStats, ExpenseStatus, ResidentExpense, filter_by_status,
};
use comuniapp_core::proration::{ProrationError, ProrationMethod, ProrationShare};
use comuniapp_shared::AppError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::AppState;
use crate::error::{error_response, error_response_with_fields};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses/preview", post(preview_expense))
        .route("/expenses/stats", post(expense_stats))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for previewing a draft expense.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpensePreviewRequest {
    /// The draft.
    pub form: ExpenseForm,
    /// Units of the billed community.
    pub units: Vec<Unit>,
}

/// Draft expense preview response.
#[derive(Debug, Serialize)]
pub struct ExpensePreviewResponse {
    /// Sum of the draft items.
    pub total_amount: Decimal,
    /// Splitting policy used.
    pub method: ProrationMethod,
    /// Per-unit shares.
    pub shares: Vec<ProrationShare>,
}

/// Request body for summarizing a resident's charges.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpenseStatsRequest {
    /// Charges to summarize.
    pub expenses: Vec<ResidentExpense>,
    /// Only count charges in this status.
    #[serde(default)]
    pub status: Option<ExpenseStatus>,
}

/// Expense statistics response.
#[derive(Debug, Serialize)]
pub struct ExpenseStatsResponse {
    /// Counts and amounts per status.
    #[serde(flatten)]
    pub stats: ExpenseStats,
    /// Paid charges over all charges, in percent.
    pub payment_percentage: Decimal,
}

// ============================================================================
// Handlers
// ============================================================================

async fn preview_expense(
    State(state): State<AppState>,
    Json(payload): Json<ExpensePreviewRequest>,
) -> Response {
    if payload.units.is_empty() {
        return error_response(&AppError::from(ProrationError::NoUnits));
    }

    let preview = match payload
        .form
        .preview(&payload.units, state.billing.decimal_places)
    {
        Ok(preview) => preview,
        Err(errors) => {
            debug!(fields = errors.len(), "Expense draft failed validation");
            let app_error = AppError::from(errors.clone());
            return error_response_with_fields(&app_error, errors);
        }
    };

    info!(
        community_id = %payload.form.community_id,
        period = %payload.form.period,
        total = %preview.total_amount,
        "Expense preview computed"
    );

    Json(ExpensePreviewResponse {
        total_amount: preview.total_amount,
        method: preview.method,
        shares: preview.shares,
    })
    .into_response()
}

async fn expense_stats(Json(payload): Json<ExpenseStatsRequest>) -> Response {
    let stats = match ExpenseStats::from_charges(
        filter_by_status(&payload.expenses, payload.status)
            .into_iter()
            .map(|e| (e.amount, e.status)),
    ) {
        Ok(stats) => stats,
        Err(e) => {
            debug!(error = %e, "Rejected expense statistics");
            return error_response(&AppError::from(e));
        }
    };

    Json(ExpenseStatsResponse {
        payment_percentage: stats.payment_percentage(),
        stats,
    })
    .into_response()
}
