//! Liveness endpoint.

use axum::{Json, Router, extract::State, routing::get};
use comuniapp_shared::types::Currency;
use serde::Serialize;

use crate::AppState;

/// Liveness payload, echoing the active billing settings.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// Currency charges are expressed in.
    pub currency: Currency,
    /// Precision shares are rounded to.
    pub decimal_places: u32,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        currency: state.billing.currency,
        decimal_places: state.billing.decimal_places,
    })
}

/// Creates the health route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
