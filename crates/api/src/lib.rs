//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for proration and expense previews
//! - JSON error responses built from `AppError`

pub mod error;
pub mod routes;

use axum::Router;
use comuniapp_shared::BillingConfig;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Billing settings (precision, currency).
    pub billing: Arc<BillingConfig>,
}

impl AppState {
    /// Creates state from billing settings.
    #[must_use]
    pub fn new(billing: BillingConfig) -> Self {
        Self {
            billing: Arc::new(billing),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
