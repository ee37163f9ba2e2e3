//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod expenses;
pub mod health;
pub mod proration;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(proration::routes())
        .merge(expenses::routes())
}
