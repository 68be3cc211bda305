//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod budgets;
pub mod expenses;
pub mod health;
pub mod history;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(expenses::routes())
        .merge(budgets::routes())
        .merge(history::routes())
}
