//! Budget vs. spend history route.

use axum::{Json, Router, extract::State, routing::get};
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::HistoryRow;
use tally_db::ReportRepository;
use tally_shared::AppError;
use tracing::error;

use crate::{ApiError, AppState};

/// Creates the history routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/history", get(get_history))
}

/// One month of the history.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Budget for the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
    /// Total spent in the month.
    #[serde(with = "rust_decimal::serde::float")]
    pub spent: Decimal,
    /// Budget minus spent; negative when overspent.
    #[serde(with = "rust_decimal::serde::float")]
    pub remaining: Decimal,
}

impl From<HistoryRow> for HistoryResponse {
    fn from(row: HistoryRow) -> Self {
        Self {
            month: row.month,
            budget: row.budget,
            spent: row.spent,
            remaining: row.remaining,
        }
    }
}

/// GET `/history` - Every month with a budget or expenses, newest first.
async fn get_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<HistoryResponse>>, ApiError> {
    let repo = ReportRepository::new(&state.db);
    let rows = repo.monthly_history().await.map_err(|e| {
        error!(error = %e, "Error fetching history");
        AppError::store("Error fetching history", e)
    })?;

    Ok(Json(rows.into_iter().map(HistoryResponse::from).collect()))
}
