//! Monthly budget routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{BudgetInput, Month, MonthlyBudget};
use tally_db::MonthlyBudgetRepository;
use tally_shared::AppError;
use tracing::{error, info};

use super::expenses::AckResponse;
use crate::{ApiError, AppState, JsonBody};

/// Creates the monthly budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/monthly-budget", post(set_budget))
        .route("/monthly-budget/{month}", get(get_budget))
}

/// Response for a month's budget.
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Budgeted amount; zero when never set.
    #[serde(with = "rust_decimal::serde::float")]
    pub budget: Decimal,
}

impl From<MonthlyBudget> for BudgetResponse {
    fn from(budget: MonthlyBudget) -> Self {
        Self {
            month: budget.month,
            budget: budget.budget,
        }
    }
}

/// POST `/monthly-budget` - Set or overwrite a month's budget.
async fn set_budget(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<BudgetInput>,
) -> Result<Json<AckResponse>, ApiError> {
    let draft = payload.validate()?;
    let month = draft.month.clone();

    let repo = MonthlyBudgetRepository::new(&state.db);
    repo.upsert(draft).await.map_err(|e| {
        error!(error = %e, month = %month, "Error updating budget");
        AppError::store("Error updating budget", e)
    })?;

    info!(month = %month, "Budget updated");

    Ok(Json(AckResponse::message("Budget updated")))
}

/// GET `/monthly-budget/{month}` - A month's budget, zero if unset.
async fn get_budget(
    State(state): State<AppState>,
    Path(month): Path<String>,
) -> Result<Json<BudgetResponse>, ApiError> {
    let month = Month::parse(&month)?;

    let repo = MonthlyBudgetRepository::new(&state.db);
    let budget = repo.find(&month).await.map_err(|e| {
        error!(error = %e, month = %month, "Error fetching budget");
        AppError::store("Error fetching budget", e)
    })?;

    Ok(Json(budget.into()))
}
