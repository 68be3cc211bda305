//! Expense CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use rust_decimal::Decimal;
use serde::Serialize;
use tally_core::{ExpenseInput, expense::DATE_FORMAT};
use tally_db::{ExpenseError, ExpenseRepository, entities::expenses};
use tally_shared::AppError;
use tracing::{error, info};

use crate::{ApiError, AppState, JsonBody};

/// Creates the expense routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route(
            "/expenses/{id}",
            get(get_expense).put(update_expense).delete(delete_expense),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Response for an expense.
#[derive(Debug, Serialize)]
pub struct ExpenseResponse {
    /// Expense ID.
    pub id: i64,
    /// Spending category.
    pub category: String,
    /// Amount spent.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Optional note.
    pub description: Option<String>,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
}

impl From<expenses::Model> for ExpenseResponse {
    fn from(model: expenses::Model) -> Self {
        Self {
            id: model.id,
            category: model.category,
            amount: model.amount,
            description: model.description,
            date: model.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Acknowledgement for a write.
#[derive(Debug, Serialize)]
pub struct AckResponse {
    /// Outcome message.
    pub message: &'static str,
    /// ID of a newly created expense.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl AckResponse {
    /// Acknowledgement carrying only a message.
    #[must_use]
    pub const fn message(message: &'static str) -> Self {
        Self { message, id: None }
    }
}

/// Maps a repository failure to an API error, logging store failures.
fn expense_error(context: &'static str, err: ExpenseError) -> ApiError {
    match err {
        ExpenseError::NotFound(_) => AppError::NotFound("Not found".to_string()).into(),
        ExpenseError::Database(e) => {
            error!(error = %e, "{context}");
            AppError::store(context, e).into()
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/expenses` - Record a new expense.
async fn create_expense(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<ExpenseInput>,
) -> Result<Json<AckResponse>, ApiError> {
    let draft = payload.validate()?;

    let repo = ExpenseRepository::new(&state.db);
    let expense = repo
        .create(draft)
        .await
        .map_err(|e| expense_error("Error adding expense", e))?;

    info!(expense_id = expense.id, category = %expense.category, "Expense added");

    Ok(Json(AckResponse {
        message: "Expense added",
        id: Some(expense.id),
    }))
}

/// GET `/expenses` - All expenses, newest first.
async fn list_expenses(
    State(state): State<AppState>,
) -> Result<Json<Vec<ExpenseResponse>>, ApiError> {
    let repo = ExpenseRepository::new(&state.db);
    let rows = repo
        .list()
        .await
        .map_err(|e| expense_error("Error fetching expenses", e))?;

    Ok(Json(rows.into_iter().map(ExpenseResponse::from).collect()))
}

/// GET `/expenses/{id}` - A single expense.
async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ExpenseResponse>, ApiError> {
    let repo = ExpenseRepository::new(&state.db);
    let expense = repo
        .find_by_id(id)
        .await
        .map_err(|e| expense_error("Error fetching expense", e))?;

    Ok(Json(expense.into()))
}

/// PUT `/expenses/{id}` - Replace every field of an expense.
///
/// Succeeds even when no expense has this id.
async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    JsonBody(payload): JsonBody<ExpenseInput>,
) -> Result<Json<AckResponse>, ApiError> {
    let draft = payload.validate()?;

    let repo = ExpenseRepository::new(&state.db);
    let changed = repo
        .replace(id, draft)
        .await
        .map_err(|e| expense_error("Error updating expense", e))?;

    info!(expense_id = id, rows = changed, "Expense updated");

    Ok(Json(AckResponse::message("Expense updated")))
}

/// DELETE `/expenses/{id}` - Remove an expense.
///
/// Succeeds even when no expense has this id.
async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AckResponse>, ApiError> {
    let repo = ExpenseRepository::new(&state.db);
    let removed = repo
        .delete(id)
        .await
        .map_err(|e| expense_error("Error deleting expense", e))?;

    info!(expense_id = id, rows = removed, "Expense deleted");

    Ok(Json(AckResponse::message("Expense deleted")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use serde_json::json;

    use super::*;
    use crate::test_support::{app, send, shared_app, transaction_log};

    fn expense(id: i64, date: &str) -> expenses::Model {
        expenses::Model {
            id,
            category: "Food".to_string(),
            amount: dec!(120.50),
            description: Some("groceries".to_string()),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[tokio::test]
    async fn test_create_expense_returns_ack_with_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expense(12, "2024-03-09")]])
            .into_connection();

        let (status, body) = send(
            app(db),
            "POST",
            "/expenses",
            Some(r#"{"category":"Food","amount":"120.50","description":"groceries","date":"2024-03-09"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Expense added", "id": 12 }));
    }

    #[rstest]
    #[case(r#"{"amount":5,"date":"2024-01-01"}"#)]
    #[case(r#"{"category":"Food","amount":5}"#)]
    #[case(r#"{"category":"Food","date":"2024-01-01"}"#)]
    #[case(r#"{"category":"","amount":5,"date":"2024-01-01"}"#)]
    #[tokio::test]
    async fn test_create_missing_fields_never_reaches_store(#[case] payload: &str) {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let (status, body) = send(shared_app(&db), "POST", "/expenses", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing fields");
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_create_invalid_date_is_bad_request() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = send(
            app(db),
            "POST",
            "/expenses",
            Some(r#"{"category":"Food","amount":1,"date":"09/03/2024"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid date: 09/03/2024");
    }

    #[tokio::test]
    async fn test_create_store_failure_forwards_detail() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("disk full".to_string())])
            .into_connection();

        let (status, body) = send(
            app(db),
            "POST",
            "/expenses",
            Some(r#"{"category":"Food","amount":1,"date":"2024-01-01"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error adding expense");
        assert!(body["error"].as_str().unwrap_or_default().contains("disk full"));
    }

    #[tokio::test]
    async fn test_list_expenses_renders_rows_in_store_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                expense(2, "2024-02-01"),
                expense(3, "2024-01-01"),
                expense(1, "2024-01-01"),
            ]])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/expenses", None).await;

        assert_eq!(status, StatusCode::OK);
        let ids: Vec<i64> = body
            .as_array()
            .expect("array body")
            .iter()
            .filter_map(|e| e["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert_eq!(body[0]["date"], "2024-02-01");
        assert_eq!(body[0]["amount"], json!(120.5));
        assert_eq!(body[0]["description"], "groceries");
    }

    #[tokio::test]
    async fn test_list_store_failure_is_500() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/expenses", None).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Error fetching expenses");
        assert_eq!(body["code"], "STORE_ERROR");
    }

    #[tokio::test]
    async fn test_get_expense() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![expense(7, "2024-03-09")]])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/expenses/7", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 7,
                "category": "Food",
                "amount": 120.5,
                "description": "groceries",
                "date": "2024-03-09",
            })
        );
    }

    #[tokio::test]
    async fn test_get_missing_expense_is_404() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<expenses::Model>::new()])
            .into_connection();

        let (status, body) = send(app(db), "GET", "/expenses/999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Not found");
    }

    #[tokio::test]
    async fn test_update_unknown_id_still_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(0)])
            .into_connection();

        let (status, body) = send(
            app(db),
            "PUT",
            "/expenses/404",
            Some(r#"{"category":"Rent","amount":900,"date":"2024-03-01"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Expense updated" }));
    }

    #[tokio::test]
    async fn test_update_missing_fields_is_bad_request() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let (status, _) = send(
            shared_app(&db),
            "PUT",
            "/expenses/1",
            Some(r#"{"category":"Rent"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(transaction_log(db).is_empty());
    }

    #[rstest]
    #[case(r#"{"category":"Food","amount":5,"date":20240101}"#)]
    #[case(r#"{"category":"Food","amount":true,"date":"2024-01-01"}"#)]
    #[case(r#"{"category":"Food","amount":5,"da"#)]
    #[case(r#""Food""#)]
    #[tokio::test]
    async fn test_unreadable_body_is_json_validation_error(#[case] payload: &str) {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let (status, body) = send(shared_app(&db), "POST", "/expenses", Some(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].is_string(), "{body}");
        assert!(transaction_log(db).is_empty());
    }

    #[tokio::test]
    async fn test_update_mistyped_field_is_json_validation_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = send(
            app(db),
            "PUT",
            "/expenses/1",
            Some(r#"{"category":["Rent"],"amount":1,"date":"2024-01-01"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_create_stores_category_verbatim() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![expense(3, "2024-01-01")]])
                .into_connection(),
        );

        let (status, _) = send(
            shared_app(&db),
            "POST",
            "/expenses",
            Some(r#"{"category":" Food ","amount":1,"date":"2024-01-01"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let log = format!("{:?}", transaction_log(db));
        assert!(log.contains(" Food "), "{log}");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec(1), exec(0)])
            .into_connection();
        let app = app(db);

        let (first, body) = send(app.clone(), "DELETE", "/expenses/5", None).await;
        let (second, _) = send(app, "DELETE", "/expenses/5", None).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(second, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Expense deleted" }));
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());

        let (status, _) = send(shared_app(&db), "GET", "/expenses/abc", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(transaction_log(db).is_empty());
    }
}
