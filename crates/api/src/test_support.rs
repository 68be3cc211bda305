//! Helpers for driving the router in tests.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header::CONTENT_TYPE},
};
use http_body_util::BodyExt;
use sea_orm::{DatabaseConnection, Transaction};
use tally_shared::FrontendConfig;
use tower::ServiceExt;

use crate::{AppState, create_router};

/// Builds the API router over the given (usually mock) connection.
pub fn app(db: DatabaseConnection) -> Router {
    shared_app(&Arc::new(db))
}

/// Builds the API router over a connection the test keeps a handle to.
pub fn shared_app(db: &Arc<DatabaseConnection>) -> Router {
    create_router(AppState { db: Arc::clone(db) }, &FrontendConfig::default())
}

/// Drains the statements a mock connection received.
///
/// Every router built over `db` must already be dropped.
pub fn transaction_log(db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    Arc::try_unwrap(db)
        .expect("router still holds the connection")
        .into_transaction_log()
}

/// Sends one request and returns the status with the parsed JSON body.
///
/// Non-JSON bodies come back as `Value::Null`.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .oneshot(request.body(body).expect("valid request"))
        .await
        .expect("router is infallible");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}
