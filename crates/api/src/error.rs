//! Error to HTTP response mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tally_core::LedgerError;
use tally_shared::AppError;

/// Handler error; renders an [`AppError`] as a JSON response.
///
/// Store failures carry the driver's message in the `error` field.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let code = self.0.error_code();

        let body = match self.0 {
            AppError::Store { message, detail } => json!({
                "code": code,
                "message": message,
                "error": detail,
            }),
            AppError::Validation(message) | AppError::NotFound(message) => json!({
                "code": code,
                "message": message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(AppError::Validation(rejection.body_text()))
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(AppError::Validation(err.to_string()))
    }
}
