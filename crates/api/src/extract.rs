//! Request extractors.

use axum::extract::FromRequest;

use crate::ApiError;

/// JSON request body.
///
/// Malformed or mistyped bodies are rejected as validation errors with a JSON
/// body instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
