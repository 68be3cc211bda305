//! Application-wide error types.

use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid request input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failure reported by the persistence layer.
    ///
    /// `detail` carries the raw driver message and is forwarded to the caller.
    #[error("{message}: {detail}")]
    Store {
        /// Operation-specific context, e.g. "Error adding expense".
        message: String,
        /// Underlying store error text.
        detail: String,
    },
}

impl AppError {
    /// Builds a store error from a context message and any displayable cause.
    pub fn store(message: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Store {
            message: message.into(),
            detail: cause.to_string(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::NotFound(_) => 404,
            Self::Store { .. } => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store { .. } => "STORE_ERROR",
        }
    }
}
