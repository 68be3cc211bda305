//! Ledger validation errors.

use thiserror::Error;

/// Reasons an incoming expense or budget is rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A required field is absent, null or blank.
    #[error("Missing fields")]
    MissingFields,

    /// Date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Month is not a `YYYY-MM` key.
    #[error("Invalid month: {0}")]
    InvalidMonth(String),

    /// Amount is not a number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}
