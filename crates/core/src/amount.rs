//! Lenient parsing of monetary input.
//!
//! Clients send amounts either as JSON numbers or as numeric strings
//! (`"120.50"`). Both end up as an exact `Decimal`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::LedgerError;

/// An amount as it appeared in the request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number.
    Number(serde_json::Number),
    /// A JSON string holding a number.
    Text(String),
}

impl RawAmount {
    /// Converts the raw value into a `Decimal`.
    ///
    /// Plain and scientific notation are accepted; anything else is rejected.
    pub fn to_decimal(&self) -> Result<Decimal, LedgerError> {
        let text = match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.trim().to_string(),
        };

        text.parse::<Decimal>()
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|_| LedgerError::InvalidAmount(text))
    }
}
