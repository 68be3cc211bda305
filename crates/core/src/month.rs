//! The `YYYY-MM` month key.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// A calendar month in canonical `YYYY-MM` form.
///
/// The textual form sorts lexicographically in chronological order, which the
/// history view relies on for its `month DESC` ordering.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Month(String);

impl Month {
    /// Parses a `YYYY-MM` string.
    pub fn parse(value: &str) -> Result<Self, LedgerError> {
        let invalid = || LedgerError::InvalidMonth(value.to_string());

        let bytes = value.as_bytes();
        let shape_ok = bytes.len() == 7
            && bytes[4] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || b.is_ascii_digit());
        if !shape_ok {
            return Err(invalid());
        }

        NaiveDate::parse_from_str(&format!("{value}-01"), "%Y-%m-%d").map_err(|_| invalid())?;
        Ok(Self(value.to_string()))
    }

    /// Returns the `YYYY-MM` text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Month {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Month> for String {
    fn from(month: Month) -> Self {
        month.0
    }
}
