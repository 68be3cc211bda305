//! Expense input validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{LedgerError, RawAmount};

/// Wire format for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Expense fields as received from a client. Every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseInput {
    /// Spending category.
    pub category: Option<String>,
    /// Amount spent.
    pub amount: Option<RawAmount>,
    /// Free-form note.
    pub description: Option<String>,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: Option<String>,
}

/// A validated expense ready to be written.
///
/// Used for both inserts and full replacements; every field is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    /// Spending category as given; never blank.
    pub category: String,
    /// Amount spent.
    pub amount: Decimal,
    /// Optional note; blank input is stored as absent.
    pub description: Option<String>,
    /// Calendar date of the expense.
    pub date: NaiveDate,
}

impl ExpenseInput {
    /// Validates the input.
    ///
    /// Missing `category`, `amount` or `date` is reported as
    /// [`LedgerError::MissingFields`] before any value is parsed.
    pub fn validate(self) -> Result<ExpenseDraft, LedgerError> {
        let category = self.category.filter(|c| !c.trim().is_empty());
        let date = self.date.filter(|d| !d.trim().is_empty());

        let (Some(category), Some(amount), Some(date)) = (category, self.amount, date) else {
            return Err(LedgerError::MissingFields);
        };

        let amount = amount.to_decimal()?;
        let date = parse_date(&date)?;
        let description = self.description.filter(|d| !d.is_empty());

        Ok(ExpenseDraft {
            category,
            amount,
            description,
            date,
        })
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::InvalidDate(value.to_string()))
}
