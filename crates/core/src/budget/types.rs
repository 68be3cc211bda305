//! Monthly budget data types.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{LedgerError, Month, RawAmount};

/// Budget fields as received from a client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BudgetInput {
    /// Month key, `YYYY-MM`.
    pub month: Option<String>,
    /// Budgeted amount for the month.
    pub budget: Option<RawAmount>,
}

/// A validated budget, written with insert-or-update semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    /// Month key.
    pub month: Month,
    /// Budgeted amount.
    pub budget: Decimal,
}

impl BudgetInput {
    /// Validates the input.
    pub fn validate(self) -> Result<BudgetDraft, LedgerError> {
        let month = self.month.filter(|m| !m.trim().is_empty());
        let (Some(month), Some(budget)) = (month, self.budget) else {
            return Err(LedgerError::MissingFields);
        };

        Ok(BudgetDraft {
            month: Month::parse(month.trim())?,
            budget: budget.to_decimal()?,
        })
    }
}

/// The budget recorded for a month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyBudget {
    /// Month key.
    pub month: String,
    /// Budgeted amount.
    pub budget: Decimal,
}

impl MonthlyBudget {
    /// Placeholder for a month nobody has budgeted yet.
    #[must_use]
    pub fn unset(month: &Month) -> Self {
        Self {
            month: month.to_string(),
            budget: Decimal::ZERO,
        }
    }
}
