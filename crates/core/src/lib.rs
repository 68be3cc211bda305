//! Core ledger rules for Tally.
//!
//! This crate contains pure domain logic with ZERO web or database dependencies.
//! Input validation, the `Month` key and the history row arithmetic live here.
//!
//! # Modules
//!
//! - `expense` - Expense input validation
//! - `budget` - Monthly budgets and the budget vs. spend history
//! - `month` - The `YYYY-MM` month key
//! - `amount` - Lenient parsing of monetary input

pub mod amount;
pub mod budget;
pub mod error;
pub mod expense;
pub mod month;

pub use amount::RawAmount;
pub use budget::{BudgetDraft, BudgetInput, HistoryRow, MonthlyBudget};
pub use error::LedgerError;
pub use expense::{ExpenseDraft, ExpenseInput};
pub use month::Month;
