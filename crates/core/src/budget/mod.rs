//! Monthly budgets and the budget vs. spend history.

pub mod history;
pub mod types;


pub use history::HistoryRow;
pub use types::{BudgetDraft, BudgetInput, MonthlyBudget};
