//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod budget;
pub mod expense;
pub mod report;

pub use budget::MonthlyBudgetRepository;
pub use expense::{ExpenseError, ExpenseRepository};
pub use report::ReportRepository;
