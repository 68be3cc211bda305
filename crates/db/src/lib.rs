//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{ExpenseError, ExpenseRepository, MonthlyBudgetRepository, ReportRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tally_shared::DatabaseConfig;

/// Creates the connection pool.
///
/// The pool is lazy: no connection is opened until the first statement runs,
/// so an unreachable database surfaces on first use rather than here.
///
/// # Errors
///
/// Returns an error if the connection options are invalid.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.connection_url());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_lazy(true)
        .sqlx_logging(false);

    Database::connect(options).await
}
