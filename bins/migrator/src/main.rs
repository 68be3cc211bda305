//! Database migration runner for Tally.
//!
//! Reads the target from `DATABASE_URL`.
//!
//! Usage:
//!   migrator up      - Create the expenses and monthly_budget tables
//!   migrator down    - Rollback last migration
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use sea_orm_migration::prelude::*;
use tally_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The migrator CLI sets up its own tracing.
    cli::run_cli(Migrator).await;
}
