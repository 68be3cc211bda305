//! Ledger schema: expenses and per-month budgets.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(LEDGER_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS monthly_budget CASCADE;
             DROP TABLE IF EXISTS expenses CASCADE;",
        )
        .await?;
        Ok(())
    }
}

const LEDGER_SQL: &str = r"
-- Individual expenses
CREATE TABLE IF NOT EXISTS expenses (
    id BIGSERIAL PRIMARY KEY,
    category TEXT NOT NULL,
    amount NUMERIC(12, 2) NOT NULL,
    description TEXT,
    date DATE NOT NULL,
    CONSTRAINT chk_category_not_blank CHECK (btrim(category) <> '')
);

-- Listing order: newest first, id breaks ties
CREATE INDEX IF NOT EXISTS idx_expenses_date_id ON expenses (date DESC, id DESC);

-- One budget per month, keyed by YYYY-MM
CREATE TABLE IF NOT EXISTS monthly_budget (
    month VARCHAR(7) PRIMARY KEY,
    budget NUMERIC(12, 2) NOT NULL,
    CONSTRAINT chk_month_format CHECK (month ~ '^[0-9]{4}-(0[1-9]|1[0-2])$')
);
";
