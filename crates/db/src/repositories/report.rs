//! Report repository: the monthly budget vs. spend history.

use rust_decimal::Decimal;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, Statement};
use tally_core::HistoryRow;

/// Every month that has expenses or a budget, with its totals, newest first.
///
/// The derived month set is the union of both tables so no month is dropped;
/// each month is then left-joined to its budget and its expenses.
const MONTHLY_HISTORY_SQL: &str = r"
SELECT months.month AS month,
       COALESCE(m.budget, 0) AS budget,
       COALESCE(SUM(e.amount), 0) AS spent
FROM (
    SELECT to_char(date, 'YYYY-MM') AS month FROM expenses
    UNION
    SELECT month FROM monthly_budget
) AS months
LEFT JOIN monthly_budget m ON m.month = months.month
LEFT JOIN expenses e ON to_char(e.date, 'YYYY-MM') = months.month
GROUP BY months.month, m.budget
ORDER BY months.month DESC
";

#[derive(Debug, FromQueryResult)]
struct MonthTotals {
    month: String,
    budget: Option<Decimal>,
    spent: Option<Decimal>,
}

/// Repository for derived, read-only views.
#[derive(Debug, Clone, Copy)]
pub struct ReportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportRepository<'a> {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns budget, spent and remaining for every known month, newest first.
    pub async fn monthly_history(&self) -> Result<Vec<HistoryRow>, DbErr> {
        let statement = Statement::from_string(self.db.get_database_backend(), MONTHLY_HISTORY_SQL);

        let rows = MonthTotals::find_by_statement(statement)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| HistoryRow::new(r.month, r.budget, r.spent))
            .collect())
    }
}
