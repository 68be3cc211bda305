//! Monthly budget repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set, sea_query::OnConflict};
use tally_core::{BudgetDraft, Month, MonthlyBudget};

use crate::entities::monthly_budget;

/// Repository for per-month budgets.
#[derive(Debug, Clone, Copy)]
pub struct MonthlyBudgetRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MonthlyBudgetRepository<'a> {
    /// Creates a new monthly budget repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the budget for a month, creating or overwriting its row.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT DO UPDATE`, so concurrent
    /// writers for the same month can neither duplicate the row nor lose it.
    pub async fn upsert(&self, draft: BudgetDraft) -> Result<(), DbErr> {
        let row = monthly_budget::ActiveModel {
            month: Set(draft.month.into()),
            budget: Set(draft.budget),
        };

        monthly_budget::Entity::insert(row)
            .on_conflict(
                OnConflict::column(monthly_budget::Column::Month)
                    .update_column(monthly_budget::Column::Budget)
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;
        Ok(())
    }

    /// Gets the budget for a month, or a zero budget when none was set.
    pub async fn find(&self, month: &Month) -> Result<MonthlyBudget, DbErr> {
        let row = monthly_budget::Entity::find_by_id(month.as_str())
            .one(self.db)
            .await?;

        Ok(row.map_or_else(
            || MonthlyBudget::unset(month),
            |r| MonthlyBudget {
                month: r.month,
                budget: r.budget,
            },
        ))
    }
}
