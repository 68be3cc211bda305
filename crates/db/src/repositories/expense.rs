//! Expense repository for expense database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use tally_core::ExpenseDraft;

use crate::entities::expenses;

/// Error types for expense operations.
#[derive(Debug, thiserror::Error)]
pub enum ExpenseError {
    /// Expense not found.
    #[error("Expense not found: {0}")]
    NotFound(i64),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Expense repository for CRUD operations.
#[derive(Debug, Clone, Copy)]
pub struct ExpenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpenseRepository<'a> {
    /// Creates a new expense repository.
    #[must_use]
    pub const fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new expense and returns the stored row.
    pub async fn create(&self, draft: ExpenseDraft) -> Result<expenses::Model, ExpenseError> {
        let expense = expenses::ActiveModel {
            id: NotSet,
            category: Set(draft.category),
            amount: Set(draft.amount),
            description: Set(draft.description),
            date: Set(draft.date),
        };

        let result = expense.insert(self.db).await?;
        Ok(result)
    }

    /// Lists every expense, newest date first and highest id first within a date.
    pub async fn list(&self) -> Result<Vec<expenses::Model>, ExpenseError> {
        let rows = expenses::Entity::find()
            .order_by_desc(expenses::Column::Date)
            .order_by_desc(expenses::Column::Id)
            .all(self.db)
            .await?;
        Ok(rows)
    }

    /// Gets an expense by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<expenses::Model, ExpenseError> {
        expenses::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(ExpenseError::NotFound(id))
    }

    /// Overwrites every field of the expense with `id`.
    ///
    /// No existence check is made; an unknown id updates nothing. Returns the
    /// number of rows changed.
    pub async fn replace(&self, id: i64, draft: ExpenseDraft) -> Result<u64, ExpenseError> {
        let changes = expenses::ActiveModel {
            id: NotSet,
            category: Set(draft.category),
            amount: Set(draft.amount),
            description: Set(draft.description),
            date: Set(draft.date),
        };

        let result = expenses::Entity::update_many()
            .set(changes)
            .filter(expenses::Column::Id.eq(id))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Deletes the expense with `id`, returning the number of rows removed.
    ///
    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: i64) -> Result<u64, ExpenseError> {
        let result = expenses::Entity::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected)
    }
}
