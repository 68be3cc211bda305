//! `SeaORM` entities.

pub mod expenses;
pub mod monthly_budget;
