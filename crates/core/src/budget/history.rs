//! Budget vs. spend per month.

use rust_decimal::Decimal;

/// One month of the history view.
///
/// Built from the aggregated store row; `remaining` is always derived here so
/// it can never disagree with `budget` and `spent`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    /// Month key, `YYYY-MM`.
    pub month: String,
    /// Budget for the month, zero when none was set.
    pub budget: Decimal,
    /// Sum of expenses dated in the month, zero when none.
    pub spent: Decimal,
    /// `budget - spent`.
    pub remaining: Decimal,
}

impl HistoryRow {
    /// Creates a row, treating absent totals as zero.
    #[must_use]
    pub fn new(month: impl Into<String>, budget: Option<Decimal>, spent: Option<Decimal>) -> Self {
        let budget = budget.unwrap_or(Decimal::ZERO);
        let spent = spent.unwrap_or(Decimal::ZERO);
        Self {
            month: month.into(),
            budget,
            spent,
            remaining: budget - spent,
        }
    }
}
