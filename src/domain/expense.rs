use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

pub type ExpenseId = u64;

/// A single recorded expense.
///
/// Field order matches the on-disk JSON layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
}

impl Expense {
    pub fn new(id: ExpenseId, description: String, amount: f64, date: NaiveDate) -> Self {
        Self {
            id,
            description,
            amount,
            date,
        }
    }

    /// Calendar month (1-12) the expense was recorded in.
    pub fn month(&self) -> u32 {
        self.date.month()
    }
}

/// Next id to assign: one past the highest id in use, or 1 for an empty collection.
///
/// Returns `None` once the highest id is `ExpenseId::MAX`.
pub fn next_id(expenses: &[Expense]) -> Option<ExpenseId> {
    match expenses.iter().map(|e| e.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Sum the amounts of every expense, optionally restricted to one calendar month.
///
/// Months outside 1-12 match nothing and yield zero.
pub fn total_for_month(expenses: &[Expense], month: Option<i32>) -> f64 {
    expenses
        .iter()
        .filter(|e| month.is_none_or(|m| i64::from(e.month()) == i64::from(m)))
        .map(|e| e.amount)
        .sum()
}
