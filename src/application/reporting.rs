use std::fmt;
use std::path::PathBuf;

use crate::domain::{format_amount, Expense, ExpenseId};

/// Outcome of running a command, rendered for the user by `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Added { id: ExpenseId },
    Listed(Vec<Expense>),
    Deleted,
    Updated,
    Summary(Summary),
    Export {
        expenses: Vec<Expense>,
        output: Option<PathBuf>,
    },
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub month: Option<i32>,
    pub total: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(month) => write!(
                f,
                "Total expenses for month {}: {}",
                month,
                format_amount(self.total)
            ),
            None => write!(f, "Total expenses: {}", format_amount(self.total)),
        }
    }
}

/// Usage text shown for a missing or unknown command.
pub const USAGE: &str = "\
Commands:
  spendlog add --description \"Text\" --amount 100
  spendlog list
  spendlog delete --id 1
  spendlog update --id 1 [--description \"New\"] [--amount 50]
  spendlog summary [--month 5]
  spendlog export [--output expenses.csv]

Run `spendlog --help` for all options.";

/// Render expenses as a fixed-width table, in stored order.
pub fn render_table(expenses: &[Expense]) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let mut lines = Vec::with_capacity(expenses.len() + 1);
    lines.push("ID  Date       Description     Amount".to_string());
    for expense in expenses {
        lines.push(format!(
            "{:<3} {}  {:<15} {}",
            expense.id,
            expense.date.format("%Y-%m-%d"),
            expense.description,
            format_amount(expense.amount)
        ));
    }
    lines.join("\n")
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Added { id } => write!(f, "Expense added successfully (ID: {})", id),
            Report::Listed(expenses) => write!(f, "{}", render_table(expenses)),
            Report::Deleted => write!(f, "Expense deleted successfully"),
            Report::Updated => write!(f, "Expense updated successfully"),
            Report::Summary(summary) => write!(f, "{}", summary),
            Report::Export { expenses, .. } => write!(f, "Exported {} expenses", expenses.len()),
            Report::Help => write!(f, "{}", USAGE),
        }
    }
}
