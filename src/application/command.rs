use std::path::PathBuf;

use crate::domain::{parse_amount, ExpenseId};

use super::AppError;

/// A fully validated command, ready to run against the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { description: String, amount: f64 },
    List,
    Delete { id: ExpenseId },
    Update {
        id: ExpenseId,
        description: Option<String>,
        amount: Option<f64>,
    },
    Summary { month: Option<i32> },
    Export { output: Option<PathBuf> },
    Help,
}

impl Command {
    /// Build an add command. Both fields are mandatory: the description must be
    /// non-empty and the amount a finite number greater than zero.
    pub fn add(description: Option<String>, amount: Option<&str>) -> Result<Self, AppError> {
        let description = description
            .filter(|d| !d.is_empty())
            .ok_or(AppError::InvalidInput)?;
        let amount = amount
            .ok_or(AppError::InvalidInput)
            .and_then(|a| parse_amount(a).map_err(|_| AppError::InvalidInput))?;

        Ok(Command::Add {
            description,
            amount,
        })
    }

    /// Build an update command. Unlike `add`, an unusable amount is dropped
    /// rather than rejected, and so is an empty description.
    pub fn update(id: ExpenseId, description: Option<String>, amount: Option<&str>) -> Self {
        Command::Update {
            id,
            description: description.filter(|d| !d.is_empty()),
            amount: amount.and_then(|a| parse_amount(a).ok()),
        }
    }

    /// Build a summary command. A month that is not a number means no filter;
    /// a number outside 1-12 is kept and simply matches nothing.
    pub fn summary(month: Option<&str>) -> Self {
        Command::Summary {
            month: month.and_then(|m| m.trim().parse().ok()),
        }
    }

    /// Whether running this command may write to the store.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Add { .. } | Command::Delete { .. } | Command::Update { .. }
        )
    }
}

/// Parse an expense id given on the command line.
///
/// A missing or non-numeric id cannot match any stored expense, so it is
/// reported as not found.
pub fn parse_id(raw: Option<&str>) -> Result<ExpenseId, AppError> {
    raw.and_then(|r| r.trim().parse().ok())
        .ok_or_else(|| AppError::ExpenseNotFound(raw.unwrap_or_default().to_string()))
}
