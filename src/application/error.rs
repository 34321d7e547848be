use thiserror::Error;

use crate::domain::ExpenseId;
use crate::storage::StorageError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid description or amount.")]
    InvalidInput,

    /// Holds the id as given, which may not even be a number.
    #[error("Expense not found.")]
    ExpenseNotFound(String),

    #[error("No expense ids left: highest id is {0}")]
    IdsExhausted(ExpenseId),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
