use chrono::NaiveDate;
use log::info;

use crate::domain::{next_id, total_for_month, Expense, ExpenseId};
use crate::storage::{Backend, FileBackend, Repository};

use super::{AppError, Command, Report, Summary};

/// Application service providing the expense operations.
///
/// Every operation loads the collection fresh and, when it mutates, saves
/// the whole collection back before returning.
pub struct ExpenseService<B: Backend = FileBackend> {
    repo: Repository<B>,
}

impl ExpenseService<FileBackend> {
    /// Create a service over the JSON file at `path`.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(Repository::open(path))
    }
}

impl<B: Backend> ExpenseService<B> {
    pub fn new(repo: Repository<B>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Repository<B> {
        &self.repo
    }

    /// Run a validated command. `today` is used as the date of new expenses.
    pub fn execute(&self, command: Command, today: NaiveDate) -> Result<Report, AppError> {
        match command {
            Command::Add {
                description,
                amount,
            } => {
                let expense = self.add(description, amount, today)?;
                Ok(Report::Added { id: expense.id })
            }
            Command::List => Ok(Report::Listed(self.list()?)),
            Command::Delete { id } => {
                self.delete(id)?;
                Ok(Report::Deleted)
            }
            Command::Update {
                id,
                description,
                amount,
            } => {
                self.update(id, description, amount)?;
                Ok(Report::Updated)
            }
            Command::Summary { month } => Ok(Report::Summary(self.summary(month)?)),
            Command::Export { output } => Ok(Report::Export {
                expenses: self.list()?,
                output,
            }),
            Command::Help => Ok(Report::Help),
        }
    }

    /// Record a new expense dated `date`.
    pub fn add(
        &self,
        description: String,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Expense, AppError> {
        if description.is_empty() || !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::InvalidInput);
        }

        let mut expenses = self.repo.load()?;
        let id = next_id(&expenses).ok_or(AppError::IdsExhausted(ExpenseId::MAX))?;
        let expense = Expense::new(id, description, amount, date);
        expenses.push(expense.clone());
        self.repo.save(&expenses)?;

        info!("Added expense {}", expense.id);
        Ok(expense)
    }

    /// All expenses in stored order.
    pub fn list(&self) -> Result<Vec<Expense>, AppError> {
        Ok(self.repo.load()?)
    }

    /// Remove the expense with the given id.
    pub fn delete(&self, id: ExpenseId) -> Result<Expense, AppError> {
        let mut expenses = self.repo.load()?;
        let index = expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::ExpenseNotFound(id.to_string()))?;

        let removed = expenses.remove(index);
        self.repo.save(&expenses)?;

        info!("Deleted expense {}", id);
        Ok(removed)
    }

    /// Replace the description and/or amount of an existing expense.
    ///
    /// The collection is saved even when neither field changes.
    pub fn update(
        &self,
        id: ExpenseId,
        description: Option<String>,
        amount: Option<f64>,
    ) -> Result<Expense, AppError> {
        let mut expenses = self.repo.load()?;
        let expense = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::ExpenseNotFound(id.to_string()))?;

        if let Some(description) = description.filter(|d| !d.is_empty()) {
            expense.description = description;
        }
        if let Some(amount) = amount.filter(|a| a.is_finite() && *a > 0.0) {
            expense.amount = amount;
        }
        let updated = expense.clone();

        self.repo.save(&expenses)?;

        info!("Updated expense {}", id);
        Ok(updated)
    }

    /// Total of all expenses, or of those recorded in `month` (1-12).
    pub fn summary(&self, month: Option<i32>) -> Result<Summary, AppError> {
        let expenses = self.repo.load()?;
        Ok(Summary {
            month,
            total: total_for_month(&expenses, month),
        })
    }
}
