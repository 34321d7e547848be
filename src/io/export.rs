use std::io::Write;

use crate::application::AppError;
use crate::domain::Expense;

/// Exporter for writing the expense collection to CSV.
pub struct Exporter<'a> {
    expenses: &'a [Expense],
}

impl<'a> Exporter<'a> {
    pub fn new(expenses: &'a [Expense]) -> Self {
        Self { expenses }
    }

    /// Export expenses to CSV with an `id,date,description,amount` header.
    /// Returns the number of rows written.
    pub fn export_csv<W: Write>(&self, writer: W) -> Result<usize, AppError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["id", "date", "description", "amount"])?;

        for expense in self.expenses {
            csv_writer.write_record(&[
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                expense.description.clone(),
                expense.amount.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(self.expenses.len())
    }
}
