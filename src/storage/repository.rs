use log::debug;
use thiserror::Error;

use crate::domain::Expense;

use super::{Backend, FileBackend};

/// Serialized form of an empty collection.
pub const EMPTY_COLLECTION: &str = "[]";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to access {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {location}: {source}")]
    Corrupt {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode expenses: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Repository for loading and saving the whole expense collection.
pub struct Repository<B: Backend = FileBackend> {
    backend: B,
}

impl Repository<FileBackend> {
    /// Open a repository backed by the JSON file at `path`.
    /// The file is not touched until the first load or save.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileBackend::new(path))
    }
}

impl<B: Backend> Repository<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the full collection in stored order.
    ///
    /// A missing backing store is created holding an empty collection.
    /// Empty or whitespace-only content loads as empty.
    pub fn load(&self) -> Result<Vec<Expense>, StorageError> {
        let contents = match self.backend.read().map_err(|e| self.io_error(e))? {
            Some(contents) => contents,
            None => {
                debug!("{} does not exist, creating it", self.backend.location());
                self.backend
                    .write(EMPTY_COLLECTION)
                    .map_err(|e| self.io_error(e))?;
                return Ok(Vec::new());
            }
        };

        if contents.trim().is_empty() {
            debug!("{} is empty", self.backend.location());
            return Ok(Vec::new());
        }

        let expenses: Vec<Expense> =
            serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                location: self.backend.location(),
                source,
            })?;

        debug!(
            "Loaded {} expense(s) from {}",
            expenses.len(),
            self.backend.location()
        );
        Ok(expenses)
    }

    /// Overwrite the backing store with the full collection, pretty-printed.
    pub fn save(&self, expenses: &[Expense]) -> Result<(), StorageError> {
        // serde_json keeps the float marker on whole amounts (100.0, not 100).
        // Both forms load back to the same value.
        let contents = serde_json::to_string_pretty(expenses).map_err(StorageError::Encode)?;
        self.backend
            .write(&contents)
            .map_err(|e| self.io_error(e))?;

        debug!(
            "Saved {} expense(s) to {}",
            expenses.len(),
            self.backend.location()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            location: self.backend.location(),
            source,
        }
    }
}
