mod backend;
mod repository;

pub use backend::*;
pub use repository::*;

/// Default location of the backing file, relative to the working directory.
pub const DEFAULT_FILE: &str = "expenses.json";
