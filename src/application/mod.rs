// Application layer: validated commands, the expense service, and rendering
// of results. The CLI only parses arguments and prints what comes back.

mod command;
pub mod error;
mod reporting;
mod service;

pub use command::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
