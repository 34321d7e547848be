//! Diagnostic logging bootstrap.
//!
//! Diagnostics go to stderr through the `log` facade; command output is
//! printed separately and is never routed through the logger.
//!
//! `RUST_LOG` overrides the level picked from the verbosity flag.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Log level used for the given verbosity.
pub fn level_for(verbose: bool) -> &'static str {
    if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL }
}

/// Start the stderr logger.
///
/// The returned handle must be kept alive for the lifetime of the process.
pub fn init_logging(verbose: bool) -> Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(level_for(verbose))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
}
