// src/logging.rs

use crate::errors::{WstailError, WstailResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts the developer-facing log channel.
///
/// The TUI owns the terminal, so lifecycle and error messages go to
/// `wstail.log` in the working directory instead of stderr. The returned
/// handle must be kept alive for the duration of the program.
pub fn init_logging(log_level: &str) -> WstailResult<LoggerHandle> {
    Logger::try_with_str(log_level)
        .map_err(|e| WstailError::Logging(format!("invalid log specification: {}", e)))?
        .log_to_file(FileSpec::default().basename("wstail").suppress_timestamp())
        .start()
        .map_err(|e| WstailError::Logging(format!("failed to start logger: {}", e)))
}
