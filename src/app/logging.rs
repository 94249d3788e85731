//! Logging initialization.

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::domain::AppError;

/// Install the global stderr subscriber.
///
/// Warnings are shown by default; `verbose` lowers the threshold to debug and
/// `quiet` raises it to errors only.
pub fn initialize_logging(verbose: bool, quiet: bool) -> Result<(), AppError> {
    let level = if verbose {
        Level::DEBUG
    } else if quiet {
        Level::ERROR
    } else {
        Level::WARN
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::config_error(format!("Failed to initialize logging: {}", e)))
}
