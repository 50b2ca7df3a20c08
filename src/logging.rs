//! Tracing setup for myspot.
//!
//! Log records go to two places at once: the console and a plain,
//! non-rotating log file. The console macros in the crate root are for
//! user-facing CLI output and are not routed through here.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "myspot=info,warn";

/// Initialize the global subscriber.
///
/// The returned guard flushes the file writer when dropped, so the caller
/// keeps it alive for as long as the process logs. The filter can be
/// overridden through `RUST_LOG`.
///
/// # Errors
///
/// Fails if the log directory cannot be created or a global subscriber has
/// already been installed.
pub fn init_logging(log_file: &Path) -> Result<WorkerGuard, String> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;

    let file_name = log_file
        .file_name()
        .ok_or_else(|| format!("Invalid log file path: {}", log_file.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let console_layer = fmt::layer().with_target(true);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| e.to_string())?;

    tracing::debug!("Logging initialized - logs written to {}", log_file.display());

    Ok(guard)
}
