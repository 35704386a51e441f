//! For setting up logging.

use super::error::{AppError, AppResult};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_error::ErrorLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Used when `RUST_LOG` is not set. Per-greeting spans are at debug.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Flushes logs upon being dropped.
#[derive(Debug)]
pub struct LogGuard {
    _guards: Vec<WorkerGuard>,
}

/// Initializes logging.
///
/// Fails if a global subscriber is already installed.
pub fn init_logging() -> AppResult<LogGuard> {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());

    let (non_blocking_stderr, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    let stderr = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_stderr)
        .with_filter(EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(stderr)
        .with(ErrorLayer::default())
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    Ok(LogGuard {
        _guards: vec![stderr_guard],
    })
}
