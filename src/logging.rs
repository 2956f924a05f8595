//! File logging for terminal hosts
//!
//! The widgets only emit `tracing` events. A host that owns the terminal
//! cannot log to stdout without garbling the display, so this installs a
//! subscriber writing to a file instead.
//!
//! Precedence: `RUST_LOG` env var > default `info`.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber writing to `dir/prefix`
///
/// The returned guard flushes buffered lines when dropped and must be kept
/// alive for the life of the program.
pub fn init_file_logging(dir: impl AsRef<Path>, prefix: &str) -> Result<WorkerGuard> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = tracing_appender::rolling::never(dir, prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}
