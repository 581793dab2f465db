//! Tracing subscriber setup.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset and logs go to a file.
const FILE_FILTER: &str = "info,marubatsu=debug,marubatsu_core=debug";

/// Filter used when `RUST_LOG` is unset and logs share the terminal.
const STDERR_FILTER: &str = "warn";

/// Sends logs to `path` so they do not corrupt a full-screen terminal.
pub fn init_file(path: &Path) -> std::io::Result<()> {
    let log_file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(FILE_FILTER)),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Sends logs to stderr.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(STDERR_FILTER)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
