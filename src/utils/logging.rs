//! Tracing subscriber setup for both binaries.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "flyvibe=info";

/// `RUST_LOG` if set, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Append log lines to `path`. The interactive game owns the terminal, so
/// nothing is written to stdout or stderr.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(DEFAULT_FILTER))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Log to stderr; `verbose` lowers the default level to debug.
pub fn init_stderr_logging(verbose: bool) {
    let fallback = if verbose { "flyvibe=debug" } else { DEFAULT_FILTER };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(fallback))
        .with_writer(io::stderr)
        .init();
}
