//! File logging for sessions that own the terminal.
//!
//! The box draws on the terminal, so log output must never go there.  This
//! installs a global `tracing` subscriber writing plain text to a file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Send `tracing` output to `path`, opened in append mode.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.  Returns `Ok`
/// without doing anything if a global subscriber is already installed.
pub fn init_file_logging(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(true),
    );
    if subscriber.try_init().is_ok() {
        tracing::info!(log_file = %path.display(), "logging initialized");
    }
    Ok(())
}
