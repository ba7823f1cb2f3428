//! Action log setup

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// Default location of the action log
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// Install the global logger. With a path, lines are appended to that file
/// as "timestamp - LEVEL - message"; without one they go to stderr.
/// `RUST_LOG` overrides the default `info` filter.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder
            .target(Target::Pipe(Box::new(file)))
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} - {} - {}",
                    buf.timestamp_seconds(),
                    record.level(),
                    record.args()
                )
            });
    }

    builder.try_init().context("Failed to install logger")?;
    Ok(())
}
