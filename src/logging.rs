//! Tracing subscriber setup.
//!
//! The dashboard owns the terminal, so its logs go to a file. One-shot CLI
//! commands log to stderr. `BIZOS_LOG` overrides the configured filter.

use crate::error::Result;
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_ENV_VAR: &str = "BIZOS_LOG";

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Append logs to `path` without ANSI colors.
pub fn init_file_logging(path: &Path, default_level: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    // try_init: a subscriber may already be installed (tests, repeated runs)
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

pub fn init_stderr_logging(default_level: &str) {
    let _ = fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("logs").join("bizos.log");

        init_file_logging(&path, "info").unwrap();

        assert!(path.exists());
    }
}
