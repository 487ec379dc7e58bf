//! Diagnostic logging setup.
//!
//! The TUI owns stdout/stderr while it runs, so interactive sessions only log
//! when a file is given. One-shot commands log to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "carenav=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// Discard everything unless a file was supplied.
    FileOnly,
    /// Write to stderr when no file was supplied.
    StderrFallback,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Returns a description of where logs go.
///
/// Fails when the log file cannot be opened or a subscriber is already set.
pub fn init_tracing(log_file: Option<&Path>, target: LogTarget) -> Result<String, Box<dyn Error>> {
    match (log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_target(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter())
                .try_init()?;
            Ok(format!("logging to {}", path.display()))
        }
        (None, LogTarget::StderrFallback) => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .with(env_filter())
                .try_init()?;
            Ok("logging to stderr".to_string())
        }
        (None, LogTarget::FileOnly) => Ok("logging disabled".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_only_without_path_installs_nothing() {
        let status = init_tracing(None, LogTarget::FileOnly).expect("no-op succeeds");
        assert_eq!(status, "logging disabled");
    }

    #[test]
    fn log_file_is_created_and_second_install_fails() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("carenav.log");
        let status = init_tracing(Some(&path), LogTarget::FileOnly).expect("init succeeds");
        assert!(path.exists());
        assert!(status.contains("carenav.log"));

        let again = dir.path().join("again.log");
        assert!(init_tracing(Some(&again), LogTarget::FileOnly).is_err());
        assert!(init_tracing(None, LogTarget::StderrFallback).is_err());
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("missing-dir").join("carenav.log");
        assert!(init_tracing(Some(&path), LogTarget::StderrFallback).is_err());
    }
}
