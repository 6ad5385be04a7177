//! Daily log files for robot runs.
//!
//! Installs a tracing subscriber that writes to stderr and to a
//! `DD-MM-YYYY.log` file in the configured directory, and provides
//! retention cleanup for old log files.

use crate::error::{OperarioError, Result};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Manages the per-day log file for a robot process.
///
/// One instance is created at startup; the file path is later handed to
/// the failure notifier so the day's log can be attached to alert mails.
#[derive(Debug)]
pub struct LogManager {
    dir: PathBuf,
    path: PathBuf,
}

impl LogManager {
    /// Create the log directory, open today's log file and install the
    /// global tracing subscriber (file + stderr, `RUST_LOG`-filterable).
    ///
    /// # Errors
    /// Returns error if the directory or file cannot be created, or if a
    /// global subscriber was already installed.
    pub fn init(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let filename = format!("{}.log", Local::now().format("%d-%m-%Y"));
        let path = dir.join(filename);

        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .map_err(|e| {
                OperarioError::Internal(format!("failed to install tracing subscriber: {e}"))
            })?;

        tracing::info!("Logging initialized, file: {}", path.display());
        Ok(Self { dir, path })
    }

    /// Path of today's log file.
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.path
    }

    /// Size of today's log file in bytes; 0 if it doesn't exist yet.
    #[must_use]
    pub fn log_size(&self) -> u64 {
        fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
    }

    /// Remove `*.log` files in the log directory older than `days`.
    ///
    /// Returns the number of files removed. Files whose age cannot be
    /// determined are left alone.
    pub fn delete_old_logs(&self, days: u32) -> Result<usize> {
        delete_old_logs(&self.dir, days)
    }
}

/// Remove `*.log` files in `dir` with a modification time older than `days`.
pub fn delete_old_logs(dir: &Path, days: u32) -> Result<usize> {
    let cutoff = std::time::SystemTime::now()
        .checked_sub(std::time::Duration::from_secs(u64::from(days) * 86_400));
    let Some(cutoff) = cutoff else {
        return Ok(0);
    };

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }
        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };
        if modified < cutoff {
            fs::remove_file(&path)?;
            removed += 1;
            tracing::info!("Removed old log file: {}", path.display());
        }
    }

    if removed > 0 {
        tracing::info!("Log cleanup complete: {} file(s) removed", removed);
    }
    Ok(removed)
}
