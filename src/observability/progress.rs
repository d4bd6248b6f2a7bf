use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// `2026-Oct-19:14:03:07`
pub const TIMESTAMP_FORMAT: &str = "%Y-%b-%d:%H:%M:%S";

/// Append-only log of the run's lifecycle, one `<timestamp> : <message>` line per event.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    path: PathBuf,
}

impl ProgressLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one line, creating the file if absent. Failures are reported
    /// through tracing and never returned.
    pub fn log_progress(&self, message: &str) {
        tracing::info!("{}", message);
        if let Err(e) = self.append(message) {
            tracing::warn!(
                "Failed to append to progress log {}: {}",
                self.path.display(),
                e
            );
        }
    }

    fn append(&self, message: &str) -> std::io::Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{} : {}", timestamp, message)
    }
}
