//! Console/file logger with run summary collection.
use std::path::PathBuf;
use std::sync::Mutex;

use super::subscriber::STAGE_TARGET;
use super::types::{Log, RunEntry, RunStatus};
use super::utils::log_file_path;

/// Implement the display methods of [`Log`] by delegating to inherent methods
/// of the same name on the implementing type.
macro_rules! forward_log_methods {
    ($($method:ident),+ $(,)?) => {
        $(
            fn $method(&self, msg: &str) {
                self.$method(msg);
            }
        )+
    };
}

/// Structured logger with summary collection.
///
/// Messages go through [`tracing`], so the subscriber installed by
/// [`init_subscriber`](super::subscriber::init_subscriber) decides where they
/// land. The log file at `$XDG_CACHE_HOME/dotfiles/<command>.log` receives
/// every message regardless of the verbose flag.
#[derive(Debug)]
pub struct Logger {
    runs: Mutex<Vec<RunEntry>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a new logger.
    ///
    /// Only remembers the log file path for the summary; the file itself is
    /// created by [`FileLayer`](super::subscriber::FileLayer).
    #[must_use]
    pub fn new(command: &str) -> Self {
        Self {
            runs: Mutex::new(Vec::new()),
            log_file: log_file_path(command),
        }
    }

    /// Return the log file path, if available.
    #[cfg(test)]
    pub const fn log_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Return a clone of all recorded entries.
    #[must_use]
    pub fn entries(&self) -> Vec<RunEntry> {
        self.runs.lock().map_or_else(|_| vec![], |g| g.clone())
    }

    /// Log an error message.
    pub fn error(&self, msg: &str) {
        tracing::error!("{msg}");
    }

    /// Log a warning message.
    pub fn warn(&self, msg: &str) {
        tracing::warn!("{msg}");
    }

    /// Log a stage header.
    pub fn stage(&self, msg: &str) {
        tracing::info!(target: STAGE_TARGET, "{msg}");
    }

    /// Log an informational message.
    pub fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }

    /// Log a debug message.
    pub fn debug(&self, msg: &str) {
        tracing::debug!("{msg}");
    }

    /// Record an installer result for the summary.
    pub fn record(&self, name: &str, status: RunStatus, message: Option<&str>) {
        if let Ok(mut guard) = self.runs.lock() {
            guard.push(RunEntry {
                name: name.to_string(),
                status,
                message: message.map(String::from),
            });
        }
    }

    /// Count the number of failed installers.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.runs.lock().map_or(0, |guard| {
            guard
                .iter()
                .filter(|t| t.status == RunStatus::Failed)
                .count()
        })
    }

    /// Print the summary of all recorded installers.
    pub fn print_summary(&self) {
        let runs = self.entries();
        if runs.is_empty() {
            return;
        }

        self.stage("Summary");

        let mut ok = 0u32;
        let mut skipped = 0u32;
        let mut failed = 0u32;

        for run in &runs {
            let (icon, color) = match run.status {
                RunStatus::Ok => {
                    ok += 1;
                    ("✓", "\x1b[32m")
                }
                RunStatus::Skipped => {
                    skipped += 1;
                    ("○", "\x1b[33m")
                }
                RunStatus::Failed => {
                    failed += 1;
                    ("✗", "\x1b[31m")
                }
            };

            let suffix = run
                .message
                .as_ref()
                .map_or_else(String::new, |msg| format!(" ({msg})"));

            self.info(&format!("{color}{icon} {}{suffix}\x1b[0m", run.name));
        }

        let total = ok + skipped + failed;
        self.info(&format!(
            "{total} installers: \x1b[32m{ok} ok\x1b[0m, \x1b[33m{skipped} skipped\x1b[0m, \x1b[31m{failed} failed\x1b[0m"
        ));

        if let Some(path) = &self.log_file {
            self.info(&format!("\x1b[2mlog: {}\x1b[0m", path.display()));
        }
    }
}

impl Log for Logger {
    forward_log_methods!(stage, info, debug, warn, error);

    fn record(&self, name: &str, status: RunStatus, message: Option<&str>) {
        self.record(name, status, message);
    }
}
