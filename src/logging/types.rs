//! Core logging types: run entries, status, and the [`Log`] trait.

/// Installer result for summary reporting.
#[derive(Debug, Clone)]
pub struct RunEntry {
    /// Installer name.
    pub name: String,
    /// Final status of the installer.
    pub status: RunStatus,
    /// Optional detail message (e.g. skip reason or error description).
    pub message: Option<String>,
}

/// Status of a completed installer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Installer placed its files.
    Ok,
    /// Installer left existing files untouched.
    Skipped,
    /// Installer hit a fatal error; the run stopped here.
    Failed,
}

/// Abstraction over logging backends.
///
/// Installers log through this trait so tests can substitute a recorder for
/// the console/file [`Logger`](super::logger::Logger).
pub trait Log: Send + Sync {
    /// Log a stage header (one per installer).
    fn stage(&self, msg: &str);
    /// Log an informational message.
    fn info(&self, msg: &str);
    /// Log a debug message (console only with `--verbose`).
    fn debug(&self, msg: &str);
    /// Log a warning message.
    fn warn(&self, msg: &str);
    /// Log an error message.
    fn error(&self, msg: &str);
    /// Record an installer result for the summary.
    fn record(&self, name: &str, status: RunStatus, message: Option<&str>);
}
