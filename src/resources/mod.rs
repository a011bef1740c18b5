//! Idempotent placement primitives (inspect + apply pattern).
pub mod copy;
pub mod fs;
pub mod symlink;

use anyhow::{Context as _, Result};
use std::path::Path;

/// Result of running a placement or an installer.
///
/// Unmet preconditions are not an outcome; they surface as errors and stop
/// the run.
///
/// # Examples
///
/// ```
/// use dotfiles_installer::resources::Outcome;
///
/// assert_ne!(Outcome::Success, Outcome::Skip);
/// assert!(Outcome::Success.is_success());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The destination was written.
    Success,
    /// The destination was left untouched.
    Skip,
}

impl Outcome {
    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// What currently occupies a destination path.
///
/// Determined without following symlinks, so a dangling link is
/// [`DestinationState::Symlink`], not [`DestinationState::Missing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationState {
    /// Nothing exists at the path.
    Missing,
    /// A symbolic link (possibly dangling).
    Symlink,
    /// A regular file.
    File,
    /// Anything else: a directory, socket, fifo, ...
    Other,
}

impl DestinationState {
    /// Inspect `path` without following symlinks.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata lookup fails for a reason other than
    /// the path not existing (e.g. permission denied on a parent).
    pub fn inspect(path: &Path) -> Result<Self> {
        match std::fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => Ok(Self::Symlink),
            Ok(meta) if meta.is_file() => Ok(Self::File),
            Ok(_) => Ok(Self::Other),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::Missing),
            Err(e) => Err(e).with_context(|| format!("inspecting {}", path.display())),
        }
    }

    /// Returns `true` unless the path is [`DestinationState::Missing`].
    #[must_use]
    pub const fn exists(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl std::fmt::Display for DestinationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Missing => "missing",
            Self::Symlink => "a symlink",
            Self::File => "a regular file",
            Self::Other => "not a file or symlink",
        };
        f.write_str(s)
    }
}

/// Why a placement leaves an existing destination alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The destination exists and overwriting was not requested.
    Exists,
    /// Overwriting was requested but the destination is of a kind this
    /// placement does not replace.
    Unmanaged(DestinationState),
}

/// A file placement that can be inspected and applied.
pub trait Placement {
    /// Human-readable description, e.g. `~/.tmux.conf -> resources/.tmux.conf`.
    fn description(&self) -> String;

    /// Inspect what currently occupies the destination.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination cannot be inspected.
    fn current_state(&self) -> Result<DestinationState> {
        DestinationState::inspect(self.target())
    }

    /// Destination path this placement writes.
    fn target(&self) -> &Path;

    /// The reason `apply` would leave a destination in `state` untouched, or
    /// `None` if it would write it.
    fn skip_reason(&self, state: DestinationState) -> Option<SkipReason>;

    /// Place the content.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is missing (a
    /// [`ResourceError::MissingResource`](crate::error::ResourceError)) or
    /// the destination cannot be written.
    fn apply(&self) -> Result<Outcome>;
}
