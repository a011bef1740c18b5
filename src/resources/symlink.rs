//! Symlink placement.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::{DestinationState, Outcome, Placement, SkipReason};

/// Links `target` to a bundled resource file.
#[derive(Debug, Clone)]
pub struct SymlinkResource {
    /// The resource file the link points to.
    pub source: PathBuf,
    /// Where the link is created.
    pub target: PathBuf,
    /// Replace an existing link at `target`.
    pub overwrite: bool,
}

impl SymlinkResource {
    /// Create a new symlink placement.
    #[must_use]
    pub const fn new(source: PathBuf, target: PathBuf, overwrite: bool) -> Self {
        Self {
            source,
            target,
            overwrite,
        }
    }

    /// Link `dest_dir/filename` to `resource_dir/filename`.
    #[must_use]
    pub fn same_name(resource_dir: &Path, dest_dir: &Path, filename: &str, overwrite: bool) -> Self {
        Self::new(
            resource_dir.join(filename),
            dest_dir.join(filename),
            overwrite,
        )
    }
}

impl Placement for SymlinkResource {
    fn description(&self) -> String {
        format!("{} -> {}", self.target.display(), self.source.display())
    }

    fn target(&self) -> &Path {
        &self.target
    }

    fn skip_reason(&self, state: DestinationState) -> Option<SkipReason> {
        match state {
            DestinationState::Missing => None,
            _ if !self.overwrite => Some(SkipReason::Exists),
            DestinationState::Symlink => None,
            other => Some(SkipReason::Unmanaged(other)),
        }
    }

    fn apply(&self) -> Result<Outcome> {
        super::fs::require_source(&self.source)?;

        let state = self.current_state()?;
        if self.skip_reason(state).is_some() {
            return Ok(Outcome::Skip);
        }

        if state == DestinationState::Symlink {
            std::fs::remove_file(&self.target)
                .with_context(|| format!("remove existing link: {}", self.target.display()))?;
        }

        super::fs::ensure_parent_dir(&self.target)?;
        create_symlink(&self.source, &self.target)?;
        Ok(Outcome::Success)
    }
}

/// Create a symlink at `link` pointing to `target`.
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    #[cfg(unix)]
    std::os::unix::fs::symlink(target, link)
        .with_context(|| format!("creating symlink {} -> {}", link.display(), target.display()))?;

    #[cfg(windows)]
    std::os::windows::fs::symlink_file(target, link)
        .with_context(|| format!("creating symlink {} -> {}", link.display(), target.display()))?;

    Ok(())
}
