//! File-system helpers shared by the placement primitives.
use anyhow::{Context as _, Result};
use std::io::Write as _;
use std::path::Path;

use crate::error::ResourceError;

/// Ensure the parent directory of `path` exists, creating it (and any
/// ancestors) if necessary.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent: {}", parent.display()))?;
    }
    Ok(())
}

/// Fail with [`ResourceError::MissingResource`] unless `path` exists.
///
/// # Errors
///
/// Returns the missing-resource error described above.
pub fn require_source(path: &Path) -> Result<(), ResourceError> {
    if path.exists() {
        Ok(())
    } else {
        Err(ResourceError::MissingResource {
            path: path.to_path_buf(),
        })
    }
}

/// Write `content` to `target` atomically.
///
/// The bytes are staged in a uniquely named temp file in the same directory
/// and renamed over `target`. A symlink at `target` is replaced by the new
/// file, never written through. The temp file is removed if any step fails.
///
/// When `permissions` is given it is applied to the staged file before the
/// rename.
///
/// # Errors
///
/// Returns an error if the temp file cannot be created, written, or renamed.
pub fn write_atomic(
    target: &Path,
    content: &[u8],
    permissions: Option<std::fs::Permissions>,
) -> Result<()> {
    let dir = target
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = tempfile::Builder::new()
        .prefix(".dotfiles-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .with_context(|| format!("create temp file in {}", dir.display()))?;

    staged
        .write_all(content)
        .with_context(|| format!("write temp file {}", staged.path().display()))?;
    staged
        .flush()
        .with_context(|| format!("flush temp file {}", staged.path().display()))?;

    if let Some(perms) = permissions {
        std::fs::set_permissions(staged.path(), perms)
            .with_context(|| format!("set permissions on {}", staged.path().display()))?;
    }

    staged
        .persist(target)
        .map_err(|e| e.error)
        .with_context(|| format!("rename temp file to {}", target.display()))?;
    Ok(())
}
