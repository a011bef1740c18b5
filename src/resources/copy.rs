//! Copy placement: an existing file or a rendered wrapper written into place.
use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};

use super::{DestinationState, Outcome, Placement, SkipReason};

/// Where a copy placement takes its bytes from.
#[derive(Debug, Clone)]
pub enum CopySource {
    /// An existing file; its permissions are carried over.
    File(PathBuf),
    /// Content rendered in memory (e.g. a wrapper template).
    Rendered(String),
}

/// Places a regular file at `target`.
#[derive(Debug, Clone)]
pub struct CopyResource {
    /// Content to place.
    pub source: CopySource,
    /// Destination path.
    pub target: PathBuf,
    /// Replace an existing file or link at `target`.
    pub overwrite: bool,
}

impl CopyResource {
    /// Copy the file at `source` to `dest_dir/dest_path`.
    #[must_use]
    pub fn file(source: PathBuf, dest_dir: &Path, dest_path: &Path, overwrite: bool) -> Self {
        Self {
            source: CopySource::File(source),
            target: dest_dir.join(dest_path),
            overwrite,
        }
    }

    /// Write `content` to `dest_dir/dest_path`.
    #[must_use]
    pub fn rendered(content: String, dest_dir: &Path, dest_path: &Path, overwrite: bool) -> Self {
        Self {
            source: CopySource::Rendered(content),
            target: dest_dir.join(dest_path),
            overwrite,
        }
    }
}

impl Placement for CopyResource {
    fn description(&self) -> String {
        match &self.source {
            CopySource::File(src) => format!("{} <- {}", self.target.display(), src.display()),
            CopySource::Rendered(_) => format!("{} (generated)", self.target.display()),
        }
    }

    fn target(&self) -> &Path {
        &self.target
    }

    fn skip_reason(&self, state: DestinationState) -> Option<SkipReason> {
        match state {
            DestinationState::Missing => None,
            _ if !self.overwrite => Some(SkipReason::Exists),
            DestinationState::Symlink | DestinationState::File => None,
            DestinationState::Other => Some(SkipReason::Unmanaged(state)),
        }
    }

    fn apply(&self) -> Result<Outcome> {
        if let CopySource::File(src) = &self.source {
            super::fs::require_source(src)?;
        }

        let state = self.current_state()?;
        if self.skip_reason(state).is_some() {
            return Ok(Outcome::Skip);
        }

        super::fs::ensure_parent_dir(&self.target)?;
        match &self.source {
            CopySource::File(src) => {
                let content =
                    std::fs::read(src).with_context(|| format!("reading {}", src.display()))?;
                let perms = std::fs::metadata(src)
                    .with_context(|| format!("reading metadata: {}", src.display()))?
                    .permissions();
                super::fs::write_atomic(&self.target, &content, Some(perms))?;
            }
            CopySource::Rendered(content) => {
                super::fs::write_atomic(&self.target, content.as_bytes(), None)?;
            }
        }
        Ok(Outcome::Success)
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::error::ResourceError;

    fn dirs() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let root = tempfile::tempdir().unwrap();
        let src_dir = root.path().join("src");
        let dest = root.path().join("dest");
        std::fs::create_dir_all(&src_dir).unwrap();
        std::fs::create_dir_all(&dest).unwrap();
        (root, src_dir, dest)
    }

    #[test]
    fn copies_file_into_empty_destination() {
        let (_root, src_dir, dest) = dirs();
        let src = src_dir.join("gitconfig");
        std::fs::write(&src, "[user]\n").unwrap();

        let copy = CopyResource::file(src, &dest, Path::new(".gitconfig"), false);
        assert_eq!(copy.apply().unwrap(), Outcome::Success);
        assert_eq!(
            std::fs::read_to_string(dest.join(".gitconfig")).unwrap(),
            "[user]\n"
        );
    }

    #[test]
    fn writes_rendered_content() {
        let (_root, _src, dest) = dirs();
        let copy = CopyResource::rendered("hello".to_string(), &dest, Path::new(".vimrc"), false);
        assert_eq!(copy.apply().unwrap(), Outcome::Success);
        assert_eq!(std::fs::read_to_string(dest.join(".vimrc")).unwrap(), "hello");
        assert!(copy.description().contains("generated"));
    }

    #[test]
    fn creates_nested_destination_directories() {
        let (_root, _src, dest) = dirs();
        let copy = CopyResource::rendered("x".to_string(), &dest, Path::new("a/b/c"), false);
        assert_eq!(copy.apply().unwrap(), Outcome::Success);
        assert!(dest.join("a/b/c").is_file());
    }

    #[test]
    fn skips_existing_file_without_overwrite() {
        let (_root, _src, dest) = dirs();
        std::fs::write(dest.join(".zshrc"), "mine").unwrap();
        let copy = CopyResource::rendered("theirs".to_string(), &dest, Path::new(".zshrc"), false);

        assert_eq!(copy.apply().unwrap(), Outcome::Skip);
        assert_eq!(std::fs::read_to_string(dest.join(".zshrc")).unwrap(), "mine");
    }

    #[test]
    fn overwrites_regular_file() {
        let (_root, _src, dest) = dirs();
        std::fs::write(dest.join(".zshrc"), "mine").unwrap();
        let copy = CopyResource::rendered("theirs".to_string(), &dest, Path::new(".zshrc"), true);

        assert_eq!(copy.apply().unwrap(), Outcome::Success);
        assert_eq!(std::fs::read_to_string(dest.join(".zshrc")).unwrap(), "theirs");
    }

    #[cfg(unix)]
    #[test]
    fn overwrite_replaces_symlink_with_regular_file() {
        let (_root, src_dir, dest) = dirs();
        let pointee = src_dir.join("pointee");
        std::fs::write(&pointee, "linked").unwrap();
        std::os::unix::fs::symlink(&pointee, dest.join(".zshenv")).unwrap();

        let copy = CopyResource::rendered("fresh".to_string(), &dest, Path::new(".zshenv"), true);
        assert_eq!(copy.apply().unwrap(), Outcome::Success);

        let meta = std::fs::symlink_metadata(dest.join(".zshenv")).unwrap();
        assert!(!meta.file_type().is_symlink());
        assert_eq!(std::fs::read_to_string(&pointee).unwrap(), "linked");
    }

    #[test]
    fn overwrite_skips_directory() {
        let (_root, _src, dest) = dirs();
        std::fs::create_dir(dest.join(".vimrc")).unwrap();
        let copy = CopyResource::rendered("x".to_string(), &dest, Path::new(".vimrc"), true);

        assert_eq!(copy.apply().unwrap(), Outcome::Skip);
        assert_eq!(
            copy.skip_reason(DestinationState::Other),
            Some(SkipReason::Unmanaged(DestinationState::Other))
        );
        assert!(dest.join(".vimrc").is_dir());
    }

    #[test]
    fn missing_source_is_an_error() {
        let (_root, src_dir, dest) = dirs();
        let copy = CopyResource::file(src_dir.join("absent"), &dest, Path::new("x"), true);

        let err = copy.apply().unwrap_err();
        assert!(err.downcast_ref::<ResourceError>().is_some());
        assert!(!dest.join("x").exists());
    }

    #[cfg(unix)]
    #[test]
    fn copy_carries_source_permissions() {
        use std::os::unix::fs::PermissionsExt as _;
        let (_root, src_dir, dest) = dirs();
        let src = src_dir.join("script");
        std::fs::write(&src, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&src, std::fs::Permissions::from_mode(0o755)).unwrap();

        CopyResource::file(src, &dest, Path::new("script"), false)
            .apply()
            .unwrap();
        let mode = std::fs::metadata(dest.join("script")).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
    }
}
