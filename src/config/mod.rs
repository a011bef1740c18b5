//! Run configuration: options shared by every installer and the bundled
//! resource directory.
pub mod file;
pub mod templates;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{ConfigError, ResourceError};

/// Environment variable naming the resources directory.
pub const RESOURCES_ENV: &str = "DOTFILES_RESOURCES";

/// Resource directory of the source tree this binary was built from.
const BUILD_RESOURCES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources");

static RESOURCES: OnceLock<Resources> = OnceLock::new();

/// Per-run settings, read by every installer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Directory the dotfiles are placed in (usually `$HOME`).
    pub dest_dir: PathBuf,
    /// Replace links and files already at the destination.
    pub overwrite: bool,
}

impl Options {
    /// Merge CLI values over config file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoHome`] if neither source names a destination
    /// and `HOME` is unset.
    pub fn resolve(
        dest: Option<&Path>,
        overwrite: bool,
        file: &file::FileConfig,
    ) -> Result<Self, ConfigError> {
        let dest_dir = match dest.or(file.dest.as_deref()) {
            Some(dir) => dir.to_path_buf(),
            None => std::env::var_os("HOME")
                .filter(|h| !h.is_empty())
                .map(PathBuf::from)
                .ok_or(ConfigError::NoHome)?,
        };
        Ok(Self {
            dest_dir,
            overwrite: overwrite || file.overwrite,
        })
    }
}

/// The directory holding the bundled resource files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resources {
    dir: PathBuf,
}

impl Resources {
    /// Wrap a resource directory without registering it process-wide.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Register the process-wide resource directory.
    ///
    /// The first call wins; later calls return the already registered value.
    #[must_use]
    pub fn init(dir: PathBuf) -> &'static Self {
        RESOURCES.get_or_init(|| Self::new(dir))
    }

    /// The process-wide resource directory, defaulting to the build tree's.
    #[must_use]
    pub fn global() -> &'static Self {
        RESOURCES.get_or_init(|| Self::new(PathBuf::from(BUILD_RESOURCES)))
    }

    /// The resource directory.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the bundled resource `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingResource`] if the file is absent.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ResourceError> {
        let path = self.dir.join(name);
        crate::resources::fs::require_source(&path)?;
        Ok(path)
    }
}

/// Pick the resources directory.
///
/// An explicit choice (`cli`, then `env`, then `file`) must exist. Without
/// one, `resources/` next to `exe`, then two levels up (a cargo
/// `target/<profile>/` layout), then the build tree's directory are tried.
/// The result is made absolute so generated wrappers can reference it.
///
/// # Errors
///
/// Returns [`ConfigError::ResourcesNotFound`] if an explicit directory does
/// not exist, or [`ConfigError::ResourcesUndetected`] if no candidate does.
pub fn resolve_resources_dir(
    cli: Option<&Path>,
    env: Option<&Path>,
    file: Option<&Path>,
    exe: Option<&Path>,
) -> Result<PathBuf, ConfigError> {
    if let Some(explicit) = cli.or(env).or(file) {
        if !explicit.is_dir() {
            return Err(ConfigError::ResourcesNotFound {
                path: explicit.to_path_buf(),
            });
        }
        return Ok(absolute(explicit));
    }

    let mut candidates = Vec::new();
    if let Some(exe_dir) = exe.and_then(Path::parent) {
        candidates.push(exe_dir.join("resources"));
        candidates.push(exe_dir.join("../../resources"));
    }
    candidates.push(PathBuf::from(BUILD_RESOURCES));

    candidates
        .into_iter()
        .find(|c| c.is_dir())
        .map(|c| absolute(&c))
        .ok_or(ConfigError::ResourcesUndetected)
}

/// Canonical form of `path`, or `path` unchanged if that fails.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
