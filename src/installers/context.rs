use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{Options, Resources};
use crate::fetch::Fetcher;
use crate::logging::Log;
use crate::programs::{self, ProgramLookup};

/// Everything an installer needs: options, resources, and the outside-world
/// seams.
#[derive(Clone)]
pub struct Context {
    /// Destination and overwrite settings.
    pub options: Options,
    /// Bundled resource directory.
    pub resources: Resources,
    /// Logger.
    pub log: Arc<dyn Log>,
    /// Program availability lookup.
    pub programs: Arc<dyn ProgramLookup>,
    /// Remote content.
    pub fetcher: Arc<dyn Fetcher>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("options", &self.options)
            .field("resources", &self.resources)
            .field("programs", &self.programs)
            .field("fetcher", &self.fetcher)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Create a new context.
    #[must_use]
    pub fn new(
        options: Options,
        resources: Resources,
        log: Arc<dyn Log>,
        programs: Arc<dyn ProgramLookup>,
        fetcher: Arc<dyn Fetcher>,
    ) -> Self {
        Self {
            options,
            resources,
            log,
            programs,
            fetcher,
        }
    }

    /// The destination directory.
    #[must_use]
    pub fn dest_dir(&self) -> &Path {
        &self.options.dest_dir
    }

    /// `dest_dir/relative`.
    #[must_use]
    pub fn dest(&self, relative: &str) -> PathBuf {
        self.options.dest_dir.join(relative)
    }

    /// Whether existing destinations should be replaced.
    #[must_use]
    pub const fn overwrite(&self) -> bool {
        self.options.overwrite
    }

    /// Check that `program` is available, warning on behalf of `subsystem`.
    pub fn require_program(&self, subsystem: &str, program: &str) -> bool {
        programs::check(self.programs.as_ref(), self.log.as_ref(), subsystem, program)
    }
}
