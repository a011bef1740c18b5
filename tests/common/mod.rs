// Shared helpers for integration tests.
//
// Provides a temporary destination directory, network and PATH test doubles,
// and a builder so each integration test can run installers in isolation
// without touching the network or the real home directory.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dotfiles_installer::config::{Options, Resources};
use dotfiles_installer::error::FetchError;
use dotfiles_installer::fetch::Fetcher;
use dotfiles_installer::installers::Context;
use dotfiles_installer::logging::{Log, RunStatus};
use dotfiles_installer::programs::ProgramLookup;

/// Body served for every download.
pub const PLUG_VIM: &str = "\" vim-plug: Vim plugin manager\n";

/// Fetcher that clones by creating a directory and serves [`PLUG_VIM`].
#[derive(Debug, Default)]
pub struct FakeFetcher {
    pub clones: AtomicUsize,
    pub downloads: AtomicUsize,
    pub fail_status: Option<u16>,
}

impl FakeFetcher {
    pub fn clone_count(&self) -> usize {
        self.clones.load(Ordering::SeqCst)
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }
}

impl Fetcher for FakeFetcher {
    fn clone_repository(&self, url: &str, into: &Path) -> Result<(), FetchError> {
        self.clones.fetch_add(1, Ordering::SeqCst);
        std::fs::create_dir_all(into.join("src")).map_err(|e| FetchError::Clone {
            url: url.to_string(),
            source: git2::Error::from_str(&e.to_string()),
        })
    }

    fn download(&self, url: &str) -> Result<String, FetchError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        match self.fail_status {
            Some(status) => Err(FetchError::Status {
                url: url.to_string(),
                status,
            }),
            None => Ok(PLUG_VIM.to_string()),
        }
    }
}

/// Lookup that finds every program, or none.
#[derive(Debug)]
pub struct FakeLookup(pub bool);

impl ProgramLookup for FakeLookup {
    fn which(&self, _program: &str) -> bool {
        self.0
    }
}

/// Log that counts warnings and keeps recorded results.
#[derive(Debug, Default)]
pub struct CapturingLog {
    pub warnings: std::sync::Mutex<Vec<String>>,
    pub records: std::sync::Mutex<Vec<(String, RunStatus)>>,
}

impl CapturingLog {
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().expect("lock").clone()
    }

    pub fn records(&self) -> Vec<(String, RunStatus)> {
        self.records.lock().expect("lock").clone()
    }
}

impl Log for CapturingLog {
    fn stage(&self, _msg: &str) {}
    fn info(&self, _msg: &str) {}
    fn debug(&self, _msg: &str) {}
    fn warn(&self, msg: &str) {
        self.warnings.lock().expect("lock").push(msg.to_string());
    }
    fn error(&self, _msg: &str) {}
    fn record(&self, name: &str, status: RunStatus, _message: Option<&str>) {
        self.records
            .lock()
            .expect("lock")
            .push((name.to_string(), status));
    }
}

/// An isolated destination backed by a [`tempfile::TempDir`].
pub struct IntegrationTestContext {
    /// Temporary destination directory.
    pub dest: tempfile::TempDir,
    pub fetcher: Arc<FakeFetcher>,
    pub log: Arc<CapturingLog>,
    overwrite: bool,
    programs_present: bool,
    resources: Resources,
}

impl IntegrationTestContext {
    /// Empty destination, bundled resources, every program present.
    pub fn new() -> Self {
        Self {
            dest: tempfile::tempdir().expect("create temp dir"),
            fetcher: Arc::new(FakeFetcher::default()),
            log: Arc::new(CapturingLog::default()),
            overwrite: false,
            programs_present: true,
            resources: Resources::global().clone(),
        }
    }

    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    #[must_use]
    pub fn without_programs(mut self) -> Self {
        self.programs_present = false;
        self
    }

    #[must_use]
    pub fn with_resources(mut self, dir: &Path) -> Self {
        self.resources = Resources::new(dir.to_path_buf());
        self
    }

    #[must_use]
    pub fn with_fetcher(mut self, fetcher: FakeFetcher) -> Self {
        self.fetcher = Arc::new(fetcher);
        self
    }

    /// Path to the destination directory.
    pub fn dest_path(&self) -> &Path {
        self.dest.path()
    }

    pub fn dest(&self, relative: &str) -> PathBuf {
        self.dest.path().join(relative)
    }

    /// Build an installer [`Context`] for the current settings.
    pub fn context(&self) -> Context {
        Context::new(
            Options {
                dest_dir: self.dest_path().to_path_buf(),
                overwrite: self.overwrite,
            },
            self.resources.clone(),
            Arc::clone(&self.log) as Arc<dyn Log>,
            Arc::new(FakeLookup(self.programs_present)),
            Arc::clone(&self.fetcher) as Arc<dyn Fetcher>,
        )
    }
}
