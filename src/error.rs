//! Domain-specific error types for the dotfiles installer.
//!
//! Internal modules return typed errors (e.g. [`ResourceError`],
//! [`FetchError`]) which the command handlers convert to [`anyhow::Error`]
//! via the standard `?` operator.
//!
//! # Error hierarchy
//!
//! ```text
//! DotfilesError
//! ├── Resource(ResourceError) : missing bundled resource files
//! ├── Fetch(FetchError)       : repository clones and HTTP downloads
//! └── Config(ConfigError)     : CLI/config file resolution
//! ```
//!
//! A resource or fetch error is fatal: the install run stops at the first
//! one and nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the installer.
#[derive(Error, Debug)]
pub enum DotfilesError {
    /// A bundled resource is unusable.
    #[error("Resource error: {0}")]
    Resource(#[from] ResourceError),

    /// A remote resource could not be fetched.
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration could not be resolved.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by the placement primitives.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// A file that should ship with the installer is absent.
    ///
    /// This is a packaging defect, not a runtime condition.
    #[error("bundled resource not found: {}", path.display())]
    MissingResource {
        /// Path where the resource was expected.
        path: PathBuf,
    },
}

/// Errors raised while fetching remote resources.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The server answered with something other than `200 OK`.
    #[error("GET {url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The HTTP request could not be completed.
    #[error("GET {url} failed: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        source: Box<ureq::Error>,
    },

    /// The response body could not be read.
    #[error("reading response from {url} failed: {source}")]
    Body {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        source: Box<ureq::Error>,
    },

    /// Cloning a git repository failed.
    #[error("clone of {url} failed: {}", source.message())]
    Clone {
        /// Repository URL.
        url: String,
        /// Underlying libgit2 error.
        source: git2::Error,
    },
}

/// Errors raised while resolving the run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `--only`/`--skip` named an installer that does not exist.
    #[error("unknown installer '{name}' (available: {available})")]
    UnknownInstaller {
        /// The name given by the user.
        name: String,
        /// Comma-separated list of valid names.
        available: String,
    },

    /// The resources directory does not exist.
    #[error("resources directory not found: {}", path.display())]
    ResourcesNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// No resources directory could be located automatically.
    #[error("cannot locate the resources directory. Use --resources or set DOTFILES_RESOURCES")]
    ResourcesUndetected,

    /// No destination was given and `HOME` is not set.
    #[error("HOME environment variable is not set; pass --dest")]
    NoHome,

    /// The config file exists but is not valid TOML for this tool.
    #[error("invalid config file {}: {message}", path.display())]
    InvalidConfigFile {
        /// Path of the config file.
        path: PathBuf,
        /// Parser message.
        message: String,
    },
}
