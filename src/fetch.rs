//! Remote fetches: git clones and plain HTTP downloads.
use std::path::Path;

use git2::build::RepoBuilder;

use crate::error::FetchError;

/// Completion definitions cloned into `~/.zsh-completions`.
pub const ZSH_COMPLETIONS_URL: &str = "https://github.com/zsh-users/zsh-completions.git";

/// The vim-plug plugin manager script.
pub const VIM_PLUG_URL: &str =
    "https://raw.githubusercontent.com/junegunn/vim-plug/master/plug.vim";

const USER_AGENT: &str = concat!("dotfiles/", env!("CARGO_PKG_VERSION"));

/// Retrieves remote content on behalf of the installers.
pub trait Fetcher: Send + Sync + std::fmt::Debug {
    /// Clone the repository at `url` into `into`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Clone`] if the clone fails.
    fn clone_repository(&self, url: &str, into: &Path) -> Result<(), FetchError>;

    /// Download `url` and return its body.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] unless the server answers `200 OK` with a
    /// readable body.
    fn download(&self, url: &str) -> Result<String, FetchError>;
}

/// [`Fetcher`] that talks to the network through libgit2 and ureq.
pub struct NetworkFetcher {
    agent: ureq::Agent,
}

impl std::fmt::Debug for NetworkFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkFetcher").finish_non_exhaustive()
    }
}

impl Default for NetworkFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl NetworkFetcher {
    /// Create a fetcher using the HTTP client's default timeouts.
    ///
    /// Status codes are checked by [`Fetcher::download`] rather than
    /// surfacing as client errors.
    #[must_use]
    pub fn new() -> Self {
        let config = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }
}

impl Fetcher for NetworkFetcher {
    fn clone_repository(&self, url: &str, into: &Path) -> Result<(), FetchError> {
        RepoBuilder::new()
            .clone(url, into)
            .map(drop)
            .map_err(|source| FetchError::Clone {
                url: url.to_string(),
                source,
            })
    }

    fn download(&self, url: &str) -> Result<String, FetchError> {
        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source: Box::new(source),
            })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response
            .body_mut()
            .read_to_string()
            .map_err(|source| FetchError::Body {
                url: url.to_string(),
                source: Box::new(source),
            })
    }
}
