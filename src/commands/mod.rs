pub mod install;
pub mod list;
pub mod version;

use anyhow::Result;

use crate::cli::GlobalOpts;
use crate::config::file::{self, FileConfig};
use crate::config::{self, Options, Resources};
use crate::logging::Logger;

/// Shared state produced by the common command setup sequence.
///
/// Loads the config file, merges it with the CLI options, and registers the
/// resources directory, so each command does not repeat the boilerplate.
#[derive(Debug)]
pub struct CommandSetup {
    pub options: Options,
    pub resources: &'static Resources,
    pub file: FileConfig,
}

impl CommandSetup {
    /// Resolve options and resources from the CLI, environment, and config
    /// file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file is invalid, no destination can be
    /// determined, or the resources directory cannot be found.
    pub fn init(global: &GlobalOpts, log: &Logger) -> Result<Self> {
        let config_path = global.config.clone().or_else(file::default_path);
        let file = match &config_path {
            Some(path) => {
                log.debug(&format!("config file: {}", path.display()));
                file::load(path)?
            }
            None => FileConfig::default(),
        };

        let options = Options::resolve(global.dest.as_deref(), global.overwrite, &file)?;

        let env_resources = std::env::var_os(config::RESOURCES_ENV).map(std::path::PathBuf::from);
        let exe = std::env::current_exe().ok();
        let dir = config::resolve_resources_dir(
            global.resources.as_deref(),
            env_resources.as_deref(),
            file.resources.as_deref(),
            exe.as_deref(),
        )?;
        let resources = Resources::init(dir);

        log.debug(&format!("destination: {}", options.dest_dir.display()));
        log.debug(&format!("resources: {}", resources.dir().display()));
        log.debug(&format!("overwrite: {}", options.overwrite));

        Ok(Self {
            options,
            resources,
            file,
        })
    }
}
