use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI entry point for the dotfiles installer.
#[derive(Parser, Debug)]
#[command(
    name = "dotfiles",
    about = "Install and link dotfiles for command-line tools",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub global: GlobalOpts,
}

/// Options shared across all subcommands.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOpts {
    /// Directory to install into [default: $HOME]
    #[arg(long, global = true, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Replace links and files that already exist
    #[arg(short = 'f', long, global = true)]
    pub overwrite: bool,

    /// Directory holding the bundled resource files
    #[arg(long, global = true, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Config file [default: $XDG_CONFIG_HOME/dotfiles/config.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install dotfiles into the destination directory
    Install(InstallOpts),
    /// List installers and the resources they place
    List,
    /// Print version information
    Version,
}

impl Command {
    /// Name used for the log file.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Install(_) => "install",
            Self::List => "list",
            Self::Version => "version",
        }
    }
}

/// Options for the `install` subcommand.
#[derive(Parser, Debug, Clone, Default)]
pub struct InstallOpts {
    /// Skip specific installers
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Run only specific installers
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}
