//! Dotfiles installer.
//!
//! Links and writes configuration files for tmux, vimperator, gdb, fvwm2,
//! git, zsh and vim into a destination directory (usually `$HOME`), fetching
//! vim-plug and zsh-completions when needed.
//!
//! The public API is organised into layers:
//!
//! - **[`resources`]**: idempotent placement primitives (symlink, copy)
//! - **[`installers`]**: one installer per tool, plus the registry
//! - **[`commands`]**: top-level subcommand orchestration (`install`, `list`)
//! - **[`config`]**: options, resource directory, wrapper templates
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod installers;
pub mod logging;
pub mod programs;
pub mod resources;
