//! Per-tool installers and the registry that runs them.
pub mod command_line;
mod context;
pub mod git;
pub mod symlinks;
pub mod vim;
pub mod zsh;

pub use context::Context;

use anyhow::Result;

use std::path::Path;

use crate::config::templates::{self, Wrapper};
use crate::error::ConfigError;
use crate::logging::RunStatus;
use crate::resources::copy::CopyResource;
use crate::resources::{Outcome, Placement, SkipReason};

/// Installs the configuration of one tool.
pub trait Installer: Send + Sync {
    /// Stable name used for selection and reporting.
    fn name(&self) -> &str;

    /// Bundled resource files this installer places.
    fn resources(&self) -> &[&str] {
        &[]
    }

    /// Run the installer.
    ///
    /// # Errors
    ///
    /// Returns an error if a bundled resource is missing, a remote fetch
    /// fails, or the destination cannot be written.
    fn run(&self, ctx: &Context) -> Result<Outcome>;
}

/// Every installer, in run order.
#[must_use]
pub fn all_installers() -> Vec<Box<dyn Installer>> {
    vec![
        Box::new(symlinks::Tmux),
        Box::new(symlinks::Vimperator),
        Box::new(symlinks::Gdb),
        Box::new(symlinks::Fvwm2),
        Box::new(git::Git),
        Box::new(zsh::Zsh),
        Box::new(vim::Vim),
        Box::new(command_line::CommandLineHelper),
    ]
}

/// Fold case and treat hyphens as spaces, so `command-line-helper` selects
/// `command-line helper`.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase().replace('-', " ")
}

/// The installers to run, in registry order.
///
/// An empty `only` selects everything; `skip` then removes names from the
/// selection.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownInstaller`] if `only` or `skip` names an
/// installer that does not exist.
pub fn select(only: &[String], skip: &[String]) -> Result<Vec<Box<dyn Installer>>, ConfigError> {
    let all = all_installers();
    let known: Vec<String> = all.iter().map(|i| normalize(i.name())).collect();

    for name in only.iter().chain(skip) {
        if !known.contains(&normalize(name)) {
            return Err(ConfigError::UnknownInstaller {
                name: name.clone(),
                available: all
                    .iter()
                    .map(|i| i.name().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        }
    }

    let only: Vec<String> = only.iter().map(|n| normalize(n)).collect();
    let skip: Vec<String> = skip.iter().map(|n| normalize(n)).collect();

    Ok(all
        .into_iter()
        .filter(|i| {
            let name = normalize(i.name());
            (only.is_empty() || only.contains(&name)) && !skip.contains(&name)
        })
        .collect())
}

/// Run one installer, logging a stage header and recording the result.
///
/// # Errors
///
/// Returns the installer's error after logging it and recording a failure.
pub fn execute(installer: &dyn Installer, ctx: &Context) -> Result<Outcome> {
    ctx.log.stage(installer.name());

    match installer.run(ctx) {
        Ok(Outcome::Success) => {
            ctx.log.record(installer.name(), RunStatus::Ok, None);
            Ok(Outcome::Success)
        }
        Ok(Outcome::Skip) => {
            ctx.log
                .record(installer.name(), RunStatus::Skipped, Some("already present"));
            Ok(Outcome::Skip)
        }
        Err(e) => {
            let message = format!("{e:#}");
            ctx.log.error(&format!("{}: {message}", installer.name()));
            ctx.log
                .record(installer.name(), RunStatus::Failed, Some(&message));
            Err(e)
        }
    }
}

/// Apply `placement` and log what happened to its destination.
///
/// # Errors
///
/// Propagates the placement's error.
pub fn place(ctx: &Context, placement: &dyn Placement) -> Result<Outcome> {
    let outcome = placement.apply()?;
    match outcome {
        Outcome::Success => ctx.log.info(&placement.description()),
        Outcome::Skip => {
            let target = placement.target().display();
            match placement.skip_reason(placement.current_state()?) {
                Some(SkipReason::Unmanaged(state)) => ctx.log.warn(&format!(
                    "{target} is {state} and not managed by dotfiles, leaving it alone"
                )),
                Some(SkipReason::Exists) | None => {
                    ctx.log.info(&format!("{target} exists, skipping"));
                }
            }
        }
    }
    Ok(outcome)
}

/// Render `wrapper` around its bundled resource and place it.
///
/// # Errors
///
/// Returns an error if the resource is missing or the write fails.
pub fn write_wrapper(ctx: &Context, wrapper: &Wrapper) -> Result<Outcome> {
    let resource = ctx.resources.locate(wrapper.resource)?;
    let copy = CopyResource::rendered(
        templates::render(wrapper.template, &resource),
        ctx.dest_dir(),
        Path::new(wrapper.dest),
        ctx.overwrite(),
    );
    place(ctx, &copy)
}
