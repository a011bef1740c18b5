use anyhow::Result;

use super::{Context, Installer, write_wrapper};
use crate::config::templates::{ZSHENV, ZSHRC};
use crate::fetch::ZSH_COMPLETIONS_URL;
use crate::resources::{DestinationState, Outcome};

/// Clone target for the completion definitions, relative to the destination.
const COMPLETIONS_DIR: &str = ".zsh-completions";

/// Clones zsh-completions once, then writes `~/.zshrc` and `~/.zshenv`
/// wrappers.
#[derive(Debug, Clone, Copy)]
pub struct Zsh;

impl Installer for Zsh {
    fn name(&self) -> &str {
        "zsh"
    }

    fn resources(&self) -> &[&str] {
        &[".zshrc", ".zshenv"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        ctx.require_program(self.name(), "zsh");

        let completions = ctx.dest(COMPLETIONS_DIR);
        if DestinationState::inspect(&completions)?.exists() {
            ctx.log
                .debug(&format!("{} exists, not cloning", completions.display()));
        } else {
            ctx.log.info(&format!("cloning {ZSH_COMPLETIONS_URL}"));
            ctx.fetcher
                .clone_repository(ZSH_COMPLETIONS_URL, &completions)?;
        }

        let outcome = write_wrapper(ctx, &ZSHRC)?;
        if outcome != Outcome::Success {
            return Ok(outcome);
        }
        write_wrapper(ctx, &ZSHENV)
    }
}
