use anyhow::Result;

use super::{Context, Installer};
use crate::resources::Outcome;

/// Programs the shell configuration integrates with when present.
const HELPERS: [&str; 3] = ["peco", "fzf", "direnv"];

/// Reports which command-line helpers are missing. Places no files.
#[derive(Debug, Clone, Copy)]
pub struct CommandLineHelper;

impl Installer for CommandLineHelper {
    fn name(&self) -> &str {
        "command-line helper"
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        for program in HELPERS {
            ctx.require_program(self.name(), program);
        }
        Ok(Outcome::Success)
    }
}
