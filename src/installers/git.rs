use anyhow::Result;

use super::{Context, Installer, write_wrapper};
use crate::config::templates::GIT_CONFIG;
use crate::resources::Outcome;

/// Writes a `~/.gitconfig` that includes the bundled one and enables the
/// git-lfs filter.
#[derive(Debug, Clone, Copy)]
pub struct Git;

impl Installer for Git {
    fn name(&self) -> &str {
        "git"
    }

    fn resources(&self) -> &[&str] {
        &[".gitconfig"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        ctx.require_program(self.name(), "git");
        ctx.require_program(self.name(), "git-lfs");
        write_wrapper(ctx, &GIT_CONFIG)
    }
}
