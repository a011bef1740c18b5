//! Installers that link a single resource file into the destination.
use anyhow::Result;

use super::{Context, Installer, place};
use crate::resources::Outcome;
use crate::resources::symlink::SymlinkResource;

/// Check `programs` for `name`, then link `filename` into the destination.
fn install_link(ctx: &Context, name: &str, programs: &[&str], filename: &str) -> Result<Outcome> {
    for program in programs {
        ctx.require_program(name, program);
    }
    let link = SymlinkResource::same_name(
        ctx.resources.dir(),
        ctx.dest_dir(),
        filename,
        ctx.overwrite(),
    );
    place(ctx, &link)
}

/// `~/.tmux.conf`.
#[derive(Debug, Clone, Copy)]
pub struct Tmux;

impl Installer for Tmux {
    fn name(&self) -> &str {
        "tmux"
    }

    fn resources(&self) -> &[&str] {
        &[".tmux.conf"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        install_link(ctx, self.name(), &["tmux", "xsel"], ".tmux.conf")
    }
}

/// `~/.vimperatorrc`. Vimperator is a browser add-on, so there is no program
/// to look for.
#[derive(Debug, Clone, Copy)]
pub struct Vimperator;

impl Installer for Vimperator {
    fn name(&self) -> &str {
        "vimperator"
    }

    fn resources(&self) -> &[&str] {
        &[".vimperatorrc"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        install_link(ctx, self.name(), &[], ".vimperatorrc")
    }
}

/// `~/.gdbinit`.
#[derive(Debug, Clone, Copy)]
pub struct Gdb;

impl Installer for Gdb {
    fn name(&self) -> &str {
        "gdb"
    }

    fn resources(&self) -> &[&str] {
        &[".gdbinit"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        install_link(ctx, self.name(), &["gdb"], ".gdbinit")
    }
}

/// `~/.fvwm2rc`.
#[derive(Debug, Clone, Copy)]
pub struct Fvwm2;

impl Installer for Fvwm2 {
    fn name(&self) -> &str {
        "fvwm2"
    }

    fn resources(&self) -> &[&str] {
        &[".fvwm2rc"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        install_link(ctx, self.name(), &["fvwm2"], ".fvwm2rc")
    }
}
