use anyhow::{Context as _, Result};

use super::{Context, Installer, write_wrapper};
use crate::config::templates::VIMRC;
use crate::fetch::VIM_PLUG_URL;
use crate::resources::{Outcome, fs};

/// Downloads vim-plug into `~/.vim/autoload` and writes a `~/.vimrc` wrapper.
#[derive(Debug, Clone, Copy)]
pub struct Vim;

impl Installer for Vim {
    fn name(&self) -> &str {
        "vim"
    }

    fn resources(&self) -> &[&str] {
        &[".vimrc"]
    }

    fn run(&self, ctx: &Context) -> Result<Outcome> {
        ctx.require_program(self.name(), "vim");

        let autoload = ctx.dest(".vim/autoload");
        std::fs::create_dir_all(&autoload)
            .with_context(|| format!("creating {}", autoload.display()))?;

        let plug = autoload.join("plug.vim");
        if !plug.exists() || ctx.overwrite() {
            ctx.log.info(&format!("downloading {VIM_PLUG_URL}"));
            let body = ctx.fetcher.download(VIM_PLUG_URL)?;
            fs::write_atomic(&plug, body.as_bytes(), None)?;
        }

        write_wrapper(ctx, &VIMRC)
    }
}
