use std::sync::Arc;

use anyhow::{Context as _, Result};

use super::CommandSetup;
use crate::cli::{GlobalOpts, InstallOpts};
use crate::fetch::NetworkFetcher;
use crate::installers::{self, Context, Installer};
use crate::logging::{Log, Logger};
use crate::programs::SystemLookup;

/// Run the install command.
///
/// # Errors
///
/// Returns an error if setup fails, an installer name is unknown, or an
/// installer fails.
pub fn run(global: &GlobalOpts, opts: &InstallOpts, log: &Arc<Logger>) -> Result<()> {
    log.info(&format!("dotfiles {}", super::version::version()));

    let setup = CommandSetup::init(global, log)?;

    let skip: Vec<String> = opts
        .skip
        .iter()
        .chain(&setup.file.skip)
        .cloned()
        .collect();
    let selected = installers::select(&opts.only, &skip)?;

    std::fs::create_dir_all(&setup.options.dest_dir).with_context(|| {
        format!(
            "creating destination directory {}",
            setup.options.dest_dir.display()
        )
    })?;

    let ctx = Context::new(
        setup.options,
        setup.resources.clone(),
        Arc::clone(log) as Arc<dyn Log>,
        Arc::new(SystemLookup),
        Arc::new(NetworkFetcher::new()),
    );

    let result = run_installers(&selected, &ctx);
    log.print_summary();
    result
}

/// Run `installers` in order, stopping at the first failure.
///
/// # Errors
///
/// Returns the first installer error; later installers are not attempted.
pub fn run_installers(installers: &[Box<dyn Installer>], ctx: &Context) -> Result<()> {
    for installer in installers {
        installers::execute(installer.as_ref(), ctx)
            .with_context(|| format!("{} failed; remaining installers skipped", installer.name()))?;
    }
    Ok(())
}
