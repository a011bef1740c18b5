use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use dotfiles_installer::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    match args.command {
        cli::Command::Install(ref opts) => {
            logging::init_subscriber(args.verbose, args.command.name());
            let log = Arc::new(logging::Logger::new(args.command.name()));
            commands::install::run(&args.global, opts, &log)
        }
        cli::Command::List => {
            commands::list::run();
            Ok(())
        }
        cli::Command::Version => {
            commands::version::run();
            Ok(())
        }
    }
}
