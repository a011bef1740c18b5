//! Command: print version information.

/// The version string: `DOTFILES_VERSION` from the build, else the crate
/// version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("DOTFILES_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the installer version to stdout.
pub fn run() {
    println!("dotfiles {}", version());
}
