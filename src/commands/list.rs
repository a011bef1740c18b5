//! Command: list installers and the resources they place.
use crate::installers::{self, Installer};

/// One line per installer: its name padded to a column, then its resources.
#[must_use]
pub fn lines(installers: &[Box<dyn Installer>]) -> Vec<String> {
    let width = installers
        .iter()
        .map(|i| i.name().len())
        .max()
        .unwrap_or(0);
    installers
        .iter()
        .map(|i| {
            let resources = if i.resources().is_empty() {
                "(checks only)".to_string()
            } else {
                i.resources().join(" ")
            };
            format!("{:width$}  {resources}", i.name())
        })
        .collect()
}

/// Print every installer to stdout.
pub fn run() {
    for line in lines(&installers::all_installers()) {
        println!("{line}");
    }
}
