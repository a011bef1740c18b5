//! Availability checks for external programs.
use crate::logging::Log;

/// Looks up programs on the search path.
pub trait ProgramLookup: Send + Sync + std::fmt::Debug {
    /// Returns `true` if `program` can be found.
    fn which(&self, program: &str) -> bool;
}

/// [`ProgramLookup`] backed by the real `PATH`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemLookup;

impl ProgramLookup for SystemLookup {
    fn which(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}

/// Check that `program` is available, warning on behalf of `subsystem` if not.
///
/// A missing program never stops an install; the warning is the whole effect.
pub fn check(lookup: &dyn ProgramLookup, log: &dyn Log, subsystem: &str, program: &str) -> bool {
    let found = lookup.which(program);
    if found {
        log.debug(&format!("found {program}"));
    } else {
        log.warn(&format!(
            "{subsystem} needs {program}, but {program} was not found"
        ));
    }
    found
}
