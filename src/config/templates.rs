//! Wrapper file templates.
//!
//! A wrapper is a small file placed in the destination that includes the
//! bundled resource by absolute path, so the tool picks up the resource
//! while the user keeps a regular file they can extend.
use std::path::Path;

/// Placeholder replaced by the resource's absolute path.
const PATH_PLACEHOLDER: &str = "{path}";

/// A generated wrapper: which resource it points at and where it lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wrapper {
    /// Bundled resource the wrapper includes.
    pub resource: &'static str,
    /// Destination path, relative to the destination directory.
    pub dest: &'static str,
    /// Template text; see [`render`].
    pub template: &'static str,
}

/// `.gitconfig`: includes the resource and enables the git-lfs filter.
pub const GIT_CONFIG: Wrapper = Wrapper {
    resource: ".gitconfig",
    dest: ".gitconfig",
    template: r#"
[include]
    path = {path}
[filter "lfs"]
    clean = git-lfs clean -- %f
    smudge = git-lfs smudge -- %f
    process = git-lfs filter-process
    required = true
"#,
};

/// `.zshrc`: sources the resource.
pub const ZSHRC: Wrapper = Wrapper {
    resource: ".zshrc",
    dest: ".zshrc",
    template: "
ZSHRC_FILE={path}
. $ZSHRC_FILE
",
};

/// `.zshenv`: sources the resource.
pub const ZSHENV: Wrapper = Wrapper {
    resource: ".zshenv",
    dest: ".zshenv",
    template: "
ZSHENV_FILE={path}
. $ZSHENV_FILE
",
};

/// `.vimrc`: sources the resource.
pub const VIMRC: Wrapper = Wrapper {
    resource: ".vimrc",
    dest: ".vimrc",
    template: "execute 'source {path}'",
};

/// Substitute `resource_path` into `template`, trimming surrounding
/// whitespace.
///
/// # Examples
///
/// ```
/// use dotfiles_installer::config::templates::{VIMRC, render};
/// use std::path::Path;
///
/// assert_eq!(
///     render(VIMRC.template, Path::new("/opt/dotfiles/.vimrc")),
///     "execute 'source /opt/dotfiles/.vimrc'"
/// );
/// ```
#[must_use]
pub fn render(template: &str, resource_path: &Path) -> String {
    template
        .trim()
        .replace(PATH_PLACEHOLDER, &resource_path.display().to_string())
}
