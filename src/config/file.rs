//! Optional TOML settings file.
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Settings read from `config.toml`. Every key is optional.
///
/// ```toml
/// dest = "/home/me"
/// overwrite = false
/// resources = "/opt/dotfiles/resources"
/// skip = ["fvwm2", "vimperator"]
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub dest: Option<PathBuf>,
    pub overwrite: bool,
    pub resources: Option<PathBuf>,
    pub skip: Vec<String>,
}

/// Load `path`, returning defaults when the file does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidConfigFile`] if the file cannot be read or
/// does not parse.
pub fn load(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let invalid = |message: String| ConfigError::InvalidConfigFile {
        path: path.to_path_buf(),
        message,
    };
    let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    toml::from_str(&content).map_err(|e| invalid(e.message().to_string()))
}

/// Resolve the config root from explicit `XDG_CONFIG_HOME` / `HOME` values.
fn config_root(xdg_config_home: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".config")))
}

/// `$XDG_CONFIG_HOME/dotfiles/config.toml`, falling back to `~/.config`.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    let home = std::env::var("HOME").ok();
    config_root(xdg.as_deref(), home.as_deref()).map(|root| root.join("dotfiles/config.toml"))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = load(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, FileConfig::default());
    }

    #[test]
    fn parses_all_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "dest = \"/home/me\"\noverwrite = true\nresources = \"/opt/r\"\nskip = [\"fvwm2\"]\n",
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.dest, Some(PathBuf::from("/home/me")));
        assert!(config.overwrite);
        assert_eq!(config.resources, Some(PathBuf::from("/opt/r")));
        assert_eq!(config.skip, vec!["fvwm2".to_string()]);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "overwrite = true\n").unwrap();

        let config = load(&path).unwrap();
        assert!(config.overwrite);
        assert!(config.dest.is_none());
        assert!(config.skip.is_empty());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "destination = \"/x\"\n").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfigFile { .. }));
        assert!(err.to_string().contains("destination"), "{err}");
    }

    #[test]
    fn config_root_prefers_xdg() {
        assert_eq!(
            config_root(Some("/xdg"), Some("/home/me")),
            Some(PathBuf::from("/xdg"))
        );
        assert_eq!(
            config_root(Some(""), Some("/home/me")),
            Some(PathBuf::from("/home/me/.config"))
        );
        assert_eq!(config_root(None, None), None);
    }
}
