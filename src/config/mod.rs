//! Configuration file and well-known paths.
//!
//! The config file is optional TOML. Its only table today is `[strings]`,
//! which overrides the labels shown on screen:
//!
//! ```toml
//! [strings]
//! button_click = "Add"
//! ```

mod error;
mod strings;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::info;

pub use error::ConfigError;
pub use strings::{StringKey, Strings};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "ROSTER_CONFIG";

const APP_DIR: &str = "roster";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub strings: Strings,
}

impl Config {
    /// Loads the config from [`Config::default_path`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Loads the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolves the config file path: `$ROSTER_CONFIG` if set, otherwise
    /// `<config dir>/roster/config.toml`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        resolve_config_path(std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }
}

/// Returns the log file path: `<data dir>/roster/roster.log`.
pub fn log_path() -> Result<PathBuf, ConfigError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join("roster.log"))
        .ok_or(ConfigError::NoDataDir)
}

fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(&path, content).unwrap();
        path
    }

    mod loading {
        use super::*;

        #[test]
        fn missing_file_yields_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
            assert_eq!(config, Config::default());
        }

        #[test]
        fn empty_file_yields_defaults() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_config(&dir, "");
            assert_eq!(Config::load_from(&path).unwrap(), Config::default());
        }

        #[test]
        fn overrides_strings() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_config(
                &dir,
                "[strings]\nenter_item = \"Nama\"\nbutton_navigate = \"Selesai\"\n",
            );
            let config = Config::load_from(&path).unwrap();
            assert_eq!(config.strings.lookup(StringKey::EnterItem), "Nama");
            assert_eq!(config.strings.lookup(StringKey::ButtonNavigate), "Selesai");
            assert_eq!(config.strings.lookup(StringKey::ButtonClick), "Submit");
        }

        #[test]
        fn malformed_file_is_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_config(&dir, "[strings\n");
            let err = Config::load_from(&path).unwrap_err();
            assert!(matches!(err, ConfigError::Toml { .. }), "got {err:?}");
            assert!(err.to_string().contains("config.toml"));
        }

        #[test]
        fn unknown_table_is_error() {
            let dir = tempfile::tempdir().unwrap();
            let path = write_config(&dir, "[theme]\ncolor = \"red\"\n");
            assert!(matches!(
                Config::load_from(&path),
                Err(ConfigError::Toml { .. })
            ));
        }

        #[test]
        fn directory_path_is_io_error() {
            let dir = tempfile::tempdir().unwrap();
            assert!(matches!(
                Config::load_from(dir.path()),
                Err(ConfigError::Io(_))
            ));
        }
    }

    mod paths {
        use super::*;

        #[test]
        fn explicit_path_wins() {
            let path = resolve_config_path(Some(PathBuf::from("/tmp/custom.toml"))).unwrap();
            assert_eq!(path, PathBuf::from("/tmp/custom.toml"));
        }

        #[test]
        fn default_path_ends_with_app_dir() {
            if let Ok(path) = resolve_config_path(None) {
                assert!(path.ends_with("roster/config.toml"));
            }
        }

        #[test]
        fn log_path_ends_with_log_file() {
            if let Ok(path) = log_path() {
                assert!(path.ends_with("roster/roster.log"));
            }
        }
    }
}
