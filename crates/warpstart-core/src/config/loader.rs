//! Configuration loader with precedence
//!
//! Loads configuration from the following sources (low to high):
//! 1. Built-in defaults
//! 2. Config file (`<data dir>/config.yaml`)
//! 3. Environment variables (`WARPSTART_*` prefix)

use super::catalog::AppCatalog;
use crate::error::{Error, Result};
use crate::types::AppTag;
use crate::utils::get_home_dir;
use camino::{Utf8Path, Utf8PathBuf};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use tracing::debug;

/// Name of the optional config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default registry file name inside the data directory
pub const DEFAULT_STORE_FILE: &str = "projects.json";

/// Data directory name under the home directory
const DATA_DIR_NAME: &str = ".warpstart";

/// Overrides the data directory
const HOME_ENV: &str = "WARPSTART_HOME";

/// Overrides the registry file location
const STORE_ENV: &str = "WARPSTART_STORE";

/// On-disk shape of `config.yaml`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct ConfigFile {
    store_file: Option<Utf8PathBuf>,
    #[serde(default)]
    apps: BTreeMap<AppTag, String>,
}

/// Resolved launcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarpstartConfig {
    /// Directory holding the registry and config file
    pub data_dir: Utf8PathBuf,

    /// Registry file, relative to `data_dir` unless absolute
    pub store_file: Utf8PathBuf,

    /// Tag to invocation templates
    pub apps: AppCatalog,
}

impl WarpstartConfig {
    /// Built-in defaults rooted at `data_dir`
    pub fn with_data_dir(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            store_file: Utf8PathBuf::from(DEFAULT_STORE_FILE),
            apps: AppCatalog::default(),
        }
    }

    /// Load from the standard locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new()?.load()
    }

    /// Full path of the registry file
    pub fn store_path(&self) -> Utf8PathBuf {
        if self.store_file.is_absolute() {
            self.store_file.clone()
        } else {
            self.data_dir.join(&self.store_file)
        }
    }
}

/// Configuration loader
pub struct ConfigLoader {
    /// Base directory for the config file and registry
    data_dir: Utf8PathBuf,
}

impl ConfigLoader {
    /// Create a loader for the standard data directory
    pub fn new() -> Result<Self> {
        let data_dir = Self::get_data_dir()?;
        Ok(Self { data_dir })
    }

    /// Create a loader with a custom data directory
    pub fn with_dir(data_dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// `$WARPSTART_HOME`, else `~/.warpstart`
    fn get_data_dir() -> Result<Utf8PathBuf> {
        match env::var(HOME_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Ok(Utf8PathBuf::from(dir)),
            _ => Ok(get_home_dir()?.join(DATA_DIR_NAME)),
        }
    }

    /// Load configuration with precedence applied
    pub fn load(&self) -> Result<WarpstartConfig> {
        let mut config = WarpstartConfig::with_data_dir(self.data_dir.clone());

        let config_path = self.data_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            debug!("Loading config from {}", config_path);
            let file = Self::load_yaml_file(&config_path)?;
            if let Some(store_file) = file.store_file {
                config.store_file = store_file;
            }
            config.apps = config.apps.merge(file.apps)?;
        }

        self.apply_env_overrides(config)
    }

    fn load_yaml_file(path: &Utf8Path) -> Result<ConfigFile> {
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(ConfigFile::default());
        }
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    fn apply_env_overrides(&self, mut config: WarpstartConfig) -> Result<WarpstartConfig> {
        if let Ok(val) = env::var(STORE_ENV) {
            if val.trim().is_empty() {
                return Err(Error::invalid_config(format!(
                    "{} must not be empty",
                    STORE_ENV
                )));
            }
            config.store_file = Utf8PathBuf::from(val);
        }

        Ok(config)
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Utf8Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_temp_loader() -> (ConfigLoader, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let data_dir =
            Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf()).expect("Invalid UTF-8 path");
        (ConfigLoader::with_dir(data_dir), temp_dir)
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        let (loader, _temp) = create_temp_loader();
        let config = loader.load().unwrap();

        assert_eq!(config.store_path(), loader.data_dir().join("projects.json"));
        assert_eq!(config.apps, AppCatalog::default());
    }

    #[test]
    #[serial]
    fn test_load_from_file() {
        let (loader, _temp) = create_temp_loader();
        let config_content = r#"
store-file: launch.json
apps:
  terminal: "alacritty --working-directory {dir}"
  file-manager: "nautilus {dir}"
"#;
        fs::write(loader.data_dir().join(CONFIG_FILE_NAME), config_content).unwrap();

        let config = loader.load().unwrap();
        assert_eq!(config.store_path(), loader.data_dir().join("launch.json"));
        assert_eq!(
            config.apps.template(AppTag::Terminal),
            "alacritty --working-directory {dir}"
        );
        assert_eq!(config.apps.template(AppTag::FileManager), "nautilus {dir}");
        assert_eq!(config.apps.template(AppTag::Browser), "firefox {url}");
    }

    #[test]
    #[serial]
    fn test_empty_config_file_uses_defaults() {
        let (loader, _temp) = create_temp_loader();
        fs::write(loader.data_dir().join(CONFIG_FILE_NAME), "\n").unwrap();

        let config = loader.load().unwrap();
        assert_eq!(config.apps, AppCatalog::default());
    }

    #[test]
    #[serial]
    fn test_malformed_config_file() {
        let (loader, _temp) = create_temp_loader();
        fs::write(
            loader.data_dir().join(CONFIG_FILE_NAME),
            "apps:\n  emacs: \"emacs {dir}\"\n",
        )
        .unwrap();

        let err = loader.load().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    #[serial]
    fn test_store_env_override() {
        let (loader, _temp) = create_temp_loader();
        env::set_var(STORE_ENV, "/var/tmp/warpstart.json");

        let config = loader.load();
        env::remove_var(STORE_ENV);

        assert_eq!(
            config.unwrap().store_path(),
            Utf8PathBuf::from("/var/tmp/warpstart.json")
        );
    }

    #[test]
    #[serial]
    fn test_home_env_override() {
        env::set_var(HOME_ENV, "/opt/warpstart");
        let loader = ConfigLoader::new();
        env::remove_var(HOME_ENV);

        assert_eq!(loader.unwrap().data_dir(), "/opt/warpstart");
    }

    #[test]
    #[serial]
    fn test_default_data_dir_under_home() {
        let original = env::var("HOME").ok();
        env::remove_var(HOME_ENV);
        env::set_var("HOME", "/home/tester");

        let loader = ConfigLoader::new();

        match original {
            Some(home) => env::set_var("HOME", home),
            None => env::remove_var("HOME"),
        }
        assert_eq!(loader.unwrap().data_dir(), "/home/tester/.warpstart");
    }
}
