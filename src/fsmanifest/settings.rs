use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const SETTINGS_FILENAME: &str = "settings.json";
pub const HOME_ENV: &str = "FSMANIFEST_HOME";

pub const DEFAULT_MESSAGE: &str =
    "Hello from FSManifestInfo Rust Application with Third-Party Dependencies";
const DEFAULT_CONFIG_RESOURCE: &str = "_main/config/app.config";
const DEFAULT_README_RESOURCE: &str = "_main/resources/README.txt";
const DEFAULT_PROBE_URL: &str = "https://api.github.com";
const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 5;

/// Application settings, stored in `settings.json` under the settings directory.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Logical name of the config resource
    #[serde(default = "default_config_resource")]
    pub config_resource: String,

    /// Logical name of the README resource
    #[serde(default = "default_readme_resource")]
    pub readme_resource: String,

    /// Message processed when `--message` is not given
    #[serde(default = "default_message")]
    pub default_message: String,

    #[serde(default = "default_probe_url")]
    pub probe_url: String,

    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,
}

fn default_config_resource() -> String {
    DEFAULT_CONFIG_RESOURCE.to_string()
}

fn default_readme_resource() -> String {
    DEFAULT_README_RESOURCE.to_string()
}

fn default_message() -> String {
    DEFAULT_MESSAGE.to_string()
}

fn default_probe_url() -> String {
    DEFAULT_PROBE_URL.to_string()
}

fn default_probe_timeout_secs() -> u64 {
    DEFAULT_PROBE_TIMEOUT_SECS
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_resource: default_config_resource(),
            readme_resource: default_readme_resource(),
            default_message: default_message(),
            probe_url: default_probe_url(),
            probe_timeout_secs: default_probe_timeout_secs(),
        }
    }
}

impl Settings {
    /// Load settings from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(settings_dir: P) -> Result<Self> {
        let path = settings_dir.as_ref().join(SETTINGS_FILENAME);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(AppError::Io)?;
        let settings: Settings =
            serde_json::from_str(&content).map_err(AppError::Serialization)?;
        Ok(settings)
    }

    /// Save settings to the given directory
    pub fn save<P: AsRef<Path>>(&self, settings_dir: P) -> Result<()> {
        let settings_dir = settings_dir.as_ref();

        if !settings_dir.exists() {
            fs::create_dir_all(settings_dir).map_err(AppError::Io)?;
        }

        let content = serde_json::to_string_pretty(self).map_err(AppError::Serialization)?;
        fs::write(settings_dir.join(SETTINGS_FILENAME), content).map_err(AppError::Io)?;
        Ok(())
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

/// `$FSMANIFEST_HOME` when set, otherwise the platform config directory.
pub fn settings_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home));
    }
    directories::ProjectDirs::from("com", "fsmanifest", "fsmanifest")
        .map(|dirs| dirs.config_dir().to_path_buf())
}
