use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::catalog::{CatalogError, urls};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Base URL that category, title and media file segments are appended to
    #[serde(default = "default_prefix_url")]
    pub prefix_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub connection_timeout: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Read the config at `path` without touching the filesystem otherwise
    pub fn read_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).context("Failed to read config file")?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        info!("Config loaded successfully");
        Ok(config)
    }

    /// Read the config at `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::read_from(path)
        } else {
            info!("No config file found, using defaults");
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure config directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents).context("Failed to write config file")?;

        debug!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.network.connection_timeout)
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Failed to get config directory")?;
        Ok(config_dir.join("reel-catalog").join("config.toml"))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            prefix_url: default_prefix_url(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connection_timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_feed_url() -> String {
    "https://storage.googleapis.com/android-tv/android_tv_videos_new.json".to_string()
}
fn default_prefix_url() -> String {
    "https://storage.googleapis.com/android-tv".to_string()
}
fn default_timeout() -> u64 {
    30
}

/// Where the catalog loader obtains its prefix URL.
///
/// The loader asks again on every fetch attempt, so implementations backed by
/// mutable storage pick up changes between attempts.
pub trait PrefixUrlSource: Send + Sync {
    fn prefix_url(&self) -> Result<Url, CatalogError>;
}

impl PrefixUrlSource for Config {
    fn prefix_url(&self) -> Result<Url, CatalogError> {
        urls::parse_prefix(&self.catalog.prefix_url)
    }
}

/// Prefix source that re-reads a config file on every request.
///
/// The file is only read; a missing file is a configuration error.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The per-user config file
    pub fn user() -> Result<Self> {
        Ok(Self::new(Config::config_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrefixUrlSource for ConfigFile {
    fn prefix_url(&self) -> Result<Url, CatalogError> {
        Config::read_from(&self.path)
            .map_err(|e| CatalogError::Config(format!("{:#}", e)))?
            .prefix_url()
    }
}
