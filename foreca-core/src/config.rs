use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::fetcher::FetchMode;

pub const DEFAULT_URL: &str = "https://www.foreca.fi/Finland/Porvoo";
pub const DEFAULT_LOCATION: &str = "Porvoo";
pub const DEFAULT_CACHE_PATH: &str = "pw_foreca_porvoo.html";
pub const DEFAULT_WEBDRIVER_URL: &str = "http://localhost:9515";
pub const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// mode = "live"
/// url = "https://www.foreca.fi/Finland/Porvoo"
/// location = "Porvoo"
/// cache_path = "pw_foreca_porvoo.html"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Whether to render the page live or reuse the cached markup.
    pub mode: FetchMode,

    /// Observation page to render in live mode.
    pub url: String,

    /// Human-readable location name used in the report.
    pub location: String,

    /// Where rendered markup is saved (live) and read from (cached).
    /// Relative paths resolve against the working directory.
    pub cache_path: PathBuf,

    /// WebDriver endpoint, e.g. a local `chromedriver`.
    pub webdriver_url: String,

    /// Upper bound for waiting on the page's dynamic content.
    pub render_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: FetchMode::Cached,
            url: DEFAULT_URL.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            webdriver_url: DEFAULT_WEBDRIVER_URL.to_string(),
            render_timeout_secs: DEFAULT_RENDER_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }

    /// Load config from the platform location, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    /// Load config from `path`, or return defaults if the file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, use defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to the platform location.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        fs::write(path, self.to_toml()?)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "foreca-scrape", "foreca")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
