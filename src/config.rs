// Global configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::ImageUrls;
use crate::host::SmoothScroll;
use crate::tracker::TrackerOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub scroll: ScrollConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Rows covered by the fixed header at the top of the page
    #[serde(default = "default_header_height")]
    pub header_height: u32,

    /// Rows a section may still be below the viewport top and count as active.
    /// Unset means "same as header_height".
    #[serde(default)]
    pub offset_threshold: Option<u32>,

    /// Highlight the target section as soon as navigation starts
    #[serde(default = "default_true_config")]
    pub eager_update: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    #[serde(default = "default_true_config")]
    pub smooth: bool,

    /// Length of the smooth-scroll animation
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Rows per mouse wheel notch
    #[serde(default = "default_wheel_step")]
    pub wheel_step: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Dataset export to display; the bundled sample is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub project_id: String,

    #[serde(default = "default_dataset")]
    pub dataset: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

fn default_header_height() -> u32 {
    3
}

fn default_true_config() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    300
}

fn default_wheel_step() -> u32 {
    3
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("folio.log")
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            header_height: default_header_height(),
            offset_threshold: None,
            eager_update: true,
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth: true,
            duration_ms: default_duration_ms(),
            wheel_step: default_wheel_step(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            project_id: String::new(),
            dataset: default_dataset(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

impl NavigationConfig {
    pub fn effective_threshold(&self) -> u32 {
        self.offset_threshold.unwrap_or(self.header_height)
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::home_dir()
                .context("Could not determine home directory")?
                .join(".config")
                .join("folio")
        } else {
            dirs::config_dir()
                .context("Could not determine config directory")?
                .join("folio")
        };

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from disk, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Config::default();

            // Built-in defaults still work when the directory isn't writable
            if let Err(e) = config.save() {
                eprintln!("Warning: Could not create default config file: {}", e);
                eprintln!(
                    "Using built-in defaults. Run 'folio init-config' to create a config file."
                );
            }

            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Check if config file exists
    pub fn exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }

    /// Create a default config file if it doesn't exist
    pub fn ensure_default() -> Result<()> {
        if !Self::exists() {
            let config = Config::default();
            config.save()?;
        }
        Ok(())
    }

    pub fn tracker_options(&self) -> TrackerOptions {
        TrackerOptions {
            offset_threshold: self.navigation.effective_threshold(),
            header_height: self.navigation.header_height,
            eager_update: self.navigation.eager_update,
        }
    }

    pub fn smooth_scroll(&self) -> SmoothScroll {
        SmoothScroll {
            enabled: self.scroll.smooth,
            duration: Duration::from_millis(self.scroll.duration_ms),
        }
    }

    pub fn image_urls(&self) -> ImageUrls {
        ImageUrls::new(&self.content.project_id, &self.content.dataset)
    }
}
