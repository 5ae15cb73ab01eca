use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SCROLLER_INTERVAL_MS: u64 = 1000;
const DEFAULT_RIBBON_INTERVAL_MS: u64 = 1500;
const DEFAULT_CELL_WIDTH_PX: u16 = 8;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigator: NavigatorConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Carousel timing and gesture scaling
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    pub scroller_interval_ms: u64,
    pub ribbon_interval_ms: u64,
    /// Width of one terminal cell in logical pixels, used to scale mouse drags
    pub cell_width_px: u16,
}

/// Where chapter content is read from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// JSON content file. Empty uses the bundled sample.
    pub path: String,
}

/// Log output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            scroller_interval_ms: DEFAULT_SCROLLER_INTERVAL_MS,
            ribbon_interval_ms: DEFAULT_RIBBON_INTERVAL_MS,
            cell_width_px: DEFAULT_CELL_WIDTH_PX,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl NavigatorConfig {
    #[must_use]
    pub fn scroller_interval(&self) -> Duration {
        interval_or_default(self.scroller_interval_ms, DEFAULT_SCROLLER_INTERVAL_MS)
    }

    #[must_use]
    pub fn ribbon_interval(&self) -> Duration {
        interval_or_default(self.ribbon_interval_ms, DEFAULT_RIBBON_INTERVAL_MS)
    }

    #[must_use]
    pub fn cell_width(&self) -> i32 {
        if self.cell_width_px == 0 {
            i32::from(DEFAULT_CELL_WIDTH_PX)
        } else {
            i32::from(self.cell_width_px)
        }
    }
}

fn interval_or_default(millis: u64, fallback: u64) -> Duration {
    if millis == 0 {
        Duration::from_millis(fallback)
    } else {
        Duration::from_millis(millis)
    }
}

impl ContentConfig {
    /// Configured content file, if any
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        let trimmed = self.path.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PathBuf::from(trimmed))
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Returns the directory holding the log file
    pub fn data_dir() -> Result<PathBuf> {
        Ok(project_dirs()?.data_dir().to_path_buf())
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "showcase")
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.navigator.scroller_interval(), Duration::from_millis(1000));
        assert_eq!(config.navigator.ribbon_interval(), Duration::from_millis(1500));
        assert_eq!(config.navigator.cell_width(), 8);
        assert_eq!(config.logging.level, "info");
        assert!(config.content.path().is_none());
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = Config::from_toml(
            "[navigator]\nscroller_interval_ms = 2500\nribbon_interval_ms = 0\ncell_width_px = 10\n\n[content]\npath = \" /tmp/site.json \"\n",
        )
        .unwrap();
        assert_eq!(config.navigator.scroller_interval(), Duration::from_millis(2500));
        assert_eq!(config.navigator.ribbon_interval(), Duration::from_millis(1500));
        assert_eq!(config.navigator.cell_width(), 10);
        assert_eq!(config.content.path(), Some(PathBuf::from("/tmp/site.json")));
    }

    #[test]
    fn test_saved_form_parses_back() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let config = Config::from_toml(&text).unwrap();
        assert_eq!(config.navigator.scroller_interval_ms, 1000);
    }
}
