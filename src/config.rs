use crate::state::ScrollTiming;
use crate::style;
use crate::subscription::TriggerBand;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};

/// Application configuration
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub navigation: NavigationConfig,
    pub window: WindowConfig,
    pub data: DataConfig,
}

/// Section tracking and navigation behavior
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct NavigationConfig {
    /// Top edge of the trigger band, as a fraction of viewport height
    pub band_top: f32,
    /// Bottom edge of the trigger band, as a fraction of viewport height
    pub band_bottom: f32,
    /// "delay" (wait `scroll_delay_ms`) or "mount" (wait for the home view)
    pub scroll_timing: String,
    /// Delay before scrolling after returning to the home view
    pub scroll_delay_ms: u64,
}

/// Initial window size
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

/// Project data location
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DataConfig {
    /// Projects file replacing the built-in list
    pub projects_file: Option<String>,
    /// Reload the projects file when it changes
    pub watch_projects: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        NavigationConfig {
            band_top: style::BAND_TOP,
            band_bottom: style::BAND_BOTTOM,
            scroll_timing: "delay".to_string(),
            scroll_delay_ms: style::NAV_SCROLL_DELAY_MS,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            width: style::WINDOW_WIDTH,
            height: style::WINDOW_HEIGHT,
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            projects_file: None,
            watch_projects: true,
        }
    }
}

impl NavigationConfig {
    pub fn trigger_band(&self) -> TriggerBand {
        TriggerBand::new(self.band_top, self.band_bottom).unwrap_or_else(|e| {
            warn!("{}, using default band", e);
            TriggerBand::default()
        })
    }

    pub fn scroll_timing(&self) -> ScrollTiming {
        match self.scroll_timing.as_str() {
            "mount" => ScrollTiming::AfterMount,
            "delay" => ScrollTiming::FixedDelay(Duration::from_millis(self.scroll_delay_ms)),
            other => {
                warn!("Unknown scroll_timing {:?}, using fixed delay", other);
                ScrollTiming::FixedDelay(Duration::from_millis(self.scroll_delay_ms))
            }
        }
    }
}

impl DataConfig {
    /// Projects file with `~` expanded against the home directory.
    pub fn projects_path(&self) -> Option<PathBuf> {
        let raw = self.projects_file.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(user_dirs) = directories::UserDirs::new() {
                return Some(user_dirs.home_dir().join(rest));
            }
        }
        Some(PathBuf::from(raw))
    }
}

impl Config {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "folio")
    }

    /// Get the path to the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn preferences_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("preferences.toml"))
    }

    pub fn outbox_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().join("outbox"))
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from file, or return defaults if file doesn't exist
    pub fn load() -> Self {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                match fs::read_to_string(&path) {
                    Ok(contents) => match Self::parse(&contents) {
                        Ok(config) => return config,
                        Err(e) => {
                            warn!("Failed to parse config file: {}", e);
                            warn!("Using default configuration");
                        }
                    },
                    Err(e) => {
                        warn!("Failed to read config file: {}", e);
                        warn!("Using default configuration");
                    }
                }
            }
        }
        Config::default()
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::error::Result<()> {
        let path = Self::config_path().ok_or(crate::error::FolioError::NoProjectDir("config"))?;
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Create a default config file if it doesn't exist
    pub fn create_default() -> crate::error::Result<()> {
        if let Some(path) = Self::config_path() {
            if !path.exists() {
                Config::default().save()?;
                info!(path = %path.display(), "Wrote default configuration");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.navigation.band_top, 0.2);
        assert_eq!(config.navigation.band_bottom, 0.7);
        assert_eq!(config.navigation.scroll_delay_ms, 300);
        assert_eq!(config.window.width, 1200.0);
        assert!(config.data.watch_projects);
        assert_eq!(
            config.navigation.scroll_timing(),
            ScrollTiming::FixedDelay(Duration::from_millis(300))
        );
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).expect("Failed to serialize");
        let deserialized = Config::parse(&toml_str).expect("Failed to deserialize");
        assert_eq!(config.navigation.scroll_timing, deserialized.navigation.scroll_timing);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[navigation]\nscroll_timing = \"mount\"\n").unwrap();
        assert_eq!(config.navigation.scroll_timing(), ScrollTiming::AfterMount);
        assert_eq!(config.navigation.band_top, 0.2);
        assert_eq!(config.window.height, 800.0);
        assert_eq!(config.data.projects_path(), None);
    }

    #[test]
    fn test_invalid_band_falls_back() {
        let config = Config::parse("[navigation]\nband_top = 0.9\nband_bottom = 0.1\n").unwrap();
        assert_eq!(config.navigation.trigger_band(), TriggerBand::default());
    }

    #[test]
    fn test_projects_path() {
        let config = Config::parse("[data]\nprojects_file = \"/srv/folio/projects.toml\"\n").unwrap();
        assert_eq!(
            config.data.projects_path(),
            Some(PathBuf::from("/srv/folio/projects.toml"))
        );
    }
}
