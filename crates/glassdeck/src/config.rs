use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "glassdeck";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// 1-indexed slide to open decks on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_hint: Option<bool>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `glassdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Glassdeck configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "warm" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'warm' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "defaults.start_slide" => {
                let slide: usize = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid start_slide: {value}. Must be a slide number.")
                })?;
                if slide == 0 {
                    anyhow::bail!("Invalid start_slide: {value}. Slides are numbered from 1.");
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .start_slide = Some(slide);
            }
            "defaults.show_hint" => {
                let show: bool = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid show_hint: {value}. Must be 'true' or 'false'.")
                })?;
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .show_hint = Some(show);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.start_slide, defaults.show_hint"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_theme_accepts_known_names() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        assert_eq!(
            config.defaults.as_ref().unwrap().theme.as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn set_theme_rejects_unknown_name() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "neon").is_err());
    }

    #[test]
    fn set_start_slide_rejects_zero() {
        let mut config = Config::default();
        assert!(config.set("defaults.start_slide", "0").is_err());
        config.set("defaults.start_slide", "3").unwrap();
        assert_eq!(config.defaults.as_ref().unwrap().start_slide, Some(3));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut config = Config::default();
        assert!(config.set("defaults.transition", "fade").is_err());
    }

    #[test]
    fn roundtrips_through_yaml() {
        let mut config = Config::default();
        config.set("defaults.theme", "warm").unwrap();
        config.set("defaults.show_hint", "false").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        let defaults = back.defaults.unwrap();
        assert_eq!(defaults.theme.as_deref(), Some("warm"));
        assert_eq!(defaults.show_hint, Some(false));
    }

    #[test]
    fn empty_yaml_gives_defaults() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.defaults.is_none());
    }
}
