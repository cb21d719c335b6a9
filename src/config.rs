use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::physics::{Spring, Tuning, TuningError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid dock tuning: {0}")]
    Tuning(#[from] TuningError),
}

#[derive(Resource, Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Resting icon size in px.
    pub icon_size: f32,
    /// Px distance at which magnification fully decays.
    pub influence_radius: f32,
    /// Peak size multiplier directly under the pointer.
    pub max_scale_factor: f32,
    /// Spring responsiveness, 0..1.
    pub stiffness: f32,
    /// Spring energy loss, 0..1.
    pub damping: f32,
    /// Gap between icon slots in px.
    pub spacing: f32,
    /// Height of the dock baseline above the window bottom.
    pub margin_y: f32,
    pub font_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_size: 56.0,
            influence_radius: 56.0 * 6.0,
            max_scale_factor: 2.5,
            stiffness: 0.3,
            damping: 0.7,
            spacing: 16.0,
            margin_y: 24.0,
            font_size: 12.0,
        }
    }
}

impl Config {
    pub fn tuning(&self) -> Tuning {
        Tuning {
            base_size: self.icon_size,
            influence_radius: self.influence_radius,
            max_scale_factor: self.max_scale_factor,
            spring: Spring {
                stiffness: self.stiffness,
                damping: self.damping,
            },
        }
    }

    fn validate(self) -> Result<Self, ConfigError> {
        self.tuning().validate()?;
        Ok(self)
    }
}

fn config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("magni-dock");
    fs::create_dir_all(&path).ok()?;
    path.push("config.toml");
    Some(path)
}

/// Load `~/.config/magni-dock/config.toml`, writing out the defaults on
/// first run. A file that parses but carries unstable tuning is refused so
/// the dock never starts with shrinking or divergent icons.
pub fn load_config() -> Result<Config, ConfigError> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };

    if path.exists() {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()
    } else {
        let config = Config::default();
        if let Ok(toml_string) = toml::to_string_pretty(&config) {
            let _ = fs::write(path, toml_string);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("icon_size = 48.0\nstiffness = 0.2\n").unwrap();
        assert_eq!(config.icon_size, 48.0);
        assert_eq!(config.stiffness, 0.2);
        assert_eq!(config.damping, 0.7);
    }

    #[test]
    fn unstable_tuning_is_refused() {
        let config: Config = toml::from_str("damping = 1.5\n").unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str("max_scale_factor = 0.9\n").unwrap();
        assert!(config.validate().is_err());
    }
}
