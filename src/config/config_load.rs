// src/config/config_load.rs
//
// loading and validating config.toml

use nannou::color::Rgb;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::color::parse_hex_color;
use super::config_types::*;
use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub animation: AnimationConfig,
    pub style: StyleConfig,
}

impl Config {
    /// Loads and validates the config, searching the executable's directory
    /// first and the working directory second. Falls back to the built-in
    /// defaults when neither holds a config file.
    pub fn load() -> Result<Self, ConfigError> {
        let exe_config = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|dir| dir.join(CONFIG_FILE)));
        let candidates: Vec<PathBuf> = exe_config
            .into_iter()
            .chain(std::iter::once(PathBuf::from(CONFIG_FILE)))
            .collect();

        Self::load_from_candidates(&candidates)
    }

    /// Loads the first candidate path that exists, or the defaults when none
    /// does, and validates the result.
    pub fn load_from_candidates(candidates: &[PathBuf]) -> Result<Self, ConfigError> {
        let config = match candidates.iter().find(|path| path.exists()) {
            Some(path) => {
                tracing::info!("loading config from {}", path.display());
                Self::load_from_path(path)?
            }
            None => {
                tracing::warn!("no {} found, using built-in defaults", CONFIG_FILE);
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Rejects configurations the animation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.style.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.animation.parts == 0 {
            return Err(invalid("animation.parts", "must be at least 1"));
        }
        let step = self.animation.step;
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(invalid(
                "animation.step",
                format!("must be in (0, 1], got {}", step),
            ));
        }
        if self.animation.interval_ms == 0 {
            return Err(invalid("animation.interval_ms", "must be positive"));
        }
        if !is_positive(self.style.size_factor) {
            return Err(invalid("style.size_factor", "must be positive"));
        }
        if !is_positive(self.style.stroke_factor) {
            return Err(invalid("style.stroke_factor", "must be positive"));
        }
        if !self.style.rotation_degrees.is_finite() {
            return Err(invalid("style.rotation_degrees", "must be finite"));
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(invalid("window", "width and height must be positive"));
        }
        let rendering = &self.rendering;
        if rendering.texture_width == 0 || rendering.texture_height == 0 {
            return Err(invalid(
                "rendering",
                "texture width and height must be positive",
            ));
        }
        if rendering.texture_samples == 0 {
            return Err(invalid("rendering.texture_samples", "must be at least 1"));
        }

        self.background_color()?;
        self.palette_colors()?;
        Ok(())
    }

    pub fn background_color(&self) -> Result<Rgb, ConfigError> {
        parse_hex_color(&self.style.background)
    }

    pub fn palette_colors(&self) -> Result<Vec<Rgb>, ConfigError> {
        self.style
            .palette
            .iter()
            .map(|c| parse_hex_color(c))
            .collect()
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field,
        reason: reason.into(),
    }
}
