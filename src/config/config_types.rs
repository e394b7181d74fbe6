// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    pub texture_width: u32,
    pub texture_height: u32,
    pub texture_samples: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            texture_width: 1280,
            texture_height: 720,
            texture_samples: 4,
        }
    }
}

/************************* Animation Configs ********************/
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub parts: usize,     // Number of sequential phases inside one shape animation
    pub step: f32,        // Progress added per tick
    pub interval_ms: u64, // Time between ticks
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        let parts = 4;
        Self {
            parts,
            step: 0.02 / parts as f32,
            interval_ms: 20,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_factor: f32,    // extent / stroke_factor = line width
    pub size_factor: f32,      // extent / size_factor = square side
    pub rotation_degrees: f32, // rotation reached at the end of the last phase
    pub background: String,
    pub palette: Vec<String>, // one color per chain node
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_factor: 90.0,
            size_factor: 5.2,
            rotation_degrees: 90.0,
            background: "#bdbdbd".to_string(),
            palette: ["#3F51B5", "#4CAF50", "#F44336", "#FFEB3B", "#009688"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
