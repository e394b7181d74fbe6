// src/config/color.rs
//
// Hex color parsing for palette entries

use nannou::color::{rgb, Rgb};
use regex::Regex;
use std::sync::OnceLock;

use crate::error::ConfigError;

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
            .expect("hex color pattern is valid")
    })
}

/// Parses a `#RRGGBB` string into a normalized nannou color.
pub fn parse_hex_color(value: &str) -> Result<Rgb, ConfigError> {
    let captures = hex_pattern()
        .captures(value.trim())
        .ok_or_else(|| ConfigError::InvalidColor(value.to_string()))?;

    let channel = |i: usize| -> Result<f32, ConfigError> {
        u8::from_str_radix(&captures[i], 16)
            .map(|c| c as f32 / 255.0)
            .map_err(|_| ConfigError::InvalidColor(value.to_string()))
    };

    Ok(rgb(channel(1)?, channel(2)?, channel(3)?))
}
