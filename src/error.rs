// src/error.rs
//
// Error types for configuration loading and scene construction

use thiserror::Error;

/// Errors raised while loading or validating `config.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}

/// Errors raised while building the shape chain.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("shape chain needs at least one node")]
    EmptyChain,

    #[error("progress step must be finite and in (0, 1], got {0}")]
    InvalidStep(f32),
}
