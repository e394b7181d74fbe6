// src/lib.rs
//
// A chain of square+circle shapes that grow, rotate and shrink one at a time,
// sweeping back and forth along the chain on each tap.

pub mod animation;
pub mod config;
pub mod controllers;
pub mod error;
pub mod models;
pub mod render;

pub use controllers::SceneController;
pub use error::{ConfigError, SceneError};
