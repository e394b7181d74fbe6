// src/render/scene_renderer.rs
//
// Draws one full frame: background, then the active shape in its node's color

use nannou::prelude::*;

use super::shape_renderer::{ShapeRenderer, ShapeStyle};
use super::sink::RenderSink;
use crate::config::Config;
use crate::error::ConfigError;
use crate::models::ShapeSequence;

#[derive(Debug, Clone)]
pub struct SceneRenderer {
    shape_renderer: ShapeRenderer,
    palette: Vec<Rgb>,
    background: Rgb,
}

impl SceneRenderer {
    /// Fails on an empty palette so no node is ever left without a color.
    pub fn new(
        shape_renderer: ShapeRenderer,
        palette: Vec<Rgb>,
        background: Rgb,
    ) -> Result<Self, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self {
            shape_renderer,
            palette,
            background,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        Self::new(
            ShapeRenderer::new(ShapeStyle::from_config(&config.style, &config.animation)),
            config.palette_colors()?,
            config.background_color()?,
        )
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Color assigned to chain node `index`.
    pub fn node_color(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }

    /// Draws the frame for `sequence` on a surface of `size` centered at `center`.
    pub fn draw<S: RenderSink + ?Sized>(
        &self,
        sink: &mut S,
        sequence: &ShapeSequence,
        center: Vec2,
        size: Vec2,
    ) {
        sink.clear(self.background);

        let node = sequence.current();
        self.shape_renderer.draw(
            sink,
            center,
            size.x.min(size.y),
            node.state.progress(),
            self.node_color(node.index),
        );
    }
}
