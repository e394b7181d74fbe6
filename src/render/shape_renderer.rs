// src/render/shape_renderer.rs
//
// Draws one square+circle shape for a given progress value.
// The eased progress is split into `parts` sequential phases:
//   phase 0         square grows
//   phase 1         circles slide out from the center
//   phase 2         circles grow
//   last phase      square and circles rotate

use nannou::prelude::*;

use super::sink::{LineCap, RenderSink};
use crate::animation::{divide_scale, sinify};
use crate::config::{AnimationConfig, StyleConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub parts: usize,
    pub size_factor: f32,
    pub stroke_factor: f32,
    pub rotation: f32, // radians
}

impl ShapeStyle {
    pub fn from_config(style: &StyleConfig, animation: &AnimationConfig) -> Self {
        Self {
            parts: animation.parts.max(1),
            size_factor: style.size_factor,
            stroke_factor: style.stroke_factor,
            rotation: style.rotation_degrees.to_radians(),
        }
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default(), &AnimationConfig::default())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShapeRenderer {
    style: ShapeStyle,
}

impl ShapeRenderer {
    pub fn new(style: ShapeStyle) -> Self {
        Self { style }
    }

    /// Sub-progress of phase `k` for a raw progress value. Phases past the
    /// last one collapse onto it, so fewer than four parts still animate.
    pub fn phase(&self, progress: f32, k: usize) -> f32 {
        let n = self.style.parts.max(1);
        divide_scale(sinify(progress), k.min(n - 1), n)
    }

    /// Draws the shape centered at `center`. `extent` is the smaller side of
    /// the drawing surface. Leaves the sink's transform as it found it.
    pub fn draw<S: RenderSink + ?Sized>(
        &self,
        sink: &mut S,
        center: Vec2,
        extent: f32,
        progress: f32,
        color: Rgb,
    ) {
        let last = self.style.parts.max(1) - 1;
        let grow = self.phase(progress, 0);
        let slide = self.phase(progress, 1);
        let swell = self.phase(progress, 2);
        let spin = self.phase(progress, last);

        let half_size = extent / self.style.size_factor / 2.0;
        let stroke_weight = extent / self.style.stroke_factor;

        sink.save();
        sink.translate(center);
        sink.rotate(self.style.rotation * spin);
        sink.set_stroke(color, stroke_weight, LineCap::Round);
        sink.set_fill(color);

        if grow > 0.0 {
            let side = 2.0 * half_size * grow;
            sink.stroke_rect(Vec2::ZERO, vec2(side, side));
        }

        let radius = half_size / 4.0 * swell;
        if radius > 0.0 {
            for j in 0..2 {
                let sign = 1.0 - 2.0 * j as f32;
                let x = sign * half_size / 2.0 * slide;
                sink.fill_circle(vec2(x, 0.0), radius);
            }
        }

        sink.restore();
    }
}
