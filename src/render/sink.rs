// src/render/sink.rs
//
// The drawing surface the renderers talk to.
// Transforms are scoped: every `save` is matched by a `restore`.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

pub trait RenderSink {
    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Rgb);

    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);

    fn set_stroke(&mut self, color: Rgb, weight: f32, cap: LineCap);
    fn set_fill(&mut self, color: Rgb);

    /// Outlines an axis-aligned rectangle centered at `center` in the
    /// current transform.
    fn stroke_rect(&mut self, center: Vec2, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
}
