// src/render/mod.rs
// The shape rendering module

pub mod draw_sink;
pub mod scene_renderer;
pub mod shape_renderer;
pub mod sink;

#[cfg(test)]
pub(crate) mod recording_sink;

pub use draw_sink::DrawSink;
pub use scene_renderer::SceneRenderer;
pub use shape_renderer::{ShapeRenderer, ShapeStyle};
pub use sink::{LineCap, RenderSink};
