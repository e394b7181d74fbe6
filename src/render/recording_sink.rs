// src/render/recording_sink.rs
//
// RenderSink that records calls, for renderer tests

use nannou::prelude::*;

use super::sink::{LineCap, RenderSink};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgb),
    Save,
    Restore,
    Translate(Vec2),
    Rotate(f32),
    Stroke(Rgb, f32, LineCap),
    Fill(Rgb),
    StrokeRect(Vec2, Vec2),
    FillCircle(Vec2, f32),
}

#[derive(Debug, Default)]
pub struct RecordingSink {
    pub calls: Vec<DrawCall>,
}

impl RecordingSink {
    /// Maximum save depth reached and the depth left open at the end.
    pub fn transform_depth(&self) -> (usize, isize) {
        let mut depth: isize = 0;
        let mut max = 0;
        for call in &self.calls {
            match call {
                DrawCall::Save => depth += 1,
                DrawCall::Restore => depth -= 1,
                _ => {}
            }
            max = max.max(depth.max(0) as usize);
        }
        (max, depth)
    }

    pub fn rects(&self) -> Vec<(Vec2, Vec2)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokeRect(center, size) => Some((*center, *size)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillCircle(center, radius) => Some((*center, *radius)),
                _ => None,
            })
            .collect()
    }

    pub fn rotations(&self) -> Vec<f32> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Rotate(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl RenderSink for RecordingSink {
    fn clear(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn save(&mut self) {
        self.calls.push(DrawCall::Save);
    }

    fn restore(&mut self) {
        self.calls.push(DrawCall::Restore);
    }

    fn translate(&mut self, offset: Vec2) {
        self.calls.push(DrawCall::Translate(offset));
    }

    fn rotate(&mut self, radians: f32) {
        self.calls.push(DrawCall::Rotate(radians));
    }

    fn set_stroke(&mut self, color: Rgb, weight: f32, cap: LineCap) {
        self.calls.push(DrawCall::Stroke(color, weight, cap));
    }

    fn set_fill(&mut self, color: Rgb) {
        self.calls.push(DrawCall::Fill(color));
    }

    fn stroke_rect(&mut self, center: Vec2, size: Vec2) {
        self.calls.push(DrawCall::StrokeRect(center, size));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(DrawCall::FillCircle(center, radius));
    }
}
