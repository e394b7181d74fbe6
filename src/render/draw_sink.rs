// src/render/draw_sink.rs
//
// RenderSink backed by a nannou Draw.
// nannou transforms are immutable Draw handles, so save/restore keeps a stack
// of them and translate/rotate replace the top entry.

use nannou::prelude::*;

use super::sink::{LineCap, RenderSink};

pub struct DrawSink {
    stack: Vec<Draw>,
    stroke_color: Rgb,
    stroke_weight: f32,
    cap: LineCap,
    fill_color: Rgb,
}

impl DrawSink {
    pub fn new(draw: &Draw) -> Self {
        Self {
            stack: vec![draw.clone()],
            stroke_color: rgb(0.0, 0.0, 0.0),
            stroke_weight: 1.0,
            cap: LineCap::Butt,
            fill_color: rgb(0.0, 0.0, 0.0),
        }
    }

    pub fn depth(&self) -> usize {
        self.stack.len() - 1
    }

    fn top(&self) -> &Draw {
        // the base handle is never popped
        &self.stack[self.stack.len() - 1]
    }

    fn replace_top(&mut self, draw: Draw) {
        if let Some(top) = self.stack.last_mut() {
            *top = draw;
        }
    }
}

impl RenderSink for DrawSink {
    fn clear(&mut self, color: Rgb) {
        self.top().background().color(color);
    }

    fn save(&mut self) {
        let top = self.top().clone();
        self.stack.push(top);
    }

    fn restore(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            tracing::warn!("restore without matching save ignored");
        }
    }

    fn translate(&mut self, offset: Vec2) {
        let moved = self.top().xy(offset);
        self.replace_top(moved);
    }

    fn rotate(&mut self, radians: f32) {
        let rotated = self.top().rotate(radians);
        self.replace_top(rotated);
    }

    fn set_stroke(&mut self, color: Rgb, weight: f32, cap: LineCap) {
        self.stroke_color = color;
        self.stroke_weight = weight;
        self.cap = cap;
    }

    fn set_fill(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    fn stroke_rect(&mut self, center: Vec2, size: Vec2) {
        let rect = self
            .top()
            .rect()
            .xy(center)
            .wh(size)
            .no_fill()
            .stroke(self.stroke_color)
            .stroke_weight(self.stroke_weight);
        match self.cap {
            LineCap::Butt => rect.caps_butt(),
            LineCap::Round => rect.caps_round(),
            LineCap::Square => rect.caps_square(),
        };
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.top()
            .ellipse()
            .xy(center)
            .radius(radius)
            .color(self.fill_color);
    }
}
