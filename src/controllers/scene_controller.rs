// src/controllers/scene_controller.rs
//
// SceneController couples the ShapeSequence with its Ticker.
// It is the only thing the host talks to: taps come in through `on_tap`,
// frame time through `update`, and redraw requests go out through the
// callback passed to `update`.

use crate::animation::Ticker;
use crate::config::Config;
use crate::error::SceneError;
use crate::models::{Handoff, ShapeSequence};
use std::time::Duration;

pub struct SceneController {
    sequence: ShapeSequence,
    ticker: Ticker,
}

impl SceneController {
    pub fn new(sequence: ShapeSequence, interval: Duration) -> Self {
        Self {
            sequence,
            ticker: Ticker::new(interval),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, SceneError> {
        let sequence = ShapeSequence::new(config.style.palette.len(), config.animation.step)?;
        Ok(Self::new(sequence, config.animation.interval()))
    }

    pub fn sequence(&self) -> &ShapeSequence {
        &self.sequence
    }

    pub fn is_animating(&self) -> bool {
        self.ticker.is_running()
    }

    /// Starts the active node and the ticker. Taps while a node is still
    /// moving are ignored and return false.
    pub fn on_tap(&mut self) -> bool {
        if !self.sequence.start_updating() {
            tracing::debug!(
                "tap ignored, node {} still moving",
                self.sequence.current_index()
            );
            return false;
        }
        self.ticker.start();
        true
    }

    /// Feeds `dt` seconds of frame time. Each due tick requests one redraw and
    /// advances the sequence; the tick that commits stops the ticker and
    /// requests one more redraw.
    pub fn update<F>(&mut self, dt: f32, mut redraw: F) -> Option<Handoff>
    where
        F: FnMut(&ShapeSequence),
    {
        let due = self.ticker.advance(dt);
        let mut handoff = None;

        for _ in 0..due {
            if !self.ticker.is_running() {
                break;
            }
            redraw(&self.sequence);
            tracing::trace!(
                "tick node {} progress {:.3}",
                self.sequence.current_index(),
                self.sequence.current().state.progress()
            );

            if let Some(done) = self.sequence.update() {
                self.ticker.stop();
                redraw(&self.sequence);
                handoff = Some(done);
            }
        }
        handoff
    }
}
