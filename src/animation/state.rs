// src/animation/state.rs
//
// Per-node animation state machine.
// A node sits settled at 0 or 1 and, once started, moves one full unit
// toward the other end before settling again.

/// Which way a node is currently moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Advancing,
    Retreating,
}

impl Phase {
    /// -1, 0 or 1
    pub fn sign(self) -> f32 {
        match self {
            Phase::Idle => 0.0,
            Phase::Advancing => 1.0,
            Phase::Retreating => -1.0,
        }
    }
}

/// Emitted by [`AnimationState::advance`] when a node settles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Commit {
    pub committed: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    progress: f32,
    committed: f32,
    phase: Phase,
    step: f32,
}

impl AnimationState {
    pub fn new(step: f32) -> Self {
        Self {
            progress: 0.0,
            committed: 0.0,
            phase: Phase::Idle,
            step,
        }
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn committed(&self) -> f32 {
        self.committed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Starts moving away from the settled value. Returns false and leaves
    /// the state untouched if the node is already moving.
    pub fn start_updating(&mut self) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.phase = if self.committed == 0.0 {
            Phase::Advancing
        } else {
            Phase::Retreating
        };
        true
    }

    /// One tick of progress. Returns the commit once a full unit has been
    /// traversed; the overshoot is snapped to the exact endpoint.
    pub fn advance(&mut self) -> Option<Commit> {
        if self.is_idle() {
            return None;
        }

        let direction = self.phase.sign();
        self.progress += self.step * direction;

        if (self.progress - self.committed).abs() > 1.0 {
            self.progress = self.committed + direction;
            self.committed = self.progress;
            self.phase = Phase::Idle;
            return Some(Commit {
                committed: self.committed,
            });
        }
        None
    }
}
