// src/models/shape_sequence.rs
//
// Tracks which node of the chain is active and hands the animation on to the
// neighbor each time the active node settles. The sweep reverses at either
// end, so the active node moves back and forth rather than wrapping.

use super::shape_node::{ShapeChain, ShapeNode, Sweep};
use crate::error::SceneError;

/// Produced by [`ShapeSequence::update`] when the active node commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handoff {
    pub committed_node: usize,
    pub committed: f32,
    pub next_node: usize,
    pub reversed: bool,
}

#[derive(Debug, Clone)]
pub struct ShapeSequence {
    chain: ShapeChain,
    current: usize,
    direction: Sweep,
}

impl ShapeSequence {
    pub fn new(len: usize, step: f32) -> Result<Self, SceneError> {
        Ok(Self::from_chain(ShapeChain::new(len, step)?))
    }

    pub fn from_chain(chain: ShapeChain) -> Self {
        Self {
            chain,
            current: 0,
            direction: Sweep::Forward,
        }
    }

    pub fn chain(&self) -> &ShapeChain {
        &self.chain
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &ShapeNode {
        // `current` only ever holds indices handed out by the chain itself
        &self.chain[self.current]
    }

    pub fn direction(&self) -> Sweep {
        self.direction
    }

    pub fn is_animating(&self) -> bool {
        !self.current().state.is_idle()
    }

    /// Starts the active node if it is idle. Returns whether it started.
    pub fn start_updating(&mut self) -> bool {
        let index = self.current;
        let started = self.current_mut().state.start_updating();
        if started {
            tracing::info!(
                "node {} started ({:?})",
                index,
                self.current().state.phase()
            );
        }
        started
    }

    /// Advances the active node by one tick. On commit, moves on to the
    /// neighbor in the sweep direction, reversing the sweep at a chain end.
    pub fn update(&mut self) -> Option<Handoff> {
        let commit = self.current_mut().state.advance()?;
        let committed_node = self.current;

        let mut reversed = false;
        let next_node = self.current().get_next(self.direction, || reversed = true);
        if reversed {
            self.direction = self.direction.flipped();
            tracing::info!(
                "sweep reversed at node {}, now {:?}",
                committed_node,
                self.direction
            );
        }
        self.current = next_node;

        tracing::debug!(
            "node {} committed at {}, next node {}",
            committed_node,
            commit.committed,
            next_node
        );

        Some(Handoff {
            committed_node,
            committed: commit.committed,
            next_node,
            reversed,
        })
    }

    fn current_mut(&mut self) -> &mut ShapeNode {
        &mut self.chain[self.current]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: f32 = 0.005;

    /// Taps once and ticks until the active node hands off.
    fn play_one(sequence: &mut ShapeSequence) -> (usize, Handoff) {
        assert!(sequence.start_updating());
        for ticks in 1..=10_000 {
            if let Some(handoff) = sequence.update() {
                return (ticks, handoff);
            }
        }
        panic!("sequence never handed off");
    }

    #[test]
    fn test_starts_forward_at_first_node() {
        let sequence = ShapeSequence::new(5, STEP).unwrap();
        assert_eq!(sequence.current_index(), 0);
        assert_eq!(sequence.direction(), Sweep::Forward);
        assert!(!sequence.is_animating());
    }

    #[test]
    fn test_update_while_idle_is_noop() {
        let mut sequence = ShapeSequence::new(5, STEP).unwrap();
        assert_eq!(sequence.update(), None);
        assert_eq!(sequence.current_index(), 0);
        assert_eq!(sequence.current().state.progress(), 0.0);
    }

    #[test]
    fn test_first_handoff() {
        let mut sequence = ShapeSequence::new(5, STEP).unwrap();
        let (ticks, handoff) = play_one(&mut sequence);

        assert!((200..=202).contains(&ticks), "took {} ticks", ticks);
        assert_eq!(
            handoff,
            Handoff {
                committed_node: 0,
                committed: 1.0,
                next_node: 1,
                reversed: false,
            }
        );
        assert_eq!(sequence.current_index(), 1);
        assert_eq!(sequence.chain()[0].state.committed(), 1.0);
        assert!(sequence.chain()[0].state.is_idle());
    }

    #[test]
    fn test_tap_during_animation_ignored() {
        let mut sequence = ShapeSequence::new(5, STEP).unwrap();
        assert!(sequence.start_updating());
        sequence.update();
        assert!(sequence.is_animating());
        assert!(!sequence.start_updating());
        assert_eq!(sequence.current_index(), 0);
    }

    #[test]
    fn test_sweep_reverses_at_last_node() {
        let mut sequence = ShapeSequence::new(5, STEP).unwrap();
        for expected in 0..4 {
            let (_, handoff) = play_one(&mut sequence);
            assert_eq!(handoff.committed_node, expected);
            assert!(!handoff.reversed);
        }
        assert_eq!(sequence.current_index(), 4);

        // last node fills, bounces and stays active
        let (_, handoff) = play_one(&mut sequence);
        assert_eq!(handoff.committed_node, 4);
        assert_eq!(handoff.committed, 1.0);
        assert_eq!(handoff.next_node, 4);
        assert!(handoff.reversed);
        assert_eq!(sequence.direction(), Sweep::Backward);

        // next tap drives the last node back toward 0
        assert!(sequence.start_updating());
        assert_eq!(
            sequence.current().state.phase(),
            crate::animation::Phase::Retreating
        );
        sequence.update();
        assert!(sequence.current().state.progress() < 1.0);
    }

    #[test]
    fn test_full_sweep_back_and_forth() {
        let mut sequence = ShapeSequence::new(5, STEP).unwrap();
        let visited: Vec<(usize, f32)> = (0..12)
            .map(|_| {
                let (_, h) = play_one(&mut sequence);
                (h.committed_node, h.committed)
            })
            .collect();

        assert_eq!(
            visited,
            vec![
                (0, 1.0),
                (1, 1.0),
                (2, 1.0),
                (3, 1.0),
                (4, 1.0),
                (4, 0.0),
                (3, 0.0),
                (2, 0.0),
                (1, 0.0),
                (0, 0.0),
                (0, 1.0),
                (1, 1.0),
            ]
        );
        assert_eq!(sequence.direction(), Sweep::Forward);
        assert_eq!(sequence.current_index(), 2);
    }

    #[test]
    fn test_at_most_one_node_moving() {
        let mut sequence = ShapeSequence::new(3, 0.1).unwrap();
        for _ in 0..7 {
            sequence.start_updating();
            loop {
                let moving = sequence
                    .chain()
                    .iter()
                    .filter(|n| !n.state.is_idle())
                    .count();
                assert!(moving <= 1);
                if sequence.update().is_some() {
                    break;
                }
            }
        }
    }

    #[test]
    fn test_single_node_chain() {
        let mut sequence = ShapeSequence::new(1, 0.25).unwrap();
        let (_, first) = play_one(&mut sequence);
        assert!(first.reversed);
        assert_eq!(sequence.direction(), Sweep::Backward);
        let (_, second) = play_one(&mut sequence);
        assert_eq!(second.committed, 0.0);
        assert!(second.reversed);
        assert_eq!(sequence.direction(), Sweep::Forward);
        assert_eq!(sequence.current_index(), 0);
    }
}
