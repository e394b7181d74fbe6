// src/models/shape_node.rs
//
// The fixed chain of shape nodes.
// Nodes live in one Vec owned by the chain; neighbor links are plain indices.

use std::ops::{Index, IndexMut};

use crate::animation::AnimationState;
use crate::error::SceneError;

/// Direction of travel along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    Forward,
    Backward,
}

impl Sweep {
    pub fn flipped(self) -> Self {
        match self {
            Sweep::Forward => Sweep::Backward,
            Sweep::Backward => Sweep::Forward,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShapeNode {
    pub index: usize,
    pub state: AnimationState,
    prev: Option<usize>,
    next: Option<usize>,
}

impl ShapeNode {
    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    /// Index of the neighbor in `direction`. At either end of the chain
    /// `on_boundary` is called once and the node's own index is returned.
    pub fn get_next(&self, direction: Sweep, on_boundary: impl FnOnce()) -> usize {
        let neighbor = match direction {
            Sweep::Forward => self.next,
            Sweep::Backward => self.prev,
        };
        match neighbor {
            Some(index) => index,
            None => {
                on_boundary();
                self.index
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ShapeChain {
    nodes: Vec<ShapeNode>,
}

impl ShapeChain {
    /// Builds `len` linked nodes, each advancing by `step` per tick.
    pub fn new(len: usize, step: f32) -> Result<Self, SceneError> {
        if len == 0 {
            return Err(SceneError::EmptyChain);
        }
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(SceneError::InvalidStep(step));
        }

        let nodes = (0..len)
            .map(|index| ShapeNode {
                index,
                state: AnimationState::new(step),
                prev: index.checked_sub(1),
                next: (index + 1 < len).then_some(index + 1),
            })
            .collect();

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&ShapeNode> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShapeNode> {
        self.nodes.iter()
    }
}

impl Index<usize> for ShapeChain {
    type Output = ShapeNode;

    fn index(&self, index: usize) -> &ShapeNode {
        &self.nodes[index]
    }
}

impl IndexMut<usize> for ShapeChain {
    fn index_mut(&mut self, index: usize) -> &mut ShapeNode {
        &mut self.nodes[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_links() {
        let chain = ShapeChain::new(5, 0.005).unwrap();
        assert_eq!(chain.len(), 5);

        let first = chain.node(0).unwrap();
        assert_eq!(first.prev(), None);
        assert_eq!(first.next(), Some(1));

        let middle = chain.node(2).unwrap();
        assert_eq!(middle.prev(), Some(1));
        assert_eq!(middle.next(), Some(3));

        let last = chain.node(4).unwrap();
        assert_eq!(last.prev(), Some(3));
        assert_eq!(last.next(), None);

        for (i, node) in chain.iter().enumerate() {
            assert_eq!(node.index, i);
            assert!(node.state.is_idle());
        }
    }

    #[test]
    fn test_get_next_inside_chain() {
        let chain = ShapeChain::new(5, 0.005).unwrap();
        let node = chain.node(2).unwrap();
        let mut bounced = false;
        assert_eq!(node.get_next(Sweep::Forward, || bounced = true), 3);
        assert_eq!(node.get_next(Sweep::Backward, || bounced = true), 1);
        assert!(!bounced);
    }

    #[test]
    fn test_boundary_at_start() {
        let chain = ShapeChain::new(5, 0.005).unwrap();
        let mut calls = 0;
        let next = chain
            .node(0)
            .unwrap()
            .get_next(Sweep::Backward, || calls += 1);
        assert_eq!(next, 0);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_boundary_at_end() {
        let chain = ShapeChain::new(5, 0.005).unwrap();
        let mut calls = 0;
        let next = chain.node(4).unwrap().get_next(Sweep::Forward, || calls += 1);
        assert_eq!(next, 4);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_single_node_bounces_both_ways() {
        let chain = ShapeChain::new(1, 0.5).unwrap();
        let node = chain.node(0).unwrap();
        let mut calls = 0;
        assert_eq!(node.get_next(Sweep::Forward, || calls += 1), 0);
        assert_eq!(node.get_next(Sweep::Backward, || calls += 1), 0);
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(ShapeChain::new(0, 0.005).unwrap_err(), SceneError::EmptyChain);
        assert_eq!(
            ShapeChain::new(3, 0.0).unwrap_err(),
            SceneError::InvalidStep(0.0)
        );
        assert!(matches!(
            ShapeChain::new(3, f32::NAN),
            Err(SceneError::InvalidStep(_))
        ));
    }
}
