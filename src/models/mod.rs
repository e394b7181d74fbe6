pub mod shape_node;
pub mod shape_sequence;

pub use shape_node::{ShapeChain, ShapeNode, Sweep};
pub use shape_sequence::{Handoff, ShapeSequence};
