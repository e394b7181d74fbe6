// src/animation/scale_math.rs
//
// Phase math for splitting one progress value into sequential sub-progresses

use std::f32::consts::PI;

/// Contribution of phase `i` out of `n` equal phases, before clamping to the
/// phase width. Zero until the phase begins.
pub fn max_scale(scale: f32, i: usize, n: usize) -> f32 {
    (scale - i as f32 / n as f32).max(0.0)
}

/// Sub-progress of phase `i` out of `n`, rescaled to [0, 1]. Holds at 0 until
/// phase `i` begins and at 1 once it has filled.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    max_scale(scale, i, n).min(1.0 / n as f32) * n as f32
}

/// Half-sine bump: 0 at both ends, 1 at the midpoint.
pub fn sinify(scale: f32) -> f32 {
    (scale * PI).sin()
}
