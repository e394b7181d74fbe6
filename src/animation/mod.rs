pub mod scale_math;
pub mod state;
pub mod ticker;

pub use scale_math::{divide_scale, max_scale, sinify};
pub use state::{AnimationState, Commit, Phase};
pub use ticker::Ticker;
