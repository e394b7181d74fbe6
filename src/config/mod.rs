pub mod color;
pub mod config_load;
pub mod config_types;

pub use color::parse_hex_color;
pub use config_load::Config;
pub use config_types::{AnimationConfig, RenderConfig, StyleConfig, WindowConfig};
