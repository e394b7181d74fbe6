pub mod scene_controller;

pub use scene_controller::SceneController;
