pub mod helpers;
pub mod renderer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use helpers::*;
pub use renderer::*;
