pub mod animator;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod easing;
pub mod frame;
pub mod mesh;
pub mod orbit;
pub mod pick;
pub mod pointer;
pub mod ray;
pub mod scene;
pub mod setup;

pub use animator::*;
pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use controls::*;
pub use easing::*;
pub use frame::*;
pub use mesh::*;
pub use pick::*;
pub use pointer::*;
pub use ray::*;
pub use scene::*;
pub use setup::*;
