pub mod assets;
pub mod billboard;
pub mod camera;
pub mod constants;
pub mod controls;
pub mod error;
pub mod geo;
pub mod globe;
pub mod marker;
pub mod mesh;
pub mod particles;
pub mod scene;
pub mod transition;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use assets::*;
pub use billboard::*;
pub use camera::*;
pub use constants::*;
pub use controls::*;
pub use error::*;
pub use geo::*;
pub use globe::*;
pub use marker::*;
pub use mesh::*;
pub use particles::*;
pub use scene::*;
pub use transition::*;
