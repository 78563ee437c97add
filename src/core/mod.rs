pub mod camera;
pub mod config;
pub mod constants;
pub mod controller;
pub mod material;
pub mod mesh;

pub use config::{InputSource, SceneConfig};
pub use controller::{FramePacer, ViewportController};
pub use material::{parse_hex_color, MaterialParams};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
