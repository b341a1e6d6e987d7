pub mod blow;
pub mod camera;
pub mod confetti;
pub mod constants;
pub mod flame;
pub mod geometry;
pub mod greeting;
pub mod scene;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
