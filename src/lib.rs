pub mod drawing;
pub mod frame_processing;
pub mod geometry_utils;
pub mod landmarks;
pub mod session_config;
pub mod systems;
pub mod wire;

pub type Point2D = (f32, f32);
pub type Point3D = (f32, f32, f32);
