//! Core primitive types for rendering
//!
//! The fly camera and the cube mesh every demo draws.

pub mod camera;
pub mod mesh;

// Re-export commonly used types
pub use camera::{Camera, CameraMovement};
pub use mesh::{Mesh, Vertex, CUBE_VERTEX_COUNT};
