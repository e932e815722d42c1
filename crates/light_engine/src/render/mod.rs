//! Rendering
//!
//! Everything that decides what to draw (uniforms, materials, lights, camera,
//! frame plans) is backend-independent. The OpenGL backend under
//! [`backends::opengl`] executes frame plans.

pub mod backends;
pub mod frame;
pub mod lighting;
pub mod material;
pub mod primitives;
pub mod shaders;
pub mod uniforms;
pub mod window;

pub use backends::opengl::{GlRenderer, ShaderError};
pub use frame::{DrawCall, FrameContext, FramePlan, ProgramKind, TextureBinding};
pub use primitives::{Camera, CameraMovement, Mesh, Vertex};
pub use uniforms::{ShaderUniforms, UniformSet, UniformValue};
pub use window::{Window, WindowError};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Shader compile or link failure
    #[error("Shader error: {0}")]
    Shader(#[from] ShaderError),

    /// Shader source could not be read
    #[error("Failed to read shader source: {0}")]
    ShaderSource(String),

    /// Draw call refers to a program that was not built
    #[error("No {0} program available")]
    MissingProgram(&'static str),

    /// OpenGL reported an error
    #[error("OpenGL error 0x{0:04X}")]
    Gl(u32),
}
