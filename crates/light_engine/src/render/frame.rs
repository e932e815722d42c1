//! Frame planning
//!
//! A [`FramePlan`] is everything the renderer needs to draw one frame: the
//! clear color and an ordered list of draw calls, each naming a shader
//! program, its uniform values and its texture bindings. Scenes build plans;
//! the OpenGL backend executes them.

use crate::foundation::math::{Mat4, Vec3};
use crate::render::primitives::{Camera, CUBE_VERTEX_COUNT};
use crate::render::uniforms::UniformSet;

/// Per-frame camera and clock state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameContext {
    /// World-to-view transform
    pub view: Mat4,
    /// View-to-clip transform
    pub projection: Mat4,
    /// Camera position, uploaded as `viewPos`
    pub camera_position: Vec3,
    /// Camera view direction, used to aim a flashlight
    pub camera_front: Vec3,
    /// Seconds since startup
    pub time: f32,
}

impl FrameContext {
    /// Capture the camera state for a frame
    pub fn from_camera(camera: &Camera, aspect: f32, near: f32, far: f32, time: f32) -> Self {
        Self {
            view: camera.view_matrix(),
            projection: camera.projection_matrix(aspect, near, far),
            camera_position: camera.position,
            camera_front: camera.front,
            time,
        }
    }
}

/// Shader programs the renderer knows how to build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgramKind {
    /// Solid-color Phong material lit by a single colored light
    BasicMaterial,
    /// Solid-color Phong material lit by a light with separate intensities
    PhongMaterial,
    /// Lighting-map material lit by directional, point and spot lights
    MultiLight,
    /// Unlit cube marking a light's position
    LightCube,
}

impl ProgramKind {
    /// Every program kind
    pub const ALL: [ProgramKind; 4] = [
        Self::BasicMaterial,
        Self::PhongMaterial,
        Self::MultiLight,
        Self::LightCube,
    ];

    /// Human readable name used in logs and errors
    pub fn name(self) -> &'static str {
        match self {
            Self::BasicMaterial => "basic material",
            Self::PhongMaterial => "phong material",
            Self::MultiLight => "multi light",
            Self::LightCube => "light cube",
        }
    }
}

/// Texture to bind to a texture unit before drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBinding {
    /// Texture unit index
    pub unit: u32,
    /// Texture path, relative to the configured texture directory
    pub path: String,
}

/// One cube to draw
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub program: ProgramKind,
    pub uniforms: UniformSet,
    pub textures: Vec<TextureBinding>,
    pub vertex_count: usize,
}

impl DrawCall {
    /// A cube drawn with `program` and `uniforms` and no textures
    pub fn cube(program: ProgramKind, uniforms: UniformSet) -> Self {
        Self {
            program,
            uniforms,
            textures: Vec::new(),
            vertex_count: CUBE_VERTEX_COUNT,
        }
    }

    /// Bind `path` to texture `unit`
    pub fn with_texture(mut self, unit: u32, path: impl Into<String>) -> Self {
        self.textures.push(TextureBinding {
            unit,
            path: path.into(),
        });
        self
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub clear_color: Vec3,
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    /// Draw calls using `program`
    pub fn draws_with(&self, program: ProgramKind) -> impl Iterator<Item = &DrawCall> {
        self.draws.iter().filter(move |draw| draw.program == program)
    }

    /// Every texture path the plan samples, without duplicates, in first-use
    /// order
    pub fn texture_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = Vec::new();
        for binding in self.draws.iter().flat_map(|draw| &draw.textures) {
            if !paths.contains(&binding.path.as_str()) {
                paths.push(&binding.path);
            }
        }
        paths
    }
}
