//! OpenGL backend
//!
//! Builds one program per [`ProgramKind`], uploads the cube once and
//! executes [`FramePlan`]s. Requires a current GL context with loaded
//! function pointers (see [`Window::new`](crate::render::Window::new)).

pub mod buffer;
pub mod shader;
pub mod texture;

pub use buffer::CubeGeometry;
pub use shader::{ShaderError, ShaderProgram};
pub use texture::Texture2D;

use std::collections::HashMap;

use crate::assets::ImageData;
use crate::config::{AssetConfig, ShaderConfig};
use crate::render::frame::{FramePlan, ProgramKind};
use crate::render::primitives::Mesh;
use crate::render::shaders::program_sources;
use crate::render::RenderError;

/// Executes frame plans with OpenGL
pub struct GlRenderer {
    programs: HashMap<ProgramKind, ShaderProgram>,
    geometry: CubeGeometry,
    textures: HashMap<String, Texture2D>,
    assets: AssetConfig,
}

impl GlRenderer {
    /// Build every program and upload the cube
    pub fn new(shaders: &ShaderConfig, assets: &AssetConfig) -> Result<Self, RenderError> {
        let mut programs = HashMap::new();
        for kind in ProgramKind::ALL {
            let (vertex, fragment) = program_sources(kind, shaders)?;
            let program = ShaderProgram::new(&vertex, &fragment).map_err(|e| {
                log::error!("Failed to build {} program: {}", kind.name(), e);
                e
            })?;
            programs.insert(kind, program);
        }

        let geometry = CubeGeometry::new(&Mesh::cube());

        unsafe { gl::Enable(gl::DEPTH_TEST) };
        check_error()?;

        log::info!("OpenGL renderer ready with {} programs", programs.len());

        Ok(Self {
            programs,
            geometry,
            textures: HashMap::new(),
            assets: assets.clone(),
        })
    }

    /// Set the viewport to the framebuffer size
    pub fn resize(&mut self, width: u32, height: u32) {
        unsafe { gl::Viewport(0, 0, width as i32, height as i32) };
    }

    /// Upload the textures a plan needs ahead of drawing
    ///
    /// Missing or unreadable files become a checkerboard so a bad path is
    /// visible on screen rather than fatal.
    pub fn preload(&mut self, plan: &FramePlan) {
        for path in plan.texture_paths() {
            self.texture(path);
        }
    }

    /// Clear and draw every call in the plan
    pub fn render(&mut self, plan: &FramePlan) -> Result<(), RenderError> {
        self.preload(plan);

        unsafe {
            gl::ClearColor(plan.clear_color.x, plan.clear_color.y, plan.clear_color.z, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }

        for draw in &plan.draws {
            let program = self
                .programs
                .get(&draw.program)
                .ok_or(RenderError::MissingProgram(draw.program.name()))?;
            program.bind();

            for binding in &draw.textures {
                if let Some(texture) = self.textures.get(&binding.path) {
                    texture.bind(binding.unit);
                }
            }

            program.apply(&draw.uniforms);
            self.geometry.draw(draw.vertex_count);
        }

        check_error()
    }

    fn texture(&mut self, path: &str) -> &Texture2D {
        let assets = &self.assets;
        self.textures.entry(path.to_string()).or_insert_with(|| {
            let resolved = assets.resolve_texture(path);
            let image = ImageData::from_file_or_checkerboard(&resolved);
            log::info!("Loaded texture {} ({}x{})", resolved.display(), image.width, image.height);
            Texture2D::from_image(image)
        })
    }
}

fn check_error() -> Result<(), RenderError> {
    let error = unsafe { gl::GetError() };
    if error == gl::NO_ERROR {
        Ok(())
    } else {
        Err(RenderError::Gl(error))
    }
}
