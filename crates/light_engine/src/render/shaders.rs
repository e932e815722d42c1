//! GLSL sources
//!
//! Every program's sources are compiled into the binary. A shader directory
//! in [`ShaderConfig`] can override them file by file.

use crate::config::ShaderConfig;
use crate::render::frame::ProgramKind;
use crate::render::RenderError;

/// A GLSL source file compiled into the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedShader {
    /// File name, also used to look up overrides
    pub file_name: &'static str,
    /// Built-in source text
    pub source: &'static str,
}

macro_rules! embedded {
    ($file:literal) => {
        EmbeddedShader {
            file_name: $file,
            source: include_str!(concat!("../../shaders/", $file)),
        }
    };
}

const LIT_VERT: EmbeddedShader = embedded!("lit.vert");
const BASIC_MATERIAL_FRAG: EmbeddedShader = embedded!("basic_material.frag");
const PHONG_MATERIAL_FRAG: EmbeddedShader = embedded!("phong_material.frag");
const MULTI_LIGHT_FRAG: EmbeddedShader = embedded!("multi_light.frag");
const LIGHT_CUBE_VERT: EmbeddedShader = embedded!("light_cube.vert");
const LIGHT_CUBE_FRAG: EmbeddedShader = embedded!("light_cube.frag");

/// Vertex and fragment shader files of a program
pub fn program_files(kind: ProgramKind) -> (EmbeddedShader, EmbeddedShader) {
    match kind {
        ProgramKind::BasicMaterial => (LIT_VERT, BASIC_MATERIAL_FRAG),
        ProgramKind::PhongMaterial => (LIT_VERT, PHONG_MATERIAL_FRAG),
        ProgramKind::MultiLight => (LIT_VERT, MULTI_LIGHT_FRAG),
        ProgramKind::LightCube => (LIGHT_CUBE_VERT, LIGHT_CUBE_FRAG),
    }
}

/// Source text for `shader`, from the override directory when it has the file
pub fn load_source(shader: EmbeddedShader, config: &ShaderConfig) -> Result<String, RenderError> {
    match config.override_path(shader.file_name) {
        Some(path) => {
            log::info!("Using shader override {}", path.display());
            std::fs::read_to_string(&path)
                .map_err(|e| RenderError::ShaderSource(format!("{}: {}", path.display(), e)))
        }
        None => Ok(shader.source.to_string()),
    }
}

/// Vertex and fragment source text of a program
pub fn program_sources(kind: ProgramKind, config: &ShaderConfig) -> Result<(String, String), RenderError> {
    let (vertex, fragment) = program_files(kind);
    Ok((load_source(vertex, config)?, load_source(fragment, config)?))
}
