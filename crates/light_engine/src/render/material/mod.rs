//! Material system
//!
//! Phong materials with solid colors, the reference material table, and
//! lighting-map materials sampled from textures.

pub mod phong;
pub mod presets;

// Re-export commonly used types
pub use phong::{PhongMaterial, TexturedMaterial, SHININESS_SCALE, DIFFUSE_MAP_UNIT, SPECULAR_MAP_UNIT};
pub use presets::{MaterialPreset, UnknownPreset};
