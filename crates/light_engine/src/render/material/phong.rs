//! Phong material parameters

use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec3;
use crate::render::uniforms::{field, ShaderUniforms, UniformSet};

/// Multiplier turning a reference-table shininess coefficient into a
/// specular exponent
pub const SHININESS_SCALE: f32 = 128.0;

/// Classic Phong material with per-channel reflectance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhongMaterial {
    /// Reflectance under ambient light
    pub ambient: Vec3,
    /// Reflectance under diffuse light
    pub diffuse: Vec3,
    /// Color of the specular highlight
    pub specular: Vec3,
    /// Specular exponent, uploaded as-is
    pub shininess: f32,
}

impl PhongMaterial {
    /// Create a material from colors and a specular exponent
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Create a material from a reference table entry
    ///
    /// Reference tables give shininess as a fraction of 128; the resulting
    /// material stores the full exponent.
    pub fn from_reference(ambient: [f32; 3], diffuse: [f32; 3], specular: [f32; 3], coefficient: f32) -> Self {
        Self {
            ambient: Vec3::from(ambient),
            diffuse: Vec3::from(diffuse),
            specular: Vec3::from(specular),
            shininess: coefficient * SHININESS_SCALE,
        }
    }

    /// The coral "tutorial" material: orange ambient and diffuse, half-grey
    /// specular, exponent 32
    pub fn tutorial() -> Self {
        Self::new(
            Vec3::new(1.0, 0.5, 0.31),
            Vec3::new(1.0, 0.5, 0.31),
            Vec3::new(0.5, 0.5, 0.5),
            32.0,
        )
    }
}

impl ShaderUniforms for PhongMaterial {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "ambient"), self.ambient);
        uniforms.set(field(prefix, "diffuse"), self.diffuse);
        uniforms.set(field(prefix, "specular"), self.specular);
        uniforms.set(field(prefix, "shininess"), self.shininess);
    }
}

/// Texture unit sampled for the diffuse map
pub const DIFFUSE_MAP_UNIT: u32 = 0;
/// Texture unit sampled for the specular map
pub const SPECULAR_MAP_UNIT: u32 = 1;

/// Lighting-map material: diffuse and specular colors come from textures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TexturedMaterial {
    /// Diffuse map path, relative to the texture directory
    pub diffuse_map: String,
    /// Specular map path, relative to the texture directory
    pub specular_map: String,
    /// Specular exponent, uploaded as-is
    pub shininess: f32,
}

impl TexturedMaterial {
    /// Create a lighting-map material
    pub fn new(diffuse_map: impl Into<String>, specular_map: impl Into<String>, shininess: f32) -> Self {
        Self {
            diffuse_map: diffuse_map.into(),
            specular_map: specular_map.into(),
            shininess,
        }
    }

    /// The wooden container with a steel rim used by the light caster demo
    pub fn container() -> Self {
        Self::new("container2.png", "container2_specular.png", 2.0)
    }
}

impl ShaderUniforms for TexturedMaterial {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "diffuse"), DIFFUSE_MAP_UNIT as i32);
        uniforms.set(field(prefix, "specular"), SPECULAR_MAP_UNIT as i32);
        uniforms.set(field(prefix, "shininess"), self.shininess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::uniforms::UniformValue;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_coefficient_is_scaled() {
        let material = PhongMaterial::from_reference([0.1; 3], [0.2; 3], [0.3; 3], 0.6);
        assert_relative_eq!(material.shininess, 76.8, epsilon = 1e-4);
        assert_eq!(material.ambient, Vec3::new(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_tutorial_exponent_is_not_scaled() {
        let mut uniforms = UniformSet::new();
        PhongMaterial::tutorial().write_uniforms("material", &mut uniforms);

        assert_eq!(uniforms.get_float("material.shininess"), Some(32.0));
        assert_eq!(uniforms.get_vec3("material.diffuse"), Some(Vec3::new(1.0, 0.5, 0.31)));
        assert_eq!(uniforms.len(), 4);
    }

    #[test]
    fn test_textured_material_binds_units() {
        let mut uniforms = UniformSet::new();
        TexturedMaterial::container().write_uniforms("material", &mut uniforms);

        assert_eq!(uniforms.get("material.diffuse"), Some(&UniformValue::Int(0)));
        assert_eq!(uniforms.get("material.specular"), Some(&UniformValue::Int(1)));
        assert_eq!(uniforms.get_float("material.shininess"), Some(2.0));
    }
}
