//! Backend-independent uniform values
//!
//! Lights, materials and cameras describe themselves as named uniform values.
//! The OpenGL backend only has to walk a [`UniformSet`] and upload each entry,
//! which keeps everything that decides *what* gets uploaded testable without a
//! GL context.

use crate::foundation::math::{Mat4, Vec3};

/// A single uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// `float`
    Float(f32),
    /// `int` or sampler unit
    Int(i32),
    /// `vec3`
    Vec3(Vec3),
    /// `mat4`
    Mat4(Mat4),
}

impl From<f32> for UniformValue {
    fn from(value: f32) -> Self {
        Self::Float(value)
    }
}

impl From<i32> for UniformValue {
    fn from(value: i32) -> Self {
        Self::Int(value)
    }
}

impl From<Vec3> for UniformValue {
    fn from(value: Vec3) -> Self {
        Self::Vec3(value)
    }
}

impl From<Mat4> for UniformValue {
    fn from(value: Mat4) -> Self {
        Self::Mat4(value)
    }
}

/// Ordered collection of named uniform values
///
/// Setting a name that is already present replaces its value but keeps its
/// first position, so upload order stays stable from frame to frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UniformSet {
    entries: Vec<(String, UniformValue)>,
}

impl UniformSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a uniform value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<UniformValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a value by name
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    /// Look up a `vec3` value by name
    pub fn get_vec3(&self, name: &str) -> Option<Vec3> {
        match self.get(name) {
            Some(UniformValue::Vec3(v)) => Some(*v),
            _ => None,
        }
    }

    /// Look up a `float` value by name
    pub fn get_float(&self, name: &str) -> Option<f32> {
        match self.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Look up a `mat4` value by name
    pub fn get_mat4(&self, name: &str) -> Option<Mat4> {
        match self.get(name) {
            Some(UniformValue::Mat4(m)) => Some(*m),
            _ => None,
        }
    }

    /// Copy every entry of `other` into this set
    pub fn extend_from(&mut self, other: &UniformSet) {
        for (name, value) in &other.entries {
            self.set(name.clone(), *value);
        }
    }

    /// Iterate over entries in upload order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &UniformValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Types that can describe themselves as shader uniforms
pub trait ShaderUniforms {
    /// Write this value's uniforms under `prefix` (for example `"material"`
    /// or `"pointLights[2]"`)
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet);
}

/// Name of a struct member uniform: `field("material", "ambient")` is
/// `"material.ambient"`
pub fn field(prefix: &str, name: &str) -> String {
    format!("{}.{}", prefix, name)
}

/// Name of an array element uniform: `indexed("pointLights", 2)` is
/// `"pointLights[2]"`
pub fn indexed(array: &str, index: usize) -> String {
    format!("{}[{}]", array, index)
}
