//! Light casters
//!
//! Each light writes its parameters under the struct name the fragment
//! shaders declare: `light`, `dirLight`, `pointLights[i]` and `spotlight`.

use serde::{Serialize, Deserialize};

use crate::foundation::math::{utils, Vec3};
use crate::render::uniforms::{field, ShaderUniforms, UniformSet};
use super::attenuation::Attenuation;

/// Maximum number of point lights the multi-light shader declares
pub const MAX_POINT_LIGHTS: usize = 4;

/// Ambient, diffuse and specular intensity of a light
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhongLight {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl PhongLight {
    /// Create a light intensity triple
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Grey intensities: `ambient`, `diffuse` and `specular` on every channel
    pub fn uniform(ambient: f32, diffuse: f32, specular: f32) -> Self {
        Self::new(
            Vec3::repeat(ambient),
            Vec3::repeat(diffuse),
            Vec3::repeat(specular),
        )
    }
}

impl ShaderUniforms for PhongLight {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "ambient"), self.ambient);
        uniforms.set(field(prefix, "diffuse"), self.diffuse);
        uniforms.set(field(prefix, "specular"), self.specular);
    }
}

/// Light with parallel rays, like sunlight
///
/// `direction` is uploaded unchanged; the shader normalizes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub phong: PhongLight,
}

impl DirectionalLight {
    /// Create a directional light
    pub fn new(direction: Vec3, phong: PhongLight) -> Self {
        Self { direction, phong }
    }
}

impl ShaderUniforms for DirectionalLight {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "direction"), self.direction);
        self.phong.write_uniforms(prefix, uniforms);
    }
}

/// Omnidirectional light that fades with distance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub phong: PhongLight,
    pub attenuation: Attenuation,
}

impl PointLight {
    /// Create a point light with the default attenuation
    pub fn new(position: Vec3, phong: PhongLight) -> Self {
        Self {
            position,
            phong,
            attenuation: Attenuation::default(),
        }
    }

    /// Colored point light: ambient and diffuse take `color`, specular is
    /// `color` brightened by 0.2 on every channel
    pub fn tinted(position: Vec3, color: Vec3) -> Self {
        Self::new(
            position,
            PhongLight::new(color, color, color.add_scalar(0.2)),
        )
    }
}

impl ShaderUniforms for PointLight {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "position"), self.position);
        self.phong.write_uniforms(prefix, uniforms);
        self.attenuation.write_uniforms(prefix, uniforms);
    }
}

impl ShaderUniforms for Attenuation {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "constant"), self.constant);
        uniforms.set(field(prefix, "linear"), self.linear);
        uniforms.set(field(prefix, "quadratic"), self.quadratic);
    }
}

/// Cone of light with a soft edge, like a flashlight
///
/// Fragments inside the inner angle receive full intensity, which fades to
/// zero at the outer angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub phong: PhongLight,
    pub inner_cutoff_degrees: f32,
    pub outer_cutoff_degrees: f32,
    pub attenuation: Attenuation,
}

impl SpotLight {
    /// Create a spotlight with the default attenuation
    pub fn new(
        position: Vec3,
        direction: Vec3,
        phong: PhongLight,
        inner_cutoff_degrees: f32,
        outer_cutoff_degrees: f32,
    ) -> Self {
        Self {
            position,
            direction,
            phong,
            inner_cutoff_degrees,
            outer_cutoff_degrees,
            attenuation: Attenuation::default(),
        }
    }

    /// Copy of this light placed at `position` and pointing along `direction`
    pub fn attached_to(&self, position: Vec3, direction: Vec3) -> Self {
        Self {
            position,
            direction,
            ..*self
        }
    }

    /// Cosine of the inner cone angle, as compared against in the shader
    pub fn cut_off(&self) -> f32 {
        utils::deg_to_rad(self.inner_cutoff_degrees).cos()
    }

    /// Cosine of the outer cone angle
    pub fn outer_cut_off(&self) -> f32 {
        utils::deg_to_rad(self.outer_cutoff_degrees).cos()
    }
}

impl ShaderUniforms for SpotLight {
    fn write_uniforms(&self, prefix: &str, uniforms: &mut UniformSet) {
        uniforms.set(field(prefix, "position"), self.position);
        uniforms.set(field(prefix, "direction"), self.direction);
        self.phong.write_uniforms(prefix, uniforms);
        uniforms.set(field(prefix, "cutOff"), self.cut_off());
        uniforms.set(field(prefix, "outerCutOff"), self.outer_cut_off());
        self.attenuation.write_uniforms(prefix, uniforms);
    }
}

/// Where a light sits over time
///
/// Without an orbit the light stays at `base`. With an orbit radius `r` the
/// light wanders around `base` along
/// `(sin t, cos(t/2) + sin(t/3), cos t) * r`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPath {
    pub base: Vec3,
    pub orbit: Option<f32>,
}

impl LightPath {
    /// A light that does not move
    pub fn fixed(base: Vec3) -> Self {
        Self { base, orbit: None }
    }

    /// A light wandering around `base` with the given radius
    pub fn orbiting(base: Vec3, radius: f32) -> Self {
        Self {
            base,
            orbit: Some(radius),
        }
    }

    /// Light position at time `t` seconds
    pub fn position_at(&self, t: f32) -> Vec3 {
        match self.orbit {
            Some(radius) => {
                let offset = Vec3::new(
                    t.sin(),
                    (t / 2.0).cos() + (t / 3.0).sin(),
                    t.cos(),
                );
                self.base + offset * radius
            }
            None => self.base,
        }
    }
}
