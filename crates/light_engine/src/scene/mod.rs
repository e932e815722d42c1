//! Scenes
//!
//! A scene is a flat list of cubes and the lights that illuminate them.
//! [`Scene::plan_frame`] turns a scene and the current camera into a
//! [`FramePlan`] without touching the GPU, so everything that decides what
//! each shader sees can be tested directly.

pub mod demos;

use serde::{Serialize, Deserialize};

use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};
use crate::render::frame::{DrawCall, FrameContext, FramePlan, ProgramKind};
use crate::render::lighting::{
    DirectionalLight, LightPath, PhongLight, PointLight, SpotLight, MAX_POINT_LIGHTS,
};
use crate::render::material::{PhongMaterial, TexturedMaterial, DIFFUSE_MAP_UNIT, SPECULAR_MAP_UNIT};
use crate::render::uniforms::{indexed, ShaderUniforms, UniformSet};

/// Scale of the small cubes drawn at light positions
pub const LIGHT_CUBE_SCALE: f32 = 0.25;

/// Constant rotation of an object over time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub axis: Vec3,
    pub degrees_per_second: f32,
}

/// Surface of an object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectMaterial {
    /// Solid colors
    Phong(PhongMaterial),
    /// Diffuse and specular maps
    Textured(TexturedMaterial),
}

/// A cube in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub name: String,
    pub position: Vec3,
    pub scale: Vec3,
    pub spin: Option<Spin>,
    pub material: ObjectMaterial,
}

impl SceneObject {
    /// Unit cube at `position`
    pub fn new(name: impl Into<String>, position: Vec3, material: ObjectMaterial) -> Self {
        Self {
            name: name.into(),
            position,
            scale: Vec3::repeat(1.0),
            spin: None,
            material,
        }
    }

    /// Rotate continuously around `axis`
    pub fn with_spin(mut self, axis: Vec3, degrees_per_second: f32) -> Self {
        self.spin = Some(Spin {
            axis,
            degrees_per_second,
        });
        self
    }

    /// Model matrix at time `t`: translate, then rotate, then scale
    pub fn model_matrix(&self, t: f32) -> Mat4 {
        let rotation = match self.spin {
            Some(spin) => Mat4::rotation_about(spin.axis, t * utils::deg_to_rad(spin.degrees_per_second)),
            None => Mat4::identity(),
        };
        Mat4::new_translation(&self.position) * rotation * Mat4::new_nonuniform_scaling(&self.scale)
    }
}

/// How a scene is lit, which also decides the shader program its objects use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LightRig {
    /// One light of a single color (`lightColor`, `lightPos`)
    SingleColor { color: Vec3, path: LightPath },
    /// One light with separate ambient, diffuse and specular intensities
    /// (`light.*`)
    Phong { light: PhongLight, path: LightPath },
    /// Directional light, point lights and a flashlight that follows the
    /// camera
    Casters {
        directional: DirectionalLight,
        points: Vec<PointLight>,
        spotlight: Option<SpotLight>,
    },
}

impl LightRig {
    /// Program used for the lit objects
    pub fn program(&self) -> ProgramKind {
        match self {
            Self::SingleColor { .. } => ProgramKind::BasicMaterial,
            Self::Phong { .. } => ProgramKind::PhongMaterial,
            Self::Casters { .. } => ProgramKind::MultiLight,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::SingleColor { .. } => "single color",
            Self::Phong { .. } => "phong",
            Self::Casters { .. } => "casters",
        }
    }

    /// Light uniforms shared by every lit object this frame
    pub fn write_uniforms(&self, frame: &FrameContext, uniforms: &mut UniformSet) {
        match self {
            Self::SingleColor { color, path } => {
                uniforms.set("lightColor", *color);
                uniforms.set("lightPos", path.position_at(frame.time));
            }
            Self::Phong { light, path } => {
                uniforms.set("light.position", path.position_at(frame.time));
                light.write_uniforms("light", uniforms);
            }
            Self::Casters {
                directional,
                points,
                spotlight,
            } => {
                directional.write_uniforms("dirLight", uniforms);
                for (i, point) in points.iter().take(MAX_POINT_LIGHTS).enumerate() {
                    point.write_uniforms(&indexed("pointLights", i), uniforms);
                }
                uniforms.set("pointLightCount", points.len().min(MAX_POINT_LIGHTS) as i32);

                // Without a flashlight the cone gets no intensity at all
                let spot = match spotlight {
                    Some(spot) => spot.attached_to(frame.camera_position, frame.camera_front),
                    None => SpotLight::new(
                        frame.camera_position,
                        frame.camera_front,
                        PhongLight::uniform(0.0, 0.0, 0.0),
                        0.0,
                        0.0,
                    ),
                };
                spot.write_uniforms("spotlight", uniforms);
            }
        }
    }

    /// Positions and colors of the visible light markers at this frame
    pub fn markers(&self, frame: &FrameContext) -> Vec<(Vec3, Vec3)> {
        match self {
            Self::SingleColor { color, path } => vec![(path.position_at(frame.time), *color)],
            Self::Phong { light, path } => vec![(path.position_at(frame.time), light.diffuse)],
            Self::Casters { points, .. } => points
                .iter()
                .map(|point| (point.position, point.phong.diffuse))
                .collect(),
        }
    }
}

/// Scene validation errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// Object material cannot be shaded by the rig's program
    #[error("Object '{object}' has a {material} material, which the {rig} light rig cannot shade")]
    MaterialMismatch {
        object: String,
        material: &'static str,
        rig: &'static str,
    },

    /// More point lights than the shader declares
    #[error("Scene has {count} point lights but at most {max} are supported")]
    TooManyPointLights { count: usize, max: usize },
}

/// A complete demo scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: String,
    pub clear_color: Vec3,
    pub camera_position: Vec3,
    pub objects: Vec<SceneObject>,
    pub lights: LightRig,
    pub draw_light_cubes: bool,
}

impl Scene {
    /// Check that every object can be drawn by the scene's light rig
    pub fn validate(&self) -> Result<(), SceneError> {
        if let LightRig::Casters { points, .. } = &self.lights {
            if points.len() > MAX_POINT_LIGHTS {
                return Err(SceneError::TooManyPointLights {
                    count: points.len(),
                    max: MAX_POINT_LIGHTS,
                });
            }
        }

        let textured_rig = matches!(self.lights, LightRig::Casters { .. });
        for object in &self.objects {
            let (textured, material) = match object.material {
                ObjectMaterial::Phong(_) => (false, "solid color"),
                ObjectMaterial::Textured(_) => (true, "textured"),
            };
            if textured != textured_rig {
                return Err(SceneError::MaterialMismatch {
                    object: object.name.clone(),
                    material,
                    rig: self.lights.name(),
                });
            }
        }

        Ok(())
    }

    /// Build the draw calls for one frame
    ///
    /// One draw per object in scene order, followed by one light cube per
    /// visible light when `draw_light_cubes` is set.
    pub fn plan_frame(&self, frame: &FrameContext) -> FramePlan {
        let program = self.lights.program();

        let mut shared = UniformSet::new();
        shared.set("view", frame.view);
        shared.set("projection", frame.projection);
        shared.set("viewPos", frame.camera_position);
        self.lights.write_uniforms(frame, &mut shared);

        let mut draws = Vec::with_capacity(self.objects.len() + 4);
        for object in &self.objects {
            let mut uniforms = UniformSet::new();
            uniforms.set("model", object.model_matrix(frame.time));
            uniforms.extend_from(&shared);

            let draw = match &object.material {
                ObjectMaterial::Phong(material) => {
                    material.write_uniforms("material", &mut uniforms);
                    DrawCall::cube(program, uniforms)
                }
                ObjectMaterial::Textured(material) => {
                    material.write_uniforms("material", &mut uniforms);
                    DrawCall::cube(program, uniforms)
                        .with_texture(DIFFUSE_MAP_UNIT, material.diffuse_map.clone())
                        .with_texture(SPECULAR_MAP_UNIT, material.specular_map.clone())
                }
            };
            draws.push(draw);
        }

        if self.draw_light_cubes {
            for (position, color) in self.lights.markers(frame) {
                let mut uniforms = UniformSet::new();
                let model = Mat4::new_translation(&position) * Mat4::new_scaling(LIGHT_CUBE_SCALE);
                uniforms.set("model", model);
                uniforms.set("view", frame.view);
                uniforms.set("projection", frame.projection);
                uniforms.set("lightColor", color);
                draws.push(DrawCall::cube(ProgramKind::LightCube, uniforms));
            }
        }

        FramePlan {
            clear_color: self.clear_color,
            draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::material::MaterialPreset;
    use crate::render::uniforms::UniformValue;
    use approx::assert_relative_eq;

    fn frame_at(time: f32) -> FrameContext {
        FrameContext {
            view: Mat4::identity(),
            projection: Mat4::identity(),
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            camera_front: -Vec3::z(),
            time,
        }
    }

    fn single_color_scene() -> Scene {
        Scene {
            name: "test".to_string(),
            clear_color: Vec3::new(0.2, 0.3, 0.3),
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            objects: vec![
                SceneObject::new("coral", Vec3::zeros(), ObjectMaterial::Phong(PhongMaterial::tutorial())),
                SceneObject::new(
                    "gold",
                    Vec3::new(2.0, 0.0, 0.0),
                    ObjectMaterial::Phong(MaterialPreset::Gold.material()),
                ),
            ],
            lights: LightRig::SingleColor {
                color: Vec3::new(1.0, 0.5, 0.5),
                path: LightPath::fixed(Vec3::new(1.2, 1.0, 2.0)),
            },
            draw_light_cubes: true,
        }
    }

    #[test]
    fn test_model_matrix_order() {
        let object = SceneObject {
            scale: Vec3::repeat(2.0),
            ..SceneObject::new("box", Vec3::new(1.0, 0.0, 0.0), ObjectMaterial::Phong(PhongMaterial::tutorial()))
        }
        .with_spin(Vec3::z(), 90.0);

        // After one second: scaled by 2, turned a quarter around Z, then moved
        let corner = object.model_matrix(1.0).transform_point(&Vec3::new(0.5, 0.0, 0.0).into());
        assert_relative_eq!(corner.coords, Vec3::new(1.0, 1.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_plan_orders_objects_then_light_cubes() {
        let scene = single_color_scene();
        let plan = scene.plan_frame(&frame_at(0.0));

        assert_eq!(plan.clear_color, Vec3::new(0.2, 0.3, 0.3));
        assert_eq!(plan.draws.len(), 3);
        assert_eq!(plan.draws[0].program, ProgramKind::BasicMaterial);
        assert_eq!(plan.draws[1].program, ProgramKind::BasicMaterial);
        assert_eq!(plan.draws[2].program, ProgramKind::LightCube);
    }

    #[test]
    fn test_object_uniforms() {
        let plan = single_color_scene().plan_frame(&frame_at(0.0));
        let gold = &plan.draws[1].uniforms;

        assert_eq!(gold.get_vec3("lightColor"), Some(Vec3::new(1.0, 0.5, 0.5)));
        assert_eq!(gold.get_vec3("lightPos"), Some(Vec3::new(1.2, 1.0, 2.0)));
        assert_eq!(gold.get_vec3("viewPos"), Some(Vec3::new(0.0, 0.0, 5.0)));
        assert_eq!(gold.get_mat4("model"), Some(Mat4::new_translation(&Vec3::new(2.0, 0.0, 0.0))));
        assert_relative_eq!(gold.get_float("material.shininess").unwrap(), 51.2, epsilon = 1e-4);
        assert!(plan.draws[0].textures.is_empty());
    }

    #[test]
    fn test_light_cube_uniforms() {
        let plan = single_color_scene().plan_frame(&frame_at(0.0));
        let cube = &plan.draws[2].uniforms;

        let expected = Mat4::new_translation(&Vec3::new(1.2, 1.0, 2.0)) * Mat4::new_scaling(0.25);
        assert_eq!(cube.get_mat4("model"), Some(expected));
        assert_eq!(cube.get_vec3("lightColor"), Some(Vec3::new(1.0, 0.5, 0.5)));
        assert!(cube.get("material.diffuse").is_none());
    }

    #[test]
    fn test_light_cubes_can_be_hidden() {
        let scene = Scene {
            draw_light_cubes: false,
            ..single_color_scene()
        };
        let plan = scene.plan_frame(&frame_at(0.0));
        assert_eq!(plan.draws_with(ProgramKind::LightCube).count(), 0);
    }

    #[test]
    fn test_casters_rig_uniforms() {
        let spot = SpotLight::new(Vec3::zeros(), -Vec3::z(), PhongLight::uniform(0.1, 2.0, 1.0), 1.5, 15.0);
        let scene = Scene {
            objects: vec![SceneObject::new(
                "crate",
                Vec3::zeros(),
                ObjectMaterial::Textured(TexturedMaterial::container()),
            )],
            lights: LightRig::Casters {
                directional: DirectionalLight::new(Vec3::new(5.0, 2.0, -2.5), PhongLight::uniform(0.1, 0.3, 1.0)),
                points: vec![
                    PointLight::tinted(Vec3::new(0.7, 0.2, 2.0), Vec3::new(0.8, 0.7, 0.4)),
                    PointLight::tinted(Vec3::new(2.3, -3.3, -4.0), Vec3::new(0.9, 0.6, 0.3)),
                ],
                spotlight: Some(spot),
            },
            ..single_color_scene()
        };
        assert!(scene.validate().is_ok());

        let mut frame = frame_at(0.0);
        frame.camera_position = Vec3::new(1.0, 2.0, 3.0);
        frame.camera_front = Vec3::x();
        let plan = scene.plan_frame(&frame);

        let draw = &plan.draws[0];
        assert_eq!(draw.program, ProgramKind::MultiLight);
        assert_eq!(draw.textures.len(), 2);
        assert_eq!(draw.textures[1].path, "container2_specular.png");

        let uniforms = &draw.uniforms;
        assert_eq!(uniforms.get("pointLightCount"), Some(&UniformValue::Int(2)));
        assert_eq!(uniforms.get_vec3("pointLights[1].position"), Some(Vec3::new(2.3, -3.3, -4.0)));
        assert_eq!(uniforms.get_vec3("spotlight.position"), Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(uniforms.get_vec3("spotlight.direction"), Some(Vec3::x()));
        assert_eq!(uniforms.get("material.diffuse"), Some(&UniformValue::Int(0)));

        // One marker per point light, colored by its diffuse intensity
        let markers: Vec<_> = plan.draws_with(ProgramKind::LightCube).collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].uniforms.get_vec3("lightColor"), Some(Vec3::new(0.8, 0.7, 0.4)));
    }

    #[test]
    fn test_validation() {
        let mut scene = single_color_scene();
        assert!(scene.validate().is_ok());

        scene.objects.push(SceneObject::new(
            "crate",
            Vec3::zeros(),
            ObjectMaterial::Textured(TexturedMaterial::container()),
        ));
        assert!(matches!(
            scene.validate(),
            Err(SceneError::MaterialMismatch { ref object, .. }) if object == "crate"
        ));

        let scene = Scene {
            objects: Vec::new(),
            lights: LightRig::Casters {
                directional: DirectionalLight::new(-Vec3::y(), PhongLight::uniform(0.1, 0.3, 1.0)),
                points: vec![PointLight::tinted(Vec3::zeros(), Vec3::repeat(1.0)); 5],
                spotlight: None,
            },
            ..single_color_scene()
        };
        assert_eq!(
            scene.validate(),
            Err(SceneError::TooManyPointLights { count: 5, max: 4 })
        );
    }

    #[test]
    fn test_scene_round_trips_through_ron() {
        let scene = single_color_scene();
        let text = ron::to_string(&scene).unwrap();
        let parsed: Scene = ron::from_str(&text).unwrap();
        assert_eq!(parsed, scene);
    }
}
