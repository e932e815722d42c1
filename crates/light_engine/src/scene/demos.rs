//! The three demo scenes

use crate::foundation::math::Vec3;
use crate::render::lighting::{DirectionalLight, LightPath, PhongLight, PointLight, SpotLight};
use crate::render::material::{MaterialPreset, PhongMaterial, TexturedMaterial};
use super::{LightRig, ObjectMaterial, Scene, SceneObject};

/// Resting position the demo lights orbit around
pub const LIGHT_BASE: [f32; 3] = [1.2, 1.0, 2.0];
/// Orbit radius of the wandering demo lights
pub const LIGHT_ORBIT_RADIUS: f32 = 8.0;

/// Columns in the material grid
const GRID_COLUMNS: usize = 5;
/// Distance between neighboring cubes in the material grid
const GRID_SPACING: f32 = 2.0;

/// Position of the `index`-th cube in the material grid
///
/// Rows run left to right, and successive rows go down.
pub fn grid_position(index: usize) -> Vec3 {
    let column = (index % GRID_COLUMNS) as f32;
    let row = (index / GRID_COLUMNS) as f32;
    Vec3::new(GRID_SPACING * column, -GRID_SPACING * row, 0.0)
}

/// The coral tutorial cube followed by every reference material, laid out
/// on the five-column grid
pub fn material_grid() -> Vec<SceneObject> {
    let materials = std::iter::once(("Tutorial", PhongMaterial::tutorial()))
        .chain(MaterialPreset::ALL.iter().map(|preset| (preset.name(), preset.material())));

    materials
        .enumerate()
        .map(|(i, (name, material))| SceneObject::new(name, grid_position(i), ObjectMaterial::Phong(material)))
        .collect()
}

/// Every reference material on a five-column grid, led by the coral
/// tutorial material, lit by one wandering pinkish light
pub fn materials_showcase() -> Scene {
    Scene {
        name: "Materials".to_string(),
        clear_color: Vec3::new(0.2, 0.3, 0.3),
        camera_position: Vec3::new(4.5, -4.5, 20.0),
        objects: material_grid(),
        lights: LightRig::SingleColor {
            color: Vec3::new(1.0, 0.5, 0.5),
            path: LightPath::orbiting(Vec3::from(LIGHT_BASE), LIGHT_ORBIT_RADIUS),
        },
        draw_light_cubes: true,
    }
}

/// The material grid under a light with separate ambient, diffuse and
/// specular colors
pub fn material_properties() -> Scene {
    Scene {
        name: "Material Properties".to_string(),
        clear_color: Vec3::new(0.2, 0.3, 0.3),
        camera_position: Vec3::new(4.5, -4.5, 20.0),
        objects: material_grid(),
        lights: LightRig::Phong {
            light: PhongLight::new(
                Vec3::repeat(0.1),
                Vec3::new(1.0, 0.3, 0.5),
                Vec3::new(0.5, 0.3, 1.0),
            ),
            path: LightPath::orbiting(Vec3::from(LIGHT_BASE), LIGHT_ORBIT_RADIUS),
        },
        draw_light_cubes: true,
    }
}

/// Container positions in the light caster scene
pub const CONTAINER_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Point light positions and colors in the light caster scene
pub const DESERT_POINT_LIGHTS: [([f32; 3], [f32; 3]); 4] = [
    ([0.7, 0.2, 2.0], [0.8, 0.7, 0.4]),
    ([2.3, -3.3, -4.0], [0.9, 0.6, 0.3]),
    ([-4.0, 2.0, -12.0], [0.7, 0.4, 0.2]),
    ([0.0, 0.0, -3.0], [0.6, 0.1, 0.1]),
];

/// Ten spinning textured containers in warm desert light: a directional
/// sun, four tinted point lights and a flashlight held by the camera
pub fn light_casters() -> Scene {
    let spin_axis = Vec3::new(1.0, 0.3, 0.5);
    let objects = CONTAINER_POSITIONS
        .iter()
        .enumerate()
        .map(|(i, position)| {
            SceneObject::new(
                format!("Container {}", i),
                Vec3::from(*position),
                ObjectMaterial::Textured(TexturedMaterial::container()),
            )
            .with_spin(spin_axis, 20.0 * i as f32)
        })
        .collect();

    let points = DESERT_POINT_LIGHTS
        .iter()
        .map(|(position, color)| PointLight::tinted(Vec3::from(*position), Vec3::from(*color)))
        .collect();

    let flashlight = SpotLight::new(
        Vec3::zeros(),
        -Vec3::z(),
        PhongLight::uniform(0.1, 2.0, 1.0),
        1.5,
        15.0,
    );

    Scene {
        name: "Light Casters".to_string(),
        clear_color: Vec3::new(0.9, 0.5, 0.25),
        camera_position: Vec3::new(0.0, 0.0, 5.0),
        objects,
        lights: LightRig::Casters {
            directional: DirectionalLight::new(Vec3::new(5.0, 2.0, -2.5), PhongLight::uniform(0.1, 0.3, 1.0)),
            points,
            spotlight: Some(flashlight),
        },
        draw_light_cubes: true,
    }
}
