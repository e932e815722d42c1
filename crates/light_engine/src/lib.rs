//! # Light Engine
//!
//! Phong lighting on OpenGL: solid-color materials from the classic material
//! table, lighting-map materials, and directional, point and spot lights with
//! distance attenuation.
//!
//! ## Features
//!
//! - **Frame Plans**: scenes turn into plain draw lists that can be tested without a GPU
//! - **Material Table**: 24 named Phong materials plus lighting-map materials
//! - **Light Casters**: directional, attenuated point and spot lights in one shader
//! - **Fly Camera**: WASD movement, mouse look and scroll zoom
//! - **Configuration**: TOML or RON files for window, camera, shader and asset settings
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use light_engine::prelude::*;
//!
//! struct MyApp {
//!     scene: Scene,
//! }
//!
//! impl Application for MyApp {
//!     fn scene(&self) -> &Scene {
//!         &self.scene
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApplicationConfig::new("Materials");
//!     let mut app = MyApp { scene: demos::materials_showcase() };
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod assets;
pub mod config;
pub mod foundation;
pub mod input;
pub mod render;
pub mod scene;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application};
pub use engine::{Engine, EngineError, Viewer, ViewerAction};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Application,
        Engine, EngineError,
        config::{ApplicationConfig, Config},
        foundation::{
            logging,
            math::{Mat4, Vec3},
            time::Timer,
        },
        render::{
            lighting::{Attenuation, DirectionalLight, PhongLight, PointLight, SpotLight},
            material::{MaterialPreset, PhongMaterial, TexturedMaterial},
            Camera, FramePlan, ProgramKind,
        },
        scene::{demos, LightRig, ObjectMaterial, Scene, SceneError, SceneObject},
    };
}
