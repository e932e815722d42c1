//! Application trait and lifecycle management

use crate::engine::{Engine, EngineError};
use crate::input::KeyCode;
use crate::scene::{Scene, SceneError};
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine. Only [`scene`] and
/// [`cleanup`] are required; the defaults place the camera, draw the scene
/// every frame and hand events to the engine.
///
/// [`scene`]: Application::scene
/// [`cleanup`]: Application::cleanup
pub trait Application {
    /// The scene drawn by the default [`render`](Application::render)
    fn scene(&self) -> &Scene;

    /// Initialize the application
    ///
    /// Called once after the window and renderer exist. The default validates
    /// the scene and moves the camera to the scene's starting position.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        let scene = self.scene();
        scene.validate()?;
        engine.camera_mut().position = scene.camera_position;
        log::info!("Scene '{}' ready with {} objects", scene.name, scene.objects.len());
        Ok(())
    }

    /// Update the application
    ///
    /// Called every frame after input has moved the camera.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, _engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        Ok(())
    }

    /// Render the application
    fn render(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        engine.render_scene(self.scene())
    }

    /// Handle application events
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event)
    }

    /// Cleanup the application
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene cannot be drawn
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Framebuffer was resized
    WindowResized {
        /// New framebuffer width in pixels
        width: u32,
        /// New framebuffer height in pixels
        height: u32,
    },

    /// Window close requested
    WindowCloseRequested,

    /// Window gained focus
    WindowFocused,

    /// Window lost focus
    WindowUnfocused,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: KeyCode,
        /// Whether the key is down (press or repeat) or was released
        pressed: bool,
    },

    /// Cursor moved
    MouseMoved {
        /// New X coordinate
        x: f64,
        /// New Y coordinate
        y: f64,
    },

    /// Mouse wheel
    MouseWheel {
        /// Horizontal scroll delta
        delta_x: f64,
        /// Vertical scroll delta
        delta_y: f64,
    },
}
