//! Core engine implementation

use crate::{
    application::{AppError, AppEvent, Application},
    config::{ApplicationConfig, CameraConfig, ConfigError},
    foundation::time::Timer,
    input::{CameraController, InputState, KeyCode, MouseTracker},
    render::{Camera, FrameContext, GlRenderer, RenderError, Window, WindowError},
    scene::Scene,
};
use thiserror::Error;

/// Camera, input and viewport state driven by window events
///
/// Holds everything event handling touches apart from the GL objects, so the
/// engine's reaction to input can be exercised without a window.
pub struct Viewer {
    /// Fly camera
    pub camera: Camera,

    /// Held keys
    pub input: InputState,

    /// Key map for camera movement
    pub controller: CameraController,

    mouse: MouseTracker,
    aspect: f32,
    running: bool,
}

/// Side effect of an event that the GL side has to carry out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    /// Set the viewport to a new framebuffer size
    Resize { width: u32, height: u32 },
}

impl Viewer {
    /// Create a viewer for a framebuffer of the given size
    pub fn new(camera_config: &CameraConfig, framebuffer: (u32, u32)) -> Self {
        Self {
            camera: Camera::from_config(Camera::default().position, camera_config),
            input: InputState::new(),
            controller: CameraController::default(),
            mouse: MouseTracker::new(),
            aspect: aspect_ratio(framebuffer.0, framebuffer.1).unwrap_or(1.0),
            running: true,
        }
    }

    /// Apply an event to the camera and input state
    pub fn handle_event(&mut self, event: AppEvent) -> Option<ViewerAction> {
        match event {
            AppEvent::WindowCloseRequested => {
                self.running = false;
            }
            AppEvent::KeyInput { key: KeyCode::Escape, pressed: true } => {
                log::info!("Escape pressed, closing");
                self.running = false;
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key(key, pressed);
            }
            AppEvent::MouseMoved { x, y } => {
                if let Some((dx, dy)) = self.mouse.track(x, y) {
                    self.camera.process_mouse_movement(dx, dy, true);
                }
            }
            AppEvent::MouseWheel { delta_y, .. } => {
                self.camera.process_mouse_scroll(delta_y as f32);
            }
            AppEvent::WindowResized { width, height } => {
                // A minimized window reports 0x0; keep the last usable aspect
                if let Some(aspect) = aspect_ratio(width, height) {
                    self.aspect = aspect;
                }
                return Some(ViewerAction::Resize { width, height });
            }
            AppEvent::WindowUnfocused => {
                self.input.clear();
                self.mouse.reset();
            }
            AppEvent::WindowFocused => {}
        }
        None
    }

    /// Move the camera for held keys
    pub fn update(&mut self, delta_time: f32) {
        self.controller.apply(&self.input, &mut self.camera, delta_time);
    }

    /// Per-frame camera state for planning a frame
    pub fn frame_context(&self, camera_config: &CameraConfig, time: f32) -> FrameContext {
        FrameContext::from_camera(&self.camera, self.aspect, camera_config.near, camera_config.far, time)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

fn aspect_ratio(width: u32, height: u32) -> Option<f32> {
    (width > 0 && height > 0).then(|| width as f32 / height as f32)
}

/// Main engine struct
///
/// The engine owns the window, the renderer and the viewer and runs the main
/// loop.
pub struct Engine {
    window: Window,
    renderer: GlRenderer,
    viewer: Viewer,
    timer: Timer,
    config: ApplicationConfig,
}

impl Engine {
    /// Create the window, load OpenGL and build the renderer
    pub fn new(config: ApplicationConfig) -> Result<Self, EngineError> {
        log::info!("Initializing engine...");
        config.validate()?;

        let window = Window::new(&config.window)?;
        let mut renderer = GlRenderer::new(&config.shaders, &config.assets)?;

        let framebuffer = window.framebuffer_size();
        renderer.resize(framebuffer.0, framebuffer.1);
        let viewer = Viewer::new(&config.camera, framebuffer);

        Ok(Self {
            window,
            renderer,
            viewer,
            timer: Timer::new(),
            config,
        })
    }

    /// Run the engine main loop with the given application
    pub fn run<T: Application>(config: ApplicationConfig, app: &mut T) -> Result<(), EngineError> {
        let mut engine = Self::new(config)?;

        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        let result = engine.main_loop(app);

        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        result
    }

    fn main_loop<T: Application>(&mut self, app: &mut T) -> Result<(), EngineError> {
        while self.viewer.is_running() && !self.window.should_close() {
            self.timer.update_from(self.window.time());
            let delta_time = self.timer.delta_time();

            self.window.poll_events();
            for event in self.window.flush_events() {
                app.handle_event(self, event)
                    .map_err(|e| EngineError::ApplicationError(format!("App event: {}", e)))?;
            }

            self.viewer.update(delta_time);

            app.update(self, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;

            app.render(self)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {}", e)))?;

            self.window.swap_buffers();
        }
        Ok(())
    }

    /// Plan and draw one frame of `scene` from the current camera
    pub fn render_scene(&mut self, scene: &Scene) -> Result<(), AppError> {
        let frame = self.frame_context();
        let plan = scene.plan_frame(&frame);
        self.renderer.render(&plan).map_err(EngineError::from)?;
        Ok(())
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) -> Result<(), AppError> {
        if let Some(ViewerAction::Resize { width, height }) = self.viewer.handle_event(event) {
            self.renderer.resize(width, height);
        }
        if !self.viewer.is_running() {
            self.window.set_should_close(true);
        }
        Ok(())
    }

    /// Camera state for the current frame
    pub fn frame_context(&self) -> FrameContext {
        self.viewer.frame_context(&self.config.camera, self.timer.total_time())
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.viewer.quit();
        self.window.set_should_close(true);
    }

    pub fn camera(&self) -> &Camera {
        &self.viewer.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.viewer.camera
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    pub fn renderer_mut(&mut self) -> &mut GlRenderer {
        &mut self.renderer
    }

    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Seconds on the window clock at the start of the current frame
    pub fn time(&self) -> f32 {
        self.timer.total_time()
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected before start-up
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Window or GL context could not be created
    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    /// Rendering failed
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn viewer() -> Viewer {
        Viewer::new(&CameraConfig::default(), (800, 600))
    }

    #[test]
    fn test_initial_state() {
        let viewer = viewer();
        assert!(viewer.is_running());
        assert_relative_eq!(viewer.aspect(), 800.0 / 600.0);
        assert_relative_eq!(viewer.camera.position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn test_escape_and_close_stop_the_loop() {
        let mut viewer = viewer();
        viewer.handle_event(AppEvent::KeyInput { key: KeyCode::Escape, pressed: false });
        assert!(viewer.is_running());
        viewer.handle_event(AppEvent::KeyInput { key: KeyCode::Escape, pressed: true });
        assert!(!viewer.is_running());

        let mut viewer = self::viewer();
        viewer.handle_event(AppEvent::WindowCloseRequested);
        assert!(!viewer.is_running());
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut viewer = viewer();
        let action = viewer.handle_event(AppEvent::WindowResized { width: 1920, height: 1080 });
        assert_eq!(action, Some(ViewerAction::Resize { width: 1920, height: 1080 }));
        assert_relative_eq!(viewer.aspect(), 1920.0 / 1080.0);

        // Minimized
        let action = viewer.handle_event(AppEvent::WindowResized { width: 0, height: 0 });
        assert_eq!(action, Some(ViewerAction::Resize { width: 0, height: 0 }));
        assert_relative_eq!(viewer.aspect(), 1920.0 / 1080.0);
    }

    #[test]
    fn test_held_keys_move_camera() {
        let mut viewer = viewer();
        let start = viewer.camera.position;

        viewer.handle_event(AppEvent::KeyInput { key: KeyCode::W, pressed: true });
        viewer.update(1.0);
        assert!(viewer.camera.position.z < start.z);

        viewer.handle_event(AppEvent::KeyInput { key: KeyCode::W, pressed: false });
        let stopped = viewer.camera.position;
        viewer.update(1.0);
        assert_relative_eq!(viewer.camera.position, stopped);
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut viewer = viewer();
        viewer.handle_event(AppEvent::KeyInput { key: KeyCode::D, pressed: true });
        viewer.handle_event(AppEvent::WindowUnfocused);
        assert!(!viewer.input.is_held(KeyCode::D));
    }

    #[test]
    fn test_mouse_look_skips_first_sample() {
        let mut viewer = viewer();
        let yaw = viewer.camera.yaw;

        viewer.handle_event(AppEvent::MouseMoved { x: 400.0, y: 300.0 });
        assert_relative_eq!(viewer.camera.yaw, yaw);

        viewer.handle_event(AppEvent::MouseMoved { x: 410.0, y: 300.0 });
        assert_relative_eq!(viewer.camera.yaw, yaw + 10.0 * viewer.camera.mouse_sensitivity);
    }

    #[test]
    fn test_scroll_zooms() {
        let mut viewer = viewer();
        let zoom = viewer.camera.zoom;
        viewer.handle_event(AppEvent::MouseWheel { delta_x: 0.0, delta_y: 2.0 });
        assert_relative_eq!(viewer.camera.zoom, zoom - 2.0);
    }

    #[test]
    fn test_frame_context_uses_camera() {
        let mut viewer = viewer();
        viewer.camera.position = Vec3::new(1.0, 2.0, 3.0);
        let frame = viewer.frame_context(&CameraConfig::default(), 4.5);
        assert_relative_eq!(frame.camera_position, Vec3::new(1.0, 2.0, 3.0));
        assert_relative_eq!(frame.time, 4.5);
        assert_relative_eq!(frame.view, viewer.camera.view_matrix());
    }
}
