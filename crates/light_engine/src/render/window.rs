//! GLFW window with an OpenGL core profile context
//!
//! Creates the window, makes its context current, loads the GL function
//! pointers and translates GLFW events into [`AppEvent`]s.

use glfw::{Action, Context, Key, WindowEvent};
use thiserror::Error;

use crate::application::AppEvent;
use crate::config::WindowConfig;
use crate::input::KeyCode;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    #[error("GLFW initialization failed: {0}")]
    InitializationFailed(String),

    #[error("Window creation failed for OpenGL {major}.{minor} core profile")]
    CreationFailed { major: u32, minor: u32 },
}

pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window owning the current GL context
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, WindowEvent)>,
}

impl Window {
    /// Create a window, make its context current and load OpenGL
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|e| WindowError::InitializationFailed(format!("{:?}", e)))?;

        let (major, minor) = config.gl_version;
        glfw.window_hint(glfw::WindowHint::ContextVersion(major, minor));
        glfw.window_hint(glfw::WindowHint::OpenGlProfile(glfw::OpenGlProfileHint::Core));
        #[cfg(target_os = "macos")]
        glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
        glfw.window_hint(glfw::WindowHint::Resizable(true));

        let (mut window, events) = glfw
            .create_window(config.width, config.height, &config.title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed { major, minor })?;

        window.make_current();
        window.set_key_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_scroll_polling(true);
        window.set_framebuffer_size_polling(true);
        window.set_close_polling(true);
        window.set_focus_polling(true);

        if config.capture_cursor {
            window.set_cursor_mode(glfw::CursorMode::Disabled);
        }

        glfw.set_swap_interval(if config.vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        log::info!(
            "Created {}x{} window '{}' with OpenGL {}.{} core profile",
            config.width, config.height, config.title, major, minor
        );

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    pub fn set_should_close(&mut self, should_close: bool) {
        self.window.set_should_close(should_close);
    }

    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain pending events, keeping those the engine understands
    pub fn flush_events(&self) -> Vec<AppEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| translate_event(event))
            .collect()
    }

    /// Framebuffer size in pixels
    pub fn framebuffer_size(&self) -> (u32, u32) {
        let (width, height) = self.window.get_framebuffer_size();
        (width.max(0) as u32, height.max(0) as u32)
    }

    /// Seconds since GLFW was initialized
    pub fn time(&self) -> f64 {
        self.glfw.get_time()
    }

    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}

/// Map a GLFW key to the keys the demos react to
pub fn key_code(key: Key) -> Option<KeyCode> {
    match key {
        Key::W => Some(KeyCode::W),
        Key::A => Some(KeyCode::A),
        Key::S => Some(KeyCode::S),
        Key::D => Some(KeyCode::D),
        Key::Space => Some(KeyCode::Space),
        Key::Escape => Some(KeyCode::Escape),
        Key::Up => Some(KeyCode::Up),
        Key::Down => Some(KeyCode::Down),
        Key::Left => Some(KeyCode::Left),
        Key::Right => Some(KeyCode::Right),
        _ => None,
    }
}

/// Translate a GLFW event; events the engine ignores map to `None`
pub fn translate_event(event: WindowEvent) -> Option<AppEvent> {
    match event {
        WindowEvent::Key(key, _, action, _) => key_code(key).map(|key| AppEvent::KeyInput {
            key,
            pressed: action != Action::Release,
        }),
        WindowEvent::FramebufferSize(width, height) => Some(AppEvent::WindowResized {
            width: width.max(0) as u32,
            height: height.max(0) as u32,
        }),
        WindowEvent::CursorPos(x, y) => Some(AppEvent::MouseMoved { x, y }),
        WindowEvent::Scroll(delta_x, delta_y) => Some(AppEvent::MouseWheel { delta_x, delta_y }),
        WindowEvent::Close => Some(AppEvent::WindowCloseRequested),
        WindowEvent::Focus(true) => Some(AppEvent::WindowFocused),
        WindowEvent::Focus(false) => Some(AppEvent::WindowUnfocused),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw::Modifiers;

    #[test]
    fn test_key_events() {
        let press = WindowEvent::Key(Key::W, 17, Action::Press, Modifiers::empty());
        assert_eq!(
            translate_event(press),
            Some(AppEvent::KeyInput { key: KeyCode::W, pressed: true })
        );

        let repeat = WindowEvent::Key(Key::D, 32, Action::Repeat, Modifiers::empty());
        assert_eq!(
            translate_event(repeat),
            Some(AppEvent::KeyInput { key: KeyCode::D, pressed: true })
        );

        let release = WindowEvent::Key(Key::Escape, 1, Action::Release, Modifiers::empty());
        assert_eq!(
            translate_event(release),
            Some(AppEvent::KeyInput { key: KeyCode::Escape, pressed: false })
        );

        let unmapped = WindowEvent::Key(Key::F12, 88, Action::Press, Modifiers::empty());
        assert_eq!(translate_event(unmapped), None);
    }

    #[test]
    fn test_window_events() {
        assert_eq!(
            translate_event(WindowEvent::FramebufferSize(1600, 1200)),
            Some(AppEvent::WindowResized { width: 1600, height: 1200 })
        );
        assert_eq!(
            translate_event(WindowEvent::FramebufferSize(-1, 0)),
            Some(AppEvent::WindowResized { width: 0, height: 0 })
        );
        assert_eq!(
            translate_event(WindowEvent::Scroll(0.0, -1.5)),
            Some(AppEvent::MouseWheel { delta_x: 0.0, delta_y: -1.5 })
        );
        assert_eq!(translate_event(WindowEvent::Close), Some(AppEvent::WindowCloseRequested));
        assert_eq!(translate_event(WindowEvent::Focus(false)), Some(AppEvent::WindowUnfocused));
        assert_eq!(translate_event(WindowEvent::Iconify(true)), None);
    }
}
