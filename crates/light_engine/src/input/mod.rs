//! Input management system
//!
//! Keyboard state, mouse-look tracking and the key map that drives the fly
//! camera. Nothing here talks to GLFW directly; the window translates its
//! events into [`KeyCode`]s and cursor positions.

use std::collections::HashSet;

use crate::render::primitives::{Camera, CameraMovement};

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// W key
    W,
    /// A key
    A,
    /// S key
    S,
    /// D key
    D,
    /// Space key
    Space,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Set of keys currently held down
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event; repeats count as pressed
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.held.insert(key);
        } else {
            self.held.remove(&key);
        }
    }

    /// Whether `key` is held
    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Release every key, for example when the window loses focus
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Turns absolute cursor positions into mouse-look offsets
#[derive(Debug, Clone, Default)]
pub struct MouseTracker {
    last: Option<(f32, f32)>,
}

impl MouseTracker {
    /// Create a tracker that has not seen the cursor yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a cursor position in window coordinates
    ///
    /// The first position only seeds the tracker and yields no offset, so the
    /// view does not jump when the cursor first enters the window. Later
    /// positions yield `(dx, dy)` with `dy` positive when the cursor moves up.
    pub fn track(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let (x, y) = (x as f32, y as f32);
        let offset = self.last.map(|(last_x, last_y)| (x - last_x, last_y - y));
        self.last = Some((x, y));
        offset
    }

    /// Forget the last position; the next sample seeds the tracker again
    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Key map for the fly camera
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraController {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl Default for CameraController {
    /// WASD
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            backward: KeyCode::S,
            left: KeyCode::A,
            right: KeyCode::D,
        }
    }
}

impl CameraController {
    /// Move `camera` for every held movement key
    pub fn apply(&self, input: &InputState, camera: &mut Camera, delta_time: f32) {
        let bindings = [
            (self.forward, CameraMovement::Forward),
            (self.backward, CameraMovement::Backward),
            (self.left, CameraMovement::Left),
            (self.right, CameraMovement::Right),
        ];

        for (key, movement) in bindings {
            if input.is_held(key) {
                camera.process_keyboard(movement, delta_time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_key_state() {
        let mut input = InputState::new();
        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::W, true);
        assert!(input.is_held(KeyCode::W));
        assert!(!input.is_held(KeyCode::S));

        input.handle_key(KeyCode::W, false);
        assert!(!input.is_held(KeyCode::W));

        input.handle_key(KeyCode::A, true);
        input.clear();
        assert!(!input.is_held(KeyCode::A));
    }

    #[test]
    fn test_first_mouse_sample_only_seeds() {
        let mut mouse = MouseTracker::new();
        assert_eq!(mouse.track(400.0, 300.0), None);
        assert_eq!(mouse.track(410.0, 280.0), Some((10.0, 20.0)));
        assert_eq!(mouse.track(405.0, 290.0), Some((-5.0, -10.0)));

        mouse.reset();
        assert_eq!(mouse.track(0.0, 0.0), None);
    }

    #[test]
    fn test_controller_moves_camera() {
        let mut camera = Camera::new(Vec3::zeros());
        let mut input = InputState::new();
        let controller = CameraController::default();

        input.handle_key(KeyCode::W, true);
        input.handle_key(KeyCode::D, true);
        controller.apply(&input, &mut camera, 1.0);
        assert_relative_eq!(camera.position, Vec3::new(2.5, 0.0, -2.5), epsilon = 1e-5);

        // Opposite keys cancel out
        input.handle_key(KeyCode::S, true);
        input.handle_key(KeyCode::A, true);
        let before = camera.position;
        controller.apply(&input, &mut camera, 1.0);
        assert_relative_eq!(camera.position, before, epsilon = 1e-5);
    }

    #[test]
    fn test_no_keys_no_movement() {
        let mut camera = Camera::default();
        let start = camera.position;
        CameraController::default().apply(&InputState::new(), &mut camera, 0.5);
        assert_eq!(camera.position, start);
    }
}
