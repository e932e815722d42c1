//! # Fly Camera
//!
//! First-person camera steered by keyboard and mouse. Orientation is kept as
//! Euler angles (yaw and pitch, in degrees) and the basis vectors are derived
//! from them whenever they change.
//!
//! ## Coordinate System
//! Right-handed, Y-up world space. A yaw of -90 degrees looks down the
//! negative Z axis, which is the direction the demos' cubes are laid out in.

use crate::config::CameraConfig;
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Default yaw in degrees (looking down -Z)
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch in degrees
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default movement speed in units per second
pub const DEFAULT_SPEED: f32 = 2.5;
/// Default mouse sensitivity in degrees per pixel
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Default (and widest) field of view in degrees
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Narrowest field of view the scroll wheel can zoom to
pub const MIN_ZOOM: f32 = 1.0;
/// Pitch limit that keeps the view from flipping over the poles
pub const PITCH_LIMIT: f32 = 89.0;

/// Direction of keyboard movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMovement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    /// Unit up vector of the camera basis
    pub up: Vec3,
    /// Unit right vector of the camera basis
    pub right: Vec3,
    /// World up direction the basis is built against
    pub world_up: Vec3,
    /// Rotation around the world up axis, in degrees
    pub yaw: f32,
    /// Rotation above or below the horizon, in degrees
    pub pitch: f32,
    /// Units per second
    pub movement_speed: f32,
    /// Degrees per pixel of mouse movement
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Camera {
    /// Create a camera at `position` looking down -Z
    pub fn new(position: Vec3) -> Self {
        Self::with_orientation(position, Vec3::y(), DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Create a camera with explicit world up and Euler angles in degrees
    pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: -Vec3::z(),
            up: world_up,
            right: Vec3::x(),
            world_up,
            yaw,
            pitch,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
        };
        camera.update_vectors();
        camera
    }

    /// Create a camera at `position` using speed, sensitivity and field of
    /// view from configuration
    ///
    /// The field of view is clamped to the zoom range so scrolling can
    /// always return to it.
    pub fn from_config(position: Vec3, config: &CameraConfig) -> Self {
        let mut camera = Self::new(position);
        camera.movement_speed = config.movement_speed;
        camera.mouse_sensitivity = config.mouse_sensitivity;
        camera.zoom = utils::clamp(config.fov_degrees, MIN_ZOOM, DEFAULT_ZOOM);
        if camera.zoom != config.fov_degrees {
            log::warn!(
                "Field of view {} is outside the zoom range, using {}",
                config.fov_degrees,
                camera.zoom
            );
        }
        camera
    }

    /// World-to-view transform
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection using the current zoom as vertical field of view
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        Mat4::perspective(utils::deg_to_rad(self.zoom), aspect, near, far)
    }

    /// Move the camera for `delta_time` seconds in `direction`
    pub fn process_keyboard(&mut self, direction: CameraMovement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            CameraMovement::Forward => self.position += self.front * velocity,
            CameraMovement::Backward => self.position -= self.front * velocity,
            CameraMovement::Left => self.position -= self.right * velocity,
            CameraMovement::Right => self.position += self.right * velocity,
        }
    }

    /// Turn the camera by a mouse offset in pixels
    ///
    /// Positive `y_offset` looks up. With `constrain_pitch` the pitch stays
    /// within +/-89 degrees.
    pub fn process_mouse_movement(&mut self, x_offset: f32, y_offset: f32, constrain_pitch: bool) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = utils::clamp(self.pitch, -PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_vectors();
    }

    /// Zoom by a scroll wheel offset; the field of view stays within 1..45
    /// degrees
    pub fn process_mouse_scroll(&mut self, y_offset: f32) {
        self.zoom = utils::clamp(self.zoom - y_offset, MIN_ZOOM, DEFAULT_ZOOM);
        log::trace!("Camera zoom: {:.1}", self.zoom);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (utils::deg_to_rad(self.yaw), utils::deg_to_rad(self.pitch));
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = front.normalize();
        self.right = self.front.cross(&self.world_up).normalize();
        self.up = self.right.cross(&self.front).normalize();
    }
}

impl Default for Camera {
    /// Camera three units in front of the origin, looking at it
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}
