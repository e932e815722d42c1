//! Math utilities and types
//!
//! Provides the vector and matrix types used by the camera, lights and scenes.
//! All matrices follow OpenGL conventions: column-major storage, right-handed
//! view space and clip-space depth in the -1..1 range.

pub use nalgebra::{
    Vector2, Vector3, Vector4,
    Matrix3, Matrix4,
    Unit,
};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min { min } else if value > max { max } else { value }
    }
}

/// Extension trait for Mat4 with OpenGL-convention constructors
pub trait Mat4Ext {
    /// Create a perspective projection matrix (vertical FOV in radians)
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;

    /// Create a rotation of `angle` radians about `axis`
    ///
    /// The axis does not need to be normalized. A zero-length axis yields the
    /// identity matrix.
    fn rotation_about(axis: Vec3, angle: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // Same layout as glm::perspective: depth mapped to [-1, 1]
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }

    fn rotation_about(axis: Vec3, angle: f32) -> Mat4 {
        match Unit::try_new(axis, f32::EPSILON) {
            Some(unit_axis) => Mat4::from_axis_angle(&unit_axis, angle),
            None => Mat4::identity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_perspective_maps_near_and_far_planes() {
        let projection = Mat4::perspective(utils::deg_to_rad(45.0), 800.0 / 600.0, 0.1, 100.0);

        let near = projection * Vec4::new(0.0, 0.0, -0.1, 1.0);
        let far = projection * Vec4::new(0.0, 0.0, -100.0, 1.0);

        assert_relative_eq!(near.z / near.w, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_look_at_moves_eye_to_origin() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = Mat4::look_at(eye, Vec3::zeros(), Vec3::y());

        let transformed = view.transform_point(&Point3::from(eye));
        assert_relative_eq!(transformed.coords, Vec3::zeros(), epsilon = EPSILON);

        // The target lies straight ahead, on the negative Z axis
        let target = view.transform_point(&Point3::origin());
        assert_relative_eq!(target.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(target.y, 0.0, epsilon = EPSILON);
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_rotation_about_normalizes_axis() {
        let unnormalized = Mat4::rotation_about(Vec3::new(0.0, 0.0, 5.0), constants::PI / 2.0);
        let rotated = unnormalized.transform_vector(&Vec3::x());

        assert_relative_eq!(rotated, Vec3::y(), epsilon = EPSILON);
    }

    #[test]
    fn test_rotation_about_zero_axis_is_identity() {
        assert_eq!(Mat4::rotation_about(Vec3::zeros(), 1.0), Mat4::identity());
    }

    #[test]
    fn test_degree_conversions() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::rad_to_deg(constants::PI / 2.0), 90.0, epsilon = 1e-4);
        assert_eq!(utils::clamp(120.0, 1.0, 45.0), 45.0);
        assert_eq!(utils::clamp(-3.0, 1.0, 45.0), 1.0);
    }
}
