//! Mesh representation
//!
//! Every demo draws the same unit cube. Vertices are stored unindexed and
//! interleaved (position, normal, texture coordinate) so the buffer can be
//! uploaded in one call and drawn with a plain triangle list.

use bytemuck::{Pod, Zeroable};

/// Number of vertices in [`Mesh::cube`]
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Interleaved vertex: 8 floats, 32 bytes
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Outward unit normal
    pub normal: [f32; 3],
    /// Texture coordinates
    pub tex_coord: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub const fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Triangle list geometry
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertices, three per triangle
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    /// Create a mesh from a triangle list
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }

    /// Unit cube centered at the origin (corners at +/-0.5)
    ///
    /// Six faces of two counter-clockwise triangles each, with outward
    /// normals and texture coordinates covering 0..1 on every face. The Z
    /// faces map x and y to u and v; the X faces map y to u and the Y faces
    /// map x to u, both with v running from +z to -z.
    pub fn cube() -> Self {
        // Each face: normal, then the four corners as (position, uv) in
        // counter-clockwise order seen from outside
        const FACES: [([f32; 3], [([f32; 3], [f32; 2]); 4]); 6] = [
            // Back (-Z)
            ([0.0, 0.0, -1.0], [
                ([0.5, -0.5, -0.5], [1.0, 0.0]),
                ([-0.5, -0.5, -0.5], [0.0, 0.0]),
                ([-0.5, 0.5, -0.5], [0.0, 1.0]),
                ([0.5, 0.5, -0.5], [1.0, 1.0]),
            ]),
            // Front (+Z)
            ([0.0, 0.0, 1.0], [
                ([-0.5, -0.5, 0.5], [0.0, 0.0]),
                ([0.5, -0.5, 0.5], [1.0, 0.0]),
                ([0.5, 0.5, 0.5], [1.0, 1.0]),
                ([-0.5, 0.5, 0.5], [0.0, 1.0]),
            ]),
            // Left (-X)
            ([-1.0, 0.0, 0.0], [
                ([-0.5, -0.5, -0.5], [0.0, 1.0]),
                ([-0.5, -0.5, 0.5], [0.0, 0.0]),
                ([-0.5, 0.5, 0.5], [1.0, 0.0]),
                ([-0.5, 0.5, -0.5], [1.0, 1.0]),
            ]),
            // Right (+X)
            ([1.0, 0.0, 0.0], [
                ([0.5, -0.5, 0.5], [0.0, 0.0]),
                ([0.5, -0.5, -0.5], [0.0, 1.0]),
                ([0.5, 0.5, -0.5], [1.0, 1.0]),
                ([0.5, 0.5, 0.5], [1.0, 0.0]),
            ]),
            // Bottom (-Y)
            ([0.0, -1.0, 0.0], [
                ([-0.5, -0.5, -0.5], [0.0, 1.0]),
                ([0.5, -0.5, -0.5], [1.0, 1.0]),
                ([0.5, -0.5, 0.5], [1.0, 0.0]),
                ([-0.5, -0.5, 0.5], [0.0, 0.0]),
            ]),
            // Top (+Y)
            ([0.0, 1.0, 0.0], [
                ([-0.5, 0.5, 0.5], [0.0, 0.0]),
                ([0.5, 0.5, 0.5], [1.0, 0.0]),
                ([0.5, 0.5, -0.5], [1.0, 1.0]),
                ([-0.5, 0.5, -0.5], [0.0, 1.0]),
            ]),
        ];

        let vertices = FACES
            .iter()
            .flat_map(|(normal, corners)| {
                [0, 1, 2, 2, 3, 0]
                    .into_iter()
                    .map(move |i| Vertex::new(corners[i].0, *normal, corners[i].1))
            })
            .collect();

        Self::new(vertices)
    }

    /// Number of vertices to draw
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Raw bytes for buffer upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_layout() {
        let cube = Mesh::cube();
        assert_eq!(cube.vertex_count(), CUBE_VERTEX_COUNT);
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
        assert_eq!(cube.as_bytes().len(), 36 * 32);
    }

    #[test]
    fn test_cube_bounds_and_uvs() {
        for vertex in Mesh::cube().vertices {
            assert!(vertex.position.iter().all(|c| c.abs() == 0.5));
            assert!(vertex.tex_coord.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_texture_orientation_per_face() {
        for vertex in Mesh::cube().vertices {
            let [x, y, z] = vertex.position;
            let [nx, _, nz] = vertex.normal;
            let expected = if nz != 0.0 {
                [x + 0.5, y + 0.5]
            } else if nx != 0.0 {
                [y + 0.5, 0.5 - z]
            } else {
                [x + 0.5, 0.5 - z]
            };
            assert_eq!(vertex.tex_coord, expected, "vertex {:?}", vertex);
        }
    }

    #[test]
    fn test_triangles_wind_counter_clockwise_outward() {
        let cube = Mesh::cube();
        for triangle in cube.vertices.chunks(3) {
            let a = Vec3::from(triangle[0].position);
            let b = Vec3::from(triangle[1].position);
            let c = Vec3::from(triangle[2].position);
            let normal = Vec3::from(triangle[0].normal);

            let face_normal = (b - a).cross(&(c - a)).normalize();
            assert_relative_eq!(face_normal, normal, epsilon = 1e-6);

            // Normals point away from the center
            assert!(a.dot(&normal) > 0.0);
        }
    }

    #[test]
    fn test_each_face_has_six_vertices() {
        let cube = Mesh::cube();
        for axis in 0..3 {
            for sign in [-1.0_f32, 1.0] {
                let count = cube
                    .vertices
                    .iter()
                    .filter(|v| v.normal[axis] == sign)
                    .count();
                assert_eq!(count, 6);
            }
        }
    }
}
