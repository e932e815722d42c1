//! Vertex buffers

use std::mem;

use gl::types::{GLsizei, GLsizeiptr, GLuint};

use crate::render::primitives::{Mesh, Vertex};

/// Attribute locations shared by every vertex shader
pub const POSITION_LOCATION: GLuint = 0;
pub const NORMAL_LOCATION: GLuint = 1;
pub const TEX_COORD_LOCATION: GLuint = 2;

/// Uploaded triangle list with its vertex array object
///
/// The buffer is written once and shared by every program; shaders that do
/// not read an attribute simply ignore it.
pub struct CubeGeometry {
    vao: GLuint,
    vbo: GLuint,
    vertex_count: usize,
}

impl CubeGeometry {
    /// Upload `mesh` and describe its interleaved layout
    pub fn new(mesh: &Mesh) -> Self {
        let bytes = mesh.as_bytes();
        let stride = mem::size_of::<Vertex>() as GLsizei;
        let (mut vao, mut vbo) = (0, 0);

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            let attributes = [
                (POSITION_LOCATION, 3, mem::offset_of!(Vertex, position)),
                (NORMAL_LOCATION, 3, mem::offset_of!(Vertex, normal)),
                (TEX_COORD_LOCATION, 2, mem::offset_of!(Vertex, tex_coord)),
            ];
            for (location, components, offset) in attributes {
                gl::VertexAttribPointer(location, components, gl::FLOAT, gl::FALSE, stride, offset as *const _);
                gl::EnableVertexAttribArray(location);
            }

            gl::BindVertexArray(0);
        }

        log::debug!("Uploaded {} vertices ({} bytes)", mesh.vertex_count(), bytes.len());

        Self {
            vao,
            vbo,
            vertex_count: mesh.vertex_count(),
        }
    }

    /// Draw `count` vertices as triangles, capped at what was uploaded
    pub fn draw(&self, count: usize) {
        let count = count.min(self.vertex_count) as GLsizei;
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, count);
        }
    }
}

impl Drop for CubeGeometry {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}
