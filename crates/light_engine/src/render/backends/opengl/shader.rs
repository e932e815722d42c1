//! Shader compilation and uniform upload

use std::cell::RefCell;
use std::collections::HashMap;
use std::ffi::CString;
use std::ptr;

use gl::types::{GLchar, GLenum, GLint, GLuint};
use thiserror::Error;

use crate::render::uniforms::{UniformSet, UniformValue};

/// Shader build errors
#[derive(Error, Debug)]
pub enum ShaderError {
    /// Source contains an interior NUL byte
    #[error("{stage} shader source contains a NUL byte")]
    InvalidSource { stage: &'static str },

    /// Compilation failed; carries the driver's info log
    #[error("{stage} shader failed to compile:\n{log}")]
    Compile { stage: &'static str, log: String },

    /// Linking failed; carries the driver's info log
    #[error("Program failed to link:\n{log}")]
    Link { log: String },
}

/// Linked GL program with a cache of uniform locations
pub struct ShaderProgram {
    id: GLuint,
    locations: RefCell<HashMap<String, GLint>>,
}

impl ShaderProgram {
    /// Compile both stages and link them
    pub fn new(vertex_source: &str, fragment_source: &str) -> Result<Self, ShaderError> {
        let vertex = compile(gl::VERTEX_SHADER, "vertex", vertex_source)?;
        let fragment = match compile(gl::FRAGMENT_SHADER, "fragment", fragment_source) {
            Ok(fragment) => fragment,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex) };
                return Err(e);
            }
        };

        let id = unsafe {
            let id = gl::CreateProgram();
            gl::AttachShader(id, vertex);
            gl::AttachShader(id, fragment);
            gl::LinkProgram(id);
            // Shaders are no longer needed once linked into the program
            gl::DeleteShader(vertex);
            gl::DeleteShader(fragment);
            id
        };

        let mut status = GLint::from(gl::FALSE);
        unsafe { gl::GetProgramiv(id, gl::LINK_STATUS, &mut status) };
        if status != GLint::from(gl::TRUE) {
            let log = program_info_log(id);
            unsafe { gl::DeleteProgram(id) };
            return Err(ShaderError::Link { log });
        }

        Ok(Self {
            id,
            locations: RefCell::new(HashMap::new()),
        })
    }

    /// Make this the current program
    pub fn bind(&self) {
        unsafe { gl::UseProgram(self.id) };
    }

    /// Location of a uniform, or `None` if the program has no active uniform
    /// by that name
    pub fn location(&self, name: &str) -> Option<GLint> {
        if let Some(&location) = self.locations.borrow().get(name) {
            return (location >= 0).then_some(location);
        }

        let location = match CString::new(name) {
            Ok(c_name) => unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) },
            Err(_) => -1,
        };
        if location < 0 {
            log::debug!("Uniform '{}' is not active in program {}", name, self.id);
        }
        self.locations.borrow_mut().insert(name.to_string(), location);
        (location >= 0).then_some(location)
    }

    /// Upload every value in `uniforms`; the program must be bound
    ///
    /// Names the program does not use are skipped.
    pub fn apply(&self, uniforms: &UniformSet) {
        for (name, value) in uniforms.iter() {
            let Some(location) = self.location(name) else {
                continue;
            };
            unsafe {
                match value {
                    UniformValue::Float(v) => gl::Uniform1f(location, *v),
                    UniformValue::Int(v) => gl::Uniform1i(location, *v),
                    UniformValue::Vec3(v) => gl::Uniform3fv(location, 1, v.as_ptr()),
                    // nalgebra is column-major like GLSL
                    UniformValue::Mat4(m) => gl::UniformMatrix4fv(location, 1, gl::FALSE, m.as_ptr()),
                }
            }
        }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) };
    }
}

fn compile(kind: GLenum, stage: &'static str, source: &str) -> Result<GLuint, ShaderError> {
    let c_source = CString::new(source).map_err(|_| ShaderError::InvalidSource { stage })?;

    let shader = unsafe {
        let shader = gl::CreateShader(kind);
        gl::ShaderSource(shader, 1, &c_source.as_ptr(), ptr::null());
        gl::CompileShader(shader);
        shader
    };

    let mut status = GLint::from(gl::FALSE);
    unsafe { gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut status) };
    if status != GLint::from(gl::TRUE) {
        let log = shader_info_log(shader);
        unsafe { gl::DeleteShader(shader) };
        return Err(ShaderError::Compile { stage, log });
    }

    Ok(shader)
}

fn shader_info_log(shader: GLuint) -> String {
    let mut length: GLint = 0;
    unsafe { gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut length) };
    let mut buffer = vec![0u8; length.max(1) as usize];
    unsafe {
        gl::GetShaderInfoLog(shader, length, ptr::null_mut(), buffer.as_mut_ptr().cast::<GLchar>());
    }
    trim_log(buffer)
}

fn program_info_log(program: GLuint) -> String {
    let mut length: GLint = 0;
    unsafe { gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut length) };
    let mut buffer = vec![0u8; length.max(1) as usize];
    unsafe {
        gl::GetProgramInfoLog(program, length, ptr::null_mut(), buffer.as_mut_ptr().cast::<GLchar>());
    }
    trim_log(buffer)
}

/// Info logs come back NUL-terminated
fn trim_log(mut buffer: Vec<u8>) -> String {
    if let Some(end) = buffer.iter().position(|&b| b == 0) {
        buffer.truncate(end);
    }
    String::from_utf8_lossy(&buffer).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_log() {
        assert_eq!(trim_log(b"0:12(3): error: syntax error\n\0\0".to_vec()), "0:12(3): error: syntax error");
        assert_eq!(trim_log(vec![0]), "");
    }

    #[test]
    fn test_error_messages_carry_logs() {
        let error = ShaderError::Compile {
            stage: "fragment",
            log: "undeclared identifier".to_string(),
        };
        assert!(error.to_string().contains("fragment"));
        assert!(error.to_string().contains("undeclared identifier"));
    }
}
