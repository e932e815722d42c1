//! Rendering backends

pub mod opengl;
