//! 2D textures

use gl::types::{GLint, GLsizei, GLuint};

use crate::assets::ImageData;

/// RGBA8 texture with mipmaps and repeat wrapping
pub struct Texture2D {
    id: GLuint,
}

impl Texture2D {
    /// Upload an image; rows are flipped so texture coordinate (0, 0) is the
    /// bottom-left corner of the image
    pub fn from_image(image: ImageData) -> Self {
        let image = image.flipped_vertically();
        let mut id = 0;

        unsafe {
            gl::GenTextures(1, &mut id);
            gl::BindTexture(gl::TEXTURE_2D, id);
            gl::TexImage2D(
                gl::TEXTURE_2D,
                0,
                gl::RGBA8 as GLint,
                image.width as GLsizei,
                image.height as GLsizei,
                0,
                gl::RGBA,
                gl::UNSIGNED_BYTE,
                image.data.as_ptr().cast(),
            );
            gl::GenerateMipmap(gl::TEXTURE_2D);

            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::LINEAR_MIPMAP_LINEAR as GLint);
            gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::LINEAR as GLint);
        }

        Self { id }
    }

    /// Bind to texture unit `unit`
    pub fn bind(&self, unit: u32) {
        unsafe {
            gl::ActiveTexture(gl::TEXTURE0 + unit);
            gl::BindTexture(gl::TEXTURE_2D, self.id);
        }
    }
}

impl Drop for Texture2D {
    fn drop(&mut self) {
        unsafe { gl::DeleteTextures(1, &self.id) };
    }
}
