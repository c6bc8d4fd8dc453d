use crate::error::{Error, Result};
use gl::{self, types as gl_t};
use image::RgbaImage;
use std::path::Path;

/// Decodes an image file into RGBA8 rows ordered bottom to top, which is
/// what `glTexImage2D` expects.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|reason| Error::Texture {
        path: path.to_path_buf(),
        reason,
    })?;
    Ok(image.flipv().into_rgba8())
}

pub struct Texture {
    id: u32,
}

impl Texture {
    /// NOTE: after this call there will be no texture bound
    pub unsafe fn new(width: u32, height: u32, data: &[u8]) -> Self {
        assert_eq!(data.len(), width as usize * height as usize * 4);

        let mut id: gl_t::GLuint = 0;
        // Generate a new texture
        gl::GenTextures(1, &mut id);
        gl::BindTexture(gl::TEXTURE_2D, id);

        gl::TexImage2D(
            gl::TEXTURE_2D,
            0,
            gl::RGBA as i32,
            width as i32,
            height as i32,
            0,
            gl::RGBA,
            gl::UNSIGNED_BYTE,
            data.as_ptr() as *const _,
        );
        gl::GenerateMipmap(gl::TEXTURE_2D);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_S, gl::REPEAT as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_WRAP_T, gl::REPEAT as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MIN_FILTER, gl::NEAREST as i32);
        gl::TexParameteri(gl::TEXTURE_2D, gl::TEXTURE_MAG_FILTER, gl::NEAREST as i32);
        Self::unbind();
        Self { id }
    }

    /// Loads and uploads an image file.
    ///
    /// Nothing touches the GPU unless the file decoded.
    pub unsafe fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let image = load_image(path.as_ref())?;
        Ok(Self::new(image.width(), image.height(), image.as_raw()))
    }

    pub unsafe fn bind(tex: &Self) {
        gl::BindTexture(gl::TEXTURE_2D, tex.id);
    }

    pub unsafe fn unbind() {
        gl::BindTexture(gl::TEXTURE_2D, 0);
    }
}

impl Drop for Texture {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.id);
        }
    }
}
