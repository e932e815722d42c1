//! Image loading utilities for texture data

use std::path::Path;
use crate::assets::AssetError;

/// Side length of the fallback checkerboard, in pixels
pub const CHECKERBOARD_SIZE: u32 = 64;
/// Side length of one checkerboard square, in pixels
const CHECKER_SQUARE: u32 = 8;

/// Decoded RGBA8 image ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, rows top to bottom
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AssetError::NotFound(path.display().to_string()));
        }

        log::debug!("Loading image from: {:?}", path);

        let bytes = std::fs::read(path)
            .map_err(|e| AssetError::LoadFailed(format!("{}: {}", path.display(), e)))?;
        let image = Self::from_bytes(&bytes).map_err(|e| match e {
            AssetError::LoadFailed(reason) => AssetError::LoadFailed(format!("{}: {}", path.display(), reason)),
            other => other,
        })?;

        log::info!("Loaded image {}x{} from {:?}", image.width, image.height, path);
        Ok(image)
    }

    /// Decode an image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to decode image: {}", e)))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            data: rgba.into_raw(),
            width,
            height,
        })
    }

    /// Load an image, substituting a checkerboard when the file is missing or
    /// unreadable so rendering can go on
    pub fn from_file_or_checkerboard<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path.as_ref()).unwrap_or_else(|e| {
            log::warn!("{}; using a checkerboard texture instead", e);
            Self::checkerboard(CHECKERBOARD_SIZE, [255, 0, 255, 255], [32, 32, 32, 255])
        })
    }

    /// Two-color checkerboard with 8 pixel squares
    pub fn checkerboard(size: u32, a: [u8; 4], b: [u8; 4]) -> Self {
        let mut data = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let even = ((x / CHECKER_SQUARE) + (y / CHECKER_SQUARE)) % 2 == 0;
                data.extend_from_slice(if even { &a } else { &b });
            }
        }

        Self {
            data,
            width: size,
            height: size,
        }
    }

    /// Flip rows so the first row is the bottom of the image, as OpenGL
    /// texture coordinates expect
    pub fn flipped_vertically(mut self) -> Self {
        let row = (self.width * 4) as usize;
        if row > 0 {
            let rows: Vec<Vec<u8>> = self.data.chunks(row).rev().map(<[u8]>::to_vec).collect();
            self.data = rows.concat();
        }
        self
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::RgbaImage::from_raw(width, height, pixels.to_vec())
            .unwrap()
            .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_checkerboard() {
        let img = ImageData::checkerboard(16, [255, 255, 255, 255], [0, 0, 0, 255]);
        assert_eq!(img.size_bytes(), 16 * 16 * 4);

        let pixel = |x: usize, y: usize| &img.data[(y * 16 + x) * 4..(y * 16 + x) * 4 + 4];
        assert_eq!(pixel(0, 0), &[255, 255, 255, 255]);
        assert_eq!(pixel(8, 0), &[0, 0, 0, 255]);
        assert_eq!(pixel(8, 8), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_from_bytes() {
        let pixels = [255, 0, 0, 255, 0, 255, 0, 255];
        let img = ImageData::from_bytes(&encode_png(2, 1, &pixels)).unwrap();

        assert_eq!((img.width, img.height), (2, 1));
        assert_eq!(img.data, pixels);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("red.png");
        std::fs::write(&path, encode_png(1, 1, &[255, 0, 0, 255])).unwrap();

        let img = ImageData::from_file(&path).unwrap();
        assert_eq!(img.data, vec![255, 0, 0, 255]);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");

        assert!(matches!(ImageData::from_file(&missing), Err(AssetError::NotFound(_))));

        let img = ImageData::from_file_or_checkerboard(&missing);
        assert_eq!((img.width, img.height), (CHECKERBOARD_SIZE, CHECKERBOARD_SIZE));
    }

    #[test]
    fn test_corrupt_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"not a png").unwrap();

        match ImageData::from_file(&path) {
            Err(AssetError::LoadFailed(reason)) => assert!(reason.contains("corrupt.png"), "{}", reason),
            other => panic!("expected a load failure, got {:?}", other.map(|img| img.width)),
        }
        assert_eq!(ImageData::from_file_or_checkerboard(&path).width, CHECKERBOARD_SIZE);
    }

    #[test]
    fn test_flip_vertically() {
        let img = ImageData {
            data: vec![1, 1, 1, 1, 2, 2, 2, 2],
            width: 1,
            height: 2,
        };
        assert_eq!(img.flipped_vertically().data, vec![2, 2, 2, 2, 1, 1, 1, 1]);
    }
}
