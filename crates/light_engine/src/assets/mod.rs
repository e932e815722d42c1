//! Asset loading
//!
//! The demos load nothing but textures, straight from disk.

pub mod image_loader;

pub use image_loader::ImageData;

use thiserror::Error;

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file does not exist
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset exists but could not be decoded
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),
}
