//! Image decoding
//!
//! Images are read from disk and decoded with the `image` crate, resized to
//! the size they are drawn at, and only then uploaded as textures. Everything
//! up to the upload works without a window.

use std::fs;
use std::path::{Path, PathBuf};
use image::{imageops::FilterType, RgbaImage};
use macroquad::prelude::{FilterMode, Texture2D};

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// File could not be read
    Io { path: PathBuf, error: std::io::Error },
    /// File is not a decodable image
    Decode { path: PathBuf, error: image::ImageError },
    /// Image is larger than a texture can hold
    TooLarge { width: u32, height: u32 },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io { path, error } => write!(f, "I/O error reading {}: {}", path.display(), error),
            AssetError::Decode { path, error } => write!(f, "cannot decode {}: {}", path.display(), error),
            AssetError::TooLarge { width, height } => {
                write!(f, "image too large for a texture: {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io { error, .. } => Some(error),
            AssetError::Decode { error, .. } => Some(error),
            AssetError::TooLarge { .. } => None,
        }
    }
}

/// Read and decode an image, smoothly resizing it to `size` when given
pub fn load_rgba(path: &Path, size: Option<(u32, u32)>) -> Result<RgbaImage, AssetError> {
    let bytes = fs::read(path).map_err(|error| AssetError::Io {
        path: path.to_path_buf(),
        error,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|error| AssetError::Decode {
        path: path.to_path_buf(),
        error,
    })?;

    let rgba = img.to_rgba8();
    match size {
        Some((w, h)) if (w, h) != rgba.dimensions() => {
            Ok(image::imageops::resize(&rgba, w.max(1), h.max(1), FilterType::Triangle))
        }
        _ => Ok(rgba),
    }
}

/// Make every pixel of color `key` fully transparent
pub fn apply_color_key(img: &mut RgbaImage, key: [u8; 3]) {
    for pixel in img.pixels_mut() {
        if pixel[0] == key[0] && pixel[1] == key[1] && pixel[2] == key[2] {
            pixel[3] = 0;
        }
    }
}

/// Upload a decoded image. Needs the macroquad context.
pub fn to_texture(img: &RgbaImage) -> Result<Texture2D, AssetError> {
    let (width, height) = img.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(AssetError::TooLarge { width, height });
    };
    let texture = Texture2D::from_rgba8(w, h, img.as_raw());
    texture.set_filter(FilterMode::Linear);
    Ok(texture)
}
