//! Atlas image loading and export-time resampling.

use std::path::Path;

use image::{RgbaImage, imageops};

use crate::error::Result;

/// Decoded atlas image data (RGBA8).
#[derive(Debug, Clone)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// The pixel data as an owned `RgbaImage`.
    ///
    /// Returns `None` only if the pixel buffer does not match the recorded
    /// dimensions (never the case for textures produced by this module).
    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

/// Decode an image file into RGBA texture data.
pub fn load_texture_file(path: &Path) -> Result<TextureData> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Resample a texture to `round(width * factor)` by `round(height * factor)`.
pub fn rescale_texture(data: &TextureData, factor: f32) -> Option<RgbaImage> {
    let width = (data.width as f32 * factor).round() as u32;
    let height = (data.height as f32 * factor).round() as u32;
    data.to_image()
        .map(|image| imageops::resize(&image, width, height, imageops::FilterType::Lanczos3))
}
