//! Shared test helpers.

use std::path::{Path, PathBuf};

/// One-frame Sparrow atlas used by the end-to-end scenario.
pub const SAMPLE_ATLAS_XML: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TextureAtlas imagePath="atlas.png" width="100" height="50">
	<SubTexture name="idle0000" x="10" y="5" width="20" height="10" frameX="0" frameY="0" frameWidth="20" frameHeight="10"/>
</TextureAtlas>
"#;

/// Write a `width`x`height` opaque PNG and its sidecar XML into `dir`.
/// Returns the image path (the one a user would drop).
#[allow(dead_code)]
pub fn write_atlas_pair(dir: &Path, name: &str, width: u32, height: u32, xml: &str) -> PathBuf {
    let image_path = dir.join(format!("{name}.png"));
    let image = image::RgbaImage::from_pixel(width, height, image::Rgba([120, 40, 200, 255]));
    image.save(&image_path).expect("failed to write test PNG");
    std::fs::write(dir.join(format!("{name}.xml")), xml).expect("failed to write test XML");
    image_path
}
