//! Drag-and-drop ingestion of atlas image/metadata pairs.

use std::path::{Path, PathBuf};

use crate::atlas::{AtlasDocument, FrameRect};
use crate::error::{Error, Result};
use crate::texture::{self, TextureData};

/// Dropped paths must end in this literal, case-sensitive suffix to be
/// treated as an atlas image.
pub const IMAGE_SUFFIX: &str = ".png";

/// Everything the application knows about the currently loaded atlas.
#[derive(Debug, Default)]
pub struct AtlasState {
    /// Decoded atlas image; replaced wholesale on every accepted drop.
    pub texture: Option<TextureData>,
    /// Parsed metadata; the authoritative source at export time.
    pub document: AtlasDocument,
    /// Frame rectangles mirrored from the document for preview rendering.
    pub frames: Vec<FrameRect>,
}

impl AtlasState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Process one batch of dropped paths in list order.
///
/// Every path is echoed to stdout; only paths ending in [`IMAGE_SUFFIX`]
/// trigger ingestion. A metadata failure (unreadable, malformed, or no
/// derivable sidecar path) logs an error and abandons the rest of the
/// batch, keeping whatever texture was already decoded on screen.
///
/// Returns `true` if the displayed content changed.
pub fn ingest_dropped(state: &mut AtlasState, paths: &[PathBuf]) -> bool {
    let mut changed = false;

    for path in paths {
        println!("{}", path.display());
        if !path.to_string_lossy().ends_with(IMAGE_SUFFIX) {
            continue;
        }
        changed = true;

        state.texture = None;
        match texture::load_texture_file(path) {
            Ok(data) => state.texture = Some(data),
            Err(e) => tracing::error!("Error loading image {}: {}", path.display(), e),
        }

        state.frames.clear();
        if let Err(e) = load_metadata(state, path) {
            tracing::error!("Error loading file: {}", e);
            state.document = AtlasDocument::default();
            break;
        }
    }

    changed
}

fn load_metadata(state: &mut AtlasState, image_path: &Path) -> Result<()> {
    let metadata_path = sidecar_xml_path(image_path)?;
    let document = AtlasDocument::load(&metadata_path)?;

    state.frames = document.frame_rects();
    state.document = document;
    tracing::info!(
        "Loaded {} with {} frames",
        image_path.display(),
        state.frames.len()
    );
    Ok(())
}

/// Derive the sidecar metadata path by swapping a 3-character extension
/// for `xml`. Paths without such an extension are rejected outright.
pub fn sidecar_xml_path(image_path: &Path) -> Result<PathBuf> {
    match image_path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.len() == 3 => Ok(image_path.with_extension("xml")),
        _ => Err(Error::SidecarPath(image_path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidecar_path_swaps_three_character_extension() {
        assert_eq!(
            sidecar_xml_path(Path::new("sprites/hero.png")).unwrap(),
            PathBuf::from("sprites/hero.xml")
        );
        assert_eq!(
            sidecar_xml_path(Path::new("hero.jpg")).unwrap(),
            PathBuf::from("hero.xml")
        );
    }

    #[test]
    fn sidecar_path_rejects_unrecognized_extensions() {
        assert!(sidecar_xml_path(Path::new("hero")).is_err());
        assert!(sidecar_xml_path(Path::new("hero.jpeg")).is_err());
        assert!(sidecar_xml_path(Path::new(".png")).is_err());
    }
}
