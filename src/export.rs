//! Export of the rescaled atlas image and metadata.

use std::path::Path;

use crate::loader::AtlasState;
use crate::texture;

/// Fixed output names, written to the current working directory and
/// overwritten unconditionally.
pub const OUTPUT_IMAGE: &str = "output.png";
pub const OUTPUT_METADATA: &str = "output.xml";

/// What the export managed to write. Both steps are always attempted;
/// failures are logged and non-fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOutcome {
    pub image_written: bool,
    pub metadata_written: bool,
}

/// Write `output.png` and `output.xml` into the current working directory.
pub fn export_scaled(state: &mut AtlasState, scale: f32) -> ExportOutcome {
    export_scaled_to(Path::new("."), state, scale)
}

/// The export transform rooted at an explicit directory.
pub fn export_scaled_to(dir: &Path, state: &mut AtlasState, scale: f32) -> ExportOutcome {
    let image_written = write_image(&dir.join(OUTPUT_IMAGE), state, scale);
    let metadata_written = write_metadata(&dir.join(OUTPUT_METADATA), state, scale);
    ExportOutcome {
        image_written,
        metadata_written,
    }
}

/// Resample the loaded texture by `scale` and encode it as PNG.
fn write_image(path: &Path, state: &AtlasState, scale: f32) -> bool {
    let resized = state
        .texture
        .as_ref()
        .and_then(|data| texture::rescale_texture(data, scale));

    match resized {
        Some(image) => match image.save(path) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to save PNG file: {}", e);
                false
            }
        },
        None => {
            tracing::error!("Failed to save PNG file: no atlas image is loaded");
            false
        }
    }
}

/// Rescale the stored document and serialize it.
///
/// The document is the authoritative source at save time and is mutated in
/// place, so exporting again without a re-drop compounds the scaling.
fn write_metadata(path: &Path, state: &mut AtlasState, scale: f32) -> bool {
    state.document.rescale(scale);
    match state.document.save(path) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!("Failed to save XML file: {}", e);
            false
        }
    }
}
