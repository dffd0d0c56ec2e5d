//! PNG export of rendered canvases

use crate::io::error::{FernError, Result};
use crate::spatial::Canvas;
use std::path::Path;

/// Export the canvas as a PNG image, rotated to stand upright
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png(
    canvas: &Canvas,
    foreground: [u8; 3],
    background: [u8; 3],
    output_path: &Path,
) -> Result<()> {
    let img = canvas.render(foreground, background);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| FernError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| FernError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
