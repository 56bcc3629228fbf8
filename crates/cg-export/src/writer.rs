use std::path::{Path, PathBuf};

use cg_core::error::ArtError;
use image::{ImageFormat, RgbImage};

/// `<output_dir>/<stem>_output.png`, `stem` being the input file name
/// without extension.
///
/// # Example
/// ```
/// use cg_export::writer::output_path;
/// use std::path::{Path, PathBuf};
/// assert_eq!(
///     output_path(Path::new("out"), Path::new("photos/cat.jpg")),
///     PathBuf::from("out/cat_output.png")
/// );
/// ```
#[must_use]
pub fn output_path(output_dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "image".into(), |s| s.to_string_lossy());
    output_dir.join(format!("{stem}_output.png"))
}

/// Écrit le canevas en PNG.
///
/// Missing parent directories are created. An existing file at `path` is
/// replaced; a warning is logged when that happens.
///
/// # Errors
/// [`ArtError::ImageWrite`] if the directory cannot be created or the file
/// cannot be encoded or written.
pub fn write_png(canvas: &RgbImage, path: &Path) -> Result<(), ArtError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ArtError::image_write(path, e))?;
    }
    if path.exists() {
        log::warn!("{} existe déjà, écrasement", path.display());
    }
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ArtError::image_write(path, e))?;
    log::info!(
        "Image écrite : {} ({}×{})",
        path.display(),
        canvas.width(),
        canvas.height()
    );
    Ok(())
}
