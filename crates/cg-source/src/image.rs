use std::path::Path;

use cg_core::error::ArtError;
use image::RgbImage;

/// Charge une image depuis le disque et la convertit en RGB8.
///
/// The alpha channel, if any, is dropped. Zero-sized images are rejected.
///
/// # Errors
/// [`ArtError::Decode`] if the file is missing or not a decodable image,
/// [`ArtError::EmptyImage`] if a dimension is zero.
///
/// # Example
/// ```no_run
/// use cg_source::image::load_rgb;
/// use std::path::Path;
/// let img = load_rgb(Path::new("photos/cat.png")).unwrap();
/// ```
pub fn load_rgb(path: &Path) -> Result<RgbImage, ArtError> {
    let img = image::open(path).map_err(|e| ArtError::decode(path, e))?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ArtError::EmptyImage { width, height });
    }
    log::info!("Image chargée : {} ({width}×{height})", path.display());
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba, RgbaImage};

    #[test]
    fn missing_file_is_decode_error() {
        let err = load_rgb(Path::new("no/such/image.png")).unwrap_err();
        assert!(matches!(err, ArtError::Decode { .. }));
    }

    #[test]
    fn garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.png");
        std::fs::write(&path, b"definitely not a png").unwrap();
        let err = load_rgb(&path).unwrap_err();
        assert!(matches!(err, ArtError::Decode { .. }));
    }

    #[test]
    fn rgba_is_flattened_to_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgba.png");
        RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 40]))
            .save(&path)
            .unwrap();
        let rgb = load_rgb(&path).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(2, 1), &Rgb([10, 20, 30]));
    }
}
