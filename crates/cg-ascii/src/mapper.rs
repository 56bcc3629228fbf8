use cg_core::color::grayscale;
use cg_core::error::ArtError;
use cg_core::gradient::GlyphLut;
use cg_core::grid::{ArtGrid, Cell};
use cg_core::traits::Progress;
use image::RgbImage;

/// Convert an image into an [`ArtGrid`], one cell per pixel.
///
/// For each pixel the glyph is `lut.glyph(grayscale(pixel))` and the colour
/// is the untouched source RGB. Progress advances once per row by `width`.
///
/// # Errors
/// [`ArtError::EmptyImage`] if the image has a zero dimension.
///
/// # Example
/// ```
/// use cg_ascii::mapper::map_image;
/// use cg_core::gradient::GlyphLut;
/// use cg_core::traits::NoProgress;
/// use image::{Rgb, RgbImage};
///
/// let img = RgbImage::from_pixel(4, 3, Rgb([255, 0, 0]));
/// let grid = map_image(&img, &GlyphLut::default(), &mut NoProgress).unwrap();
/// assert_eq!((grid.width(), grid.height()), (4, 3));
/// assert_eq!(grid.get(3, 2).fg, (255, 0, 0));
/// ```
pub fn map_image(
    image: &RgbImage,
    lut: &GlyphLut,
    progress: &mut dyn Progress,
) -> Result<ArtGrid, ArtError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ArtError::EmptyImage { width, height });
    }

    let grid = ArtGrid::from_fn(width, height, |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        if x + 1 == width {
            progress.advance(u64::from(width));
        }
        Cell {
            ch: lut.glyph(grayscale(r, g, b)),
            fg: (r, g, b),
        }
    });

    log::debug!("Grille {width}×{height} construite ({} cellules)", grid.cells().len());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cg_core::gradient::GLYPH_GRADIENT;
    use cg_core::traits::NoProgress;
    use image::Rgb;

    struct Counter {
        calls: usize,
        total: u64,
    }

    impl Progress for Counter {
        fn advance(&mut self, n: u64) {
            self.calls += 1;
            self.total += n;
        }
    }

    /// Every pixel gets a distinct colour so that a transposed or shifted
    /// index would be caught.
    fn gradient_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                (x * 37 % 256) as u8,
                (y * 53 % 256) as u8,
                ((x + y) * 11 % 256) as u8,
            ])
        })
    }

    #[test]
    fn grid_dimensions_match_image() {
        for (w, h) in [(1, 1), (1, 7), (7, 1), (13, 5)] {
            let grid =
                map_image(&gradient_image(w, h), &GlyphLut::default(), &mut NoProgress).unwrap();
            assert_eq!((grid.width(), grid.height()), (w, h));
            assert_eq!(grid.rows().count(), h as usize);
            assert!(grid.rows().all(|row| row.len() == w as usize));
        }
    }

    #[test]
    fn every_cell_matches_its_pixel() {
        let img = gradient_image(11, 9);
        let lut = GlyphLut::default();
        let chars: Vec<char> = GLYPH_GRADIENT.chars().collect();
        let grid = map_image(&img, &lut, &mut NoProgress).unwrap();
        for y in 0..img.height() {
            for x in 0..img.width() {
                let [r, g, b] = img.get_pixel(x, y).0;
                let expected = chars[usize::from(grayscale(r, g, b)) % chars.len()];
                let cell = grid.get(x, y);
                assert_eq!(cell.ch, expected, "glyph at ({x}, {y})");
                assert_eq!(cell.fg, (r, g, b), "colour at ({x}, {y})");
            }
        }
    }

    #[test]
    fn solid_red_2x2() {
        let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
        let grid = map_image(&img, &GlyphLut::default(), &mut NoProgress).unwrap();
        let expected = Cell {
            ch: GLYPH_GRADIENT.chars().nth(76 % 256).unwrap(),
            fg: (255, 0, 0),
        };
        assert_eq!(grid.cells().len(), 4);
        assert!(grid.cells().iter().all(|c| *c == expected));
    }

    #[test]
    fn mapping_is_deterministic() {
        let img = gradient_image(17, 6);
        let lut = GlyphLut::default();
        let a = map_image(&img, &lut, &mut NoProgress).unwrap();
        let b = map_image(&img, &lut, &mut NoProgress).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_gradient_wraps_by_modulo() {
        let lut = GlyphLut::new("ab").unwrap();
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgb([0, 0, 0])
            } else {
                Rgb([255, 255, 255])
            }
        });
        let grid = map_image(&img, &lut, &mut NoProgress).unwrap();
        // 255 % 2 == 1
        assert_eq!(grid.get(0, 0).ch, 'a');
        assert_eq!(grid.get(1, 0).ch, 'b');
    }

    #[test]
    fn progress_reaches_pixel_count_row_by_row() {
        let mut counter = Counter { calls: 0, total: 0 };
        map_image(&gradient_image(8, 5), &GlyphLut::default(), &mut counter).unwrap();
        assert_eq!(counter.calls, 5);
        assert_eq!(counter.total, 40);
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let img = RgbImage::new(0, 4);
        let err = map_image(&img, &GlyphLut::default(), &mut NoProgress).unwrap_err();
        assert!(matches!(err, ArtError::EmptyImage { width: 0, height: 4 }));
    }
}
