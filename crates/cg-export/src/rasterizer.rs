use std::collections::HashMap;

use ab_glyph::{Font, ScaleFont, point};
use cg_core::config::RenderConfig;
use cg_core::error::ArtError;
use cg_core::gradient::GLYPH_GRADIENT;
use cg_core::grid::ArtGrid;
use cg_core::traits::Progress;
use image::{Rgb, RgbImage};

use crate::font::GlyphFont;

/// Taille uniforme d'une cellule, mesurée sur tout le gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMetrics {
    /// Widest ink box among the measured glyphs.
    pub width: u32,
    /// Tallest ink box among the measured glyphs, plus two pixels of leading.
    pub height: u32,
}

/// Coverage bitmap of one glyph, tight around its ink.
///
/// `left`/`top` place the bitmap relative to the glyph anchor: the middle of
/// the advance horizontally, the midpoint between ascender and descender
/// vertically. The anchor depends on the font only, so every glyph keeps its
/// position relative to the shared baseline.
struct GlyphBitmap {
    width: u32,
    height: u32,
    left: i64,
    top: i64,
    coverage: Vec<u8>,
}

impl GlyphBitmap {
    fn rasterize(font: &GlyphFont, ch: char) -> Self {
        let f = font.font();
        let scaled = f.as_scaled(font.scale());
        let gid = f.glyph_id(ch);
        if gid.0 == 0 && ch != '\0' {
            log::warn!("Glyphe '{ch}' absent de la police {}", font.origin());
        }

        let advance = scaled.h_advance(gid);
        // y grows downwards; ascent > 0, descent < 0.
        let baseline = (scaled.ascent() + scaled.descent()) / 2.0;
        let glyph = gid.with_scale_and_position(font.scale(), point(-advance / 2.0, baseline));
        let Some(outline) = f.outline_glyph(glyph) else {
            // Whitespace: no ink, but it still occupies its advance.
            return Self {
                width: advance.ceil().max(0.0) as u32,
                height: 0,
                left: 0,
                top: 0,
                coverage: Vec::new(),
            };
        };

        let bounds = outline.px_bounds();
        let width = bounds.width().max(0.0) as u32;
        let height = bounds.height().max(0.0) as u32;
        let mut coverage = vec![0u8; width as usize * height as usize];
        outline.draw(|x, y, v| {
            if x < width && y < height {
                coverage[(y * width + x) as usize] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        });

        Self {
            width,
            height,
            left: bounds.min.x as i64,
            top: bounds.min.y as i64,
            coverage,
        }
    }

    fn has_ink(&self) -> bool {
        !self.coverage.is_empty()
    }
}

/// Plus grande boîte d'encre : largeur max, hauteur max + 2 px d'interligne.
fn cell_metrics<'a>(bitmaps: impl IntoIterator<Item = &'a GlyphBitmap>) -> CellMetrics {
    bitmaps
        .into_iter()
        .fold(CellMetrics { width: 0, height: 0 }, |acc, bmp| CellMetrics {
            width: acc.width.max(bmp.width),
            height: acc.height.max(bmp.height + 2),
        })
}

/// Mesure la boîte englobante maximale sur `glyphs`.
///
/// Width is the widest ink box (or advance, for blank glyphs); height is the
/// tallest ink box plus two pixels. [`Rasterizer::new`] sizes its cells with
/// the same measurement.
///
/// # Example
/// ```
/// use cg_core::config::FontSource;
/// use cg_export::font::GlyphFont;
/// use cg_export::rasterizer::measure_glyphs;
///
/// let font = GlyphFont::load(&FontSource::Embedded, 12.0).unwrap();
/// let m = measure_glyphs(&font, &['i', 'W']);
/// assert!(m.width > 0 && m.height > 2);
/// ```
#[must_use]
pub fn measure_glyphs(font: &GlyphFont, glyphs: &[char]) -> CellMetrics {
    let bitmaps: Vec<GlyphBitmap> = glyphs
        .iter()
        .map(|&ch| GlyphBitmap::rasterize(font, ch))
        .collect();
    cell_metrics(&bitmaps)
}

/// Rasterise une `ArtGrid` sur un canevas RGB.
///
/// The glyph atlas is built once at construction. Cells share one uniform
/// size so the grid stays aligned whatever glyphs appear in it.
///
/// Layout: the centre of cell `(x, y)` sits at
/// `(w + x*(w + ws), h + y*(h + hs))`, and the canvas measures
/// `w + W*(w + ws)` by `h + H*(h + hs)`. The extra `w`/`h` puts a half-cell
/// margin on the top-left and right/bottom edges; this margin is intentional.
pub struct Rasterizer {
    metrics: CellMetrics,
    width_spacing: u32,
    height_spacing: u32,
    bg: Rgb<u8>,
    atlas: HashMap<char, GlyphBitmap>,
}

impl Rasterizer {
    /// Build the atlas over `glyphs` and take the cell size from them.
    ///
    /// # Example
    /// ```
    /// use cg_core::config::{FontSource, RenderConfig};
    /// use cg_export::font::GlyphFont;
    /// use cg_export::rasterizer::Rasterizer;
    ///
    /// let config = RenderConfig::default();
    /// let font = GlyphFont::load(&FontSource::Embedded, config.font_size).unwrap();
    /// let raster = Rasterizer::new(&font, &['a', 'b'], &config);
    /// let m = raster.metrics();
    /// assert_eq!(raster.canvas_size(1, 1).unwrap(), (2 * m.width, 2 * m.height));
    /// ```
    #[must_use]
    pub fn new(font: &GlyphFont, glyphs: &[char], config: &RenderConfig) -> Self {
        let mut atlas = HashMap::with_capacity(glyphs.len());
        for &ch in glyphs {
            atlas
                .entry(ch)
                .or_insert_with(|| GlyphBitmap::rasterize(font, ch));
        }
        let metrics = cell_metrics(atlas.values());
        log::debug!(
            "Cellule {}×{} px ({} glyphes en cache)",
            metrics.width,
            metrics.height,
            atlas.len()
        );

        let (r, g, b) = config.bg_color;
        Self {
            metrics,
            width_spacing: config.width_spacing,
            height_spacing: config.height_spacing,
            bg: Rgb([r, g, b]),
            atlas,
        }
    }

    /// Uniform cell size.
    #[must_use]
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Canvas size for a `grid_w` × `grid_h` grid.
    ///
    /// # Errors
    /// [`ArtError::InvalidConfig`] if the canvas would not fit in `u32`.
    pub fn canvas_size(&self, grid_w: u32, grid_h: u32) -> Result<(u32, u32), ArtError> {
        let axis = |cell: u32, spacing: u32, count: u32| {
            cell.checked_add(spacing)
                .and_then(|pitch| pitch.checked_mul(count))
                .and_then(|span| span.checked_add(cell))
        };
        match (
            axis(self.metrics.width, self.width_spacing, grid_w),
            axis(self.metrics.height, self.height_spacing, grid_h),
        ) {
            (Some(w), Some(h)) => Ok((w, h)),
            _ => Err(ArtError::InvalidConfig(format!(
                "canevas trop grand pour une grille {grid_w}×{grid_h}"
            ))),
        }
    }

    /// Pixel centre of cell `(x, y)`.
    #[must_use]
    pub fn cell_center(&self, x: u32, y: u32) -> (i64, i64) {
        let m = self.metrics;
        (
            i64::from(m.width)
                + i64::from(x) * (i64::from(m.width) + i64::from(self.width_spacing)),
            i64::from(m.height)
                + i64::from(y) * (i64::from(m.height) + i64::from(self.height_spacing)),
        )
    }

    /// Rend la grille : fond uni, puis chaque glyphe ancré au centre de sa cellule.
    ///
    /// Progress advances once per row by the grid width.
    ///
    /// # Errors
    /// [`ArtError::InvalidConfig`] if the canvas would overflow.
    pub fn render(
        &self,
        grid: &ArtGrid,
        progress: &mut dyn Progress,
    ) -> Result<RgbImage, ArtError> {
        let (canvas_w, canvas_h) = self.canvas_size(grid.width(), grid.height())?;
        log::debug!("Canevas {canvas_w}×{canvas_h}");
        let mut canvas = RgbImage::from_pixel(canvas_w, canvas_h, self.bg);

        for (y, row) in (0u32..).zip(grid.rows()) {
            for (x, cell) in (0u32..).zip(row) {
                match self.atlas.get(&cell.ch) {
                    Some(bmp) if bmp.has_ink() => {
                        let center = self.cell_center(x, y);
                        blit(&mut canvas, bmp, center, cell.fg);
                    }
                    Some(_) => {}
                    None => {
                        log::warn!("Glyphe '{}' hors atlas, cellule ({x}, {y}) ignorée", cell.ch);
                    }
                }
            }
            progress.advance(u64::from(grid.width()));
        }

        Ok(canvas)
    }
}

/// Alpha-blend `bmp` in colour `fg`, its anchor on `center`.
fn blit(canvas: &mut RgbImage, bmp: &GlyphBitmap, center: (i64, i64), fg: (u8, u8, u8)) {
    let left = center.0 + bmp.left;
    let top = center.1 + bmp.top;
    let (cw, ch) = (i64::from(canvas.width()), i64::from(canvas.height()));

    for by in 0..bmp.height {
        let py = top + i64::from(by);
        if py < 0 || py >= ch {
            continue;
        }
        for bx in 0..bmp.width {
            let px = left + i64::from(bx);
            if px < 0 || px >= cw {
                continue;
            }
            let alpha = bmp.coverage[(by * bmp.width + bx) as usize];
            if alpha == 0 {
                continue;
            }
            let a = f32::from(alpha) / 255.0;
            let pixel = canvas.get_pixel_mut(px as u32, py as u32);
            let mix = |src: u8, dst: u8| {
                (f32::from(src) * a + f32::from(dst) * (1.0 - a)).round() as u8
            };
            pixel.0 = [
                mix(fg.0, pixel.0[0]),
                mix(fg.1, pixel.0[1]),
                mix(fg.2, pixel.0[2]),
            ];
        }
    }
}

/// Charge la police de `config` et rend la grille avec le gradient complet.
///
/// # Errors
/// [`ArtError::FontLoad`] if the font cannot be loaded,
/// [`ArtError::InvalidConfig`] if the canvas would overflow.
pub fn render_art_image(
    grid: &ArtGrid,
    config: &RenderConfig,
    progress: &mut dyn Progress,
) -> Result<RgbImage, ArtError> {
    let font = GlyphFont::load(&config.font, config.font_size)?;
    let glyphs: Vec<char> = GLYPH_GRADIENT.chars().collect();
    let rasterizer = Rasterizer::new(&font, &glyphs, config);
    rasterizer.render(grid, progress)
}
