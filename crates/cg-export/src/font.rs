use ab_glyph::{Font, FontVec, PxScale};
use cg_core::config::FontSource;
use cg_core::error::ArtError;

/// DejaVu Sans Mono, utilisée quand aucune police n'est fournie.
pub const EMBEDDED_FONT: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Police chargée et mise à l'échelle.
pub struct GlyphFont {
    font: FontVec,
    scale: PxScale,
    origin: String,
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFont")
            .field("origin", &self.origin)
            .field("scale", &self.scale)
            .finish_non_exhaustive()
    }
}

impl GlyphFont {
    /// Load `source` at `size` pixels per em.
    ///
    /// The font file is read in one go and closed before parsing.
    ///
    /// # Errors
    /// [`ArtError::FontLoad`] if the file cannot be read, is not a valid
    /// TrueType/OpenType font, or `size` is not a positive finite number.
    ///
    /// # Example
    /// ```
    /// use cg_core::config::FontSource;
    /// use cg_export::font::GlyphFont;
    /// let font = GlyphFont::load(&FontSource::Embedded, 12.0).unwrap();
    /// assert!(font.scale().y > 12.0);
    /// ```
    pub fn load(source: &FontSource, size: f32) -> Result<Self, ArtError> {
        match source {
            FontSource::Embedded => Self::from_bytes(EMBEDDED_FONT.to_vec(), size, "<embedded>"),
            FontSource::File(path) => {
                let origin = path.display().to_string();
                let data = std::fs::read(path).map_err(|e| ArtError::FontLoad {
                    origin: origin.clone(),
                    reason: e.to_string(),
                })?;
                Self::from_bytes(data, size, &origin)
            }
        }
    }

    /// Parse raw font bytes.
    ///
    /// # Errors
    /// Same as [`GlyphFont::load`].
    pub fn from_bytes(data: Vec<u8>, size: f32, origin: &str) -> Result<Self, ArtError> {
        let fail = |reason: String| ArtError::FontLoad {
            origin: origin.to_string(),
            reason,
        };

        if !size.is_finite() || size <= 0.0 {
            return Err(fail(format!("taille invalide : {size}")));
        }
        let font = FontVec::try_from_vec(data).map_err(|e| fail(e.to_string()))?;
        let units_per_em = font
            .units_per_em()
            .ok_or_else(|| fail("units_per_em absent".to_string()))?;

        // PxScale counts ascent-to-descent; size is given per em.
        let scale = PxScale::from(size * font.height_unscaled() / units_per_em);
        log::info!("Police chargée : {origin} ({size} px/em)");

        Ok(Self {
            font,
            scale,
            origin: origin.to_string(),
        })
    }

    /// Parsed font.
    #[must_use]
    pub fn font(&self) -> &FontVec {
        &self.font
    }

    /// Scale applied to every glyph.
    #[must_use]
    pub fn scale(&self) -> PxScale {
        self.scale
    }

    /// Where the font came from, for messages.
    #[must_use]
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
