/// Gradient de glyphes, du plus sombre (espace) au plus clair (`0`).
///
/// 256 caractères. Indexé par `grayscale % len`, pas proportionnellement.
pub const GLYPH_GRADIENT: &str = r#"   ...,,,___---~~~```'''"""^^^***:::;;;!!!???<<<>>>+++((())){{{}}}[[[]]]///\\\|||111iiilllffftttjjjCCCUUULLLIIIVVV77TTJJYY222SSSZZZvvvssszzzxxxrrrcccuuuoooeeeaaapppqqqyyygggnnnwwwmmmbbbdddkkkhhhDDDOOOQQQAAAFFFHHH334455XX66GGKKEEPPRR88BB99NNWWMM&&%%##@@@000"#;

/// Lookup table from a grayscale value to its glyph.
///
/// Built once from [`GLYPH_GRADIENT`]; O(1) per pixel.
///
/// # Example
/// ```
/// use cg_core::gradient::GlyphLut;
/// let lut = GlyphLut::default();
/// assert_eq!(lut.glyph(0), ' ');
/// assert_eq!(lut.glyph(255), '0');
/// ```
pub struct GlyphLut {
    glyphs: Vec<char>,
}

impl GlyphLut {
    /// Build a LUT over an arbitrary gradient.
    ///
    /// Returns `None` for an empty gradient.
    #[must_use]
    pub fn new(gradient: &str) -> Option<Self> {
        let glyphs: Vec<char> = gradient.chars().collect();
        if glyphs.is_empty() {
            return None;
        }
        Some(Self { glyphs })
    }

    /// Number of glyphs in the gradient.
    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: empty gradients are rejected by [`GlyphLut::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Index of the glyph chosen for `gray`: `gray mod len`.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, gray: u8) -> usize {
        usize::from(gray) % self.glyphs.len()
    }

    /// Glyph chosen for `gray`.
    #[inline(always)]
    #[must_use]
    pub fn glyph(&self, gray: u8) -> char {
        self.glyphs[self.index(gray)]
    }

    /// All glyphs, in gradient order.
    #[must_use]
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

impl Default for GlyphLut {
    fn default() -> Self {
        Self {
            glyphs: GLYPH_GRADIENT.chars().collect(),
        }
    }
}
