/// Image export for chromaglyph.
///
/// Loads a font, rasterizes an `ArtGrid` onto an RGB canvas and writes it
/// as PNG.
pub mod font;
pub mod rasterizer;
pub mod writer;
