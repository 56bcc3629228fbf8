/// Glyph mapping engine for chromaglyph.
///
/// Converts decoded RGB images into coloured glyph grids.
pub mod mapper;
