/// Console rendering for chromaglyph.
///
/// Writes an `ArtGrid` as truecolor ANSI text.
pub mod console;
