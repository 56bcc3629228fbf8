/// Image decoding for chromaglyph.

pub mod image;
