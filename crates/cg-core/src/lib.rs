/// Shared types, configuration and error taxonomy for chromaglyph.
///
/// Every other crate of the workspace builds on the grid, gradient and
/// progress abstractions defined here.

pub mod color;
pub mod config;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod traits;

pub use config::{FontSource, OutputConfig, RenderConfig};
pub use error::ArtError;
pub use gradient::GLYPH_GRADIENT;
pub use grid::{ArtGrid, Cell};
pub use traits::{LogProgress, NoProgress, Progress};
