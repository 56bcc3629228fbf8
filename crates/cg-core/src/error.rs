use std::path::PathBuf;

use thiserror::Error;

/// Type-erased source error. Keeps `cg-core` independent of the decoder crate.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Every way a conversion can fail. All variants are terminal for the
/// current conversion.
#[derive(Error, Debug)]
pub enum ArtError {
    /// Source image missing, unreadable or not decodable as RGB.
    #[error("Impossible de décoder l'image {path}")]
    Decode {
        /// Path of the source image.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: BoxedError,
    },

    /// Source image has a zero dimension.
    #[error("Image vide : {width}×{height}")]
    EmptyImage {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },

    /// Font file missing, malformed, or requested size unusable.
    #[error("Police inutilisable ({origin}) : {reason}")]
    FontLoad {
        /// Path of the font, or `<embedded>`.
        origin: String,
        /// What went wrong.
        reason: String,
    },

    /// Malformed caller-supplied option.
    #[error("Configuration invalide : {0}")]
    InvalidConfig(String),

    /// Output image could not be written.
    #[error("Écriture impossible vers {path}")]
    ImageWrite {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O or encoder error.
        #[source]
        source: BoxedError,
    },
}

impl ArtError {
    /// Wrap a decoder failure for `path`.
    pub fn decode(
        path: impl Into<PathBuf>,
        source: impl Into<BoxedError>,
    ) -> Self {
        Self::Decode {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Wrap a write failure for `path`.
    pub fn image_write(
        path: impl Into<PathBuf>,
        source: impl Into<BoxedError>,
    ) -> Self {
        Self::ImageWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_keeps_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = ArtError::decode("in/cat.png", io);
        assert!(err.to_string().contains("in/cat.png"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "missing");
    }

    #[test]
    fn empty_image_reports_dimensions() {
        let err = ArtError::EmptyImage {
            width: 0,
            height: 7,
        };
        assert!(err.to_string().contains("0×7"));
    }
}
