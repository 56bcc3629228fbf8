use std::path::PathBuf;

use cg_core::color::parse_rgb;
use cg_core::config::{FontSource, OutputConfig, RenderConfig, spacing};
use cg_core::error::ArtError;
use clap::Parser;

/// chromaglyph — convertit une image en art ASCII coloré.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: PathBuf,

    /// Police TrueType/OpenType. Défaut : police monospace embarquée.
    #[arg(long)]
    pub font: Option<PathBuf>,

    /// Taille de police en pixels par em. (défaut : 12)
    #[arg(long)]
    pub font_size: Option<f32>,

    /// Espacement horizontal supplémentaire entre glyphes. (défaut : 0)
    #[arg(long, allow_negative_numbers = true)]
    pub width_spacing: Option<i64>,

    /// Espacement vertical supplémentaire entre lignes. (défaut : 0)
    #[arg(long, allow_negative_numbers = true)]
    pub height_spacing: Option<i64>,

    /// Couleur de fond au format R,G,B. (défaut : 0,0,0)
    #[arg(long)]
    pub bg_color: Option<String>,

    /// Afficher aussi l'art coloré dans la console.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Ne pas produire d'image.
    #[arg(long, default_value_t = false)]
    pub no_image: bool,

    /// Dossier de sortie. (défaut : output_files)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Fichier de configuration TOML, surchargé par les options ci-dessus.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Pas de barre de progression.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of file or default configuration.
    ///
    /// # Errors
    /// [`ArtError::InvalidConfig`] for a malformed colour or negative spacing.
    pub fn apply(
        &self,
        render: &mut RenderConfig,
        output: &mut OutputConfig,
    ) -> Result<(), ArtError> {
        if let Some(ref path) = self.font {
            render.font = FontSource::File(path.clone());
        }
        if let Some(size) = self.font_size {
            render.font_size = size;
        }
        if let Some(ws) = self.width_spacing {
            render.width_spacing = spacing("width_spacing", ws)?;
        }
        if let Some(hs) = self.height_spacing {
            render.height_spacing = spacing("height_spacing", hs)?;
        }
        if let Some(ref color) = self.bg_color {
            render.bg_color = parse_rgb(color).map_err(ArtError::InvalidConfig)?;
        }
        if let Some(ref dir) = self.output_dir {
            output.output_dir.clone_from(dir);
        }
        if self.print {
            output.print_console = true;
        }
        if self.no_image {
            output.save_image = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chromaglyph").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let cli = parse(&["--image", "in/cat.png"]);
        let mut render = RenderConfig::default();
        let mut output = OutputConfig::default();
        cli.apply(&mut render, &mut output).unwrap();
        assert_eq!(render, RenderConfig::default());
        assert_eq!(output, OutputConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let cli = parse(&[
            "--image",
            "in/cat.png",
            "--font",
            "mono.ttf",
            "--font-size",
            "20",
            "--width-spacing",
            "2",
            "--height-spacing",
            "3",
            "--bg-color",
            "1,2,3",
            "--print",
            "--no-image",
            "--output-dir",
            "out",
        ]);
        let mut render = RenderConfig::default();
        let mut output = OutputConfig::default();
        cli.apply(&mut render, &mut output).unwrap();
        assert_eq!(render.font, FontSource::File(PathBuf::from("mono.ttf")));
        assert!((render.font_size - 20.0).abs() < f32::EPSILON);
        assert_eq!((render.width_spacing, render.height_spacing), (2, 3));
        assert_eq!(render.bg_color, (1, 2, 3));
        assert!(output.print_console);
        assert!(!output.save_image);
        assert_eq!(output.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn negative_spacing_is_rejected() {
        let cli = parse(&["--image", "a.png", "--width-spacing", "-4"]);
        let err = cli
            .apply(&mut RenderConfig::default(), &mut OutputConfig::default())
            .unwrap_err();
        assert!(matches!(err, ArtError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_color_is_rejected() {
        let cli = parse(&["--image", "a.png", "--bg-color", "0,0"]);
        let err = cli
            .apply(&mut RenderConfig::default(), &mut OutputConfig::default())
            .unwrap_err();
        assert!(matches!(err, ArtError::InvalidConfig(_)));
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["chromaglyph"]).is_err());
    }
}
