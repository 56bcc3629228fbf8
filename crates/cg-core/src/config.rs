use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::parse_rgb;
use crate::error::ArtError;

/// Origine de la police utilisée en mode image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FontSource {
    /// Police monospace embarquée dans le binaire.
    #[default]
    Embedded,
    /// TrueType/OpenType file on disk.
    File(PathBuf),
}

/// Paramètres de rendu du mode image.
///
/// # Example
/// ```
/// use cg_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.font_size, 12.0);
/// assert_eq!(config.bg_color, (0, 0, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Font used to rasterize glyphs.
    pub font: FontSource,
    /// Font size in pixels per em.
    pub font_size: f32,
    /// Canvas background.
    pub bg_color: (u8, u8, u8),
    /// Extra pixels between columns.
    pub width_spacing: u32,
    /// Extra pixels between rows.
    pub height_spacing: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: FontSource::Embedded,
            font_size: 12.0,
            bg_color: (0, 0, 0),
            width_spacing: 0,
            height_spacing: 0,
        }
    }
}

/// Où et comment la conversion produit ses sorties.
///
/// # Example
/// ```
/// use cg_core::config::OutputConfig;
/// let out = OutputConfig::default();
/// assert!(out.save_image);
/// assert!(!out.print_console);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputConfig {
    /// Directory receiving `<stem>_output.png`. Created if missing.
    pub output_dir: PathBuf,
    /// Rasterize the grid into a PNG.
    pub save_image: bool,
    /// Print the coloured grid on stdout.
    pub print_console: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output_files"),
            save_image: true,
            print_console: false,
        }
    }
}

/// Convert a signed spacing option into pixels.
///
/// # Errors
/// Returns [`ArtError::InvalidConfig`] for negative values.
///
/// # Example
/// ```
/// use cg_core::config::spacing;
/// assert_eq!(spacing("width_spacing", 3).unwrap(), 3);
/// assert!(spacing("width_spacing", -1).is_err());
/// ```
pub fn spacing(name: &str, value: i64) -> Result<u32, ArtError> {
    u32::try_from(value).map_err(|_| {
        ArtError::InvalidConfig(format!("{name} doit être positif ou nul : {value}"))
    })
}

/// Structure TOML intermédiaire, toutes les valeurs optionnelles.
#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    render: RenderSection,
    #[serde(default)]
    output: OutputSection,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RenderSection {
    font: Option<PathBuf>,
    font_size: Option<f32>,
    bg_color: Option<String>,
    width_spacing: Option<i64>,
    height_spacing: Option<i64>,
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct OutputSection {
    output_dir: Option<PathBuf>,
    save_image: Option<bool>,
    print_console: Option<bool>,
}

/// Parse a TOML document and merge it over the defaults.
///
/// # Errors
/// Returns [`ArtError::InvalidConfig`] on TOML syntax errors, unknown keys,
/// malformed colours or negative spacing.
///
/// # Example
/// ```
/// use cg_core::config::parse_config;
/// let (render, output) = parse_config("[render]\nbg_color = \"10,20,30\"\n").unwrap();
/// assert_eq!(render.bg_color, (10, 20, 30));
/// assert!(output.save_image);
/// ```
pub fn parse_config(content: &str) -> Result<(RenderConfig, OutputConfig), ArtError> {
    let file: ConfigFile = toml::from_str(content)
        .map_err(|e| ArtError::InvalidConfig(format!("TOML : {e}")))?;

    let mut render = RenderConfig::default();
    let r = file.render;
    if let Some(v) = r.font {
        render.font = FontSource::File(v);
    }
    if let Some(v) = r.font_size {
        render.font_size = v;
    }
    if let Some(v) = r.bg_color {
        render.bg_color = parse_rgb(&v).map_err(ArtError::InvalidConfig)?;
    }
    if let Some(v) = r.width_spacing {
        render.width_spacing = spacing("width_spacing", v)?;
    }
    if let Some(v) = r.height_spacing {
        render.height_spacing = spacing("height_spacing", v)?;
    }

    let mut output = OutputConfig::default();
    let o = file.output;
    if let Some(v) = o.output_dir {
        output.output_dir = v;
    }
    if let Some(v) = o.save_image {
        output.save_image = v;
    }
    if let Some(v) = o.print_console {
        output.print_console = v;
    }

    Ok((render, output))
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns [`ArtError::InvalidConfig`] if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use cg_core::config::load_config;
/// use std::path::Path;
/// let (render, output) = load_config(Path::new("chromaglyph.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<(RenderConfig, OutputConfig), ArtError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ArtError::InvalidConfig(format!("Impossible de lire {} : {e}", path.display()))
    })?;
    let parsed = parse_config(&content)?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(parsed)
}
