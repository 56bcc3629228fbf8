use std::path::Path;

use anyhow::{Context, Result};
use cg_ascii::mapper::map_image;
use cg_core::config::{OutputConfig, RenderConfig, load_config};
use cg_core::gradient::GlyphLut;
use cg_core::traits::{LogProgress, Progress};
use cg_export::rasterizer::render_art_image;
use cg_export::writer::{output_path, write_png};
use cg_render::console::print_to_stdout;
use cg_source::image::load_rgb;
use clap::Parser;

pub mod cli;
pub mod progress;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let (mut render, mut output) = match cli.config {
        Some(ref path) => load_config(path)?,
        None => (RenderConfig::default(), OutputConfig::default()),
    };
    cli.apply(&mut render, &mut output)?;

    if !output.save_image && !output.print_console {
        log::warn!("--no-image sans --print : rien à produire.");
    }

    run(&cli.image, &render, &output, cli.quiet)
}

/// Decode, map, then run each enabled renderer on the same grid.
fn run(
    image_path: &Path,
    render: &RenderConfig,
    output: &OutputConfig,
    quiet: bool,
) -> Result<()> {
    let img = load_rgb(image_path)?;
    let total = u64::from(img.width()) * u64::from(img.height());

    log::info!("Étape 1 : conversion en glyphes");
    let grid = {
        let mut progress = reporter("Converting Image To Colored Ascii", total, quiet);
        map_image(&img, &GlyphLut::default(), progress.as_mut())?
    };
    drop(img);

    if output.save_image {
        log::info!("Étape 2 : rasterisation");
        let canvas = {
            let mut progress = reporter("Creating Image", total, quiet);
            render_art_image(&grid, render, progress.as_mut())?
        };
        let path = output_path(&output.output_dir, image_path);
        write_png(&canvas, &path)?;
        eprintln!("Done: ASCII image saved as {}", path.display());
    }

    if output.print_console {
        print_to_stdout(&grid).context("Écriture console impossible")?;
    }

    Ok(())
}

/// Terminal bar, or log lines only when `--quiet`.
fn reporter(label: &'static str, total: u64, quiet: bool) -> Box<dyn Progress> {
    if quiet {
        Box::new(LogProgress::new(label, total))
    } else {
        Box::new(progress::ProgressBar::stderr(label, total))
    }
}
