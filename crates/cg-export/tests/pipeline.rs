use cg_ascii::mapper::map_image;
use cg_core::config::{FontSource, RenderConfig};
use cg_core::gradient::{GLYPH_GRADIENT, GlyphLut};
use cg_core::traits::NoProgress;
use cg_export::font::GlyphFont;
use cg_export::rasterizer::{Rasterizer, render_art_image};
use cg_export::writer::{output_path, write_png};
use cg_render::console::styled_lines;
use cg_source::image::load_rgb;
use image::{Rgb, RgbImage};

#[test]
fn image_to_png_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.png");
    RgbImage::from_fn(6, 4, |x, y| Rgb([(x * 40) as u8, (y * 60) as u8, 128]))
        .save(&input)
        .unwrap();

    let img = load_rgb(&input).unwrap();
    let grid = map_image(&img, &GlyphLut::default(), &mut NoProgress).unwrap();
    assert_eq!((grid.width(), grid.height()), (6, 4));

    let config = RenderConfig {
        width_spacing: 1,
        height_spacing: 2,
        bg_color: (20, 20, 20),
        ..RenderConfig::default()
    };
    let canvas = render_art_image(&grid, &config, &mut NoProgress).unwrap();

    let font = GlyphFont::load(&FontSource::Embedded, config.font_size).unwrap();
    let glyphs: Vec<char> = GLYPH_GRADIENT.chars().collect();
    let expected = Rasterizer::new(&font, &glyphs, &config)
        .canvas_size(6, 4)
        .unwrap();
    assert_eq!(canvas.dimensions(), expected);

    let out = output_path(&dir.path().join("output_files"), &input);
    assert!(out.ends_with("output_files/sample_output.png"));
    write_png(&canvas, &out).unwrap();
    assert_eq!(image::open(&out).unwrap().to_rgb8(), canvas);
}

#[test]
fn red_square_console_and_image() {
    let img = RgbImage::from_pixel(2, 2, Rgb([255, 0, 0]));
    let grid = map_image(&img, &GlyphLut::default(), &mut NoProgress).unwrap();

    let lines = styled_lines(&grid);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "\x1b[38;2;255;0;0m\\\x1b[0m".repeat(2));

    let canvas = render_art_image(&grid, &RenderConfig::default(), &mut NoProgress).unwrap();
    let red_ink = canvas.pixels().filter(|p| p.0[0] > 0).count();
    assert!(red_ink > 0);
    assert!(canvas.pixels().all(|p| p.0[1] == 0 && p.0[2] == 0));
}
