use std::fmt;
use std::io::{self, Write};

use cg_core::grid::{ArtGrid, Cell};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::Command;

/// Formate une ligne de cellules : `ESC[38;2;R;G;Bm<glyph>ESC[0m` par glyphe.
///
/// Every glyph carries its own colour prefix and is followed by a reset, so
/// no style leaks into the next glyph or past the end of the line.
///
/// # Errors
/// Only propagates errors from the underlying `fmt::Write`.
///
/// # Example
/// ```
/// use cg_core::grid::Cell;
/// use cg_render::console::write_row;
///
/// let mut line = String::new();
/// write_row(&mut line, &[Cell { ch: '#', fg: (255, 0, 0) }]).unwrap();
/// assert_eq!(line, "\x1b[38;2;255;0;0m#\x1b[0m");
/// ```
pub fn write_row(out: &mut impl fmt::Write, row: &[Cell]) -> fmt::Result {
    for cell in row {
        let (r, g, b) = cell.fg;
        SetForegroundColor(Color::Rgb { r, g, b }).write_ansi(out)?;
        out.write_char(cell.ch)?;
        ResetColor.write_ansi(out)?;
    }
    Ok(())
}

/// One styled string per grid row, top to bottom, without line terminators.
///
/// # Example
/// ```
/// use cg_core::grid::{ArtGrid, Cell};
/// use cg_render::console::styled_lines;
///
/// let grid = ArtGrid::from_cells(1, 2, vec![Cell { ch: 'a', fg: (0, 0, 0) }; 2]).unwrap();
/// assert_eq!(styled_lines(&grid).len(), 2);
/// ```
#[must_use]
pub fn styled_lines(grid: &ArtGrid) -> Vec<String> {
    grid.rows()
        .map(|row| {
            // ~20 bytes of escapes per glyph
            let mut line = String::with_capacity(row.len() * 24);
            // Writing into a String cannot fail.
            let _ = write_row(&mut line, row);
            line
        })
        .collect()
}

/// Écrit la grille sur un flux, une ligne terminée par `\n` par rangée.
///
/// Each line is exactly what [`write_row`] produces.
///
/// # Errors
/// Returns any I/O error raised by `out`.
pub fn print_grid(out: &mut impl Write, grid: &ArtGrid) -> io::Result<()> {
    let mut line = String::with_capacity(grid.width() as usize * 24 + 1);
    for row in grid.rows() {
        line.clear();
        write_row(&mut line, row).map_err(io::Error::other)?;
        line.push('\n');
        out.write_all(line.as_bytes())?;
    }
    out.flush()?;
    log::debug!("{} lignes écrites sur la console", grid.height());
    Ok(())
}

/// Print the grid on stdout through a buffered, locked handle.
///
/// # Errors
/// Returns any I/O error raised while writing to stdout.
pub fn print_to_stdout(grid: &ArtGrid) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    print_grid(&mut out, grid)
}
