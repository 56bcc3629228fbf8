/// Une cellule de la grille : un glyphe et sa couleur RGB d'origine.
///
/// # Example
/// ```
/// use cg_core::grid::Cell;
/// let cell = Cell { ch: '@', fg: (255, 0, 0) };
/// assert_eq!(cell.fg.0, 255);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Glyph to draw.
    pub ch: char,
    /// Foreground colour, taken from the source pixel.
    pub fg: (u8, u8, u8),
}

/// Grille d'art ASCII colorée, row-major, `[y][x]`.
///
/// Immutable once built: cells are only reachable through shared accessors.
///
/// # Example
/// ```
/// use cg_core::grid::{ArtGrid, Cell};
/// let cell = Cell { ch: '#', fg: (1, 2, 3) };
/// let grid = ArtGrid::from_cells(2, 1, vec![cell; 2]).unwrap();
/// assert_eq!(grid.get(1, 0), &cell);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtGrid {
    cells: Vec<Cell>,
    width: u32,
    height: u32,
}

impl ArtGrid {
    /// Build a grid from row-major cells.
    ///
    /// Returns `None` if `cells.len() != width * height`.
    #[must_use]
    pub fn from_cells(width: u32, height: u32, cells: Vec<Cell>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a grid by calling `cell(x, y)` for every position, row-major.
    ///
    /// # Example
    /// ```
    /// use cg_core::grid::{ArtGrid, Cell};
    /// let grid = ArtGrid::from_fn(3, 2, |x, y| Cell { ch: '#', fg: (x as u8, y as u8, 0) });
    /// assert_eq!(grid.get(2, 1).fg, (2, 1, 0));
    /// ```
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut cell: impl FnMut(u32, u32) -> Cell) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                cells.push(cell(x, y));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    /// Width in cells (image columns).
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells (image rows).
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cell at column `x`, row `y`.
    ///
    /// # Panics
    /// Panics if `(x, y)` lies outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> &Cell {
        assert!(x < self.width && y < self.height, "cell out of bounds");
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Rows, top to bottom; each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks_exact panics on 0; a zero-width grid has no rows anyway.
        self.cells.chunks_exact(self.width.max(1) as usize)
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
