//! # Terrain Canvas
//!
//! The symbolic grid handed from the terrain generator to the tile
//! materializer.
//!
//! ## Text Form
//!
//! ```text
//! ' '  blank ground
//! '.'  blob center (transient, see below)
//! 'o'  blob rim / water
//! ```
//!
//! The generator writes [`Symbol::Center`] on a seed cell and immediately
//! overwrites it with [`Symbol::Rim`] when the seed's own disc is stamped, so
//! generated canvases only ever contain blank and rim cells. Hand-built
//! canvases may still contain centers.

use std::fmt;
use std::str::FromStr;

use bytemuck::NoUninit;
use mexis_core::Grid;

use crate::error::{WorldGenError, WorldGenResult};

/// A canvas cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, NoUninit)]
#[repr(u8)]
pub enum Symbol {
    /// Untouched ground.
    #[default]
    Blank = b' ',
    /// Seed point of a blob.
    Center = b'.',
    /// Inside a stamped disc.
    Rim = b'o',
}

impl Symbol {
    /// Text form of the symbol.
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self as u8 as char
    }

    /// Parses a text symbol.
    #[inline]
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            ' ' => Some(Self::Blank),
            '.' => Some(Self::Center),
            'o' => Some(Self::Rim),
            _ => None,
        }
    }

    /// Returns true for symbols that materialize as water.
    #[inline]
    #[must_use]
    pub const fn is_water(self) -> bool {
        matches!(self, Self::Center | Self::Rim)
    }
}

/// Rejects zero dimensions and dimensions too large to allocate.
///
/// Sized against the `u32` density grid, the widest grid a generation pass
/// allocates.
pub(crate) fn check_dimensions(width: usize, height: usize) -> WorldGenResult<()> {
    if width == 0 || height == 0 || Grid::<u32>::cell_count(width, height).is_none() {
        return Err(WorldGenError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Symbolic terrain grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    cells: Grid<Symbol>,
}

impl Canvas {
    /// Creates an all-blank canvas.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::InvalidDimensions`] if either side is zero or
    /// the grid is too large to allocate.
    pub fn blank(width: usize, height: usize) -> WorldGenResult<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            cells: Grid::new(width, height, Symbol::Blank),
        })
    }

    /// Wraps an existing symbol grid.
    ///
    /// # Errors
    ///
    /// Returns [`WorldGenError::InvalidDimensions`] if the grid is empty.
    pub fn from_grid(cells: Grid<Symbol>) -> WorldGenResult<Self> {
        check_dimensions(cells.width(), cells.height())?;
        Ok(Self { cells })
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.cells.width()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.cells.height()
    }

    /// Symbol at `(x, y)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Symbol> {
        self.cells.get(x, y).copied()
    }

    #[inline]
    pub(crate) fn set(&mut self, x: usize, y: usize, symbol: Symbol) {
        self.cells.set(x, y, symbol);
    }

    /// The underlying symbol grid.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid<Symbol> {
        &self.cells
    }

    /// Number of cells holding `symbol`.
    #[must_use]
    pub fn count(&self, symbol: Symbol) -> usize {
        self.cells.count(|&s| s == symbol)
    }

    /// Raw symbol bytes, row-major. Equal bytes mean identical canvases.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.cells.as_bytes()
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for symbol in row {
                write!(f, "{}", symbol.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Canvas {
    type Err = WorldGenError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row, line) in text.lines().enumerate() {
            let before = cells.len();
            for (col, c) in line.chars().enumerate() {
                let symbol = Symbol::from_char(c).ok_or_else(|| {
                    WorldGenError::InvalidCanvas(format!("unknown symbol {c:?} at ({col}, {row})"))
                })?;
                cells.push(symbol);
            }
            let row_width = cells.len() - before;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => {
                    return Err(WorldGenError::InvalidCanvas(format!(
                        "row {row} has {row_width} cells, expected {w}"
                    )));
                }
                Some(_) => {}
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        let grid = Grid::from_vec(width, height, cells)
            .ok_or_else(|| WorldGenError::InvalidCanvas("ragged canvas".into()))?;
        Self::from_grid(grid)
    }
}
