//! # Grid Arena
//!
//! A rectangular array stored as one flat, row-major allocation.

use std::mem::size_of;

use bytemuck::NoUninit;

/// A `width x height` array of cells backed by a single `Vec`.
///
/// Cell `(x, y)` lives at index `y * width + x`. All accessors are checked:
/// coordinates outside the grid yield `None` (or `false` for writes) instead
/// of panicking.
///
/// # Example
///
/// ```rust
/// use mexis_core::Grid;
///
/// let grid = Grid::from_fn(3, 2, |x, y| x + 10 * y);
/// assert_eq!(grid.get(2, 1), Some(&12));
/// assert_eq!(grid.rows().count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Cell storage (indexed as `[y * width + x]`).
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `fill`.
    ///
    /// # Panics
    ///
    /// Panics if [`Grid::cell_count`] rejects the dimensions. Callers that
    /// accept untrusted dimensions should check with it first.
    #[must_use]
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        let len = Self::cell_count(width, height).expect("grid dimensions exceed the address space");
        Self {
            width,
            height,
            cells: vec![fill; len],
        }
    }
}

impl<T> Grid<T> {
    /// Returns `width * height`, or `None` if the cell count or the size of
    /// the backing allocation in bytes would exceed `isize::MAX`.
    #[inline]
    #[must_use]
    pub const fn cell_count(width: usize, height: usize) -> Option<usize> {
        let Some(len) = width.checked_mul(height) else {
            return None;
        };
        let cell_size = if size_of::<T>() == 0 { 1 } else { size_of::<T>() };
        match len.checked_mul(cell_size) {
            Some(bytes) if bytes <= isize::MAX.unsigned_abs() => Some(len),
            _ => None,
        }
    }

    /// Creates a grid by calling `f(x, y)` for every cell in row-major order.
    ///
    /// # Panics
    ///
    /// Panics if [`Grid::cell_count`] rejects the dimensions.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = Self::cell_count(width, height).expect("grid dimensions exceed the address space");
        let mut cells = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Builds a grid from row-major cells.
    ///
    /// Returns `None` if `cells.len()` is not `width * height`.
    #[must_use]
    pub fn from_vec(width: usize, height: usize, cells: Vec<T>) -> Option<Self> {
        (Self::cell_count(width, height) == Some(cells.len())).then_some(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(x, y)`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub const fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Gets the cell at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// Returns false (and writes nothing) if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// All cells in row-major order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, T> {
        // A zero-width grid has no cells, so any non-zero chunk size yields nothing.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Iterates over `(x, y, cell)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, cell))
    }

    /// Builds a grid of the same shape by mapping every cell.
    #[must_use]
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Counts cells matching a predicate.
    #[must_use]
    pub fn count(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.cells.iter().filter(|cell| predicate(cell)).count()
    }
}

impl<T: NoUninit> Grid<T> {
    /// Raw bytes of the cell storage, row-major.
    ///
    /// Two grids with equal dimensions and equal bytes hold identical cells.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}
