//! Cell positions and grid dimensions.

use std::fmt::{self, Display};

use crate::GridError;

/// A cell coordinate, 0-indexed from the top-left corner.
///
/// # Examples
///
/// ```
/// use pathgrid_core::Position;
///
/// let pos = Position::new(2, 1);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 1);
/// assert_eq!(pos.to_string(), "(2, 1)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    #[inline]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    #[inline]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

/// Validated grid dimensions.
///
/// Both dimensions are at least 1, so every grid has at least one cell.
///
/// # Examples
///
/// ```
/// use pathgrid_core::{GridError, GridSize};
///
/// let size = GridSize::new(3, 4)?;
/// assert_eq!(size.cells(), 12);
///
/// assert!(matches!(
///     GridSize::new(0, 4),
///     Err(GridError::InvalidDimensions { rows: 0, cols: 4 })
/// ));
/// # Ok::<(), GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

impl GridSize {
    /// Creates grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimensions`] if either dimension is zero
    /// or the cell count does not fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of rows.
    #[must_use]
    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    #[inline]
    pub const fn cells(self) -> usize {
        self.rows * self.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Row-major offset of `pos` in a dense cell array.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid.
    #[must_use]
    #[inline]
    pub fn index_of(self, pos: Position) -> usize {
        assert!(self.contains(pos), "{pos} is outside a {self} grid");
        pos.row * self.cols + pos.col
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[must_use]
    #[inline]
    pub const fn position_of(self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(self) -> impl ExactSizeIterator<Item = Position> + Clone {
        (0..self.cells()).map(move |i| self.position_of(i))
    }
}

impl Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            GridSize::new(0, 3),
            Err(GridError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            GridSize::new(3, 0),
            Err(GridError::InvalidDimensions { rows: 3, cols: 0 })
        );
        assert!(GridSize::new(1, 1).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_cell_count() {
        assert_eq!(
            GridSize::new(usize::MAX, 2),
            Err(GridError::InvalidDimensions {
                rows: usize::MAX,
                cols: 2
            })
        );
        assert_eq!(GridSize::new(usize::MAX, 1).map(GridSize::cells), Ok(usize::MAX));
    }

    #[test]
    fn test_index_round_trip() {
        let size = GridSize::new(3, 4).unwrap();
        for (i, pos) in size.positions().enumerate() {
            assert_eq!(size.index_of(pos), i);
            assert_eq!(size.position_of(i), pos);
        }
        assert_eq!(size.position_of(5), Position::new(1, 1));
    }

    #[test]
    #[should_panic(expected = "(3, 0) is outside a 3x4 grid")]
    fn test_index_of_outside_panics() {
        let size = GridSize::new(3, 4).unwrap();
        let _ = size.index_of(Position::new(3, 0));
    }
}
