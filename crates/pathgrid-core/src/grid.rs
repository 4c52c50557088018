//! Dense rectangular grid storage.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::{GridSize, Path, Position};

/// A rectangular grid of cells, stored row-major in a single vector.
///
/// The dimensions are fixed at construction; cell contents are mutable.
///
/// # Examples
///
/// ```
/// use pathgrid_core::{Grid, GridSize, Position};
///
/// let mut grid = Grid::filled(GridSize::new(2, 3)?, '.');
/// grid[Position::new(1, 2)] = 'X';
/// assert_eq!(grid.to_string(), "...\n..X");
/// # Ok::<(), pathgrid_core::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: GridSize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    #[must_use]
    pub fn filled(size: GridSize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size.cells()],
        }
    }
}

impl<T> Grid<T> {
    /// Creates a grid from cells in row-major order.
    ///
    /// Returns `None` if `cells` does not hold exactly `size.cells()` values.
    #[must_use]
    pub fn from_row_major(size: GridSize, cells: Vec<T>) -> Option<Self> {
        (cells.len() == size.cells()).then_some(Self { size, cells })
    }

    /// Returns the grid dimensions.
    #[must_use]
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if it lies outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.size
            .contains(pos)
            .then(|| &self.cells[self.size.index_of(pos)])
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> {
        self.cells.chunks_exact(self.size.cols())
    }

    /// Iterates over the cells in the order `path` visits them.
    pub fn iter_path(&self, path: Path) -> impl ExactSizeIterator<Item = &T> {
        path.walk(self.size).map(|pos| &self[pos])
    }

    /// Consumes the grid and returns its cells in row-major order.
    #[must_use]
    pub fn into_row_major(self) -> Vec<T> {
        self.cells
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        &self.cells[self.size.index_of(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        &mut self.cells[self.size.index_of(pos)]
    }
}

impl Display for Grid<char> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Origin, PathFamily};

    #[test]
    fn test_filled_and_index() {
        let size = GridSize::new(2, 2).unwrap();
        let mut grid = Grid::filled(size, 0);
        grid[Position::new(0, 1)] = 7;
        assert_eq!(grid[Position::new(0, 1)], 7);
        assert_eq!(grid.get(Position::new(1, 1)), Some(&0));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.into_row_major(), [0, 7, 0, 0]);
    }

    #[test]
    fn test_from_row_major_checks_length() {
        let size = GridSize::new(2, 3).unwrap();
        assert!(Grid::from_row_major(size, vec!['a'; 5]).is_none());
        let grid = Grid::from_row_major(size, "abcdef".chars().collect()).unwrap();
        let rows: Vec<String> = grid.rows().map(|row| row.iter().collect()).collect();
        assert_eq!(rows, ["abc", "def"]);
    }

    #[test]
    fn test_iter_path() {
        let size = GridSize::new(2, 3).unwrap();
        let grid = Grid::from_row_major(size, "abcdef".chars().collect()).unwrap();
        let read: String = grid
            .iter_path(Path::new(PathFamily::Columns, Origin::TopLeft))
            .collect();
        assert_eq!(read, "adbecf");
    }
}
