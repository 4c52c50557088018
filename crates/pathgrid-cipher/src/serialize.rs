//! Conversion between text and character grids.

use pathgrid_core::{Grid, GridError, GridSize, Path};

/// Writes `text` into a new grid, the `i`-th character going to the `i`-th
/// position visited by `path`.
///
/// # Errors
///
/// Returns [`GridError::LengthMismatch`] unless `text` has exactly
/// `size.cells()` characters. Callers pad short text themselves.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::text_to_grid;
/// use pathgrid_core::{GridSize, Origin, Path, PathFamily};
///
/// let path = Path::new(PathFamily::SpiralClockwiseInward, Origin::BottomRight);
/// let grid = text_to_grid(GridSize::new(3, 3)?, "ABCDEFGHI", path)?;
/// assert_eq!(grid.to_string(), "EFG\nDIH\nCBA");
/// # Ok::<(), pathgrid_core::GridError>(())
/// ```
pub fn text_to_grid(size: GridSize, text: &str, path: Path) -> Result<Grid<char>, GridError> {
    let actual = text.chars().count();
    if actual != size.cells() {
        return Err(GridError::LengthMismatch {
            expected: size.cells(),
            actual,
        });
    }

    let mut grid = Grid::filled(size, ' ');
    for (pos, c) in path.walk(size).zip(text.chars()) {
        grid[pos] = c;
    }
    Ok(grid)
}

/// Reads every cell of `grid` in the order visited by `path`.
#[must_use]
pub fn grid_to_text(grid: &Grid<char>, path: Path) -> String {
    grid.iter_path(path).collect()
}

#[cfg(test)]
mod tests {
    use pathgrid_core::{Origin, PathFamily};
    use proptest::prelude::*;

    use super::*;

    fn size(rows: usize, cols: usize) -> GridSize {
        GridSize::new(rows, cols).unwrap()
    }

    #[test]
    fn test_spiral_write_then_read() {
        let path = Path::new(PathFamily::SpiralClockwiseInward, Origin::BottomRight);
        let grid = text_to_grid(size(3, 3), "ABCDEFGHI", path).unwrap();
        assert_eq!(grid.to_string(), "EFG\nDIH\nCBA");
        assert_eq!(grid_to_text(&grid, path), "ABCDEFGHI");
        assert_eq!(
            grid_to_text(&grid, Path::new(PathFamily::Rows, Origin::TopLeft)),
            "EFGDIHCBA"
        );
    }

    #[test]
    fn test_length_mismatch() {
        let path = Path::new(PathFamily::Rows, Origin::TopLeft);
        assert_eq!(
            text_to_grid(size(2, 2), "ABC", path),
            Err(GridError::LengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            text_to_grid(size(2, 2), "ABCDE", path),
            Err(GridError::LengthMismatch {
                expected: 4,
                actual: 5
            })
        );
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let path = Path::new(PathFamily::Columns, Origin::TopLeft);
        let grid = text_to_grid(size(2, 2), "ÅÄÖA", path).unwrap();
        assert_eq!(grid.to_string(), "ÅÖ\nÄA");
    }

    proptest! {
        #[test]
        fn test_same_path_round_trip(
            rows in 1usize..8,
            cols in 1usize..8,
            seed in proptest::collection::vec(proptest::char::range('A', 'Z'), 64),
        ) {
            let size = size(rows, cols);
            let text: String = seed.into_iter().take(size.cells()).collect();
            for path in Path::ALL {
                let grid = text_to_grid(size, &text, path).unwrap();
                prop_assert_eq!(grid_to_text(&grid, path), text.clone());
            }
        }
    }
}
