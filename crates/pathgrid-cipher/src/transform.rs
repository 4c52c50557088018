//! Chunked grid transposition for text of any length.
//!
//! Text is cut into blocks of `rows * cols` characters. Each block is written
//! into a fresh grid along the write path and read back along the read path;
//! the results are concatenated. The final block is padded with a filler
//! character. Blocks never share state.

use pathgrid_core::{Grid, GridError, GridSize, Path};

use crate::{grid_to_text, text_to_grid};

/// A grid transposition with fixed geometry, write path and read path.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::Transposer;
/// use pathgrid_core::{GridSize, Origin, Path, PathFamily};
///
/// let size = GridSize::new(2, 3)?;
/// let rows = Path::new(PathFamily::Rows, Origin::TopLeft);
/// let columns = Path::new(PathFamily::Columns, Origin::TopLeft);
///
/// // Write row by row, read column by column.
/// let transposer = Transposer::new(size, rows, columns);
/// assert_eq!(transposer.transform("ABCDEFGH"), "ADBECFG_H___");
///
/// let transposer = transposer.with_filler('x');
/// assert_eq!(transposer.transform("ABCDEFGH"), "ADBECFGxHxxx");
/// # Ok::<(), pathgrid_core::GridError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transposer {
    size: GridSize,
    write: Path,
    read: Path,
    filler: char,
}

impl Transposer {
    /// Filler used to pad the final block unless configured otherwise.
    pub const DEFAULT_FILLER: char = '_';

    /// Creates a transposer writing along `write` and reading along `read`.
    #[must_use]
    pub fn new(size: GridSize, write: Path, read: Path) -> Self {
        Self {
            size,
            write,
            read,
            filler: Self::DEFAULT_FILLER,
        }
    }

    /// Sets the character used to pad the final block.
    #[must_use]
    pub fn with_filler(mut self, filler: char) -> Self {
        self.filler = filler;
        self
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the path used to write text into the grid.
    #[must_use]
    pub fn write_path(&self) -> Path {
        self.write
    }

    /// Returns the path used to read text out of the grid.
    #[must_use]
    pub fn read_path(&self) -> Path {
        self.read
    }

    /// Returns the padding character.
    #[must_use]
    pub fn filler(&self) -> char {
        self.filler
    }

    /// Returns the transposer that undoes this one on full blocks.
    ///
    /// Writing along `read` and reading along `write` inverts the permutation.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            write: self.read,
            read: self.write,
            ..*self
        }
    }

    /// Returns `true` if the transform leaves every full block unchanged.
    ///
    /// Distinct paths can still visit the cells in the same order, e.g. rows
    /// and snake rows on a single-row grid.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.write == self.read || self.write.walk(self.size).eq(self.read.walk(self.size))
    }

    /// Splits `text` into blocks of `rows * cols` characters, padding the
    /// final block with the filler.
    ///
    /// Empty text yields no blocks.
    pub fn blocks(&self, text: &str) -> impl Iterator<Item = String> + use<> {
        let block_len = self.size.cells();
        let filler = self.filler;
        let chars: Vec<char> = text.chars().collect();
        let count = chars.len().div_ceil(block_len);
        (0..count).map(move |i| {
            let chunk = &chars[i * block_len..chars.len().min((i + 1) * block_len)];
            let mut block: String = chunk.iter().collect();
            if chunk.len() < block_len {
                log::trace!(
                    "padding final block with {} x {filler:?}",
                    block_len - chunk.len()
                );
                block.extend(std::iter::repeat_n(filler, block_len - chunk.len()));
            }
            block
        })
    }

    /// Writes each block of `text` into its own grid along the write path.
    pub fn write_grids(&self, text: &str) -> impl Iterator<Item = Grid<char>> + use<> {
        let (size, write) = (self.size, self.write);
        self.blocks(text).map(move |block| match text_to_grid(size, &block, write) {
            Ok(grid) => grid,
            Err(err) => unreachable!("block is padded to the grid size: {err}"),
        })
    }

    /// Transforms `text` block by block.
    ///
    /// The output length is `text` rounded up to a whole number of blocks;
    /// empty text yields an empty string.
    #[must_use]
    pub fn transform(&self, text: &str) -> String {
        self.write_grids(text)
            .map(|grid| grid_to_text(&grid, self.read))
            .collect()
    }
}

/// Transforms `text` through a `rows` x `cols` grid, writing along `write`
/// and reading along `read`, padding the last block with `filler`.
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`] if either dimension is zero.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::transform_text_with_grid;
/// use pathgrid_core::{Origin, Path, PathFamily};
///
/// let snake = Path::new(PathFamily::SnakeRows, Origin::TopLeft);
/// let rows = Path::new(PathFamily::Rows, Origin::TopLeft);
/// let out = transform_text_with_grid(2, 2, "ABCDE", snake, rows, '*')?;
/// assert_eq!(out, "ABDCE***");
/// # Ok::<(), pathgrid_core::GridError>(())
/// ```
pub fn transform_text_with_grid(
    rows: usize,
    cols: usize,
    text: &str,
    write: Path,
    read: Path,
    filler: char,
) -> Result<String, GridError> {
    let size = GridSize::new(rows, cols)?;
    Ok(Transposer::new(size, write, read)
        .with_filler(filler)
        .transform(text))
}
