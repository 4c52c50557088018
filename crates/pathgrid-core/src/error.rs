//! Error types for grid construction and path parsing.

/// Errors raised when a grid cannot be built from the given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A grid needs at least one row and one column, and its cell count must
    /// fit in a `usize`.
    #[display("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
    },
    /// The text does not fill the grid exactly.
    #[display("text length {actual} does not match grid size {expected}")]
    LengthMismatch {
        /// Number of cells in the grid.
        expected: usize,
        /// Number of characters supplied.
        actual: usize,
    },
}

/// Error returned when a path family, origin, or path name cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParsePathError {
    /// The name does not denote any path family.
    #[display("unknown path family: {_0:?}")]
    UnknownFamily(#[error(not(source))] String),
    /// The name does not denote any grid corner.
    #[display("unknown origin: {_0:?}")]
    UnknownOrigin(#[error(not(source))] String),
    /// A path must be written as `family@origin`.
    #[display("malformed path {_0:?}, expected `family@origin`")]
    Malformed(#[error(not(source))] String),
}
