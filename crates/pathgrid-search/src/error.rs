use pathgrid_core::GridError;

/// Errors raised by scoring and path search.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// Search and checked scoring need at least one character.
    #[display("input text is empty")]
    EmptyInput,
    /// The grid geometry is invalid.
    #[display("invalid grid: {_0}")]
    Grid(#[from] GridError),
}

/// Error raised when parsing a reference table.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TableError {
    /// The line is not of the form `key,weight`.
    #[display("line {line}: expected `key,weight`, got {content:?}")]
    Malformed {
        /// 1-based line number.
        line: usize,
        /// The offending line.
        content: String,
    },
    /// The weight is not a finite, non-negative number.
    #[display("line {line}: invalid weight {value:?}")]
    InvalidWeight {
        /// 1-based line number.
        line: usize,
        /// The offending weight.
        value: String,
    },
}
