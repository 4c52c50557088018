use std::{io, path::PathBuf};

use pathgrid_cipher::ColumnarError;
use pathgrid_core::GridError;
use pathgrid_search::{SearchError, TableError};

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum CliError {
    #[display("{_0}")]
    #[from]
    Grid(GridError),
    #[display("{_0}")]
    #[from]
    Search(SearchError),
    #[display("{_0}")]
    #[from]
    Columnar(ColumnarError),
    #[display("{}: {source}", path.display())]
    Table { path: PathBuf, source: TableError },
    #[display("{}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to read standard input: {_0}")]
    Stdin(io::Error),
    #[display("failed to write output: {_0}")]
    #[from]
    Output(io::Error),
}
