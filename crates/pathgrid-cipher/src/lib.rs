//! Transposition ciphers built on grid paths.
//!
//! - [`serialize`]: write text into a grid along one path and read it back
//!   along another ([`text_to_grid`], [`grid_to_text`]).
//! - [`transform`]: the chunked grid transform for text of any length
//!   ([`Transposer`], [`transform_text_with_grid`]).
//! - [`columnar`]: keyed columnar transposition.
//!
//! # Examples
//!
//! ```
//! use pathgrid_cipher::Transposer;
//! use pathgrid_core::{GridSize, Origin, Path, PathFamily};
//!
//! let size = GridSize::new(3, 3)?;
//! let write = Path::new(PathFamily::SpiralClockwiseInward, Origin::BottomRight);
//! let read = Path::new(PathFamily::Rows, Origin::TopLeft);
//!
//! let encoder = Transposer::new(size, write, read);
//! let encoded = encoder.transform("ABCDEFGHI");
//! assert_eq!(encoded, "EFGDIHCBA");
//! assert_eq!(encoder.inverse().transform(&encoded), "ABCDEFGHI");
//! # Ok::<(), pathgrid_core::GridError>(())
//! ```

pub mod columnar;
pub mod serialize;
pub mod transform;

pub use self::{
    columnar::{ColumnarError, columnar_decode, columnar_encode, transpose},
    serialize::{grid_to_text, text_to_grid},
    transform::{Transposer, transform_text_with_grid},
};
