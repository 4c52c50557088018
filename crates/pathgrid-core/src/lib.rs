//! Core data structures for grid-transposition puzzles.
//!
//! This crate provides the geometry that every grid cipher in the workspace is
//! built on: validated grid dimensions, cell positions, traversal path
//! descriptors, the coordinate path generator, and a dense rectangular grid.
//!
//! # Overview
//!
//! 1. **Geometry** - Where cells are
//!    - [`position`]: [`Position`] (row, column) and validated [`GridSize`]
//!    - [`grid`]: dense row-major [`Grid`] storage indexed by [`Position`]
//!
//! 2. **Paths** - In which order cells are visited
//!    - [`path`]: [`PathFamily`], [`Origin`], and the combined [`Path`] descriptor
//!    - [`walk`]: the lazy coordinate sequence ([`PathWalk`]) a path visits
//!
//! Every path visits each cell of the grid exactly once, so a walk is a
//! permutation of the grid's cells. The cipher and search crates rely on this.
//!
//! # Examples
//!
//! ```
//! use pathgrid_core::{GridSize, Origin, Path, PathFamily, Position};
//!
//! let size = GridSize::new(3, 3)?;
//! let path = Path::new(PathFamily::SpiralClockwiseInward, Origin::TopLeft);
//!
//! let coords: Vec<_> = path.walk(size).collect();
//! assert_eq!(coords.len(), 9);
//! assert_eq!(coords[0], Position::new(0, 0));
//! assert_eq!(coords[8], Position::new(1, 1)); // spirals end in the middle
//! # Ok::<(), pathgrid_core::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod path;
pub mod position;
pub mod walk;

pub use self::{
    error::{GridError, ParsePathError},
    grid::Grid,
    path::{Origin, Path, PathFamily},
    position::{GridSize, Position},
    walk::{PathWalk, walk_path},
};
