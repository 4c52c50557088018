//! Coordinate sequences visited by a [`Path`].
//!
//! [`PathWalk`] is a lazy, finite iterator over the positions a path visits.
//! Every walk yields each position of the grid exactly once.
//!
//! - Linear families (rows, columns and their snake variants) compute each
//!   position directly from its step index.
//! - Inward spirals start at the origin corner and advance until the next cell
//!   would leave the grid or was already visited, then turn 90 degrees.
//! - Outward spirals are the inward spiral from the same origin, reversed, so
//!   they start in the middle of the grid and end at the origin corner.

use std::iter::FusedIterator;

use crate::{GridSize, Origin, Path, PathFamily, Position};

/// Walks `path` over a `rows` x `cols` grid.
///
/// This is a convenience wrapper around [`GridSize::new`] and [`Path::walk`].
///
/// # Errors
///
/// Returns [`GridError::InvalidDimensions`](crate::GridError::InvalidDimensions)
/// if either dimension is zero.
///
/// # Examples
///
/// ```
/// use pathgrid_core::{Origin, PathFamily, walk_path};
///
/// let coords: Vec<(usize, usize)> =
///     walk_path(PathFamily::SnakeRows, Origin::TopLeft, 2, 3)?
///         .map(Into::into)
///         .collect();
/// assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (1, 0)]);
/// # Ok::<(), pathgrid_core::GridError>(())
/// ```
pub fn walk_path(
    family: PathFamily,
    origin: Origin,
    rows: usize,
    cols: usize,
) -> Result<PathWalk, crate::GridError> {
    let size = GridSize::new(rows, cols)?;
    Ok(Path::new(family, origin).walk(size))
}

/// Iterator over the positions visited by a path.
#[derive(Debug, Clone)]
pub struct PathWalk {
    inner: WalkInner,
}

#[derive(Debug, Clone)]
enum WalkInner {
    Linear(LinearWalk),
    Spiral(SpiralWalk),
    Buffered(std::vec::IntoIter<Position>),
}

impl PathWalk {
    /// Starts walking `path` over a grid of the given size.
    #[must_use]
    pub fn new(path: Path, size: GridSize) -> Self {
        let Path { family, origin } = path;
        let inner = match family {
            PathFamily::Rows => WalkInner::Linear(LinearWalk::new(size, Axis::Rows, false, origin)),
            PathFamily::SnakeRows => {
                WalkInner::Linear(LinearWalk::new(size, Axis::Rows, true, origin))
            }
            PathFamily::Columns => {
                WalkInner::Linear(LinearWalk::new(size, Axis::Columns, false, origin))
            }
            PathFamily::SnakeColumns => {
                WalkInner::Linear(LinearWalk::new(size, Axis::Columns, true, origin))
            }
            PathFamily::SpiralClockwiseInward => {
                WalkInner::Spiral(SpiralWalk::new(size, origin, Rotation::Clockwise))
            }
            PathFamily::SpiralCounterclockwiseInward => {
                WalkInner::Spiral(SpiralWalk::new(size, origin, Rotation::Counterclockwise))
            }
            PathFamily::SpiralClockwiseOutward => {
                WalkInner::Buffered(outward(size, origin, Rotation::Clockwise))
            }
            PathFamily::SpiralCounterclockwiseOutward => {
                WalkInner::Buffered(outward(size, origin, Rotation::Counterclockwise))
            }
        };
        Self { inner }
    }
}

fn outward(size: GridSize, origin: Origin, rotation: Rotation) -> std::vec::IntoIter<Position> {
    let mut coords: Vec<_> = SpiralWalk::new(size, origin, rotation).collect();
    coords.reverse();
    coords.into_iter()
}

impl Iterator for PathWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        match &mut self.inner {
            WalkInner::Linear(walk) => walk.next(),
            WalkInner::Spiral(walk) => walk.next(),
            WalkInner::Buffered(walk) => walk.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            WalkInner::Linear(walk) => walk.size_hint(),
            WalkInner::Spiral(walk) => walk.size_hint(),
            WalkInner::Buffered(walk) => walk.size_hint(),
        }
    }
}

impl ExactSizeIterator for PathWalk {}
impl FusedIterator for PathWalk {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Rows,
    Columns,
}

#[derive(Debug, Clone)]
struct LinearWalk {
    size: GridSize,
    axis: Axis,
    snake: bool,
    origin: Origin,
    next: usize,
}

impl LinearWalk {
    fn new(size: GridSize, axis: Axis, snake: bool, origin: Origin) -> Self {
        Self {
            size,
            axis,
            snake,
            origin,
            next: 0,
        }
    }

    fn position_at(&self, step: usize) -> Position {
        let (outer_len, inner_len, outer_forward, inner_forward) = match self.axis {
            Axis::Rows => (
                self.size.rows(),
                self.size.cols(),
                self.origin.is_top(),
                self.origin.is_left(),
            ),
            Axis::Columns => (
                self.size.cols(),
                self.size.rows(),
                self.origin.is_left(),
                self.origin.is_top(),
            ),
        };
        let outer = step / inner_len;
        let inner = step % inner_len;
        // Snakes flip the inner direction on every odd outer step.
        let inner_forward = inner_forward ^ (self.snake && outer % 2 == 1);

        let outer = directed(outer, outer_len, outer_forward);
        let inner = directed(inner, inner_len, inner_forward);
        match self.axis {
            Axis::Rows => Position::new(outer, inner),
            Axis::Columns => Position::new(inner, outer),
        }
    }
}

#[inline]
fn directed(i: usize, len: usize, forward: bool) -> usize {
    if forward { i } else { len - 1 - i }
}

impl Iterator for LinearWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.next >= self.size.cells() {
            return None;
        }
        let pos = self.position_at(self.next);
        self.next += 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.size.cells() - self.next;
        (len, Some(len))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    const fn rotate(self, rotation: Rotation) -> Self {
        match (rotation, self) {
            (Rotation::Clockwise, Self::Up) | (Rotation::Counterclockwise, Self::Down) => {
                Self::Right
            }
            (Rotation::Clockwise, Self::Right) | (Rotation::Counterclockwise, Self::Left) => {
                Self::Down
            }
            (Rotation::Clockwise, Self::Down) | (Rotation::Counterclockwise, Self::Up) => {
                Self::Left
            }
            (Rotation::Clockwise, Self::Left) | (Rotation::Counterclockwise, Self::Right) => {
                Self::Up
            }
        }
    }

    fn step(self, size: GridSize, pos: Position) -> Option<Position> {
        let (row, col) = (pos.row(), pos.col());
        let next = match self {
            Self::Up => Position::new(row.checked_sub(1)?, col),
            Self::Right => Position::new(row, col + 1),
            Self::Down => Position::new(row + 1, col),
            Self::Left => Position::new(row, col.checked_sub(1)?),
        };
        size.contains(next).then_some(next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Clockwise,
    Counterclockwise,
}

impl Rotation {
    /// Heading when leaving `origin`, so that the walk hugs the grid border.
    const fn initial_direction(self, origin: Origin) -> Direction {
        match (self, origin) {
            (Self::Clockwise, Origin::TopLeft) | (Self::Counterclockwise, Origin::BottomLeft) => {
                Direction::Right
            }
            (Self::Clockwise, Origin::TopRight) | (Self::Counterclockwise, Origin::TopLeft) => {
                Direction::Down
            }
            (Self::Clockwise, Origin::BottomRight) | (Self::Counterclockwise, Origin::TopRight) => {
                Direction::Left
            }
            (Self::Clockwise, Origin::BottomLeft)
            | (Self::Counterclockwise, Origin::BottomRight) => Direction::Up,
        }
    }
}

#[derive(Debug, Clone)]
struct SpiralWalk {
    size: GridSize,
    rotation: Rotation,
    direction: Direction,
    current: Position,
    visited: Vec<bool>,
    remaining: usize,
}

impl SpiralWalk {
    fn new(size: GridSize, origin: Origin, rotation: Rotation) -> Self {
        let row = if origin.is_top() { 0 } else { size.rows() - 1 };
        let col = if origin.is_left() { 0 } else { size.cols() - 1 };
        Self {
            size,
            rotation,
            direction: rotation.initial_direction(origin),
            current: Position::new(row, col),
            visited: vec![false; size.cells()],
            remaining: size.cells(),
        }
    }

    fn is_free(&self, pos: Option<Position>) -> Option<Position> {
        pos.filter(|pos| !self.visited[self.size.index_of(*pos)])
    }
}

impl Iterator for SpiralWalk {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.remaining == 0 {
            return None;
        }

        let pos = self.current;
        let index = self.size.index_of(pos);
        assert!(!self.visited[index], "spiral walk revisited {pos}");
        self.visited[index] = true;
        self.remaining -= 1;

        if self.remaining > 0 {
            let mut next = self.is_free(self.direction.step(self.size, pos));
            for _ in 0..3 {
                if next.is_some() {
                    break;
                }
                self.direction = self.direction.rotate(self.rotation);
                next = self.is_free(self.direction.step(self.size, pos));
            }
            let Some(next) = next else {
                panic!("spiral walk is stuck at {pos} with {} cells left", self.remaining);
            };
            self.current = next;
        }

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
