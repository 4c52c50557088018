//! Traversal path descriptors.
//!
//! A traversal is fully determined by a [`PathFamily`] (the shape of the walk)
//! and an [`Origin`] (the corner it starts from, or for outward spirals, the
//! corner it ends at). [`Path`] pairs the two.
//!
//! The `ALL` constants fix the enumeration order used by exhaustive searches:
//! families in declaration order, origins clockwise from the top-left corner.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{GridSize, ParsePathError, PathWalk};

/// The shape of a traversal over a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathFamily {
    /// Row by row.
    Rows,
    /// Row by row, every second row walked in reverse.
    SnakeRows,
    /// Column by column.
    Columns,
    /// Column by column, every second column walked in reverse.
    SnakeColumns,
    /// A clockwise spiral from the origin corner towards the middle.
    SpiralClockwiseInward,
    /// A counter-clockwise spiral from the origin corner towards the middle.
    SpiralCounterclockwiseInward,
    /// The reverse of [`SpiralClockwiseInward`](Self::SpiralClockwiseInward):
    /// starts in the middle and ends at the origin corner.
    SpiralClockwiseOutward,
    /// The reverse of
    /// [`SpiralCounterclockwiseInward`](Self::SpiralCounterclockwiseInward):
    /// starts in the middle and ends at the origin corner.
    SpiralCounterclockwiseOutward,
}

impl PathFamily {
    /// All families in enumeration order.
    pub const ALL: [Self; 8] = [
        Self::Rows,
        Self::SnakeRows,
        Self::Columns,
        Self::SnakeColumns,
        Self::SpiralClockwiseInward,
        Self::SpiralCounterclockwiseInward,
        Self::SpiralClockwiseOutward,
        Self::SpiralCounterclockwiseOutward,
    ];

    /// Short kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rows => "rows",
            Self::SnakeRows => "snake-rows",
            Self::Columns => "columns",
            Self::SnakeColumns => "snake-columns",
            Self::SpiralClockwiseInward => "spiral-cw-in",
            Self::SpiralCounterclockwiseInward => "spiral-ccw-in",
            Self::SpiralClockwiseOutward => "spiral-cw-out",
            Self::SpiralCounterclockwiseOutward => "spiral-ccw-out",
        }
    }

    /// Returns `true` for the four spiral families.
    #[must_use]
    pub const fn is_spiral(self) -> bool {
        matches!(
            self,
            Self::SpiralClockwiseInward
                | Self::SpiralCounterclockwiseInward
                | Self::SpiralClockwiseOutward
                | Self::SpiralCounterclockwiseOutward
        )
    }

    /// For outward spirals, the inward family they reverse.
    #[must_use]
    pub const fn inward(self) -> Option<Self> {
        match self {
            Self::SpiralClockwiseOutward => Some(Self::SpiralClockwiseInward),
            Self::SpiralCounterclockwiseOutward => Some(Self::SpiralCounterclockwiseInward),
            _ => None,
        }
    }
}

/// A grid corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, last column.
    TopRight,
    /// Last row, last column.
    BottomRight,
    /// Last row, column 0.
    BottomLeft,
}

impl Origin {
    /// All corners, clockwise from the top-left.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomRight,
        Self::BottomLeft,
    ];

    /// Short kebab-case name, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
        }
    }

    /// Returns `true` for the two corners on row 0.
    #[must_use]
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// Returns `true` for the two corners on column 0.
    #[must_use]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

/// A complete traversal descriptor: a family walked from an origin.
///
/// # Examples
///
/// ```
/// use pathgrid_core::{Origin, Path, PathFamily};
///
/// let path: Path = "snake-rows@bottom-left".parse()?;
/// assert_eq!(path, Path::new(PathFamily::SnakeRows, Origin::BottomLeft));
/// assert_eq!(Path::ALL.len(), 32);
/// # Ok::<(), pathgrid_core::ParsePathError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Path {
    /// The traversal shape.
    pub family: PathFamily,
    /// The corner the traversal is anchored to.
    pub origin: Origin,
}

impl Path {
    /// Every family/origin pair, family-major.
    pub const ALL: [Self; 32] = {
        let mut all = [Self::new(PathFamily::Rows, Origin::TopLeft); 32];
        let mut i = 0;
        while i < 32 {
            all[i] = Self::new(PathFamily::ALL[i / 4], Origin::ALL[i % 4]);
            i += 1;
        }
        all
    };

    /// Creates a path descriptor.
    #[must_use]
    #[inline]
    pub const fn new(family: PathFamily, origin: Origin) -> Self {
        Self { family, origin }
    }

    /// Walks this path over a grid of the given size.
    #[must_use]
    pub fn walk(self, size: GridSize) -> PathWalk {
        PathWalk::new(self, size)
    }
}

impl Display for PathFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.family, self.origin)
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_ascii_lowercase().replace('_', "-")
}

impl FromStr for PathFamily {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        Self::ALL
            .into_iter()
            .find(|family| family.name() == name)
            .ok_or_else(|| ParsePathError::UnknownFamily(s.to_owned()))
    }
}

impl FromStr for Origin {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = normalize(s);
        Self::ALL
            .into_iter()
            .find(|origin| origin.name() == name)
            .ok_or_else(|| ParsePathError::UnknownOrigin(s.to_owned()))
    }
}

impl FromStr for Path {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (family, origin) = s
            .split_once('@')
            .ok_or_else(|| ParsePathError::Malformed(s.to_owned()))?;
        Ok(Self::new(family.parse()?, origin.parse()?))
    }
}
