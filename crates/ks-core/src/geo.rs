//! Grid geometry: cells, headings, and robot poses.
//!
//! The warehouse floor is a 4-connected grid.  `Location.x` is the row and
//! `Location.y` the column, so heading `East` increases `y` and heading
//! `South` increases `x`:
//!
//! ```text
//!            North (-1, 0)
//!                  ↑
//! West (0, -1) ←  · →  East (0, +1)
//!                  ↓
//!            South (+1, 0)
//! ```

use std::fmt;
use std::ops::Add;

// ── Location ──────────────────────────────────────────────────────────────────

/// An integer grid cell.  Ordered by row, then column.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub x: i32,
    pub y: i32,
}

impl Location {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Number of unit moves between `self` and `other` on an obstacle-free
    /// 4-connected grid.
    #[inline]
    pub fn manhattan(self, other: Location) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Add<Direction> for Location {
    type Output = Location;

    /// The neighbouring cell one step towards `dir`.
    #[inline]
    fn add(self, dir: Direction) -> Location {
        let (dx, dy) = dir.delta();
        Location::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Location {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Location::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// A robot heading.  Declaration order is clockwise starting at `North`,
/// which is also the total order used when comparing [`Position`]s.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All headings in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Heading after a 90° clockwise turn.
    #[inline]
    pub fn clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East  => Direction::South,
            Direction::South => Direction::West,
            Direction::West  => Direction::North,
        }
    }

    /// Heading after a 90° counter-clockwise turn.
    #[inline]
    pub fn counter_clockwise(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West  => Direction::South,
            Direction::South => Direction::East,
            Direction::East  => Direction::North,
        }
    }

    /// Unit displacement `(dx, dy)` of one MOVE in this heading.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East  => (0, 1),
            Direction::South => (1, 0),
            Direction::West  => (0, -1),
        }
    }

    /// Upper-case label, as written in logs and serialized plans.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East  => "EAST",
            Direction::South => "SOUTH",
            Direction::West  => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Position ──────────────────────────────────────────────────────────────────

/// A robot pose: the cell it stands on and the way it faces.
///
/// Immutable value type used both as a search-state key and as a plan
/// waypoint.  Ordered by location, then direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub loc: Location,
    pub dir: Direction,
}

impl Position {
    #[inline]
    pub const fn new(loc: Location, dir: Direction) -> Self {
        Self { loc, dir }
    }

    /// The cell directly ahead of this pose.
    #[inline]
    pub fn ahead(self) -> Location {
        self.loc + self.dir
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.loc, self.dir)
    }
}
