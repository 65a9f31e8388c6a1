//! Grid representation and builder.
//!
//! # Data layout
//!
//! Passability is a single row-major `Vec<bool>`; cell `(x, y)` lives at
//! index `x * cols + y`.  The sorted list of passable cells is computed once
//! at build time because every planning round seeds its safe-interval table
//! from it.

use ks_core::{Direction, Location};

use crate::{GridError, GridResult};

// ── GridMap ───────────────────────────────────────────────────────────────────

/// Rectangular 4-connected warehouse floor.
///
/// Do not construct directly; use [`GridMapBuilder`] or
/// [`parse_map`][crate::parse_map].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridMap {
    rows:     u32,
    cols:     u32,
    passable: Vec<bool>,
    /// Passable cells in ascending `Location` order.
    open:     Vec<Location>,
}

impl GridMap {
    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn in_bounds(&self, loc: Location) -> bool {
        loc.x >= 0 && loc.y >= 0 && (loc.x as u32) < self.rows && (loc.y as u32) < self.cols
    }

    /// `true` if `loc` is inside the grid and not an obstacle.
    #[inline]
    pub fn is_passable(&self, loc: Location) -> bool {
        self.in_bounds(loc) && self.passable[self.offset(loc)]
    }

    /// The passable neighbour one step towards `dir`, if any.
    #[inline]
    pub fn neighbor(&self, loc: Location, dir: Direction) -> Option<Location> {
        let next = loc + dir;
        self.is_passable(next).then_some(next)
    }

    /// Iterator over the passable 4-neighbours of `loc`.
    pub fn neighbors(&self, loc: Location) -> impl Iterator<Item = Location> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.neighbor(loc, d))
    }

    /// All passable cells, sorted.
    pub fn passable_locations(&self) -> &[Location] {
        &self.open
    }

    pub fn passable_count(&self) -> usize {
        self.open.len()
    }

    #[inline]
    fn offset(&self, loc: Location) -> usize {
        loc.x as usize * self.cols as usize + loc.y as usize
    }
}

// ── GridMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`GridMap`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use ks_core::Location;
/// use ks_grid::GridMapBuilder;
///
/// let mut b = GridMapBuilder::new(3, 4);
/// b.add_obstacle(Location::new(1, 1)).unwrap();
/// let grid = b.build();
/// assert_eq!(grid.passable_count(), 11);
/// assert!(!grid.is_passable(Location::new(1, 1)));
/// ```
pub struct GridMapBuilder {
    rows:     u32,
    cols:     u32,
    passable: Vec<bool>,
}

impl GridMapBuilder {
    /// An obstacle-free `rows × cols` grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            passable: vec![true; rows as usize * cols as usize],
        }
    }

    /// Mark `loc` as blocked.
    pub fn add_obstacle(&mut self, loc: Location) -> GridResult<()> {
        let idx = self.offset(loc).ok_or(GridError::OutOfBounds(loc))?;
        self.passable[idx] = false;
        Ok(())
    }

    /// Fluent form of [`add_obstacle`](Self::add_obstacle).
    pub fn obstacle(mut self, loc: Location) -> GridResult<Self> {
        self.add_obstacle(loc)?;
        Ok(self)
    }

    /// Consume the builder and produce a [`GridMap`].
    pub fn build(self) -> GridMap {
        let cols = self.cols as usize;
        // Row-major scan yields locations already in ascending order.
        let open: Vec<Location> = self
            .passable
            .iter()
            .enumerate()
            .filter(|(_, p)| **p)
            .map(|(i, _)| Location::new((i / cols) as i32, (i % cols) as i32))
            .collect();

        GridMap {
            rows: self.rows,
            cols: self.cols,
            passable: self.passable,
            open,
        }
    }

    fn offset(&self, loc: Location) -> Option<usize> {
        let inside = loc.x >= 0
            && loc.y >= 0
            && (loc.x as u32) < self.rows
            && (loc.y as u32) < self.cols;
        inside.then(|| loc.x as usize * self.cols as usize + loc.y as usize)
    }
}
