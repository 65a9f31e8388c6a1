//! Time windows and the per-cell safe-interval list.

use std::fmt;

use ks_core::{FOREVER_MS, Location, RobotId};

/// Checks whether the windows are disjoint and sorted by start time.
#[inline]
fn are_disjoint_and_sorted(windows: &[Window]) -> bool {
    windows.windows(2).all(|w| w[0].end_ms <= w[1].start_ms)
}

// ── Window ────────────────────────────────────────────────────────────────────

/// Half-open time window `[start_ms, end_ms)`.  `end_ms == FOREVER_MS`
/// means unbounded.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub start_ms: u64,
    pub end_ms:   u64,
}

impl Window {
    /// The whole timeline.
    pub const ALL: Window = Window { start_ms: 0, end_ms: FOREVER_MS };

    #[inline]
    pub const fn new(start_ms: u64, end_ms: u64) -> Self {
        Self { start_ms, end_ms }
    }

    /// `[start_ms, ∞)`.
    #[inline]
    pub const fn open(start_ms: u64) -> Self {
        Self { start_ms, end_ms: FOREVER_MS }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.end_ms <= self.start_ms
    }

    #[inline]
    pub fn is_unbounded(self) -> bool {
        self.end_ms == FOREVER_MS
    }

    #[inline]
    pub fn contains(self, t: u64) -> bool {
        self.start_ms <= t && t < self.end_ms
    }

    /// `true` if the two windows share at least one instant.
    #[inline]
    pub fn overlaps(self, other: Window) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unbounded() {
            write!(f, "[{}, inf)", self.start_ms)
        } else {
            write!(f, "[{}, {})", self.start_ms, self.end_ms)
        }
    }
}

// ── Reservation ───────────────────────────────────────────────────────────────

/// A robot's claim on one cell for one window.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reservation {
    pub robot:  RobotId,
    pub loc:    Location,
    pub window: Window,
}

// ── SafeIntervals ─────────────────────────────────────────────────────────────

/// Free windows of a single cell plus the reservations that carved them.
///
/// `free` is always sorted and disjoint.  It equals the complement of the
/// recorded reservations, or is empty while the cell is cleared.  Keeping
/// the reservations lets a cleared cell be reset without losing claims that
/// were registered while it was blocked, and lets a robot release its own
/// parking claim without touching anyone else's.
#[derive(Clone, Debug)]
pub struct SafeIntervals {
    free:     Vec<Window>,
    reserved: Vec<(RobotId, Window)>,
    cleared:  bool,
}

impl Default for SafeIntervals {
    fn default() -> Self {
        Self::new()
    }
}

impl SafeIntervals {
    /// A fully free cell.
    pub fn new() -> Self {
        Self {
            free:     vec![Window::ALL],
            reserved: Vec::new(),
            cleared:  false,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Free windows, sorted and disjoint.
    #[inline]
    pub fn windows(&self) -> &[Window] {
        &self.free
    }

    /// Reservations registered on this cell, in registration order.
    pub fn reservations(&self) -> impl Iterator<Item = (RobotId, Window)> + '_ {
        self.reserved.iter().copied()
    }

    /// `true` if the whole default window is still free.
    #[inline]
    pub fn unused(&self) -> bool {
        self.free.len() == 1 && self.free[0] == Window::ALL
    }

    /// `true` if no free time is left.
    #[inline]
    pub fn all_used(&self) -> bool {
        self.free.is_empty()
    }

    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    /// `true` if the cell is not cleared and every reservation on it
    /// belongs to `robot`.
    pub fn held_only_by(&self, robot: RobotId) -> bool {
        !self.cleared && self.reserved.iter().all(|(r, _)| *r == robot)
    }

    /// Index of the free window containing `t`, if any.
    pub fn window_index_at(&self, t: u64) -> Option<usize> {
        let idx = self.free.partition_point(|w| w.end_ms <= t);
        (idx < self.free.len() && self.free[idx].start_ms <= t).then_some(idx)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Block the whole timeline.
    pub fn clear(&mut self) {
        self.cleared = true;
        self.free.clear();
    }

    /// Lift a block; free time becomes the complement of the reservations.
    pub fn reset(&mut self) {
        self.cleared = false;
        self.rebuild();
    }

    /// Register `robot`'s claim on `window`.  Empty windows are ignored.
    pub fn reserve(&mut self, robot: RobotId, window: Window) {
        if window.is_empty() {
            return;
        }
        self.reserved.push((robot, window));
        if !self.cleared {
            self.subtract(window);
        }
    }

    /// Drop every claim `robot` holds here.  Returns how many were dropped.
    pub fn release(&mut self, robot: RobotId) -> usize {
        let before = self.reserved.len();
        self.reserved.retain(|(r, _)| *r != robot);
        let dropped = before - self.reserved.len();
        if dropped > 0 {
            self.rebuild();
        }
        dropped
    }

    fn rebuild(&mut self) {
        self.free.clear();
        if self.cleared {
            return;
        }
        self.free.push(Window::ALL);
        let reserved = std::mem::take(&mut self.reserved);
        for (_, w) in &reserved {
            self.subtract(*w);
        }
        self.reserved = reserved;
    }

    /// Remove `cut` from the free windows: overlapping windows are split,
    /// shrunk, or dropped.
    fn subtract(&mut self, cut: Window) {
        let mut out = Vec::with_capacity(self.free.len() + 1);
        for w in std::mem::take(&mut self.free) {
            if !w.overlaps(cut) {
                out.push(w);
                continue;
            }
            if w.start_ms < cut.start_ms {
                out.push(Window::new(w.start_ms, cut.start_ms));
            }
            if cut.end_ms < w.end_ms {
                out.push(Window::new(cut.end_ms, w.end_ms));
            }
        }
        debug_assert!(
            are_disjoint_and_sorted(&out),
            "subtract produced windows that are not disjoint and sorted"
        );
        self.free = out;
    }
}
