//! The round-scoped safe-interval table.

use rustc_hash::FxHashMap;

use ks_core::{Action, ActionWithTime, FOREVER_MS, Location, Position, RobotId};

use crate::{Reservation, ReserveError, ReserveResult, SafeIntervals, Window};

/// Reservations a robot makes by executing `plan` from `start_pos`.
///
/// Each MOVE claims its departure cell from the time the robot arrived there
/// until `move.start_time_ms + buffer_ms`; the cell the plan ends on is
/// claimed from the last arrival onwards, forever.  Turns, yields, and
/// shelf actions extend the current stay without adding claims.  An empty
/// plan therefore parks the robot on `start_pos` from time zero.
///
/// # Errors
///
/// `PlanDiscontinuity` if a step does not start where the previous one
/// ended, or its end pose is not what its action produces.
pub fn plan_reservations(
    robot:     RobotId,
    start_pos: Position,
    plan:      &[ActionWithTime],
    buffer_ms: u64,
) -> ReserveResult<Vec<Reservation>> {
    let mut out = Vec::new();
    let mut pos = start_pos;
    let mut since_ms = 0;

    for (step, awt) in plan.iter().enumerate() {
        if awt.start_pos != pos || !awt.is_consistent() {
            return Err(ReserveError::PlanDiscontinuity { robot, step });
        }
        if awt.action == Action::Move {
            out.push(Reservation {
                robot,
                loc:    pos.loc,
                window: Window::new(since_ms, awt.start_time_ms.saturating_add(buffer_ms)),
            });
            since_ms = awt.end_time_ms;
        }
        pos = awt.end_pos;
    }

    out.push(Reservation { robot, loc: pos.loc, window: Window::open(since_ms) });
    Ok(out)
}

// ── SafeIntervalTable ─────────────────────────────────────────────────────────

/// Free windows of every passable cell for one planning round.
///
/// Owned exclusively by the mission planner for the duration of a round and
/// rebuilt from scratch at the start of the next.
pub struct SafeIntervalTable {
    cells:     FxHashMap<Location, SafeIntervals>,
    buffer_ms: u64,
}

impl SafeIntervalTable {
    /// A table in which every location starts fully free.
    pub fn new<I>(locations: I, buffer_ms: u64) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let cells = locations
            .into_iter()
            .map(|loc| (loc, SafeIntervals::new()))
            .collect();
        Self { cells, buffer_ms }
    }

    #[inline]
    pub fn buffer_ms(&self) -> u64 {
        self.buffer_ms
    }

    #[inline]
    pub fn contains(&self, loc: Location) -> bool {
        self.cells.contains_key(&loc)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell record at `loc`.
    pub fn get(&self, loc: Location) -> ReserveResult<&SafeIntervals> {
        self.cells.get(&loc).ok_or(ReserveError::UnknownLocation(loc))
    }

    fn get_mut(&mut self, loc: Location) -> ReserveResult<&mut SafeIntervals> {
        self.cells.get_mut(&loc).ok_or(ReserveError::UnknownLocation(loc))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Free windows of `loc`; empty for unknown locations.
    pub fn windows(&self, loc: Location) -> &[Window] {
        self.cells.get(&loc).map(SafeIntervals::windows).unwrap_or(&[])
    }

    /// Index of the free window of `loc` containing `t`.
    pub fn window_index_at(&self, loc: Location, t: u64) -> Option<usize> {
        self.cells.get(&loc)?.window_index_at(t)
    }

    pub fn unused(&self, loc: Location) -> ReserveResult<bool> {
        Ok(self.get(loc)?.unused())
    }

    pub fn all_used(&self, loc: Location) -> ReserveResult<bool> {
        Ok(self.get(loc)?.all_used())
    }

    pub fn is_cleared(&self, loc: Location) -> ReserveResult<bool> {
        Ok(self.get(loc)?.is_cleared())
    }

    /// `true` if nobody but `robot` has a claim on `loc`.
    pub fn held_only_by(&self, loc: Location, robot: RobotId) -> ReserveResult<bool> {
        Ok(self.get(loc)?.held_only_by(robot))
    }

    // ── Blocking ──────────────────────────────────────────────────────────

    /// Mark `loc` fully reserved until [`reset`](Self::reset).  Only an
    /// unused cell may be blocked.
    ///
    /// # Errors
    ///
    /// `AlreadyCleared` if `loc` is already blocked (double-blocking),
    /// `NotUnused` if any robot already holds a reservation on it.
    pub fn clear(&mut self, loc: Location) -> ReserveResult<()> {
        let cell = self.get_mut(loc)?;
        if cell.is_cleared() {
            return Err(ReserveError::AlreadyCleared(loc));
        }
        if !cell.unused() {
            return Err(ReserveError::NotUnused(loc));
        }
        cell.clear();
        Ok(())
    }

    /// Undo a [`clear`](Self::clear).  Afterwards `loc` is free except for
    /// reservations registered on it, i.e. fully free if there are none.
    ///
    /// # Errors
    ///
    /// `NotCleared` if `loc` was not blocked.
    pub fn reset(&mut self, loc: Location) -> ReserveResult<()> {
        let cell = self.get_mut(loc)?;
        if !cell.is_cleared() {
            return Err(ReserveError::NotCleared(loc));
        }
        debug_assert!(cell.all_used());
        cell.reset();
        Ok(())
    }

    // ── Reservations ──────────────────────────────────────────────────────

    /// Reserve `[start_ms, end_ms)` at `loc` for `robot`.
    pub fn remove_interval(
        &mut self,
        loc:      Location,
        start_ms: u64,
        end_ms:   u64,
        robot:    RobotId,
    ) -> ReserveResult<()> {
        self.get_mut(loc)?.reserve(robot, Window::new(start_ms, end_ms));
        Ok(())
    }

    /// Reserve `[start_ms, ∞)` at `loc` for `robot`.
    pub fn remove_interval_open(
        &mut self,
        loc:      Location,
        start_ms: u64,
        robot:    RobotId,
    ) -> ReserveResult<()> {
        self.remove_interval(loc, start_ms, FOREVER_MS, robot)
    }

    /// Drop `robot`'s claims on `loc`.  Returns how many were dropped.
    pub fn release(&mut self, loc: Location, robot: RobotId) -> ReserveResult<usize> {
        Ok(self.get_mut(loc)?.release(robot))
    }

    /// Register every reservation `plan` implies (see [`plan_reservations`]).
    pub fn fold_plan(
        &mut self,
        robot:     RobotId,
        start_pos: Position,
        plan:      &[ActionWithTime],
    ) -> ReserveResult<()> {
        for r in plan_reservations(robot, start_pos, plan, self.buffer_ms)? {
            self.get_mut(r.loc)?.reserve(r.robot, r.window);
        }
        Ok(())
    }
}
