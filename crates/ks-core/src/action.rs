//! Robot actions and time-stamped plan steps.
//!
//! Every consumer matches `Action` exhaustively, without wildcard arms, so a
//! new action is a compile error at every site that must learn about it.

use std::fmt;

use crate::{ActionDurations, Position};

/// Sentinel end time of an unbounded window or reservation.
pub const FOREVER_MS: u64 = u64::MAX;

/// A robot's ordered, time-stamped action sequence.
///
/// An empty plan means "no pending motion", not "idle forever".
pub type Plan = Vec<ActionWithTime>;

// ── Action ────────────────────────────────────────────────────────────────────

/// One primitive robot action.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Drive one cell forward along the current heading.
    Move,
    /// Rotate 90° clockwise in place.
    CTurn,
    /// Rotate 90° counter-clockwise in place.
    CcTurn,
    /// Stay put (the WAIT action of the MAPF setting).
    Yield,
    /// Lift the shelf standing on the current cell.
    Attach,
    /// Put the carried shelf down on the current cell.
    Detach,
}

impl Action {
    /// Pose after performing `self` from `pos`.
    #[inline]
    pub fn apply(self, pos: Position) -> Position {
        match self {
            Action::Move   => Position::new(pos.ahead(), pos.dir),
            Action::CTurn  => Position::new(pos.loc, pos.dir.clockwise()),
            Action::CcTurn => Position::new(pos.loc, pos.dir.counter_clockwise()),
            Action::Yield | Action::Attach | Action::Detach => pos,
        }
    }

    /// Configured duration of this action in milliseconds.
    #[inline]
    pub fn duration_ms(self, durations: &ActionDurations) -> u64 {
        match self {
            Action::Move   => durations.move_ms,
            Action::CTurn  => durations.cturn_ms,
            Action::CcTurn => durations.ccturn_ms,
            Action::Yield  => durations.yield_ms,
            Action::Attach => durations.attach_ms,
            Action::Detach => durations.detach_ms,
        }
    }

    /// Upper-case action name, as written in logs and plan dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Move   => "MOVE",
            Action::CTurn  => "CTURN",
            Action::CcTurn => "CCTURN",
            Action::Yield  => "YIELD",
            Action::Attach => "ATTACH",
            Action::Detach => "DETACH",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── ActionWithTime ────────────────────────────────────────────────────────────

/// One executed action with its time span and the poses it connects.
///
/// Invariant: `end_pos == action.apply(start_pos)`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionWithTime {
    pub action:        Action,
    pub start_time_ms: u64,
    pub end_time_ms:   u64,
    pub start_pos:     Position,
    pub end_pos:       Position,
}

impl ActionWithTime {
    /// Build the step for `action` starting at `start_time_ms` from
    /// `start_pos`, deriving the end time and end pose.
    pub fn new(
        action:        Action,
        start_time_ms: u64,
        start_pos:     Position,
        durations:     &ActionDurations,
    ) -> Self {
        Self {
            action,
            start_time_ms,
            end_time_ms: start_time_ms + action.duration_ms(durations),
            start_pos,
            end_pos: action.apply(start_pos),
        }
    }

    #[inline]
    pub fn duration_ms(&self) -> u64 {
        self.end_time_ms - self.start_time_ms
    }

    /// `true` if the end pose is what the action produces from the start pose.
    #[inline]
    pub fn is_consistent(&self) -> bool {
        self.action.apply(self.start_pos) == self.end_pos && self.end_time_ms >= self.start_time_ms
    }
}

impl fmt::Display for ActionWithTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} start: {} end: {}",
            self.action, self.start_time_ms, self.end_time_ms
        )
    }
}
