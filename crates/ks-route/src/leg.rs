//! Route-planner trait and leg description.
//!
//! # Pluggability
//!
//! The mission planner calls routing via the [`RoutePlanner`] trait, so
//! applications can swap in a different single-agent search (e.g. one with
//! turn penalties or a learned heuristic) without touching the
//! orchestration.  The default [`SippAstar`][crate::SippAstar] implements
//! plain safe-interval A*.
//!
//! # Time units
//!
//! All times are milliseconds since the start of the planning round.

use ks_core::{ActionWithTime, Location, PlannerConfig, Position, RobotId};
use ks_grid::GridMap;
use ks_reserve::{SafeIntervalTable, ShelfRegistry};

use crate::RouteResult;

// ── GoalHold ──────────────────────────────────────────────────────────────────

/// How long the robot must be able to stay on the target after arriving.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GoalHold {
    /// The leg ends the robot's plan for this round: the target's free
    /// window must be unbounded.
    Indefinite,
    /// Another leg departs from the target afterwards: the free window must
    /// last at least this many ms past the arrival.
    Dwell(u64),
}

// ── LegRequest ────────────────────────────────────────────────────────────────

/// One single-origin, single-destination leg of a mission.
#[derive(Copy, Clone, Debug)]
pub struct LegRequest {
    pub robot:         RobotId,
    pub start:         Position,
    pub start_time_ms: u64,
    pub target:        Location,
    pub hold:          GoalHold,
    /// `true` while the robot carries a shelf.
    pub carrying:      bool,
}

// ── LegContext ────────────────────────────────────────────────────────────────

/// Read-only world state a leg is planned against.
#[derive(Copy, Clone)]
pub struct LegContext<'a> {
    pub grid:    &'a GridMap,
    pub table:   &'a SafeIntervalTable,
    pub shelves: &'a ShelfRegistry,
    pub config:  &'a PlannerConfig,
}

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable single-robot route search.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`.  A search only reads its
/// [`LegContext`], so independent searches against the same grid may run on
/// different threads; within a round, however, the mission planner runs them
/// one after another because each robot depends on the reservations of the
/// robots planned before it.
pub trait RoutePlanner: Send + Sync {
    /// Plan `req` against `ctx`.
    ///
    /// Returns the time-contiguous action sequence from `req.start` at
    /// `req.start_time_ms` to `req.target`.  `start.loc == target` yields an
    /// empty sequence.
    fn plan_leg(&self, ctx: &LegContext<'_>, req: &LegRequest) -> RouteResult<Vec<ActionWithTime>>;
}
