//! Route-search outcomes other than success.
//!
//! These are ordinary per-robot results, not contract violations: the
//! mission planner reports them for the affected robot and carries on with
//! the rest of the fleet.

use thiserror::Error;

use ks_core::{Location, RobotId};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("robot {robot} cannot start at {at} at {time_ms} ms: the cell is reserved")]
    StartBlocked {
        robot:   RobotId,
        at:      Location,
        time_ms: u64,
    },

    #[error("target {0} is not a passable cell")]
    TargetNotPassable(Location),

    #[error("no feasible path for robot {robot} from {from} to {to} ({expanded} states expanded)")]
    NoFeasiblePath {
        robot:    RobotId,
        from:     Location,
        to:       Location,
        expanded: usize,
    },

    #[error("search budget of {budget} expansions exhausted for robot {robot} from {from} to {to}")]
    BudgetExhausted {
        robot:  RobotId,
        from:   Location,
        to:     Location,
        budget: usize,
    },
}

pub type RouteResult<T> = Result<T, RouteError>;
