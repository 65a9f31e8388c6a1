use ks_core::{CoreError, RobotId};
use ks_mission::MissionError;
use ks_reserve::ReserveError;
use thiserror::Error;

/// Round-level failures.  Any of these aborts the whole round; routing
/// failures of single robots are reported per robot in
/// [`PlanResponse`][crate::PlanResponse] instead.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("planning contract violated: {0}")]
    Contract(#[from] ReserveError),

    #[error("{what} length {got} does not match robot count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("robot at index {index} has id {found}; ids must run 0..n in order")]
    RobotOrder { index: usize, found: RobotId },

    #[error("invalid robot state: {0}")]
    InvalidRobot(#[from] MissionError),

    #[error("planner configuration error: {0}")]
    Config(#[from] CoreError),
}

pub type PlanResult<T> = Result<T, PlanError>;
