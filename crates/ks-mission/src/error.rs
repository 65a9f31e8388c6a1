use thiserror::Error;

use ks_core::{Action, RobotId};

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("robot {robot} cannot perform {action}: {reason}")]
    InvalidTransition {
        robot:  RobotId,
        action: Action,
        reason: &'static str,
    },

    #[error("robot {0} carries a shelf but has no mission")]
    Inconsistent(RobotId),

    #[error("mission parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MissionResult<T> = Result<T, MissionError>;
