//! Per-robot state as reported to the planner.

use std::fmt;

use ks_core::{Action, Direction, Location, Position, RobotId};

use crate::{Mission, MissionError, MissionResult};

/// Snapshot of one robot at the start of a planning round.
///
/// Invariant: `shelf_attached` implies `mission.is_some()`.  Checked by
/// [`RobotInfo::check`]; the planner rejects requests that violate it.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotInfo {
    pub id:             RobotId,
    pub pos:            Position,
    pub shelf_attached: bool,
    pub mission:        Option<Mission>,
}

impl RobotInfo {
    /// An idle, unloaded robot at `loc` facing north.
    pub fn new(id: RobotId, loc: Location) -> Self {
        Self {
            id,
            pos: Position::new(loc, Direction::North),
            shelf_attached: false,
            mission: None,
        }
    }

    /// Builder-style heading override.
    pub fn facing(mut self, dir: Direction) -> Self {
        self.pos.dir = dir;
        self
    }

    /// Builder-style mission assignment.
    pub fn with_mission(mut self, mission: Mission) -> Self {
        self.mission = Some(mission);
        self
    }

    #[inline]
    pub fn has_mission(&self) -> bool {
        self.mission.is_some()
    }

    /// `true` when the robot has no mission.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.mission.is_none()
    }

    /// Validate the shelf/mission invariant.
    pub fn check(&self) -> MissionResult<()> {
        if self.shelf_attached && self.mission.is_none() {
            return Err(MissionError::Inconsistent(self.id));
        }
        Ok(())
    }

    /// Update the robot's state as if `action` had just been executed.
    ///
    /// DETACH completes the current mission.  Shelf-registry updates are the
    /// planner's job; this only tracks what the robot itself knows.
    pub fn apply(&mut self, action: Action) -> MissionResult<()> {
        match action {
            Action::Attach => {
                if self.shelf_attached {
                    return Err(self.invalid(action, "a shelf is already attached"));
                }
                if self.mission.is_none() {
                    return Err(self.invalid(action, "no mission to attach for"));
                }
                self.shelf_attached = true;
            }
            Action::Detach => {
                if !self.shelf_attached {
                    return Err(self.invalid(action, "no shelf is attached"));
                }
                self.shelf_attached = false;
                self.mission = None;
            }
            Action::Yield => {}
            Action::Move | Action::CTurn | Action::CcTurn => {
                self.pos = action.apply(self.pos);
            }
        }
        Ok(())
    }

    /// Close out an internal mission once the robot stands on its target.
    ///
    /// Returns `true` if a mission was completed.  WMS missions complete on
    /// DETACH instead and are left untouched.
    pub fn settle(&mut self) -> bool {
        match self.mission {
            Some(Mission::Internal { to }) if to == self.pos.loc => {
                self.mission = None;
                true
            }
            _ => false,
        }
    }

    fn invalid(&self, action: Action, reason: &'static str) -> MissionError {
        MissionError::InvalidTransition { robot: self.id, action, reason }
    }
}

impl fmt::Display for RobotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.id, self.pos)?;
        if self.shelf_attached {
            f.write_str(" (loaded)")?;
        }
        if let Some(m) = &self.mission {
            write!(f, " [{m}]")?;
        }
        Ok(())
    }
}
