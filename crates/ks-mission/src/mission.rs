//! Mission types.

use std::fmt;

use ks_core::{Location, MissionId, ShelfId};

/// A shelf transport order from the warehouse-management system.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WmsMission {
    pub id:        MissionId,
    pub shelf_id:  ShelfId,
    /// Cell the shelf currently stands on.
    pub pick_from: Location,
    /// Cell the shelf must be delivered to.
    pub drop_to:   Location,
}

/// What a robot has been asked to do.  Exactly one variant is active.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mission {
    /// Reposition an unloaded robot; no shelf interaction.
    Internal { to: Location },
    /// Carry `shelf_id` from `pick_from` to `drop_to`.
    Wms(WmsMission),
}

impl Mission {
    /// Cells the planner blocks for this mission until the robot's turn.
    ///
    /// Internal missions have one endpoint; WMS missions have two
    /// (pick-from, then drop-to).
    pub fn endpoints(&self) -> Vec<Location> {
        match self {
            Mission::Internal { to } => vec![*to],
            Mission::Wms(m)          => vec![m.pick_from, m.drop_to],
        }
    }

    /// Final destination of the mission.
    pub fn destination(&self) -> Location {
        match self {
            Mission::Internal { to } => *to,
            Mission::Wms(m)          => m.drop_to,
        }
    }

    #[inline]
    pub fn is_internal(&self) -> bool {
        matches!(self, Mission::Internal { .. })
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::Internal { to } => write!(f, "internal -> {to}"),
            Mission::Wms(m) => write!(
                f,
                "{} shelf {} {} -> {}",
                m.id, m.shelf_id, m.pick_from, m.drop_to
            ),
        }
    }
}
