//! Reservation contract violations.
//!
//! None of these are routine runtime conditions.  Each one means the caller
//! issued table or registry operations out of the expected planning order,
//! i.e. a programming-contract bug surfaced as a value instead of an abort.

use thiserror::Error;

use ks_core::{Location, RobotId, ShelfId};

#[derive(Debug, Error)]
pub enum ReserveError {
    #[error("location {0} is not in the safe-interval table")]
    UnknownLocation(Location),

    #[error("location {0} is already cleared")]
    AlreadyCleared(Location),

    #[error("location {0} already carries reservations")]
    NotUnused(Location),

    #[error("location {0} was not cleared before reset")]
    NotCleared(Location),

    #[error("cannot place shelf {shelf} at {loc}: shelf {occupant} is already there")]
    ShelfConflict {
        shelf:    ShelfId,
        loc:      Location,
        occupant: ShelfId,
    },

    #[error("shelf {shelf} is already placed at {at}")]
    ShelfAlreadyPlaced { shelf: ShelfId, at: Location },

    #[error("cannot remove shelf {shelf} from {loc}: found {found:?}")]
    ShelfMismatch {
        shelf: ShelfId,
        loc:   Location,
        found: Option<ShelfId>,
    },

    #[error("plan of robot {robot} is discontinuous at step {step}")]
    PlanDiscontinuity { robot: RobotId, step: usize },
}

pub type ReserveResult<T> = Result<T, ReserveError>;
