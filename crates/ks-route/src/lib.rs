//! `ks-route` — single-robot route search against the reservation table.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                       |
//! |-----------|----------------------------------------------------------------|
//! | [`leg`]   | `RoutePlanner` trait, `LegContext`, `LegRequest`, `GoalHold`   |
//! | [`sipp`]  | `SippAstar` — time-aware A* over safe intervals                |
//! | [`error`] | `RouteError`, `RouteResult<T>`                                 |
//!
//! # Search space
//!
//! A search state is a pose plus the index of the free window of its cell
//! the robot is in.  Two arrivals in the same (pose, window) pair are
//! interchangeable except for their time, and the earlier one dominates, so
//! the state space stays proportional to poses × windows rather than to
//! poses × time.

pub mod error;
pub mod leg;
pub mod sipp;


pub use error::{RouteError, RouteResult};
pub use leg::{GoalHold, LegContext, LegRequest, RoutePlanner};
pub use sipp::SippAstar;
