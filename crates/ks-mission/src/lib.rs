//! `ks-mission` — missions and per-robot state.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`mission`] | `Mission` (internal / WMS sum type), `WmsMission`           |
//! | [`robot`]   | `RobotInfo` — pose, shelf flag, current mission             |
//! | [`loader`]  | `load_missions_csv`, `load_missions_reader`                 |
//! | [`error`]   | `MissionError`, `MissionResult<T>`                          |
//!
//! # Mission lifecycle
//!
//! ```text
//! NoMission ─(assigned upstream)→ HasMissionNoPlan ─(planner)→ PlanComplete
//!     ↑                                                          │
//!     └──────────────(DETACH / internal arrival executed)────────┘
//! ```
//!
//! Mission assignment happens upstream of the planner; this crate only
//! carries the assignment and updates robot state as actions execute.

pub mod error;
pub mod loader;
pub mod mission;
pub mod robot;

#[cfg(test)]
mod tests;

pub use error::{MissionError, MissionResult};
pub use loader::{load_missions_csv, load_missions_reader};
pub use mission::{Mission, WmsMission};
pub use robot::RobotInfo;
