//! `ks-core` — foundational types for the `ks` warehouse fleet planner.
//!
//! This crate is a dependency of every other `ks-*` crate.  It intentionally
//! has no `ks-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `RobotId`, `ShelfId`, `MissionId`                          |
//! | [`geo`]     | `Location`, `Direction`, `Position`                        |
//! | [`action`]  | `Action`, `ActionWithTime`, `Plan`, `FOREVER_MS`           |
//! | [`config`]  | `ActionDurations`, `PlannerConfig`                         |
//! | [`error`]   | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod action;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::{Action, ActionWithTime, FOREVER_MS, Plan};
pub use config::{ActionDurations, PlannerConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{Direction, Location, Position};
pub use ids::{MissionId, RobotId, ShelfId};
