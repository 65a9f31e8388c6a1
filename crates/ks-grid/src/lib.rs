//! `ks-grid` — the warehouse floor grid.
//!
//! The planner treats the grid as a read-only provider of passable cells and
//! 4-connected adjacency.  It is built once and shared, immutably, across all
//! planning rounds.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`grid`]   | `GridMap` (row-major passability), `GridMapBuilder`          |
//! | [`loader`] | `parse_map`, `load_map` — text map format                    |
//! | [`error`]  | `GridError`, `GridResult<T>`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::{GridMap, GridMapBuilder};
pub use loader::{load_map, parse_map};
