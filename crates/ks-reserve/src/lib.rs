//! `ks-reserve` — shared reservation state of a planning round.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`interval`] | `Window`, `Reservation`, `SafeIntervals` (one cell)        |
//! | [`table`]    | `SafeIntervalTable`, `plan_reservations`                   |
//! | [`shelf`]    | `ShelfRegistry` — shelf ↔ location mapping                 |
//! | [`error`]    | `ReserveError`, `ReserveResult<T>`                         |
//!
//! # Reservation model
//!
//! Every passable cell owns a sorted, disjoint list of free windows
//! `[start_ms, end_ms)`.  Registering a reservation subtracts its window;
//! the route search may only place a robot on a cell inside a free window.
//!
//! A robot that executes MOVE at `t` keeps its departure cell reserved until
//! `t + buffer_ms`, and holds the cell it ends its plan on forever:
//!
//! ```text
//! cell A: ████████████░░░░        (arrival .. move start + buffer)
//! cell B:             ██████████… (arrival .. ∞)
//! ```
//!
//! The table lives for exactly one planning round.  The shelf registry
//! records physical shelf placement and outlives rounds.

pub mod error;
pub mod interval;
pub mod shelf;
pub mod table;


pub use error::{ReserveError, ReserveResult};
pub use interval::{Reservation, SafeIntervals, Window};
pub use shelf::ShelfRegistry;
pub use table::{SafeIntervalTable, plan_reservations};
