//! `ks-plan` — round orchestrator for the ks fleet planner.
//!
//! # Planning round
//!
//! ```text
//! plan_round(grid, request, shelves):
//!   ① Table     — every passable cell starts fully free.
//!   ② Fold      — previous plans, ascending RobotId; idle robots park.
//!   ③ Block     — endpoints of every robot that needs a plan.
//!   ④ Plan      — ascending RobotId:
//!                   unblock own endpoints
//!                   Internal → one leg, held indefinitely
//!                   WMS      → pickup leg, ATTACH, drop leg, DETACH
//!                   fold the new plan into the table
//!   ⑤ Respond   — one plan and one outcome per robot.
//! ```
//!
//! Lower ids are planned first and never yield to higher ids.  The joint
//! result is deterministic but not optimal.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ks_core::PlannerConfig;
//! use ks_plan::{LogObserver, MissionPlanner, PlanRequest};
//!
//! let planner = MissionPlanner::with_config(PlannerConfig::default())?;
//! let response = planner.plan_round(&grid, &PlanRequest::fresh(robots), &mut shelves, &mut LogObserver::new())?;
//! ```

pub mod error;
pub mod observer;
pub mod planner;
pub mod request;


pub use error::{PlanError, PlanResult};
pub use observer::{LogObserver, NoopObserver, PlanObserver};
pub use planner::MissionPlanner;
pub use request::{PlanRequest, PlanResponse, RobotOutcome};
