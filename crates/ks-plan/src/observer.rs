//! Round observer trait for progress reporting and data collection.

use log::{debug, info, warn};

use ks_core::{ActionWithTime, RobotId};
use ks_route::RouteError;

use crate::PlanResponse;

/// Callbacks invoked by [`MissionPlanner::plan_round`][crate::MissionPlanner::plan_round]
/// at key points of a round.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — failure counter
///
/// ```rust,ignore
/// struct Failures(usize);
///
/// impl PlanObserver for Failures {
///     fn on_robot_failed(&mut self, _robot: RobotId, _err: &RouteError) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once before any robot is processed.
    fn on_round_start(&mut self, _robot_count: usize) {}

    /// Called after `robot` received a new plan this round.
    fn on_robot_planned(&mut self, _robot: RobotId, _plan: &[ActionWithTime]) {}

    /// Called when no route could be found for `robot`.  The robot stays
    /// parked and the round continues.
    fn on_robot_failed(&mut self, _robot: RobotId, _err: &RouteError) {}

    /// Called once with the assembled response.
    fn on_round_end(&mut self, _response: &PlanResponse) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}

/// A [`PlanObserver`] that reports through the `log` facade.
#[derive(Default)]
pub struct LogObserver {
    round: u64,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rounds observed so far.
    pub fn rounds(&self) -> u64 {
        self.round
    }
}

impl PlanObserver for LogObserver {
    fn on_round_start(&mut self, robot_count: usize) {
        self.round += 1;
        debug!("round {}: planning {} robots", self.round, robot_count);
    }

    fn on_robot_planned(&mut self, robot: RobotId, plan: &[ActionWithTime]) {
        let finish = plan.last().map_or(0, |s| s.end_time_ms);
        debug!("round {}: {} planned, {} steps, done at {} ms", self.round, robot, plan.len(), finish);
    }

    fn on_robot_failed(&mut self, robot: RobotId, err: &RouteError) {
        warn!("round {}: {} not planned: {}", self.round, robot, err);
    }

    fn on_round_end(&mut self, response: &PlanResponse) {
        info!(
            "round {}: {} planned, {} failed, {} unchanged",
            self.round,
            response.planned_count(),
            response.failed_count(),
            response.plans.len() - response.planned_count() - response.failed_count(),
        );
    }
}
