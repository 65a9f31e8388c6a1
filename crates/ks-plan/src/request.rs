//! Round input and output.

use ks_core::{Plan, RobotId};
use ks_mission::{Mission, RobotInfo};
use ks_route::RouteError;

use crate::{PlanError, PlanResult};

// ── PlanRequest ───────────────────────────────────────────────────────────────

/// Everything the planner needs about the fleet for one round.
///
/// `robots[i]` must have id `i`; `previous_plans[i]` is robot `i`'s
/// unfinished plan from the last round (empty if it has none), starting
/// from `robots[i].pos`.
#[derive(Clone, Debug, Default)]
pub struct PlanRequest {
    pub robots:         Vec<RobotInfo>,
    pub previous_plans: Vec<Plan>,
}

impl PlanRequest {
    /// A request in which no robot has a pending plan.
    pub fn fresh(robots: Vec<RobotInfo>) -> Self {
        let previous_plans = vec![Plan::new(); robots.len()];
        Self { robots, previous_plans }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.robots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.robots.is_empty()
    }

    /// Robot `i`'s mission if it has one and nothing left to execute, i.e.
    /// if it is planned this round.  `None` for an index past either vector.
    pub fn pending_mission(&self, i: usize) -> Option<Mission> {
        let previous = self.previous_plans.get(i)?;
        self.robots.get(i)?.mission.filter(|_| previous.is_empty())
    }

    /// Check lengths, id order, and each robot's shelf/mission invariant.
    pub fn validate(&self) -> PlanResult<()> {
        if self.previous_plans.len() != self.robots.len() {
            return Err(PlanError::LengthMismatch {
                expected: self.robots.len(),
                got:      self.previous_plans.len(),
                what:     "previous plans",
            });
        }
        for (index, robot) in self.robots.iter().enumerate() {
            if robot.id.index() != index {
                return Err(PlanError::RobotOrder { index, found: robot.id });
            }
            robot.check()?;
        }
        Ok(())
    }
}

// ── PlanResponse ──────────────────────────────────────────────────────────────

/// What happened to one robot in a round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RobotOutcome {
    /// Not planned this round; its previous plan is carried over.
    Unchanged,
    /// Received a new plan for its mission.
    Planned,
    /// No route was found.  The robot is left without a plan, parked where
    /// it stands.
    Failed(RouteError),
}

/// Plans and per-robot outcomes, both indexed like the request.
#[derive(Clone, Debug, Default)]
pub struct PlanResponse {
    pub plans:    Vec<Plan>,
    pub outcomes: Vec<RobotOutcome>,
}

impl PlanResponse {
    pub fn planned_count(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, RobotOutcome::Planned)).count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Robots whose routing failed, with the reason.
    pub fn failures(&self) -> impl Iterator<Item = (RobotId, &RouteError)> + '_ {
        self.outcomes.iter().enumerate().filter_map(|(i, o)| match o {
            RobotOutcome::Failed(e) => Some((RobotId(i as u32), e)),
            RobotOutcome::Unchanged | RobotOutcome::Planned => None,
        })
    }
}
