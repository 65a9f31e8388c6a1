//! The `MissionPlanner` and its round loop.

use log::{debug, trace};

use ks_core::{Action, ActionWithTime, Location, Plan, PlannerConfig, Position};
use ks_grid::GridMap;
use ks_mission::{Mission, RobotInfo, WmsMission};
use ks_reserve::{ReserveError, SafeIntervalTable, ShelfRegistry};
use ks_route::{GoalHold, LegContext, LegRequest, RoutePlanner, RouteResult, SippAstar};

use crate::{PlanError, PlanObserver, PlanRequest, PlanResponse, PlanResult, RobotOutcome};

/// Priority-ordered fleet planner.
///
/// `MissionPlanner<P>` owns the configuration and the single-robot route
/// planner.  Each call to [`plan_round`](Self::plan_round) is independent:
/// the safe-interval table is built fresh from the request and dropped at
/// the end, and the only state carried between rounds is the caller's
/// [`ShelfRegistry`].
pub struct MissionPlanner<P: RoutePlanner = SippAstar> {
    config: PlannerConfig,
    router: P,
}

impl MissionPlanner<SippAstar> {
    /// A planner using the default SIPP route search.
    pub fn with_config(config: PlannerConfig) -> PlanResult<Self> {
        Self::new(config, SippAstar)
    }
}

impl<P: RoutePlanner> MissionPlanner<P> {
    /// Validate `config` and build a planner around `router`.
    pub fn new(config: PlannerConfig, router: P) -> PlanResult<Self> {
        config.validate()?;
        Ok(Self { config, router })
    }

    #[inline]
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    #[inline]
    pub fn router(&self) -> &P {
        &self.router
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Plan one round for the whole fleet.
    ///
    /// 1. Build a table in which every passable cell is free.
    /// 2. Fold every robot's previous plan into it, ascending id.  A robot
    ///    without a plan parks on its cell from time zero.
    /// 3. Block the endpoints of every robot that has a mission but no plan.
    ///    Each blocked cell must be unused.  An endpoint the robot stands on
    ///    is not blocked but must be claimed by that robot alone, and the
    ///    pick-from cell is ignored once the robot carries the shelf.
    /// 4. Ascending id, for each such robot: unblock its own endpoints, plan
    ///    its legs, apply the shelf attach/detach to `shelves`, and fold the
    ///    new plan into the table so later robots route around it.
    /// 5. Return one plan per robot.  Robots not planned keep their previous
    ///    plan.
    ///
    /// A robot for which no route exists is reported as
    /// [`RobotOutcome::Failed`]; the other robots are unaffected.
    ///
    /// # Errors
    ///
    /// Invalid requests and reservation-contract violations abort the round
    /// (see [`PlanError`]).  `shelves` may then hold the
    /// changes made for robots planned before the violation.
    pub fn plan_round<O: PlanObserver>(
        &self,
        grid:     &GridMap,
        req:      &PlanRequest,
        shelves:  &mut ShelfRegistry,
        observer: &mut O,
    ) -> PlanResult<PlanResponse> {
        req.validate()?;
        observer.on_round_start(req.len());

        let mut table = SafeIntervalTable::new(
            grid.passable_locations().iter().copied(),
            self.config.buffer_ms,
        );

        for (robot, plan) in req.robots.iter().zip(&req.previous_plans) {
            table.fold_plan(robot.id, robot.pos, plan)?;
        }

        let mut blocked: Vec<Vec<Location>> = vec![Vec::new(); req.len()];
        for (i, robot) in req.robots.iter().enumerate() {
            let Some(mission) = req.pending_mission(i) else {
                continue;
            };
            for loc in endpoints(robot, &mission) {
                if loc == robot.pos.loc {
                    // Covered by the robot's own parking claim.
                    if !table.held_only_by(loc, robot.id)? {
                        return Err(PlanError::Contract(ReserveError::NotUnused(loc)));
                    }
                    continue;
                }
                table.clear(loc)?;
                blocked[i].push(loc);
            }
            trace!("{}: blocking {:?}", robot.id, blocked[i]);
        }

        let mut plans = req.previous_plans.clone();
        let mut outcomes = vec![RobotOutcome::Unchanged; req.len()];

        for (i, robot) in req.robots.iter().enumerate() {
            let Some(mission) = req.pending_mission(i) else {
                continue;
            };
            for &loc in &blocked[i] {
                table.reset(loc)?;
            }

            match self.plan_robot(grid, &mut table, shelves, robot, mission)? {
                Ok(plan) => {
                    debug!("{} ({}): {} steps", robot.id, mission, plan.len());
                    observer.on_robot_planned(robot.id, &plan);
                    plans[i] = plan;
                    outcomes[i] = RobotOutcome::Planned;
                }
                Err(err) => {
                    debug!("{} ({}): {}", robot.id, mission, err);
                    observer.on_robot_failed(robot.id, &err);
                    outcomes[i] = RobotOutcome::Failed(err);
                }
            }
        }

        let response = PlanResponse { plans, outcomes };
        observer.on_round_end(&response);
        Ok(response)
    }

    // ── Per-robot planning ────────────────────────────────────────────────

    /// Plan `robot`'s mission and fold the result into `table`.
    ///
    /// The outer result carries contract violations, the inner one a routing
    /// failure.  After a routing failure the robot is parked again and every
    /// registry change made for it has been undone.
    fn plan_robot(
        &self,
        grid:    &GridMap,
        table:   &mut SafeIntervalTable,
        shelves: &mut ShelfRegistry,
        robot:   &RobotInfo,
        mission: Mission,
    ) -> PlanResult<RouteResult<Plan>> {
        table.release(robot.pos.loc, robot.id)?;

        let routed = match mission {
            Mission::Internal { to } => {
                let leg = LegRequest {
                    robot:         robot.id,
                    start:         robot.pos,
                    start_time_ms: 0,
                    target:        to,
                    hold:          GoalHold::Indefinite,
                    carrying:      robot.shelf_attached,
                };
                self.route(grid, table, shelves, &leg)
            }
            Mission::Wms(m) => self.plan_wms(grid, table, shelves, robot, &m)?,
        };

        match &routed {
            Ok(plan) => table.fold_plan(robot.id, robot.pos, plan)?,
            Err(_) => table.fold_plan(robot.id, robot.pos, &[])?,
        }
        Ok(routed)
    }

    /// Pickup leg (unless already loaded), ATTACH, drop leg, DETACH.
    fn plan_wms(
        &self,
        grid:    &GridMap,
        table:   &SafeIntervalTable,
        shelves: &mut ShelfRegistry,
        robot:   &RobotInfo,
        m:       &WmsMission,
    ) -> PlanResult<RouteResult<Plan>> {
        let d = &self.config.durations;
        let mut plan = Plan::new();
        let mut picked = false;

        if !robot.shelf_attached {
            let pickup = LegRequest {
                robot:         robot.id,
                start:         robot.pos,
                start_time_ms: 0,
                target:        m.pick_from,
                hold:          GoalHold::Dwell(self.config.pickup_dwell_ms()),
                carrying:      false,
            };
            match self.route(grid, table, shelves, &pickup) {
                Ok(leg) => plan.extend(leg),
                Err(err) => return Ok(Err(err)),
            }
            let (pos, t) = tail(robot.pos, &plan);
            plan.push(ActionWithTime::new(Action::Attach, t, pos, d));
            shelves.remove_mapping(m.shelf_id, m.pick_from)?;
            picked = true;
        }

        let (pos, t) = tail(robot.pos, &plan);
        let dropoff = LegRequest {
            robot:         robot.id,
            start:         pos,
            start_time_ms: t,
            target:        m.drop_to,
            hold:          GoalHold::Indefinite,
            carrying:      true,
        };
        match self.route(grid, table, shelves, &dropoff) {
            Ok(leg) => plan.extend(leg),
            Err(err) => {
                if picked {
                    shelves.add_mapping(m.shelf_id, m.pick_from)?;
                }
                return Ok(Err(err));
            }
        }
        let (pos, t) = tail(robot.pos, &plan);
        plan.push(ActionWithTime::new(Action::Detach, t, pos, d));
        shelves.add_mapping(m.shelf_id, m.drop_to)?;

        Ok(Ok(plan))
    }

    fn route(
        &self,
        grid:    &GridMap,
        table:   &SafeIntervalTable,
        shelves: &ShelfRegistry,
        leg:     &LegRequest,
    ) -> RouteResult<Vec<ActionWithTime>> {
        let ctx = LegContext { grid, table, shelves, config: &self.config };
        self.router.plan_leg(&ctx, leg)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Cells reserved for `robot` until its turn in the round.
fn endpoints(robot: &RobotInfo, mission: &Mission) -> Vec<Location> {
    match mission {
        Mission::Wms(m) if robot.shelf_attached => vec![m.drop_to],
        Mission::Wms(_) | Mission::Internal { .. } => mission.endpoints(),
    }
}

/// Pose and time at the end of `plan`, which starts at `start` at time zero.
fn tail(start: Position, plan: &[ActionWithTime]) -> (Position, u64) {
    plan.last().map_or((start, 0), |s| (s.end_pos, s.end_time_ms))
}
