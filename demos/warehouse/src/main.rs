//! warehouse — end-to-end demo of the ks fleet planner.
//!
//! Loads an embedded floor map and WMS mission list, hands missions to idle
//! robots, plans one round at a time, and then "executes" each round by
//! replaying every planned action on the robots' state.  Each round's plans
//! are printed as JSON on stdout; progress goes to the log (`RUST_LOG`
//! controls the level, default `info`).
//!
//! Usage: `warehouse [planner-config.json]`

use std::collections::VecDeque;
use std::io::Cursor;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;

use ks_core::{Direction, Location, Plan, PlannerConfig, RobotId};
use ks_grid::parse_map;
use ks_mission::{Mission, RobotInfo, WmsMission, load_missions_reader};
use ks_plan::{LogObserver, MissionPlanner, PlanRequest, RobotOutcome};
use ks_reserve::ShelfRegistry;

// ── Constants ─────────────────────────────────────────────────────────────────

const MAX_ROUNDS: usize = 10;

const ROBOT_STARTS: [(i32, i32); 4] = [(0, 0), (0, 3), (0, 6), (0, 9)];

// 8 x 12 floor, `@` are building pillars.  Shelves stand on passable cells.
const FLOOR_MAP: &str = "\
// demo floor
............
............
..@..@..@...
............
............
..@..@..@...
............
............
";

// Every shelf starts on its pick-from cell; drop cells are along the bottom.
const MISSIONS_CSV: &str = "\
mission_id,shelf_id,pick_x,pick_y,drop_x,drop_y\n\
0,100,3,1,7,1\n\
1,101,3,4,7,4\n\
2,102,3,7,7,7\n\
3,103,4,10,7,10\n\
4,104,4,2,6,0\n\
5,105,4,8,6,11\n\
";

// ── JSON report ───────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct RobotReport<'a> {
    robot:   RobotId,
    outcome: String,
    plan:    &'a Plan,
}

#[derive(Serialize)]
struct RoundReport<'a> {
    round:  usize,
    robots: Vec<RobotReport<'a>>,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config() -> Result<PlannerConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
        None => Ok(PlannerConfig::default()),
    }
}

/// Hand queued missions to idle robots, lowest id first.
fn assign(robots: &mut [RobotInfo], queue: &mut VecDeque<WmsMission>) {
    for robot in robots.iter_mut().filter(|r| r.is_idle()) {
        let Some(m) = queue.pop_front() else {
            break;
        };
        let mission = Mission::Wms(m);
        info!("{} <- {}", robot.id, mission);
        robot.mission = Some(mission);
    }
}

fn describe(outcome: &RobotOutcome) -> String {
    match outcome {
        RobotOutcome::Unchanged => "unchanged".to_string(),
        RobotOutcome::Planned => "planned".to_string(),
        RobotOutcome::Failed(e) => format!("failed: {e}"),
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Configuration and floor.
    let config = load_config()?;
    let grid = parse_map(FLOOR_MAP)?;
    info!(
        "floor: {} x {} cells, {} passable",
        grid.rows(),
        grid.cols(),
        grid.passable_count()
    );

    // 2. Missions; every shelf starts on its pick-from cell.
    let missions = load_missions_reader(Cursor::new(MISSIONS_CSV))?;
    let mut shelves = ShelfRegistry::new();
    for m in &missions {
        shelves.add_mapping(m.shelf_id, m.pick_from)?;
    }
    info!("loaded {} missions", missions.len());
    let mut queue: VecDeque<WmsMission> = missions.into();

    // 3. Fleet.
    let mut robots: Vec<RobotInfo> = ROBOT_STARTS
        .iter()
        .enumerate()
        .map(|(i, &loc)| RobotInfo::new(RobotId(i as u32), Location::from(loc)).facing(Direction::South))
        .collect();

    let planner = MissionPlanner::with_config(config)?;
    let mut observer = LogObserver::new();

    // 4. Rounds: assign, plan, print, execute.
    for round in 1..=MAX_ROUNDS {
        assign(&mut robots, &mut queue);
        if robots.iter().all(RobotInfo::is_idle) {
            info!("all missions delivered after {} rounds", round - 1);
            return Ok(());
        }

        let req = PlanRequest::fresh(robots.clone());
        let resp = planner.plan_round(&grid, &req, &mut shelves, &mut observer)?;

        let report = RoundReport {
            round,
            robots: robots
                .iter()
                .zip(&resp.plans)
                .zip(&resp.outcomes)
                .map(|((r, plan), outcome)| RobotReport { robot: r.id, outcome: describe(outcome), plan })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);

        for (robot, plan) in robots.iter_mut().zip(&resp.plans) {
            for step in plan {
                robot.apply(step.action)?;
            }
            robot.settle();
        }
    }

    let pending = queue.len() + robots.iter().filter(|r| r.has_mission()).count();
    if pending > 0 {
        warn!("{pending} missions still pending after {MAX_ROUNDS} rounds");
    }
    Ok(())
}
