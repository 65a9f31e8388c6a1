//! Safe-interval A* over (pose, free window) states.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use ks_core::{Action, ActionWithTime, Position};
use ks_reserve::Window;

use crate::{GoalHold, LegContext, LegRequest, RouteError, RoutePlanner, RouteResult};

// ── SippAstar ─────────────────────────────────────────────────────────────────

/// Time-aware A* over safe intervals.
///
/// Successors of a state at time `t` inside free window `W` of its cell:
///
/// | Action            | Legal when                                                   |
/// |-------------------|--------------------------------------------------------------|
/// | `CTURN`/`CCTURN`  | `t + dur` is still inside `W`                                 |
/// | `MOVE`            | the cell ahead is passable, the robot can hold its cell for  |
/// |                   | the departure buffer, and the arrival lies in a free window  |
/// |                   | of the cell ahead                                             |
///
/// Waiting is not a search step of its own: a `MOVE` successor is generated
/// for every free window of the cell ahead, preceded by as many `YIELD`s as
/// are needed to arrive no earlier than that window opens.  Because waits
/// come in whole `YIELD`s, an earlier arrival dominates a later one only when
/// the two differ by a multiple of the `YIELD` duration, so states are keyed
/// on (pose, window, arrival time modulo `YIELD`).
///
/// A loaded robot additionally never drives onto a cell that holds a shelf
/// when `PlannerConfig::loaded_avoids_shelves` is set.
///
/// The heuristic is the manhattan distance times `move_ms`, which never
/// overestimates because every cell change costs at least one MOVE.
#[derive(Copy, Clone, Debug, Default)]
pub struct SippAstar;

impl RoutePlanner for SippAstar {
    fn plan_leg(&self, ctx: &LegContext<'_>, req: &LegRequest) -> RouteResult<Vec<ActionWithTime>> {
        search(ctx, req)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

/// (pose, index of the free window of the pose's cell, arrival phase)
type StateKey = (Position, usize, u64);

#[inline]
fn state_key(pos: Position, window: usize, t: u64, yield_ms: u64) -> StateKey {
    (pos, window, t % yield_ms.max(1))
}

#[derive(Copy, Clone)]
struct Edge {
    action:  Action,
    /// Time spent yielding in place before `action` starts.
    wait_ms: u64,
}

struct Node {
    pos:     Position,
    window:  usize,
    time_ms: u64,
    /// Arena index of the predecessor and the edge that led here.
    parent:  Option<(usize, Edge)>,
}

struct Successor {
    pos:     Position,
    window:  usize,
    time_ms: u64,
    edge:    Edge,
}

fn search(ctx: &LegContext<'_>, req: &LegRequest) -> RouteResult<Vec<ActionWithTime>> {
    let from = req.start.loc;
    let to = req.target;

    trace!(
        "[Sipp] robot {} {} @ {} ms -> {} ({:?}, carrying={})",
        req.robot, req.start, req.start_time_ms, to, req.hold, req.carrying
    );

    if from == to {
        return Ok(vec![]);
    }
    if !ctx.grid.is_passable(to) || !ctx.table.contains(to) {
        debug!("[Sipp] robot {}: target {} is not passable", req.robot, to);
        return Err(RouteError::TargetNotPassable(to));
    }
    let Some(start_window) = ctx.table.window_index_at(from, req.start_time_ms) else {
        debug!("[Sipp] robot {}: start {} reserved at {} ms", req.robot, from, req.start_time_ms);
        return Err(RouteError::StartBlocked {
            robot:   req.robot,
            at:      from,
            time_ms: req.start_time_ms,
        });
    };

    let move_ms = ctx.config.durations.move_ms;
    let yield_ms = ctx.config.durations.yield_ms;
    let heuristic = |pos: Position| u64::from(pos.loc.manhattan(to)) * move_ms;

    let mut nodes: Vec<Node> = Vec::new();
    // Earliest known arrival per state; later arrivals are dominated.
    let mut best: FxHashMap<StateKey, u64> = FxHashMap::default();
    let mut closed: FxHashSet<StateKey> = FxHashSet::default();
    let mut succs: Vec<Successor> = Vec::new();

    // Min-heap on (f, h); the arena index breaks ties deterministically.
    let mut open: BinaryHeap<Reverse<(u64, u64, usize)>> = BinaryHeap::new();

    let h0 = heuristic(req.start);
    nodes.push(Node { pos: req.start, window: start_window, time_ms: req.start_time_ms, parent: None });
    best.insert(
        state_key(req.start, start_window, req.start_time_ms, yield_ms),
        req.start_time_ms,
    );
    open.push(Reverse((req.start_time_ms.saturating_add(h0), h0, 0)));

    let mut expanded = 0usize;

    while let Some(Reverse((_, _, idx))) = open.pop() {
        let (pos, w, t) = {
            let n = &nodes[idx];
            (n.pos, n.window, n.time_ms)
        };
        let key = state_key(pos, w, t, yield_ms);

        // Skip stale heap entries.
        if best.get(&key).is_some_and(|&b| t > b) || !closed.insert(key) {
            continue;
        }

        expanded += 1;
        if expanded > ctx.config.max_expansions {
            debug!(
                "[Sipp] robot {}: budget of {} expansions exhausted ({} -> {})",
                req.robot, ctx.config.max_expansions, from, to
            );
            return Err(RouteError::BudgetExhausted {
                robot:  req.robot,
                from,
                to,
                budget: ctx.config.max_expansions,
            });
        }

        let Some(&window) = ctx.table.windows(pos.loc).get(w) else {
            continue;
        };

        if pos.loc == to && goal_reached(window, t, req.hold) {
            let plan = reconstruct(ctx, &nodes, idx);
            debug!(
                "[Sipp] robot {}: {} -> {} in {} steps, arrival {} ms, {} expansions",
                req.robot, from, to, plan.len(), t, expanded
            );
            return Ok(plan);
        }

        succs.clear();
        successors(ctx, req, pos, w, window, t, &mut succs);

        for s in &succs {
            let next_key = state_key(s.pos, s.window, s.time_ms, yield_ms);
            if closed.contains(&next_key) {
                continue;
            }
            if best.get(&next_key).is_some_and(|&b| b <= s.time_ms) {
                continue;
            }
            best.insert(next_key, s.time_ms);

            let h = heuristic(s.pos);
            let next_idx = nodes.len();
            nodes.push(Node {
                pos:     s.pos,
                window:  s.window,
                time_ms: s.time_ms,
                parent:  Some((idx, s.edge)),
            });
            open.push(Reverse((s.time_ms.saturating_add(h), h, next_idx)));
        }
    }

    debug!(
        "[Sipp] robot {}: no path {} -> {} ({} expansions)",
        req.robot, from, to, expanded
    );
    Err(RouteError::NoFeasiblePath { robot: req.robot, from, to, expanded })
}

/// Push every successor of the state (`pos`, `w`) reached at `t`, where
/// `window` is free window `w` of `pos.loc`.
fn successors(
    ctx:    &LegContext<'_>,
    req:    &LegRequest,
    pos:    Position,
    w:      usize,
    window: Window,
    t:      u64,
    out:    &mut Vec<Successor>,
) {
    let d = &ctx.config.durations;
    let horizon = ctx.config.horizon_ms;

    for action in [Action::CTurn, Action::CcTurn] {
        let next_t = t.saturating_add(action.duration_ms(d));
        if next_t < window.end_ms && next_t <= horizon {
            out.push(Successor {
                pos:     action.apply(pos),
                window:  w,
                time_ms: next_t,
                edge:    Edge { action, wait_ms: 0 },
            });
        }
    }

    let Some(ahead) = ctx.grid.neighbor(pos.loc, pos.dir) else {
        return;
    };
    if req.carrying && ctx.config.loaded_avoids_shelves && ctx.shelves.has_shelf(ahead) {
        return;
    }

    // The departure cell stays claimed for the buffer after leaving.
    let Some(latest_departure) = window.end_ms.checked_sub(ctx.table.buffer_ms()) else {
        return;
    };
    let move_ms = d.move_ms;
    let next = Action::Move.apply(pos);

    for (next_w, next_window) in ctx.table.windows(ahead).iter().enumerate() {
        if next_window.end_ms <= t.saturating_add(move_ms) {
            continue;
        }
        let wanted = next_window.start_ms.saturating_sub(move_ms).max(t);
        let wait_ms = round_up(wanted - t, d.yield_ms);
        let departure = t.saturating_add(wait_ms);
        if departure > latest_departure {
            // Later windows open later still.
            break;
        }
        let arrival = departure.saturating_add(move_ms);
        if arrival > horizon {
            break;
        }
        if !next_window.contains(arrival) {
            continue;
        }
        out.push(Successor {
            pos:     next,
            window:  next_w,
            time_ms: arrival,
            edge:    Edge { action: Action::Move, wait_ms },
        });
    }
}

/// Smallest multiple of `step` that is at least `ms`.
#[inline]
fn round_up(ms: u64, step: u64) -> u64 {
    if step == 0 {
        return ms;
    }
    ms.div_ceil(step).saturating_mul(step)
}

#[inline]
fn goal_reached(window: Window, t: u64, hold: GoalHold) -> bool {
    match hold {
        GoalHold::Indefinite => window.is_unbounded(),
        GoalHold::Dwell(ms) => t.saturating_add(ms) <= window.end_ms,
    }
}

/// Unroll the arena path ending at `goal` into timed actions, expanding each
/// edge's wait into `YIELD` steps.
fn reconstruct(ctx: &LegContext<'_>, nodes: &[Node], goal: usize) -> Vec<ActionWithTime> {
    let d = &ctx.config.durations;

    let mut edges = Vec::new();
    let mut cur = goal;
    while let Some((parent, edge)) = nodes[cur].parent {
        edges.push((parent, edge));
        cur = parent;
    }
    edges.reverse();

    let mut steps = Vec::new();
    for (parent, edge) in edges {
        let p = &nodes[parent];
        let mut t = p.time_ms;
        for _ in 0..edge.wait_ms / d.yield_ms.max(1) {
            let step = ActionWithTime::new(Action::Yield, t, p.pos, d);
            t = step.end_time_ms;
            steps.push(step);
        }
        steps.push(ActionWithTime::new(edge.action, t, p.pos, d));
    }
    steps
}
