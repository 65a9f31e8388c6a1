//! Planner configuration.
//!
//! # Time model
//!
//! All times are integer milliseconds measured from the start of the
//! planning round (time zero).  Integer time keeps interval arithmetic exact,
//! so window boundaries compare without tolerance.
//!
//! Durations are fixed configuration, not discovered at runtime.  The demo
//! application loads a `PlannerConfig` from JSON (feature `serde`); library
//! users typically start from `PlannerConfig::default()`.

use crate::{CoreError, CoreResult};

// ── ActionDurations ───────────────────────────────────────────────────────────

/// Fixed duration of each [`Action`][crate::Action] in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ActionDurations {
    pub move_ms:   u64,
    pub cturn_ms:  u64,
    pub ccturn_ms: u64,
    pub yield_ms:  u64,
    pub attach_ms: u64,
    pub detach_ms: u64,
}

impl Default for ActionDurations {
    fn default() -> Self {
        Self {
            move_ms:   1_000,
            cturn_ms:  1_000,
            ccturn_ms: 1_000,
            yield_ms:  500,
            attach_ms: 2_000,
            detach_ms: 2_000,
        }
    }
}

// ── PlannerConfig ─────────────────────────────────────────────────────────────

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Per-action durations.
    pub durations: ActionDurations,

    /// Extra time a cell stays reserved after a robot starts moving out of
    /// it.  Must exceed `durations.move_ms`, otherwise two robots could swap
    /// cells head-on.
    pub buffer_ms: u64,

    /// Node-expansion budget of a single route search.  Exhausting it yields
    /// `RouteError::BudgetExhausted` instead of searching forever.
    pub max_expansions: usize,

    /// Search states whose time exceeds this are never generated.
    pub horizon_ms: u64,

    /// When `true`, a robot carrying a shelf may not drive under a cell that
    /// still holds another shelf.
    pub loaded_avoids_shelves: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            durations:             ActionDurations::default(),
            buffer_ms:             1_200,
            max_expansions:        200_000,
            horizon_ms:            600_000,
            loaded_avoids_shelves: true,
        }
    }
}

impl PlannerConfig {
    /// Check the configuration for values the planner cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        let d = &self.durations;
        let named = [
            ("move_ms", d.move_ms),
            ("cturn_ms", d.cturn_ms),
            ("ccturn_ms", d.ccturn_ms),
            ("yield_ms", d.yield_ms),
            ("attach_ms", d.attach_ms),
            ("detach_ms", d.detach_ms),
        ];
        if let Some((name, _)) = named.iter().find(|(_, ms)| *ms == 0) {
            return Err(CoreError::Config(format!("{name} must be greater than zero")));
        }
        if self.buffer_ms <= d.move_ms {
            return Err(CoreError::Config(format!(
                "buffer_ms ({}) must exceed move_ms ({})",
                self.buffer_ms, d.move_ms
            )));
        }
        if self.max_expansions == 0 {
            return Err(CoreError::Config("max_expansions must be greater than zero".into()));
        }
        Ok(())
    }

    /// Dwell a pickup leg needs at its goal: the ATTACH plus the departure
    /// buffer of the following leg.
    #[inline]
    pub fn pickup_dwell_ms(&self) -> u64 {
        self.durations.attach_ms + self.buffer_ms
    }
}
