//! The `World` struct and its tick loop.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use vw_agent::{AgentRngs, AgentStore};
use vw_behavior::{BehaviorModel, Intent, SimContext};
use vw_core::{AgentId, GridPos, Tick, WorldConfig};
use vw_spatial::{Floor, GridSnapshot, GridSpace, MultiGrid};

use crate::{SimObserver, SimResult, TickStats};

// ── TrialOutcome ──────────────────────────────────────────────────────────────

/// Summary of one finished trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialOutcome {
    /// Ticks executed.
    pub ticks: u64,
    /// Global step counter at the end of the trial.
    pub total_steps: u64,
    /// Truncated clean percentage at the end of the trial.
    pub clean_percentage: u32,
    /// Wall-clock time spent inside `World::step`.
    pub elapsed: Duration,
    /// `true` if the floor is fully clean; `false` if the tick cap stopped
    /// the trial first.
    pub converged: bool,
}

// ── World ─────────────────────────────────────────────────────────────────────

/// One trial's worth of simulation state.
///
/// `World<B>` owns the floor, the spatial index, per-agent state and RNGs,
/// and drives the three-phase tick:
///
/// 1. **Snapshot**: observers see the floor and positions as the tick begins.
/// 2. **Intent phase** (optionally parallel with the `parallel` feature):
///    call [`BehaviorModel::replan`] once for every agent.
/// 3. **Apply phase** (sequential, ascending `AgentId`):
///    - `Clean(pos)`  → mark the cell clean.
///    - `MoveTo(pos)` → relocate the agent; bump its own and the global
///      step counter.
///
/// The wall-clock duration of each tick is accumulated into
/// [`total_time`](Self::total_time).
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<B: BehaviorModel> {
    /// The configuration this world was built from.
    pub config: WorldConfig,

    /// Clean/dirty state of every cell.
    pub floor: Floor,

    /// Agent positions.  The single writer of agent location.
    pub space: MultiGrid,

    /// Per-agent step counters.
    pub agents: AgentStore,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// The behavior model.  Called once per agent per tick.
    pub behavior: B,

    pub(crate) tick:        Tick,
    pub(crate) total_steps: u64,
    pub(crate) elapsed:     Duration,
}

impl<B: BehaviorModel> World<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run one tick: snapshot, then every agent acts once.
    ///
    /// Returns the number of agents that moved this tick.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<usize> {
        let started = Instant::now();
        let now = self.tick;

        observer.on_tick_start(now);
        observer.on_snapshot(now, &self.floor, &self.space);

        let intents = self.compute_intents(now);

        // Intents arrive in ascending AgentId order; applying them in that
        // order keeps results identical whether or not the intent phase ran
        // in parallel.
        let mut moved = 0;
        for (i, agent_intents) in intents.into_iter().enumerate() {
            if self.apply_intents(AgentId(i as u32), agent_intents)? {
                moved += 1;
            }
        }

        self.tick = now.next();
        self.elapsed += started.elapsed();

        let stats = TickStats {
            tick:             now,
            moved,
            total_steps:      self.total_steps,
            dirty_cells:      self.floor.dirty_count(),
            clean_percentage: self.floor.clean_percentage(),
        };
        trace!(tick = now.0, moved, dirty = stats.dirty_cells, "tick complete");
        observer.on_tick_end(&stats);

        Ok(moved)
    }

    /// Step until the floor is clean, or until `config.max_ticks` ticks have
    /// run if a cap is set.
    ///
    /// Without a cap this only returns once every cell is clean.  That is
    /// guaranteed to happen eventually on a finite grid with at least one
    /// agent, but there is no bound on how long it takes.
    pub fn run_until_clean<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TrialOutcome> {
        let end = self.config.end_tick();
        while !self.is_all_clean() {
            if end.is_some_and(|end| self.tick >= end) {
                break;
            }
            self.step(observer)?;
        }

        let outcome = self.outcome();
        debug!(
            agents = self.agents.count,
            ticks = outcome.ticks,
            steps = outcome.total_steps,
            converged = outcome.converged,
            "trial finished"
        );
        observer.on_sim_end(&outcome);
        Ok(outcome)
    }

    /// Run exactly `n` ticks, whether or not the floor becomes clean.
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    // ── Metrics ───────────────────────────────────────────────────────────

    /// `true` iff every cell is clean.
    #[inline]
    pub fn is_all_clean(&self) -> bool {
        self.floor.is_all_clean()
    }

    /// Percentage of clean cells, `clean * 100 / total` rounded down.
    #[inline]
    pub fn clean_percentage(&self) -> u32 {
        self.floor.clean_percentage()
    }

    /// Alias of [`clean_percentage`](Self::clean_percentage).
    #[inline]
    pub fn calculate_clean_cells(&self) -> u32 {
        self.clean_percentage()
    }

    /// Global step counter: successful moves by all agents so far.
    #[inline]
    pub fn total_steps(&self) -> u64 {
        self.total_steps
    }

    /// Accumulated wall-clock time spent in [`step`](Self::step).
    #[inline]
    pub fn total_time(&self) -> Duration {
        self.elapsed
    }

    /// The next tick to run (equals the number of ticks run so far).
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn dirty_cells(&self) -> usize {
        self.floor.dirty_count()
    }

    /// Current cell of `agent`, or `None` if there is no such agent.
    #[inline]
    pub fn agent_position(&self, agent: AgentId) -> Option<GridPos> {
        self.space.position(agent)
    }

    /// Personal step counter of `agent`.
    ///
    /// # Panics
    /// Panics if `agent` is out of range.
    #[inline]
    pub fn agent_steps(&self, agent: AgentId) -> u64 {
        self.agents.steps_of(agent)
    }

    /// Capture the grid as it stands now.
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::capture(&self.floor, &self.space)
    }

    /// Figures for the trial so far.
    pub fn outcome(&self) -> TrialOutcome {
        TrialOutcome {
            ticks:            self.tick.0,
            total_steps:      self.total_steps,
            clean_percentage: self.clean_percentage(),
            elapsed:          self.elapsed,
            converged:        self.is_all_clean(),
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Compute intents for every agent, indexed by `AgentId`.
    ///
    /// With the `parallel` Cargo feature, `replan` runs on Rayon's thread
    /// pool.
    fn compute_intents(&mut self, now: Tick) -> Vec<Vec<Intent>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let behavior = &self.behavior;
        let rngs     = &mut self.rngs.inner;
        let ctx      = SimContext::new(now, &self.floor, &self.space, &self.agents);

        #[cfg(not(feature = "parallel"))]
        {
            rngs.iter_mut()
                .enumerate()
                .map(|(i, rng)| behavior.replan(AgentId(i as u32), &ctx, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            rngs.par_iter_mut()
                .enumerate()
                .map(|(i, rng)| behavior.replan(AgentId(i as u32), &ctx, rng))
                .collect()
        }
    }

    /// Apply one agent's intents.  Returns `true` if the agent moved.
    fn apply_intents(&mut self, agent: AgentId, intents: Vec<Intent>) -> SimResult<bool> {
        let mut moved = false;
        for intent in intents {
            match intent {
                Intent::Clean(pos) => {
                    self.floor.clean(pos)?;
                }
                Intent::MoveTo(to) => {
                    self.space.move_agent(agent, to)?;
                    self.agents.record_step(agent);
                    self.total_steps += 1;
                    moved = true;
                }
            }
        }
        Ok(moved)
    }
}
