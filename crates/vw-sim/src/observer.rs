//! Simulation observer trait for progress reporting and data collection.

use vw_core::Tick;
use vw_spatial::{Floor, GridSnapshot, GridSpace};

use crate::TrialOutcome;

/// Per-tick figures handed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    /// The tick that just finished.
    pub tick: Tick,
    /// Agents that made an in-bounds move this tick (0 to N).
    pub moved: usize,
    /// Global step counter after this tick.
    pub total_steps: u64,
    /// Dirty cells remaining after this tick.
    pub dirty_cells: usize,
    /// Truncated clean percentage after this tick.
    pub clean_percentage: u32,
}

/// Callbacks invoked by [`World::step`][crate::World::step] and
/// [`World::run_until_clean`][crate::World::run_until_clean].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, stats: &TickStats) {
///         if stats.tick.0 % self.interval == 0 {
///             println!("{}: {}% clean", stats.tick, stats.clean_percentage);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per tick, before any agent acts.
    ///
    /// Provides read-only access to the floor and agent positions so that
    /// recorders can capture a frame without the world knowing about any
    /// specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _floor: &Floor, _space: &dyn GridSpace) {}

    /// Called at the end of each tick, after every agent has acted.
    fn on_tick_end(&mut self, _stats: &TickStats) {}

    /// Called once when a trial stops, either converged or capped.
    fn on_sim_end(&mut self, _outcome: &TrialOutcome) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }

    fn on_snapshot(&mut self, tick: Tick, floor: &Floor, space: &dyn GridSpace) {
        (**self).on_snapshot(tick, floor, space);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        (**self).on_tick_end(stats);
    }

    fn on_sim_end(&mut self, outcome: &TrialOutcome) {
        (**self).on_sim_end(outcome);
    }
}

/// Fan every callback out to two observers, first `.0` then `.1`.
impl<A: SimObserver, B: SimObserver> SimObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }

    fn on_snapshot(&mut self, tick: Tick, floor: &Floor, space: &dyn GridSpace) {
        self.0.on_snapshot(tick, floor, space);
        self.1.on_snapshot(tick, floor, space);
    }

    fn on_tick_end(&mut self, stats: &TickStats) {
        self.0.on_tick_end(stats);
        self.1.on_tick_end(stats);
    }

    fn on_sim_end(&mut self, outcome: &TrialOutcome) {
        self.0.on_sim_end(outcome);
        self.1.on_sim_end(outcome);
    }
}

// ── HistoryRecorder ───────────────────────────────────────────────────────────

/// Collects one [`GridSnapshot`] per tick for later animation.
///
/// With a limit, only the first `limit` frames are kept; later snapshots are
/// dropped without being captured.
#[derive(Default)]
pub struct HistoryRecorder {
    frames: Vec<GridSnapshot>,
    limit:  Option<usize>,
}

impl HistoryRecorder {
    /// Record every tick.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record at most `limit` ticks.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            frames: Vec::with_capacity(limit),
            limit:  Some(limit),
        }
    }

    /// Frames recorded so far, oldest first.
    pub fn frames(&self) -> &[GridSnapshot] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Consume the recorder and return its frames.
    pub fn into_frames(self) -> Vec<GridSnapshot> {
        self.frames
    }
}

impl SimObserver for HistoryRecorder {
    fn on_snapshot(&mut self, _tick: Tick, floor: &Floor, space: &dyn GridSpace) {
        if self.limit.is_some_and(|limit| self.frames.len() >= limit) {
            return;
        }
        self.frames.push(GridSnapshot::capture(floor, space));
    }
}
