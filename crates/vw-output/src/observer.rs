//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use vw_sim::{SimObserver, TickStats, TrialOutcome};

use crate::row::{TickSummaryRow, TrialSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick and trial summaries to any
/// [`OutputWriter`] backend (CSV, SQLite).
///
/// One observer spans every trial of an experiment: call
/// [`begin_trial`](Self::begin_trial) before each run so rows carry the right
/// trial index and agent count.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `world.run_until_clean()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    trial:      u32,
    agents:     u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trial:      0,
            agents:     0,
            last_error: None,
        }
    }

    /// Tag subsequent rows with `trial` and `agents`.
    pub fn begin_trial(&mut self, trial: u32, agents: usize) {
        self.trial = trial;
        self.agents = agents as u64;
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer once every trial is done.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.writer.finish()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, stats: &TickStats) {
        let row = TickSummaryRow {
            trial:            self.trial,
            tick:             stats.tick.0,
            clean_percentage: stats.clean_percentage,
            dirty_cells:      stats.dirty_cells as u64,
            total_steps:      stats.total_steps,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, outcome: &TrialOutcome) {
        let row = TrialSummaryRow {
            trial:            self.trial,
            agents:           self.agents,
            ticks:            outcome.ticks,
            total_steps:      outcome.total_steps,
            clean_percentage: outcome.clean_percentage,
            elapsed_secs:     outcome.elapsed.as_secs_f64(),
            converged:        outcome.converged,
        };
        let result = self.writer.write_trial_summary(&row);
        self.store_err(result);
    }
}
