//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `tick_summaries.csv`
//! - `trial_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OutputResult, TickSummaryRow, TrialSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    ticks:    Writer<File>,
    trials:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut ticks = Writer::from_path(dir.join("tick_summaries.csv"))?;
        ticks.write_record(["trial", "tick", "clean_percentage", "dirty_cells", "total_steps"])?;

        let mut trials = Writer::from_path(dir.join("trial_summaries.csv"))?;
        trials.write_record([
            "trial",
            "agents",
            "ticks",
            "total_steps",
            "clean_percentage",
            "elapsed_secs",
            "converged",
        ])?;

        Ok(Self {
            ticks,
            trials,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.ticks.write_record(&[
            row.trial.to_string(),
            row.tick.to_string(),
            row.clean_percentage.to_string(),
            row.dirty_cells.to_string(),
            row.total_steps.to_string(),
        ])?;
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.trials.write_record(&[
            row.trial.to_string(),
            row.agents.to_string(),
            row.ticks.to_string(),
            row.total_steps.to_string(),
            row.clean_percentage.to_string(),
            format!("{:.6}", row.elapsed_secs),
            (row.converged as u8).to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.ticks.flush()?;
        self.trials.flush()?;
        Ok(())
    }
}
