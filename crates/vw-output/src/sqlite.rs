//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `tick_summaries` and `trial_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OutputResult, TickSummaryRow, TrialSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 trial            INTEGER NOT NULL,
                 tick             INTEGER NOT NULL,
                 clean_percentage INTEGER NOT NULL,
                 dirty_cells      INTEGER NOT NULL,
                 total_steps      INTEGER NOT NULL,
                 PRIMARY KEY (trial, tick)
             );
             CREATE TABLE IF NOT EXISTS trial_summaries (
                 trial            INTEGER PRIMARY KEY,
                 agents           INTEGER NOT NULL,
                 ticks            INTEGER NOT NULL,
                 total_steps      INTEGER NOT NULL,
                 clean_percentage INTEGER NOT NULL,
                 elapsed_secs     REAL    NOT NULL,
                 converged        INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO tick_summaries \
             (trial, tick, clean_percentage, dirty_cells, total_steps) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(rusqlite::params![
            row.trial,
            row.tick,
            row.clean_percentage,
            row.dirty_cells,
            row.total_steps,
        ])?;
        Ok(())
    }

    fn write_trial_summary(&mut self, row: &TrialSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO trial_summaries \
             (trial, agents, ticks, total_steps, clean_percentage, elapsed_secs, converged) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.trial,
                row.agents,
                row.ticks,
                row.total_steps,
                row.clean_percentage,
                row.elapsed_secs,
                row.converged as i64,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
