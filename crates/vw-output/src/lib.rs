//! `vw-output` — metrics writers and animation rendering for the
//! vacuum_world simulation.
//!
//! Two metrics backends are provided, one behind a Cargo feature:
//!
//! | Feature   | Backend     | Files created                                  |
//! |-----------|-------------|------------------------------------------------|
//! | *(none)*  | CSV         | `tick_summaries.csv`, `trial_summaries.csv`    |
//! | `sqlite`  | SQLite      | `output.db`                                    |
//!
//! Both implement [`OutputWriter`] and are driven by [`SimOutputObserver`],
//! which implements `vw_sim::SimObserver`.
//!
//! [`AnimationRenderer`] turns a recorded history into an animated GIF.
//!
//! # Usage
//!
//! ```rust,ignore
//! use vw_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! obs.begin_trial(0, config.agent_count);
//! world.run_until_clean(&mut obs).unwrap();
//! obs.finish().unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod animation;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use animation::AnimationRenderer;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{TickSummaryRow, TrialSummaryRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
