//! `vw-sim` — tick loop orchestrator for the vacuum_world simulation.
//!
//! # Tick loop
//!
//! ```text
//! while !floor.is_all_clean() (and tick < max_ticks, if capped):
//!   ① Snapshot — observers see the floor and agent positions.
//!   ② Intents  — call BehaviorModel::replan for every agent
//!                (parallel with the `parallel` feature).
//!   ③ Apply    — for each agent in ascending AgentId order:
//!                  Clean(pos)  → mark the cell clean
//!                  MoveTo(pos) → relocate; bump personal + global steps
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the intent phase on Rayon's thread pool.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vw_behavior::RandomCleaner;
//! use vw_core::WorldConfig;
//! use vw_sim::{NoopObserver, WorldBuilder};
//!
//! let mut world = WorldBuilder::new(config, RandomCleaner).build()?;
//! let outcome = world.run_until_clean(&mut NoopObserver)?;
//! println!("{}% clean after {} steps", outcome.clean_percentage, outcome.total_steps);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod world;


pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{HistoryRecorder, NoopObserver, SimObserver, TickStats};
pub use world::{TrialOutcome, World};
