//! `vw-core` — foundational types for the `vacuum_world` simulation.
//!
//! This crate is a dependency of every other `vw-*` crate.  It intentionally
//! has no `vw-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`ids`]     | `AgentId`                                                 |
//! | [`grid`]    | `GridPos`, `Offset`, `GridDims`, `NEIGHBOR_OFFSETS`       |
//! | [`time`]    | `Tick`                                                    |
//! | [`config`]  | `WorldConfig`                                             |
//! | [`rng`]     | `AgentRng` (per-agent), `SimRng` (world-level)            |
//! | [`error`]   | `VwError`, `VwResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::WorldConfig;
pub use error::{VwError, VwResult};
pub use grid::{GridDims, GridPos, NEIGHBOR_OFFSETS, Offset};
pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
