//! `vw-spatial` — floor state, agent spatial index, and grid snapshots.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`floor`]    | `Floor` (dense clean/dirty array), `CellState`             |
//! | [`space`]    | `GridSpace` trait, `MultiGrid` (co-located agents allowed) |
//! | [`snapshot`] | `GridSnapshot`, `CellCode` (0 clean, 1 agent, 2 dirty)     |
//! | [`error`]    | `SpatialError`, `SpatialResult<T>`                         |

pub mod error;
pub mod floor;
pub mod snapshot;
pub mod space;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use floor::{CellState, Floor};
pub use snapshot::{CellCode, GridSnapshot};
pub use space::{GridSpace, MultiGrid};
