//! Spatial-subsystem error type.

use thiserror::Error;

use vw_core::{AgentId, GridDims, GridPos};

/// Errors produced by `vw-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {pos} lies outside the {dims} grid")]
    OutOfBounds { pos: GridPos, dims: GridDims },

    #[error("agent {0} is not placed on the grid")]
    UnknownAgent(AgentId),

    #[error("cannot dirty {requested} cells on a grid of {available}")]
    TooMuchDirt { requested: usize, available: usize },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
