use thiserror::Error;
use vw_core::VwError;
use vw_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world configuration rejected: {0}")]
    Config(#[from] VwError),

    #[error("too many agents: {0} does not fit in an AgentId")]
    TooManyAgents(usize),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
