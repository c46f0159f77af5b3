//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `VwError` where a core
//! failure can surface through them (e.g. `SimError::Config`).

use thiserror::Error;

/// The top-level error type for `vw-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VwError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `vw-core`.
pub type VwResult<T> = Result<T, VwError>;
