//! `vw-agent` — Structure-of-Arrays agent storage for `vacuum_world`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`store`]   | `AgentStore` (SoA arrays), `AgentRngs` (per-agent RNG)    |
//! | [`builder`] | `AgentStoreBuilder` (fluent construction)                 |

pub mod builder;
pub mod store;


pub use builder::AgentStoreBuilder;
pub use store::{AgentRngs, AgentStore};
