//! `vw-behavior` — agent behavior model trait and intent types.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Clean`, `MoveTo`)                               |
//! | [`context`] | `SimContext<'a>` — read-only tick view shared by all agents     |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`cleaner`] | `RandomCleaner` — clean the current cell, then step randomly    |
//! | [`noop`]    | `NoopBehavior` — placeholder that never produces intents        |
//!
//! # Design notes
//!
//! The two-phase tick loop in vw-sim works as follows:
//!
//! 1. **Intent phase**: for every agent, call `BehaviorModel::replan`.  All
//!    reads go through `&SimContext`; no mutation.
//!
//! 2. **Apply phase** (sequential): consume the collected `Vec<Intent>`s in
//!    ascending `AgentId` order and mutate the floor, spatial index, and
//!    step counters.
//!
//! An agent's intents depend only on its own position, the cell under it,
//! and its own RNG, so the split gives the same result as letting agents act
//! one after another.

pub mod cleaner;
pub mod context;
pub mod intent;
pub mod model;
pub mod noop;

#[cfg(test)]
mod tests;

pub use cleaner::RandomCleaner;
pub use context::SimContext;
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
