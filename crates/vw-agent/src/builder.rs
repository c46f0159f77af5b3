//! Fluent builder for constructing `AgentStore` + `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use vw_agent::AgentStoreBuilder;
//!
//! let (store, rngs) = AgentStoreBuilder::new(25, /*seed=*/ 42).build();
//!
//! assert_eq!(store.count, 25);
//! assert_eq!(rngs.len(),  25);
//! assert_eq!(store.total_steps(), 0);
//! ```

use crate::{AgentRngs, AgentStore};

/// Fluent builder for [`AgentStore`] + [`AgentRngs`].
///
/// All arrays are pre-allocated at construction time so later writes are
/// simple indexed assignments, not pushes.
pub struct AgentStoreBuilder {
    count: usize,
    seed:  u64,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents using `seed` as the world RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self { count, seed }
    }

    /// Construct `AgentStore` and `AgentRngs`.
    ///
    /// Step counters start at zero; each agent's RNG is seeded from the world
    /// seed and its own id.
    pub fn build(self) -> (AgentStore, AgentRngs) {
        let store = AgentStore::new(self.count);
        let rngs = AgentRngs::new(self.count, self.seed);
        (store, rngs)
    }
}
