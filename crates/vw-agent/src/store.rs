//! Core agent storage: `AgentStore` (SoA data) and `AgentRngs` (per-agent RNG).
//!
//! # Why two structs?
//!
//! The intent phase needs `&mut AgentRngs` (exclusive mutable access to each
//! agent's RNG) and `&AgentStore` (shared read access through the behavior
//! context) simultaneously.  Keeping RNGs in a separate struct lets the
//! borrow checker see the two borrows as disjoint:
//!
//! ```ignore
//! // vw-sim tick loop (simplified):
//! let ctx = SimContext::new(tick, &world.floor, &world.space, &world.agents);
//! let intents = world.rngs.inner
//!     .iter_mut()
//!     .enumerate()
//!     .map(|(i, rng)| behavior.replan(AgentId(i as u32), &ctx, rng))
//!     .collect::<Vec<_>>();
//! ```
//!
//! Positions are not stored here: they belong to the world's spatial index
//! (`vw_spatial::MultiGrid`), which is the single writer of agent location.

use vw_core::{AgentId, AgentRng};

// ── AgentRngs ─────────────────────────────────────────────────────────────────

/// Per-agent deterministic RNG state, separated from [`AgentStore`] to enable
/// simultaneous `&mut AgentRngs` + `&AgentStore` borrows in the intent phase.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `world_seed`.
    pub(crate) fn new(count: usize, world_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(world_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── AgentStore ────────────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for per-agent state.
///
/// Every `Vec` field has exactly `count` elements; the `AgentId` value is the
/// index into all of them:
///
/// ```ignore
/// let moved = store.steps[agent.index()];
/// ```
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Successful in-bounds moves made by each agent.  Only ever incremented,
    /// and only for the agent that moved.
    pub steps: Vec<u64>,
}

impl AgentStore {
    pub(crate) fn new(count: usize) -> Self {
        Self {
            count,
            steps: vec![0; count],
        }
    }

    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// Personal step counter of `agent`.
    #[inline]
    pub fn steps_of(&self, agent: AgentId) -> u64 {
        self.steps[agent.index()]
    }

    /// Count one successful move for `agent`.
    #[inline]
    pub fn record_step(&mut self, agent: AgentId) {
        self.steps[agent.index()] += 1;
    }

    /// Sum of every agent's personal counter.
    pub fn total_steps(&self) -> u64 {
        self.steps.iter().sum()
    }
}
