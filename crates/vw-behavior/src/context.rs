//! Read-only simulation state passed to every behavior callback.

use vw_agent::AgentStore;
use vw_core::{AgentId, GridDims, GridPos, Tick};
use vw_spatial::{Floor, GridSpace};

/// A read-only view of the world passed to every
/// [`BehaviorModel`][crate::BehaviorModel] callback.
///
/// `SimContext` is built once per tick by vw-sim and shared (immutably) across
/// all agent callbacks during the intent phase.
///
/// # Lifetimes
///
/// All borrows live for the duration of one tick's intent phase.  vw-sim
/// never allows mutable access to these structures while `SimContext` is live,
/// so every agent sees the world exactly as it was when the tick began.
pub struct SimContext<'a> {
    /// Current simulation tick.
    pub tick: Tick,

    /// Clean/dirty state of every cell.
    pub floor: &'a Floor,

    /// Agent positions.
    pub space: &'a dyn GridSpace,

    /// Per-agent SoA state (step counters).
    pub agents: &'a AgentStore,
}

impl<'a> SimContext<'a> {
    /// Build a new context for a single tick.
    #[inline]
    pub fn new(
        tick:   Tick,
        floor:  &'a Floor,
        space:  &'a dyn GridSpace,
        agents: &'a AgentStore,
    ) -> Self {
        Self { tick, floor, space, agents }
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> GridDims {
        self.space.dims()
    }

    /// Where `agent` currently stands, if placed.
    #[inline]
    pub fn position(&self, agent: AgentId) -> Option<GridPos> {
        self.space.position(agent)
    }
}
