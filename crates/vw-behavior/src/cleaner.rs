//! The random-walk vacuum cleaner.

use vw_core::{AgentId, AgentRng, NEIGHBOR_OFFSETS};

use crate::{BehaviorModel, Intent, SimContext};

/// Cleans the cell it stands on, then tries one random step.
///
/// Each tick the agent:
///
/// 1. emits [`Intent::Clean`] for its own cell if that cell is dirty;
/// 2. draws one of the eight [`NEIGHBOR_OFFSETS`] uniformly and emits
///    [`Intent::MoveTo`] if the target lies inside the grid.  An offset that
///    would leave the grid wastes the tick's move; there is no redraw.
pub struct RandomCleaner;

impl RandomCleaner {
    /// Intent to clean the agent's current cell, if it is dirty.
    pub fn clean(&self, agent: AgentId, ctx: &SimContext<'_>) -> Option<Intent> {
        let pos = ctx.position(agent)?;
        ctx.floor.is_dirty(pos).then_some(Intent::Clean(pos))
    }

    /// Intent to move to a uniformly chosen neighbour, if it is in bounds.
    ///
    /// The offset is always drawn, even when the agent is unplaced, so every
    /// call consumes the same amount of randomness.
    pub fn move_randomly(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Option<Intent> {
        let offset = NEIGHBOR_OFFSETS[rng.gen_range(0..NEIGHBOR_OFFSETS.len())];
        let from = ctx.position(agent)?;
        ctx.dims().step(from, offset).map(Intent::MoveTo)
    }
}

impl BehaviorModel for RandomCleaner {
    fn replan(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        self.clean(agent, ctx)
            .into_iter()
            .chain(self.move_randomly(agent, ctx, rng))
            .collect()
    }
}
