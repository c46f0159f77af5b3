//! Fluent builder for constructing a [`World`].

use std::time::Duration;

use tracing::debug;

use vw_agent::AgentStoreBuilder;
use vw_behavior::BehaviorModel;
use vw_core::{GridPos, SimRng, Tick, WorldConfig};
use vw_spatial::{Floor, MultiGrid};

use crate::{SimError, SimResult, World};

/// Fluent builder for [`World<B>`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: grid size, agent count, dirty fraction, seed, tick cap
/// - `B: BehaviorModel`: the behavior implementation
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                 |
/// |------------------|-------------------------|
/// | `.start_at(pos)` | `GridPos::ORIGIN` (0,0) |
///
/// # Example
///
/// ```rust,ignore
/// let mut world = WorldBuilder::new(config, RandomCleaner).build()?;
/// let outcome = world.run_until_clean(&mut NoopObserver)?;
/// ```
pub struct WorldBuilder<B: BehaviorModel> {
    config:   WorldConfig,
    behavior: B,
    start:    GridPos,
}

impl<B: BehaviorModel> WorldBuilder<B> {
    pub fn new(config: WorldConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            start: GridPos::ORIGIN,
        }
    }

    /// Place every agent on `pos` instead of the origin.
    pub fn start_at(mut self, pos: GridPos) -> Self {
        self.start = pos;
        self
    }

    /// Validate the configuration, scatter dirt, place agents, and return a
    /// ready-to-run [`World`].
    ///
    /// Seeding is deterministic: the agent seed is drawn from the world RNG
    /// first, then the same RNG places the dirt.
    pub fn build(self) -> SimResult<World<B>> {
        let config = self.config;
        config.validate()?;

        let agent_count = config.agent_count;
        if u32::try_from(agent_count).is_err() {
            return Err(SimError::TooManyAgents(agent_count));
        }

        let dims = config.dims();
        let mut world_rng = SimRng::new(config.seed);
        let agent_seed = world_rng.child_seed(0);

        let mut floor = Floor::new_clean(dims);
        floor.scatter_dirt(config.dirty_cell_target(), &mut world_rng)?;

        let space = MultiGrid::with_agents_at(dims, agent_count, self.start)?;
        let (agents, rngs) = AgentStoreBuilder::new(agent_count, agent_seed).build();

        debug!(
            %dims,
            agents = agent_count,
            dirty = floor.dirty_count(),
            seed = config.seed,
            "world built"
        );

        Ok(World {
            config,
            floor,
            space,
            agents,
            rngs,
            behavior:    self.behavior,
            tick:        Tick::ZERO,
            total_steps: 0,
            elapsed:     Duration::ZERO,
        })
    }
}
