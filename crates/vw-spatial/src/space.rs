//! Agent placement on the grid.
//!
//! # Pluggability
//!
//! Behaviors and snapshot capture read agent locations only through the
//! [`GridSpace`] trait, so the world's spatial index can be replaced without
//! touching them.  [`MultiGrid`] is the default: any number of agents may
//! share a cell.
//!
//! # Data layout
//!
//! `MultiGrid` keeps two dense arrays:
//!
//! ```text
//! positions[agent.index()]   → GridPos        (one per agent)
//! occupancy[dims.index_of(p)] → u32 agents    (one per cell)
//! ```
//!
//! Both are updated together on every move, so "is this cell empty?" is an
//! O(1) lookup rather than a scan over all agents.

use vw_core::{AgentId, GridDims, GridPos};

use crate::{SpatialError, SpatialResult};

// ── GridSpace trait ───────────────────────────────────────────────────────────

/// Spatial index of agent positions on a bounded grid.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a shared reference can be read
/// from Rayon workers during a parallel intent phase.
pub trait GridSpace: Send + Sync {
    /// Grid dimensions.
    fn dims(&self) -> GridDims;

    /// Number of placed agents.  Agent ids are dense: `0..agent_count()`.
    fn agent_count(&self) -> usize;

    /// Current cell of `agent`, or `None` if it was never placed.
    fn position(&self, agent: AgentId) -> Option<GridPos>;

    /// Place a new agent at `pos` and return its id (the next dense index).
    fn place_agent(&mut self, pos: GridPos) -> SpatialResult<AgentId>;

    /// Relocate an already-placed agent to `to`.
    fn move_agent(&mut self, agent: AgentId, to: GridPos) -> SpatialResult<()>;

    /// How many agents currently stand on `pos` (0 when out of bounds).
    fn occupants(&self, pos: GridPos) -> u32;

    /// `true` if no agent stands on `pos`.
    fn is_cell_empty(&self, pos: GridPos) -> bool {
        self.occupants(pos) == 0
    }

    /// Every placed agent with its position, in ascending id order.
    fn agent_positions(&self) -> Vec<(AgentId, GridPos)> {
        (0..self.agent_count() as u32)
            .map(AgentId)
            .filter_map(|a| self.position(a).map(|p| (a, p)))
            .collect()
    }
}

// ── MultiGrid ─────────────────────────────────────────────────────────────────

/// Default [`GridSpace`]: unbounded co-location, no wrap-around.
#[derive(Clone, Debug)]
pub struct MultiGrid {
    dims:      GridDims,
    positions: Vec<GridPos>,
    occupancy: Vec<u32>,
}

impl MultiGrid {
    /// An empty grid with no agents.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            positions: Vec::new(),
            occupancy: vec![0; dims.cell_count()],
        }
    }

    /// A grid with `count` agents all standing on `start`.
    pub fn with_agents_at(dims: GridDims, count: usize, start: GridPos) -> SpatialResult<Self> {
        let mut grid = Self::new(dims);
        grid.positions.reserve(count);
        for _ in 0..count {
            grid.place_agent(start)?;
        }
        Ok(grid)
    }

    /// Raw position slice indexed by `AgentId`.
    #[inline]
    pub fn positions(&self) -> &[GridPos] {
        &self.positions
    }

    fn check_bounds(&self, pos: GridPos) -> SpatialResult<usize> {
        if self.dims.contains(pos) {
            Ok(self.dims.index_of(pos))
        } else {
            Err(SpatialError::OutOfBounds { pos, dims: self.dims })
        }
    }
}

impl GridSpace for MultiGrid {
    #[inline]
    fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    fn agent_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    fn position(&self, agent: AgentId) -> Option<GridPos> {
        self.positions.get(agent.index()).copied()
    }

    fn place_agent(&mut self, pos: GridPos) -> SpatialResult<AgentId> {
        let cell = self.check_bounds(pos)?;
        let id = AgentId(self.positions.len() as u32);
        self.positions.push(pos);
        self.occupancy[cell] += 1;
        Ok(id)
    }

    fn move_agent(&mut self, agent: AgentId, to: GridPos) -> SpatialResult<()> {
        let to_cell = self.check_bounds(to)?;
        let from = self
            .position(agent)
            .ok_or(SpatialError::UnknownAgent(agent))?;
        let from_cell = self.dims.index_of(from);

        self.occupancy[from_cell] -= 1;
        self.occupancy[to_cell] += 1;
        self.positions[agent.index()] = to;
        Ok(())
    }

    #[inline]
    fn occupants(&self, pos: GridPos) -> u32 {
        if self.dims.contains(pos) {
            self.occupancy[self.dims.index_of(pos)]
        } else {
            0
        }
    }
}
