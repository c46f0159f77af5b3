//! Per-world configuration.

use crate::{GridDims, Tick, VwError, VwResult};

/// Everything needed to construct one world (one trial).
///
/// Built by the application (typically from command-line flags) and passed
/// to `vw_sim::WorldBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    /// Grid width in cells.  Must be > 0.
    pub width: u32,

    /// Grid height in cells.  Must be > 0.
    pub height: u32,

    /// Number of cleaning agents, all starting at the origin cell.
    pub agent_count: usize,

    /// Fraction of cells that start dirty, in `[0, 1]`.  The number of dirty
    /// cells is `floor(fraction * width * height)`.
    pub dirty_fraction: f64,

    /// World RNG seed.  The same seed always produces an identical run.
    pub seed: u64,

    /// Optional safety cap on the number of ticks a trial may run.  `None`
    /// runs until the floor is clean.
    pub max_ticks: Option<u64>,
}

impl WorldConfig {
    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> GridDims {
        GridDims::new(self.width, self.height)
    }

    /// How many cells start dirty (rounded down).
    pub fn dirty_cell_target(&self) -> usize {
        (self.dims().cell_count() as f64 * self.dirty_fraction) as usize
    }

    /// The tick at which a capped trial stops, if any.
    #[inline]
    pub fn end_tick(&self) -> Option<Tick> {
        self.max_ticks.map(Tick)
    }

    /// Reject dimensions and fractions the world cannot be built from.
    pub fn validate(&self) -> VwResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(VwError::Config(format!(
                "grid must be non-empty, got {}",
                self.dims()
            )));
        }
        if !self.dirty_fraction.is_finite() || !(0.0..=1.0).contains(&self.dirty_fraction) {
            return Err(VwError::Config(format!(
                "dirty fraction must be within [0, 1], got {}",
                self.dirty_fraction
            )));
        }
        if self.agent_count == 0 && self.dirty_cell_target() > 0 && self.max_ticks.is_none() {
            return Err(VwError::Config(
                "a dirty floor with no agents and no tick cap never finishes".into(),
            ));
        }
        Ok(())
    }
}
