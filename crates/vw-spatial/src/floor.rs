//! The floor: one clean/dirty flag per grid cell.
//!
//! # Data layout
//!
//! Cells are a dense row-major `Vec<CellState>` indexed through
//! [`GridDims::index_of`].  A running count of dirty cells is kept alongside
//! so the "is everything clean?" check the trial loop performs every tick is
//! O(1) instead of a full scan.

use vw_core::{GridDims, GridPos, SimRng};

use crate::{SpatialError, SpatialResult};

/// State of a single cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum CellState {
    #[default]
    Clean,
    Dirty,
}

/// Dense clean/dirty array owned by the world.
///
/// Invariant: `dirty == cells.iter().filter(|c| **c == Dirty).count()`.
#[derive(Clone, Debug)]
pub struct Floor {
    dims:  GridDims,
    cells: Vec<CellState>,
    dirty: usize,
}

impl Floor {
    /// An all-clean floor of the given size.
    pub fn new_clean(dims: GridDims) -> Self {
        Self {
            dims,
            cells: vec![CellState::Clean; dims.cell_count()],
            dirty: 0,
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// State of the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: GridPos) -> CellState {
        self.cells[self.dims.index_of(pos)]
    }

    #[inline]
    pub fn is_dirty(&self, pos: GridPos) -> bool {
        self.get(pos) == CellState::Dirty
    }

    /// Mark `pos` dirty.  Returns `true` if it was clean before.
    pub fn dirty(&mut self, pos: GridPos) -> SpatialResult<bool> {
        let i = self.checked_index(pos)?;
        if self.cells[i] == CellState::Clean {
            self.cells[i] = CellState::Dirty;
            self.dirty += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Mark `pos` clean.  Returns `true` if it was dirty before; cleaning a
    /// clean cell is a no-op.
    pub fn clean(&mut self, pos: GridPos) -> SpatialResult<bool> {
        let i = self.checked_index(pos)?;
        if self.cells[i] == CellState::Dirty {
            self.cells[i] = CellState::Clean;
            self.dirty -= 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Dirty exactly `count` distinct cells chosen uniformly at random.
    ///
    /// Cells are sampled without replacement, so the call always terminates,
    /// including when every cell is requested.  Cells that are already dirty
    /// may be among those picked; the floor then ends up with fewer than
    /// `dirty_count() + count` dirty cells.  Call this on a clean floor to get
    /// exactly `count`.
    pub fn scatter_dirt(&mut self, count: usize, rng: &mut SimRng) -> SpatialResult<()> {
        let available = self.cells.len();
        if count > available {
            return Err(SpatialError::TooMuchDirt { requested: count, available });
        }
        for i in rng.sample_indices(available, count) {
            if self.cells[i] == CellState::Clean {
                self.cells[i] = CellState::Dirty;
                self.dirty += 1;
            }
        }
        Ok(())
    }

    // ── Metrics ───────────────────────────────────────────────────────────

    #[inline]
    pub fn dirty_count(&self) -> usize {
        self.dirty
    }

    #[inline]
    pub fn clean_count(&self) -> usize {
        self.cells.len() - self.dirty
    }

    /// `true` iff no cell is dirty.
    #[inline]
    pub fn is_all_clean(&self) -> bool {
        self.dirty == 0
    }

    /// Percentage of clean cells, truncated: `clean * 100 / total`.
    pub fn clean_percentage(&self) -> u32 {
        let total = self.cells.len();
        if total == 0 {
            return 100;
        }
        (self.clean_count() * 100 / total) as u32
    }

    /// Every cell with its position, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (GridPos, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &state)| (self.dims.pos_of(i), state))
    }

    fn checked_index(&self, pos: GridPos) -> SpatialResult<usize> {
        if self.dims.contains(pos) {
            Ok(self.dims.index_of(pos))
        } else {
            Err(SpatialError::OutOfBounds { pos, dims: self.dims })
        }
    }
}
