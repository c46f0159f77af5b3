//! One recorded frame of the grid, as consumed by the animation renderer.

use vw_core::{GridDims, GridPos};

use crate::{Floor, GridSpace};

/// Per-cell value of a [`GridSnapshot`].
///
/// Agent presence takes priority over dirt: a dirty cell with an agent on it
/// is recorded as [`OCCUPIED`](Self::OCCUPIED).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CellCode(pub u8);

impl CellCode {
    /// Clean and empty.
    pub const CLEAN: CellCode = CellCode(0);
    /// At least one agent present, regardless of dirt.
    pub const OCCUPIED: CellCode = CellCode(1);
    /// Dirty and empty.
    pub const DIRTY: CellCode = CellCode(2);

    /// Largest code value; renderers scale colours against it.
    pub const MAX: u8 = 2;
}

/// Dense row-major grid of [`CellCode`]s captured at the start of a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSnapshot {
    dims:  GridDims,
    cells: Vec<CellCode>,
}

impl GridSnapshot {
    /// Encode the current floor and agent positions.
    pub fn capture(floor: &Floor, space: &dyn GridSpace) -> Self {
        let dims = floor.dims();
        let cells = floor
            .iter()
            .map(|(pos, _)| {
                if !space.is_cell_empty(pos) {
                    CellCode::OCCUPIED
                } else if floor.is_dirty(pos) {
                    CellCode::DIRTY
                } else {
                    CellCode::CLEAN
                }
            })
            .collect();
        Self { dims, cells }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Code at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is out of bounds.
    #[inline]
    pub fn get(&self, pos: GridPos) -> CellCode {
        self.cells[self.dims.index_of(pos)]
    }

    /// All codes in row-major order.
    #[inline]
    pub fn cells(&self) -> &[CellCode] {
        &self.cells
    }

    /// Number of cells carrying `code`.
    pub fn count(&self, code: CellCode) -> usize {
        self.cells.iter().filter(|&&c| c == code).count()
    }
}
