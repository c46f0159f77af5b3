//! Bounded 2D grid geometry.
//!
//! The world is an 8-connected rectangle of `width × height` cells.  Cells
//! are addressed by [`GridPos`] and stored densely in row-major order
//! (`index = y * width + x`), which [`GridDims`] converts in both
//! directions.  There is no wrap-around: a move that would leave the
//! rectangle simply has no target cell.

use std::fmt;

// ── GridPos ───────────────────────────────────────────────────────────────────

/// Integer cell coordinates.  Only meaningful relative to a [`GridDims`];
/// valid positions satisfy `x < width && y < height`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    /// The corner every agent starts from.
    pub const ORIGIN: GridPos = GridPos { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Offset ────────────────────────────────────────────────────────────────────

/// A relative move of at most one cell along each axis.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// The eight neighbours of a cell, in a fixed order (row by row, skipping
/// the centre).  Random walkers index into this table uniformly.
pub const NEIGHBOR_OFFSETS: [Offset; 8] = [
    Offset::new(-1, -1),
    Offset::new(-1, 0),
    Offset::new(-1, 1),
    Offset::new(0, -1),
    Offset::new(0, 1),
    Offset::new(1, -1),
    Offset::new(1, 0),
    Offset::new(1, 1),
];

// ── GridDims ──────────────────────────────────────────────────────────────────

/// Width and height of the grid, plus the index arithmetic that depends on
/// them.  `Copy` and heap-free so every subsystem can hold its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    pub width:  u32,
    pub height: u32,
}

impl GridDims {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `pos` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Signed bounds check for a candidate coordinate pair.
    #[inline]
    pub fn contains_signed(&self, x: i64, y: i64) -> bool {
        x >= 0 && x < self.width as i64 && y >= 0 && y < self.height as i64
    }

    /// The cell reached by applying `offset` to `from`, or `None` if that
    /// cell lies outside the grid.
    #[inline]
    pub fn step(&self, from: GridPos, offset: Offset) -> Option<GridPos> {
        let x = from.x as i64 + offset.dx as i64;
        let y = from.y as i64 + offset.dy as i64;
        if self.contains_signed(x, y) {
            Some(GridPos::new(x as u32, y as u32))
        } else {
            None
        }
    }

    /// Row-major dense index of `pos`.
    ///
    /// # Panics
    /// Panics in debug mode if `pos` is out of bounds.
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> usize {
        debug_assert!(self.contains(pos), "{pos} outside {self}");
        pos.y as usize * self.width as usize + pos.x as usize
    }

    /// Inverse of [`index_of`](Self::index_of).
    #[inline]
    pub fn pos_of(&self, index: usize) -> GridPos {
        let w = self.width as usize;
        GridPos::new((index % w) as u32, (index / w) as u32)
    }

    /// Every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| GridPos::new(x, y)))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
