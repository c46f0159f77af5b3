//! Agent intents — the actions an agent can request during its turn.

use vw_core::GridPos;

/// An action that an agent wants to perform during the current tick.
///
/// Intents are produced by [`BehaviorModel::replan`][crate::BehaviorModel::replan]
/// and applied by the world in the order they were returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Clean the cell at the given position.  Applying it to a clean cell is
    /// a no-op.
    Clean(GridPos),

    /// Move the acting agent to the given cell.  The world counts one step
    /// for the agent and one for the global counter when it is applied.
    MoveTo(GridPos),
}
