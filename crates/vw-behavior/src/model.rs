//! The `BehaviorModel` trait — the extension point for agent decision making.

use vw_core::{AgentId, AgentRng};

use crate::{Intent, SimContext};

/// Pluggable agent behavior.
///
/// Implement this trait to define what agents do each tick.  `replan`
/// receives a read-only [`SimContext`] and a mutable per-agent [`AgentRng`]
/// so behavior is deterministic regardless of the order in which agents are
/// visited or which thread visits them.
///
/// # Thread safety
///
/// With the `parallel` feature of vw-sim, `replan` is called for many agents
/// in parallel via Rayon, so implementations must be `Send + Sync`.  State
/// that varies per agent must live in the world (read through `ctx`), not in
/// the model itself.
pub trait BehaviorModel: Send + Sync + 'static {
    /// Called exactly once per agent per tick.
    ///
    /// Return the [`Intent`]s the agent wants applied, in order.  An empty
    /// `Vec` means the agent does nothing this tick.
    fn replan(
        &self,
        agent: AgentId,
        ctx:   &SimContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent>;
}
