//! A no-op behavior model — agents never produce intents.

use vw_core::{AgentId, AgentRng};

use crate::{BehaviorModel, Intent, SimContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Useful in tests: the world still ticks, snapshots and times itself, but
/// nothing moves and nothing gets cleaned.
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn replan(
        &self,
        _agent: AgentId,
        _ctx:   &SimContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
