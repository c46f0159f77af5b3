//! Unit tests for vw-behavior.

use vw_agent::{AgentStore, AgentStoreBuilder};
use vw_core::{AgentId, GridDims, GridPos, Tick};
use vw_spatial::{Floor, MultiGrid};

use crate::SimContext;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn make_context<'a>(
    floor: &'a Floor,
    space: &'a MultiGrid,
    store: &'a AgentStore,
) -> SimContext<'a> {
    SimContext::new(Tick(0), floor, space, store)
}

/// `n` agents at `start` on a clean `dims` grid.
fn make_world(dims: GridDims, n: usize, start: GridPos) -> (Floor, MultiGrid, AgentStore) {
    let floor = Floor::new_clean(dims);
    let space = MultiGrid::with_agents_at(dims, n, start).unwrap();
    let (store, _rngs) = AgentStoreBuilder::new(n, 0).build();
    (floor, space, store)
}

// ── SimContext ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod context_tests {
    use super::*;

    #[test]
    fn fields_accessible() {
        let (floor, space, store) = make_world(GridDims::new(4, 3), 2, GridPos::ORIGIN);
        let ctx = make_context(&floor, &space, &store);
        assert_eq!(ctx.tick, Tick(0));
        assert_eq!(ctx.dims(), GridDims::new(4, 3));
        assert_eq!(ctx.agents.count, 2);
        assert_eq!(ctx.position(AgentId(1)), Some(GridPos::ORIGIN));
        assert_eq!(ctx.position(AgentId(2)), None);
    }
}

// ── NoopBehavior ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod noop_tests {
    use vw_core::AgentRng;

    use super::*;
    use crate::{BehaviorModel, NoopBehavior};

    #[test]
    fn replan_returns_empty() {
        let (floor, space, store) = make_world(GridDims::new(3, 3), 1, GridPos::ORIGIN);
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(0, AgentId(0));
        assert!(NoopBehavior.replan(AgentId(0), &ctx, &mut rng).is_empty());
    }
}

// ── RandomCleaner ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod cleaner_tests {
    use vw_core::AgentRng;

    use super::*;
    use crate::{BehaviorModel, Intent, RandomCleaner};

    #[test]
    fn dirty_cell_cleaned_before_moving() {
        let centre = GridPos::new(1, 1);
        let (mut floor, space, store) = make_world(GridDims::new(3, 3), 1, centre);
        floor.dirty(centre).unwrap();
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(5, AgentId(0));

        // From the centre of a 3x3 grid every neighbour is in bounds.
        let intents = RandomCleaner.replan(AgentId(0), &ctx, &mut rng);
        assert_eq!(intents.len(), 2);
        assert_eq!(intents[0], Intent::Clean(centre));
        assert!(matches!(intents[1], Intent::MoveTo(_)));
    }

    #[test]
    fn clean_cell_is_not_cleaned() {
        let (floor, space, store) = make_world(GridDims::new(3, 3), 1, GridPos::new(1, 1));
        let ctx = make_context(&floor, &space, &store);
        assert_eq!(RandomCleaner.clean(AgentId(0), &ctx), None);
    }

    #[test]
    fn single_cell_grid_never_moves() {
        let (mut floor, space, store) = make_world(GridDims::new(1, 1), 1, GridPos::ORIGIN);
        floor.dirty(GridPos::ORIGIN).unwrap();
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..50 {
            let intents = RandomCleaner.replan(AgentId(0), &ctx, &mut rng);
            assert_eq!(intents, vec![Intent::Clean(GridPos::ORIGIN)]);
        }
    }

    #[test]
    fn moves_are_in_bounds_neighbours() {
        let dims = GridDims::new(4, 4);
        let start = GridPos::new(3, 0);
        let (floor, space, store) = make_world(dims, 1, start);
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(11, AgentId(0));
        for _ in 0..500 {
            if let Some(Intent::MoveTo(to)) = RandomCleaner.move_randomly(AgentId(0), &ctx, &mut rng) {
                assert!(dims.contains(to), "{to} out of bounds");
                let dx = (to.x as i64 - start.x as i64).abs();
                let dy = (to.y as i64 - start.y as i64).abs();
                assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0), "{to} not a neighbour");
            }
        }
    }

    #[test]
    fn corner_agent_sometimes_blocked() {
        // From the origin only 3 of 8 offsets stay on the grid, so over many
        // draws both outcomes occur.
        let (floor, space, store) = make_world(GridDims::new(5, 5), 1, GridPos::ORIGIN);
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(3, AgentId(0));
        let moves = (0..400)
            .filter(|_| RandomCleaner.move_randomly(AgentId(0), &ctx, &mut rng).is_some())
            .count();
        assert!(moves > 0 && moves < 400, "got {moves} moves");
    }

    #[test]
    fn unplaced_agent_does_nothing() {
        let (floor, space, store) = make_world(GridDims::new(3, 3), 1, GridPos::ORIGIN);
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(0, AgentId(7));
        assert!(RandomCleaner.replan(AgentId(7), &ctx, &mut rng).is_empty());
    }

    #[test]
    fn model_is_object_safe_via_box() {
        let model: Box<dyn BehaviorModel> = Box::new(RandomCleaner);
        let (mut floor, space, store) = make_world(GridDims::new(1, 1), 1, GridPos::ORIGIN);
        floor.dirty(GridPos::ORIGIN).unwrap();
        let ctx = make_context(&floor, &space, &store);
        let mut rng = AgentRng::new(0, AgentId(0));
        assert_eq!(model.replan(AgentId(0), &ctx, &mut rng).len(), 1);
    }
}
