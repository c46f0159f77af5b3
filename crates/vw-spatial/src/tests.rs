//! Unit tests for vw-spatial.

#[cfg(test)]
mod helpers {
    use vw_core::{GridDims, GridPos};

    use crate::{Floor, MultiGrid};

    /// 15×15, the default experiment size.
    pub fn default_dims() -> GridDims {
        GridDims::new(15, 15)
    }

    /// 3×3 floor with only the centre dirty, and one agent at the origin.
    pub fn tiny_world() -> (Floor, MultiGrid) {
        let dims = GridDims::new(3, 3);
        let mut floor = Floor::new_clean(dims);
        floor.dirty(GridPos::new(1, 1)).unwrap();
        let space = MultiGrid::with_agents_at(dims, 1, GridPos::ORIGIN).unwrap();
        (floor, space)
    }
}

// ── Floor ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod floor {
    use std::collections::HashSet;

    use vw_core::{GridDims, GridPos, SimRng};

    use super::helpers::default_dims;
    use crate::{CellState, Floor, SpatialError};

    #[test]
    fn starts_clean() {
        let floor = Floor::new_clean(default_dims());
        assert!(floor.is_all_clean());
        assert_eq!(floor.dirty_count(), 0);
        assert_eq!(floor.clean_count(), 225);
        assert_eq!(floor.clean_percentage(), 100);
    }

    #[test]
    fn dirty_then_clean() {
        let mut floor = Floor::new_clean(GridDims::new(2, 2));
        let p = GridPos::new(1, 0);
        assert!(floor.dirty(p).unwrap());
        assert!(!floor.dirty(p).unwrap(), "second dirty is a no-op");
        assert_eq!(floor.get(p), CellState::Dirty);
        assert_eq!(floor.dirty_count(), 1);

        assert!(floor.clean(p).unwrap());
        assert!(!floor.clean(p).unwrap(), "cleaning a clean cell is a no-op");
        assert!(floor.is_all_clean());
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut floor = Floor::new_clean(GridDims::new(2, 2));
        let err = floor.clean(GridPos::new(2, 0)).unwrap_err();
        assert!(matches!(err, SpatialError::OutOfBounds { .. }));
    }

    #[test]
    fn scatter_exact_count_no_duplicates() {
        let mut floor = Floor::new_clean(default_dims());
        let mut rng = SimRng::new(1);
        floor.scatter_dirt(67, &mut rng).unwrap();
        assert_eq!(floor.dirty_count(), 67);

        let dirty: HashSet<_> = floor
            .iter()
            .filter(|(_, s)| *s == CellState::Dirty)
            .map(|(p, _)| p)
            .collect();
        assert_eq!(dirty.len(), 67);
    }

    #[test]
    fn scatter_every_cell_terminates() {
        let mut floor = Floor::new_clean(GridDims::new(4, 4));
        floor.scatter_dirt(16, &mut SimRng::new(3)).unwrap();
        assert_eq!(floor.dirty_count(), 16);
        assert_eq!(floor.clean_percentage(), 0);
    }

    #[test]
    fn scatter_more_than_available_errors() {
        let mut floor = Floor::new_clean(GridDims::new(2, 2));
        let err = floor.scatter_dirt(5, &mut SimRng::new(3)).unwrap_err();
        assert!(matches!(err, SpatialError::TooMuchDirt { requested: 5, available: 4 }));
    }

    #[test]
    fn clean_percentage_truncates() {
        // 3 cells, 1 dirty → 2 * 100 / 3 = 66.67 → 66
        let mut floor = Floor::new_clean(GridDims::new(3, 1));
        floor.dirty(GridPos::new(0, 0)).unwrap();
        assert_eq!(floor.clean_percentage(), 66);
    }

    #[test]
    fn hundred_percent_only_when_all_clean() {
        // 1 dirty cell out of 225 still truncates to 99.
        let mut floor = Floor::new_clean(default_dims());
        floor.dirty(GridPos::new(7, 7)).unwrap();
        assert!(!floor.is_all_clean());
        assert_eq!(floor.clean_percentage(), 99);
        floor.clean(GridPos::new(7, 7)).unwrap();
        assert_eq!(floor.clean_percentage(), 100);
    }
}

// ── MultiGrid ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod space {
    use vw_core::{AgentId, GridDims, GridPos};

    use crate::{GridSpace, MultiGrid, SpatialError};

    #[test]
    fn agents_start_together() {
        let grid = MultiGrid::with_agents_at(GridDims::new(5, 5), 4, GridPos::ORIGIN).unwrap();
        assert_eq!(grid.agent_count(), 4);
        assert_eq!(grid.occupants(GridPos::ORIGIN), 4);
        assert!(!grid.is_cell_empty(GridPos::ORIGIN));
        assert!(grid.is_cell_empty(GridPos::new(1, 1)));
    }

    #[test]
    fn place_returns_dense_ids() {
        let mut grid = MultiGrid::new(GridDims::new(3, 3));
        assert_eq!(grid.place_agent(GridPos::new(0, 0)).unwrap(), AgentId(0));
        assert_eq!(grid.place_agent(GridPos::new(2, 2)).unwrap(), AgentId(1));
        assert_eq!(grid.position(AgentId(1)), Some(GridPos::new(2, 2)));
        assert_eq!(grid.position(AgentId(2)), None);
    }

    #[test]
    fn move_updates_occupancy() {
        let mut grid = MultiGrid::with_agents_at(GridDims::new(3, 3), 2, GridPos::ORIGIN).unwrap();
        grid.move_agent(AgentId(1), GridPos::new(1, 1)).unwrap();
        assert_eq!(grid.occupants(GridPos::ORIGIN), 1);
        assert_eq!(grid.occupants(GridPos::new(1, 1)), 1);
        assert_eq!(grid.position(AgentId(1)), Some(GridPos::new(1, 1)));
        assert_eq!(grid.position(AgentId(0)), Some(GridPos::ORIGIN));
    }

    #[test]
    fn move_out_of_bounds_rejected_and_state_kept() {
        let mut grid = MultiGrid::with_agents_at(GridDims::new(3, 3), 1, GridPos::ORIGIN).unwrap();
        let err = grid.move_agent(AgentId(0), GridPos::new(3, 0)).unwrap_err();
        assert!(matches!(err, SpatialError::OutOfBounds { .. }));
        assert_eq!(grid.position(AgentId(0)), Some(GridPos::ORIGIN));
        assert_eq!(grid.occupants(GridPos::ORIGIN), 1);
    }

    #[test]
    fn move_unknown_agent_rejected() {
        let mut grid = MultiGrid::new(GridDims::new(3, 3));
        let err = grid.move_agent(AgentId(0), GridPos::ORIGIN).unwrap_err();
        assert!(matches!(err, SpatialError::UnknownAgent(AgentId(0))));
    }

    #[test]
    fn place_out_of_bounds_rejected() {
        let mut grid = MultiGrid::new(GridDims::new(3, 3));
        assert!(grid.place_agent(GridPos::new(0, 9)).is_err());
        assert_eq!(grid.agent_count(), 0);
    }

    #[test]
    fn out_of_bounds_cell_has_no_occupants() {
        let grid = MultiGrid::with_agents_at(GridDims::new(2, 2), 1, GridPos::ORIGIN).unwrap();
        assert_eq!(grid.occupants(GridPos::new(5, 5)), 0);
    }

    #[test]
    fn agent_positions_enumerates_in_order() {
        let mut grid = MultiGrid::new(GridDims::new(3, 3));
        grid.place_agent(GridPos::new(2, 0)).unwrap();
        grid.place_agent(GridPos::new(0, 2)).unwrap();
        assert_eq!(
            grid.agent_positions(),
            vec![(AgentId(0), GridPos::new(2, 0)), (AgentId(1), GridPos::new(0, 2))]
        );
    }

    #[test]
    fn usable_as_trait_object() {
        let grid = MultiGrid::with_agents_at(GridDims::new(2, 2), 1, GridPos::ORIGIN).unwrap();
        let space: &dyn GridSpace = &grid;
        assert_eq!(space.dims(), GridDims::new(2, 2));
        assert_eq!(space.agent_count(), 1);
    }
}

// ── GridSnapshot ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod snapshot {
    use vw_core::{AgentId, GridPos};

    use super::helpers::tiny_world;
    use crate::{CellCode, GridSnapshot, GridSpace};

    #[test]
    fn encodes_clean_dirty_and_occupied() {
        let (floor, space) = tiny_world();
        let snap = GridSnapshot::capture(&floor, &space);
        assert_eq!(snap.get(GridPos::ORIGIN), CellCode::OCCUPIED);
        assert_eq!(snap.get(GridPos::new(1, 1)), CellCode::DIRTY);
        assert_eq!(snap.get(GridPos::new(2, 2)), CellCode::CLEAN);
        assert_eq!(snap.count(CellCode::CLEAN), 7);
    }

    #[test]
    fn agent_on_dirt_reports_occupied() {
        let (floor, mut space) = tiny_world();
        space.move_agent(AgentId(0), GridPos::new(1, 1)).unwrap();
        let snap = GridSnapshot::capture(&floor, &space);
        assert!(floor.is_dirty(GridPos::new(1, 1)));
        assert_eq!(snap.get(GridPos::new(1, 1)), CellCode::OCCUPIED);
        assert_eq!(snap.count(CellCode::DIRTY), 0);
    }

    #[test]
    fn raw_values_match_encoding() {
        assert_eq!(CellCode::CLEAN.0, 0);
        assert_eq!(CellCode::OCCUPIED.0, 1);
        assert_eq!(CellCode::DIRTY.0, 2);
    }

    #[test]
    fn cells_cover_whole_grid() {
        let (floor, space) = tiny_world();
        let snap = GridSnapshot::capture(&floor, &space);
        assert_eq!(snap.cells().len(), 9);
        assert_eq!(snap.dims(), floor.dims());
    }
}
