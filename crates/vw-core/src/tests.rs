//! Unit tests for vw-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(AgentId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod grid {
    use std::collections::HashSet;

    use crate::{GridDims, GridPos, NEIGHBOR_OFFSETS, Offset};

    #[test]
    fn neighbor_offsets_are_the_eight_distinct_neighbors() {
        let unique: HashSet<_> = NEIGHBOR_OFFSETS.iter().copied().collect();
        assert_eq!(unique.len(), 8);
        assert!(!unique.contains(&Offset::new(0, 0)));
        assert!(NEIGHBOR_OFFSETS.iter().all(|o| o.dx.abs() <= 1 && o.dy.abs() <= 1));
    }

    #[test]
    fn step_inside_grid() {
        let dims = GridDims::new(3, 3);
        assert_eq!(
            dims.step(GridPos::new(1, 1), Offset::new(1, -1)),
            Some(GridPos::new(2, 0))
        );
    }

    #[test]
    fn step_off_any_edge_is_none() {
        let dims = GridDims::new(3, 2);
        assert_eq!(dims.step(GridPos::ORIGIN, Offset::new(-1, 0)), None);
        assert_eq!(dims.step(GridPos::ORIGIN, Offset::new(0, -1)), None);
        assert_eq!(dims.step(GridPos::new(2, 0), Offset::new(1, 0)), None);
        assert_eq!(dims.step(GridPos::new(0, 1), Offset::new(0, 1)), None);
    }

    #[test]
    fn index_roundtrip() {
        let dims = GridDims::new(4, 3);
        for (i, pos) in dims.positions().enumerate() {
            assert_eq!(dims.index_of(pos), i);
            assert_eq!(dims.pos_of(i), pos);
        }
        assert_eq!(dims.positions().count(), dims.cell_count());
    }

    #[test]
    fn display() {
        assert_eq!(GridDims::new(15, 15).to_string(), "15x15");
        assert_eq!(GridPos::new(2, 5).to_string(), "(2, 5)");
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn next_advances_by_one() {
        assert_eq!(Tick::ZERO.next(), Tick(1));
        assert_eq!(Tick(10).next(), Tick(11));
        assert!(Tick(10) < Tick(10).next());
    }

    #[test]
    fn display() {
        assert_eq!(Tick(3).to_string(), "T3");
    }
}

#[cfg(test)]
mod config {
    use crate::{Tick, WorldConfig};

    fn config(width: u32, height: u32, dirty_fraction: f64) -> WorldConfig {
        WorldConfig {
            width,
            height,
            agent_count: 1,
            dirty_fraction,
            seed: 42,
            max_ticks: None,
        }
    }

    #[test]
    fn dirty_target_rounds_down() {
        // 225 * 0.3 = 67.5
        assert_eq!(config(15, 15, 0.3).dirty_cell_target(), 67);
        assert_eq!(config(15, 15, 0.0).dirty_cell_target(), 0);
        assert_eq!(config(15, 15, 1.0).dirty_cell_target(), 225);
    }

    #[test]
    fn validate_accepts_full_range() {
        assert!(config(1, 1, 0.0).validate().is_ok());
        assert!(config(15, 15, 1.0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_grid() {
        assert!(config(0, 5, 0.3).validate().is_err());
        assert!(config(5, 0, 0.3).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_fraction() {
        assert!(config(5, 5, -0.1).validate().is_err());
        assert!(config(5, 5, 1.5).validate().is_err());
        assert!(config(5, 5, f64::NAN).validate().is_err());
    }

    #[test]
    fn validate_rejects_agentless_dirty_floor() {
        let mut cfg = config(5, 5, 0.3);
        cfg.agent_count = 0;
        assert!(cfg.validate().is_err());

        cfg.max_ticks = Some(10);
        assert!(cfg.validate().is_ok());

        cfg.max_ticks = None;
        cfg.dirty_fraction = 0.0;
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn end_tick_follows_cap() {
        let mut cfg = config(5, 5, 0.3);
        assert_eq!(cfg.end_tick(), None);
        cfg.max_ticks = Some(100);
        assert_eq!(cfg.end_tick(), Some(Tick(100)));
    }
}

#[cfg(test)]
mod rng {
    use std::collections::HashSet;

    use crate::{AgentId, AgentRng, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: usize = r1.gen_range(0..8);
            let b: usize = r2.gen_range(0..8);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: Vec<u64> = (0..8).map(|_| r0.gen_range(0..u64::MAX)).collect();
        let b: Vec<u64> = (0..8).map(|_| r1.gen_range(0..u64::MAX)).collect();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v: usize = rng.gen_range(0..8);
            assert!(v < 8);
        }
    }

    #[test]
    fn sample_indices_are_distinct() {
        let mut rng = SimRng::new(7);
        let picked = rng.sample_indices(225, 67);
        assert_eq!(picked.len(), 67);
        let unique: HashSet<_> = picked.iter().copied().collect();
        assert_eq!(unique.len(), 67);
        assert!(picked.iter().all(|&i| i < 225));
    }

    #[test]
    fn sample_all_indices_terminates() {
        let mut rng = SimRng::new(7);
        let mut picked = rng.sample_indices(16, 16);
        picked.sort_unstable();
        assert_eq!(picked, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn child_seeds_differ() {
        let mut rng = SimRng::new(42);
        let a = rng.child_seed(0);
        let b = rng.child_seed(1);
        assert_ne!(a, b);
    }
}
