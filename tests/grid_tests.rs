// Host-side tests for the uniform spatial grid.

use glam::Vec2;
use particle_field::constants::CELL_SIZE;
use particle_field::core::SpatialGrid;
use rand::prelude::*;

fn grid_of(positions: &[Vec2], cell_size: f32) -> SpatialGrid {
    let mut grid = SpatialGrid::new(cell_size);
    grid.rebuild(positions.iter().copied());
    grid
}

fn neighbors(grid: &SpatialGrid, position: Vec2) -> Vec<usize> {
    let mut result: Vec<usize> = grid.neighbors_of(position).collect();
    result.sort_unstable();
    result
}

#[test]
fn empty_grid_yields_no_neighbors() {
    let grid = grid_of(&[], CELL_SIZE);
    assert!(grid.neighbors_of(Vec2::new(10.0, 10.0)).next().is_none());
}

#[test]
fn neighborhood_includes_the_queried_particle() {
    let positions = vec![Vec2::new(75.0, 75.0), Vec2::new(400.0, 400.0)];
    let grid = grid_of(&positions, CELL_SIZE);
    assert!(neighbors(&grid, positions[0]).contains(&0));
    assert!(neighbors(&grid, positions[1]).contains(&1));
}

#[test]
fn everything_within_one_cell_size_is_a_candidate() {
    // Anything strictly closer than cell_size on both axes lands in the
    // queried cell or an adjacent one, so the 3x3 sweep must surface it.
    let mut rng = StdRng::seed_from_u64(11);
    let positions: Vec<Vec2> = (0..200)
        .map(|_| {
            Vec2::new(
                rng.gen_range(0.0..1000.0_f32),
                rng.gen_range(0.0..1000.0_f32),
            )
        })
        .collect();
    let grid = grid_of(&positions, CELL_SIZE);

    for (i, a) in positions.iter().enumerate() {
        let candidates = neighbors(&grid, *a);
        for (j, b) in positions.iter().enumerate() {
            let delta = (*a - *b).abs();
            if delta.x < CELL_SIZE && delta.y < CELL_SIZE {
                assert!(
                    candidates.contains(&j),
                    "particle {} at {:?} missing from neighborhood of {} at {:?}",
                    j,
                    b,
                    i,
                    a
                );
            }
        }
    }
}

#[test]
fn points_beyond_two_cells_are_excluded() {
    let positions = vec![
        Vec2::new(75.0, 75.0),
        Vec2::new(75.0 + 2.5 * CELL_SIZE, 75.0),
        Vec2::new(75.0, 75.0 + 3.0 * CELL_SIZE),
    ];
    let grid = grid_of(&positions, CELL_SIZE);
    let candidates = neighbors(&grid, positions[0]);
    assert!(candidates.contains(&0));
    assert!(!candidates.contains(&1));
    assert!(!candidates.contains(&2));
}

#[test]
fn no_duplicate_candidates() {
    let mut rng = StdRng::seed_from_u64(3);
    let positions: Vec<Vec2> = (0..100)
        .map(|_| Vec2::new(rng.gen_range(0.0..600.0_f32), rng.gen_range(0.0..600.0_f32)))
        .collect();
    let grid = grid_of(&positions, CELL_SIZE);

    for position in &positions {
        let mut candidates = neighbors(&grid, *position);
        let before = candidates.len();
        candidates.dedup();
        assert_eq!(before, candidates.len());
    }
}

#[test]
fn rebuild_replaces_previous_buckets() {
    let mut grid = SpatialGrid::new(CELL_SIZE);
    grid.rebuild([Vec2::new(10.0, 10.0)]);
    grid.rebuild([Vec2::new(500.0, 500.0)]);
    assert!(grid.neighbors_of(Vec2::new(10.0, 10.0)).next().is_none());
    assert_eq!(grid.neighbors_of(Vec2::new(500.0, 500.0)).count(), 1);
}
