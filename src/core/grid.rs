use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;

/// Uniform spatial index over particle positions.
///
/// Buckets hold particle *indices* keyed by integer cell coordinates, so the
/// grid never owns or outlives the particles it describes. It is rebuilt
/// every few ticks and allowed to go stale in between; per-tick displacement
/// is small relative to the cell size, so a stale bucket still lands in the
/// right 3x3 neighborhood.
pub struct SpatialGrid {
    cell_size: f32,
    cells: FnvHashMap<(i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    pub fn new(cell_size: f32) -> Self {
        Self {
            cell_size,
            cells: FnvHashMap::default(),
        }
    }

    /// Re-buckets every position from scratch. O(n); bucket allocations are
    /// reused across rebuilds.
    pub fn rebuild(&mut self, positions: impl IntoIterator<Item = Vec2>) {
        for bucket in self.cells.values_mut() {
            bucket.clear();
        }
        for (index, position) in positions.into_iter().enumerate() {
            let key = cell_key(position, self.cell_size);
            self.cells.entry(key).or_default().push(index);
        }
    }

    /// Lazy, one-shot iterator over the indices bucketed in the 3x3 cell
    /// neighborhood around `position` (own cell plus the 8 adjacent ones).
    ///
    /// Includes the querying particle itself; yields nothing on an empty
    /// grid. No ordering guarantee. Cost is proportional to local density,
    /// independent of total particle count.
    pub fn neighbors_of(&self, position: Vec2) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = cell_key(position, self.cell_size);
        let mut keys: SmallVec<[(i32, i32); 9]> = SmallVec::new();
        for dy in -1..=1 {
            for dx in -1..=1 {
                keys.push((cx + dx, cy + dy));
            }
        }
        keys.into_iter()
            .filter_map(move |key| self.cells.get(&key))
            .flatten()
            .copied()
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }
}

fn cell_key(position: Vec2, cell_size: f32) -> (i32, i32) {
    (
        (position.x / cell_size).floor() as i32,
        (position.y / cell_size).floor() as i32,
    )
}
