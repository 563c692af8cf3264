use crate::{
    grid::{unit::OffsetPoint, HexagonGrid},
    timed, util,
};
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashSet, VecDeque};

/// A set of offset points
pub type OffsetPointSet = HashSet<OffsetPoint, FnvBuildHasher>;
/// An ORDERED map of offset points to some `T`. This has some extra memory
/// overhead, so we should only use it when we actually need the ordering.
pub type OffsetPointIndexMap<T> = IndexMap<OffsetPoint, T, FnvBuildHasher>;

impl HexagonGrid {
    /// Find every cell that is at most `max_steps` steps away from the cell
    /// `(x, y)`, mapped to its step distance. The origin is always included,
    /// with distance 0. Cells are ordered by discovery, which means they're
    /// also sorted by distance. The result always holds exactly
    /// `3s^2 + 3s + 1` cells, where `s = max_steps`.
    pub fn cells_within(
        &self,
        x: i32,
        y: i32,
        max_steps: u32,
    ) -> OffsetPointIndexMap<u32> {
        timed!("Cell flood fill", log::Level::Trace, {
            let capacity = util::cells_within_len(max_steps);
            let mut visited: OffsetPointIndexMap<u32> =
                IndexMap::with_capacity_and_hasher(
                    capacity,
                    FnvBuildHasher::default(),
                );
            let origin = OffsetPoint::new(x, y);
            visited.insert(origin, 0);

            // Standard BFS. Every neighbor is exactly one step away, so the
            // first time we reach a cell is along a shortest path.
            let mut queue: VecDeque<(OffsetPoint, u32)> = VecDeque::new();
            queue.push_back((origin, 0));
            while let Some((cell, steps)) = queue.pop_front() {
                if steps >= max_steps {
                    continue;
                }
                for neighbor in self.neighbors(cell.x, cell.y) {
                    if !visited.contains_key(&neighbor) {
                        visited.insert(neighbor, steps + 1);
                        queue.push_back((neighbor, steps + 1));
                    }
                }
            }
            visited
        })
    }
}
