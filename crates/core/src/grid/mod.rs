//! This module holds the grid types and the coordinate math behind them.
//!
//! ## Coordinate Systems
//!
//! A grid uses two integer coordinate systems, plus pixel space for output.
//!
//! ### Offset Coordinates
//!
//! Offset coordinates ([OffsetPoint]) are plain row/column indices. In a
//! [Vertical](Orientation::Vertical) grid, cells line up in columns along `y`
//! and every other column is pushed half a cell down. In a
//! [Horizontal](Orientation::Horizontal) grid, cells line up in rows along `x`
//! and every other row is pushed half a cell right. The [Shift] of a grid says
//! whether the even or the odd columns/rows get pushed. That gives four grid
//! variants:
//!
//! ```text
//! Vertical, odd shifted        Horizontal, odd shifted
//!  __    __                     / \ / \ / \
//! /0,0\__/2,0\__               |0,0|1,0|2,0|
//! \__/1,0\__/3,0\               \ / \ / \ / \
//! /0,1\__/2,1\__/                |0,1|1,1|2,1|
//! \__/1,1\__/3,1\                 \ / \ / \ /
//!    \__/  \__/
//! ```
//!
//! Offset coordinates are natural for storage and for drawing, but the math
//! for neighbors and distances depends on the parity of the row/column.
//!
//! ### Cube Coordinates
//!
//! Cube coordinates ([CubePoint]) follow the [system described by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube). Each
//! cell gets three integer components with `x + y + z = 0`, and each of the
//! six neighbor directions changes exactly two components by one. That makes
//! distances uniform: the step distance between two cells is the largest of
//! the three component differences.
//!
//! Converting between offset and cube coordinates needs an integer division
//! by two that rounds consistently for negative indices. Even-shifted grids
//! use `(n + (n & 1)) / 2`, odd-shifted grids use `(n - (n & 1)) / 2`. Both
//! numerators are always even, so the division is exact and the conversion
//! is invertible for every `i32` in the supported range.
//!
//! ### Pixel Space
//!
//! [HexagonGrid::center] maps a cell to the center of its hexagon in pixel
//! space ([Point2]). `+x` is right and `+y` is **down**. Neighbor directions
//! count counterclockwise as seen on screen.
//!
//! ## Coordinate Range
//!
//! All coordinates are `i32`. Conversions add and halve coordinates, so
//! callers should keep `|x|` and `|y|` below `i32::MAX / 2`. This isn't
//! checked at runtime.

mod data_structure;
mod neighbor;
mod unit;

pub use self::{data_structure::*, unit::*};

use crate::{
    config::GridConfig,
    hexagon::Hexagon,
    util::unit::{Bounds, Point2},
};
use anyhow::{anyhow, Context};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A virtually infinite grid of hexagons. A grid doesn't hold any cells, it
/// only knows the geometry: where each cell is, which cells are adjacent, and
/// how far apart two cells are. Every query is a pure function of its
/// arguments, so a grid can be freely copied and shared between threads.
///
/// Create a grid from a [GridConfig] with [HexagonGrid::new], or directly
/// with [create].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HexagonGrid {
    /// The shape of every cell in the grid. This also determines the grid's
    /// orientation.
    hexagon: Hexagon,

    /// Which rows/columns are shifted by half a cell
    shift: Shift,
}

impl HexagonGrid {
    /// Initialize a new grid from the given config. Returns an error if the
    /// config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        debug!("Creating hexagon grid with config {:?}", config);
        config.validate().context("invalid grid config")?;
        Ok(Self::from_parts(config.radius, config.orientation, config.shift))
    }

    /// Initialize a new grid without any validation. The radius should be
    /// positive.
    pub fn from_parts(
        radius: f64,
        orientation: Orientation,
        shift: Shift,
    ) -> Self {
        Self {
            hexagon: Hexagon::new(radius, orientation),
            shift,
        }
    }

    /// Get the hexagon that every cell in this grid is shaped like
    pub fn hexagon(&self) -> &Hexagon {
        &self.hexagon
    }

    pub fn orientation(&self) -> Orientation {
        self.hexagon.orientation()
    }

    pub fn shift(&self) -> Shift {
        self.shift
    }

    /// Get the offset component whose parity decides the shift: `x` (the
    /// column) for vertical grids, `y` (the row) for horizontal grids.
    fn shift_axis(&self, x: i32, y: i32) -> i32 {
        match self.orientation() {
            Orientation::Vertical => x,
            Orientation::Horizontal => y,
        }
    }

    /// Shared center math for [Self::center] and
    /// [Self::squared_centers_distance], so both produce identical bits.
    fn center_xy(&self, x: i32, y: i32) -> (f64, f64) {
        let hexagon = &self.hexagon;
        let mut cx = x as f64 * hexagon.spacing_x();
        let mut cy = y as f64 * hexagon.spacing_y();
        if self.shift.is_shifted(self.shift_axis(x, y)) {
            match self.orientation() {
                Orientation::Vertical => cy += 0.5 * hexagon.size_y(),
                Orientation::Horizontal => cx += 0.5 * hexagon.size_x(),
            }
        }
        (cx, cy)
    }

    /// Get the position of the center of the cell at the given offset
    /// coordinates, in pixel space
    pub fn center(&self, x: i32, y: i32) -> Point2 {
        let (cx, cy) = self.center_xy(x, y);
        Point2::new(cx, cy)
    }

    /// Get the offset coordinates of the neighbor of `(x, y)` in the given
    /// direction. Directions are in `[0, 6)`, counterclockwise on screen.
    /// Direction 0 is the lower right neighbor in vertical grids, and the
    /// right neighbor in horizontal grids. Returns an error for any other
    /// direction.
    pub fn neighbor(
        &self,
        x: i32,
        y: i32,
        direction: i32,
    ) -> anyhow::Result<OffsetPoint> {
        if (0..6).contains(&direction) {
            Ok(self.neighbor_unchecked(x, y, direction as usize))
        } else {
            Err(anyhow!("Direction must be in [0,6), but is {}", direction))
        }
    }

    fn neighbor_unchecked(
        &self,
        x: i32,
        y: i32,
        direction: usize,
    ) -> OffsetPoint {
        let table = neighbor::neighbor_table(self.orientation(), self.shift);
        let parity = (self.shift_axis(x, y) & 1) as usize;
        let (dx, dy) = table[parity][direction];
        OffsetPoint::new(x + dx, y + dy)
    }

    /// Get an iterator of all the cells directly adjacent to `(x, y)`, in
    /// direction order. The iterator will always contain exactly 6 values.
    pub fn neighbors(
        &self,
        x: i32,
        y: i32,
    ) -> impl Iterator<Item = OffsetPoint> {
        let grid = *self;
        (0..6).map(move |direction| grid.neighbor_unchecked(x, y, direction))
    }

    /// Convert offset coordinates into cube coordinates. The inverse of
    /// [Self::cube_to_offset].
    pub fn offset_to_cube(&self, x: i32, y: i32) -> CubePoint {
        match self.orientation() {
            Orientation::Vertical => {
                CubePoint::new_xz(x, y - neighbor::half(self.shift, x))
            }
            Orientation::Horizontal => {
                CubePoint::new_xz(x - neighbor::half(self.shift, y), y)
            }
        }
    }

    /// Convert cube coordinates into offset coordinates. Only the `x` and `y`
    /// cube components are needed, `z` is derived from them. The inverse of
    /// [Self::offset_to_cube].
    pub fn cube_to_offset(&self, cx: i32, cy: i32) -> OffsetPoint {
        let cz = -cx - cy;
        match self.orientation() {
            Orientation::Vertical => {
                OffsetPoint::new(cx, cz + neighbor::half(self.shift, cx))
            }
            Orientation::Horizontal => {
                OffsetPoint::new(cx + neighbor::half(self.shift, cz), cz)
            }
        }
    }

    /// Compute the number of single-cell steps it takes to get from
    /// `(x0, y0)` to `(x1, y1)`. 0 if the cells are the same, 1 if they're
    /// adjacent, etc.
    pub fn steps_distance(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        let from = self.offset_to_cube(x0, y0);
        let to = self.offset_to_cube(x1, y1);
        from.distance_to(to)
    }

    /// Compute the squared euclidean distance between the centers of two
    /// cells, in pixel space. Always equal to the squared distance between
    /// [Self::center] of both cells.
    pub fn squared_centers_distance(
        &self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
    ) -> f64 {
        let (cx0, cy0) = self.center_xy(x0, y0);
        let (cx1, cy1) = self.center_xy(x1, y1);
        let dx = cx1 - cx0;
        let dy = cy1 - cy0;
        dx * dx + dy * dy
    }

    /// Approximate the bounds of the cells in the offset range
    /// `[x0, x1] x [y0, y1]` (inclusive on both ends). See [compute_bounds].
    pub fn bounds(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> Bounds {
        let hexagon = &self.hexagon;
        let cell_bounds = |x: i32, y: i32| hexagon.bounds(self.center(x, y));

        let mut sampled = 2;
        let mut bounds = cell_bounds(x0, y0).union(cell_bounds(x1, y1));
        // The cells just inside the corners stick out further than the corner
        // cells when the range starts or ends on a shifted row/column
        if x0 + 1 < x1 - 1 {
            bounds = bounds
                .union(cell_bounds(x0 + 1, y0))
                .union(cell_bounds(x1 - 1, y1));
            sampled += 2;
        }
        if y0 + 1 < y1 - 1 {
            bounds = bounds
                .union(cell_bounds(x0, y0 + 1))
                .union(cell_bounds(x1, y1 - 1));
            sampled += 2;
        }

        trace!(
            "Bounds of [{}, {}]x[{}, {}] sampled from {} cells: {}",
            x0,
            x1,
            y0,
            y1,
            sampled,
            bounds
        );
        bounds
    }
}

impl Default for HexagonGrid {
    fn default() -> Self {
        let config = GridConfig::default();
        Self::from_parts(config.radius, config.orientation, config.shift)
    }
}

/// Create a grid of hexagons with the given radius. `vertical` picks the
/// [Orientation], `even_shifted` picks the [Shift]. This never fails; the
/// radius should be positive.
pub fn create(radius: f64, vertical: bool, even_shifted: bool) -> HexagonGrid {
    let orientation = if vertical {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let shift = if even_shifted { Shift::Even } else { Shift::Odd };
    HexagonGrid::from_parts(radius, orientation, shift)
}

/// Compute the bounds of the hexagons in the offset range
/// `[x0, x1] x [y0, y1]` (inclusive on both ends).
///
/// This doesn't visit every cell in the range. It unions the bounds of the
/// two corner cells `(x0, y0)` and `(x1, y1)`, plus the cells one step inside
/// those corners along each axis that spans more than two cells beyond the
/// corners. That covers the extremes of a regular grid without scanning the
/// whole range, but it is a sample, not an exhaustive search.
pub fn compute_bounds(
    grid: &HexagonGrid,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Bounds {
    grid.bounds(x0, y0, x1, y1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use serde_test::{assert_tokens, Token};
    use strum::IntoEnumIterator;
    use validator::ValidationErrors;

    fn all_grids(radius: f64) -> Vec<HexagonGrid> {
        let mut grids = Vec::new();
        for orientation in Orientation::iter() {
            for shift in Shift::iter() {
                grids.push(HexagonGrid::from_parts(radius, orientation, shift));
            }
        }
        grids
    }

    #[test]
    fn test_create() {
        let grid = create(2.0, true, true);
        assert_eq!(grid.orientation(), Orientation::Vertical);
        assert_eq!(grid.shift(), Shift::Even);
        let grid = create(2.0, true, false);
        assert_eq!(grid.orientation(), Orientation::Vertical);
        assert_eq!(grid.shift(), Shift::Odd);
        let grid = create(2.0, false, true);
        assert_eq!(grid.orientation(), Orientation::Horizontal);
        assert_eq!(grid.shift(), Shift::Even);
        let grid = create(2.0, false, false);
        assert_eq!(grid.orientation(), Orientation::Horizontal);
        assert_eq!(grid.shift(), Shift::Odd);
        assert_approx_eq!(grid.hexagon().radius(), 2.0);
    }

    #[test]
    fn test_new_validates_config() {
        let config = GridConfig {
            radius: 0.0,
            ..Default::default()
        };
        let err = HexagonGrid::new(config).unwrap_err();
        assert!(err.to_string().contains("invalid grid config"));
        let validation_errors = err.downcast::<ValidationErrors>().unwrap();
        assert!(validation_errors.errors().contains_key("radius"));

        let grid = HexagonGrid::new(GridConfig::default()).unwrap();
        assert_eq!(grid, HexagonGrid::default());
    }

    #[test]
    fn test_vertical_centers() {
        // Even shifted: column 0 is pushed down, column 1 isn't
        let grid = create(10.0, true, true);
        let size_y = grid.hexagon().size_y();
        let spacing_x = grid.hexagon().spacing_x();
        assert_eq!(grid.center(0, 0), Point2::new(0.0, 0.5 * size_y));
        assert_eq!(grid.center(1, 0), Point2::new(spacing_x, 0.0));
        assert_eq!(grid.center(-1, 0), Point2::new(-spacing_x, 0.0));

        // Odd shifted is the mirror image
        let grid = create(10.0, true, false);
        assert_eq!(grid.center(0, 0), Point2::new(0.0, 0.0));
        assert_eq!(grid.center(1, 0), Point2::new(spacing_x, 0.5 * size_y));
        assert_eq!(
            grid.center(-1, 2),
            Point2::new(-spacing_x, 2.5 * size_y)
        );
    }

    #[test]
    fn test_horizontal_centers() {
        let grid = create(10.0, false, true);
        let size_x = grid.hexagon().size_x();
        let spacing_y = grid.hexagon().spacing_y();
        assert_eq!(grid.center(0, 0), Point2::new(0.5 * size_x, 0.0));
        assert_eq!(grid.center(0, 1), Point2::new(0.0, spacing_y));
        assert_approx_eq!(
            grid.center(1, 0).x - grid.center(0, 0).x,
            grid.hexagon().spacing_x()
        );

        let grid = create(10.0, false, false);
        assert_eq!(grid.center(0, 0), Point2::new(0.0, 0.0));
        assert_eq!(grid.center(0, -1), Point2::new(0.5 * size_x, -spacing_y));
    }

    #[test]
    fn test_neighbor_direction_zero() {
        for grid in all_grids(5.0) {
            for &(x, y) in &[(0, 0), (1, 0), (0, 1), (-3, -7)] {
                let center = grid.center(x, y);
                let neighbor = grid.neighbor(x, y, 0).unwrap();
                let delta = grid.center(neighbor.x, neighbor.y) - center;
                assert!(delta.x > 0.0);
                match grid.orientation() {
                    // Lower right
                    Orientation::Vertical => assert!(delta.y > 0.0),
                    // Right
                    Orientation::Horizontal => assert_approx_eq!(delta.y, 0.0),
                }
            }
        }
    }

    #[test]
    fn test_neighbors_counterclockwise() {
        // On screen (+y down) counterclockwise means the angle measured with
        // y flipped keeps increasing
        for grid in all_grids(5.0) {
            for &(x, y) in &[(0, 0), (1, 1), (-2, 5)] {
                let center = grid.center(x, y);
                let angles: Vec<f64> = grid
                    .neighbors(x, y)
                    .map(|n| {
                        let delta = grid.center(n.x, n.y) - center;
                        (-delta.y).atan2(delta.x)
                    })
                    .collect();
                for window in angles.windows(2) {
                    let mut step = window[1] - window[0];
                    if step < 0.0 {
                        step += 2.0 * std::f64::consts::PI;
                    }
                    assert_approx_eq!(step, std::f64::consts::PI / 3.0);
                }
            }
        }
    }

    #[test]
    fn test_neighbor_invalid_direction() {
        let grid = HexagonGrid::default();
        for &direction in &[-1, 6, 7, i32::MIN, i32::MAX] {
            let err = grid.neighbor(0, 0, direction).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Direction must be in [0,6), but is {}", direction)
            );
        }
    }

    #[test]
    fn test_neighbors_match_neighbor() {
        for grid in all_grids(1.0) {
            let all: Vec<OffsetPoint> = grid.neighbors(4, -3).collect();
            assert_eq!(all.len(), 6);
            for (direction, neighbor) in (0..).zip(all) {
                assert_eq!(grid.neighbor(4, -3, direction).unwrap(), neighbor);
            }
        }
    }

    #[test]
    fn test_cube_conversion_known_values() {
        let grid = create(1.0, true, true);
        assert_eq!(grid.offset_to_cube(0, 0), CubePoint::ORIGIN);
        assert_eq!(grid.offset_to_cube(1, 0), CubePoint::new_xz(1, -1));
        assert_eq!(grid.offset_to_cube(-1, 0), CubePoint::new_xz(-1, 0));
        assert_eq!(grid.offset_to_cube(-3, 2), CubePoint::new_xz(-3, 3));

        let grid = create(1.0, true, false);
        assert_eq!(grid.offset_to_cube(1, 0), CubePoint::new_xz(1, 0));
        assert_eq!(grid.offset_to_cube(-1, 0), CubePoint::new_xz(-1, 1));

        let grid = create(1.0, false, true);
        assert_eq!(grid.offset_to_cube(0, 1), CubePoint::new_xz(-1, 1));
        assert_eq!(grid.offset_to_cube(0, -1), CubePoint::new_xz(0, -1));

        let grid = create(1.0, false, false);
        assert_eq!(grid.offset_to_cube(0, 1), CubePoint::new_xz(0, 1));
        assert_eq!(grid.offset_to_cube(0, -1), CubePoint::new_xz(1, -1));
    }

    #[test]
    fn test_cube_round_trip() {
        for grid in all_grids(1.0) {
            for x in -20..=20 {
                for y in -20..=20 {
                    let cube = grid.offset_to_cube(x, y);
                    assert_eq!(cube.x() + cube.y() + cube.z(), 0);
                    assert_eq!(
                        grid.cube_to_offset(cube.x(), cube.y()),
                        OffsetPoint::new(x, y)
                    );
                    let offset = grid.cube_to_offset(x, y);
                    assert_eq!(
                        grid.offset_to_cube(offset.x, offset.y),
                        CubePoint::new_xy(x, y)
                    );
                }
            }
        }
    }

    #[test]
    fn test_steps_distance() {
        let grid = create(1.0, true, false);
        assert_eq!(grid.steps_distance(0, 0, 0, 0), 0);
        assert_eq!(grid.steps_distance(0, 0, 0, 3), 3);
        assert_eq!(grid.steps_distance(0, 0, 3, 0), 3);
        assert_eq!(grid.steps_distance(0, 0, 4, 0), 4);
        assert_eq!(grid.steps_distance(0, 0, 4, 2), 4);
        assert_eq!(grid.steps_distance(0, 0, 4, 3), 5);
        assert_eq!(grid.steps_distance(-2, -2, 2, 2), 6);
    }

    #[test]
    fn test_squared_centers_distance_of_neighbors() {
        // Adjacent centers are always sqrt(3) * radius apart
        for grid in all_grids(4.0) {
            for neighbor in grid.neighbors(-1, 2) {
                let OffsetPoint { x: nx, y: ny } = neighbor;
                let distance = grid.squared_centers_distance(-1, 2, nx, ny);
                assert_approx_eq!(distance, 48.0, 1e-9);
            }
        }
    }

    #[test]
    fn test_squared_centers_distance_matches_centers() {
        for grid in all_grids(3.5) {
            for &(x0, y0, x1, y1) in
                &[(0, 0, 5, 7), (-3, 2, 4, -9), (1, 1, 1, 1), (-8, -8, 13, 2)]
            {
                let expected = grid
                    .center(x0, y0)
                    .squared_distance_to(grid.center(x1, y1));
                assert_eq!(
                    grid.squared_centers_distance(x0, y0, x1, y1),
                    expected
                );
            }
        }
    }

    #[test]
    fn test_bounds_single_cell() {
        for grid in all_grids(6.0) {
            let expected = grid.hexagon().bounds(grid.center(3, -2));
            assert_eq!(compute_bounds(&grid, 3, -2, 3, -2), expected);
        }
    }

    #[test]
    fn test_bounds_range() {
        // Vertical odd shifted, radius 1: columns are 1.5 apart, column 1 is
        // pushed down by half a cell
        let grid = create(1.0, true, false);
        let size_y = grid.hexagon().size_y();
        let bounds = compute_bounds(&grid, 0, 0, 4, 3);
        assert_approx_eq!(bounds.min.x, -1.0);
        assert_approx_eq!(bounds.max.x, 4.0 * 1.5 + 1.0);
        assert_approx_eq!(bounds.min.y, -0.5 * size_y);
        // Column 3 is shifted, so it reaches half a cell below column 4
        assert_approx_eq!(bounds.max.y, 3.0 * size_y + size_y);

        // Every center in the range should land inside the bounds
        for x in 0..=4 {
            for y in 0..=3 {
                assert!(bounds.contains(grid.center(x, y)));
            }
        }
    }

    #[test]
    fn test_bounds_range_horizontal() {
        // Horizontal odd shifted, radius 1: rows are 1.5 apart, odd rows are
        // pushed right by half a cell
        let grid = create(1.0, false, false);
        let size_x = grid.hexagon().size_x();
        let bounds = compute_bounds(&grid, 0, 0, 3, 4);
        assert_approx_eq!(bounds.min.x, -0.5 * size_x);
        // Row 3 is shifted, so (3, 3) reaches half a cell past (3, 4). Only
        // the inner sample along y catches that.
        assert_approx_eq!(bounds.max.x, 4.0 * size_x);
        assert_approx_eq!(bounds.min.y, -1.0);
        assert_approx_eq!(bounds.max.y, 4.0 * 1.5 + 1.0);

        for x in 0..=3 {
            for y in 0..=4 {
                assert!(bounds.contains(grid.center(x, y)));
            }
        }
    }

    #[test]
    fn test_grid_serialization() {
        let grid = create(2.0, false, false);
        assert_tokens(
            &grid,
            &[
                Token::Struct {
                    name: "HexagonGrid",
                    len: 2,
                },
                Token::Str("hexagon"),
                Token::Struct {
                    name: "Hexagon",
                    len: 2,
                },
                Token::Str("radius"),
                Token::F64(2.0),
                Token::Str("orientation"),
                Token::UnitVariant {
                    name: "Orientation",
                    variant: "horizontal",
                },
                Token::StructEnd,
                Token::Str("shift"),
                Token::UnitVariant {
                    name: "Shift",
                    variant: "odd",
                },
                Token::StructEnd,
            ],
        );
    }
}
