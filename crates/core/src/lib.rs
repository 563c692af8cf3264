//! Hexgrid provides the geometry of hexagon grids: the metrics of a single
//! hexagon, and the addressing, adjacency and distance math for a virtually
//! infinite grid of them. Rendering and storing cell data are left to the
//! caller.
//!
//! ```
//! use hexgrid::{create, compute_bounds};
//!
//! // Vertical hexagons, odd columns shifted down by half a cell
//! let grid = create(30.0, true, false);
//! assert_eq!(grid.hexagon().size_x(), 60.0);
//!
//! let center = grid.center(2, 3);
//! let neighbor = grid.neighbor(2, 3, 0).unwrap();
//! assert_eq!(grid.steps_distance(2, 3, neighbor.x, neighbor.y), 1);
//!
//! let bounds = compute_bounds(&grid, 0, 0, 9, 9);
//! assert!(bounds.contains(center));
//! ```
//!
//! See [grid] for a description of the coordinate systems, and [GridConfig]
//! for building a grid from validated (optionally deserialized) settings.

mod config;
pub mod grid;
mod hexagon;
mod util;

pub use crate::{
    config::{GridConfig, MIN_RADIUS},
    grid::{
        compute_bounds, create, CubePoint, HexagonGrid, OffsetPoint,
        OffsetPointIndexMap, OffsetPointSet, Orientation, Shift,
    },
    hexagon::{Hexagon, ANGLE_STEP_RAD},
    util::{
        cells_within_len,
        unit::{Bounds, Point2},
    },
};
