//! Basic types for the two coordinate systems of a hexagon grid. See the
//! parent module documentation for a description of both systems.

use derive_more::{Add, AddAssign, Display, From, Into, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which way the hexagons of a grid face. See [Hexagon](crate::Hexagon) for
/// a picture of each.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Flat edges on top and bottom. Cells line up in columns, and every
    /// other column is shifted by half a cell along `y`.
    Vertical,
    /// Pointed corners on top and bottom. Cells line up in rows, and every
    /// other row is shifted by half a cell along `x`.
    Horizontal,
}

/// Which rows/columns of a grid are shifted by half a cell. The shift is
/// always towards the positive end of the axis.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Rows/columns with an even index are shifted
    Even,
    /// Rows/columns with an odd index are shifted
    Odd,
}

impl Shift {
    /// Is the row/column with the given index shifted?
    pub fn is_shifted(self, index: i32) -> bool {
        let odd = (index & 1) == 1;
        match self {
            Self::Even => !odd,
            Self::Odd => odd,
        }
    }
}

/// A cell position in offset coordinates. These are the "natural" row/column
/// indices of a grid, where every other row or column is shifted visually.
/// Any pair of integers is a valid offset point.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    From,
    Into,
    Add,
    Sub,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct OffsetPoint {
    pub x: i32,
    pub y: i32,
}

impl OffsetPoint {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A cell position in cube coordinates. Every cell maps to an integer point
/// on the plane `x + y + z = 0`, which makes distances and directions uniform
/// across all six neighbors.
///
/// ## Implementation
///
/// Since `x + y + z = 0` for all points, we only store `x` and `y` and
/// derive `z` as needed. This is also the pair that grid conversions accept
/// and return.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x()", "self.y()", "self.z()")]
pub struct CubePoint {
    x: i32,
    y: i32,
}

impl CubePoint {
    pub const ORIGIN: Self = Self::new_xy(0, 0);

    /// Construct a new cube point with the given x and y. Since x+y+z=0 for
    /// all points, we can derive z from x & y.
    pub const fn new_xy(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Construct a new cube point with the given x and z. Since x+y+z=0 for
    /// all points, we can derive y from x & z.
    pub const fn new_xz(x: i32, z: i32) -> Self {
        Self::new_xy(x, -x - z)
    }

    /// Construct a new cube point with the given y and z. Since x+y+z=0 for
    /// all points, we can derive x from y & z.
    pub const fn new_yz(y: i32, z: i32) -> Self {
        Self::new_xy(-y - z, y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn z(&self) -> i32 {
        -self.x - self.y
    }

    /// Calculate the step distance between two cells, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the cells are adjacent, 2 if there is 1 cell between them, etc.
    pub fn distance_to(self, other: CubePoint) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dx = (self.x() - other.x()).unsigned_abs();
        let dy = (self.y() - other.y()).unsigned_abs();
        let dz = (self.z() - other.z()).unsigned_abs();
        dx.max(dy).max(dz)
    }
}
