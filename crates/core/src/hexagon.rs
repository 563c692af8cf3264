//! Metrics of a single hexagon. A [Hexagon] does not represent an instance of
//! a cell, only the shape of every cell in a grid: a hexagon of a certain
//! radius and orientation, centered at the origin.

use crate::{
    grid::Orientation,
    util::unit::{Bounds, Point2},
};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Angle between two adjacent corners of a hexagon, in radians
pub const ANGLE_STEP_RAD: f64 = 2.0 * PI / 6.0;

/// The shape of one hexagon. All derived values are computed once, in the
/// constructor, and never change.
///
/// The orientation determines which way the hexagon faces:
///
/// ```text
///  Vertical     Horizontal
///    __            /\
///   /  \          |  |
///   \__/           \/
/// ```
///
/// Only the radius and orientation are serialized. Deserializing goes through
/// [Hexagon::new], so the derived values always match the radius.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "HexagonDef", into = "HexagonDef")]
pub struct Hexagon {
    radius: f64,
    orientation: Orientation,
    size_x: f64,
    size_y: f64,
    spacing_x: f64,
    spacing_y: f64,
    /// Rotation of the corner sampling, in units of [ANGLE_STEP_RAD]. 0.0 for
    /// vertical hexagons, 0.5 for horizontal ones.
    angle_step_offset: f64,
}

/// Serialized form of a [Hexagon]: just the independent values
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
#[serde(rename = "Hexagon")]
struct HexagonDef {
    radius: f64,
    orientation: Orientation,
}

impl From<HexagonDef> for Hexagon {
    fn from(def: HexagonDef) -> Self {
        Self::new(def.radius, def.orientation)
    }
}

impl From<Hexagon> for HexagonDef {
    fn from(hexagon: Hexagon) -> Self {
        Self {
            radius: hexagon.radius,
            orientation: hexagon.orientation,
        }
    }
}

impl Hexagon {
    /// Create a hexagon with the given radius (center-to-corner distance).
    /// The radius is expected to be positive, but isn't checked here. Use
    /// [GridConfig](crate::GridConfig) if you need validation.
    pub fn new(radius: f64, orientation: Orientation) -> Self {
        let sqrt3_2 = 3.0_f64.sqrt() / 2.0;
        match orientation {
            Orientation::Vertical => {
                let size_x = radius * 2.0;
                let size_y = sqrt3_2 * size_x;
                Self {
                    radius,
                    orientation,
                    size_x,
                    size_y,
                    spacing_x: 3.0 / 4.0 * size_x,
                    spacing_y: size_y,
                    angle_step_offset: 0.0,
                }
            }
            Orientation::Horizontal => {
                let size_y = radius * 2.0;
                let size_x = sqrt3_2 * size_y;
                Self {
                    radius,
                    orientation,
                    size_x,
                    size_y,
                    spacing_x: size_x,
                    spacing_y: 3.0 / 4.0 * size_y,
                    angle_step_offset: 0.5,
                }
            }
        }
    }

    pub fn vertical(radius: f64) -> Self {
        Self::new(radius, Orientation::Vertical)
    }

    pub fn horizontal(radius: f64) -> Self {
        Self::new(radius, Orientation::Horizontal)
    }

    /// Distance from the center to each corner
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Full extent of the hexagon along the x axis
    pub fn size_x(&self) -> f64 {
        self.size_x
    }

    /// Full extent of the hexagon along the y axis
    pub fn size_y(&self) -> f64 {
        self.size_y
    }

    /// X distance between the centers of two horizontally adjacent hexagons
    pub fn spacing_x(&self) -> f64 {
        self.spacing_x
    }

    /// Y distance between the centers of two vertically adjacent hexagons
    pub fn spacing_y(&self) -> f64 {
        self.spacing_y
    }

    pub fn angle_step_offset(&self) -> f64 {
        self.angle_step_offset
    }

    /// X coordinate of the corner with the given index, relative to the
    /// center. Valid indices are `0..6`; anything else just keeps walking
    /// around the hexagon with the same formula.
    pub fn corner_x(&self, index: i32) -> f64 {
        self.corner_angle(index).cos() * self.radius
    }

    /// Y coordinate of the corner with the given index, relative to the
    /// center. See [Self::corner_x] for valid indices.
    pub fn corner_y(&self, index: i32) -> f64 {
        self.corner_angle(index).sin() * self.radius
    }

    fn corner_angle(&self, index: i32) -> f64 {
        ANGLE_STEP_RAD * (index as f64 + self.angle_step_offset)
    }

    /// All 6 corners of this hexagon when centered at the given point, in
    /// index order
    pub fn corners(&self, center: Point2) -> [Point2; 6] {
        let mut corners = [Point2::ORIGIN; 6];
        for (index, corner) in (0..).zip(corners.iter_mut()) {
            *corner = Point2::new(
                center.x + self.corner_x(index),
                center.y + self.corner_y(index),
            );
        }
        corners
    }

    /// Bounding rectangle of this hexagon when centered at the given point
    pub fn bounds(&self, center: Point2) -> Bounds {
        // The corner list is never empty, so the fallback is unreachable
        Bounds::from_points(self.corners(center).iter().copied())
            .unwrap_or_else(|| Bounds::new(center, center))
    }
}
