use derive_more::{
    Add, AddAssign, Display, Div, DivAssign, From, Into, Mul, MulAssign, Neg,
    Sub, SubAssign,
};
use serde::{Deserialize, Serialize};

/// A 2D point in pixel space. Pixel space has its origin at the center of the
/// cell `(0, 0)` (before any row/column shift is applied), with `+x` to the
/// right and `+y` **down**, the way most raster surfaces lay out pixels.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    PartialOrd,
    From,
    Into,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.x", "self.y")]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance to another point. Cheaper than the real
    /// distance, and exact for comparisons.
    pub fn squared_distance_to(self, other: Point2) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(other: Point2) -> Self {
        nalgebra::Point2::new(other.x, other.y)
    }
}

/// An axis-aligned rectangle in pixel space, inclusive on all edges.
#[derive(Copy, Clone, Debug, Display, PartialEq, Serialize, Deserialize)]
#[display(fmt = "[{}, {}]", min, max)]
pub struct Bounds {
    /// Corner with the smallest x and y
    pub min: Point2,
    /// Corner with the largest x and y
    pub max: Point2,
}

impl Bounds {
    /// Create bounds from two opposite corners, in any order
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            min: Point2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Point2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Smallest bounds that contain every given point. Returns `None` if the
    /// iterator is empty.
    pub fn from_points(
        points: impl IntoIterator<Item = Point2>,
    ) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::new(first, first), |bounds, point| {
            bounds.union(Self::new(point, point))
        }))
    }

    /// Max x minus min x
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Max y minus min y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2 {
        (self.min + self.max) / 2.0
    }

    /// Smallest bounds containing both `self` and `other`
    pub fn union(self, other: Bounds) -> Self {
        Self {
            min: Point2::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
            ),
            max: Point2::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
            ),
        }
    }

    /// Check if a point is in these bounds. Edges count as inside.
    pub fn contains(&self, point: Point2) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}
