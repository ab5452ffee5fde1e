use std::ops::{Add, Sub};

use nalgebra::Point2;

use crate::error::{ConstructionError, Result};
use crate::math::Tolerance;

use super::Vector;

/// A position in the plane.
///
/// Coordinates are expected to be finite. [`Point::new`] does not check;
/// use [`Point::try_new`] at trust boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point without validation.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a point, rejecting NaN and infinite coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonFinite`] if either coordinate is not finite.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ConstructionError::NonFinite { x, y }.into());
        }
        Ok(Self { x, y })
    }

    /// The origin `(0, 0)`.
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Coordinates as a tuple, the form the `math` routines take.
    #[must_use]
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Midpoint of the segment between `self` and `other`.
    #[must_use]
    pub fn midpoint_to(&self, other: &Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    /// Returns this point moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector) -> Point {
        Point::new(self.x + offset.x, self.y + offset.y)
    }

    /// Tolerant equality: both coordinate differences within `tol.point`.
    #[must_use]
    pub fn approx_eq(&self, other: &Point, tol: &Tolerance) -> bool {
        (self.x - other.x).abs() <= tol.point && (self.y - other.y).abs() <= tol.point
    }
}

impl Sub for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        self.translated(&rhs)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;

    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point2<f64>> for Point {
    fn from(p: Point2<f64>) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Point> for Point2<f64> {
    fn from(p: Point) -> Self {
        Point2::new(p.x, p.y)
    }
}
