use crate::error::{ConstructionError, Result};
use crate::geometry::{Point, Vector};
use crate::math::distance_2d::point_to_line_dist;
use crate::math::intersect_2d::{line_line_params, point_at};
use crate::math::{Tolerance, POINT_TOLERANCE};

/// An infinite line through `point` with unit `direction`.
///
/// The parametric form is: `P(t) = point + t * direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point,
    direction: Vector,
}

impl Line {
    /// Creates a new line, normalizing `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroDirection`] if `direction` is shorter
    /// than the default point tolerance.
    pub fn new(point: Point, direction: Vector) -> Result<Self> {
        let len = direction.length();
        if len < POINT_TOLERANCE || !len.is_finite() {
            return Err(ConstructionError::ZeroDirection.into());
        }
        Ok(Self {
            point,
            direction: direction / len,
        })
    }

    /// Creates the line through `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroDirection`] if the points coincide.
    pub fn through(a: Point, b: Point) -> Result<Self> {
        Self::new(a, b - a)
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector {
        &self.direction
    }

    /// Unit normal, 90° counter-clockwise from the direction.
    #[must_use]
    pub fn normal(&self) -> Vector {
        self.direction.perpendicular()
    }

    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.point + self.direction * t
    }

    /// Parameter of the orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn parameter_of(&self, p: &Point) -> f64 {
        (*p - self.point).dot(&self.direction)
    }

    /// Orthogonal projection of `p` onto the line.
    #[must_use]
    pub fn closest_point(&self, p: &Point) -> Point {
        self.point_at(self.parameter_of(p))
    }

    #[must_use]
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        point_to_line_dist(
            p.x,
            p.y,
            self.point.x,
            self.point.y,
            self.direction.x,
            self.direction.y,
        )
    }

    /// `true` when the directions are parallel within `tol.point`.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Line, tol: &Tolerance) -> bool {
        self.direction.cross(&other.direction).abs() < tol.point
    }

    /// Intersection point of two lines.
    ///
    /// Parallel and coincident lines return `None`.
    #[must_use]
    pub fn intersection(&self, other: &Line, tol: &Tolerance) -> Option<Point> {
        let (t, _) = line_line_params(
            self.point.xy(),
            self.direction.xy(),
            other.point.xy(),
            other.direction.xy(),
            tol.point,
        )?;
        Some(point_at(self.point.xy(), self.direction.xy(), t).into())
    }
}
