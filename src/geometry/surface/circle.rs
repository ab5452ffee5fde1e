use std::f64::consts::{PI, TAU};

use crate::error::{ConstructionError, Result};
use crate::geometry::Point;
use crate::math::Tolerance;
use crate::operations::query::Aabb;

/// A disc in the plane.
///
/// A zero radius is valid and describes a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidRadius`] if the radius is negative
    /// or not finite.
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ConstructionError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Circle whose diameter is the segment `p1`-`p2`.
    #[must_use]
    pub fn from_diameter(p1: &Point, p2: &Point) -> Self {
        Self {
            center: p1.midpoint_to(p2),
            radius: p1.distance_to(p2) * 0.5,
        }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Circumference `2πr`.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        TAU * self.radius
    }

    /// Boundary point at `degrees` counter-clockwise from +x.
    #[must_use]
    pub fn point_at_deg(&self, degrees: f64) -> Point {
        let (s, c) = degrees.to_radians().sin_cos();
        Point::new(self.center.x + self.radius * c, self.center.y + self.radius * s)
    }

    /// `true` when `p` lies inside or within `tol.shape` of the boundary.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        self.center.distance_to(p) <= self.radius + tol.shape
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            Point::new(self.center.x - self.radius, self.center.y - self.radius),
            Point::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }

    /// Tolerant equality of center and radius, using `tol.shape`.
    #[must_use]
    pub fn approx_eq(&self, other: &Circle, tol: &Tolerance) -> bool {
        (self.center.x - other.center.x).abs() <= tol.shape
            && (self.center.y - other.center.y).abs() <= tol.shape
            && (self.radius - other.radius).abs() <= tol.shape
    }
}
