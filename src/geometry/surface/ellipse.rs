use std::f64::consts::PI;

use nalgebra::{Rotation2, Vector2};

use crate::error::{ConstructionError, Result};
use crate::geometry::curve::Segment;
use crate::geometry::Point;
use crate::math::{Tolerance, POINT_TOLERANCE};
use crate::operations::query::Aabb;

/// An ellipse with its major axis rotated `rotation` degrees
/// counter-clockwise from +x.
///
/// Invariant: `semi_major >= semi_minor >= 0`. Zero axes are allowed; a
/// zero minor axis collapses the ellipse to its major-axis segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point,
    semi_major: f64,
    semi_minor: f64,
    rotation: f64,
}

impl Ellipse {
    /// Creates a new ellipse; `rotation_deg` orients the major axis.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidAxes`] if an axis is negative or
    /// not finite, or `semi_major < semi_minor`.
    pub fn new(center: Point, semi_major: f64, semi_minor: f64, rotation_deg: f64) -> Result<Self> {
        let valid = semi_major.is_finite()
            && semi_minor.is_finite()
            && semi_minor >= 0.0
            && semi_major >= semi_minor;
        if !valid {
            return Err(ConstructionError::InvalidAxes {
                semi_major,
                semi_minor,
            }
            .into());
        }
        if !rotation_deg.is_finite() {
            return Err(ConstructionError::InvalidInput(format!(
                "ellipse rotation must be finite, got {rotation_deg}"
            ))
            .into());
        }
        Ok(Self {
            center,
            semi_major,
            semi_minor,
            rotation: rotation_deg,
        })
    }

    /// Creates an ellipse from full axis lengths.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ellipse::new`].
    pub fn from_center_and_axes(
        center: Point,
        major_axis: f64,
        minor_axis: f64,
        rotation_deg: f64,
    ) -> Result<Self> {
        Self::new(center, major_axis * 0.5, minor_axis * 0.5, rotation_deg)
    }

    /// Ellipse with foci `f1`, `f2` passing through `p`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidInput`] when `p` lies on the focal
    /// segment, so no proper ellipse passes through it.
    pub fn from_foci_and_point(f1: &Point, f2: &Point, p: &Point) -> Result<Self> {
        let center = f1.midpoint_to(f2);
        let c = f1.distance_to(&center);
        let a = (p.distance_to(f1) + p.distance_to(f2)) * 0.5;
        if a < c + POINT_TOLERANCE {
            return Err(ConstructionError::InvalidInput(
                "point lies on the focal segment".into(),
            )
            .into());
        }
        let b = (a * a - c * c).sqrt();
        let rotation = (f2.y - f1.y).atan2(f2.x - f1.x).to_degrees();
        Self::new(center, a, b, rotation)
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point {
        &self.center
    }

    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Major-axis rotation in degrees.
    #[must_use]
    pub fn rotation_deg(&self) -> f64 {
        self.rotation
    }

    /// Major-axis rotation in radians.
    #[must_use]
    pub fn rotation_rad(&self) -> f64 {
        self.rotation.to_radians()
    }

    fn frame(&self) -> Rotation2<f64> {
        Rotation2::new(self.rotation_rad())
    }

    /// Coordinates of `p` in the ellipse frame (center at origin, major axis on +x).
    #[must_use]
    pub fn to_local(&self, p: &Point) -> (f64, f64) {
        let v = self.frame().inverse() * Vector2::new(p.x - self.center.x, p.y - self.center.y);
        (v.x, v.y)
    }

    /// World point for local frame coordinates.
    #[must_use]
    pub fn to_world(&self, x: f64, y: f64) -> Point {
        let v = self.frame() * Vector2::new(x, y);
        Point::new(self.center.x + v.x, self.center.y + v.y)
    }

    /// Boundary point at eccentric anomaly `theta` (radians).
    #[must_use]
    pub fn point_at(&self, theta: f64) -> Point {
        let (s, c) = theta.sin_cos();
        self.to_world(self.semi_major * c, self.semi_minor * s)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }

    /// Ramanujan's second approximation of the circumference.
    #[must_use]
    pub fn perimeter(&self) -> f64 {
        let (a, b) = (self.semi_major, self.semi_minor);
        let sum = a + b;
        if sum <= 0.0 {
            return 0.0;
        }
        let h = ((a - b) * (a - b)) / (sum * sum);
        PI * sum * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
    }

    /// `sqrt(1 - b²/a²)`; zero for a point ellipse.
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        if self.semi_major <= 0.0 {
            return 0.0;
        }
        let ratio = self.semi_minor / self.semi_major;
        (1.0 - ratio * ratio).max(0.0).sqrt()
    }

    /// Distance from the center to each focus, `sqrt(a² - b²)`.
    #[must_use]
    pub fn focal_distance(&self) -> f64 {
        (self.semi_major * self.semi_major - self.semi_minor * self.semi_minor)
            .max(0.0)
            .sqrt()
    }

    #[must_use]
    pub fn foci(&self) -> (Point, Point) {
        let c = self.focal_distance();
        (self.to_world(-c, 0.0), self.to_world(c, 0.0))
    }

    #[must_use]
    pub fn major_axis_endpoints(&self) -> (Point, Point) {
        let a = self.semi_major;
        (self.to_world(-a, 0.0), self.to_world(a, 0.0))
    }

    #[must_use]
    pub fn minor_axis_endpoints(&self) -> (Point, Point) {
        let b = self.semi_minor;
        (self.to_world(0.0, -b), self.to_world(0.0, b))
    }

    /// Tight axis-aligned bounds of the rotated ellipse.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let (s, c) = self.rotation_rad().sin_cos();
        let (a, b) = (self.semi_major, self.semi_minor);
        let half_w = ((a * c).powi(2) + (b * s).powi(2)).sqrt();
        let half_h = ((a * s).powi(2) + (b * c).powi(2)).sqrt();
        Aabb::new(
            Point::new(self.center.x - half_w, self.center.y - half_h),
            Point::new(self.center.x + half_w, self.center.y + half_h),
        )
    }

    /// `x'²/a² + y'²/b² <= 1 + tol.shape` in the ellipse frame.
    ///
    /// A zero minor axis degrades to containment in the major-axis segment
    /// (a point when both axes are zero), within `tol.shape`.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        if self.semi_minor < tol.point {
            let (e1, e2) = self.major_axis_endpoints();
            return Segment::new(e1, e2).distance_to_point(p) <= tol.shape;
        }
        let (x, y) = self.to_local(p);
        let (a, b) = (self.semi_major, self.semi_minor);
        x * x / (a * a) + y * y / (b * b) <= 1.0 + tol.shape
    }

    /// Equality of the described curves within `tol.shape`.
    ///
    /// Rotations are compared modulo a half turn and ignored when both
    /// ellipses are circles.
    #[must_use]
    pub fn approx_eq(&self, other: &Ellipse, tol: &Tolerance) -> bool {
        let same_frame = (self.center.x - other.center.x).abs() <= tol.shape
            && (self.center.y - other.center.y).abs() <= tol.shape
            && (self.semi_major - other.semi_major).abs() <= tol.shape
            && (self.semi_minor - other.semi_minor).abs() <= tol.shape;
        if !same_frame {
            return false;
        }
        if self.semi_major - self.semi_minor <= tol.shape {
            return true;
        }
        let turn = (self.rotation - other.rotation).rem_euclid(180.0);
        turn.min(180.0 - turn) <= tol.shape
    }
}
