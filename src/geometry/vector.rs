use std::f64::consts::TAU;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::{Rotation2, Vector2};

use crate::math::Tolerance;

use super::Point;

/// A displacement in the plane.
///
/// The zero vector is valid; operations that need a direction
/// (normalization, angles, projection targets) return `None` for it, and the
/// tolerance-taking ones also for vectors shorter than `tol.point`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vector {
    /// Creates a vector from components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector along +x.
    #[must_use]
    pub const fn unit_x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    /// Unit vector along +y.
    #[must_use]
    pub const fn unit_y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    /// Components as a tuple.
    #[must_use]
    pub fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Displacement from `from` to `to`.
    #[must_use]
    pub fn from_points(from: &Point, to: &Point) -> Self {
        *to - *from
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[must_use]
    pub fn dot(&self, other: &Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar 2D cross product. Positive when `other` is counter-clockwise
    /// from `self`.
    #[must_use]
    pub fn cross(&self, other: &Vector) -> f64 {
        crate::math::cross(self.x, self.y, other.x, other.y)
    }

    /// Unit vector in the same direction.
    ///
    /// Returns `None` when the length is below `tol.point`.
    #[must_use]
    pub fn normalized(&self, tol: &Tolerance) -> Option<Vector> {
        let len = self.length();
        (len >= tol.point).then(|| *self / len)
    }

    /// Rotates counter-clockwise by `degrees`.
    #[must_use]
    pub fn rotated_deg(&self, degrees: f64) -> Vector {
        self.rotated_rad(degrees.to_radians())
    }

    /// Rotates counter-clockwise by `radians`.
    #[must_use]
    pub fn rotated_rad(&self, radians: f64) -> Vector {
        let v = Rotation2::new(radians) * Vector2::new(self.x, self.y);
        Vector::new(v.x, v.y)
    }

    /// Vector projection of `self` onto `onto`.
    ///
    /// Returns `None` when `onto` is shorter than `tol.point`.
    #[must_use]
    pub fn projection(&self, onto: &Vector, tol: &Tolerance) -> Option<Vector> {
        let unit = onto.normalized(tol)?;
        Some(unit * self.dot(&unit))
    }

    /// Signed length of the projection of `self` onto `direction`.
    ///
    /// Returns `None` when `direction` is shorter than `tol.point`.
    #[must_use]
    pub fn component(&self, direction: &Vector, tol: &Tolerance) -> Option<f64> {
        direction.normalized(tol).map(|unit| self.dot(&unit))
    }

    /// The vector rotated 90° counter-clockwise.
    #[must_use]
    pub fn perpendicular(&self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    /// Direction angle in radians, in `[0, 2π)`. `None` for the zero vector.
    #[must_use]
    pub fn angle_rad(&self) -> Option<f64> {
        if self.length_squared() <= 0.0 {
            return None;
        }
        Some(normalize_angle_rad(self.y.atan2(self.x)))
    }

    /// Direction angle in degrees, in `[0, 360)`. `None` for the zero vector.
    #[must_use]
    pub fn angle_deg(&self) -> Option<f64> {
        self.angle_rad().map(f64::to_degrees).map(|a| if a >= 360.0 { 0.0 } else { a })
    }

    /// `true` when the length is below `tol.point`.
    #[must_use]
    pub fn is_zero(&self, tol: &Tolerance) -> bool {
        self.length() < tol.point
    }

    /// Tolerant equality: both component differences within `tol.point`.
    #[must_use]
    pub fn approx_eq(&self, other: &Vector, tol: &Tolerance) -> bool {
        (self.x - other.x).abs() <= tol.point && (self.y - other.y).abs() <= tol.point
    }
}

/// Wraps an angle into `[0, 2π)`.
fn normalize_angle_rad(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}
