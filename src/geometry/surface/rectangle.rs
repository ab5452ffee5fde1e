use crate::error::{ConstructionError, Result};
use crate::geometry::curve::Segment;
use crate::geometry::{Point, Vector};
use crate::math::polygon_2d::{contains_point_2d, perimeter_2d, signed_area_2d};
use crate::math::{Tolerance, POINT_TOLERANCE};
use crate::operations::query::Aabb;

use super::{vertices_close, Polygon};

/// A rectangle stored as four corners in counter-clockwise order.
///
/// Sides need not be axis-aligned. Corner `0` is the reference corner:
/// `width` is the length of side `0-1`, `height` of side `1-2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    vertices: [Point; 4],
}

impl Rectangle {
    /// Creates a rectangle from four corners.
    ///
    /// Clockwise input is reversed so the stored order is counter-clockwise.
    #[must_use]
    pub fn new(vertices: [Point; 4]) -> Self {
        let mut vertices = vertices;
        if signed_area_2d(&vertices) < 0.0 {
            vertices.reverse();
        }
        Self { vertices }
    }

    /// Creates a rectangle from a slice of corners.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::VertexCount`] unless exactly four points are given.
    pub fn from_slice(points: &[Point]) -> Result<Self> {
        let vertices: [Point; 4] = points.try_into().map_err(|_| ConstructionError::VertexCount {
            expected: 4,
            actual: points.len(),
        })?;
        Ok(Self::new(vertices))
    }

    /// Axis-aligned rectangle spanning `[min_x, max_x] x [min_y, max_y]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::InvalidBounds`] if a maximum is below its
    /// minimum or a bound is not finite.
    pub fn from_bounds(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self> {
        let finite = [min_x, min_y, max_x, max_y].iter().all(|v| v.is_finite());
        if !finite || max_x < min_x || max_y < min_y {
            return Err(ConstructionError::InvalidBounds {
                min_x,
                min_y,
                max_x,
                max_y,
            }
            .into());
        }
        Ok(Self {
            vertices: [
                Point::new(min_x, min_y),
                Point::new(max_x, min_y),
                Point::new(max_x, max_y),
                Point::new(min_x, max_y),
            ],
        })
    }

    /// Rectangle centered on `center` with its width measured along `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroDirection`] for a zero direction and
    /// [`ConstructionError::InvalidInput`] for a negative or non-finite size.
    pub fn from_center_and_size(
        center: Point,
        width: f64,
        height: f64,
        direction: &Vector,
    ) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) || width < 0.0 || height < 0.0 {
            return Err(ConstructionError::InvalidInput(format!(
                "rectangle size must be non-negative, got {width} x {height}"
            ))
            .into());
        }
        let len = direction.length();
        if len < POINT_TOLERANCE {
            return Err(ConstructionError::ZeroDirection.into());
        }
        let along = *direction / len * (width * 0.5);
        let across = (*direction / len).perpendicular() * (height * 0.5);
        Ok(Self {
            vertices: [
                center - along - across,
                center + along - across,
                center + along + across,
                center - along + across,
            ],
        })
    }

    /// Returns the corners in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> &[Point; 4] {
        &self.vertices
    }

    /// The four sides, starting at corner `0`.
    #[must_use]
    pub fn edges(&self) -> [Segment; 4] {
        let v = &self.vertices;
        [
            Segment::new(v[0], v[1]),
            Segment::new(v[1], v[2]),
            Segment::new(v[2], v[3]),
            Segment::new(v[3], v[0]),
        ]
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.vertices[0].distance_to(&self.vertices[1])
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.vertices[1].distance_to(&self.vertices[2])
    }

    /// Mean of the four corners.
    #[must_use]
    pub fn center(&self) -> Point {
        let (sx, sy) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        Point::new(sx / 4.0, sy / 4.0)
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        signed_area_2d(&self.vertices).abs()
    }

    #[must_use]
    pub fn perimeter(&self) -> f64 {
        perimeter_2d(&self.vertices)
    }

    /// `true` when width and height agree within `tol.shape`.
    #[must_use]
    pub fn is_square(&self, tol: &Tolerance) -> bool {
        (self.width() - self.height()).abs() <= tol.shape
    }

    /// Polygon containment rule; the boundary is inclusive within `tol.shape`.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        contains_point_2d(&self.vertices, p, tol.shape)
    }

    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::enclosing(&self.vertices).unwrap_or_else(|| Aabb::new(self.vertices[0], self.vertices[0]))
    }

    #[must_use]
    pub fn to_polygon(&self) -> Polygon {
        Polygon::from_corners(self.vertices.to_vec())
    }

    /// Corner-wise equality within `tol.shape`.
    #[must_use]
    pub fn approx_eq(&self, other: &Rectangle, tol: &Tolerance) -> bool {
        vertices_close(&self.vertices, &other.vertices, tol.shape)
    }
}
