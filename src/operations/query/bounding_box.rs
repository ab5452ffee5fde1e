use tracing::trace;

use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Shape};
use crate::math::Tolerance;

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point,
    /// Maximum corner of the bounding box.
    pub max: Point,
}

impl Aabb {
    /// Creates a box from its corners. The caller keeps `min <= max`.
    #[must_use]
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Smallest box containing every point; `None` for an empty slice.
    #[must_use]
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Self::new(*first, *first);
        Some(points[1..].iter().fold(init, |b, p| b.expanded_to(p)))
    }

    /// The box grown to include `p`.
    #[must_use]
    pub fn expanded_to(&self, p: &Point) -> Self {
        Self {
            min: Point::new(self.min.x.min(p.x), self.min.y.min(p.y)),
            max: Point::new(self.max.x.max(p.x), self.max.y.max(p.y)),
        }
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn union(&self, other: &Aabb) -> Self {
        self.expanded_to(&other.min).expanded_to(&other.max)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.min.midpoint_to(&self.max)
    }

    /// Inclusive containment, widened by `tol.shape` on every side.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        p.x >= self.min.x - tol.shape
            && p.x <= self.max.x + tol.shape
            && p.y >= self.min.y - tol.shape
            && p.y <= self.max.y + tol.shape
    }

    /// Overlap test; touching boxes intersect.
    #[must_use]
    pub fn intersects(&self, other: &Aabb, tol: &Tolerance) -> bool {
        self.min.x <= other.max.x + tol.shape
            && other.min.x <= self.max.x + tol.shape
            && self.min.y <= other.max.y + tol.shape
            && other.min.y <= self.max.y + tol.shape
    }
}

/// Bounding box of a point set.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] for an empty slice.
pub fn bounding_box(points: &[Point]) -> Result<Aabb> {
    Aabb::enclosing(points).ok_or_else(|| GeometryError::EmptyInput("bounding box of no points").into())
}

/// Arithmetic mean of a point set.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] for an empty slice.
pub fn centroid(points: &[Point]) -> Result<Point> {
    if points.is_empty() {
        return Err(GeometryError::EmptyInput("centroid of no points").into());
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Ok(Point::new(sx / n, sy / n))
}

/// Computes the axis-aligned bounding box of a shape.
pub struct BoundingBox<'a> {
    shape: &'a Shape,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(shape: &'a Shape) -> Self {
        Self { shape }
    }

    /// Executes the query, returning the AABB.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] for a line, which has no finite bounds.
    pub fn execute(&self) -> Result<Aabb> {
        trace!(kind = self.shape.kind(), "bounding box");
        self.shape.bounds().ok_or_else(|| {
            GeometryError::Degenerate(format!("{} is unbounded", self.shape.kind())).into()
        })
    }
}
