use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::{Point, Polygon, Segment};
use crate::math::polygon_2d::graham_scan;
use crate::math::Tolerance;

/// Outcome of a convex hull query.
///
/// Degenerate point sets do not enclose an area, so they are reported as the
/// lower-dimensional entity that spans them.
#[derive(Debug, Clone, PartialEq)]
pub enum Hull {
    /// Every input point coincides within `tol.point`.
    Point(Point),
    /// The input is collinear; the segment joins its two extremes.
    Segment(Segment),
    /// Counter-clockwise hull starting at the lowest, then leftmost, point.
    Polygon(Polygon),
}

impl Hull {
    /// Hull vertices in counter-clockwise order.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point> {
        match self {
            Hull::Point(p) => vec![*p],
            Hull::Segment(s) => vec![s.start, s.end],
            Hull::Polygon(poly) => poly.vertices().to_vec(),
        }
    }

    /// Enclosed area; zero for degenerate hulls.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Hull::Polygon(poly) => poly.area(),
            Hull::Point(_) | Hull::Segment(_) => 0.0,
        }
    }
}

/// Computes the convex hull of a point set with a Graham scan.
pub struct ConvexHull<'a> {
    points: &'a [Point],
    tolerance: Tolerance,
}

impl<'a> ConvexHull<'a> {
    /// Creates a new `ConvexHull` query.
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            tolerance: Tolerance::default(),
        }
    }

    /// Overrides the tolerance used to merge coincident points and drop
    /// collinear turns.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyInput`] when no points are given.
    pub fn execute(&self) -> Result<Hull> {
        let hull = graham_scan(self.points, self.tolerance.point);
        debug!(input = self.points.len(), hull = hull.len(), "convex hull");
        match hull.as_slice() {
            [] => Err(GeometryError::EmptyInput("convex hull of no points").into()),
            [p] => Ok(Hull::Point(*p)),
            [a, b] => Ok(Hull::Segment(Segment::new(*a, *b))),
            _ => Ok(Hull::Polygon(Polygon::from_corners(hull))),
        }
    }
}
