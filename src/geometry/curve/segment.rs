use crate::geometry::{Point, Vector};
use crate::math::distance_2d::{closest_on_segment, point_to_segment_dist};
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::Tolerance;

/// A bounded straight segment from `start` to `end`.
///
/// Zero-length segments are allowed and behave as a single point in
/// distance and intersection queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Start point (`t = 0`).
    pub start: Point,
    /// End point (`t = 1`).
    pub end: Point,
}

impl Segment {
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }

    #[must_use]
    pub fn midpoint(&self) -> Point {
        self.start.midpoint_to(&self.end)
    }

    /// Displacement from `start` to `end` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// `true` when the segment is shorter than `tol.point`.
    #[must_use]
    pub fn is_degenerate(&self, tol: &Tolerance) -> bool {
        self.length() < tol.point
    }

    /// Point at parameter `t`; `t` is not clamped.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        self.start + self.direction() * t
    }

    /// The same segment traversed from `end` to `start`.
    #[must_use]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.end, self.start)
    }

    /// Single intersection point with `other`, within `tol.point`.
    ///
    /// Collinear overlapping segments return `None`.
    #[must_use]
    pub fn intersection(&self, other: &Segment, tol: &Tolerance) -> Option<Point> {
        segment_segment_intersect_2d(
            self.start.xy(),
            self.end.xy(),
            other.start.xy(),
            other.end.xy(),
            tol.point,
        )
        .map(|hit| hit.point.into())
    }

    /// Closest point of the segment to `p`.
    #[must_use]
    pub fn closest_point(&self, p: &Point) -> Point {
        let (q, _) = closest_on_segment(p.x, p.y, self.start.x, self.start.y, self.end.x, self.end.y);
        q.into()
    }

    #[must_use]
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        point_to_segment_dist(p.x, p.y, self.start.x, self.start.y, self.end.x, self.end.y)
    }

    /// `true` when `p` lies within `tol.point` of the segment.
    #[must_use]
    pub fn contains_point(&self, p: &Point, tol: &Tolerance) -> bool {
        self.distance_to_point(p) <= tol.point
    }

    /// Tolerant equality in either orientation.
    #[must_use]
    pub fn approx_eq(&self, other: &Segment, tol: &Tolerance) -> bool {
        (self.start.approx_eq(&other.start, tol) && self.end.approx_eq(&other.end, tol))
            || (self.start.approx_eq(&other.end, tol) && self.end.approx_eq(&other.start, tol))
    }
}

impl From<(Point, Point)> for Segment {
    fn from((start, end): (Point, Point)) -> Self {
        Self::new(start, end)
    }
}
