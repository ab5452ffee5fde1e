use std::f64::consts::TAU;

use crate::error::{ConstructionError, Result};
use crate::geometry::{Circle, Ellipse, Point, Segment, Shape, Vector};
use crate::math::Tolerance;

/// Coarse samples taken around an ellipse before refinement.
const ELLIPSE_SAMPLES: u32 = 360;
/// Ternary search rounds; each keeps two thirds of the bracket.
const REFINE_ITERATIONS: u32 = 100;

/// Result of a nearest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPointResult {
    /// The nearest point on the shape's boundary (or the shape itself for
    /// points, segments and lines).
    pub point: Point,
    /// Distance from the query point to `point`.
    pub distance: f64,
}

/// Finds the point on a shape nearest to a query point.
///
/// Regions are measured to their boundary, so a query point inside a circle
/// still reports the nearest point of the circumference.
pub struct NearestPoint<'a> {
    shape: &'a Shape,
    point: Point,
    tolerance: Tolerance,
}

impl<'a> NearestPoint<'a> {
    /// Creates a new `NearestPoint` query.
    #[must_use]
    pub fn new(shape: &'a Shape, point: Point) -> Self {
        Self {
            shape,
            point,
            tolerance: Tolerance::default(),
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::NonFinite`] if the query point has a
    /// non-finite coordinate.
    pub fn execute(&self) -> Result<NearestPointResult> {
        let p = self.point;
        if !(p.x.is_finite() && p.y.is_finite()) {
            return Err(ConstructionError::NonFinite { x: p.x, y: p.y }.into());
        }
        let nearest = match self.shape {
            Shape::Point(q) => *q,
            Shape::Segment(s) => s.closest_point(&p),
            Shape::Line(l) => l.closest_point(&p),
            Shape::Circle(c) => nearest_on_circle(c, &p, &self.tolerance),
            Shape::Ellipse(e) => nearest_on_ellipse(e, &p, &self.tolerance),
            Shape::Rectangle(r) => nearest_on_edges(r.edges().into_iter(), &p),
            Shape::Triangle(t) => nearest_on_edges(t.edges().into_iter(), &p),
            Shape::Polygon(poly) => nearest_on_edges(poly.edges(), &p),
        };
        Ok(NearestPointResult {
            point: nearest,
            distance: p.distance_to(&nearest),
        })
    }
}

fn nearest_on_edges(edges: impl Iterator<Item = Segment>, p: &Point) -> Point {
    let mut best = (*p, f64::INFINITY);
    for edge in edges {
        let q = edge.closest_point(p);
        let d = q.distance_squared_to(p);
        if d < best.1 {
            best = (q, d);
        }
    }
    best.0
}

fn nearest_on_circle(circle: &Circle, p: &Point, tol: &Tolerance) -> Point {
    let center = *circle.center();
    let r = circle.radius();
    let offset = *p - center;
    match offset.normalized(tol) {
        Some(dir) => center + dir * r,
        // Every boundary point is equally near; pick the one on +x.
        None => center + Vector::new(r, 0.0),
    }
}

fn nearest_on_ellipse(ellipse: &Ellipse, p: &Point, tol: &Tolerance) -> Point {
    if ellipse.semi_minor() < tol.point {
        let (e1, e2) = ellipse.major_axis_endpoints();
        return Segment::new(e1, e2).closest_point(p);
    }

    let dist2 = |theta: f64| ellipse.point_at(theta).distance_squared_to(p);

    let step = TAU / f64::from(ELLIPSE_SAMPLES);
    let mut best_theta = 0.0;
    let mut best_d = f64::INFINITY;
    for i in 0..ELLIPSE_SAMPLES {
        let theta = f64::from(i) * step;
        let d = dist2(theta);
        if d < best_d {
            best_d = d;
            best_theta = theta;
        }
    }

    let (mut lo, mut hi) = (best_theta - step, best_theta + step);
    for _ in 0..REFINE_ITERATIONS {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        if dist2(m1) < dist2(m2) {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    ellipse.point_at(0.5 * (lo + hi))
}
