//! Predicates over pairs of [`Shape`]s.
//!
//! Regions (rectangles, circles, polygons, triangles, ellipses) are treated as
//! filled, so a segment lying wholly inside a circle intersects it and is at
//! distance zero. Pairs without an algorithm fail with
//! [`GeometryError::Unsupported`].

use std::borrow::Cow;

use tracing::trace;

use crate::error::{ConstructionError, GeometryError, Result};
use crate::geometry::{Circle, Ellipse, Line, Point, Polygon, Segment, Shape, Vector};
use crate::math::Tolerance;

use super::closest_point::NearestPoint;
use super::distance::{boundary_distance, point_to_polygon_distance, segments_distance};
use super::intersect::{circle_polygon_intersect, ellipse_line_intersection};

/// Shapes reduced to the primitives the pair algorithms work on.
enum Prim<'a> {
    Point(Point),
    Segment(Segment),
    Line(&'a Line),
    Circle(&'a Circle),
    Ellipse(&'a Ellipse),
    Region(Cow<'a, Polygon>),
}

impl<'a> Prim<'a> {
    fn of(shape: &'a Shape) -> Self {
        match shape {
            Shape::Point(p) => Prim::Point(*p),
            Shape::Segment(s) => Prim::Segment(*s),
            Shape::Line(l) => Prim::Line(l),
            Shape::Circle(c) => Prim::Circle(c),
            Shape::Ellipse(e) => Prim::Ellipse(e),
            Shape::Polygon(p) => Prim::Region(Cow::Borrowed(p)),
            Shape::Rectangle(r) => Prim::Region(Cow::Owned(r.to_polygon())),
            Shape::Triangle(t) => Prim::Region(Cow::Owned(t.to_polygon())),
        }
    }
}

/// `true` when the two shapes share at least one point.
///
/// Touching counts: the gap must be within `tol.shape` when either side is a
/// region, or `tol.point` between points and curves.
///
/// # Errors
///
/// Returns [`GeometryError::Unsupported`] for pairs without an algorithm
/// (ellipse against ellipse or polygon).
pub fn intersects(a: &Shape, b: &Shape, tol: &Tolerance) -> Result<bool> {
    let gap = minimum_distance(a, b, tol)?;
    let eps = if a.is_region() || b.is_region() {
        tol.shape
    } else {
        tol.point
    };
    Ok(gap <= eps)
}

/// Smallest distance between any point of `a` and any point of `b`.
///
/// Zero when the shapes overlap.
///
/// # Errors
///
/// Returns [`GeometryError::Unsupported`] for pairs without an algorithm.
pub fn minimum_distance(a: &Shape, b: &Shape, tol: &Tolerance) -> Result<f64> {
    let unsupported = || GeometryError::Unsupported {
        left: a.kind(),
        right: b.kind(),
    };
    let d = match (Prim::of(a), Prim::of(b)) {
        (Prim::Point(p), Prim::Point(q)) => p.distance_to(&q),
        (Prim::Point(p), Prim::Segment(s)) | (Prim::Segment(s), Prim::Point(p)) => {
            s.distance_to_point(&p)
        }
        (Prim::Point(p), Prim::Line(l)) | (Prim::Line(l), Prim::Point(p)) => l.distance_to_point(&p),
        (Prim::Point(p), Prim::Circle(c)) | (Prim::Circle(c), Prim::Point(p)) => {
            (p.distance_to(c.center()) - c.radius()).max(0.0)
        }
        (Prim::Point(p), Prim::Ellipse(e)) | (Prim::Ellipse(e), Prim::Point(p)) => {
            point_ellipse_distance(&p, e, tol)?
        }
        (Prim::Point(p), Prim::Region(poly)) | (Prim::Region(poly), Prim::Point(p)) => {
            point_to_polygon_distance(&p, &poly, tol)
        }
        (Prim::Segment(s), Prim::Segment(t)) => segments_distance(&s, &t, tol),
        (Prim::Segment(s), Prim::Line(l)) | (Prim::Line(l), Prim::Segment(s)) => {
            let (lo, hi) = signed_span(l, &[s.start, s.end]);
            straddle_gap(lo, hi, tol.point)
        }
        (Prim::Segment(s), Prim::Circle(c)) | (Prim::Circle(c), Prim::Segment(s)) => {
            (s.distance_to_point(c.center()) - c.radius()).max(0.0)
        }
        (Prim::Segment(s), Prim::Ellipse(e)) | (Prim::Ellipse(e), Prim::Segment(s)) => {
            segment_ellipse_distance(&s, e, tol)?
        }
        (Prim::Segment(s), Prim::Region(poly)) | (Prim::Region(poly), Prim::Segment(s)) => {
            segment_polygon_distance(&s, &poly, tol)
        }
        (Prim::Line(l), Prim::Line(m)) => {
            if l.is_parallel_to(m, tol) {
                l.distance_to_point(m.point())
            } else {
                0.0
            }
        }
        (Prim::Line(l), Prim::Circle(c)) | (Prim::Circle(c), Prim::Line(l)) => {
            (l.distance_to_point(c.center()) - c.radius()).max(0.0)
        }
        (Prim::Line(l), Prim::Ellipse(e)) | (Prim::Ellipse(e), Prim::Line(l)) => {
            let (lo, hi) = signed_span(l, &ellipse_support_points(e, &l.normal()));
            straddle_gap(lo, hi, tol.shape)
        }
        (Prim::Line(l), Prim::Region(poly)) | (Prim::Region(poly), Prim::Line(l)) => {
            let (lo, hi) = signed_span(l, poly.vertices());
            straddle_gap(lo, hi, tol.shape)
        }
        (Prim::Circle(c1), Prim::Circle(c2)) => {
            (c1.center().distance_to(c2.center()) - c1.radius() - c2.radius()).max(0.0)
        }
        (Prim::Circle(c), Prim::Region(poly)) | (Prim::Region(poly), Prim::Circle(c)) => {
            if circle_polygon_intersect(c, &poly, tol) {
                0.0
            } else {
                (boundary_distance(c.center(), &poly) - c.radius()).max(0.0)
            }
        }
        (Prim::Circle(c), Prim::Ellipse(e)) | (Prim::Ellipse(e), Prim::Circle(c)) => {
            (point_ellipse_distance(c.center(), e, tol)? - c.radius()).max(0.0)
        }
        (Prim::Region(pa), Prim::Region(pb)) => polygon_pair_distance(&pa, &pb, tol),
        (Prim::Ellipse(_), Prim::Ellipse(_) | Prim::Region(_)) | (Prim::Region(_), Prim::Ellipse(_)) => {
            return Err(unsupported().into())
        }
    };
    trace!(left = a.kind(), right = b.kind(), distance = d, "minimum distance");
    Ok(d)
}

/// `true` when the shapes come within `distance` of each other (inclusive,
/// widened by `tol.shape`).
///
/// # Errors
///
/// Returns [`GeometryError::Unsupported`] for pairs without an algorithm.
pub fn within_distance(a: &Shape, b: &Shape, distance: f64, tol: &Tolerance) -> Result<bool> {
    Ok(minimum_distance(a, b, tol)? <= distance + tol.shape)
}

/// `true` when `point` lies on or inside `shape`.
///
/// Regions use their boundary-inclusive containment; points, segments and
/// lines compare against `tol.point`.
///
/// # Errors
///
/// Returns [`ConstructionError::NonFinite`] for a non-finite query point.
pub fn contains(shape: &Shape, point: &Point, tol: &Tolerance) -> Result<bool> {
    if !(point.x.is_finite() && point.y.is_finite()) {
        return Err(ConstructionError::NonFinite {
            x: point.x,
            y: point.y,
        }
        .into());
    }
    Ok(match shape {
        Shape::Point(p) => p.approx_eq(point, tol),
        Shape::Segment(s) => s.contains_point(point, tol),
        Shape::Line(l) => l.distance_to_point(point) <= tol.point,
        Shape::Rectangle(r) => r.contains_point(point, tol),
        Shape::Circle(c) => c.contains_point(point, tol),
        Shape::Polygon(p) => p.contains_point(point, tol),
        Shape::Triangle(t) => t.contains_point(point, tol),
        Shape::Ellipse(e) => e.contains_point(point, tol),
    })
}

/// Smallest and largest signed distance of `points` from the line.
fn signed_span(line: &Line, points: &[Point]) -> (f64, f64) {
    let n = line.normal();
    points
        .iter()
        .map(|p| (*p - *line.point()).dot(&n))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), s| (lo.min(s), hi.max(s)))
}

/// Gap between a line and a convex set whose signed offsets span `[lo, hi]`.
fn straddle_gap(lo: f64, hi: f64, eps: f64) -> f64 {
    if lo <= eps && hi >= -eps {
        0.0
    } else {
        lo.abs().min(hi.abs())
    }
}

/// The two ellipse points whose outward normals are `±normal`.
fn ellipse_support_points(ellipse: &Ellipse, normal: &Vector) -> [Point; 2] {
    let center = *ellipse.center();
    let (nx, ny) = ellipse.to_local(&(center + *normal));
    let (a, b) = (ellipse.semi_major(), ellipse.semi_minor());
    let k = (a * a * nx * nx + b * b * ny * ny).sqrt();
    if k <= 0.0 {
        return [center, center];
    }
    let (x, y) = (a * a * nx / k, b * b * ny / k);
    [ellipse.to_world(x, y), ellipse.to_world(-x, -y)]
}

fn point_ellipse_distance(p: &Point, ellipse: &Ellipse, tol: &Tolerance) -> Result<f64> {
    if ellipse.contains_point(p, tol) {
        return Ok(0.0);
    }
    let shape = Shape::Ellipse(*ellipse);
    Ok(NearestPoint::new(&shape, *p)
        .with_tolerance(*tol)
        .execute()?
        .distance)
}

/// For a convex region the nearest pair against a segment involves either an
/// endpoint or a support point whose normal is the segment normal.
fn segment_ellipse_distance(s: &Segment, ellipse: &Ellipse, tol: &Tolerance) -> Result<f64> {
    let Ok(line) = Line::through(s.start, s.end) else {
        return point_ellipse_distance(&s.start, ellipse, tol);
    };
    if ellipse.contains_point(&s.start, tol) || ellipse.contains_point(&s.end, tol) {
        return Ok(0.0);
    }
    let crossing = ellipse_line_intersection(ellipse, &line, tol)
        .iter()
        .any(|p| s.distance_to_point(p) <= tol.shape);
    if crossing {
        return Ok(0.0);
    }
    let mut best = point_ellipse_distance(&s.start, ellipse, tol)?
        .min(point_ellipse_distance(&s.end, ellipse, tol)?);
    let len = s.length();
    for q in ellipse_support_points(ellipse, &line.normal()) {
        let t = line.parameter_of(&q) - line.parameter_of(&s.start);
        if (0.0..=len).contains(&t) {
            best = best.min(line.distance_to_point(&q));
        }
    }
    Ok(best)
}

fn segment_polygon_distance(s: &Segment, poly: &Polygon, tol: &Tolerance) -> f64 {
    if poly.contains_point(&s.start, tol) || poly.contains_point(&s.end, tol) {
        return 0.0;
    }
    poly.edges()
        .map(|e| segments_distance(s, &e, tol))
        .fold(f64::INFINITY, f64::min)
}

fn polygon_pair_distance(a: &Polygon, b: &Polygon, tol: &Tolerance) -> f64 {
    if b.contains_point(&a.vertices()[0], tol) || a.contains_point(&b.vertices()[0], tol) {
        return 0.0;
    }
    a.edges()
        .flat_map(|ea| b.edges().map(move |eb| segments_distance(&ea, &eb, tol)))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;
    use crate::geometry::{Rectangle, Triangle};
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn circle(x: f64, y: f64, r: f64) -> Shape {
        Circle::new(Point::new(x, y), r).unwrap().into()
    }

    fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Shape {
        Rectangle::from_bounds(min_x, min_y, max_x, max_y).unwrap().into()
    }

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Shape {
        Segment::new(Point::new(ax, ay), Point::new(bx, by)).into()
    }

    fn line(px: f64, py: f64, dx: f64, dy: f64) -> Shape {
        Line::new(Point::new(px, py), Vector::new(dx, dy)).unwrap().into()
    }

    fn ellipse(a: f64, b: f64, rotation: f64) -> Shape {
        Ellipse::new(Point::origin(), a, b, rotation).unwrap().into()
    }

    #[test]
    fn circles_touch_and_separate() {
        let tol = Tolerance::default();
        assert!(intersects(&circle(0.0, 0.0, 1.0), &circle(2.0, 0.0, 1.0), &tol).unwrap());
        assert!(!intersects(&circle(0.0, 0.0, 1.0), &circle(3.0, 0.0, 1.0), &tol).unwrap());
        assert_abs_diff_eq!(
            minimum_distance(&circle(0.0, 0.0, 1.0), &circle(5.0, 0.0, 1.0), &tol).unwrap(),
            3.0,
            epsilon = EPS
        );
        // Nested discs overlap.
        assert!(intersects(&circle(0.0, 0.0, 5.0), &circle(1.0, 0.0, 1.0), &tol).unwrap());
    }

    #[test]
    fn segment_inside_region_intersects() {
        let tol = Tolerance::default();
        let inner = seg(1.0, 1.0, 2.0, 2.0);
        assert!(intersects(&inner, &rect(0.0, 0.0, 4.0, 4.0), &tol).unwrap());
        assert!(intersects(&circle(1.5, 1.5, 3.0), &inner, &tol).unwrap());
        assert_abs_diff_eq!(
            minimum_distance(&seg(6.0, 0.0, 6.0, 4.0), &rect(0.0, 0.0, 4.0, 4.0), &tol).unwrap(),
            2.0,
            epsilon = EPS
        );
    }

    #[test]
    fn lines_against_regions() {
        let tol = Tolerance::default();
        let square = rect(0.0, 0.0, 2.0, 2.0);
        assert!(intersects(&line(0.0, 1.0, 1.0, 0.0), &square, &tol).unwrap());
        assert!(intersects(&line(0.0, 2.0, 1.0, 0.0), &square, &tol).unwrap());
        assert_abs_diff_eq!(
            minimum_distance(&line(0.0, 5.0, 1.0, 0.0), &square, &tol).unwrap(),
            3.0,
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            minimum_distance(&line(0.0, 4.0, 1.0, 0.0), &circle(0.0, 0.0, 1.0), &tol).unwrap(),
            3.0,
            epsilon = EPS
        );
    }

    #[test]
    fn parallel_and_crossing_lines() {
        let tol = Tolerance::default();
        let a = line(0.0, 0.0, 1.0, 0.0);
        assert_abs_diff_eq!(minimum_distance(&a, &line(0.0, 2.0, -3.0, 0.0), &tol).unwrap(), 2.0, epsilon = EPS);
        assert!(intersects(&a, &line(0.0, 2.0, 1.0, 1.0), &tol).unwrap());
        assert!(intersects(&a, &seg(1.0, -1.0, 1.0, 1.0), &tol).unwrap());
        assert_abs_diff_eq!(minimum_distance(&a, &seg(0.0, 1.0, 5.0, 3.0), &tol).unwrap(), 1.0, epsilon = EPS);
    }

    #[test]
    fn ellipse_pairs() {
        let tol = Tolerance::default();
        let e = ellipse(4.0, 2.0, 0.0);
        assert_abs_diff_eq!(
            minimum_distance(&e, &line(0.0, 5.0, 1.0, 0.0), &tol).unwrap(),
            3.0,
            epsilon = EPS
        );
        assert!(intersects(&e, &line(0.0, 2.0, 1.0, 0.0), &tol).unwrap());
        // Crosses the ellipse with both endpoints outside.
        assert!(intersects(&e, &seg(-6.0, 0.0, 6.0, 0.0), &tol).unwrap());
        // Parallel to the major axis, above the top vertex.
        assert_abs_diff_eq!(
            minimum_distance(&e, &seg(-1.0, 3.0, 1.0, 3.0), &tol).unwrap(),
            1.0,
            epsilon = EPS
        );
        assert_abs_diff_eq!(
            minimum_distance(&e, &Point::new(0.0, 5.0).into(), &tol).unwrap(),
            3.0,
            epsilon = 1e-6
        );
        let rotated = ellipse(4.0, 2.0, 90.0);
        assert!(intersects(&rotated, &Point::new(0.0, 3.5).into(), &tol).unwrap());
    }

    #[test]
    fn circle_against_ellipse() {
        let tol = Tolerance::default();
        let e = ellipse(4.0, 2.0, 0.0);
        assert_abs_diff_eq!(minimum_distance(&e, &circle(0.0, 5.0, 1.0), &tol).unwrap(), 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(minimum_distance(&circle(7.0, 0.0, 1.0), &e, &tol).unwrap(), 2.0, epsilon = 1e-6);
        // Straddles the major vertex.
        assert!(intersects(&e, &circle(4.0, 0.0, 1.0), &tol).unwrap());
        // Disc inside the ellipse, and ellipse inside the disc.
        assert!(intersects(&circle(0.5, 0.0, 1.0), &e, &tol).unwrap());
        assert!(intersects(&e, &circle(0.0, 0.0, 10.0), &tol).unwrap());
    }

    #[test]
    fn polygon_pairs() {
        let tol = Tolerance::default();
        let tri: Shape = Triangle::new([Point::new(5.0, 0.0), Point::new(7.0, 0.0), Point::new(6.0, 2.0)]).into();
        assert_abs_diff_eq!(
            minimum_distance(&rect(0.0, 0.0, 2.0, 2.0), &tri, &tol).unwrap(),
            3.0,
            epsilon = EPS
        );
        // One square wholly inside the other.
        assert!(intersects(&rect(0.0, 0.0, 10.0, 10.0), &rect(4.0, 4.0, 5.0, 5.0), &tol).unwrap());
        assert!(intersects(&circle(3.0, 1.0, 1.0), &rect(0.0, 0.0, 2.0, 2.0), &tol).unwrap());
        assert_abs_diff_eq!(
            minimum_distance(&circle(5.0, 1.0, 1.0), &rect(0.0, 0.0, 2.0, 2.0), &tol).unwrap(),
            2.0,
            epsilon = EPS
        );
    }

    #[test]
    fn unsupported_pairs_name_both_kinds() {
        let tol = Tolerance::default();
        let err = intersects(&ellipse(2.0, 1.0, 0.0), &rect(0.0, 0.0, 1.0, 1.0), &tol).unwrap_err();
        assert!(matches!(
            err,
            PlanarError::Geometry(GeometryError::Unsupported {
                left: "ellipse",
                right: "rectangle"
            })
        ));
        assert!(minimum_distance(&ellipse(3.0, 1.0, 0.0), &ellipse(2.0, 1.0, 0.0), &tol).is_err());
    }

    #[test]
    fn within_distance_is_inclusive() {
        let tol = Tolerance::default();
        let a: Shape = Point::origin().into();
        let b: Shape = Point::new(3.0, 4.0).into();
        assert!(within_distance(&a, &b, 5.0, &tol).unwrap());
        assert!(!within_distance(&a, &b, 4.9, &tol).unwrap());
    }

    #[test]
    fn containment_dispatch() {
        let tol = Tolerance::default();
        let p = Point::new(1.0, 1.0);
        assert!(contains(&rect(0.0, 0.0, 2.0, 2.0), &p, &tol).unwrap());
        assert!(contains(&seg(0.0, 0.0, 2.0, 2.0), &p, &tol).unwrap());
        assert!(contains(&line(0.0, 0.0, 1.0, 1.0), &p, &tol).unwrap());
        assert!(!contains(&circle(5.0, 5.0, 1.0), &p, &tol).unwrap());
        assert!(contains(&circle(0.0, 0.0, 1.0), &Point::new(f64::NAN, 0.0), &tol).is_err());
    }
}
