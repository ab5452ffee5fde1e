use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::geometry::{Circle, Ellipse, Line, Point, Polygon, Rectangle, Segment};
use crate::math::intersect_2d::{
    line_circle_params, line_segment_intersect_2d, segment_segment_intersect_2d,
};
use crate::math::Tolerance;

/// One-degree sampling of the circle for the ellipse-circle solver.
const ELLIPSE_CIRCLE_SAMPLES: u32 = 360;
const REFINE_ITERATIONS: usize = 100;

/// How two circles meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection {
    /// Centers coincide (within `tol.point`); the circles are identical or nested.
    Concentric,
    /// The circles are apart or one lies strictly inside the other.
    Disjoint,
    /// Internal or external tangency.
    Tangent(Point),
    /// Two crossing points, left then right of the center line `c1 -> c2`.
    Crossing(Point, Point),
}

/// Intersection point of two infinite lines; `None` when parallel.
#[must_use]
pub fn line_intersection(a: &Line, b: &Line, tol: &Tolerance) -> Option<Point> {
    let hit = a.intersection(b, tol);
    if hit.is_none() {
        trace!("lines rejected as parallel");
    }
    hit
}

/// Intersection point of two bounded segments.
///
/// Collinear overlapping segments return `None`.
#[must_use]
pub fn segment_intersection(a: &Segment, b: &Segment, tol: &Tolerance) -> Option<Point> {
    a.intersection(b, tol)
}

/// Intersection of an infinite line with a bounded segment.
///
/// A segment lying on the line returns `None`.
#[must_use]
pub fn line_segment_intersection(line: &Line, segment: &Segment, tol: &Tolerance) -> Option<Point> {
    line_segment_intersect_2d(
        line.point().xy(),
        line.direction().xy(),
        segment.start.xy(),
        segment.end.xy(),
        tol.point,
    )
    .map(|(p, _, _)| p.into())
}

/// Zero, one (tangent) or two points where `line` meets the circle,
/// sorted by x then y.
#[must_use]
pub fn circle_line_intersection(circle: &Circle, line: &Line, tol: &Tolerance) -> Vec<Point> {
    let mut points: Vec<Point> = line_circle_params(
        line.point().xy(),
        line.direction().xy(),
        circle.center().xy(),
        circle.radius(),
        tol.point,
    )
    .into_iter()
    .map(|t| line.point_at(t))
    .collect();
    sort_by_xy(&mut points);
    points
}

/// Points where the circle boundary meets a bounded segment, ordered
/// from `segment.start`.
#[must_use]
pub fn circle_segment_intersection(circle: &Circle, segment: &Segment, tol: &Tolerance) -> Vec<Point> {
    let len = segment.length();
    let Some(dir) = segment.direction().normalized(tol) else {
        let on_boundary = (segment.start.distance_to(circle.center()) - circle.radius()).abs() <= tol.point;
        return if on_boundary { vec![segment.start] } else { Vec::new() };
    };
    line_circle_params(
        segment.start.xy(),
        dir.xy(),
        circle.center().xy(),
        circle.radius(),
        tol.point,
    )
    .into_iter()
    .filter(|t| *t >= -tol.point && *t <= len + tol.point)
    .map(|t| segment.start + dir * t.clamp(0.0, len))
    .collect()
}

/// Classifies and solves the intersection of two circle boundaries.
#[must_use]
pub fn circles_intersection(c1: &Circle, c2: &Circle, tol: &Tolerance) -> CircleIntersection {
    let eps = tol.point;
    let (r1, r2) = (c1.radius(), c2.radius());
    let between = *c2.center() - *c1.center();
    let d = between.length();

    if d < eps {
        debug!(r1, r2, "concentric circles");
        return CircleIntersection::Concentric;
    }
    let u = between / d;

    if (d - (r1 + r2)).abs() <= eps {
        return CircleIntersection::Tangent(*c1.center() + u * r1);
    }
    if (d - (r1 - r2).abs()).abs() <= eps {
        // Internal tangency: the contact point lies on the larger circle.
        let p = if r1 >= r2 {
            *c1.center() + u * r1
        } else {
            *c2.center() - u * r2
        };
        return CircleIntersection::Tangent(p);
    }
    if d > r1 + r2 || d < (r1 - r2).abs() {
        return CircleIntersection::Disjoint;
    }

    let a = (d * d + r1 * r1 - r2 * r2) / (2.0 * d);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let base = *c1.center() + u * a;
    let perp = u.perpendicular();
    CircleIntersection::Crossing(base + perp * h, base - perp * h)
}

/// Points where `line` meets the ellipse boundary, ordered along the line.
///
/// Solved in the ellipse frame, so rotation is honored. An ellipse with a
/// zero minor axis is treated as its major-axis segment.
#[must_use]
pub fn ellipse_line_intersection(ellipse: &Ellipse, line: &Line, tol: &Tolerance) -> Vec<Point> {
    let (a, b) = (ellipse.semi_major(), ellipse.semi_minor());
    if b < tol.point {
        let (e1, e2) = ellipse.major_axis_endpoints();
        return line_segment_intersection(line, &Segment::new(e1, e2), tol)
            .into_iter()
            .collect();
    }

    let (ox, oy) = ellipse.to_local(line.point());
    let (tx, ty) = ellipse.to_local(&line.point_at(1.0));
    let (dx, dy) = (tx - ox, ty - oy);

    let qa = dx * dx / (a * a) + dy * dy / (b * b);
    let qb = 2.0 * (ox * dx / (a * a) + oy * dy / (b * b));
    let qc = ox * ox / (a * a) + oy * oy / (b * b) - 1.0;
    let disc = qb * qb - 4.0 * qa * qc;

    if disc < -tol.point {
        return Vec::new();
    }
    if disc.abs() <= tol.point {
        return vec![line.point_at(-qb / (2.0 * qa))];
    }
    let root = disc.sqrt();
    let t1 = (-qb - root) / (2.0 * qa);
    let t2 = (-qb + root) / (2.0 * qa);
    vec![line.point_at(t1), line.point_at(t2)]
}

/// Points where the ellipse boundary meets the circle boundary, at most
/// four, sorted by x then y.
///
/// The circle is walked in one-degree steps against the ellipse's implicit
/// equation. Sign changes are refined by bisection; a sampled minimum that
/// comes within `tol.point` of the ellipse without crossing it is reported
/// as a tangency.
#[must_use]
pub fn ellipse_circle_intersection(ellipse: &Ellipse, circle: &Circle, tol: &Tolerance) -> Vec<Point> {
    if ellipse.semi_minor() < tol.point {
        let (e1, e2) = ellipse.major_axis_endpoints();
        return circle_segment_intersection(circle, &Segment::new(e1, e2), tol);
    }
    let (center, r) = (*circle.center(), circle.radius());
    if r < tol.point {
        return if ellipse_gap(ellipse, &center) <= tol.point {
            vec![center]
        } else {
            Vec::new()
        };
    }

    let at = |theta: f64| {
        let (s, c) = theta.sin_cos();
        Point::new(center.x + r * c, center.y + r * s)
    };
    let level = |theta: f64| ellipse_level(ellipse, &at(theta));

    let step = TAU / f64::from(ELLIPSE_CIRCLE_SAMPLES);
    let samples: Vec<(f64, f64)> = (0..ELLIPSE_CIRCLE_SAMPLES)
        .map(|i| {
            let theta = f64::from(i) * step;
            (theta, level(theta))
        })
        .collect();
    let n = samples.len();

    let mut hits: Vec<(f64, Point)> = Vec::new();
    for (i, &(theta, g)) in samples.iter().enumerate() {
        let g_prev = samples[(i + n - 1) % n].1;
        let g_next = samples[(i + 1) % n].1;
        let inside = g <= 0.0;

        if inside != (g_next <= 0.0) {
            let (mut lo, mut hi) = (theta, theta + step);
            for _ in 0..REFINE_ITERATIONS {
                let mid = 0.5 * (lo + hi);
                if (level(mid) <= 0.0) == inside {
                    lo = mid;
                } else {
                    hi = mid;
                }
            }
            let t = 0.5 * (lo + hi);
            push_unique_hit(&mut hits, t, at(t), tol.shape);
            continue;
        }

        let local_min = g.abs() <= g_prev.abs() && g.abs() <= g_next.abs();
        if local_min && inside == (g_prev <= 0.0) {
            let (mut lo, mut hi) = (theta - step, theta + step);
            for _ in 0..REFINE_ITERATIONS {
                let m1 = lo + (hi - lo) / 3.0;
                let m2 = hi - (hi - lo) / 3.0;
                if level(m1).abs() < level(m2).abs() {
                    hi = m2;
                } else {
                    lo = m1;
                }
            }
            let t = 0.5 * (lo + hi);
            let p = at(t);
            if ellipse_gap(ellipse, &p) <= tol.point {
                trace!(theta = t, "ellipse and circle touch");
                push_unique_hit(&mut hits, t, p, tol.shape);
            }
        }
    }

    let mut points: Vec<Point> = hits.into_iter().map(|(_, p)| p).collect();
    sort_by_xy(&mut points);
    points
}

/// Points where `line` crosses the polygon boundary, deduplicated and
/// ordered along the line direction.
///
/// A vertex hit by two edges is reported once; edges lying on the line
/// contribute nothing.
#[must_use]
pub fn line_polygon_intersection_points(line: &Line, polygon: &Polygon, tol: &Tolerance) -> Vec<Point> {
    let mut hits: Vec<(f64, Point)> = Vec::new();
    for edge in polygon.edges() {
        if let Some(p) = line_segment_intersection(line, &edge, tol) {
            push_unique_hit(&mut hits, line.parameter_of(&p), p, tol.point);
        }
    }
    hits.sort_by(|x, y| x.0.total_cmp(&y.0));
    hits.into_iter().map(|(_, p)| p).collect()
}

/// Points where `segment` crosses the polygon boundary, ordered from
/// `segment.start`.
#[must_use]
pub fn segment_polygon_intersection_points(
    segment: &Segment,
    polygon: &Polygon,
    tol: &Tolerance,
) -> Vec<Point> {
    let mut hits: Vec<(f64, Point)> = Vec::new();
    for edge in polygon.edges() {
        if let Some(hit) = segment_segment_intersect_2d(
            segment.start.xy(),
            segment.end.xy(),
            edge.start.xy(),
            edge.end.xy(),
            tol.point,
        ) {
            push_unique_hit(&mut hits, hit.t, hit.point.into(), tol.point);
        }
    }
    hits.sort_by(|x, y| x.0.total_cmp(&y.0));
    hits.into_iter().map(|(_, p)| p).collect()
}

/// Boundary crossings between two polygons, deduplicated, in edge order of `a`.
#[must_use]
pub fn polygon_intersection_points(a: &Polygon, b: &Polygon, tol: &Tolerance) -> Vec<Point> {
    let mut points: Vec<Point> = Vec::new();
    for ea in a.edges() {
        for eb in b.edges() {
            if let Some(p) = ea.intersection(&eb, tol) {
                if !points.iter().any(|q| q.distance_to(&p) <= tol.point) {
                    points.push(p);
                }
            }
        }
    }
    points
}

/// Boundary crossings between two rectangles.
#[must_use]
pub fn rectangle_intersection_points(a: &Rectangle, b: &Rectangle, tol: &Tolerance) -> Vec<Point> {
    polygon_intersection_points(&a.to_polygon(), &b.to_polygon(), tol)
}

/// `true` when the disc and the polygon region overlap.
///
/// Either the center is inside the polygon, or some edge comes within the
/// radius (plus `tol.shape`) of the center.
#[must_use]
pub fn circle_polygon_intersect(circle: &Circle, polygon: &Polygon, tol: &Tolerance) -> bool {
    let center = circle.center();
    polygon.contains_point(center, tol)
        || polygon
            .edges()
            .any(|e| e.distance_to_point(center) <= circle.radius() + tol.shape)
}

/// `x'²/a² + y'²/b² - 1` in the ellipse frame; negative inside.
fn ellipse_level(ellipse: &Ellipse, p: &Point) -> f64 {
    let (x, y) = ellipse.to_local(p);
    let (a, b) = (ellipse.semi_major(), ellipse.semi_minor());
    x * x / (a * a) + y * y / (b * b) - 1.0
}

/// First-order distance from `p` to the ellipse boundary: the level value
/// over its gradient length. Infinite at the center.
fn ellipse_gap(ellipse: &Ellipse, p: &Point) -> f64 {
    let (x, y) = ellipse.to_local(p);
    let (a2, b2) = (ellipse.semi_major().powi(2), ellipse.semi_minor().powi(2));
    let grad = (2.0 * x / a2).hypot(2.0 * y / b2);
    if grad <= 0.0 {
        return f64::INFINITY;
    }
    ellipse_level(ellipse, p).abs() / grad
}

fn push_unique_hit(hits: &mut Vec<(f64, Point)>, t: f64, p: Point, eps: f64) {
    if !hits.iter().any(|(_, q)| q.distance_to(&p) <= eps) {
        hits.push((t, p));
    }
}

fn sort_by_xy(points: &mut [Point]) {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Vector;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    fn x_axis() -> Line {
        Line::new(Point::new(-10.0, 0.0), Vector::unit_x()).unwrap()
    }

    fn unit_circle() -> Circle {
        Circle::new(Point::origin(), 1.0).unwrap()
    }

    fn square(side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(side, 0.0),
            Point::new(side, side),
            Point::new(0.0, side),
        ])
        .unwrap()
    }

    #[test]
    fn crossing_lines() {
        let a = Line::through(Point::new(0.0, 0.0), Point::new(2.0, 2.0)).unwrap();
        let b = Line::through(Point::new(0.0, 2.0), Point::new(2.0, 0.0)).unwrap();
        let p = line_intersection(&a, &b, &tol()).unwrap();
        assert!(p.approx_eq(&Point::new(1.0, 1.0), &tol()));
    }

    #[test]
    fn line_meets_segment_without_extension_limit() {
        // The crossing is far from the line's anchor point.
        let line = Line::new(Point::new(-1e6, 0.0), Vector::unit_x()).unwrap();
        let seg = Segment::new(Point::new(5.0, -1.0), Point::new(5.0, 1.0));
        let p = line_segment_intersection(&line, &seg, &tol()).unwrap();
        assert_abs_diff_eq!(p.x, 5.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = EPS);
        let miss = Segment::new(Point::new(5.0, 1.0), Point::new(5.0, 2.0));
        assert!(line_segment_intersection(&line, &miss, &tol()).is_none());
    }

    #[test]
    fn circle_line_secant_and_tangent() {
        let pts = circle_line_intersection(&unit_circle(), &x_axis(), &tol());
        assert_eq!(pts.len(), 2);
        assert!(pts[0].approx_eq(&Point::new(-1.0, 0.0), &tol()));
        assert!(pts[1].approx_eq(&Point::new(1.0, 0.0), &tol()));

        let tangent = Line::new(Point::new(3.0, 1.0), Vector::new(-1.0, 0.0)).unwrap();
        let pts = circle_line_intersection(&unit_circle(), &tangent, &tol());
        assert_eq!(pts.len(), 1);
        assert!(pts[0].approx_eq(&Point::new(0.0, 1.0), &tol()));

        let far = Line::new(Point::new(0.0, 2.0), Vector::unit_x()).unwrap();
        assert!(circle_line_intersection(&unit_circle(), &far, &tol()).is_empty());
    }

    #[test]
    fn circle_segment_keeps_points_within_extent() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(5.0, 0.0));
        let pts = circle_segment_intersection(&unit_circle(), &seg, &tol());
        assert_eq!(pts.len(), 1);
        assert!(pts[0].approx_eq(&Point::new(1.0, 0.0), &tol()));

        let through = Segment::new(Point::new(-5.0, 0.0), Point::new(5.0, 0.0));
        let pts = circle_segment_intersection(&unit_circle(), &through, &tol());
        assert_eq!(pts.len(), 2);
        assert!(pts[0].x < pts[1].x);
    }

    #[test]
    fn circles_cases() {
        let c1 = Circle::new(Point::origin(), 5.0).unwrap();
        let c2 = Circle::new(Point::new(6.0, 0.0), 5.0).unwrap();
        let CircleIntersection::Crossing(p, q) = circles_intersection(&c1, &c2, &tol()) else {
            panic!("expected two crossing points");
        };
        assert!(p.approx_eq(&Point::new(3.0, 4.0), &tol()));
        assert!(q.approx_eq(&Point::new(3.0, -4.0), &tol()));

        let touching = Circle::new(Point::new(10.0, 0.0), 5.0).unwrap();
        assert_eq!(
            circles_intersection(&c1, &touching, &tol()),
            CircleIntersection::Tangent(Point::new(5.0, 0.0))
        );

        let inner = Circle::new(Point::new(2.0, 0.0), 3.0).unwrap();
        let CircleIntersection::Tangent(t) = circles_intersection(&c1, &inner, &tol()) else {
            panic!("expected internal tangency");
        };
        assert!(t.approx_eq(&Point::new(5.0, 0.0), &tol()));

        let far = Circle::new(Point::new(20.0, 0.0), 1.0).unwrap();
        assert_eq!(circles_intersection(&c1, &far, &tol()), CircleIntersection::Disjoint);
        let nested = Circle::new(Point::new(1.0, 0.0), 1.0).unwrap();
        assert_eq!(circles_intersection(&c1, &nested, &tol()), CircleIntersection::Disjoint);
        assert_eq!(circles_intersection(&c1, &c1, &tol()), CircleIntersection::Concentric);
    }

    #[test]
    fn ellipse_line_respects_rotation() {
        let flat = Ellipse::new(Point::origin(), 2.0, 1.0, 0.0).unwrap();
        let pts = ellipse_line_intersection(&flat, &x_axis(), &tol());
        assert_eq!(pts.len(), 2);
        assert!(pts[0].approx_eq(&Point::new(-2.0, 0.0), &tol()));
        assert!(pts[1].approx_eq(&Point::new(2.0, 0.0), &tol()));

        let upright = Ellipse::new(Point::origin(), 2.0, 1.0, 90.0).unwrap();
        let pts = ellipse_line_intersection(&upright, &x_axis(), &tol());
        assert_eq!(pts.len(), 2);
        assert_abs_diff_eq!(pts[1].x, 1.0, epsilon = EPS);

        let tangent = Line::new(Point::new(0.0, 1.0), Vector::unit_x()).unwrap();
        let pts = ellipse_line_intersection(&flat, &tangent, &tol());
        assert_eq!(pts.len(), 1);
        assert!(pts[0].approx_eq(&Point::new(0.0, 1.0), &tol()));
    }

    fn on_both(e: &Ellipse, c: &Circle, p: &Point) -> bool {
        let (x, y) = e.to_local(p);
        let level = x * x / e.semi_major().powi(2) + y * y / e.semi_minor().powi(2);
        (level - 1.0).abs() <= 1e-9 && (p.distance_to(c.center()) - c.radius()).abs() <= 1e-9
    }

    fn has_point(pts: &[Point], x: f64, y: f64) -> bool {
        pts.iter().any(|p| p.distance_to(&Point::new(x, y)) <= 1e-6)
    }

    #[test]
    fn ellipse_circle_crossings() {
        let c = Circle::new(Point::origin(), 1.5).unwrap();
        for rotation in [0.0, 30.0] {
            let e = Ellipse::new(Point::origin(), 2.0, 1.0, rotation).unwrap();
            let pts = ellipse_circle_intersection(&e, &c, &tol());
            assert_eq!(pts.len(), 4);
            assert!(pts.iter().all(|p| on_both(&e, &c, p)));
        }

        let e = Ellipse::new(Point::origin(), 2.0, 1.0, 0.0).unwrap();
        let offset = Circle::new(Point::new(2.0, 0.0), 1.0).unwrap();
        let pts = ellipse_circle_intersection(&e, &offset, &tol());
        assert_eq!(pts.len(), 2);
        let y = 5.0_f64.sqrt() / 3.0;
        assert!(has_point(&pts, 4.0 / 3.0, y));
        assert!(has_point(&pts, 4.0 / 3.0, -y));
    }

    #[test]
    fn ellipse_circle_tangencies() {
        let e = Ellipse::new(Point::origin(), 2.0, 1.0, 0.0).unwrap();

        let outside = Circle::new(Point::new(3.0, 0.0), 1.0).unwrap();
        let pts = ellipse_circle_intersection(&e, &outside, &tol());
        assert_eq!(pts.len(), 1);
        assert!(has_point(&pts, 2.0, 0.0));

        // The unit circle touches the flat ellipse at both co-vertices.
        let inside = Circle::new(Point::origin(), 1.0).unwrap();
        let pts = ellipse_circle_intersection(&e, &inside, &tol());
        assert_eq!(pts.len(), 2);
        assert!(has_point(&pts, 0.0, 1.0));
        assert!(has_point(&pts, 0.0, -1.0));
    }

    #[test]
    fn ellipse_circle_disjoint() {
        let e = Ellipse::new(Point::origin(), 2.0, 1.0, 45.0).unwrap();
        let far = Circle::new(Point::new(10.0, 0.0), 1.0).unwrap();
        assert!(ellipse_circle_intersection(&e, &far, &tol()).is_empty());
        let nested = Circle::new(Point::origin(), 0.5).unwrap();
        assert!(ellipse_circle_intersection(&e, &nested, &tol()).is_empty());
        let enclosing = Circle::new(Point::origin(), 5.0).unwrap();
        assert!(ellipse_circle_intersection(&e, &enclosing, &tol()).is_empty());
    }

    #[test]
    fn flat_ellipse_meets_circle_like_a_segment() {
        let e = Ellipse::new(Point::origin(), 2.0, 0.0, 0.0).unwrap();
        let pts = ellipse_circle_intersection(&e, &unit_circle(), &tol());
        assert_eq!(pts.len(), 2);
        assert!(has_point(&pts, -1.0, 0.0));
        assert!(has_point(&pts, 1.0, 0.0));
    }

    #[test]
    fn line_through_polygon_vertices_is_deduplicated() {
        let diag = Line::new(Point::new(-1.0, -1.0), Vector::new(1.0, 1.0)).unwrap();
        let pts = line_polygon_intersection_points(&diag, &square(4.0), &tol());
        assert_eq!(pts.len(), 2);
        assert!(pts[0].approx_eq(&Point::origin(), &tol()));
        assert!(pts[1].approx_eq(&Point::new(4.0, 4.0), &tol()));
    }

    #[test]
    fn line_polygon_sorted_along_direction() {
        let backwards = Line::new(Point::new(10.0, 2.0), Vector::new(-1.0, 0.0)).unwrap();
        let pts = line_polygon_intersection_points(&backwards, &square(4.0), &tol());
        assert_eq!(pts, vec![Point::new(4.0, 2.0), Point::new(0.0, 2.0)]);
    }

    #[test]
    fn segment_polygon_clipped_to_segment() {
        let seg = Segment::new(Point::new(2.0, 2.0), Point::new(6.0, 2.0));
        let pts = segment_polygon_intersection_points(&seg, &square(4.0), &tol());
        assert_eq!(pts, vec![Point::new(4.0, 2.0)]);
    }

    #[test]
    fn overlapping_rectangles() {
        let a = Rectangle::from_bounds(0.0, 0.0, 2.0, 2.0).unwrap();
        let b = Rectangle::from_bounds(1.0, 1.0, 3.0, 3.0).unwrap();
        let pts = rectangle_intersection_points(&a, &b, &tol());
        assert_eq!(pts.len(), 2);
        assert!(pts[0].approx_eq(&Point::new(2.0, 1.0), &tol()));
        assert!(pts[1].approx_eq(&Point::new(1.0, 2.0), &tol()));
    }

    #[test]
    fn circle_against_polygon() {
        let sq = square(4.0);
        let inside = Circle::new(Point::new(2.0, 2.0), 0.5).unwrap();
        let grazing = Circle::new(Point::new(5.0, 2.0), 1.0).unwrap();
        let apart = Circle::new(Point::new(7.0, 2.0), 1.0).unwrap();
        assert!(circle_polygon_intersect(&inside, &sq, &tol()));
        assert!(circle_polygon_intersect(&grazing, &sq, &tol()));
        assert!(!circle_polygon_intersect(&apart, &sq, &tol()));
    }
}
