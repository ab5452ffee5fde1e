use tracing::{debug, trace, warn};

use super::distance_2d::point_to_segment_dist;
use super::intersect_2d::segment_segment_intersect_2d;
use super::turn_offset;
use crate::geometry::Point;

/// Vertex count above which the quadratic simplicity scan logs a warning.
pub const SIMPLICITY_WARN_THRESHOLD: usize = 1_000;

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Sum of the lengths of all closing edges.
#[must_use]
pub fn perimeter_2d(points: &[Point]) -> f64 {
    edges(points).map(|(a, b)| a.distance_to(&b)).sum()
}

/// Iterates over the closed edges `(v[i], v[i + 1 mod n])`.
pub fn edges(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Ray-casting parity test: `true` when a horizontal ray from `p` towards +x
/// crosses the boundary an odd number of times.
///
/// Uses the half-open rule `(yi > y) != (yj > y)` so a vertex shared by two
/// edges is counted once. Points on the boundary may land on either side.
#[must_use]
pub fn ray_cast_inside(points: &[Point], p: &Point) -> bool {
    let n = points.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let (vi, vj) = (points[i], points[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            let x_cross = vi.x + (p.y - vi.y) * (vj.x - vi.x) / (vj.y - vi.y);
            if p.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Returns `true` when `p` lies within `eps` of any edge.
#[must_use]
pub fn on_boundary(points: &[Point], p: &Point, eps: f64) -> bool {
    edges(points).any(|(a, b)| point_to_segment_dist(p.x, p.y, a.x, a.y, b.x, b.y) <= eps)
}

/// Point-in-polygon with an inclusive boundary band of width `eps`.
#[must_use]
pub fn contains_point_2d(points: &[Point], p: &Point, eps: f64) -> bool {
    ray_cast_inside(points, p) || on_boundary(points, p, eps)
}

/// Checks that all turns along the boundary share one orientation.
///
/// A turn whose next vertex lies within `eps` of the incoming edge's line is
/// collinear and neutral.
#[must_use]
pub fn is_convex_2d(points: &[Point], eps: f64) -> bool {
    let n = points.len();
    if n < 4 {
        return true;
    }
    let mut ccw: Option<bool> = None;
    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let p2 = points[(i + 2) % n];
        let turn = turn_offset(p0.x, p0.y, p1.x, p1.y, p2.x, p2.y);
        if turn.abs() <= eps {
            continue;
        }
        match ccw {
            None => ccw = Some(turn > 0.0),
            Some(expected) if expected != (turn > 0.0) => return false,
            Some(_) => {}
        }
    }
    true
}

/// Tests every pair of non-adjacent edges for intersection.
///
/// O(n²) in the vertex count.
#[must_use]
pub fn is_simple_2d(points: &[Point], eps: f64) -> bool {
    let n = points.len();
    if n > SIMPLICITY_WARN_THRESHOLD {
        warn!(vertices = n, "quadratic self-intersection scan on a large polygon");
    }
    for i in 0..n {
        let (a0, a1) = (points[i], points[(i + 1) % n]);
        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                // Edges 0 and n-1 share vertex 0.
                continue;
            }
            let (b0, b1) = (points[j], points[(j + 1) % n]);
            if let Some(hit) = segment_segment_intersect_2d(a0.xy(), a1.xy(), b0.xy(), b1.xy(), eps) {
                trace!(i, j, x = hit.point.0, y = hit.point.1, "edges intersect");
                return false;
            }
        }
    }
    true
}

/// Graham scan over an arbitrary point set.
///
/// Returns the hull vertices in counter-clockwise order starting at the
/// lowest (then leftmost) point. Degenerate inputs produce one vertex (all
/// points coincide) or two (all points collinear). A turn is popped when the
/// incoming point lies within `eps` of the line through the last two stack
/// points, so collinear boundary points are dropped.
#[must_use]
pub fn graham_scan(points: &[Point], eps: f64) -> Vec<Point> {
    let Some(pivot) = lowest_point(points) else {
        return Vec::new();
    };

    let mut rest: Vec<(f64, f64, Point)> = points
        .iter()
        .filter(|p| p.distance_to(&pivot) > eps)
        .map(|p| {
            let angle = (p.y - pivot.y).atan2(p.x - pivot.x);
            (angle, p.distance_squared_to(&pivot), *p)
        })
        .collect();
    rest.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

    let mut stack: Vec<Point> = Vec::with_capacity(rest.len() + 1);
    stack.push(pivot);
    for (_, _, p) in rest {
        while stack.len() >= 2 {
            let top = stack[stack.len() - 1];
            let below = stack[stack.len() - 2];
            if turn_offset(below.x, below.y, top.x, top.y, p.x, p.y) <= eps {
                stack.pop();
            } else {
                break;
            }
        }
        stack.push(p);
    }

    if stack.len() < 3 {
        debug!(input = points.len(), hull = stack.len(), "degenerate convex hull");
    }
    stack
}

/// Lowest-y point, ties broken by lowest x.
fn lowest_point(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .copied()
        .min_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn rect_4x3() -> Vec<Point> {
        pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)])
    }

    #[test]
    fn signed_area_ccw_and_cw() {
        let ccw = rect_4x3();
        assert!((signed_area_2d(&ccw) - 12.0).abs() < TOL);
        let cw: Vec<Point> = ccw.into_iter().rev().collect();
        assert!((signed_area_2d(&cw) + 12.0).abs() < TOL);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&pts(&[(0.0, 0.0)])).abs() < TOL);
        assert!(signed_area_2d(&[]).abs() < TOL);
    }

    #[test]
    fn perimeter_of_rectangle() {
        assert!((perimeter_2d(&rect_4x3()) - 14.0).abs() < TOL);
    }

    #[test]
    fn ray_cast_inside_and_outside() {
        let r = rect_4x3();
        assert!(ray_cast_inside(&r, &Point::new(2.0, 1.5)));
        assert!(!ray_cast_inside(&r, &Point::new(10.0, 10.0)));
        assert!(!ray_cast_inside(&r, &Point::new(-1.0, 1.5)));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        // A diamond whose left and right vertices sit at the query point's height.
        let diamond = pts(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
        assert!(ray_cast_inside(&diamond, &Point::new(0.0, 0.0)));
        assert!(!ray_cast_inside(&diamond, &Point::new(-2.0, 0.0)));
    }

    #[test]
    fn concave_notch_is_outside() {
        // U shape: the notch between the arms is outside.
        let u = pts(&[
            (0.0, 0.0),
            (3.0, 0.0),
            (3.0, 3.0),
            (2.0, 3.0),
            (2.0, 1.0),
            (1.0, 1.0),
            (1.0, 3.0),
            (0.0, 3.0),
        ]);
        assert!(!contains_point_2d(&u, &Point::new(1.5, 2.0), TOL));
        assert!(contains_point_2d(&u, &Point::new(0.5, 2.0), TOL));
    }

    #[test]
    fn boundary_points_are_contained() {
        let r = rect_4x3();
        assert!(contains_point_2d(&r, &Point::new(4.0, 1.0), 1e-6));
        assert!(contains_point_2d(&r, &Point::new(0.0, 0.0), 1e-6));
        assert!(contains_point_2d(&r, &Point::new(2.0, 3.0 + 1e-7), 1e-6));
        assert!(!contains_point_2d(&r, &Point::new(2.0, 3.0 + 1e-3), 1e-6));
    }

    #[test]
    fn convexity() {
        assert!(is_convex_2d(&rect_4x3(), 1e-6));
        let arrow = pts(&[(0.0, 0.0), (2.0, 1.0), (4.0, 0.0), (2.0, 3.0)]);
        assert!(!is_convex_2d(&arrow, 1e-6));
    }

    #[test]
    fn small_scale_concavity_is_detected() {
        let arrow = pts(&[(0.0, 0.0), (2e-4, 1e-4), (4e-4, 0.0), (2e-4, 3e-4)]);
        assert!(!is_convex_2d(&arrow, 1e-6));
        let square = pts(&[(0.0, 0.0), (1e-4, 0.0), (1e-4, 1e-4), (0.0, 1e-4)]);
        assert!(is_convex_2d(&square, 1e-6));
    }

    #[test]
    fn collinear_vertex_does_not_break_convexity() {
        let with_mid = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
        assert!(is_convex_2d(&with_mid, 1e-6));
    }

    #[test]
    fn simplicity() {
        assert!(is_simple_2d(&rect_4x3(), TOL));
        let bowtie = pts(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
        assert!(!is_simple_2d(&bowtie, TOL));
        let triangle = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert!(is_simple_2d(&triangle, TOL));
    }

    #[test]
    fn hull_drops_interior_and_collinear_points() {
        let input = pts(&[
            (0.0, 0.0),
            (2.0, 0.0),
            (4.0, 0.0),
            (4.0, 4.0),
            (0.0, 4.0),
            (2.0, 2.0),
            (1.0, 3.0),
            (0.0, 2.0),
        ]);
        let hull = graham_scan(&input, TOL);
        assert_eq!(
            hull,
            pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
        );
        assert!(signed_area_2d(&hull) > 0.0);
    }

    #[test]
    fn hull_keeps_small_scale_corners() {
        let tiny = pts(&[(0.0, 0.0), (1e-5, 0.0), (0.0, 1e-5)]);
        assert_eq!(graham_scan(&tiny, TOL), tiny);
    }

    #[test]
    fn hull_pivot_prefers_leftmost_on_ties() {
        let input = pts(&[(3.0, 0.0), (1.0, 0.0), (2.0, 2.0)]);
        let hull = graham_scan(&input, TOL);
        assert_eq!(hull[0], Point::new(1.0, 0.0));
        assert_eq!(hull.len(), 3);
    }

    #[test]
    fn hull_degenerate_inputs() {
        assert!(graham_scan(&[], TOL).is_empty());

        let same = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
        assert_eq!(graham_scan(&same, TOL), pts(&[(1.0, 1.0)]));

        let line = pts(&[(2.0, 2.0), (0.0, 0.0), (1.0, 1.0), (3.0, 3.0)]);
        assert_eq!(graham_scan(&line, TOL), pts(&[(0.0, 0.0), (3.0, 3.0)]));
    }
}
