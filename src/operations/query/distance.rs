use crate::geometry::{Line, Point, Polygon, Rectangle, Segment};
use crate::math::distance_2d::closest_between_segments;
use crate::math::{orient, Tolerance};

/// Position of a point relative to a directed segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Counter-clockwise of `start -> end`.
    Left,
    /// Clockwise of `start -> end`.
    Right,
    /// On the supporting line, within `tol.point`.
    On,
}

#[must_use]
pub fn point_to_segment_distance(p: &Point, segment: &Segment) -> f64 {
    segment.distance_to_point(p)
}

/// Closest point on the segment; the parameter is clamped to `[0, 1]`.
#[must_use]
pub fn point_to_segment_closest_point(p: &Point, segment: &Segment) -> Point {
    segment.closest_point(p)
}

#[must_use]
pub fn point_to_line_distance(p: &Point, line: &Line) -> f64 {
    line.distance_to_point(p)
}

#[must_use]
pub fn point_to_line_closest_point(p: &Point, line: &Line) -> Point {
    line.closest_point(p)
}

/// Zero inside (boundary inclusive within `tol.shape`), else the distance
/// to the nearest side. Works for rotated rectangles.
#[must_use]
pub fn point_to_rectangle_distance(p: &Point, rect: &Rectangle, tol: &Tolerance) -> f64 {
    if rect.contains_point(p, tol) {
        return 0.0;
    }
    rect.edges()
        .iter()
        .map(|e| e.distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

/// Zero inside (boundary inclusive within `tol.shape`), else the distance
/// to the nearest edge.
#[must_use]
pub fn point_to_polygon_distance(p: &Point, polygon: &Polygon, tol: &Tolerance) -> f64 {
    if polygon.contains_point(p, tol) {
        return 0.0;
    }
    boundary_distance(p, polygon)
}

/// Distance from `p` to the nearest polygon edge, regardless of containment.
pub(crate) fn boundary_distance(p: &Point, polygon: &Polygon) -> f64 {
    polygon
        .edges()
        .map(|e| e.distance_to_point(p))
        .fold(f64::INFINITY, f64::min)
}

/// Closest pair `(on_a, on_b)` between two segments.
///
/// Crossing segments return the crossing point twice.
#[must_use]
pub fn segments_closest_points(a: &Segment, b: &Segment, tol: &Tolerance) -> (Point, Point) {
    let (p, q) = closest_between_segments(
        a.start.xy(),
        a.end.xy(),
        b.start.xy(),
        b.end.xy(),
        tol.point,
    );
    (p.into(), q.into())
}

/// Minimum distance between two segments; zero when they cross.
#[must_use]
pub fn segments_distance(a: &Segment, b: &Segment, tol: &Tolerance) -> f64 {
    let (p, q) = segments_closest_points(a, b, tol);
    p.distance_to(&q)
}

/// Closest pair of boundary points between two polygons, with their distance.
///
/// Only boundaries are compared: a polygon nested inside another reports
/// the gap between the two outlines.
#[must_use]
pub fn polygon_nearest_points(a: &Polygon, b: &Polygon, tol: &Tolerance) -> (Point, Point, f64) {
    let mut best = (a.vertices()[0], b.vertices()[0], f64::INFINITY);
    for ea in a.edges() {
        for eb in b.edges() {
            let (p, q) = segments_closest_points(&ea, &eb, tol);
            let d = p.distance_to(&q);
            if d < best.2 {
                best = (p, q, d);
            }
        }
    }
    best
}

/// Which side of the directed segment `p` lies on.
///
/// Uses the raw cross product against `tol.point`.
#[must_use]
pub fn point_side_of_segment(p: &Point, segment: &Segment, tol: &Tolerance) -> Side {
    let (s, e) = (segment.start, segment.end);
    let turn = orient(s.x, s.y, e.x, e.y, p.x, p.y);
    if turn.abs() < tol.point {
        Side::On
    } else if turn > 0.0 {
        Side::Left
    } else {
        Side::Right
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Vector;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
        Segment::new(Point::new(ax, ay), Point::new(bx, by))
    }

    fn square(x0: f64, y0: f64, side: f64) -> Polygon {
        Polygon::new(vec![
            Point::new(x0, y0),
            Point::new(x0 + side, y0),
            Point::new(x0 + side, y0 + side),
            Point::new(x0, y0 + side),
        ])
        .unwrap()
    }

    #[test]
    fn point_segment_queries() {
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_abs_diff_eq!(point_to_segment_distance(&Point::new(1.0, 1.0), &s), 1.0, epsilon = EPS);
        assert_eq!(point_to_segment_closest_point(&Point::new(3.0, 1.0), &s), Point::new(2.0, 0.0));
    }

    #[test]
    fn point_line_queries() {
        let line = Line::new(Point::origin(), Vector::new(1.0, 1.0)).unwrap();
        let p = Point::new(2.0, 0.0);
        assert_abs_diff_eq!(point_to_line_distance(&p, &line), 2.0_f64.sqrt(), epsilon = EPS);
        let q = point_to_line_closest_point(&p, &line);
        assert_abs_diff_eq!(q.x, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(q.y, 1.0, epsilon = EPS);
    }

    #[test]
    fn polygon_distance_is_zero_inside() {
        let tol = Tolerance::default();
        let sq = square(0.0, 0.0, 4.0);
        assert_abs_diff_eq!(point_to_polygon_distance(&Point::new(2.0, 2.0), &sq, &tol), 0.0);
        assert_abs_diff_eq!(point_to_polygon_distance(&Point::new(7.0, 2.0), &sq, &tol), 3.0, epsilon = EPS);
        assert_abs_diff_eq!(boundary_distance(&Point::new(2.0, 1.0), &sq), 1.0, epsilon = EPS);
    }

    #[test]
    fn rectangle_distance_with_rotation() {
        let tol = Tolerance::default();
        let diamond =
            Rectangle::from_center_and_size(Point::origin(), 2.0, 2.0, &Vector::new(1.0, 1.0)).unwrap();
        assert_abs_diff_eq!(point_to_rectangle_distance(&Point::origin(), &diamond, &tol), 0.0);
        // The corner of the diamond sits on +x at sqrt(2).
        let d = point_to_rectangle_distance(&Point::new(3.0, 0.0), &diamond, &tol);
        assert_abs_diff_eq!(d, 3.0 - 2.0_f64.sqrt(), epsilon = EPS);
    }

    #[test]
    fn parallel_segments_closest_pair() {
        let tol = Tolerance::default();
        let a = seg(0.0, 0.0, 2.0, 0.0);
        let b = seg(1.0, 2.0, 3.0, 2.0);
        let (p, q) = segments_closest_points(&a, &b, &tol);
        assert!(p.approx_eq(&Point::new(1.0, 0.0), &tol));
        assert!(q.approx_eq(&Point::new(1.0, 2.0), &tol));
        assert_abs_diff_eq!(segments_distance(&a, &b, &tol), 2.0, epsilon = EPS);
    }

    #[test]
    fn crossing_segments_have_zero_distance() {
        let tol = Tolerance::default();
        let d = segments_distance(&seg(0.0, 0.0, 2.0, 2.0), &seg(0.0, 2.0, 2.0, 0.0), &tol);
        assert_abs_diff_eq!(d, 0.0, epsilon = EPS);
    }

    #[test]
    fn nearest_points_between_squares() {
        let tol = Tolerance::default();
        let a = square(0.0, 0.0, 1.0);
        let b = square(3.0, 0.0, 1.0);
        let (p, q, d) = polygon_nearest_points(&a, &b, &tol);
        assert_abs_diff_eq!(d, 2.0, epsilon = EPS);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(q.x, 3.0, epsilon = EPS);
    }

    #[test]
    fn sides_of_segment() {
        let tol = Tolerance::default();
        let s = seg(0.0, 0.0, 2.0, 0.0);
        assert_eq!(point_side_of_segment(&Point::new(1.0, 1.0), &s, &tol), Side::Left);
        assert_eq!(point_side_of_segment(&Point::new(1.0, -1.0), &s, &tol), Side::Right);
        assert_eq!(point_side_of_segment(&Point::new(5.0, 0.0), &s, &tol), Side::On);
    }
}
