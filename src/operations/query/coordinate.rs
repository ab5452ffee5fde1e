use crate::geometry::Point;
use crate::math::distance_2d::point_to_line_dist;
use crate::math::{Tolerance, POINT_TOLERANCE};

use super::angle::polar_angle;

/// `(r, angle_deg)` of `point` around `reference`, angle in `[0, 360)`.
///
/// A point on the reference gives `(0, 0)`.
#[must_use]
pub fn cartesian_to_polar(point: &Point, reference: &Point) -> (f64, f64) {
    let r = point.distance_to(reference);
    if r < POINT_TOLERANCE {
        return (0.0, 0.0);
    }
    (r, polar_angle(point, reference))
}

#[must_use]
pub fn polar_to_cartesian(r: f64, angle_deg: f64, reference: &Point) -> Point {
    let (s, c) = angle_deg.to_radians().sin_cos();
    Point::new(reference.x + r * c, reference.y + r * s)
}

/// Points ordered by polar angle around `reference`, nearer first on ties.
///
/// Counter-clockwise from +x by default; `clockwise` reverses the order.
#[must_use]
pub fn sort_points_by_angle(points: &[Point], reference: &Point, clockwise: bool) -> Vec<Point> {
    let mut keyed: Vec<(f64, f64, Point)> = points
        .iter()
        .map(|p| {
            let (r, angle) = cartesian_to_polar(p, reference);
            (angle, r, *p)
        })
        .collect();
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));
    if clockwise {
        keyed.reverse();
    }
    keyed.into_iter().map(|(_, _, p)| p).collect()
}

/// `true` when every point lies within `tol.point` of one line.
///
/// Fewer than three points, or points that all coincide, are collinear.
#[must_use]
pub fn are_collinear(points: &[Point], tol: &Tolerance) -> bool {
    let Some(origin) = points.first() else {
        return true;
    };
    let Some(far) = points.iter().find(|p| p.distance_to(origin) >= tol.point) else {
        return true;
    };
    let len = far.distance_to(origin);
    let (dx, dy) = ((far.x - origin.x) / len, (far.y - origin.y) / len);
    points
        .iter()
        .all(|p| point_to_line_dist(p.x, p.y, origin.x, origin.y, dx, dy) <= tol.point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-9;

    #[test]
    fn polar_round_trip_about_reference() {
        let reference = Point::new(1.0, 1.0);
        let (r, a) = cartesian_to_polar(&Point::new(1.0, 4.0), &reference);
        assert_abs_diff_eq!(r, 3.0, epsilon = EPS);
        assert_abs_diff_eq!(a, 90.0, epsilon = EPS);
        let back = polar_to_cartesian(r, a, &reference);
        assert_abs_diff_eq!(back.x, 1.0, epsilon = EPS);
        assert_abs_diff_eq!(back.y, 4.0, epsilon = EPS);
        assert_eq!(cartesian_to_polar(&reference, &reference), (0.0, 0.0));
    }

    #[test]
    fn sorting_by_angle() {
        let o = Point::origin();
        let pts = [
            Point::new(0.0, -1.0),
            Point::new(2.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
        ];
        let ccw = sort_points_by_angle(&pts, &o, false);
        assert_eq!(
            ccw,
            vec![
                Point::new(1.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
                Point::new(0.0, -1.0),
            ]
        );
        let cw = sort_points_by_angle(&pts, &o, true);
        assert_eq!(cw[0], Point::new(0.0, -1.0));
        assert_eq!(cw[4], Point::new(1.0, 0.0));
        assert!(sort_points_by_angle(&[], &o, false).is_empty());
    }

    #[test]
    fn collinearity() {
        let tol = Tolerance::default();
        let line = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(-3.0, -3.0)];
        assert!(are_collinear(&line, &tol));
        let bent = [Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.1)];
        assert!(!are_collinear(&bent, &tol));
        // Duplicates of the first point do not fix the direction.
        let dup = [Point::new(0.0, 0.0), Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(5.0, 0.0)];
        assert!(are_collinear(&dup, &tol));
        assert!(are_collinear(&[Point::origin()], &tol));
        assert!(are_collinear(&[], &tol));
    }
}
