use crate::geometry::{Point, Polygon, Vector};
use crate::math::{Tolerance, POINT_TOLERANCE};

/// Unsigned angle between two vectors in radians, in `[0, π]`.
///
/// Returns `None` if either vector is zero.
#[must_use]
pub fn angle_between_rad(a: &Vector, b: &Vector) -> Option<f64> {
    if a.length_squared() <= 0.0 || b.length_squared() <= 0.0 {
        return None;
    }
    Some(a.cross(b).abs().atan2(a.dot(b)))
}

/// Unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `None` if either vector is zero.
#[must_use]
pub fn angle_between(a: &Vector, b: &Vector) -> Option<f64> {
    angle_between_rad(a, b).map(f64::to_degrees)
}

/// `|â × b̂| < tol.point`. Vectors shorter than `tol.point` are never parallel.
#[must_use]
pub fn are_parallel(a: &Vector, b: &Vector, tol: &Tolerance) -> bool {
    match (a.normalized(tol), b.normalized(tol)) {
        (Some(ua), Some(ub)) => ua.cross(&ub).abs() < tol.point,
        _ => false,
    }
}

/// `|â · b̂| < tol.point`. Vectors shorter than `tol.point` are never perpendicular.
#[must_use]
pub fn are_perpendicular(a: &Vector, b: &Vector, tol: &Tolerance) -> bool {
    match (a.normalized(tol), b.normalized(tol)) {
        (Some(ua), Some(ub)) => ua.dot(&ub).abs() < tol.point,
        _ => false,
    }
}

/// Counter-clockwise angle at `vertex` sweeping from `p1` to `p3`, in
/// degrees in `[0, 360)`.
///
/// Returns `None` when either arm is shorter than the point tolerance.
#[must_use]
pub fn angle_at_vertex(p1: &Point, vertex: &Point, p3: &Point) -> Option<f64> {
    let from = *p1 - *vertex;
    let to = *p3 - *vertex;
    if from.length() < POINT_TOLERANCE || to.length() < POINT_TOLERANCE {
        return None;
    }
    let sweep = (to.angle_deg()? - from.angle_deg()?).rem_euclid(360.0);
    Some(if sweep >= 360.0 { 0.0 } else { sweep })
}

/// Interior angle at each vertex in degrees, in vertex order.
///
/// Either winding is accepted. Reflex vertices report angles above 180; a
/// vertex repeated back to back reports 0.
#[must_use]
pub fn polygon_vertex_angles(polygon: &Polygon) -> Vec<f64> {
    let vertices = polygon.vertices();
    let n = vertices.len();
    let ccw = polygon.signed_area() >= 0.0;
    (0..n)
        .map(|i| {
            let prev = &vertices[(i + n - 1) % n];
            let next = &vertices[(i + 1) % n];
            match angle_at_vertex(prev, &vertices[i], next) {
                Some(sweep) if ccw => (360.0 - sweep) % 360.0,
                Some(sweep) => sweep,
                None => 0.0,
            }
        })
        .collect()
}

/// Direction of `point` seen from `reference`, in degrees in `[0, 360)`.
/// Coincident points give 0.
#[must_use]
pub fn polar_angle(point: &Point, reference: &Point) -> f64 {
    let v = *point - *reference;
    if v.length() < POINT_TOLERANCE {
        return 0.0;
    }
    v.angle_deg().unwrap_or(0.0)
}
